use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::results::playwright::{RunResult, SpecNode, SuiteNode};

/// Outcome of a scenario as shown in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioStatus {
    Passed,
    Failed,
    Skipped,
}

impl ScenarioStatus {
    /// Map a Playwright attempt status onto the report vocabulary.
    ///
    /// Only `passed` and `failed` are recognised; `timedOut`, `interrupted`
    /// and anything else count as skipped.
    pub fn from_playwright(status: &str) -> Self {
        match status {
            "passed" => ScenarioStatus::Passed,
            "failed" => ScenarioStatus::Failed,
            _ => ScenarioStatus::Skipped,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScenarioStatus::Passed => "passed",
            ScenarioStatus::Failed => "failed",
            ScenarioStatus::Skipped => "skipped",
        }
    }
}

impl std::fmt::Display for ScenarioStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One flattened spec result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioRecord {
    pub title: String,
    pub status: ScenarioStatus,
    pub duration_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl ScenarioRecord {
    /// Build a record from a spec node.
    ///
    /// The first attempt decides status, duration and error. Without any
    /// attempt the scenario counts as skipped.
    pub fn from_spec(spec: &SpecNode) -> Self {
        let attempt = spec.first_attempt();

        let status = attempt
            .and_then(|a| a.status.as_deref())
            .map(ScenarioStatus::from_playwright)
            .unwrap_or(ScenarioStatus::Skipped);

        let duration_ms = attempt
            .and_then(|a| a.duration)
            .filter(|d| d.is_finite() && *d > 0.0)
            .map(|d| d.round() as u64)
            .unwrap_or(0);

        Self {
            title: spec.title.clone(),
            status,
            duration_ms,
            error_message: attempt.and_then(|a| a.error_message()).map(str::to_string),
            tags: spec.tags.clone(),
        }
    }
}

/// Flatten the suite tree into one record per spec.
///
/// Pre-order: a suite's own specs come before anything from its child
/// suites, and children are visited in listed order.
pub fn flatten_suites(root: &RunResult) -> Vec<ScenarioRecord> {
    let mut records = Vec::new();
    for suite in &root.suites {
        collect_suite(suite, &mut records);
    }
    records
}

fn collect_suite(suite: &SuiteNode, records: &mut Vec<ScenarioRecord>) {
    if !suite.specs.is_empty() {
        debug!("Processing suite: {}", suite.title);
    }

    for spec in &suite.specs {
        let record = ScenarioRecord::from_spec(spec);
        debug!(
            "Scenario: {} - Status: {} - Duration: {}ms",
            record.title, record.status, record.duration_ms
        );
        records.push(record);
    }

    for child in &suite.suites {
        collect_suite(child, records);
    }
}
