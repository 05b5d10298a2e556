use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{ReportError, ReportResult};

// ============================================================================
// Playwright JSON reporter schema
// ============================================================================

/// Root of a Playwright `results.json` document.
///
/// Only `suites` is required. Every other field the reporter may omit is
/// defaulted so a sparse document still flattens cleanly.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RunResult {
    pub suites: Vec<SuiteNode>,

    #[serde(default)]
    pub stats: Option<RunStats>,

    #[serde(default)]
    pub config: Option<RunConfig>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct RunConfig {
    #[serde(default)]
    pub version: Option<String>,
}

/// Run-level counters as reported by Playwright itself.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RunStats {
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default)]
    pub expected: Option<u32>,
    #[serde(default)]
    pub unexpected: Option<u32>,
    #[serde(default)]
    pub flaky: Option<u32>,
    #[serde(default)]
    pub skipped: Option<u32>,
}

/// A grouping node: a feature file, a `describe` block, or a project root.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct SuiteNode {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub file: Option<String>,

    #[serde(default)]
    pub specs: Vec<SpecNode>,

    #[serde(default)]
    pub suites: Vec<SuiteNode>,
}

/// A single scenario. Playwright nests attempts one level down, under
/// `tests[].results[]`.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct SpecNode {
    pub title: String,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub tests: Vec<TestEntry>,
}

/// One project's execution of a spec.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TestEntry {
    #[serde(default)]
    pub project_name: Option<String>,

    /// Outcome across all attempts (`expected`, `unexpected`, `flaky`, `skipped`)
    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub results: Vec<Attempt>,
}

/// One execution attempt; retries append further attempts.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Attempt {
    #[serde(default)]
    pub status: Option<String>,

    /// Milliseconds
    #[serde(default)]
    pub duration: Option<f64>,

    #[serde(default)]
    pub error: Option<AttemptError>,

    #[serde(default)]
    pub errors: Vec<AttemptError>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AttemptError {
    #[serde(default)]
    pub message: Option<String>,
}

impl Attempt {
    /// First available error message: `error.message`, then `errors[].message`.
    pub fn error_message(&self) -> Option<&str> {
        self.error
            .as_ref()
            .and_then(|e| e.message.as_deref())
            .or_else(|| self.errors.iter().find_map(|e| e.message.as_deref()))
    }
}

impl SpecNode {
    /// The attempt whose outcome represents this spec.
    pub fn first_attempt(&self) -> Option<&Attempt> {
        self.tests.first().and_then(|t| t.results.first())
    }
}

impl RunResult {
    /// Total number of spec nodes at any depth.
    pub fn spec_count(&self) -> usize {
        fn count(suite: &SuiteNode) -> usize {
            suite.specs.len() + suite.suites.iter().map(count).sum::<usize>()
        }
        self.suites.iter().map(count).sum()
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Parse a results document from a JSON string.
pub fn parse_run_result(content: &str, path: &Path) -> ReportResult<RunResult> {
    serde_json::from_str(content).map_err(|source| ReportError::InputMalformed {
        path: path.to_path_buf(),
        source,
    })
}

/// Read and parse the results document at `path`.
pub fn load_run_result(path: &Path) -> ReportResult<RunResult> {
    let content = std::fs::read_to_string(path).map_err(|source| ReportError::InputUnreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let run = parse_run_result(&content, path)?;

    if let Some(stats) = &run.stats {
        info!(
            expected = stats.expected.unwrap_or(0),
            unexpected = stats.unexpected.unwrap_or(0),
            flaky = stats.flaky.unwrap_or(0),
            skipped = stats.skipped.unwrap_or(0),
            "Processing test results"
        );
    }
    if let Some(version) = run.config.as_ref().and_then(|c| c.version.as_deref()) {
        debug!("Results produced by Playwright {}", version);
    }

    Ok(run)
}
