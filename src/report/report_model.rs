use serde::{Deserialize, Serialize};

use crate::results::flatten::{ScenarioRecord, ScenarioStatus};

// ============================================================================
// Aggregate statistics: computed once per report build
// ============================================================================

/// Counters and timings over all scenarios in a run.
///
/// `passed + failed + skipped == total` always holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateStatistics {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
    pub total_duration_ms: u64,
    /// Zero when there are no scenarios
    pub average_duration_ms: f64,
}

impl AggregateStatistics {
    /// Whether no scenario failed.
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// Percentage of passed scenarios, zero for an empty run.
    pub fn success_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.passed as f64 / self.total as f64 * 100.0
    }
}

/// Aggregate a list of scenario records.
pub fn compute_statistics(records: &[ScenarioRecord]) -> AggregateStatistics {
    let count = |status: ScenarioStatus| records.iter().filter(|r| r.status == status).count();

    let total = records.len();
    let total_duration_ms: u64 = records.iter().map(|r| r.duration_ms).sum();
    let average_duration_ms = if total == 0 {
        0.0
    } else {
        total_duration_ms as f64 / total as f64
    };

    AggregateStatistics {
        total,
        passed: count(ScenarioStatus::Passed),
        failed: count(ScenarioStatus::Failed),
        skipped: count(ScenarioStatus::Skipped),
        total_duration_ms,
        average_duration_ms,
    }
}

// ============================================================================
// Report metadata: descriptive labels shown in the header
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportMetadata {
    pub title: String,
    pub app_name: String,
    pub environment: String,
    pub browser: String,
    pub platform: String,
    pub team: String,
}

impl Default for ReportMetadata {
    fn default() -> Self {
        Self {
            title: "Sharedo BDD Test Report".to_string(),
            app_name: "Sharedo Platform".to_string(),
            environment: "Release".to_string(),
            browser: "Chromium".to_string(),
            platform: std::env::consts::OS.to_string(),
            team: "Return of the Mac".to_string(),
        }
    }
}

/// Format milliseconds as seconds with a fixed number of decimals.
pub fn format_seconds(ms: f64, decimals: usize) -> String {
    format!("{:.*}s", decimals, ms / 1000.0)
}
