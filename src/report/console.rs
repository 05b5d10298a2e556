use crate::report::report_model::AggregateStatistics;
use crate::results::flatten::{ScenarioRecord, ScenarioStatus};

// ============================================================================
// Console reporter: formatted terminal output
// ============================================================================

/// Format the scenario results for terminal output.
///
/// Produces output like:
/// ```text
/// === BDD Results ===
///
/// ✓ PASS  Successful login with valid credentials (1.20s)
/// ✗ FAIL  Login with invalid credentials (0.90s)
///     [ERROR] auth failed
///
/// === Results: 1 passed, 1 failed, 0 skipped (2 total) in 2.1s ===
/// ```
pub fn format_console_report(records: &[ScenarioRecord], stats: &AggregateStatistics) -> String {
    let mut out = String::new();

    out.push_str("=== BDD Results ===\n\n");

    for record in records {
        let marker = match record.status {
            ScenarioStatus::Passed => "\u{2713} PASS",
            ScenarioStatus::Failed => "\u{2717} FAIL",
            ScenarioStatus::Skipped => "- SKIP",
        };

        out.push_str(&format!(
            "{}  {} ({:.2}s)\n",
            marker,
            record.title,
            record.duration_ms as f64 / 1000.0
        ));

        if let Some(ref error) = record.error_message {
            // first line only, full message is in the HTML report
            let first_line = error.lines().next().unwrap_or_default();
            out.push_str(&format!("    [ERROR] {}\n", first_line));
        }
    }

    out.push_str(&format!(
        "\n=== Results: {} passed, {} failed, {} skipped ({} total) in {:.1}s ===\n",
        stats.passed,
        stats.failed,
        stats.skipped,
        stats.total,
        stats.total_duration_ms as f64 / 1000.0
    ));

    out
}
