use tracing::info;

use crate::builder::{BuildSummary, ReportBuilder};
use crate::cli::config::{AppConfig, Cli, build_report_config};
use crate::error::ReportResult;
use crate::report::console::format_console_report;
use crate::report::html::RenderStamp;

// ============================================================================
// generate: the only action
// ============================================================================

/// Build the report from resolved CLI/config values and print a summary.
pub fn cmd_generate(cli: &Cli, config: &AppConfig) -> ReportResult<BuildSummary> {
    let report_config = build_report_config(cli, config);

    info!(
        "Building report from {} (screenshots: {})",
        report_config.results_file.display(),
        report_config.screenshots_dir.display()
    );

    let builder = ReportBuilder::new(report_config);
    let summary = builder.build(&RenderStamp::now())?;

    print!("{}", format_console_report(&summary.records, &summary.stats));
    println!(
        "Report: {} ({} screenshots, {} attached to steps)",
        summary.output_file.display(),
        summary.screenshot_count,
        summary.attached_count
    );
    if let Some(path) = &summary.cucumber_file {
        println!("Cucumber JSON: {}", path.display());
    }

    Ok(summary)
}
