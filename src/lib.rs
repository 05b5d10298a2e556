//! Turns a Playwright BDD run (`results.json` plus step screenshots) into a
//! single self-contained HTML report.
//!
//! The pipeline is one synchronous pass:
//! read results -> flatten suites -> aggregate -> map screenshots -> render -> write.

pub mod builder;
pub mod cli;
pub mod error;
pub mod report;
pub mod results;
pub mod screenshots;

pub use builder::{BuildSummary, ReportBuilder, ReportConfig};
pub use error::{ReportError, ReportResult};
pub use report::html::{RenderInput, RenderStamp, render};
pub use report::report_model::{AggregateStatistics, compute_statistics};
pub use results::flatten::{ScenarioRecord, ScenarioStatus, flatten_suites};
pub use screenshots::discover::{ScreenshotAsset, discover_screenshots};
pub use screenshots::mapping::{StepMapping, map_screenshots_to_scenarios};

/// Install the global fmt subscriber.
///
/// `RUST_LOG` wins when set; otherwise `-v` count picks the level.
pub fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
