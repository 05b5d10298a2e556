use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::ReportResult;
use crate::report::cucumber::to_cucumber;
use crate::report::html::{RenderInput, RenderStamp, relative_link_base, render};
use crate::report::output::{ensure_dir, write_json, write_report};
use crate::report::report_model::{AggregateStatistics, ReportMetadata, compute_statistics};
use crate::results::flatten::{ScenarioRecord, flatten_suites};
use crate::results::playwright::load_run_result;
use crate::screenshots::discover::discover_screenshots;
use crate::screenshots::mapping::{StepMapping, map_screenshots_to_scenarios};

/// Where the builder reads from and writes to, plus what it labels.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    pub results_file: PathBuf,
    pub screenshots_dir: PathBuf,
    pub output_file: PathBuf,
    /// Created alongside the report directory if absent
    pub test_results_dir: PathBuf,
    /// Cucumber JSON export; `None` disables it
    pub cucumber_file: Option<PathBuf>,
    /// Screenshot link prefix as seen from the report file; `None` derives
    /// it from the output and screenshot paths
    pub link_base: Option<String>,
    pub metadata: ReportMetadata,
    pub mapping: StepMapping,
}

impl ReportConfig {
    /// Standard layout under a reports root:
    ///
    /// ```text
    /// <root>/test-results/results.json
    /// <root>/test-results/cucumber-results.json
    /// <root>/screenshots/
    /// <root>/bdd-reports/bdd-report.html
    /// ```
    pub fn under_root(root: &Path) -> Self {
        let test_results_dir = root.join("test-results");
        Self {
            results_file: test_results_dir.join("results.json"),
            screenshots_dir: root.join("screenshots"),
            output_file: root.join("bdd-reports").join("bdd-report.html"),
            cucumber_file: Some(test_results_dir.join("cucumber-results.json")),
            test_results_dir,
            link_base: None,
            metadata: ReportMetadata::default(),
            mapping: StepMapping::default(),
        }
    }
}

/// Outcome of a successful build.
#[derive(Debug, Clone)]
pub struct BuildSummary {
    pub records: Vec<ScenarioRecord>,
    pub stats: AggregateStatistics,
    pub screenshot_count: usize,
    pub attached_count: usize,
    pub output_file: PathBuf,
    pub report_bytes: u64,
    pub cucumber_file: Option<PathBuf>,
}

/// Single-pass pipeline: read, flatten, aggregate, map, render, write.
#[derive(Debug, Clone)]
pub struct ReportBuilder {
    config: ReportConfig,
}

impl ReportBuilder {
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Prefix used for every screenshot link in the report.
    pub fn link_base(&self) -> String {
        match &self.config.link_base {
            Some(base) => base.clone(),
            None => {
                let report_dir = self.config.output_file.parent().unwrap_or(Path::new(""));
                relative_link_base(report_dir, &self.config.screenshots_dir)
            }
        }
    }

    /// Build the report and write every artifact.
    ///
    /// Fails only when the results document cannot be read or an output
    /// cannot be written. A missing screenshot directory just means an empty
    /// gallery.
    pub fn build(&self, stamp: &RenderStamp) -> ReportResult<BuildSummary> {
        let config = &self.config;

        let report_dir = config.output_file.parent().unwrap_or(Path::new(""));
        ensure_dir(report_dir)?;
        ensure_dir(&config.test_results_dir)?;

        let run = load_run_result(&config.results_file)?;
        let records = flatten_suites(&run);
        info!("Total scenarios extracted: {}", records.len());

        let cucumber_file = match &config.cucumber_file {
            Some(path) => {
                let uri = run
                    .suites
                    .iter()
                    .find_map(|s| s.file.as_deref())
                    .unwrap_or_default();
                let features = to_cucumber(&records, &config.metadata, uri);
                write_json(path, &features, "cucumber results")?;
                Some(path.clone())
            }
            None => None,
        };

        let assets = discover_screenshots(&config.screenshots_dir);
        let steps = map_screenshots_to_scenarios(&assets, &config.mapping);
        let stats = compute_statistics(&records);
        let link_base = self.link_base();

        let input = RenderInput {
            records: &records,
            stats: &stats,
            steps: &steps,
            assets: &assets,
            metadata: &config.metadata,
            link_base: &link_base,
        };
        let html = render(&input, stamp)?;
        let report_bytes = write_report(&config.output_file, &html)?;

        Ok(BuildSummary {
            screenshot_count: assets.len(),
            attached_count: steps.attached_count(),
            records,
            stats,
            output_file: config.output_file.clone(),
            report_bytes,
            cucumber_file,
        })
    }
}
