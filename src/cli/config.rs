use std::path::{Path, PathBuf};

use clap::Parser;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::builder::ReportConfig;
use crate::report::report_model::ReportMetadata;
use crate::screenshots::mapping::StepMapping;

pub const DEFAULT_CONFIG_FILE: &str = "bdd-report.yaml";
pub const DEFAULT_REPORTS_ROOT: &str = "reports";

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "bdd-report",
    version,
    about = "Build an HTML report from Playwright BDD results and step screenshots"
)]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: bdd-report.yaml in current dir)
    #[arg(long)]
    pub config: Option<String>,

    /// Base directory holding test-results/, screenshots/ and bdd-reports/
    #[arg(long)]
    pub reports_root: Option<PathBuf>,

    /// Playwright JSON results file
    #[arg(long)]
    pub results: Option<PathBuf>,

    /// Directory of step screenshots
    #[arg(long)]
    pub screenshots: Option<PathBuf>,

    /// Output HTML file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Skip writing cucumber-results.json
    #[arg(long)]
    pub no_cucumber: bool,
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `bdd-report.yaml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub metadata: ReportMetadata,
    /// Replaces the built-in step mapping table when present
    #[serde(default)]
    pub step_mapping: Option<StepMapping>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    #[serde(default = "default_reports_root")]
    pub reports_root: PathBuf,
    pub results: Option<PathBuf>,
    pub screenshots: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub test_results_dir: Option<PathBuf>,
    pub cucumber: Option<PathBuf>,
    #[serde(default = "default_true")]
    pub write_cucumber: bool,
    /// Screenshot link prefix; derived from the output and screenshot paths
    /// when absent
    pub link_base: Option<String>,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            reports_root: default_reports_root(),
            results: None,
            screenshots: None,
            output: None,
            test_results_dir: None,
            cucumber: None,
            write_cucumber: true,
            link_base: None,
        }
    }
}

// Serde default helpers
fn default_reports_root() -> PathBuf { PathBuf::from(DEFAULT_REPORTS_ROOT) }
fn default_true() -> bool { true }

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if the file is missing,
/// unreadable or malformed; the last two are reported as warnings.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or(DEFAULT_CONFIG_FILE);
    match std::fs::read_to_string(config_path) {
        Ok(content) => parse_config(&content).unwrap_or_else(|e| {
            warn!("Ignoring malformed config {}: {}", config_path, e);
            AppConfig::default()
        }),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => AppConfig::default(),
        Err(e) => {
            warn!("Ignoring unreadable config {}: {}", config_path, e);
            AppConfig::default()
        }
    }
}

pub fn parse_config(content: &str) -> Result<AppConfig, serde_yaml::Error> {
    serde_yaml::from_str(content)
}

// ============================================================================
// Config Builders (merge CLI args with config file)
// ============================================================================

/// Resolve the builder configuration: CLI > config file > defaults.
pub fn build_report_config(cli: &Cli, config: &AppConfig) -> ReportConfig {
    let paths = &config.paths;
    let root: &Path = cli.reports_root.as_deref().unwrap_or(paths.reports_root.as_path());
    let defaults = ReportConfig::under_root(root);

    let pick = |flag: &Option<PathBuf>, file: &Option<PathBuf>, fallback: PathBuf| {
        flag.clone().or_else(|| file.clone()).unwrap_or(fallback)
    };

    let cucumber_file = if cli.no_cucumber || !paths.write_cucumber {
        None
    } else {
        paths.cucumber.clone().or(defaults.cucumber_file)
    };

    ReportConfig {
        results_file: pick(&cli.results, &paths.results, defaults.results_file),
        screenshots_dir: pick(&cli.screenshots, &paths.screenshots, defaults.screenshots_dir),
        output_file: pick(&cli.output, &paths.output, defaults.output_file),
        test_results_dir: paths
            .test_results_dir
            .clone()
            .unwrap_or(defaults.test_results_dir),
        cucumber_file,
        link_base: paths.link_base.clone(),
        metadata: config.metadata.clone(),
        mapping: config.step_mapping.clone().unwrap_or_default(),
    }
}
