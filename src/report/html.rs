use std::path::{Component, Path, PathBuf};

use serde::Serialize;

use crate::error::{ReportError, ReportResult};
use crate::report::markup::{Element, escape_json_for_script};
use crate::report::report_model::{AggregateStatistics, ReportMetadata, format_seconds};
use crate::report::template::{CHART_JS_URL, SCRIPT, STYLE, chart_script};
use crate::results::flatten::{ScenarioRecord, ScenarioStatus};
use crate::screenshots::discover::ScreenshotAsset;
use crate::screenshots::mapping::{ScenarioSteps, StepEntry};

// ============================================================================
// HTML reporter: self-contained BDD report with screenshot gallery
// ============================================================================

/// Everything derived from the run that the report displays.
#[derive(Debug, Clone, Copy)]
pub struct RenderInput<'a> {
    pub records: &'a [ScenarioRecord],
    pub stats: &'a AggregateStatistics,
    pub steps: &'a ScenarioSteps,
    pub assets: &'a [ScreenshotAsset],
    pub metadata: &'a ReportMetadata,
    /// Prefix for screenshot links, relative to the report file
    pub link_base: &'a str,
}

/// The two values that legitimately differ between rebuilds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderStamp {
    pub generated_at: String,
    pub cache_id: u64,
}

impl RenderStamp {
    pub fn now() -> Self {
        let now = chrono::Local::now();
        Self {
            generated_at: now.format("%Y-%m-%d %H:%M:%S").to_string(),
            cache_id: now.timestamp_millis().max(0) as u64,
        }
    }
}

#[derive(Serialize)]
struct EmbeddedData<'a> {
    stats: &'a AggregateStatistics,
    scenarios: &'a [ScenarioRecord],
    screenshots: Vec<&'a str>,
}

/// Link to a screenshot file from the report.
pub fn screenshot_href(link_base: &str, file_name: &str) -> String {
    let encoded = urlencoding::encode(file_name);
    let base = link_base.trim_end_matches('/');
    if base.is_empty() {
        encoded.into_owned()
    } else {
        format!("{}/{}", base, encoded)
    }
}

/// Lexically normalised absolute form of `path`; nothing is read from disk.
fn absolute(path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    };

    let mut out = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Link prefix that reaches `screenshots_dir` from a page in `report_dir`.
///
/// `reports/bdd-reports` and `reports/screenshots` give `../screenshots`.
/// Each segment is percent-encoded; the same directory gives an empty prefix.
pub fn relative_link_base(report_dir: &Path, screenshots_dir: &Path) -> String {
    let from = absolute(report_dir);
    let to = absolute(screenshots_dir);
    let from_parts: Vec<Component<'_>> = from.components().collect();
    let to_parts: Vec<Component<'_>> = to.components().collect();

    let common = from_parts
        .iter()
        .zip(&to_parts)
        .take_while(|(a, b)| a == b)
        .count();

    let mut segments = vec!["..".to_string(); from_parts.len() - common];
    segments.extend(to_parts[common..].iter().map(|part| {
        urlencoding::encode(&part.as_os_str().to_string_lossy()).into_owned()
    }));
    segments.join("/")
}

/// Render the full report document.
///
/// Pure: identical inputs and stamp give byte-identical output. Fails only if
/// the embedded data block cannot be serialized.
pub fn render(input: &RenderInput<'_>, stamp: &RenderStamp) -> ReportResult<String> {
    let head = Element::new("head")
        .child(Element::new("meta").attr("charset", "UTF-8"))
        .child(
            Element::new("meta")
                .attr("http-equiv", "Cache-Control")
                .attr("content", "no-cache, no-store, must-revalidate"),
        )
        .child(
            Element::new("meta")
                .attr("http-equiv", "Pragma")
                .attr("content", "no-cache"),
        )
        .child(
            Element::new("meta")
                .attr("http-equiv", "Expires")
                .attr("content", "0"),
        )
        .child(
            Element::new("meta")
                .attr("name", "viewport")
                .attr("content", "width=device-width, initial-scale=1.0"),
        )
        .child(Element::new("title").text(format!(
            "{} - {}",
            input.metadata.title, stamp.generated_at
        )))
        .child(Element::new("script").attr("src", CHART_JS_URL))
        .child(Element::new("style").raw(STYLE))
        .child(Element::new("script").raw(SCRIPT));

    let container = Element::new("div")
        .class("container")
        .child(render_header(input.metadata, stamp))
        .child(render_dashboard(input.stats))
        .child(render_summary(input.stats))
        .children(
            input
                .records
                .iter()
                .enumerate()
                .map(|(i, record)| {
                    let steps = input.steps.steps_for(&record.title);
                    render_scenario(i, record, steps, input.link_base)
                }),
        )
        .child(render_gallery(input.assets, input.link_base))
        .child(render_modal())
        .child(
            Element::new("div").class("footer").text(format!(
                "Report generated at {} | Cache ID: {} | \u{1F4F8} {} screenshots captured",
                stamp.generated_at,
                stamp.cache_id,
                input.steps.attached_count()
            )),
        );

    let data = EmbeddedData {
        stats: input.stats,
        scenarios: input.records,
        screenshots: input.assets.iter().map(|a| a.file_name.as_str()).collect(),
    };
    let data_json = serde_json::to_string(&data).map_err(|source| ReportError::Serialize {
        context: "report data block".to_string(),
        source,
    })?;

    let body = Element::new("body")
        .child(container)
        .child(
            Element::new("script")
                .attr("type", "application/json")
                .id("report-data")
                .raw(escape_json_for_script(&data_json)),
        )
        .child(Element::new("script").raw(chart_script(
            input.stats.passed,
            input.stats.failed,
            input.stats.skipped,
        )));

    let html = Element::new("html").attr("lang", "en").child(head).child(body);

    let mut out = String::with_capacity(32_768);
    out.push_str("<!DOCTYPE html>\n");
    html.render_into(&mut out);
    Ok(out)
}

fn render_header(metadata: &ReportMetadata, stamp: &RenderStamp) -> Element {
    let tags = [
        ("App Name", &metadata.app_name),
        ("Test Environment", &metadata.environment),
        ("Browser", &metadata.browser),
        ("Platform", &metadata.platform),
    ];

    Element::new("div")
        .class("header")
        .child(Element::new("h1").text(format!("\u{1F952} {}", metadata.title)))
        .child(Element::new("p").text(format!(
            "Team: {} | Generated: {}",
            metadata.team, stamp.generated_at
        )))
        .child(
            Element::new("div").class("metadata").children(
                tags.iter()
                    .filter(|(_, value)| !value.is_empty())
                    .map(|(label, value)| {
                        Element::new("span").text(format!("{}: {}", label, value))
                    }),
            ),
        )
        .child(
            Element::new("div")
                .class("timestamp")
                .text(format!("Cache ID: {}", stamp.cache_id)),
        )
}

fn stat_card(value: String, class: &str, label: &str) -> Element {
    Element::new("div")
        .class("stat-card")
        .child(
            Element::new("div")
                .class(format!("stat-number {}", class))
                .text(value),
        )
        .child(Element::new("div").class("stat-label").text(label))
}

fn render_dashboard(stats: &AggregateStatistics) -> Element {
    Element::new("div")
        .class("stats-dashboard")
        .child(
            Element::new("div")
                .class("stats-cards")
                .child(stat_card(stats.total.to_string(), "stat-total", "Total Tests"))
                .child(stat_card(stats.passed.to_string(), "stat-passed", "Passed"))
                .child(stat_card(stats.failed.to_string(), "stat-failed", "Failed"))
                .child(stat_card(stats.skipped.to_string(), "stat-skipped", "Skipped"))
                .child(stat_card(
                    format_seconds(stats.total_duration_ms as f64, 1),
                    "stat-duration",
                    "Total Duration",
                )),
        )
        .child(
            Element::new("div")
                .class("chart-container")
                .child(Element::new("canvas").id("resultsChart")),
        )
}

fn render_summary(stats: &AggregateStatistics) -> Element {
    Element::new("div")
        .class("summary")
        .child(
            Element::new("div")
                .class("summary-bar")
                .child(Element::new("h2").text("\u{1F4CB} Test Scenarios"))
                .child(
                    Element::new("div")
                        .child(
                            Element::new("button")
                                .attr("onclick", "expandAll()")
                                .text("Expand All"),
                        )
                        .child(
                            Element::new("button")
                                .attr("onclick", "collapseAll()")
                                .text("Collapse All"),
                        ),
                ),
        )
        .child(
            Element::new("p")
                .child(Element::new("strong").text("Success Rate:"))
                .text(format!(" {:.1}% | ", stats.success_rate()))
                .child(Element::new("strong").text("Average Duration:"))
                .text(format!(
                    " {} per test",
                    format_seconds(stats.average_duration_ms, 2)
                )),
        )
}

fn status_icon(status: ScenarioStatus) -> &'static str {
    match status {
        ScenarioStatus::Passed => "\u{2705}",
        ScenarioStatus::Failed => "\u{274C}",
        ScenarioStatus::Skipped => "\u{23F8}\u{FE0F}",
    }
}

fn render_scenario(
    index: usize,
    record: &ScenarioRecord,
    steps: &[StepEntry],
    link_base: &str,
) -> Element {
    let status = record.status.as_str();

    let header = Element::new("div")
        .class("scenario-header")
        .attr("onclick", format!("toggleSteps({})", index))
        .child(Element::new("h3").text(format!("{} {}", status_icon(record.status), record.title)))
        .child(
            Element::new("div")
                .class("scenario-meta")
                .child(
                    Element::new("span")
                        .class("status")
                        .text(format!("Status: {}", status.to_uppercase())),
                )
                .child(Element::new("span").class("duration").text(format!(
                    "Duration: {}",
                    format_seconds(record.duration_ms as f64, 2)
                )))
                .child(
                    Element::new("span")
                        .class("expand-icon")
                        .id(format!("expand-{}", index))
                        .text("\u{25BC}"),
                ),
        );

    let mut body = Element::new("div")
        .class("scenario-steps")
        .id(format!("steps-{}", index))
        .attr("style", "display: none;");

    if let Some(error) = &record.error_message {
        body = body.child(Element::new("div").class("scenario-error").text(error.as_str()));
    }

    body = body
        .child(Element::new("h4").text(format!(
            "\u{1F4CB} Test Steps ({} steps)",
            steps.len()
        )))
        .children(steps.iter().map(|step| render_step(step, link_base)));

    Element::new("div")
        .class(format!("scenario {}", status))
        .child(header)
        .child(body)
}

fn render_step(step: &StepEntry, link_base: &str) -> Element {
    let href = screenshot_href(link_base, &step.screenshot);
    let status = step.status.as_str();

    Element::new("div")
        .class("step")
        .child(
            Element::new("div")
                .class("step-header")
                .child(Element::new("span").class("step-icon").text("\u{1F4CD}"))
                .child(Element::new("span").class("step-name").text(step.name.as_str()))
                .child(
                    Element::new("span")
                        .class(format!("step-status {}", status))
                        .text(status.to_uppercase()),
                ),
        )
        .child(
            Element::new("div").class("step-screenshot").child(
                Element::new("img")
                    .attr("src", href.clone())
                    .attr("alt", step.name.as_str())
                    .attr("data-src", href),
            ),
        )
}

fn render_gallery(assets: &[ScreenshotAsset], link_base: &str) -> Element {
    let gallery = Element::new("div")
        .class("screenshot-gallery")
        .child(Element::new("h2").text("\u{1F4F8} Test Screenshots"));

    if assets.is_empty() {
        return gallery.child(Element::new("p").text("No screenshots available for this test run."));
    }

    gallery
        .child(Element::new("p").text("Click on any screenshot to view full size:"))
        .children(assets.iter().map(|asset| {
            let href = screenshot_href(link_base, &asset.file_name);
            let label = asset.step_label();
            Element::new("div")
                .class("screenshot")
                .child(
                    Element::new("img")
                        .attr("src", href.clone())
                        .attr("alt", label.clone())
                        .attr("data-src", href),
                )
                .child(Element::new("div").class("screenshot-title").text(label))
        }))
}

fn render_modal() -> Element {
    Element::new("div")
        .id("modal")
        .class("modal")
        .attr("onclick", "closeModal()")
        .child(
            Element::new("span")
                .class("close")
                .attr("onclick", "closeModal()")
                .text("\u{00D7}"),
        )
        .child(Element::new("img").class("modal-content").id("modal-img"))
}
