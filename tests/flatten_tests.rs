use bdd_report::results::flatten::{ScenarioStatus, flatten_suites};
use bdd_report::results::playwright::RunResult;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::{INVALID, VALID, failed_spec, run, spec, suite};

mod common;

// ============================================================================
// 1. Flat suite: one record per spec, in order
// ============================================================================

#[test]
fn flatten_single_suite_two_specs() {
    let run = run(vec![suite(
        "login",
        vec![spec(VALID, "passed", 1200), failed_spec(INVALID, 900, "auth failed")],
        vec![],
    )]);

    let records = flatten_suites(&run);
    assert_eq!(records.len(), 2);

    assert_eq!(records[0].title, VALID);
    assert_eq!(records[0].status, ScenarioStatus::Passed);
    assert_eq!(records[0].duration_ms, 1200);
    assert_eq!(records[0].error_message, None);

    assert_eq!(records[1].title, INVALID);
    assert_eq!(records[1].status, ScenarioStatus::Failed);
    assert_eq!(records[1].duration_ms, 900);
    assert_eq!(records[1].error_message.as_deref(), Some("auth failed"));
}

// ============================================================================
// 2. Nested suites: outer suite without specs
// ============================================================================

#[test]
fn flatten_nested_suite_without_direct_specs() {
    let run = run(vec![suite(
        "outer",
        vec![],
        vec![suite("inner", vec![spec("X", "skipped", 0)], vec![])],
    )]);

    let records = flatten_suites(&run);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].title, "X");
    assert_eq!(records[0].status, ScenarioStatus::Skipped);
    assert_eq!(records[0].duration_ms, 0);
}

// ============================================================================
// 3. Deep nesting: every spec appears exactly once, pre-order
// ============================================================================

#[test]
fn flatten_deep_tree_is_complete_and_preordered() {
    let leaf = suite("d3", vec![spec("deepest", "passed", 1)], vec![]);
    let mid = suite("d2", vec![spec("mid-1", "passed", 1)], vec![leaf]);
    let sibling = suite("d2b", vec![spec("sibling", "failed", 1)], vec![]);
    let top = suite(
        "d1",
        vec![spec("top-1", "passed", 1), spec("top-2", "passed", 1)],
        vec![mid, sibling],
    );
    let second_root = suite("root-2", vec![spec("last", "passed", 1)], vec![]);

    let run = run(vec![top, second_root]);
    let titles: Vec<_> = flatten_suites(&run).into_iter().map(|r| r.title).collect();

    assert_eq!(titles, vec!["top-1", "top-2", "mid-1", "deepest", "sibling", "last"]);
    assert_eq!(titles.len(), run.spec_count());
}

#[test]
fn flatten_is_stable_across_calls() {
    let run = run(vec![suite(
        "s",
        vec![spec("a", "passed", 5)],
        vec![suite("t", vec![spec("b", "failed", 7)], vec![])],
    )]);
    assert_eq!(flatten_suites(&run), flatten_suites(&run));
}

// ============================================================================
// 4. First attempt wins over later retries
// ============================================================================

#[test]
fn flatten_uses_first_attempt_not_last() {
    let run: RunResult = serde_json::from_value(json!({
        "suites": [{
            "title": "retries",
            "specs": [{
                "title": "flaky login",
                "tests": [{
                    "status": "flaky",
                    "results": [
                        { "status": "failed", "duration": 300, "error": { "message": "first try" } },
                        { "status": "passed", "duration": 250 }
                    ]
                }]
            }]
        }]
    }))
    .unwrap();

    let records = flatten_suites(&run);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].status, ScenarioStatus::Failed);
    assert_eq!(records[0].duration_ms, 300);
    assert_eq!(records[0].error_message.as_deref(), Some("first try"));
}

// ============================================================================
// 5. Missing optional fields
// ============================================================================

#[test]
fn flatten_spec_without_tests_is_skipped() {
    let run: RunResult = serde_json::from_value(json!({
        "suites": [{ "title": "s", "specs": [{ "title": "no tests" }] }]
    }))
    .unwrap();

    let records = flatten_suites(&run);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].status, ScenarioStatus::Skipped);
    assert_eq!(records[0].duration_ms, 0);
}

#[test]
fn flatten_ignores_test_level_status_without_attempts() {
    let run: RunResult = serde_json::from_value(json!({
        "suites": [{
            "specs": [
                { "title": "expected", "tests": [{ "status": "expected", "results": [] }] },
                { "title": "unexpected", "tests": [{ "status": "unexpected" }] },
                { "title": "skipped", "tests": [{ "status": "skipped" }] }
            ]
        }]
    }))
    .unwrap();

    let statuses: Vec<_> = flatten_suites(&run).into_iter().map(|r| r.status).collect();
    assert_eq!(
        statuses,
        vec![ScenarioStatus::Skipped, ScenarioStatus::Skipped, ScenarioStatus::Skipped]
    );
}

#[test]
fn flatten_attempt_without_duration_or_status() {
    let run: RunResult = serde_json::from_value(json!({
        "suites": [{ "specs": [{ "title": "bare", "tests": [{ "results": [{}] }] }] }]
    }))
    .unwrap();

    let records = flatten_suites(&run);
    assert_eq!(records[0].status, ScenarioStatus::Skipped);
    assert_eq!(records[0].duration_ms, 0);
    assert_eq!(records[0].error_message, None);
}

#[test]
fn flatten_reads_error_from_errors_array() {
    let run: RunResult = serde_json::from_value(json!({
        "suites": [{ "specs": [{
            "title": "t",
            "tests": [{ "results": [{ "status": "timedOut", "duration": 30000, "errors": [{ "message": "Test timeout of 30000ms exceeded." }] }] }]
        }] }]
    }))
    .unwrap();

    let records = flatten_suites(&run);
    assert_eq!(records[0].status, ScenarioStatus::Skipped);
    assert_eq!(records[0].duration_ms, 30000);
    assert_eq!(
        records[0].error_message.as_deref(),
        Some("Test timeout of 30000ms exceeded.")
    );
}

#[test]
fn flatten_carries_tags() {
    let run: RunResult = serde_json::from_value(json!({
        "suites": [{ "specs": [{ "title": "tagged", "tags": ["@smoke", "@login"], "tests": [] }] }]
    }))
    .unwrap();

    assert_eq!(flatten_suites(&run)[0].tags, vec!["@smoke", "@login"]);
}

#[test]
fn flatten_empty_run() {
    let run: RunResult = serde_json::from_value(json!({ "suites": [] })).unwrap();
    assert!(flatten_suites(&run).is_empty());
}

// ============================================================================
// 6. Status vocabulary
// ============================================================================

#[test]
fn status_mapping_from_playwright() {
    assert_eq!(ScenarioStatus::from_playwright("passed"), ScenarioStatus::Passed);
    assert_eq!(ScenarioStatus::from_playwright("failed"), ScenarioStatus::Failed);
    assert_eq!(ScenarioStatus::from_playwright("skipped"), ScenarioStatus::Skipped);
    assert_eq!(ScenarioStatus::from_playwright("timedOut"), ScenarioStatus::Skipped);
    assert_eq!(ScenarioStatus::from_playwright("interrupted"), ScenarioStatus::Skipped);
    assert_eq!(ScenarioStatus::from_playwright("something-new"), ScenarioStatus::Skipped);
}

#[test]
fn test_level_vocabulary_is_not_attempt_vocabulary() {
    assert_eq!(ScenarioStatus::from_playwright("expected"), ScenarioStatus::Skipped);
    assert_eq!(ScenarioStatus::from_playwright("flaky"), ScenarioStatus::Skipped);
    assert_eq!(ScenarioStatus::from_playwright("unexpected"), ScenarioStatus::Skipped);
}

#[test]
fn timed_out_attempt_counts_as_skipped_in_statistics() {
    use bdd_report::report::report_model::compute_statistics;

    let run: RunResult = serde_json::from_value(json!({
        "suites": [{ "specs": [
            { "title": "ok", "tests": [{ "results": [{ "status": "passed", "duration": 10 }] }] },
            { "title": "slow", "tests": [{ "results": [{ "status": "timedOut", "duration": 20 }] }] }
        ] }]
    }))
    .unwrap();

    let stats = compute_statistics(&flatten_suites(&run));
    assert_eq!((stats.passed, stats.failed, stats.skipped), (1, 0, 1));
}
