#![allow(dead_code)]

use std::path::{Path, PathBuf};

use bdd_report::results::playwright::RunResult;
use serde_json::{Value, json};

pub const VALID: &str = "Successful login with valid credentials";
pub const INVALID: &str = "Login with invalid credentials";

/// A Playwright spec node with a single attempt.
pub fn spec(title: &str, status: &str, duration: u64) -> Value {
    json!({
        "title": title,
        "ok": status != "failed",
        "tests": [{
            "projectName": "chromium",
            "results": [{ "status": status, "duration": duration, "retry": 0 }]
        }]
    })
}

/// A Playwright spec node whose first attempt failed with `message`.
pub fn failed_spec(title: &str, duration: u64, message: &str) -> Value {
    json!({
        "title": title,
        "ok": false,
        "tests": [{
            "projectName": "chromium",
            "results": [{
                "status": "failed",
                "duration": duration,
                "error": { "message": message }
            }]
        }]
    })
}

pub fn suite(title: &str, specs: Vec<Value>, suites: Vec<Value>) -> Value {
    json!({ "title": title, "file": "features/sharedo-login.feature", "specs": specs, "suites": suites })
}

pub fn run_json(suites: Vec<Value>) -> Value {
    json!({
        "config": { "version": "1.54.1" },
        "suites": suites,
        "stats": { "startTime": "2026-10-16T09:00:00.000Z", "duration": 2100.0, "expected": 1, "unexpected": 1, "flaky": 0, "skipped": 0 }
    })
}

pub fn run(suites: Vec<Value>) -> RunResult {
    serde_json::from_value(run_json(suites)).unwrap()
}

/// The two-scenario login run used throughout the tests.
pub fn login_run_json() -> Value {
    run_json(vec![suite(
        "sharedo-login.feature",
        vec![
            spec(VALID, "passed", 1200),
            failed_spec(INVALID, 900, "auth failed"),
        ],
        vec![],
    )])
}

pub fn write_results(root: &Path, value: &Value) -> PathBuf {
    let dir = root.join("test-results");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("results.json");
    std::fs::write(&path, serde_json::to_string_pretty(value).unwrap()).unwrap();
    path
}

/// Create empty files named `names` inside `dir`.
pub fn touch_all(dir: &Path, names: &[&str]) {
    std::fs::create_dir_all(dir).unwrap();
    for name in names {
        std::fs::write(dir.join(name), b"\x89PNG").unwrap();
    }
}
