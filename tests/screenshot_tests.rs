use std::path::PathBuf;

use bdd_report::screenshots::discover::{ScreenshotAsset, discover_screenshots, is_image_file};
use bdd_report::screenshots::mapping::{
    MappingRule, ScenarioBucket, StepMapping, map_screenshots_to_scenarios,
};
use pretty_assertions::assert_eq;

use crate::common::{INVALID, VALID, touch_all};

mod common;

fn asset(name: &str) -> ScreenshotAsset {
    ScreenshotAsset::new(PathBuf::from("screenshots").join(name)).unwrap()
}

fn step_names(steps: &[bdd_report::screenshots::mapping::StepEntry]) -> Vec<&str> {
    steps.iter().map(|s| s.name.as_str()).collect()
}

// ============================================================================
// 1. Discovery
// ============================================================================

#[test]
fn discover_sorts_by_file_name() {
    let dir = tempfile::tempdir().unwrap();
    touch_all(
        dir.path(),
        &["03-password-entered.png", "01-page-loaded.png", "02-username-entered-pwshizz.png"],
    );

    let names: Vec<_> = discover_screenshots(dir.path())
        .into_iter()
        .map(|a| a.file_name)
        .collect();
    assert_eq!(
        names,
        vec!["01-page-loaded.png", "02-username-entered-pwshizz.png", "03-password-entered.png"]
    );
}

#[test]
fn discover_keeps_only_images() {
    let dir = tempfile::tempdir().unwrap();
    touch_all(
        dir.path(),
        &["a.png", "b.JPG", "c.jpeg", "notes.txt", "trace.zip", "video.webm", "png"],
    );
    std::fs::create_dir(dir.path().join("nested.png")).unwrap();

    let names: Vec<_> = discover_screenshots(dir.path())
        .into_iter()
        .map(|a| a.file_name)
        .collect();
    assert_eq!(names, vec!["a.png", "b.JPG", "c.jpeg"]);
}

#[test]
fn discover_missing_directory_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let assets = discover_screenshots(&dir.path().join("does-not-exist"));
    assert!(assets.is_empty());
}

#[test]
fn discover_empty_directory() {
    let dir = tempfile::tempdir().unwrap();
    assert!(discover_screenshots(dir.path()).is_empty());
}

#[test]
fn image_extension_detection() {
    assert!(is_image_file("01-page-loaded.png"));
    assert!(is_image_file("shot.JPEG"));
    assert!(!is_image_file(".png"));
    assert!(!is_image_file("report.html"));
    assert!(!is_image_file("png"));
}

// ============================================================================
// 2. Step labels
// ============================================================================

#[test]
fn step_label_strips_extension_and_dashes() {
    assert_eq!(asset("01-page-loaded.png").step_label(), "01 page loaded");
    assert_eq!(
        asset("02-username-entered-invalid_user.jpg").step_label(),
        "02 username entered invalid_user"
    );
    assert_eq!(asset("shot.v2.PNG").step_label(), "shot.v2");
}

// ============================================================================
// 3. Mapping: shared vs scoped steps
// ============================================================================

#[test]
fn shared_step_attaches_to_every_bucket_scoped_to_one() {
    let assets = vec![asset("01-page-loaded.png"), asset("02-username-entered-pwshizz.png")];
    let steps = map_screenshots_to_scenarios(&assets, &StepMapping::default());

    assert_eq!(
        step_names(steps.steps_for(VALID)),
        vec![
            "Given I navigate to the Sharedo platform",
            "When I enter my username \"pwshizz\"",
        ]
    );
    assert_eq!(
        step_names(steps.steps_for(INVALID)),
        vec!["Given I navigate to the Sharedo platform"]
    );
    assert_eq!(steps.attached_count(), 3);
}

#[test]
fn step_entries_reference_screenshot_and_pass() {
    let steps = map_screenshots_to_scenarios(
        &[asset("02-username-entered-invalid_user.png")],
        &StepMapping::default(),
    );
    let entries = steps.steps_for(INVALID);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].screenshot, "02-username-entered-invalid_user.png");
    assert_eq!(entries[0].status.as_str(), "passed");
    assert!(steps.steps_for(VALID).is_empty());
}

#[test]
fn unmatched_screenshot_is_not_attached() {
    let steps = map_screenshots_to_scenarios(
        &[asset("99-something-else.png")],
        &StepMapping::default(),
    );
    assert_eq!(steps.attached_count(), 0);
    assert!(steps.steps_for(VALID).is_empty());
    assert!(steps.steps_for(INVALID).is_empty());
}

#[test]
fn unknown_scenario_has_no_steps() {
    let steps =
        map_screenshots_to_scenarios(&[asset("01-page-loaded.png")], &StepMapping::default());
    assert!(steps.steps_for("Some other scenario").is_empty());
}

#[test]
fn buckets_exist_even_without_screenshots() {
    let steps = map_screenshots_to_scenarios(&[], &StepMapping::default());
    let titles: Vec<_> = steps.scenario_titles().collect();
    assert_eq!(titles, vec![INVALID, VALID]);
}

// ============================================================================
// 4. Mapping: first match wins, dedup by step name
// ============================================================================

#[test]
fn first_matching_rule_wins() {
    let mapping = StepMapping {
        buckets: vec![ScenarioBucket { tag: "a".into(), title: "A".into() }],
        rules: vec![
            MappingRule::shared("login", "generic login step"),
            MappingRule::shared("login-click", "specific click step"),
        ],
    };
    let steps = map_screenshots_to_scenarios(&[asset("04-login-click.png")], &mapping);
    assert_eq!(step_names(steps.steps_for("A")), vec!["generic login step"]);
}

#[test]
fn duplicate_step_names_are_listed_once() {
    let assets = vec![
        asset("01-page-loaded.png"),
        asset("01-page-loaded-retry.png"),
        asset("04-before-login-click.png"),
    ];
    let steps = map_screenshots_to_scenarios(&assets, &StepMapping::default());

    let valid = steps.steps_for(VALID);
    assert_eq!(
        step_names(valid),
        vec!["Given I navigate to the Sharedo platform", "And I click the login button"]
    );
    // first occurrence is kept
    assert_eq!(valid[0].screenshot, "01-page-loaded.png");
}

#[test]
fn distinct_patterns_resolving_to_same_step_dedup() {
    let mapping = StepMapping {
        buckets: vec![ScenarioBucket { tag: "v".into(), title: "V".into() }],
        rules: vec![
            MappingRule::scoped("after-login", "Then I am logged in", "v"),
            MappingRule::scoped("dashboard", "Then I am logged in", "v"),
        ],
    };
    let assets = vec![asset("05-after-login.png"), asset("06-dashboard.png")];
    let steps = map_screenshots_to_scenarios(&assets, &mapping);
    assert_eq!(step_names(steps.steps_for("V")), vec!["Then I am logged in"]);
    assert_eq!(steps.steps_for("V")[0].screenshot, "05-after-login.png");
}

#[test]
fn scope_tag_can_address_several_buckets() {
    let mapping = StepMapping {
        buckets: vec![
            ScenarioBucket { tag: "login".into(), title: "L1".into() },
            ScenarioBucket { tag: "login".into(), title: "L2".into() },
            ScenarioBucket { tag: "other".into(), title: "O".into() },
        ],
        rules: vec![MappingRule::scoped("shot", "step", "login")],
    };
    let steps = map_screenshots_to_scenarios(&[asset("shot.png")], &mapping);
    assert_eq!(steps.steps_for("L1").len(), 1);
    assert_eq!(steps.steps_for("L2").len(), 1);
    assert!(steps.steps_for("O").is_empty());
}

#[test]
fn rule_scoped_to_unknown_tag_attaches_nowhere() {
    let mapping = StepMapping {
        buckets: vec![ScenarioBucket { tag: "a".into(), title: "A".into() }],
        rules: vec![MappingRule::scoped("shot", "step", "missing")],
    };
    let steps = map_screenshots_to_scenarios(&[asset("shot.png")], &mapping);
    assert_eq!(steps.attached_count(), 0);
}

// ============================================================================
// 5. Default table
// ============================================================================

#[test]
fn default_table_covers_full_login_flow() {
    let names = [
        "01-page-loaded.png",
        "02-username-entered-pwshizz.png",
        "02-username-entered-invalid_user.png",
        "03-password-entered.png",
        "03-invalid-password-entered.png",
        "04-before-login-click.png",
        "05-after-login-attempt.png",
        "06-login-success-verified.png",
        "06-checking-for-error.png",
        "07-not-on-login-page.png",
        "07-error-message-found.png",
        "08-still-on-login-page.png",
    ];
    let assets: Vec<_> = names.iter().map(|n| asset(n)).collect();
    let steps = map_screenshots_to_scenarios(&assets, &StepMapping::default());

    assert_eq!(
        step_names(steps.steps_for(VALID)),
        vec![
            "Given I navigate to the Sharedo platform",
            "When I enter my username \"pwshizz\"",
            "And I enter my password",
            "And I click the login button",
            "And I click the login button (result)",
            "Then I should be successfully logged in",
            "And I should not see the login page",
        ]
    );
    assert_eq!(
        step_names(steps.steps_for(INVALID)),
        vec![
            "Given I navigate to the Sharedo platform",
            "When I enter my username \"invalid_user\"",
            "And I enter an invalid password",
            "And I click the login button",
            "And I click the login button (result)",
            "Then I should see an error message",
            "Then I should see an error message (verified)",
            "And I should remain on the login page",
        ]
    );
}
