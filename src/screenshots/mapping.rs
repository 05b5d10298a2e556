use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::results::flatten::ScenarioStatus;
use crate::screenshots::discover::ScreenshotAsset;

// ============================================================================
// Step mapping table
// ============================================================================

/// A scenario that screenshots can be attached to, addressed by a short tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioBucket {
    pub tag: String,
    pub title: String,
}

/// One row of the mapping table.
///
/// A screenshot whose file name contains `pattern` illustrates `step`. With
/// no `scope` the step is shared by every bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingRule {
    pub pattern: String,
    pub step: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
}

impl MappingRule {
    pub fn shared(pattern: &str, step: &str) -> Self {
        Self {
            pattern: pattern.to_string(),
            step: step.to_string(),
            scope: None,
        }
    }

    pub fn scoped(pattern: &str, step: &str, scope: &str) -> Self {
        Self {
            pattern: pattern.to_string(),
            step: step.to_string(),
            scope: Some(scope.to_string()),
        }
    }

    pub fn matches(&self, file_name: &str) -> bool {
        file_name.contains(&self.pattern)
    }
}

/// Ordered rule table plus the scenario buckets it can address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepMapping {
    pub buckets: Vec<ScenarioBucket>,
    pub rules: Vec<MappingRule>,
}

pub const VALID_LOGIN: &str = "Successful login with valid credentials";
pub const INVALID_LOGIN: &str = "Login with invalid credentials";

impl Default for StepMapping {
    fn default() -> Self {
        Self::sharedo_login()
    }
}

impl StepMapping {
    /// Table for the Sharedo login feature and its screenshot naming scheme.
    pub fn sharedo_login() -> Self {
        Self {
            buckets: vec![
                ScenarioBucket {
                    tag: "valid".into(),
                    title: VALID_LOGIN.into(),
                },
                ScenarioBucket {
                    tag: "invalid".into(),
                    title: INVALID_LOGIN.into(),
                },
            ],
            rules: vec![
                MappingRule::shared("01-page-loaded", "Given I navigate to the Sharedo platform"),
                MappingRule::scoped(
                    "02-username-entered-pwshizz",
                    "When I enter my username \"pwshizz\"",
                    "valid",
                ),
                MappingRule::scoped(
                    "02-username-entered-invalid_user",
                    "When I enter my username \"invalid_user\"",
                    "invalid",
                ),
                MappingRule::scoped("03-password-entered", "And I enter my password", "valid"),
                MappingRule::scoped(
                    "03-invalid-password-entered",
                    "And I enter an invalid password",
                    "invalid",
                ),
                MappingRule::shared("04-before-login-click", "And I click the login button"),
                MappingRule::shared(
                    "05-after-login-attempt",
                    "And I click the login button (result)",
                ),
                MappingRule::scoped(
                    "06-login-success-verified",
                    "Then I should be successfully logged in",
                    "valid",
                ),
                MappingRule::scoped(
                    "06-checking-for-error",
                    "Then I should see an error message",
                    "invalid",
                ),
                MappingRule::scoped(
                    "07-not-on-login-page",
                    "And I should not see the login page",
                    "valid",
                ),
                MappingRule::scoped(
                    "07-error-message-found",
                    "Then I should see an error message (verified)",
                    "invalid",
                ),
                MappingRule::scoped(
                    "08-still-on-login-page",
                    "And I should remain on the login page",
                    "invalid",
                ),
            ],
        }
    }

    /// First rule whose pattern occurs in `file_name`.
    pub fn find_rule(&self, file_name: &str) -> Option<&MappingRule> {
        self.rules.iter().find(|rule| rule.matches(file_name))
    }

    /// Titles of the buckets a rule attaches to.
    pub fn target_titles<'a>(&'a self, rule: &MappingRule) -> Vec<&'a str> {
        match &rule.scope {
            None => self.buckets.iter().map(|b| b.title.as_str()).collect(),
            Some(tag) => self
                .buckets
                .iter()
                .filter(|b| &b.tag == tag)
                .map(|b| b.title.as_str())
                .collect(),
        }
    }
}

// ============================================================================
// Screenshot -> scenario association
// ============================================================================

/// A step illustrated by a screenshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepEntry {
    pub name: String,
    pub screenshot: String,
    pub status: ScenarioStatus,
}

/// Steps attached to each scenario bucket, keyed by scenario title.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScenarioSteps {
    by_scenario: BTreeMap<String, Vec<StepEntry>>,
}

impl ScenarioSteps {
    pub fn steps_for(&self, title: &str) -> &[StepEntry] {
        self.by_scenario
            .get(title)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn scenario_titles(&self) -> impl Iterator<Item = &str> {
        self.by_scenario.keys().map(String::as_str)
    }

    /// Number of step screenshots attached across all scenarios.
    pub fn attached_count(&self) -> usize {
        self.by_scenario.values().map(Vec::len).sum()
    }

    fn push(&mut self, title: &str, entry: StepEntry) {
        if let Some(steps) = self.by_scenario.get_mut(title) {
            steps.push(entry);
        }
    }

    fn dedup_steps(&mut self) {
        for steps in self.by_scenario.values_mut() {
            let mut seen = HashSet::new();
            steps.retain(|step| seen.insert(step.name.clone()));
        }
    }
}

/// Attach each screenshot to the scenario(s) its first matching rule names.
///
/// Unmatched screenshots are left out (they still show in the gallery).
/// Each scenario keeps only the first screenshot for a given step name.
pub fn map_screenshots_to_scenarios(
    assets: &[ScreenshotAsset],
    mapping: &StepMapping,
) -> ScenarioSteps {
    let mut steps = ScenarioSteps::default();
    for bucket in &mapping.buckets {
        steps.by_scenario.entry(bucket.title.clone()).or_default();
    }

    for asset in assets {
        let Some(rule) = mapping.find_rule(&asset.file_name) else {
            info!("Screenshot {} matches no step pattern, gallery only", asset.file_name);
            continue;
        };

        let targets = mapping.target_titles(rule);
        if targets.is_empty() {
            warn!(
                "Rule '{}' is scoped to unknown scenario tag {:?}",
                rule.pattern, rule.scope
            );
            continue;
        }

        for title in targets {
            steps.push(
                title,
                StepEntry {
                    name: rule.step.clone(),
                    screenshot: asset.file_name.clone(),
                    status: ScenarioStatus::Passed,
                },
            );
        }
    }

    steps.dedup_steps();
    steps
}
