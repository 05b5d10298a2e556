use serde::{Deserialize, Serialize};

use crate::report::report_model::ReportMetadata;
use crate::results::flatten::ScenarioRecord;

// ============================================================================
// Cucumber JSON export: for tools that consume cucumber-style results
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CucumberFeature {
    pub description: String,
    pub elements: Vec<CucumberScenario>,
    pub id: String,
    pub keyword: String,
    pub name: String,
    pub tags: Vec<CucumberTag>,
    #[serde(rename = "type")]
    pub kind: String,
    pub uri: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CucumberScenario {
    pub description: String,
    pub id: String,
    pub keyword: String,
    pub name: String,
    pub tags: Vec<CucumberTag>,
    #[serde(rename = "type")]
    pub kind: String,
    pub steps: Vec<CucumberStep>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CucumberTag {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CucumberStep {
    pub keyword: String,
    pub name: String,
    pub result: CucumberStepResult,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CucumberStepResult {
    pub status: String,
    /// Nanoseconds, as cucumber reporters expect
    pub duration: u64,
    pub error_message: Option<String>,
}

/// Lowercase and join whitespace-separated words with dashes.
pub fn slugify(s: &str) -> String {
    s.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

impl From<&ScenarioRecord> for CucumberScenario {
    fn from(record: &ScenarioRecord) -> Self {
        Self {
            description: record.title.clone(),
            id: slugify(&record.title),
            keyword: "Scenario".to_string(),
            name: record.title.clone(),
            tags: record
                .tags
                .iter()
                .map(|t| CucumberTag { name: t.clone() })
                .collect(),
            kind: "scenario".to_string(),
            steps: vec![CucumberStep {
                keyword: "When".to_string(),
                name: record.title.clone(),
                result: CucumberStepResult {
                    status: record.status.as_str().to_string(),
                    duration: record.duration_ms.saturating_mul(1_000_000),
                    error_message: record.error_message.clone(),
                },
            }],
        }
    }
}

/// Wrap all scenarios into a single cucumber feature.
pub fn to_cucumber(
    records: &[ScenarioRecord],
    metadata: &ReportMetadata,
    uri: &str,
) -> Vec<CucumberFeature> {
    let name = format!("{} BDD Tests", metadata.app_name);
    vec![CucumberFeature {
        description: format!("BDD Tests for {}", metadata.app_name),
        elements: records.iter().map(CucumberScenario::from).collect(),
        id: slugify(&name),
        keyword: "Feature".to_string(),
        name,
        tags: Vec::new(),
        kind: "feature".to_string(),
        uri: uri.to_string(),
    }]
}
