use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A single catalogued assessment product, as written by the catalog crawler.
///
/// Every field is optional in the snapshot; missing values fall back to empty text,
/// `false`, or an empty tag list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AssessmentRecord {
    /// Display name, e.g. "Verify G+"
    pub title: String,
    /// Canonical product URL, used as the record's external identifier
    pub link: String,
    /// Whether the assessment supports remote testing
    pub remote_testing: bool,
    /// Whether the assessment is adaptive (IRT based)
    pub adaptive_irt: bool,
    /// Short type tags in listing order, e.g. ["A", "K"]
    pub test_types: Vec<String>,
    /// Free-text product description
    pub description: String,
    pub job_levels: String,
    pub languages: String,
    /// Human-authored length text, e.g. "Approximate Completion Time in minutes = 30"
    pub assessment_length: String,
}

/// A record matched for one query, with its query-scoped annotations.
///
/// Built fresh for every call so annotations never land on the shared catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Recommendation {
    #[serde(flatten)]
    pub record: AssessmentRecord,
    /// Minutes parsed from `assessment_length`; null when no number is present
    pub duration: Option<u32>,
    /// Relevance score; omitted for direct URL hits
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_score: Option<u32>,
    /// Query tokens found in the record's title or description; omitted for direct URL hits
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched_keywords: Option<Vec<String>>,
}

impl Recommendation {
    pub fn direct(record: &AssessmentRecord, duration: Option<u32>) -> Self {
        Self {
            record: record.clone(),
            duration,
            match_score: None,
            matched_keywords: None,
        }
    }

    pub fn scored(
        record: &AssessmentRecord,
        duration: Option<u32>,
        score: u32,
        matched_keywords: Vec<String>,
    ) -> Self {
        Self {
            record: record.clone(),
            duration,
            match_score: Some(score),
            matched_keywords: Some(matched_keywords),
        }
    }

    pub fn score(&self) -> u32 {
        self.match_score.unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_defaults_missing_fields() {
        let record: AssessmentRecord =
            serde_json::from_str(r#"{"title": "OPQ", "remote_testing": true}"#).unwrap();
        assert_eq!(record.title, "OPQ");
        assert!(record.remote_testing);
        assert!(!record.adaptive_irt);
        assert!(record.test_types.is_empty());
        assert_eq!(record.assessment_length, "");
    }

    #[test]
    fn recommendation_serializes_flat() {
        let record = AssessmentRecord {
            title: "OPQ".to_string(),
            link: "https://shl.com/opq".to_string(),
            ..Default::default()
        };
        let value = serde_json::to_value(Recommendation::scored(
            &record,
            Some(25),
            2,
            vec!["personality".to_string()],
        ))
        .unwrap();

        assert_eq!(value["title"], "OPQ");
        assert_eq!(value["link"], "https://shl.com/opq");
        assert_eq!(value["duration"], 25);
        assert_eq!(value["match_score"], 2);
        assert_eq!(value["matched_keywords"][0], "personality");
    }

    #[test]
    fn direct_hit_omits_scoring_fields() {
        let value =
            serde_json::to_value(Recommendation::direct(&AssessmentRecord::default(), None))
                .unwrap();
        assert!(value["duration"].is_null());
        assert!(value.get("match_score").is_none());
        assert!(value.get("matched_keywords").is_none());
    }
}
