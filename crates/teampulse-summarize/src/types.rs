//! Summary result shapes.

use serde::{Deserialize, Serialize};

/// A verbatim positive comment plus the keywords that make it positive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositiveFeedback {
    pub quote: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// A recurring theme that needs work and a suggestion for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImprovementArea {
    pub theme: String,
    pub suggestion: String,
}

/// Structured digest of a set of comments. Empty when nothing qualified or
/// the summarizer output could not be decoded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResult {
    #[serde(default, rename = "positiveFeedback")]
    pub positive_feedback: Vec<PositiveFeedback>,
    #[serde(default, rename = "improvementAreas")]
    pub improvement_areas: Vec<ImprovementArea>,
}

impl SummaryResult {
    pub fn is_empty(&self) -> bool {
        self.positive_feedback.is_empty() && self.improvement_areas.is_empty()
    }
}
