//! Best-effort decoding of summarizer output.
//!
//! Models wrap JSON in prose or code fences, so the payload is taken to be
//! everything from the first `{` to the last `}`.

use serde::Deserialize;
use thiserror::Error;

use crate::prompt::MAX_ENTRIES;
use crate::types::{ImprovementArea, PositiveFeedback, SummaryResult};

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("no JSON object in summarizer output")]
    NoPayload,

    #[error("malformed summary payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Both keys are optional and may be `null`.
#[derive(Deserialize)]
struct Payload {
    #[serde(default, rename = "positiveFeedback")]
    positive_feedback: Option<Vec<PositiveFeedback>>,
    #[serde(default, rename = "improvementAreas")]
    improvement_areas: Option<Vec<ImprovementArea>>,
}

/// Locate and decode the JSON object embedded in `raw`.
///
/// Collections are capped at three entries and keywords at three per quote.
pub fn decode_summary(raw: &str) -> Result<SummaryResult, DecodeError> {
    let payload = json_candidate(raw).ok_or(DecodeError::NoPayload)?;
    let decoded: Payload = serde_json::from_str(payload)?;

    let mut positive_feedback = decoded.positive_feedback.unwrap_or_default();
    positive_feedback.truncate(MAX_ENTRIES);
    for entry in &mut positive_feedback {
        entry.keywords.truncate(MAX_ENTRIES);
    }

    let mut improvement_areas = decoded.improvement_areas.unwrap_or_default();
    improvement_areas.truncate(MAX_ENTRIES);

    Ok(SummaryResult {
        positive_feedback,
        improvement_areas,
    })
}

fn json_candidate(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    (end > start).then(|| &raw[start..=end])
}
