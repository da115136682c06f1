//! Summary requester: comments in, structured digest out.

use std::sync::Arc;

use async_trait::async_trait;
use teampulse_core::Result;
use tracing::{debug, warn};

use crate::decode::decode_summary;
use crate::prompt::build_summary_prompt;
use crate::types::SummaryResult;

/// Anything that turns a prompt into free-form text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// Sends selected comments to the summarizer and decodes the answer.
pub struct SummaryRequester {
    generator: Arc<dyn TextGenerator>,
}

impl SummaryRequester {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Summarize `comments`.
    ///
    /// No comments means no external call. Generator errors propagate;
    /// undecodable output is logged and becomes an empty result.
    pub async fn summarize(&self, comments: &[String]) -> Result<SummaryResult> {
        if comments.is_empty() {
            debug!("No eligible comments, skipping summarizer call");
            return Ok(SummaryResult::default());
        }

        let prompt = build_summary_prompt(comments);
        let raw = self.generator.generate(&prompt).await?;

        match decode_summary(&raw) {
            Ok(summary) => Ok(summary),
            Err(e) => {
                warn!(
                    "Discarding summarizer output for {} comments: {} (raw length {})",
                    comments.len(),
                    e,
                    raw.len()
                );
                Ok(SummaryResult::default())
            }
        }
    }
}
