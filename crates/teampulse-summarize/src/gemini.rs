//! Gemini `generateContent` client.
//!
//! One request, one complete response. The prompt goes out as a single user
//! turn and the text parts of the first candidate come back.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use teampulse_core::{Error, Result};
use tracing::{debug, warn};

use crate::config::SummarizerConfig;
use crate::requester::TextGenerator;

const GEMINI_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// `TextGenerator` backed by the Gemini API.
pub struct GeminiClient {
    client: Client,
    config: SummarizerConfig,
}

impl GeminiClient {
    pub fn new(client: Client, config: SummarizerConfig) -> Self {
        Self { client, config }
    }

    pub fn is_configured(&self) -> bool {
        self.config.is_configured()
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    /// Transport failures and non-2xx statuses are errors. A well-formed
    /// response with no text (e.g. a safety block) is an empty string.
    async fn generate(&self, prompt: &str) -> Result<String> {
        let api_key = self.config.api_key.as_deref().ok_or_else(|| {
            Error::Config("Gemini API key (GEMINI_KEY) is not configured".into())
        })?;

        debug!("Requesting completion from gemini with model {}", self.config.model);
        let response = self
            .client
            .post(format!("{}/{}:generateContent", GEMINI_BASE, self.config.model))
            .header("x-goog-api-key", api_key)
            .json(&json!({
                "contents": [{"role": "user", "parts": [{"text": prompt}]}],
            }))
            .send()
            .await
            .map_err(|e| Error::Http(format!("Summarizer request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Summarizer(format!("API error {}: {}", status, body)));
        }

        let body = response
            .json::<Value>()
            .await
            .map_err(|e| Error::Summarizer(format!("Invalid response body: {}", e)))?;
        Ok(gemini_text(&body))
    }
}

/// Concatenated parts of the first candidate. Blocked prompts come back
/// without candidates.
pub fn gemini_text(body: &Value) -> String {
    if let Some(reason) = body["promptFeedback"]["blockReason"].as_str() {
        warn!("Gemini blocked the prompt: {}", reason);
    }
    body["candidates"][0]["content"]["parts"]
        .as_array()
        .map(|parts| {
            parts
                .iter()
                .filter_map(|p| p["text"].as_str())
                .collect::<String>()
        })
        .unwrap_or_default()
}
