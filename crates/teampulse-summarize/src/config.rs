//! Summarizer configuration, read from the environment.

/// Model used when `GEMINI_MODEL` is unset.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";

/// Gemini API key and model. Fixed for the lifetime of the process.
#[derive(Clone)]
pub struct SummarizerConfig {
    pub api_key: Option<String>,
    pub model: String,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_GEMINI_MODEL.to_string(),
        }
    }
}

impl std::fmt::Debug for SummarizerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SummarizerConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("model", &self.model)
            .finish()
    }
}

impl SummarizerConfig {
    /// `GEMINI_KEY` (or `GEMINI_API_KEY`) and an optional `GEMINI_MODEL`.
    pub fn from_env() -> Self {
        let api_key = std::env::var("GEMINI_KEY")
            .or_else(|_| std::env::var("GEMINI_API_KEY"))
            .ok();
        Self::from_vars(api_key, std::env::var("GEMINI_MODEL").ok())
    }

    /// Blank values count as unset.
    pub fn from_vars(api_key: Option<String>, model: Option<String>) -> Self {
        let non_blank = |v: Option<String>| {
            v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
        };
        Self {
            api_key: non_blank(api_key),
            model: non_blank(model).unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_flash_without_key() {
        let config = SummarizerConfig::from_vars(None, None);
        assert!(!config.is_configured());
        assert_eq!(config.model, DEFAULT_GEMINI_MODEL);
    }

    #[test]
    fn test_blank_values_are_unset() {
        let config = SummarizerConfig::from_vars(Some("  ".into()), Some("".into()));
        assert!(!config.is_configured());
        assert_eq!(config.model, DEFAULT_GEMINI_MODEL);
    }

    #[test]
    fn test_key_and_model_override() {
        let config =
            SummarizerConfig::from_vars(Some(" AIza-key ".into()), Some("gemini-1.5-pro".into()));
        assert_eq!(config.api_key.as_deref(), Some("AIza-key"));
        assert_eq!(config.model, "gemini-1.5-pro");
    }

    #[test]
    fn test_debug_masks_key() {
        let config = SummarizerConfig::from_vars(Some("AIza-secret".into()), None);
        let printed = format!("{:?}", config);
        assert!(!printed.contains("AIza-secret"));
        assert!(printed.contains(DEFAULT_GEMINI_MODEL));
    }
}
