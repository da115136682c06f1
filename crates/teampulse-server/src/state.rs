//! Shared application state.

use std::sync::Arc;

use teampulse_core::TeamPulseConfig;
use teampulse_runtime::FeedbackPipeline;
use teampulse_sheets::{GoogleSheetsClient, JsonEmployeeDirectory, SheetSource};
use teampulse_summarize::{GeminiClient, SummarizerConfig, TextGenerator};
use tracing::{info, warn};

/// Shared application state accessible from all route handlers.
pub struct AppState {
    pub config: TeamPulseConfig,
    pub directory: Arc<JsonEmployeeDirectory>,
    pub summarizer: SummarizerConfig,
    pub pipeline: FeedbackPipeline,
}

impl AppState {
    /// Wire the production collaborators: employees.json, the Sheets API and
    /// Gemini configured from `GEMINI_KEY`.
    pub fn new(config: TeamPulseConfig) -> Self {
        let http = reqwest::Client::new();

        let directory = Arc::new(JsonEmployeeDirectory::new(&config.data_paths.employees_file));
        if directory.is_empty() {
            warn!(
                "No employees in {}; every feedback request will be a 404",
                config.data_paths.employees_file.display()
            );
        }

        let sheets = GoogleSheetsClient::new(http.clone(), config.sheets_credentials.clone());
        if !sheets.is_configured() {
            warn!("No Google Sheets credentials set; feedback requests will fail");
        }

        let summarizer = SummarizerConfig::from_env();
        let generator = GeminiClient::new(http, summarizer.clone());
        if !generator.is_configured() {
            warn!("GEMINI_KEY is not set; requests with comments will fail");
        }

        Self::from_parts(
            config,
            directory,
            summarizer,
            Arc::new(sheets),
            Arc::new(generator),
        )
    }

    /// Assemble state around explicit collaborators.
    pub fn from_parts(
        config: TeamPulseConfig,
        directory: Arc<JsonEmployeeDirectory>,
        summarizer: SummarizerConfig,
        sheets: Arc<dyn SheetSource>,
        generator: Arc<dyn TextGenerator>,
    ) -> Self {
        let pipeline = FeedbackPipeline::new(directory.clone(), sheets, generator)
            .with_sheet_range(config.sheet_range.clone());

        info!(
            "AppState ready: employees={}, sheet_range={}, summarizer_model={}",
            directory.len(),
            pipeline.sheet_range(),
            summarizer.model
        );

        Self {
            config,
            directory,
            summarizer,
            pipeline,
        }
    }
}
