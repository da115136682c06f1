//! Feedback pipeline: coordinates the directory, sheet source, analytics and
//! summarizer for one request.

use std::sync::Arc;

use chrono::{Local, NaiveDateTime};
use teampulse_core::{Result, DEFAULT_SHEET_RANGE};
use teampulse_feedback::{
    filter_records, parse_rows, select_comments, series_by_day, series_by_month, summarize,
    AggregateSummary, FeedbackRecord, TimeSeries, WindowSpec,
};
use teampulse_sheets::{extract_spreadsheet_id, EmployeeDirectory, SheetSource};
use teampulse_summarize::{SummaryRequester, TextGenerator};
use tracing::{debug, info};

use crate::types::{FeedbackRequest, FeedbackResponse};

/// Windowed statistics plus the comments to summarize.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub total_feedbacks: usize,
    pub graph_data: Option<AggregateSummary>,
    pub graph_timeseries: Option<TimeSeries>,
    pub comments: Vec<String>,
}

/// Filter parsed records to `spec` and reduce them.
///
/// `None` when nothing falls inside the window. Range windows produce a daily
/// series, full windows a monthly one, everything else a point aggregate.
pub fn analyze(
    records: Vec<FeedbackRecord>,
    spec: &WindowSpec,
    now: NaiveDateTime,
) -> Option<Analysis> {
    let matched = filter_records(records, spec, now);
    if matched.is_empty() {
        return None;
    }

    let (graph_data, graph_timeseries) = match spec {
        WindowSpec::Range { .. } => (None, Some(series_by_day(&matched))),
        WindowSpec::Full => (None, Some(series_by_month(&matched))),
        _ => (Some(summarize(&matched)), None),
    };

    Some(Analysis {
        total_feedbacks: matched.len(),
        graph_data,
        graph_timeseries,
        comments: select_comments(&matched),
    })
}

/// End-to-end feedback summary for one employee and window.
pub struct FeedbackPipeline {
    directory: Arc<dyn EmployeeDirectory>,
    sheets: Arc<dyn SheetSource>,
    summarizer: SummaryRequester,
    sheet_range: String,
}

impl FeedbackPipeline {
    pub fn new(
        directory: Arc<dyn EmployeeDirectory>,
        sheets: Arc<dyn SheetSource>,
        generator: Arc<dyn TextGenerator>,
    ) -> Self {
        Self {
            directory,
            sheets,
            summarizer: SummaryRequester::new(generator),
            sheet_range: DEFAULT_SHEET_RANGE.to_string(),
        }
    }

    /// Override the A1 range read from each sheet.
    pub fn with_sheet_range(mut self, range: impl Into<String>) -> Self {
        self.sheet_range = range.into();
        self
    }

    pub fn sheet_range(&self) -> &str {
        &self.sheet_range
    }

    /// Run against the local wall clock.
    pub async fn run(&self, request: &FeedbackRequest) -> Result<FeedbackResponse> {
        self.run_at(request, Local::now().naive_local()).await
    }

    /// Run with an explicit reference clock.
    ///
    /// Invalid input fails before any external call. An empty sheet or an
    /// empty window is a successful empty response, not an error.
    pub async fn run_at(
        &self,
        request: &FeedbackRequest,
        now: NaiveDateTime,
    ) -> Result<FeedbackResponse> {
        let (employee, spec) = request.validate()?;

        let sheet_url = self.directory.feedback_sheet_url(&employee).await?;
        let spreadsheet_id = extract_spreadsheet_id(&sheet_url)?;
        let rows = self
            .sheets
            .fetch_rows(&spreadsheet_id, &self.sheet_range)
            .await?;

        if rows.len() < 2 {
            debug!("Sheet {} has no data rows", spreadsheet_id);
            return Ok(FeedbackResponse::empty());
        }

        let records = parse_rows(&rows);
        let parsed = records.len();
        let Some(analysis) = analyze(records, &spec, now) else {
            info!(
                "Feedback summary: employee={}, mode={}, rows={}, matched=0",
                employee,
                spec.mode(),
                parsed
            );
            return Ok(FeedbackResponse::empty());
        };

        let summary = self.summarizer.summarize(&analysis.comments).await?;

        info!(
            "Feedback summary: employee={}, mode={}, rows={}, matched={}, comments={}",
            employee,
            spec.mode(),
            parsed,
            analysis.total_feedbacks,
            analysis.comments.len()
        );

        Ok(FeedbackResponse {
            positive_feedback: summary.positive_feedback,
            improvement_areas: summary.improvement_areas,
            total_feedbacks: analysis.total_feedbacks,
            graph_data: analysis.graph_data,
            graph_timeseries: analysis.graph_timeseries,
        })
    }
}
