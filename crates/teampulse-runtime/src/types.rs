//! Pipeline request and response shapes.

use serde::{Deserialize, Serialize};
use teampulse_core::{Error, Result};
use teampulse_feedback::{AggregateSummary, TimeSeries, WindowSpec};
use teampulse_summarize::{ImprovementArea, PositiveFeedback};

/// Incoming feedback summary request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeedbackRequest {
    #[serde(default, rename = "employeeRef", alias = "employeeId")]
    pub employee_ref: Option<String>,
    #[serde(default, rename = "windowMode", alias = "timeFrame")]
    pub window_mode: Option<String>,
    /// ISO-8601 date or instant for daily/monthly/specific windows.
    #[serde(default)]
    pub date: Option<String>,
    /// `yyyy-MM-dd` lower bound for range windows.
    #[serde(default, rename = "startDate")]
    pub start_date: Option<String>,
    /// `yyyy-MM-dd` upper bound for range windows.
    #[serde(default, rename = "endDate")]
    pub end_date: Option<String>,
}

impl FeedbackRequest {
    /// Check the identifying input and the window before any I/O happens.
    pub fn validate(&self) -> Result<(String, WindowSpec)> {
        let employee = self
            .employee_ref
            .as_deref()
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .ok_or_else(|| Error::InvalidArgument("An employee reference is required.".into()))?;

        let spec = WindowSpec::from_parts(
            self.window_mode.as_deref(),
            self.date.as_deref(),
            self.start_date.as_deref(),
            self.end_date.as_deref(),
        )?;

        Ok((employee.to_string(), spec))
    }
}

/// Feedback summary response. Always this exact shape.
///
/// At most one of `graph_data` / `graph_timeseries` is set; both are null
/// when there was nothing to aggregate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedbackResponse {
    #[serde(rename = "positiveFeedback")]
    pub positive_feedback: Vec<PositiveFeedback>,
    #[serde(rename = "improvementAreas")]
    pub improvement_areas: Vec<ImprovementArea>,
    #[serde(rename = "totalFeedbacks")]
    pub total_feedbacks: usize,
    #[serde(rename = "graphData")]
    pub graph_data: Option<AggregateSummary>,
    #[serde(rename = "graphTimeseries")]
    pub graph_timeseries: Option<TimeSeries>,
}

impl FeedbackResponse {
    /// The "no data" shape: empty sheet or nothing in the window.
    pub fn empty() -> Self {
        Self::default()
    }
}
