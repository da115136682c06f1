//! Feedback record, window and aggregate types.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use teampulse_core::{Error, Result};

/// One normalized feedback sheet row.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackRecord {
    /// Submission time as written in the sheet (no timezone attached).
    pub timestamp: NaiveDateTime,
    pub understanding: f64,
    pub instructor_rating: f64,
    /// Trimmed comment text; empty when the cell was missing.
    pub comment: String,
}

/// Which of the five window semantics a request asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowMode {
    Daily,
    Monthly,
    Specific,
    Range,
    Full,
}

impl std::fmt::Display for WindowMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WindowMode::Daily => write!(f, "daily"),
            WindowMode::Monthly => write!(f, "monthly"),
            WindowMode::Specific => write!(f, "specific"),
            WindowMode::Range => write!(f, "range"),
            WindowMode::Full => write!(f, "full"),
        }
    }
}

impl std::str::FromStr for WindowMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "daily" => Ok(WindowMode::Daily),
            "monthly" => Ok(WindowMode::Monthly),
            "specific" => Ok(WindowMode::Specific),
            "range" => Ok(WindowMode::Range),
            "full" => Ok(WindowMode::Full),
            other => Err(Error::InvalidArgument(format!(
                "Unknown window mode '{}'. Expected one of daily, monthly, specific, range, full.",
                other
            ))),
        }
    }
}

/// A validated window. Exactly one mode, with the dates that mode needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowSpec {
    /// Same calendar day as the reference clock.
    Daily,
    /// Same month and year as `date`, or as the reference clock when absent.
    Monthly { date: Option<NaiveDate> },
    /// Same calendar day as `date`.
    Specific { date: NaiveDate },
    /// `start 00:00:00.000 <= ts <= end 23:59:59.999`.
    Range { start: NaiveDate, end: NaiveDate },
    /// Every record with a valid timestamp.
    Full,
}

impl WindowSpec {
    /// Build a window from loosely-typed request fields.
    ///
    /// `date` is only read by monthly and specific windows; `start`/`end` only
    /// by range windows.
    pub fn from_parts(
        mode: Option<&str>,
        date: Option<&str>,
        start: Option<&str>,
        end: Option<&str>,
    ) -> Result<Self> {
        let mode: WindowMode = match mode.map(str::trim).filter(|m| !m.is_empty()) {
            Some(m) => m.parse()?,
            None => {
                return Err(Error::InvalidArgument(
                    "A window mode is required.".into(),
                ))
            }
        };
        fn non_blank(v: Option<&str>) -> Option<&str> {
            v.map(str::trim).filter(|s| !s.is_empty())
        }

        match mode {
            WindowMode::Daily => Ok(WindowSpec::Daily),
            WindowMode::Monthly => {
                let date = non_blank(date).map(parse_date_param).transpose()?;
                Ok(WindowSpec::Monthly { date })
            }
            WindowMode::Specific => {
                let date = non_blank(date).ok_or_else(|| {
                    Error::InvalidArgument("A specific window requires a date.".into())
                })?;
                Ok(WindowSpec::Specific {
                    date: parse_date_param(date)?,
                })
            }
            WindowMode::Range => match (non_blank(start), non_blank(end)) {
                (Some(start), Some(end)) => {
                    let start = parse_date_param(start)?;
                    let end = parse_date_param(end)?;
                    if start > end {
                        return Err(Error::InvalidArgument(format!(
                            "Range start {} is after range end {}.",
                            start, end
                        )));
                    }
                    Ok(WindowSpec::Range { start, end })
                }
                _ => Err(Error::InvalidArgument(
                    "A range window requires both startDate and endDate.".into(),
                )),
            },
            WindowMode::Full => Ok(WindowSpec::Full),
        }
    }

    pub fn mode(&self) -> WindowMode {
        match self {
            WindowSpec::Daily => WindowMode::Daily,
            WindowSpec::Monthly { .. } => WindowMode::Monthly,
            WindowSpec::Specific { .. } => WindowMode::Specific,
            WindowSpec::Range { .. } => WindowMode::Range,
            WindowSpec::Full => WindowMode::Full,
        }
    }

    /// Range and full windows report a time series instead of a point aggregate.
    pub fn is_series(&self) -> bool {
        matches!(self, WindowSpec::Range { .. } | WindowSpec::Full)
    }
}

/// Parse a request date: `yyyy-MM-dd`, a naive ISO datetime, or an RFC 3339
/// instant. Instants are converted to the server's local calendar day.
pub fn parse_date_param(value: &str) -> Result<NaiveDate> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(instant) = DateTime::parse_from_rfc3339(value) {
        return Ok(instant.with_timezone(&Local).date_naive());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(naive.date());
    }
    Err(Error::InvalidArgument(format!("Invalid date '{}'.", value)))
}

/// Point aggregate for daily, monthly and specific windows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateSummary {
    #[serde(rename = "totalFeedbacks")]
    pub total_feedbacks: usize,
    /// `None` when `total_feedbacks == 0`.
    #[serde(rename = "avgUnderstanding")]
    pub avg_understanding: Option<f64>,
    #[serde(rename = "avgInstructor")]
    pub avg_instructor: Option<f64>,
}

/// Bucketed averages for range (per day) and full (per month) windows.
/// The three vectors are index-aligned.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries {
    pub labels: Vec<String>,
    pub understanding: Vec<f64>,
    pub instructor: Vec<f64>,
}

impl TimeSeries {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub(crate) fn push(&mut self, label: String, understanding: f64, instructor: f64) {
        self.labels.push(label);
        self.understanding.push(understanding);
        self.instructor.push(instructor);
    }
}
