//! Feedback analytics: sheet rows in, windowed statistics out.
//!
//! Everything here is a pure function of its inputs: rows are parsed into
//! [`FeedbackRecord`]s, narrowed by a [`WindowSpec`], then reduced to either a
//! point aggregate or a time series. Comment selection feeds the summarizer.

pub mod aggregate;
pub mod attendance;
pub mod comments;
pub mod parse;
pub mod types;
pub mod window;

pub use aggregate::{round2, series_by_day, series_by_month, summarize};
pub use attendance::{attendance_streak, AttendanceEntry, AttendanceStatus};
pub use comments::{is_meaningful_comment, select_comments, COMMENT_STOPLIST};
pub use parse::{parse_rating, parse_rows, parse_timestamp};
pub use types::*;
pub use window::filter_records;
