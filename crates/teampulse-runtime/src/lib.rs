//! Request-level orchestration of the feedback summary.
//!
//! Resolves the employee's sheet, fetches rows, applies the time window,
//! aggregates, and asks the summarizer for a digest of the comments. All
//! external collaborators are injected.

pub mod pipeline;
pub mod types;

pub use pipeline::{analyze, Analysis, FeedbackPipeline};
pub use types::*;
