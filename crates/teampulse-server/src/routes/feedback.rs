//! Feedback summary route.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use teampulse_runtime::{FeedbackRequest, FeedbackResponse};

use super::ApiError;
use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/feedback/summary", post(feedback_summary))
}

/// POST /api/feedback/summary: windowed statistics plus a comment digest.
async fn feedback_summary(
    State(state): State<Arc<AppState>>,
    Json(req): Json<FeedbackRequest>,
) -> Result<Json<FeedbackResponse>, ApiError> {
    let response = state.pipeline.run(&req).await?;
    Ok(Json(response))
}
