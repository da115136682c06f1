//! HTTP route handlers.

pub mod attendance;
pub mod feedback;
pub mod health;

use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use teampulse_core::Error;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::error;

use crate::state::AppState;

/// Returned for every failure that is not the caller's fault.
pub const INTERNAL_ERROR_MESSAGE: &str =
    "An error occurred while fetching the feedback summary. Check the server logs for details.";

/// Build the main Axum router with all routes.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .nest("/api", api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .merge(health::routes())
        .merge(feedback::routes())
        .merge(attendance::routes())
}

/// Maps core errors onto `{ "error": ... }` responses.
///
/// Invalid input is 400 and unknown employees are 404, both with the
/// underlying message. Everything else is logged and reported as an opaque 500.
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(e: Error) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, msg) = match &self.0 {
            Error::InvalidArgument(_) => (StatusCode::BAD_REQUEST, self.0.reason()),
            Error::NotFound(_) => (StatusCode::NOT_FOUND, self.0.reason()),
            other => {
                error!("Request failed: {}", other);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.to_string(),
                )
            }
        };
        (status, Json(serde_json::json!({ "error": msg }))).into_response()
    }
}
