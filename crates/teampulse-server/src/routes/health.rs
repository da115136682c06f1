//! Health and readiness route.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(get_health))
}

/// GET /api/health: liveness plus what is configured.
async fn get_health(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "employees": state.directory.len(),
        "sheetsConfigured": state.config.sheets_credentials.is_configured(),
        "sheetRange": state.config.sheet_range,
        "summarizerConfigured": state.summarizer.is_configured(),
        "summarizerModel": state.summarizer.model,
        "port": state.config.port,
    }))
}
