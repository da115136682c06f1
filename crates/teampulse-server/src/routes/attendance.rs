//! Attendance streak route.

use std::sync::Arc;

use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use teampulse_feedback::{attendance_streak, AttendanceEntry};

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/attendance/streak", post(streak))
}

#[derive(Debug, Deserialize)]
pub struct StreakRequest {
    #[serde(default)]
    pub records: Vec<AttendanceEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StreakResponse {
    pub streak: usize,
}

/// POST /api/attendance/streak
async fn streak(Json(req): Json<StreakRequest>) -> Json<StreakResponse> {
    Json(StreakResponse {
        streak: attendance_streak(&req.records),
    })
}
