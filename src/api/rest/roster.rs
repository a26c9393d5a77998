//! Roster query endpoints

use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, Json};
use serde::Serialize;

use super::ApiResponse;
use crate::format;
use crate::rotation::RotationStore;

/// GET /api/roster - Full state snapshot
///
/// The snapshot is a clone; callers can never mutate store state through
/// the response.
pub async fn get_roster(State(store): State<Arc<RotationStore>>) -> impl IntoResponse {
    Json(ApiResponse::new(store.snapshot()))
}

/// Designated next recipient, if the rotation is non-empty
#[derive(Debug, Serialize)]
pub struct NextRecipient {
    pub key: Option<String>,
}

/// GET /api/roster/next - Who the fairness rule picks next
pub async fn get_next(State(store): State<Arc<RotationStore>>) -> impl IntoResponse {
    Json(ApiResponse::new(NextRecipient {
        key: store.next_recipient(),
    }))
}

/// GET /api/log - Award history columns as JSON
pub async fn get_log(State(store): State<Arc<RotationStore>>) -> impl IntoResponse {
    Json(ApiResponse::new(store.snapshot().log))
}

/// GET /api/stats - Per-member lifetime counters as JSON
pub async fn get_stats(State(store): State<Arc<RotationStore>>) -> impl IntoResponse {
    Json(ApiResponse::new(store.snapshot().stats))
}

/// GET /api/roster/text - Rendered rotation queue and inactive list
pub async fn get_roster_text(State(store): State<Arc<RotationStore>>) -> String {
    let snapshot = store.snapshot();
    format!(
        "Rotation:\n{}\n\nInactive:\n{}",
        format::format_roster(&snapshot),
        format::format_inactive(&snapshot)
    )
}

/// GET /api/log/text - Rendered award history columns
pub async fn get_log_text(State(store): State<Arc<RotationStore>>) -> String {
    format::format_log(&store.snapshot())
}

/// GET /api/stats/text - Rendered per-member counters
pub async fn get_stats_text(State(store): State<Arc<RotationStore>>) -> String {
    format::format_stats(&store.snapshot())
}
