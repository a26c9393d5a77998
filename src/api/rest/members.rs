//! Member command endpoints
//!
//! Each handler is one store operation; the store serializes mutations, so
//! concurrent requests never interleave mid-transition. Path keys arrive
//! already percent-decoded by the `Path` extractor.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use super::{error_response, ApiError, ApiResponse};
use crate::rotation::{RotationError, RotationResult, RotationStore};
use crate::types::Member;

/// Request body for adding a member
#[derive(Debug, Deserialize)]
pub struct AddMemberRequest {
    pub key: String,
    pub name: String,
}

/// Request body for awarding an MVP
#[derive(Debug, Deserialize)]
pub struct AwardRequest {
    /// One of `event`, `row`, `ranking`
    pub category: String,
    #[serde(default)]
    pub distinction: bool,
}

/// Request body for renaming a member
#[derive(Debug, Deserialize)]
pub struct RenameRequest {
    pub name: String,
}

/// Outcome of a promote/demote request
#[derive(Debug, Serialize)]
pub struct MoveOutcome {
    /// False when the member was already at the queue edge (a no-op, not
    /// an error)
    pub moved: bool,
}

fn member_response(result: RotationResult<Member>) -> axum::response::Response {
    match result {
        Ok(member) => (StatusCode::OK, Json(ApiResponse::new(member))).into_response(),
        Err(err) => {
            let (status, body) = error_response(&err);
            (status, Json(body)).into_response()
        }
    }
}

/// POST /api/members - Add a member to the end of the rotation
pub async fn add_member(
    State(store): State<Arc<RotationStore>>,
    Json(req): Json<AddMemberRequest>,
) -> impl IntoResponse {
    match store.add(&req.key, &req.name) {
        Ok(member) => (StatusCode::CREATED, Json(ApiResponse::new(member))).into_response(),
        Err(err) => {
            let (status, body) = error_response(&err);
            (status, Json(body)).into_response()
        }
    }
}

/// POST /api/members/:key/award - Run the full award transition
pub async fn award(
    State(store): State<Arc<RotationStore>>,
    Path(key): Path<String>,
    Json(req): Json<AwardRequest>,
) -> impl IntoResponse {
    let category = match req.category.parse() {
        Ok(category) => category,
        Err(msg) => {
            return (StatusCode::BAD_REQUEST, Json(ApiError::bad_request(msg))).into_response()
        }
    };
    member_response(store.award(&key, category, req.distinction))
}

fn move_response(result: RotationResult<()>) -> axum::response::Response {
    match result {
        Ok(()) => (StatusCode::OK, Json(ApiResponse::new(MoveOutcome { moved: true })))
            .into_response(),
        Err(RotationError::BoundaryReached) => (
            StatusCode::OK,
            Json(ApiResponse::new(MoveOutcome { moved: false })),
        )
            .into_response(),
        Err(err) => {
            let (status, body) = error_response(&err);
            (status, Json(body)).into_response()
        }
    }
}

/// POST /api/members/:key/promote - Move up one queue position
pub async fn promote(
    State(store): State<Arc<RotationStore>>,
    Path(key): Path<String>,
) -> impl IntoResponse {
    move_response(store.promote(&key))
}

/// POST /api/members/:key/demote - Move down one queue position
pub async fn demote(
    State(store): State<Arc<RotationStore>>,
    Path(key): Path<String>,
) -> impl IntoResponse {
    move_response(store.demote(&key))
}

/// POST /api/members/:key/deactivate - Bench an active member
pub async fn deactivate(
    State(store): State<Arc<RotationStore>>,
    Path(key): Path<String>,
) -> impl IntoResponse {
    member_response(store.deactivate(&key))
}

/// POST /api/members/:key/reactivate - Return a benched member to the queue
pub async fn reactivate(
    State(store): State<Arc<RotationStore>>,
    Path(key): Path<String>,
) -> impl IntoResponse {
    member_response(store.reactivate(&key))
}

/// POST /api/members/:key/retire - Permanently retire a member
pub async fn retire(
    State(store): State<Arc<RotationStore>>,
    Path(key): Path<String>,
) -> impl IntoResponse {
    member_response(store.retire(&key))
}

/// PUT /api/members/:key/name - Change a member's display name
pub async fn rename(
    State(store): State<Arc<RotationStore>>,
    Path(key): Path<String>,
    Json(req): Json<RenameRequest>,
) -> impl IntoResponse {
    member_response(store.rename(&key, &req.name))
}
