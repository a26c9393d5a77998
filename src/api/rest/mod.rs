//! REST API module for HTTP endpoints
//!
//! Command endpoints:
//! - `POST /api/members` - Add a member to the rotation
//! - `POST /api/members/:key/award` - Award an MVP
//! - `POST /api/members/:key/promote` (`demote`, `deactivate`,
//!   `reactivate`, `retire`) - Lifecycle moves
//! - `PUT /api/members/:key/name` - Rename a member
//!
//! Query endpoints:
//! - `GET /api/roster` - Full state snapshot
//! - `GET /api/roster/next` - Designated next recipient
//! - `GET /api/log`, `GET /api/stats` - History and counters as JSON
//! - `GET /api/roster/text`, `GET /api/log/text`, `GET /api/stats/text` -
//!   Rendered views

pub mod members;
pub mod roster;

use axum::http::StatusCode;
use serde::Serialize;

use crate::rotation::RotationError;

/// Standard API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// API error response
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl ApiError {
    pub fn new(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: code.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(message, "BAD_REQUEST")
    }
}

/// Map a rotation failure to an HTTP status and error body
///
/// Promote/demote handlers intercept `BoundaryReached` before reaching
/// this mapping and answer with a successful no-op instead.
pub fn error_response(err: &RotationError) -> (StatusCode, ApiError) {
    match err {
        RotationError::InvalidIndex { .. } => (
            StatusCode::BAD_REQUEST,
            ApiError::new(err.to_string(), "INVALID_INDEX"),
        ),
        RotationError::NotFound(_) => (
            StatusCode::NOT_FOUND,
            ApiError::new(err.to_string(), "NOT_FOUND"),
        ),
        RotationError::AlreadyExists(_) => (
            StatusCode::CONFLICT,
            ApiError::new(err.to_string(), "ALREADY_EXISTS"),
        ),
        RotationError::BoundaryReached => (
            StatusCode::OK,
            ApiError::new(err.to_string(), "BOUNDARY_REACHED"),
        ),
        RotationError::Io(_) | RotationError::Json(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::new(err.to_string(), "PERSISTENCE_FAILURE"),
        ),
    }
}
