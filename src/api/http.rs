//! HTTP server setup with Axum

use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use super::rest::{members, roster};
use crate::rotation::RotationStore;

/// Create the Axum router with all endpoints
pub fn create_router(store: Arc<RotationStore>) -> Router {
    // CORS configuration - allow all origins; the service carries no
    // credentials (authorization happens upstream)
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Queries
        .route("/api/roster", get(roster::get_roster))
        .route("/api/roster/next", get(roster::get_next))
        .route("/api/roster/text", get(roster::get_roster_text))
        .route("/api/log", get(roster::get_log))
        .route("/api/log/text", get(roster::get_log_text))
        .route("/api/stats", get(roster::get_stats))
        .route("/api/stats/text", get(roster::get_stats_text))
        // Commands
        .route("/api/members", post(members::add_member))
        .route("/api/members/:key/award", post(members::award))
        .route("/api/members/:key/promote", post(members::promote))
        .route("/api/members/:key/demote", post(members::demote))
        .route("/api/members/:key/deactivate", post(members::deactivate))
        .route("/api/members/:key/reactivate", post(members::reactivate))
        .route("/api/members/:key/retire", post(members::retire))
        .route("/api/members/:key/name", put(members::rename))
        .layer(cors)
        .with_state(store)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
