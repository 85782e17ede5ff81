//! Service info and health check endpoints.

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use super::MessageResponse;
use crate::state::AppState;

/// Banner returned by the API root.
pub const API_BANNER: &str = "KaMaTi Gang Study Hub API v2.0";

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: &'static str,
    /// Database reachability: "ok" or "unavailable".
    pub database: &'static str,
}

/// GET /api/ - Service banner.
async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new(API_BANNER))
}

/// GET /api/health - Health check endpoint.
///
/// Always 200 while the process is serving; `database` reports whether the
/// store answered.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = match state.store().ping().await {
        Ok(()) => "ok",
        Err(e) => {
            tracing::warn!(error = %e, "Health check could not reach database");
            "unavailable"
        }
    };

    Json(HealthResponse {
        status: "ok",
        database,
    })
}

/// Build health check routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api", get(root))
        .route("/api/", get(root))
        .route("/api/health", get(health_check))
}
