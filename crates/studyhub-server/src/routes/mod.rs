//! Route definitions for the HTTP API.
//!
//! Every route lives under `/api`.

pub mod discussions;
pub mod feedback;
pub mod health;
pub mod notes;
pub mod replies;
pub mod search;

use axum::Router;
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Body returned by deletes, upvotes and the root endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Build the complete router with all routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(health::routes())
        .merge(notes::routes())
        .merge(discussions::routes())
        .merge(replies::routes())
        .merge(feedback::routes())
        .merge(search::routes())
        .with_state(state)
}
