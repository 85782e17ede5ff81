//! Discussion routes.
//!
//! - GET /api/discussions - List discussions, newest first
//! - POST /api/discussions - Start a discussion
//! - GET /api/discussions/{id} - Fetch a discussion
//! - DELETE /api/discussions/{id} - Delete a discussion and all its replies
//! - POST /api/discussions/{id}/upvote - Upvote a discussion

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};

use studyhub_core::{Discussion, DiscussionCreate, DiscussionId};

use super::MessageResponse;
use crate::error::{ApiResult, DISCUSSION_NOT_FOUND};
use crate::extract::{ApiJson, parse_id};
use crate::state::AppState;

/// GET /api/discussions - List all discussions, newest first.
async fn list_discussions(State(state): State<AppState>) -> ApiResult<Json<Vec<Discussion>>> {
    Ok(Json(state.store().list_discussions().await?))
}

/// POST /api/discussions - Start a discussion.
///
/// Counters start at zero; a missing or null `author` becomes "Anonymous".
async fn create_discussion(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<DiscussionCreate>,
) -> ApiResult<Json<Discussion>> {
    let discussion = state.store().create_discussion(&request).await?;

    tracing::info!(
        discussion_id = %discussion.id,
        author = %discussion.author,
        "Discussion created"
    );

    Ok(Json(discussion))
}

/// GET /api/discussions/{id} - Fetch a discussion.
async fn get_discussion(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Discussion>> {
    let id: DiscussionId = parse_id(&id, DISCUSSION_NOT_FOUND)?;
    Ok(Json(state.store().get_discussion(id).await?))
}

/// DELETE /api/discussions/{id} - Delete a discussion.
///
/// Replies pointing at the discussion are removed in the same transaction,
/// even when the discussion itself no longer exists (404).
async fn delete_discussion(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let id: DiscussionId = parse_id(&id, DISCUSSION_NOT_FOUND)?;
    let replies_deleted = state.store().delete_discussion(id).await?;

    tracing::info!(discussion_id = %id, replies_deleted, "Discussion deleted");

    Ok(Json(MessageResponse::new("Discussion deleted successfully")))
}

/// POST /api/discussions/{id}/upvote - Add one upvote.
async fn upvote_discussion(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let id: DiscussionId = parse_id(&id, DISCUSSION_NOT_FOUND)?;
    state.store().upvote_discussion(id).await?;

    tracing::debug!(discussion_id = %id, "Discussion upvoted");

    Ok(Json(MessageResponse::new("Discussion upvoted successfully")))
}

/// Build discussion routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/discussions",
            get(list_discussions).post(create_discussion),
        )
        .route(
            "/api/discussions/{id}",
            get(get_discussion).delete(delete_discussion),
        )
        .route("/api/discussions/{id}/upvote", post(upvote_discussion))
}
