//! Reply routes.
//!
//! - GET /api/discussions/{id}/replies - List replies, oldest first
//! - POST /api/discussions/{id}/replies - Reply to a discussion
//! - DELETE /api/replies/{id} - Delete a reply
//! - POST /api/replies/{id}/upvote - Upvote a reply

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get, post},
};

use studyhub_core::{DiscussionId, Reply, ReplyCreate, ReplyId};

use super::MessageResponse;
use crate::error::{ApiResult, DISCUSSION_NOT_FOUND, REPLY_NOT_FOUND};
use crate::extract::{ApiJson, parse_id};
use crate::state::AppState;

/// GET /api/discussions/{id}/replies - List replies in conversation order.
///
/// An unknown discussion has no replies, so this returns an empty list
/// rather than 404.
async fn list_replies(
    State(state): State<AppState>,
    Path(discussion_id): Path<String>,
) -> ApiResult<Json<Vec<Reply>>> {
    let Ok(discussion_id) = discussion_id.parse::<DiscussionId>() else {
        return Ok(Json(Vec::new()));
    };
    Ok(Json(state.store().list_replies(discussion_id).await?))
}

/// POST /api/discussions/{id}/replies - Reply to a discussion.
///
/// Fails with 404 when the discussion does not exist. On success the
/// discussion's `replies` counter has been incremented.
async fn create_reply(
    State(state): State<AppState>,
    Path(discussion_id): Path<String>,
    ApiJson(request): ApiJson<ReplyCreate>,
) -> ApiResult<Json<Reply>> {
    let discussion_id: DiscussionId = parse_id(&discussion_id, DISCUSSION_NOT_FOUND)?;
    let reply = state.store().create_reply(discussion_id, &request).await?;

    tracing::info!(
        reply_id = %reply.id,
        discussion_id = %discussion_id,
        "Reply created"
    );

    Ok(Json(reply))
}

/// DELETE /api/replies/{id} - Delete a reply.
///
/// The parent discussion's `replies` counter is decremented if the
/// discussion still exists.
async fn delete_reply(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let id: ReplyId = parse_id(&id, REPLY_NOT_FOUND)?;
    let discussion_id = state.store().delete_reply(id).await?;

    tracing::info!(reply_id = %id, discussion_id = %discussion_id, "Reply deleted");

    Ok(Json(MessageResponse::new("Reply deleted successfully")))
}

/// POST /api/replies/{id}/upvote - Add one upvote.
async fn upvote_reply(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let id: ReplyId = parse_id(&id, REPLY_NOT_FOUND)?;
    state.store().upvote_reply(id).await?;

    tracing::debug!(reply_id = %id, "Reply upvoted");

    Ok(Json(MessageResponse::new("Reply upvoted successfully")))
}

/// Build reply routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/discussions/{id}/replies",
            get(list_replies).post(create_reply),
        )
        .route("/api/replies/{id}", delete(delete_reply))
        .route("/api/replies/{id}/upvote", post(upvote_reply))
}
