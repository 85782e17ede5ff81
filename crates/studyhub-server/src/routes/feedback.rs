//! Feedback routes.
//!
//! - POST /api/feedback - Submit feedback
//! - GET /api/feedback - List feedback, newest first

use axum::{Json, Router, extract::State, routing::get};

use studyhub_core::{Feedback, FeedbackCreate};

use crate::error::ApiResult;
use crate::extract::ApiJson;
use crate::state::AppState;

/// POST /api/feedback - Submit feedback.
///
/// Any integer rating is accepted.
async fn submit_feedback(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<FeedbackCreate>,
) -> ApiResult<Json<Feedback>> {
    let feedback = state.store().create_feedback(&request).await?;

    tracing::info!(feedback_id = %feedback.id, rating = feedback.rating, "Feedback received");

    Ok(Json(feedback))
}

/// GET /api/feedback - List all feedback, newest first.
// TODO: restrict to administrators once the API has any notion of identity.
async fn list_feedback(State(state): State<AppState>) -> ApiResult<Json<Vec<Feedback>>> {
    Ok(Json(state.store().list_feedback().await?))
}

/// Build feedback routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/feedback", get(list_feedback).post(submit_feedback))
}

#[cfg(test)]
mod tests {
    use crate::routes::test_util::{router, send};
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_submit_without_rating_is_500() {
        let (status, body) =
            send(router(), "POST", "/api/feedback", Some(r#"{"comment": "hi"}"#)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["detail"].as_str().unwrap().contains("rating"));
    }

    #[tokio::test]
    async fn test_submit_with_fractional_rating_is_500() {
        let (status, _) = send(router(), "POST", "/api/feedback", Some(r#"{"rating": 4.5}"#)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_body_without_content_type_reaches_the_store() {
        use axum::body::{Body, to_bytes};
        use axum::http::Request;
        use tower::ServiceExt;

        let request = Request::builder()
            .method("POST")
            .uri("/api/feedback")
            .body(Body::from(r#"{"rating": 5}"#))
            .unwrap();
        let response = router().oneshot(request).await.unwrap();

        // The body parsed; only the unreachable database fails the request.
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(body["detail"].as_str().unwrap().starts_with("database error"));
    }
}
