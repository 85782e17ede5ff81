//! API error types with JSON responses.
//!
//! The API distinguishes exactly two failures: a missing entity (404) and
//! everything else (500). Both render as `{"detail": "..."}`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use studyhub_store::StoreError;

pub const NOTE_NOT_FOUND: &str = "Note not found";
pub const DISCUSSION_NOT_FOUND: &str = "Discussion not found";
pub const REPLY_NOT_FOUND: &str = "Reply not found";

/// API error that can be returned from handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Not found (404).
    #[error("{0}")]
    NotFound(String),

    /// Internal server error (500).
    #[error("{0}")]
    Internal(String),

    /// Store error.
    #[error("{0}")]
    Store(#[from] StoreError),
}

impl ApiError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Store(e) if e.is_not_found() => StatusCode::NOT_FOUND,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message placed in the response `detail` field.
    pub fn detail(&self) -> String {
        match self {
            Self::Store(StoreError::NoteNotFound(_)) => NOTE_NOT_FOUND.to_string(),
            Self::Store(StoreError::DiscussionNotFound(_)) => DISCUSSION_NOT_FOUND.to_string(),
            Self::Store(StoreError::ReplyNotFound(_)) => REPLY_NOT_FOUND.to_string(),
            other => other.to_string(),
        }
    }
}

/// JSON error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = ErrorResponse {
            detail: self.detail(),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_not_found_status() {
        let err = ApiError::NotFound(NOTE_NOT_FOUND.to_string());
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.detail(), "Note not found");
    }

    #[test]
    fn test_store_not_found_maps_to_404() {
        let err = ApiError::from(StoreError::DiscussionNotFound(Uuid::nil()));
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.detail(), "Discussion not found");

        let err = ApiError::from(StoreError::ReplyNotFound(Uuid::nil()));
        assert_eq!(err.detail(), "Reply not found");
    }

    #[test]
    fn test_other_store_errors_are_internal() {
        let err = ApiError::from(StoreError::Database(sqlx::Error::PoolTimedOut));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.detail().contains("pool timed out"));
    }

    #[test]
    fn test_internal_exposes_raw_message() {
        let err = ApiError::Internal("missing field `title`".to_string());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.detail(), "missing field `title`");
    }

    #[test]
    fn test_error_response_serialize() {
        let body = ErrorResponse {
            detail: "Reply not found".to_string(),
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"detail":"Reply not found"}"#);
    }
}
