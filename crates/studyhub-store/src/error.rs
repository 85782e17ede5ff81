//! Error types for the storage layer.

use thiserror::Error;
use uuid::Uuid;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database connection or query error.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Note not found.
    #[error("note not found: {0}")]
    NoteNotFound(Uuid),

    /// Discussion not found.
    #[error("discussion not found: {0}")]
    DiscussionNotFound(Uuid),

    /// Reply not found.
    #[error("reply not found: {0}")]
    ReplyNotFound(Uuid),

    /// Migration error.
    #[error("migration error: {0}")]
    MigrationError(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    ConfigError(String),
}

impl StoreError {
    /// Whether this error means the addressed entity does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::NoteNotFound(_) | Self::DiscussionNotFound(_) | Self::ReplyNotFound(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_variants() {
        assert!(StoreError::NoteNotFound(Uuid::nil()).is_not_found());
        assert!(StoreError::DiscussionNotFound(Uuid::nil()).is_not_found());
        assert!(StoreError::ReplyNotFound(Uuid::nil()).is_not_found());
        assert!(!StoreError::ConfigError("x".to_string()).is_not_found());
        assert!(!StoreError::Database(sqlx::Error::RowNotFound).is_not_found());
    }

    #[test]
    fn test_display_includes_id() {
        let err = StoreError::ReplyNotFound(Uuid::nil());
        assert_eq!(
            err.to_string(),
            "reply not found: 00000000-0000-0000-0000-000000000000"
        );
    }
}
