//! Core data types for the Study Hub API.
//!
//! Four independent collections are modelled here:
//!
//! - `Note`: metadata for an uploaded study file (the file itself lives elsewhere)
//! - `Discussion`: a forum thread with denormalized `replies` and `upvotes` counters
//! - `Reply`: a message attached to a discussion
//! - `Feedback`: an append-only rating left by a visitor
//!
//! Every entity carries a server-assigned UUID v4 id and a server-assigned
//! UTC timestamp. Clients never choose either.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Author recorded when a discussion or reply is created without one.
pub const ANONYMOUS_AUTHOR: &str = "Anonymous";

// ============================================================================
// ID Types
// ============================================================================

/// Declares a UUID-backed identifier newtype.
///
/// Each id type is distinct so a `ReplyId` can never be passed where a
/// `DiscussionId` is expected.
macro_rules! uuid_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Creates a new random id using UUID v4.
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Creates an id from an existing UUID.
            #[must_use]
            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the inner UUID.
            #[must_use]
            pub const fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

uuid_id!(
    /// Unique identifier for a note.
    NoteId
);

uuid_id!(
    /// Unique identifier for a discussion.
    DiscussionId
);

uuid_id!(
    /// Unique identifier for a reply.
    ReplyId
);

uuid_id!(
    /// Unique identifier for a feedback submission.
    FeedbackId
);

// ============================================================================
// Notes
// ============================================================================

/// Metadata for a shared study file.
///
/// Immutable after creation; the only lifecycle change is deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub subject: String,
    pub semester: String,
    /// Free-form display size, e.g. "2.5 MB".
    pub size: Option<String>,
    pub file_url: Option<String>,
    pub uploaded_at: DateTime<Utc>,
}

/// Request body for creating a note.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteCreate {
    pub title: String,
    pub subject: String,
    pub semester: String,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub file_url: Option<String>,
}

// ============================================================================
// Discussions
// ============================================================================

/// A discussion thread.
///
/// `replies` is the number of live replies pointing at this discussion and is
/// maintained incrementally by reply creation and deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discussion {
    pub id: DiscussionId,
    pub title: String,
    pub content: String,
    pub author: String,
    pub replies: i64,
    pub upvotes: i64,
    pub created_at: DateTime<Utc>,
}

/// Request body for creating a discussion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscussionCreate {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub author: Option<String>,
}

impl DiscussionCreate {
    /// The author to persist, falling back to [`ANONYMOUS_AUTHOR`].
    pub fn author_or_anonymous(&self) -> &str {
        self.author.as_deref().unwrap_or(ANONYMOUS_AUTHOR)
    }
}

// ============================================================================
// Replies
// ============================================================================

/// A reply within a discussion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub id: ReplyId,
    pub discussion_id: DiscussionId,
    pub content: String,
    pub author: String,
    pub upvotes: i64,
    pub created_at: DateTime<Utc>,
}

/// Request body for creating a reply.
///
/// The parent discussion comes from the request path. A `discussion_id`
/// field in the body is accepted and ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplyCreate {
    pub content: String,
    #[serde(default)]
    pub author: Option<String>,
}

impl ReplyCreate {
    /// The author to persist, falling back to [`ANONYMOUS_AUTHOR`].
    pub fn author_or_anonymous(&self) -> &str {
        self.author.as_deref().unwrap_or(ANONYMOUS_AUTHOR)
    }
}

// ============================================================================
// Feedback
// ============================================================================

/// A visitor's rating of the site. The rating range is not enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub id: FeedbackId,
    pub rating: i64,
    pub comment: Option<String>,
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Request body for submitting feedback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackCreate {
    pub rating: i64,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn note_id_display_fromstr() {
        let id = NoteId::new();
        let parsed: NoteId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn id_rejects_non_uuid() {
        assert!("not-a-uuid".parse::<DiscussionId>().is_err());
        assert!("".parse::<ReplyId>().is_err());
    }

    #[test]
    fn ids_serialize_as_plain_strings() {
        let id = FeedbackId::from_uuid(Uuid::nil());
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"00000000-0000-0000-0000-000000000000\"");
    }

    #[test]
    fn note_create_optional_fields_default_to_none() {
        let json = r#"{"title": "Calculus I", "subject": "Mathematics", "semester": "3"}"#;
        let create: NoteCreate = serde_json::from_str(json).unwrap();
        assert_eq!(create.title, "Calculus I");
        assert!(create.size.is_none());
        assert!(create.file_url.is_none());
    }

    #[test]
    fn note_create_accepts_empty_strings() {
        let json = r#"{"title": "", "subject": "", "semester": ""}"#;
        let create: NoteCreate = serde_json::from_str(json).unwrap();
        assert!(create.title.is_empty());
    }

    #[test]
    fn note_create_requires_semester() {
        let json = r#"{"title": "Calculus I", "subject": "Mathematics"}"#;
        assert!(serde_json::from_str::<NoteCreate>(json).is_err());
    }

    #[test]
    fn note_serializes_missing_optionals_as_null() {
        let note = Note {
            id: NoteId::from_uuid(Uuid::nil()),
            title: "T".to_string(),
            subject: "S".to_string(),
            semester: "1".to_string(),
            size: None,
            file_url: None,
            uploaded_at: Utc::now(),
        };
        let value = serde_json::to_value(&note).unwrap();
        assert!(value["size"].is_null());
        assert!(value["file_url"].is_null());
        assert!(value["uploaded_at"].is_string());
    }

    #[test]
    fn discussion_create_defaults_to_anonymous() {
        let create: DiscussionCreate =
            serde_json::from_str(r#"{"title": "T", "content": "C"}"#).unwrap();
        assert_eq!(create.author_or_anonymous(), "Anonymous");

        let create: DiscussionCreate =
            serde_json::from_str(r#"{"title": "T", "content": "C", "author": null}"#).unwrap();
        assert_eq!(create.author_or_anonymous(), "Anonymous");
    }

    #[test]
    fn discussion_create_keeps_named_author() {
        let create: DiscussionCreate =
            serde_json::from_str(r#"{"title": "T", "content": "C", "author": "TestStudent"}"#)
                .unwrap();
        assert_eq!(create.author_or_anonymous(), "TestStudent");
    }

    #[test]
    fn reply_create_ignores_discussion_id_in_body() {
        let json = r#"{"discussion_id": "whatever", "content": "R", "author": "HelpfulStudent"}"#;
        let create: ReplyCreate = serde_json::from_str(json).unwrap();
        assert_eq!(create.content, "R");
        assert_eq!(create.author_or_anonymous(), "HelpfulStudent");
    }

    #[test]
    fn feedback_create_allows_out_of_range_rating() {
        let create: FeedbackCreate = serde_json::from_str(r#"{"rating": -7}"#).unwrap();
        assert_eq!(create.rating, -7);
        assert!(create.comment.is_none());
        assert!(create.name.is_none());
    }

    #[test]
    fn feedback_create_rejects_string_rating() {
        assert!(serde_json::from_str::<FeedbackCreate>(r#"{"rating": "five"}"#).is_err());
    }
}
