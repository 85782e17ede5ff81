//! Database models for the storage layer.
//!
//! These types map directly to database rows and are used for
//! sqlx queries. They are separate from the domain types in
//! studyhub-core so the core crate stays free of sqlx.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use sqlx::FromRow;
use uuid::Uuid;

use studyhub_core::{
    Discussion, DiscussionId, Feedback, FeedbackId, Note, NoteId, Reply, ReplyId,
};

/// Database row for the `notes` table.
#[derive(Debug, Clone, FromRow)]
pub struct NoteRow {
    pub id: Uuid,
    pub title: String,
    pub subject: String,
    pub semester: String,
    pub size: Option<String>,
    pub file_url: Option<String>,
    pub uploaded_at: DateTime<Utc>,
}

impl From<NoteRow> for Note {
    fn from(row: NoteRow) -> Self {
        Self {
            id: NoteId::from_uuid(row.id),
            title: row.title,
            subject: row.subject,
            semester: row.semester,
            size: row.size,
            file_url: row.file_url,
            uploaded_at: row.uploaded_at,
        }
    }
}

/// Database row for the `discussions` table.
#[derive(Debug, Clone, FromRow)]
pub struct DiscussionRow {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: String,
    pub replies: i64,
    pub upvotes: i64,
    pub created_at: DateTime<Utc>,
}

impl From<DiscussionRow> for Discussion {
    fn from(row: DiscussionRow) -> Self {
        Self {
            id: DiscussionId::from_uuid(row.id),
            title: row.title,
            content: row.content,
            author: row.author,
            replies: row.replies,
            upvotes: row.upvotes,
            created_at: row.created_at,
        }
    }
}

/// Database row for the `replies` table.
#[derive(Debug, Clone, FromRow)]
pub struct ReplyRow {
    pub id: Uuid,
    pub discussion_id: Uuid,
    pub content: String,
    pub author: String,
    pub upvotes: i64,
    pub created_at: DateTime<Utc>,
}

impl From<ReplyRow> for Reply {
    fn from(row: ReplyRow) -> Self {
        Self {
            id: ReplyId::from_uuid(row.id),
            discussion_id: DiscussionId::from_uuid(row.discussion_id),
            content: row.content,
            author: row.author,
            upvotes: row.upvotes,
            created_at: row.created_at,
        }
    }
}

/// Database row for the `feedback` table.
#[derive(Debug, Clone, FromRow)]
pub struct FeedbackRow {
    pub id: Uuid,
    pub rating: i64,
    pub comment: Option<String>,
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<FeedbackRow> for Feedback {
    fn from(row: FeedbackRow) -> Self {
        Self {
            id: FeedbackId::from_uuid(row.id),
            rating: row.rating,
            comment: row.comment,
            name: row.name,
            created_at: row.created_at,
        }
    }
}

/// Exact-match filters applied to note listings and note searches.
///
/// An empty string is treated the same as an absent filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NoteFilter {
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub semester: Option<String>,
}

impl NoteFilter {
    pub fn new(subject: Option<String>, semester: Option<String>) -> Self {
        Self { subject, semester }
    }

    /// Subject to match, if the filter is set and non-empty.
    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref().filter(|s| !s.is_empty())
    }

    /// Semester to match, if the filter is set and non-empty.
    pub fn semester(&self) -> Option<&str> {
        self.semester.as_deref().filter(|s| !s.is_empty())
    }
}

/// Build a case-insensitive substring pattern for `ILIKE ... ESCAPE '\'`.
///
/// `%`, `_` and `\` in the query are escaped so they match literally.
pub fn contains_pattern(query: &str) -> String {
    let mut pattern = String::with_capacity(query.len() + 2);
    pattern.push('%');
    for c in query.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
