//! Substring search routes.
//!
//! - GET /api/search/notes?q=...&subject=...&semester=... - Search note titles and subjects
//! - GET /api/search/discussions?q=... - Search discussion titles and content
//!
//! Matching is case-insensitive and literal. Results are not ranked; they use
//! the same newest-first order as the corresponding list endpoint.

use axum::{Json, Router, extract::State, routing::get};
use serde::Deserialize;

use studyhub_core::{Discussion, Note};
use studyhub_store::NoteFilter;

use crate::error::ApiResult;
use crate::extract::ApiQuery;
use crate::state::AppState;

/// Query parameters for note search.
#[derive(Debug, Deserialize)]
pub struct SearchNotesParams {
    /// Substring to look for (required).
    pub q: String,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub semester: Option<String>,
}

/// Query parameters for discussion search.
#[derive(Debug, Deserialize)]
pub struct SearchDiscussionsParams {
    /// Substring to look for (required).
    pub q: String,
}

/// GET /api/search/notes - Search notes by title or subject.
async fn search_notes(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<SearchNotesParams>,
) -> ApiResult<Json<Vec<Note>>> {
    let filter = NoteFilter::new(params.subject, params.semester);
    let notes = state.store().search_notes(&params.q, &filter).await?;

    tracing::debug!(query = %params.q, count = notes.len(), "Searched notes");

    Ok(Json(notes))
}

/// GET /api/search/discussions - Search discussions by title or content.
async fn search_discussions(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<SearchDiscussionsParams>,
) -> ApiResult<Json<Vec<Discussion>>> {
    let discussions = state.store().search_discussions(&params.q).await?;

    tracing::debug!(query = %params.q, count = discussions.len(), "Searched discussions");

    Ok(Json(discussions))
}

/// Build search routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/search/notes", get(search_notes))
        .route("/api/search/discussions", get(search_discussions))
}
