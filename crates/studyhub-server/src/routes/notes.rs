//! Note routes.
//!
//! - GET /api/notes - List notes, optionally filtered by subject/semester
//! - POST /api/notes - Create a note
//! - GET /api/notes/{id} - Fetch a note
//! - DELETE /api/notes/{id} - Delete a note

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};

use studyhub_core::{Note, NoteCreate, NoteId};
use studyhub_store::NoteFilter;

use super::MessageResponse;
use crate::error::{ApiResult, NOTE_NOT_FOUND};
use crate::extract::{ApiJson, ApiQuery, parse_id};
use crate::state::AppState;

/// GET /api/notes - List notes, newest first.
///
/// # Query Parameters
///
/// - `subject`: exact subject to match (optional)
/// - `semester`: exact semester to match (optional)
async fn list_notes(
    State(state): State<AppState>,
    ApiQuery(filter): ApiQuery<NoteFilter>,
) -> ApiResult<Json<Vec<Note>>> {
    let notes = state.store().list_notes(&filter).await?;

    tracing::debug!(
        count = notes.len(),
        subject = ?filter.subject(),
        semester = ?filter.semester(),
        "Listed notes"
    );

    Ok(Json(notes))
}

/// POST /api/notes - Create a note.
///
/// The server assigns `id` and `uploaded_at`; the body cannot set them.
async fn create_note(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<NoteCreate>,
) -> ApiResult<Json<Note>> {
    let note = state.store().create_note(&request).await?;

    tracing::info!(note_id = %note.id, subject = %note.subject, "Note created");

    Ok(Json(note))
}

/// GET /api/notes/{id} - Fetch a note.
async fn get_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Note>> {
    let id: NoteId = parse_id(&id, NOTE_NOT_FOUND)?;
    Ok(Json(state.store().get_note(id).await?))
}

/// DELETE /api/notes/{id} - Delete a note.
async fn delete_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let id: NoteId = parse_id(&id, NOTE_NOT_FOUND)?;
    state.store().delete_note(id).await?;

    tracing::info!(note_id = %id, "Note deleted");

    Ok(Json(MessageResponse::new("Note deleted successfully")))
}

/// Build note routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/notes", get(list_notes).post(create_note))
        .route("/api/notes/{id}", get(get_note).delete(delete_note))
}
