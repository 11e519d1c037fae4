//! Journal entry handlers

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::{AppError, AppState, SuccessResponse, MAX_PAGE_LIMIT};
use muse_core::models::{JournalEntry, NewJournalEntry};

/// Query parameters for listing entries
#[derive(Debug, Deserialize)]
pub struct EntriesQuery {
    /// Maximum entries to return (default 50)
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    50
}

/// GET /api/users/:id/entries - List a user's entries, newest first
pub async fn list_entries(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    Query(params): Query<EntriesQuery>,
) -> Result<Json<Vec<JournalEntry>>, AppError> {
    if params.limit == 0 || params.limit > MAX_PAGE_LIMIT {
        return Err(AppError::bad_request(&format!(
            "limit must be between 1 and {}",
            MAX_PAGE_LIMIT
        )));
    }

    let entries = state.db.get_journal_entries(&user_id, params.limit)?;
    Ok(Json(entries))
}

/// POST /api/entries - Create a journal entry
pub async fn create_entry(
    State(state): State<Arc<AppState>>,
    Json(new_entry): Json<NewJournalEntry>,
) -> Result<(StatusCode, Json<JournalEntry>), AppError> {
    if new_entry.user_id.trim().is_empty() {
        return Err(AppError::bad_request("userId must not be empty"));
    }

    state.db.get_or_create_user(&new_entry.user_id)?;
    let entry = state.db.insert_entry(&new_entry)?;
    state.db.touch_last_active(&new_entry.user_id)?;

    Ok((StatusCode::CREATED, Json(entry)))
}

/// GET /api/entries/:id - Fetch a single entry
pub async fn get_entry(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<JournalEntry>, AppError> {
    let entry = state
        .db
        .get_entry(&id)?
        .ok_or_else(|| AppError::not_found("Entry not found"))?;
    Ok(Json(entry))
}

/// DELETE /api/entries/:id - Delete an entry
pub async fn delete_entry(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<SuccessResponse>, AppError> {
    state.db.delete_entry(&id)?;
    Ok(Json(SuccessResponse { success: true }))
}
