//! User handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{AppError, AppState, SuccessResponse};
use muse_core::models::{User, UserPreferences};

/// GET /api/users/:id - Fetch a user, creating the default record on first access
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<User>, AppError> {
    let user = state.db.get_or_create_user(&id)?;
    Ok(Json(user))
}

/// PUT /api/users/:id/preferences - Replace a user's preferences
pub async fn update_preferences(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(preferences): Json<UserPreferences>,
) -> Result<Json<SuccessResponse>, AppError> {
    // First write for a fresh install creates the user implicitly
    state.db.get_or_create_user(&id)?;
    state.db.update_preferences(&id, &preferences)?;

    Ok(Json(SuccessResponse { success: true }))
}
