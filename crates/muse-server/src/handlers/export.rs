//! Export handlers

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use super::analytics::parse_period;
use crate::{AppError, AppState};
use muse_core::export::{export_user_data, JournalExport, UserDataExport};

/// Query parameters for the journal export
#[derive(Debug, Deserialize)]
pub struct ExportQuery {
    /// Reporting period (default week)
    pub period: Option<String>,
}

/// GET /api/users/:id/export - Insights + mood history + entry digests
pub async fn export_journal(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    Query(params): Query<ExportQuery>,
) -> Result<Json<JournalExport>, AppError> {
    let period = parse_period(params.period.as_deref())?;
    let export = state
        .analytics
        .export_journal(&state.db, &user_id, period)?;
    Ok(Json(export))
}

/// GET /api/users/:id/export/full - Full user-data takeout
pub async fn export_full(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<UserDataExport>, AppError> {
    let takeout = export_user_data(&state.db, &user_id)?;
    Ok(Json(takeout))
}
