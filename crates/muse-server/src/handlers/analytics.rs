//! Analytics report handler

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::{AppError, AppState};
use muse_core::models::{Analytics, Period};

/// Query parameters for the analytics endpoint
#[derive(Debug, Deserialize)]
pub struct AnalyticsQuery {
    /// Reporting period (default week)
    pub period: Option<String>,
    /// Recompute even if a fresh stored report exists
    #[serde(default)]
    pub refresh: bool,
}

pub(crate) fn parse_period(period: Option<&str>) -> Result<Period, AppError> {
    period
        .unwrap_or("week")
        .parse()
        .map_err(|e: String| AppError::bad_request(&e))
}

/// GET /api/users/:id/analytics - Cache-gated analytics report
pub async fn get_analytics(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    Query(params): Query<AnalyticsQuery>,
) -> Result<Json<Analytics>, AppError> {
    let period = parse_period(params.period.as_deref())?;

    let report = if params.refresh {
        let report = state.analytics.generate(&state.db, &user_id, period)?;
        state.db.save_analytics(&report)?;
        report
    } else {
        state.analytics.get_or_generate(&state.db, &user_id, period)?
    };

    Ok(Json(report))
}
