//! Analytics API Handlers

use axum::{Json, extract::State};

use shared::models::AnalyticsSummary;

use crate::core::ServerState;
use crate::db::repository::AnalyticsRepository;
use crate::utils::AppResult;

/// GET /api/analytics/summary - full dashboard aggregate
///
/// Read-only; a store failure propagates as a 500 rather than returning
/// partial numbers.
pub async fn summary(State(state): State<ServerState>) -> AppResult<Json<AnalyticsSummary>> {
    let repo = AnalyticsRepository::new(state.get_db());
    let summary = repo.summary().await?;
    Ok(Json(summary))
}
