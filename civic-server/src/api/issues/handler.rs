//! Issues API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use shared::models::{AssignStaffRequest, IssueStatus, IssueSubmit, StatusUpdateRequest};

use crate::core::ServerState;
use crate::db::models::{Issue, IssueWithAssignee};
use crate::db::repository::IssueRepository;
use crate::utils::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub status: Option<String>,
}

/// POST /api/issues - submit a citizen report
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<IssueSubmit>,
) -> AppResult<Json<Issue>> {
    let issue = state.lifecycle.create(payload).await?;
    Ok(Json(issue))
}

/// GET /api/issues - staff listing, most recent first
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Issue>>> {
    let status = query
        .status
        .as_deref()
        .map(|s| {
            s.parse::<IssueStatus>()
                .map_err(|e| AppError::validation(e.to_string()))
        })
        .transpose()?;

    let repo = IssueRepository::new(state.get_db());
    let issues = repo.find_all(status).await?;
    Ok(Json(issues))
}

/// GET /api/issues/{tracking_no} - citizen tracking lookup
pub async fn track(
    State(state): State<ServerState>,
    Path(tracking_no): Path<String>,
) -> AppResult<Json<Issue>> {
    let issue = state.lifecycle.track(&tracking_no).await?;
    Ok(Json(issue))
}

/// PUT /api/issues/{tracking_no}/status - transition status
pub async fn update_status(
    State(state): State<ServerState>,
    Path(tracking_no): Path<String>,
    Json(payload): Json<StatusUpdateRequest>,
) -> AppResult<Json<Issue>> {
    let issue = state
        .lifecycle
        .set_status(&tracking_no, &payload.status)
        .await?;
    Ok(Json(issue))
}

/// PUT /api/issues/{tracking_no}/assignee - assign handling staff
pub async fn assign_staff(
    State(state): State<ServerState>,
    Path(tracking_no): Path<String>,
    Json(payload): Json<AssignStaffRequest>,
) -> AppResult<Json<IssueWithAssignee>> {
    let issue = state
        .lifecycle
        .assign_staff(&tracking_no, &payload.staff_id)
        .await?;
    Ok(Json(issue))
}
