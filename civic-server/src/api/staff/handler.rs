//! Staff API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use shared::models::StaffCreate;

use crate::core::ServerState;
use crate::db::models::Staff;
use crate::db::repository::StaffRepository;
use crate::utils::AppResult;
use crate::utils::validation::{
    MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_PASSWORD_LEN, validate_required_text,
};

/// GET /api/staff - list the directory
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Staff>>> {
    let repo = StaffRepository::new(state.get_db());
    let staff = repo.find_all().await?;
    Ok(Json(staff))
}

/// POST /api/staff - provision a staff member
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<StaffCreate>,
) -> AppResult<Json<Staff>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&payload.email, "email", MAX_EMAIL_LEN)?;
    validate_required_text(&payload.password, "password", MAX_PASSWORD_LEN)?;

    let repo = StaffRepository::new(state.get_db());
    let staff = repo.create(payload).await?;
    Ok(Json(staff))
}

/// DELETE /api/staff/{id} - remove a staff member
///
/// Issues assigned to them revert to unassigned in the same operation.
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = StaffRepository::new(state.get_db());
    let result = repo.delete(&id).await?;
    Ok(Json(result))
}
