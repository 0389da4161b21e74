//! Issues API module
//!
//! Citizen intake and tracking plus the staff console operations
//! (listing, status transitions, assignment).

mod handler;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/issues", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", post(handler::create).get(handler::list))
        .route("/{tracking_no}", get(handler::track))
        .route("/{tracking_no}/status", put(handler::update_status))
        .route("/{tracking_no}/assignee", put(handler::assign_staff))
}
