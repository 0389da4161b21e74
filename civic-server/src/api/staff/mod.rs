//! Staff API module (administrative provisioning)
//!
//! Authentication is out of scope for this deployment; the directory
//! endpoints are expected to sit behind the municipal network boundary.

mod handler;

use axum::{
    Router,
    routing::{delete, get},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/staff", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/{id}", delete(handler::delete))
}
