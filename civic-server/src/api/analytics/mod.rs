//! Analytics API module (dashboard)

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/analytics", routes())
}

fn routes() -> Router<ServerState> {
    Router::new().route("/summary", get(handler::summary))
}
