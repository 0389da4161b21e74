//! API route modules
//!
//! - [`health`] - liveness check
//! - [`issues`] - citizen intake, tracking, status and assignment
//! - [`staff`] - staff directory (administrative provisioning)
//! - [`analytics`] - dashboard summary

pub mod analytics;
pub mod health;
pub mod issues;
pub mod staff;

use axum::Router;

use crate::core::ServerState;

/// Compose the full API router.
pub fn router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(issues::router())
        .merge(staff::router())
        .merge(analytics::router())
}
