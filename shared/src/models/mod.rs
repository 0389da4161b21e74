//! Data models
//!
//! Shared between civic-server and frontend (via API).
//! Issue/staff records themselves live in the server's `db::models`; this
//! module holds the enums and payload types both sides agree on.

pub mod analytics;
pub mod issue;
pub mod staff;

// Re-exports
pub use analytics::*;
pub use issue::*;
pub use staff::*;
