//! Database record types (SurrealDB)

pub mod serde_helpers;

pub mod issue;
pub mod staff;

pub use issue::{Issue, IssueId, IssueWithAssignee};
pub use staff::{Staff, StaffId};
