//! Staff Model

use serde::{Deserialize, Serialize};

use super::Department;

/// Create staff payload (administrative provisioning).
///
/// The password travels only in this request; the server stores an argon2
/// hash and never serializes it back out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffCreate {
    pub name: String,
    pub email: String,
    pub password: String,
    pub department: Department,
}

/// Assignee details embedded in issue responses for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffSummary {
    pub name: String,
    pub department: Department,
}
