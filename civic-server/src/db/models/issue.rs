//! Issue Record

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use shared::models::{Department, IssueCategory, IssueStatus, Location, StaffSummary};

use super::serde_helpers;
use super::staff::StaffId;

/// Issue ID type
pub type IssueId = RecordId;

/// Issue record matching the SurrealDB `issue` table.
///
/// `tracking_no` is the citizen-facing identifier and carries a unique
/// index; `id` is the store key. `resolved_at` is present exactly when
/// `status` is Resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<IssueId>,
    pub tracking_no: String,
    pub category: IssueCategory,
    pub description: String,
    pub location: Location,
    #[serde(default)]
    pub photo_ref: Option<String>,
    pub status: IssueStatus,
    pub contact: String,
    pub department: Department,
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub assigned_staff: Option<StaffId>,
    pub created_at: i64,
    pub updated_at: i64,
    #[serde(default)]
    pub resolved_at: Option<i64>,
}

/// Issue plus resolved assignee details, returned by the assignment
/// endpoint so staff consoles don't need a second lookup.
#[derive(Debug, Clone, Serialize)]
pub struct IssueWithAssignee {
    #[serde(flatten)]
    pub issue: Issue,
    pub assignee: Option<StaffSummary>,
}
