//! Issue Model
//!
//! Category, status and department enumerations plus the citizen-facing
//! request payloads. Statuses follow a forward-only lifecycle; see
//! [`IssueStatus::can_transition_to`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Report category as selected by the citizen.
///
/// Unknown values sent by older clients collapse to [`IssueCategory::Other`]
/// at the serde boundary, so routing always has a category to work with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueCategory {
    Pothole,
    GarbageOverflow,
    StreetlightOutage,
    WaterLeakage,
    #[serde(other)]
    Other,
}

impl IssueCategory {
    /// All known categories, in display order.
    pub const ALL: [IssueCategory; 5] = [
        IssueCategory::Pothole,
        IssueCategory::GarbageOverflow,
        IssueCategory::StreetlightOutage,
        IssueCategory::WaterLeakage,
        IssueCategory::Other,
    ];
}

impl fmt::Display for IssueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            IssueCategory::Pothole => "Pothole",
            IssueCategory::GarbageOverflow => "Garbage Overflow",
            IssueCategory::StreetlightOutage => "Streetlight Outage",
            IssueCategory::WaterLeakage => "Water Leakage",
            IssueCategory::Other => "Other",
        };
        f.write_str(label)
    }
}

/// Lifecycle status of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueStatus {
    Pending,
    Acknowledged,
    InProgress,
    Resolved,
}

impl IssueStatus {
    /// Whether a transition from `self` to `next` is allowed.
    ///
    /// Transitions are forward-only: Pending → Acknowledged → In Progress →
    /// Resolved, skipping ahead is fine, Resolved is terminal. Same-status
    /// "transitions" are rejected, which also keeps `resolved_at` write-once.
    pub fn can_transition_to(self, next: IssueStatus) -> bool {
        (next as u8) > (self as u8)
    }

    /// True once the issue has reached its terminal state.
    pub fn is_terminal(self) -> bool {
        self == IssueStatus::Resolved
    }
}

impl fmt::Display for IssueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            IssueStatus::Pending => "Pending",
            IssueStatus::Acknowledged => "Acknowledged",
            IssueStatus::InProgress => "In Progress",
            IssueStatus::Resolved => "Resolved",
        };
        f.write_str(label)
    }
}

/// Error for status strings outside the enumerated set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown status '{0}'")]
pub struct ParseStatusError(pub String);

impl FromStr for IssueStatus {
    type Err = ParseStatusError;

    /// Accepts the wire form ("IN_PROGRESS") and the display form
    /// ("In Progress"), case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "PENDING" => Ok(IssueStatus::Pending),
            "ACKNOWLEDGED" => Ok(IssueStatus::Acknowledged),
            "IN_PROGRESS" => Ok(IssueStatus::InProgress),
            "RESOLVED" => Ok(IssueStatus::Resolved),
            _ => Err(ParseStatusError(s.to_string())),
        }
    }
}

/// Municipal department owning an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Department {
    PublicWorks,
    Sanitation,
    Electrical,
    WaterSupply,
    GeneralServices,
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Department::PublicWorks => "Public Works",
            Department::Sanitation => "Sanitation",
            Department::Electrical => "Electrical",
            Department::WaterSupply => "Water Supply",
            Department::GeneralServices => "General Services",
        };
        f.write_str(label)
    }
}

/// Reported location: a coordinate pair plus an optional free-text landmark.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub longitude: f64,
    pub latitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub landmark: Option<String>,
}

/// Submit-report payload.
///
/// Coordinates are optional at the wire level so a missing field surfaces as
/// a precise validation message instead of a deserialization failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueSubmit {
    pub category: IssueCategory,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[serde(default)]
    pub landmark: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub photo_ref: Option<String>,
}

/// Status-update payload. The status arrives as a raw string and is parsed
/// server-side so out-of-set values get a user-actionable error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusUpdateRequest {
    pub status: String,
}

/// Staff-assignment payload, carries a `staff:<id>` record reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignStaffRequest {
    pub staff_id: String,
}
