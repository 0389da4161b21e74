//! Shared types for CivicDesk
//!
//! Data model shared between the server and its API clients: issue
//! category/status/department enums, request payloads, and analytics
//! summary shapes. No I/O lives here.

pub mod models;

// Re-exports
pub use models::{
    AnalyticsSummary, AssignStaffRequest, CategoryCount, Department, IssueCategory, IssueStatus,
    IssueSubmit, Location, ParseStatusError, StaffCreate, StaffSummary, StatusCount,
    StatusUpdateRequest,
};
