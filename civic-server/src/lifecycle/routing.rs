//! Department routing
//!
//! Pure mapping from report category to the department that owns it.
//! Categories outside the known set already collapsed to `Other` at the
//! serde boundary, so this stays a total function.

use shared::models::{Department, IssueCategory};

/// Department that handles reports of the given category.
pub fn route(category: IssueCategory) -> Department {
    match category {
        IssueCategory::Pothole => Department::PublicWorks,
        IssueCategory::GarbageOverflow => Department::Sanitation,
        IssueCategory::StreetlightOutage => Department::Electrical,
        IssueCategory::WaterLeakage => Department::WaterSupply,
        IssueCategory::Other => Department::GeneralServices,
    }
}
