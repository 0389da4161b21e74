//! Analytics Model
//!
//! Aggregate shapes returned by the dashboard endpoint. All counts are
//! computed store-side; see the server's analytics repository.

use serde::{Deserialize, Serialize};

use super::{IssueCategory, IssueStatus};

/// Issues per category, descending by count. Ties fall back to the store's
/// grouping order, which is not guaranteed stable across runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: IssueCategory,
    pub count: i64,
}

/// Issues per status, no ordering contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusCount {
    pub status: IssueStatus,
    pub count: i64,
}

/// Dashboard summary over the full issue collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsSummary {
    pub total_issues: i64,
    /// Number of resolved issues with a usable timestamp pair; this is the
    /// denominator of `avg_resolution_hours`.
    pub resolved_count: i64,
    /// Mean of (resolved_at - created_at) in hours over qualifying resolved
    /// issues. 0.0 when none qualify, never NaN.
    pub avg_resolution_hours: f64,
    pub category_trend: Vec<CategoryCount>,
    pub status_counts: Vec<StatusCount>,
}
