//! Issue Repository

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use shared::models::{Department, IssueCategory, IssueStatus, Location};

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Issue, StaffId};
use crate::utils::time;

/// Fields of a new issue, assembled by the lifecycle manager after
/// validation and department routing.
#[derive(Debug, Clone)]
pub struct NewIssue {
    pub tracking_no: String,
    pub category: IssueCategory,
    pub description: String,
    pub location: Location,
    pub photo_ref: Option<String>,
    pub contact: String,
    pub department: Department,
}

#[derive(Clone)]
pub struct IssueRepository {
    base: BaseRepository,
}

impl IssueRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Insert a new issue with status Pending.
    ///
    /// The unique index on `tracking_no` makes this the collision check:
    /// a duplicate draw comes back as [`RepoError::Duplicate`] and the
    /// caller retries with a fresh number.
    pub async fn create(&self, data: NewIssue) -> RepoResult<Issue> {
        let now = time::now_millis();
        let mut result = self
            .base
            .db()
            .query(
                r#"CREATE issue SET
                    tracking_no = $tracking_no,
                    category = $category,
                    description = $description,
                    location = $location,
                    photo_ref = $photo_ref,
                    status = $status,
                    contact = $contact,
                    department = $department,
                    assigned_staff = NONE,
                    created_at = $now,
                    updated_at = $now,
                    resolved_at = NONE
                RETURN AFTER"#,
            )
            .bind(("tracking_no", data.tracking_no))
            .bind(("category", data.category))
            .bind(("description", data.description))
            .bind(("location", data.location))
            .bind(("photo_ref", data.photo_ref))
            .bind(("status", IssueStatus::Pending))
            .bind(("contact", data.contact))
            .bind(("department", data.department))
            .bind(("now", now))
            .await?;

        let created: Option<Issue> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create issue".to_string()))
    }

    /// Find an issue by its citizen-facing tracking number.
    pub async fn find_by_tracking(&self, tracking_no: &str) -> RepoResult<Option<Issue>> {
        let tracking_no = tracking_no.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM issue WHERE tracking_no = $tracking_no LIMIT 1")
            .bind(("tracking_no", tracking_no))
            .await?;
        let issues: Vec<Issue> = result.take(0)?;
        Ok(issues.into_iter().next())
    }

    /// List issues, most recent first, optionally filtered by status.
    pub async fn find_all(&self, status: Option<IssueStatus>) -> RepoResult<Vec<Issue>> {
        let mut result = match status {
            Some(status) => {
                self.base
                    .db()
                    .query(
                        "SELECT * FROM issue WHERE status = $status ORDER BY created_at DESC",
                    )
                    .bind(("status", status))
                    .await?
            }
            None => {
                self.base
                    .db()
                    .query("SELECT * FROM issue ORDER BY created_at DESC")
                    .await?
            }
        };
        let issues: Vec<Issue> = result.take(0)?;
        Ok(issues)
    }

    /// Set the status in a single atomic update.
    ///
    /// `resolved_at` is written only when provided; otherwise the stored
    /// value is kept. Returns the updated record, or None if no issue has
    /// that tracking number.
    pub async fn update_status(
        &self,
        tracking_no: &str,
        status: IssueStatus,
        resolved_at: Option<i64>,
    ) -> RepoResult<Option<Issue>> {
        let tracking_no = tracking_no.to_string();
        let now = time::now_millis();
        let mut result = self
            .base
            .db()
            .query(
                r#"UPDATE issue SET
                    status = $status,
                    resolved_at = IF $has_resolved THEN $resolved_at ELSE resolved_at END,
                    updated_at = $now
                WHERE tracking_no = $tracking_no
                RETURN AFTER"#,
            )
            .bind(("status", status))
            .bind(("has_resolved", resolved_at.is_some()))
            .bind(("resolved_at", resolved_at))
            .bind(("now", now))
            .bind(("tracking_no", tracking_no))
            .await?;
        let issues: Vec<Issue> = result.take(0)?;
        Ok(issues.into_iter().next())
    }

    /// Point the issue at a staff record. Caller has already verified the
    /// staff record exists.
    pub async fn assign(
        &self,
        tracking_no: &str,
        staff_id: StaffId,
    ) -> RepoResult<Option<Issue>> {
        let tracking_no = tracking_no.to_string();
        let now = time::now_millis();
        let mut result = self
            .base
            .db()
            .query(
                r#"UPDATE issue SET
                    assigned_staff = $staff_id,
                    updated_at = $now
                WHERE tracking_no = $tracking_no
                RETURN AFTER"#,
            )
            .bind(("staff_id", staff_id))
            .bind(("now", now))
            .bind(("tracking_no", tracking_no))
            .await?;
        let issues: Vec<Issue> = result.take(0)?;
        Ok(issues.into_iter().next())
    }

    /// Total issue count (health endpoint).
    pub async fn count(&self) -> RepoResult<i64> {
        #[derive(serde::Deserialize)]
        struct CountRow {
            total: i64,
        }

        let mut result = self
            .base
            .db()
            .query("SELECT count() AS total FROM issue GROUP ALL")
            .await?;
        let rows: Vec<CountRow> = result.take(0)?;
        Ok(rows.first().map(|r| r.total).unwrap_or(0))
    }
}
