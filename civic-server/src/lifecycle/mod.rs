//! Issue lifecycle
//!
//! Domain service owning every issue mutation: intake (validate, route,
//! mint a tracking number), status transitions, and staff assignment.
//! Handlers stay thin and call into [`IssueLifecycle`]; notification
//! delivery is queued fire-and-forget and can never fail an operation.

pub mod routing;
pub mod tracking;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use shared::models::{IssueStatus, IssueSubmit, Location, StaffSummary};

use crate::db::models::{Issue, IssueWithAssignee};
use crate::db::repository::issue::NewIssue;
use crate::db::repository::{IssueRepository, RepoError, StaffRepository};
use crate::notify::NotificationService;
use crate::utils::validation::{
    MAX_CONTACT_LEN, MAX_DESCRIPTION_LEN, MAX_NAME_LEN, MAX_PHOTO_REF_LEN,
    validate_coordinates, validate_optional_text, validate_required_text,
};
use crate::utils::{AppError, AppResult, time};

/// Attempts before a run of duplicate tracking numbers is treated as a
/// store failure. Five misses in a row needs the 900k space to be nearly
/// full, at which point giving up is the right answer.
const MAX_TRACKING_ATTEMPTS: u32 = 5;

#[derive(Clone)]
pub struct IssueLifecycle {
    issues: IssueRepository,
    staff: StaffRepository,
    notify: NotificationService,
}

impl IssueLifecycle {
    pub fn new(
        issues: IssueRepository,
        staff: StaffRepository,
        notify: NotificationService,
    ) -> Self {
        Self {
            issues,
            staff,
            notify,
        }
    }

    /// Intake a citizen report.
    pub async fn create(&self, submit: IssueSubmit) -> AppResult<Issue> {
        self.create_with_rng(submit, &mut StdRng::from_entropy())
            .await
    }

    /// Intake with an explicit entropy source (tests inject a scripted one).
    pub async fn create_with_rng<R: Rng + Send>(
        &self,
        submit: IssueSubmit,
        rng: &mut R,
    ) -> AppResult<Issue> {
        let (latitude, longitude) = validate_submit(&submit)?;
        let department = routing::route(submit.category);

        let location = Location {
            longitude,
            latitude,
            landmark: submit.landmark,
        };

        for attempt in 1..=MAX_TRACKING_ATTEMPTS {
            let tracking_no = tracking::generate(rng);
            let data = NewIssue {
                tracking_no: tracking_no.clone(),
                category: submit.category,
                description: submit.description.clone(),
                location: location.clone(),
                photo_ref: submit.photo_ref.clone(),
                contact: submit.contact.clone(),
                department,
            };

            match self.issues.create(data).await {
                Ok(issue) => {
                    tracing::info!(
                        tracking_no = %issue.tracking_no,
                        category = %issue.category,
                        department = %issue.department,
                        "Issue created"
                    );
                    self.notify.send(
                        &issue.contact,
                        format!(
                            "Your report has been received. Track it with number {}.",
                            issue.tracking_no
                        ),
                    );
                    return Ok(issue);
                }
                Err(RepoError::Duplicate(_)) => {
                    tracing::warn!(
                        tracking_no = %tracking_no,
                        attempt,
                        "Tracking number collision, regenerating"
                    );
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(AppError::database(format!(
            "Could not allocate a unique tracking number after {MAX_TRACKING_ATTEMPTS} attempts"
        )))
    }

    /// Look up an issue by tracking number.
    pub async fn track(&self, tracking_no: &str) -> AppResult<Issue> {
        self.issues
            .find_by_tracking(tracking_no)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Issue {tracking_no} not found")))
    }

    /// Transition an issue to a new status.
    ///
    /// The raw status string is parsed here so out-of-set values come back
    /// as a validation error. Transitions are forward-only; entering
    /// Resolved stamps `resolved_at` exactly once. Concurrent updates to
    /// the same issue are last-write-wins by design of the store layer.
    pub async fn set_status(&self, tracking_no: &str, raw_status: &str) -> AppResult<Issue> {
        let next: IssueStatus = raw_status
            .parse()
            .map_err(|e: shared::models::ParseStatusError| AppError::validation(e.to_string()))?;

        let current = self.track(tracking_no).await?;
        if !current.status.can_transition_to(next) {
            return Err(AppError::business_rule(format!(
                "Cannot change status of {} from {} to {}",
                tracking_no, current.status, next
            )));
        }

        let resolved_at = (next == IssueStatus::Resolved).then(time::now_millis);
        let updated = self
            .issues
            .update_status(tracking_no, next, resolved_at)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Issue {tracking_no} not found")))?;

        tracing::info!(
            tracking_no = %updated.tracking_no,
            status = %updated.status,
            "Issue status updated"
        );
        self.notify.send(
            &updated.contact,
            format!("Report {} is now: {}.", updated.tracking_no, updated.status),
        );
        Ok(updated)
    }

    /// Assign a staff member to an issue.
    ///
    /// The staff record must exist; a dangling reference is never written.
    /// Returns the issue with the assignee's display details resolved.
    pub async fn assign_staff(
        &self,
        tracking_no: &str,
        staff_id: &str,
    ) -> AppResult<IssueWithAssignee> {
        let staff = self
            .staff
            .find_by_id(staff_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Staff {staff_id} not found")))?;
        let staff_thing = staff
            .id
            .clone()
            .ok_or_else(|| AppError::internal("staff record is missing its id"))?;

        let issue = self
            .issues
            .assign(tracking_no, staff_thing)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Issue {tracking_no} not found")))?;

        tracing::info!(
            tracking_no = %issue.tracking_no,
            staff = %staff.name,
            "Issue assigned"
        );

        Ok(IssueWithAssignee {
            issue,
            assignee: Some(StaffSummary {
                name: staff.name,
                department: staff.department,
            }),
        })
    }
}

fn validate_submit(submit: &IssueSubmit) -> AppResult<(f64, f64)> {
    validate_required_text(&submit.description, "description", MAX_DESCRIPTION_LEN)?;
    validate_required_text(&submit.contact, "contact", MAX_CONTACT_LEN)?;
    validate_optional_text(&submit.landmark, "landmark", MAX_NAME_LEN)?;
    validate_optional_text(&submit.photo_ref, "photo_ref", MAX_PHOTO_REF_LEN)?;
    validate_coordinates(submit.latitude, submit.longitude)
}
