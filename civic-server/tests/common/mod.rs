//! Shared test fixtures: a throwaway RocksDB-backed database, the lifecycle
//! service wired to a recording notification gateway, and payload builders.

// Not every integration-test crate uses every fixture
#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use tempfile::TempDir;

use civic_server::db::DbService;
use civic_server::db::repository::{
    AnalyticsRepository, IssueRepository, StaffRepository, issue::NewIssue,
};
use civic_server::lifecycle::IssueLifecycle;
use civic_server::notify::{DeliveryError, Notification, NotificationGateway, NotificationService};
use shared::models::{Department, IssueCategory, IssueSubmit, Location, StaffCreate};

/// Gateway that records deliveries for assertions.
#[derive(Debug, Default)]
pub struct RecordingGateway {
    pub sent: Mutex<Vec<Notification>>,
}

#[async_trait]
impl NotificationGateway for RecordingGateway {
    async fn deliver(&self, notification: &Notification) -> Result<(), DeliveryError> {
        self.sent.lock().unwrap().push(notification.clone());
        Ok(())
    }
}

pub struct TestContext {
    // Held for the lifetime of the database files
    pub _tmp: TempDir,
    pub db: Surreal<Db>,
    pub lifecycle: IssueLifecycle,
    pub issues: IssueRepository,
    pub staff: StaffRepository,
    pub analytics: AnalyticsRepository,
    pub gateway: Arc<RecordingGateway>,
}

pub async fn setup() -> TestContext {
    let tmp = tempfile::tempdir().unwrap();
    let db = DbService::new(&tmp.path().join("civicdesk.db"))
        .await
        .unwrap()
        .db;

    let gateway = Arc::new(RecordingGateway::default());
    let notifications = NotificationService::start(gateway.clone());

    let issues = IssueRepository::new(db.clone());
    let staff = StaffRepository::new(db.clone());
    let analytics = AnalyticsRepository::new(db.clone());
    let lifecycle = IssueLifecycle::new(issues.clone(), staff.clone(), notifications);

    TestContext {
        _tmp: tmp,
        db,
        lifecycle,
        issues,
        staff,
        analytics,
        gateway,
    }
}

pub fn submit(category: IssueCategory) -> IssueSubmit {
    IssueSubmit {
        category,
        latitude: Some(41.1496),
        longitude: Some(-8.6109),
        landmark: Some("next to the market hall".into()),
        description: "Deep pothole across the cycle lane".into(),
        contact: "912000111".into(),
        photo_ref: None,
    }
}

pub fn staff_create(email: &str) -> StaffCreate {
    StaffCreate {
        name: "Ana Mendes".into(),
        email: email.into(),
        password: "long-enough-secret".into(),
        department: Department::PublicWorks,
    }
}

/// Seed an issue directly at the repository level with a chosen tracking
/// number, bypassing the lifecycle's generator.
pub async fn seed_issue(issues: &IssueRepository, tracking_no: &str) {
    issues
        .create(NewIssue {
            tracking_no: tracking_no.to_string(),
            category: IssueCategory::Other,
            description: "seeded".into(),
            location: Location {
                longitude: -8.6,
                latitude: 41.1,
                landmark: None,
            },
            photo_ref: None,
            contact: "912999888".into(),
            department: Department::GeneralServices,
        })
        .await
        .unwrap();
}

/// Poll until `cond` holds or a second passes.
pub async fn wait_for<F: Fn() -> bool>(cond: F) {
    for _ in 0..100 {
        if cond() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("condition not reached within 1s");
}
