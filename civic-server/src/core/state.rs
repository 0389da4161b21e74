//! Server state
//!
//! Shared handle cloned into every request: configuration, the embedded
//! database, the notification queue, and the issue lifecycle service.

use std::sync::Arc;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::core::Config;
use crate::core::error::{Result, ServerError};
use crate::db::DbService;
use crate::db::repository::{IssueRepository, StaffRepository};
use crate::lifecycle::IssueLifecycle;
use crate::notify::{LogGateway, NotificationGateway, NotificationService};

#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// Embedded database (SurrealDB)
    pub db: Surreal<Db>,
    /// Outbound notification queue
    pub notifications: NotificationService,
    /// Issue lifecycle service
    pub lifecycle: IssueLifecycle,
}

impl ServerState {
    /// Initialize the server state: working directory, database, the
    /// notification worker, and the lifecycle service on top of them.
    pub async fn initialize(config: &Config) -> Result<Self> {
        Self::initialize_with_gateway(config, Arc::new(LogGateway)).await
    }

    /// Like [`initialize`](Self::initialize) but with an explicit
    /// notification gateway. Tests plug in a recording gateway here.
    pub async fn initialize_with_gateway(
        config: &Config,
        gateway: Arc<dyn NotificationGateway>,
    ) -> Result<Self> {
        config.ensure_work_dir_structure()?;

        let db_path = config.database_dir().join("civicdesk.db");
        let db_service = DbService::new(&db_path)
            .await
            .map_err(|e| ServerError::Database(e.to_string()))?;
        let db = db_service.db;

        let notifications = NotificationService::start(gateway);
        let lifecycle = IssueLifecycle::new(
            IssueRepository::new(db.clone()),
            StaffRepository::new(db.clone()),
            notifications.clone(),
        );

        Ok(Self {
            config: config.clone(),
            db,
            notifications,
            lifecycle,
        })
    }

    /// Database handle for repositories constructed in handlers.
    pub fn get_db(&self) -> Surreal<Db> {
        self.db.clone()
    }

    /// Stop background workers. Called after the HTTP server drains.
    pub fn shutdown(&self) {
        self.notifications.shutdown();
    }
}
