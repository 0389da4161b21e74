//! Database Module
//!
//! Embedded SurrealDB (RocksDB engine) bootstrap and schema definition.

pub mod models;
pub mod repository;

use std::path::Path;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};

use crate::utils::AppError;

/// Tables and indexes, applied idempotently at startup.
///
/// The unique index on `issue.tracking_no` is the write-time duplicate check
/// the tracking-number retry loop relies on; `staff.email` gets the same
/// treatment for directory provisioning.
const SCHEMA: &str = r#"
DEFINE TABLE IF NOT EXISTS issue;
DEFINE INDEX IF NOT EXISTS issue_tracking_no ON issue FIELDS tracking_no UNIQUE;
DEFINE INDEX IF NOT EXISTS issue_status ON issue FIELDS status;
DEFINE INDEX IF NOT EXISTS issue_created_at ON issue FIELDS created_at;

DEFINE TABLE IF NOT EXISTS staff;
DEFINE INDEX IF NOT EXISTS staff_email ON staff FIELDS email UNIQUE;
"#;

/// Database service — owns the embedded SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open (or create) the database at `db_path` and apply the schema.
    pub async fn new(db_path: &Path) -> Result<Self, AppError> {
        let db: Surreal<Db> = Surreal::new::<RocksDb>(db_path)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        db.use_ns("civicdesk")
            .use_db("main")
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        db.query(SCHEMA)
            .await
            .map_err(|e| AppError::database(format!("Failed to define schema: {e}")))?;

        tracing::info!("Database ready at {}", db_path.display());

        Ok(Self { db })
    }
}
