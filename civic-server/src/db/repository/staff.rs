//! Staff Repository

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use shared::models::StaffCreate;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::Staff;
use crate::utils::time;

#[derive(Clone)]
pub struct StaffRepository {
    base: BaseRepository,
}

impl StaffRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// List the directory, ordered by name.
    pub async fn find_all(&self) -> RepoResult<Vec<Staff>> {
        let staff: Vec<Staff> = self
            .base
            .db()
            .query("SELECT * FROM staff ORDER BY name")
            .await?
            .take(0)?;
        Ok(staff)
    }

    /// Find a staff member by id ("staff:xyz").
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Staff>> {
        let thing: crate::db::models::StaffId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        let staff: Option<Staff> = self.base.db().select(thing).await?;
        Ok(staff)
    }

    /// Find a staff member by email.
    pub async fn find_by_email(&self, email: &str) -> RepoResult<Option<Staff>> {
        let email = email.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM staff WHERE email = $email LIMIT 1")
            .bind(("email", email))
            .await?;
        let staff: Vec<Staff> = result.take(0)?;
        Ok(staff.into_iter().next())
    }

    /// Provision a new staff member. The password is hashed before it
    /// touches the store; the unique email index backs up the pre-check.
    pub async fn create(&self, data: StaffCreate) -> RepoResult<Staff> {
        if self.find_by_email(&data.email).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Email '{}' already exists",
                data.email
            )));
        }

        let hash_pass = Staff::hash_password(&data.password)
            .map_err(|e| RepoError::Database(format!("Failed to hash password: {}", e)))?;

        let mut result = self
            .base
            .db()
            .query(
                r#"CREATE staff SET
                    name = $name,
                    email = $email,
                    hash_pass = $hash_pass,
                    department = $department,
                    created_at = $now
                RETURN AFTER"#,
            )
            .bind(("name", data.name))
            .bind(("email", data.email))
            .bind(("hash_pass", hash_pass))
            .bind(("department", data.department))
            .bind(("now", time::now_millis()))
            .await?;

        let created: Option<Staff> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create staff".to_string()))
    }

    /// Remove a staff member and clear the reference on every issue that
    /// pointed at them, in one batch. Issues keep their status; only the
    /// assignment goes away.
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing: crate::db::models::StaffId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Staff {} not found", id)))?;

        self.base
            .db()
            .query(
                r#"UPDATE issue SET assigned_staff = NONE, updated_at = $now
                    WHERE assigned_staff = $thing;
                DELETE $thing"#,
            )
            .bind(("now", time::now_millis()))
            .bind(("thing", thing))
            .await?;
        Ok(true)
    }
}
