//! Staff Record

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use shared::models::Department;

use super::serde_helpers;

/// Staff ID type
pub type StaffId = RecordId;

/// Staff record matching the SurrealDB `staff` table.
///
/// `hash_pass` holds an argon2 PHC string and is never serialized outward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Staff {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<StaffId>,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub hash_pass: String,
    pub department: Department,
    pub created_at: i64,
}

impl Staff {
    /// Verify a candidate password against the stored hash.
    pub fn verify_password(&self, password: &str) -> Result<bool, argon2::password_hash::Error> {
        use argon2::{
            Argon2,
            password_hash::{PasswordHash, PasswordVerifier},
        };

        let parsed_hash = PasswordHash::new(&self.hash_pass)?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Hash a password using argon2 with a fresh salt.
    pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
        use argon2::{
            Argon2,
            password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
        };

        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let password_hash = argon2.hash_password(password.as_bytes(), &salt)?;
        Ok(password_hash.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_hash_round_trip() {
        let hash = Staff::hash_password("hunter2-but-longer").unwrap();
        assert!(hash.starts_with("$argon2"));
        assert!(!hash.contains("hunter2"));

        let staff = Staff {
            id: None,
            name: "Ana Mendes".into(),
            email: "ana.mendes@example.gov".into(),
            hash_pass: hash,
            department: Department::PublicWorks,
            created_at: 0,
        };
        assert!(staff.verify_password("hunter2-but-longer").unwrap());
        assert!(!staff.verify_password("wrong-password").unwrap());
    }

    #[test]
    fn hash_is_never_serialized() {
        let staff = Staff {
            id: None,
            name: "Ana Mendes".into(),
            email: "ana.mendes@example.gov".into(),
            hash_pass: Staff::hash_password("secret-enough").unwrap(),
            department: Department::Sanitation,
            created_at: 1,
        };
        let json = serde_json::to_string(&staff).unwrap();
        assert!(!json.contains("hash_pass"));
        assert!(!json.contains("argon2"));
    }
}
