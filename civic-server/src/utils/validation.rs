//! Input validation helpers
//!
//! Centralized text length constants and validation functions used by the
//! intake and staff handlers. Contact strings are deliberately not
//! format-checked (phone or email both pass); only presence and length are
//! enforced.

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Staff names and free-text landmarks
pub const MAX_NAME_LEN: usize = 200;

/// Report descriptions
pub const MAX_DESCRIPTION_LEN: usize = 500;

/// Citizen contact strings (phone number or email)
pub const MAX_CONTACT_LEN: usize = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Passwords (before hashing)
pub const MAX_PASSWORD_LEN: usize = 128;

/// Photo references (paths / URLs)
pub const MAX_PHOTO_REF_LEN: usize = 2048;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        )));
    }
    Ok(())
}

/// Validate that a coordinate pair is present and within WGS84 bounds.
pub fn validate_coordinates(
    latitude: Option<f64>,
    longitude: Option<f64>,
) -> Result<(f64, f64), AppError> {
    let lat = latitude.ok_or_else(|| AppError::validation("latitude is required"))?;
    let lon = longitude.ok_or_else(|| AppError::validation("longitude is required"))?;

    if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
        return Err(AppError::validation(format!(
            "latitude {lat} is out of range (-90..=90)"
        )));
    }
    if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
        return Err(AppError::validation(format!(
            "longitude {lon} is out of range (-180..=180)"
        )));
    }
    Ok((lat, lon))
}
