//! Time helpers
//!
//! All persisted timestamps are Unix milliseconds (`i64`); conversion to and
//! from wall-clock types happens at the edges.

use chrono::Utc;

/// Current time as Unix millis.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}
