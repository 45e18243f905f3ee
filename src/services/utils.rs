//! # src/services/utils.rs
//!
//! Enthält allgemeine Hilfsfunktionen, z.B. für Zeitstempel.

use chrono::{SecondsFormat, Utc};

/// Returns the current timestamp in ISO 8601 format in UTC with microsecond precision.
///
/// # Returns
///
/// A string representing the timestamp in ISO 8601 format (YYYY-MM-DDTHH:MM:SS.ffffffZ).
pub fn get_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}
