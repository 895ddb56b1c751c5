//! Request and response shapes for the journal API

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Confirmation message returned by a successful append
pub const ENTRY_ADDED_MESSAGE: &str = "Entry added successfully";

/// A journal entry as submitted and as listed.
///
/// The creation timestamp drives list ordering but is not part of this shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub entry: String,
}

/// Response body for `POST /add_entry`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryAdded {
    pub message: String,
    pub timestamp: String,
}

impl EntryAdded {
    pub fn new(timestamp: String) -> Self {
        Self {
            message: ENTRY_ADDED_MESSAGE.to_string(),
            timestamp,
        }
    }
}

/// Render a timestamp as fixed-width RFC 3339 with microseconds and `Z`.
///
/// Fixed width keeps text ordering identical to chronological ordering.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Current UTC time in the stored timestamp format.
pub fn timestamp_now() -> String {
    format_timestamp(Utc::now())
}
