//! Insertion timestamps in the club's record format.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Local wall-clock capture stored on payment and contact records.
///
/// Records keep the formatted strings, not an instant: `date` as
/// `DD/MM/YYYY` and `time` as 12-hour `HH:MM AM|PM`. Both are set once when
/// a record is inserted and never refreshed by later updates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsertStamp {
    pub date: String,
    pub time: String,
}

impl InsertStamp {
    /// Capture the current local time.
    pub fn now() -> Self {
        Self::at(Local::now())
    }

    /// Format an explicit instant. Tests pin this one.
    pub fn at(instant: DateTime<Local>) -> Self {
        Self {
            date: instant.format("%d/%m/%Y").to_string(),
            time: instant.format("%I:%M %p").to_string(),
        }
    }
}
