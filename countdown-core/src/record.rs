use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};

use crate::calendar::ceil_days;

/// Remaining time as shown by the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeLeft {
    /// Whole days, rounded up.
    pub days: i64,
    /// Signed milliseconds until the target instant.
    pub total: i64,
}

impl TimeLeft {
    /// Remaining time from `now` until `target`.
    #[must_use]
    pub fn between<Tz, Now>(target: &DateTime<Tz>, now: &DateTime<Now>) -> Self
    where
        Tz: TimeZone,
        Now: TimeZone,
    {
        let total = target
            .clone()
            .signed_duration_since(now.clone())
            .num_milliseconds();
        Self::from_millis(total)
    }

    #[must_use]
    pub const fn from_millis(total: i64) -> Self {
        Self {
            days: ceil_days(total),
            total,
        }
    }

    #[must_use]
    pub const fn is_expired(self) -> bool {
        self.total <= 0
    }
}

/// The single persisted snapshot, stored as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountdownRecord {
    pub target_date: String,
    #[serde(default)]
    pub time_left: Option<TimeLeft>,
}

impl CountdownRecord {
    #[must_use]
    pub fn new(target_date: impl Into<String>, time_left: Option<TimeLeft>) -> Self {
        Self {
            target_date: target_date.into(),
            time_left,
        }
    }

    /// Decode a stored value; anything malformed counts as no record.
    #[must_use]
    pub fn decode(raw: &str) -> Option<Self> {
        match serde_json::from_str(raw) {
            Ok(record) => Some(record),
            Err(err) => {
                log::warn!("Ignoring malformed countdown record: {err}");
                None
            }
        }
    }

    /// Encode for storage.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
