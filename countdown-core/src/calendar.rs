//! Date arithmetic for the countdown target.
//!
//! A target date always means the last millisecond of that calendar day in
//! the caller's zone.

use chrono::{DateTime, NaiveDate, TimeZone};

use crate::error::CountdownError;

/// Milliseconds in one (nominal) day.
pub const MILLIS_PER_DAY: i64 = 86_400_000;

/// Wire format of a picker date (`YYYY-MM-DD`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a picker value into a calendar date.
///
/// # Errors
///
/// Returns [`CountdownError::MissingDate`] for an empty (or blank) value and
/// [`CountdownError::InvalidDate`] when the value is not `YYYY-MM-DD`.
pub fn parse_date(value: &str) -> Result<NaiveDate, CountdownError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CountdownError::MissingDate);
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|source| {
        CountdownError::InvalidDate {
            value: value.to_string(),
            source,
        }
    })
}

/// The instant `date` 23:59:59.999 in `tz`.
///
/// On a repeated local hour the later instant wins. Returns `None` only when
/// that wall-clock time does not exist in `tz`.
#[must_use]
pub fn end_of_day<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> Option<DateTime<Tz>> {
    let naive = date.and_hms_milli_opt(23, 59, 59, 999)?;
    tz.from_local_datetime(&naive).latest()
}

/// `ceil(total_ms / MILLIS_PER_DAY)` in integer arithmetic.
#[must_use]
pub const fn ceil_days(total_ms: i64) -> i64 {
    -(total_ms.saturating_neg().div_euclid(MILLIS_PER_DAY))
}

/// Today's date in the zone of `now`, formatted for the picker's `min`.
#[must_use]
pub fn today_iso<Tz: TimeZone>(now: &DateTime<Tz>) -> String {
    now.date_naive().format(DATE_FORMAT).to_string()
}
