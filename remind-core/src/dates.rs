//! Date and time helpers for the store's fixed formats.

use chrono::{Local, NaiveDate, NaiveTime};

use crate::error::{RemindError, RemindResult};

/// Storage format for dates. Zero-padded, so the string form sorts
/// lexicographically in chronological order.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Storage format for times (24-hour, zero-padded).
pub const TIME_FORMAT: &str = "%H:%M";

/// Current local calendar date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Signed number of whole calendar days from `a` to `b`.
pub fn days_between(a: NaiveDate, b: NaiveDate) -> i64 {
    (b - a).num_days()
}

/// Parse a YYYY-MM-DD date string.
pub fn parse_date(s: &str) -> RemindResult<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| RemindError::InvalidDate(s.to_string()))
}

/// Parse an HH:MM time string.
pub fn parse_time(s: &str) -> RemindResult<NaiveTime> {
    NaiveTime::parse_from_str(s, TIME_FORMAT).map_err(|_| RemindError::InvalidTime(s.to_string()))
}
