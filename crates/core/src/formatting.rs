//! # Conversational time formatting
//!
//! Renders provider timestamps the way a person would read them out:
//! weekday and clock time in Indian Standard Time, e.g. `"Monday, 3:30 PM"`.
//!
//! Formatting only affects display text, so a timestamp that cannot be read
//! becomes the literal `"Invalid Date"` instead of failing the request.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use chrono_tz::Tz;
use thiserror::Error;

/// Timezone every slot is displayed in.
pub const TARGET_TIMEZONE: Tz = chrono_tz::Asia::Kolkata;

/// Display text used when a timestamp cannot be formatted.
pub const INVALID_DATE: &str = "Invalid Date";

/// Full weekday, 12-hour clock without padding, minutes, meridiem.
const CONVERSATIONAL_FORMAT: &str = "%A, %-I:%M %p";

/// ISO layouts with an explicit offset that RFC 3339 parsing rejects.
const OFFSET_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%dT%H:%M%z"];

/// Layouts without an offset; these are read as UTC.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("unrecognized timestamp {0:?}")]
    Unparseable(String),
}

/// Reads a timestamp in any of the accepted layouts and normalizes it to UTC.
///
/// A string of digits, optionally signed, is taken as milliseconds since the
/// Unix epoch.
pub fn parse_timestamp(input: &str) -> Result<DateTime<Utc>, FormatError> {
    let trimmed = input.trim();

    if let Some(instant) = parse_epoch_millis(trimmed) {
        return Ok(instant);
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(parsed.with_timezone(&Utc));
    }

    for format in OFFSET_FORMATS {
        if let Ok(parsed) = DateTime::parse_from_str(trimmed, format) {
            return Ok(parsed.with_timezone(&Utc));
        }
    }

    if let Ok(parsed) = DateTime::parse_from_rfc2822(trimmed) {
        return Ok(parsed.with_timezone(&Utc));
    }

    for format in NAIVE_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(parsed.and_utc());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN).and_utc());
    }

    Err(FormatError::Unparseable(input.to_string()))
}

fn parse_epoch_millis(input: &str) -> Option<DateTime<Utc>> {
    let digits = input.strip_prefix('-').unwrap_or(input);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    input.parse::<i64>().ok().and_then(DateTime::from_timestamp_millis)
}

/// Formats a timestamp for display, reporting why it could not be read.
pub fn try_format_conversational_date(timestamp: &str) -> Result<String, FormatError> {
    let instant = parse_timestamp(timestamp)?;

    Ok(instant
        .with_timezone(&TARGET_TIMEZONE)
        .format(CONVERSATIONAL_FORMAT)
        .to_string())
}

/// Formats a timestamp for display, falling back to [`INVALID_DATE`].
pub fn format_to_conversational_date(timestamp: &str) -> String {
    try_format_conversational_date(timestamp).unwrap_or_else(|_| INVALID_DATE.to_string())
}
