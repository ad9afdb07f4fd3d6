//! Timestamp grammar for the `Added on ...` clause.
//!
//! Only the textual family written by the device is recognized, e.g.
//! `Tuesday, May 1, 2018 10:14:32 PM` or `Saturday, 3 March 2018 22:14:32`.
//! Anything else is rejected rather than guessed at.

use chrono::{NaiveDate, NaiveDateTime, Weekday};

const DATE_TIME_FORMATS: &[&str] = &[
    "%B %d, %Y %I:%M:%S %p",
    "%B %d, %Y %I:%M %p",
    "%B %d, %Y %H:%M:%S",
    "%B %d, %Y %H:%M",
    "%d %B %Y %H:%M:%S",
    "%d %B %Y %H:%M",
];

const ISO_DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%B %d, %Y", "%d %B %Y"];

/// Parse the raw `Added on` text of a metadata line.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let text = strip_weekday(raw.trim());
    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
}

/// Parse a user supplied cutoff. Accepts everything `parse_timestamp` does,
/// ISO 8601 date-times, and bare dates (meaning midnight).
pub fn parse_cutoff(raw: &str) -> Option<NaiveDateTime> {
    if let Some(timestamp) = parse_timestamp(raw) {
        return Some(timestamp);
    }

    let text = strip_weekday(raw.trim());
    ISO_DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

/// Drop a leading `<weekday>, `. The weekday is not checked against the date.
fn strip_weekday(text: &str) -> &str {
    match text.split_once(", ") {
        Some((head, rest)) if head.parse::<Weekday>().is_ok() => rest,
        _ => text,
    }
}
