//! Publish date labels.
//!
//! Dates arrive as free-form strings. A parseable date is rendered as an
//! en-US short label (`Sep 1, 2025`) in UTC together with a normalized
//! ISO-8601 timestamp; anything else degrades to the raw string.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Label shown when an item has no publish date.
pub const DATE_TBA: &str = "Date TBA";

/// Zoned formats tried after RFC 3339 (offsets without a colon, etc.).
const ZONED_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%d %H:%M:%S%.f%z"];

/// Naive date-times, read as UTC.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Display label plus optional machine-readable timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishedAt {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iso: Option<String>,
}

/// Format an optional raw publish date.
///
/// - absent or empty: label [`DATE_TBA`], no timestamp
/// - unparseable: label is the raw string, no timestamp
/// - parseable: label `Mon D, YYYY`, timestamp `YYYY-MM-DDTHH:MM:SS.mmmZ`
#[must_use]
pub fn format_published_at(raw: Option<&str>) -> PublishedAt {
    let Some(raw) = raw.filter(|s| !s.is_empty()) else {
        return PublishedAt {
            label: DATE_TBA.to_owned(),
            iso: None,
        };
    };

    match parse_timestamp(raw) {
        Some(ts) => PublishedAt {
            label: ts.format("%b %-d, %Y").to_string(),
            iso: Some(ts.to_rfc3339_opts(SecondsFormat::Millis, true)),
        },
        None => {
            tracing::debug!(raw, "unparseable publish date, showing raw value");
            PublishedAt {
                label: raw.to_owned(),
                iso: None,
            }
        }
    }
}

/// Parse a raw date string into a UTC timestamp.
///
/// Accepts RFC 3339, ISO-8601 date-times with or without an offset, and
/// plain `YYYY-MM-DD`, `YYYY-MM` or `YYYY` dates (midnight UTC on the first
/// day of the period). Date-times without an offset are read as UTC.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    for fmt in ZONED_FORMATS {
        if let Ok(ts) = DateTime::parse_from_str(raw, fmt) {
            return Some(ts.with_timezone(&Utc));
        }
    }
    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(naive.and_utc());
        }
    }
    parse_calendar_date(raw)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// `YYYY-MM-DD`, or the reduced-precision `YYYY-MM` / `YYYY` forms.
fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let four_digit_year = raw.get(..4).is_some_and(|y| y.bytes().all(|b| b.is_ascii_digit()));
    if !four_digit_year {
        return None;
    }
    match raw.len() {
        4 => NaiveDate::from_ymd_opt(raw.parse().ok()?, 1, 1),
        7 if raw.as_bytes()[4] == b'-' && raw[5..].bytes().all(|b| b.is_ascii_digit()) => {
            NaiveDate::from_ymd_opt(raw[..4].parse().ok()?, raw[5..].parse().ok()?, 1)
        }
        _ => NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok(),
    }
}
