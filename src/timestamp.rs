//! Timestamp parsing and display formatting.
//!
//! Feed timestamps are fixed-width ISO-8601 strings. Anything that does not
//! parse degrades to "no date" instead of failing.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};

/// Display format used on pages: `yyyy/mm/dd hh:mm`.
pub const DISPLAY_FORMAT: &str = "%Y/%m/%d %H:%M";

const ISO_PREFIX_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
const ISO_PREFIX_LEN: usize = 19;

/// Parse the `yyyy-mm-ddThh:mm:ss` prefix of a publication timestamp.
///
/// Offsets and fractional seconds after the prefix are ignored, so the
/// result is the wall-clock time as written in the feed.
pub fn parse_published(value: &str) -> Option<NaiveDateTime> {
    let prefix = value.get(..ISO_PREFIX_LEN)?;
    NaiveDateTime::parse_from_str(prefix, ISO_PREFIX_FORMAT).ok()
}

/// Format a publication timestamp for display, or `None` if it is malformed.
pub fn format_published(value: &str) -> Option<String> {
    parse_published(value).map(|dt| dt.format(DISPLAY_FORMAT).to_string())
}

/// Parse a full RFC 3339 timestamp (e.g. `2025-03-01T10:15:00Z`) as UTC.
pub fn parse_instant(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value.trim())
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Format a "last updated" instant for display.
///
/// Unparseable input is returned unchanged.
pub fn format_last_updated(value: &str) -> String {
    match parse_instant(value) {
        Some(dt) => dt.format(DISPLAY_FORMAT).to_string(),
        None => {
            log::debug!("Keeping unparseable last-updated value {:?}", value);
            value.to_string()
        }
    }
}

/// ISO-8601 UTC string with second precision and a `Z` suffix.
pub fn to_iso(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Secs, true)
}
