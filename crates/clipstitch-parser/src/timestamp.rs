//! Timestamp normalization.
//!
//! Two sources of time meet in this system and they disagree on zones:
//!
//! - Segment names encode local wall-clock time in the civil timezone. They
//!   become instants with the civil offset attached (`-03:00`).
//! - Server timestamps are UTC. When one arrives without a `Z` or offset
//!   marker it gets a `Z` appended before it is parsed.
//!
//! Both end up as `DateTime<FixedOffset>`, so comparisons are between
//! absolute instants. Treating a name as UTC (or a bare server timestamp as
//! local) shifts every match by three hours.

use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone};

/// Append `Z` to a server timestamp that has no zone marker.
///
/// Returns `None` for empty input. Timestamps already ending in `Z` or in a
/// `±HH:MM` offset are returned unchanged.
///
/// # Examples
///
/// ```
/// use clipstitch_parser::timestamp::normalize_server_timestamp;
///
/// assert_eq!(normalize_server_timestamp("2025-09-06T02:41:06").as_deref(), Some("2025-09-06T02:41:06Z"));
/// assert_eq!(normalize_server_timestamp("2025-09-06T02:41:06Z").as_deref(), Some("2025-09-06T02:41:06Z"));
/// assert_eq!(normalize_server_timestamp("2025-09-05T23:41:06-03:00").as_deref(), Some("2025-09-05T23:41:06-03:00"));
/// assert_eq!(normalize_server_timestamp(""), None);
/// ```
pub fn normalize_server_timestamp(ts: &str) -> Option<String> {
    let ts = ts.trim();
    if ts.is_empty() {
        return None;
    }
    if ts.ends_with('Z') || has_offset_suffix(ts) {
        return Some(ts.to_string());
    }
    Some(format!("{ts}Z"))
}

/// Whether `ts` ends in `+HH:MM` or `-HH:MM`.
fn has_offset_suffix(ts: &str) -> bool {
    let bytes = ts.as_bytes();
    if bytes.len() < 6 {
        return false;
    }
    let tail = &bytes[bytes.len() - 6..];
    matches!(tail[0], b'+' | b'-')
        && tail[1].is_ascii_digit()
        && tail[2].is_ascii_digit()
        && tail[3] == b':'
        && tail[4].is_ascii_digit()
        && tail[5].is_ascii_digit()
}

/// Parse a server timestamp, assuming UTC when it carries no zone.
///
/// # Examples
///
/// ```
/// use clipstitch_parser::timestamp::parse_server_timestamp;
///
/// let ts = parse_server_timestamp("2025-09-06T02:41:06").unwrap();
/// assert_eq!(ts.to_rfc3339(), "2025-09-06T02:41:06+00:00");
/// assert!(parse_server_timestamp("not a date").is_none());
/// ```
pub fn parse_server_timestamp(ts: &str) -> Option<DateTime<FixedOffset>> {
    let normalized = normalize_server_timestamp(ts)?;
    DateTime::parse_from_rfc3339(&normalized).ok()
}

/// Build an instant from the `YYYYMMDD` and `HHMMSS` digit groups of a
/// segment name, in the civil `offset`.
///
/// Returns `None` when the groups are not all digits or do not form a real
/// date and time.
pub fn civil_instant(date: &str, time: &str, offset: &FixedOffset) -> Option<DateTime<FixedOffset>> {
    if date.len() != 8 || time.len() != 6 {
        return None;
    }
    if !date.bytes().chain(time.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }

    let year: i32 = date[0..4].parse().ok()?;
    let month: u32 = date[4..6].parse().ok()?;
    let day: u32 = date[6..8].parse().ok()?;
    let hour: u32 = time[0..2].parse().ok()?;
    let minute: u32 = time[2..4].parse().ok()?;
    let second: u32 = time[4..6].parse().ok()?;

    let naive = NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, minute, second)?;
    offset.from_local_datetime(&naive).single()
}

/// Render an `HHMMSS` digit group as `HH:MM:SS`.
pub fn time_group_label(time: &str) -> Option<String> {
    if time.len() != 6 || !time.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(format!("{}:{}:{}", &time[0..2], &time[2..4], &time[4..6]))
}

/// Time of day of `instant` in `offset`, as `HH:MM:SS`.
pub fn time_of_day_label(instant: &DateTime<FixedOffset>, offset: &FixedOffset) -> String {
    instant.with_timezone(offset).format("%H:%M:%S").to_string()
}

/// Render `instant` in the civil `offset` as the `YYYYMMDD_HHMMSS` stamp used
/// in segment names.
///
/// # Examples
///
/// ```
/// use chrono::DateTime;
/// use clipstitch_parser::config::civil_offset;
/// use clipstitch_parser::timestamp::format_identifier_stamp;
///
/// let utc = DateTime::parse_from_rfc3339("2025-09-06T02:41:06Z").unwrap();
/// assert_eq!(format_identifier_stamp(&utc, &civil_offset()), "20250905_234106");
/// ```
pub fn format_identifier_stamp(instant: &DateTime<FixedOffset>, offset: &FixedOffset) -> String {
    instant
        .with_timezone(offset)
        .format("%Y%m%d_%H%M%S")
        .to_string()
}
