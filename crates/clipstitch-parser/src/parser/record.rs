//! Hit record interpretation.
//!
//! Explicit record fields win; whatever is missing is taken from the file
//! name. The label walks a fixed priority chain:
//!
//! 1. explicit label
//! 2. time of day of the start instant, in the civil timezone
//! 3. label derived from the file name
//! 4. explicit display name
//! 5. file stem
//! 6. the configured fallback label

use clipstitch_common::paths::file_stem;

use crate::config::ParserConfig;
use crate::model::{HitRecord, SegmentInfo};
use crate::parser::identifier::parse_identifier;
use crate::timestamp::{parse_server_timestamp, time_of_day_label};

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Parse a structured hit record into [`SegmentInfo`].
pub(crate) fn parse_record(record: &HitRecord, config: &ParserConfig) -> SegmentInfo {
    let filename = non_empty(record.filename.as_deref());
    let from_name = filename.map(|f| parse_identifier(f, config));

    let channel = non_empty(record.channel.as_deref())
        .map(str::to_lowercase)
        .or_else(|| from_name.as_ref().map(|info| info.channel.clone()))
        .unwrap_or_else(|| config.unknown_channel.clone());

    let start = non_empty(record.start_timestamp.as_deref())
        .or_else(|| non_empty(record.timestamp.as_deref()))
        .and_then(parse_server_timestamp)
        .or_else(|| from_name.as_ref().and_then(|info| info.start));

    let end = non_empty(record.end_timestamp.as_deref())
        .and_then(parse_server_timestamp)
        .or_else(|| from_name.as_ref().and_then(|info| info.end));

    let label = non_empty(record.label.as_deref())
        .map(str::to_string)
        .or_else(|| {
            start
                .as_ref()
                .map(|s| time_of_day_label(s, &config.civil_offset))
        })
        .or_else(|| from_name.as_ref().map(|info| info.label.clone()))
        .or_else(|| non_empty(record.name.as_deref()).map(str::to_string))
        .or_else(|| {
            filename
                .map(file_stem)
                .filter(|stem| !stem.is_empty())
                .map(str::to_string)
        })
        .unwrap_or_else(|| config.fallback_label.clone());

    SegmentInfo {
        channel,
        start,
        end,
        label,
    }
}
