//! # clipstitch-parser
//!
//! Turns recorded broadcast segment names and search hit records into
//! structured time information.
//!
//! Segment names follow `channel_<YYYYMMDD>_<HHMMSS>[_<YYYYMMDD>_<HHMMSS>]`,
//! in local wall-clock time of a fixed civil timezone (UTC-3). Parsing is
//! total: input that does not follow the convention still produces a
//! [`SegmentInfo`] with sentinel values.
//!
//! ## Quick Start
//!
//! ```
//! use clipstitch_parser::parse;
//!
//! let info = parse("c5n_20250905_234106_20250905_234236.ts");
//!
//! assert_eq!(info.channel, "c5n");
//! assert_eq!(info.start.unwrap().to_rfc3339(), "2025-09-05T23:41:06-03:00");
//! assert_eq!(info.end.unwrap().to_rfc3339(), "2025-09-05T23:42:36-03:00");
//! assert_eq!(info.label, "23:41:06");
//! ```
//!
//! ## Hit records
//!
//! ```
//! use clipstitch_parser::{parse_hit, HitRecord};
//!
//! let hit = HitRecord::at("c5n", "2025-09-06T02:41:06");
//! let info = parse_hit(&hit);
//!
//! // Server timestamps without a zone are UTC.
//! assert_eq!(info.start.unwrap().to_rfc3339(), "2025-09-06T02:41:06+00:00");
//! ```

pub mod config;
pub mod model;
pub mod timestamp;

mod parser;

// Re-export main types for convenience
pub use model::{HitRecord, SegmentInfo, FALLBACK_LABEL, UNKNOWN_CHANNEL};

use config::ParserConfig;

/// Parse a segment name or path using default settings.
///
/// # Examples
///
/// ```
/// use clipstitch_parser::parse;
///
/// let info = parse("not-a-segment.ts");
/// assert_eq!(info.channel, "unknown");
/// assert!(info.start.is_none());
/// assert_eq!(info.label, "not-a-segment");
/// ```
pub fn parse(source: &str) -> SegmentInfo {
    Parser::default().parse(source)
}

/// Parse a structured hit record using default settings.
pub fn parse_hit(record: &HitRecord) -> SegmentInfo {
    Parser::default().parse_hit(record)
}

/// A configurable segment parser.
///
/// ```
/// use chrono::FixedOffset;
/// use clipstitch_parser::Parser;
/// use clipstitch_parser::config::ParserConfig;
///
/// let config = ParserConfig::builder()
///     .civil_offset(FixedOffset::east_opt(0).unwrap())
///     .build();
///
/// let parser = Parser::new(config);
/// let info = parser.parse("tn_20250101_120000.ts");
/// assert_eq!(info.start.unwrap().to_rfc3339(), "2025-01-01T12:00:00+00:00");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Create a new parser with the given configuration.
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    /// The configuration this parser was built with.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse a segment name or path.
    ///
    /// Path prefixes (`/` or `\`) and the extension are stripped first.
    pub fn parse(&self, source: &str) -> SegmentInfo {
        parser::parse_identifier(source, &self.config)
    }

    /// Parse a structured hit record, falling back to its file name for
    /// anything the record does not state explicitly.
    pub fn parse_hit(&self, record: &HitRecord) -> SegmentInfo {
        parser::parse_record(record, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_reference_identifier() {
        let info = parse("c5n_20250905_234106_20250905_234236.ts");
        assert_eq!(info.channel, "c5n");
        assert_eq!(
            info.start.unwrap().to_rfc3339(),
            "2025-09-05T23:41:06-03:00"
        );
        assert_eq!(info.end.unwrap().to_rfc3339(), "2025-09-05T23:42:36-03:00");
        assert!(info.end >= info.start);
    }

    #[test]
    fn test_parse_lowercases_channel() {
        let info = parse("C5N_20250905_234106.ts");
        assert_eq!(info.channel, "c5n");
        assert!(info.end.is_none());
    }

    #[test]
    fn test_parse_strips_windows_path() {
        let info = parse(r"D:\canales\tn\tn_20250101_000000_20250101_000130.ts");
        assert_eq!(info.channel, "tn");
        assert_eq!(info.label, "00:00:00");
    }

    #[test]
    fn test_custom_labels() {
        let parser = Parser::new(
            ParserConfig::builder()
                .unknown_channel("desconocido")
                .fallback_label("Clip sin titulo")
                .build(),
        );
        let info = parser.parse_hit(&HitRecord::default());
        assert_eq!(info.channel, "desconocido");
        assert_eq!(info.label, "Clip sin titulo");
    }

    #[test]
    fn test_hit_and_name_agree_on_instant() {
        let from_name = parse("c5n_20250905_234106_20250905_234236.ts");
        let from_hit = parse_hit(&HitRecord::at("c5n", "2025-09-06T02:41:06"));
        assert_eq!(from_name.start, from_hit.start);
        assert_eq!(from_name.label, from_hit.label);
    }
}
