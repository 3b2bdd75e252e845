//! Parser configuration.

use chrono::{FixedOffset, Offset, Utc};

use crate::model::{FALLBACK_LABEL, UNKNOWN_CHANNEL};

/// Offset of the civil timezone segment names are recorded in (UTC-3).
pub const CIVIL_OFFSET_SECS: i32 = -3 * 3600;

/// The civil timezone as a [`FixedOffset`].
pub fn civil_offset() -> FixedOffset {
    FixedOffset::east_opt(CIVIL_OFFSET_SECS).unwrap_or_else(|| Utc.fix())
}

/// Configuration for the parser.
///
/// Use the builder pattern to create a configuration:
///
/// ```
/// use clipstitch_parser::config::ParserConfig;
///
/// let config = ParserConfig::builder()
///     .fallback_label("Sin titulo")
///     .build();
/// assert_eq!(config.fallback_label, "Sin titulo");
/// ```
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Offset applied to wall-clock times encoded in segment names.
    /// Default: UTC-3
    pub civil_offset: FixedOffset,

    /// Channel reported when none can be determined.
    /// Default: "unknown"
    pub unknown_channel: String,

    /// Label reported when nothing better is available.
    /// Default: "Untitled clip"
    pub fallback_label: String,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            civil_offset: civil_offset(),
            unknown_channel: UNKNOWN_CHANNEL.to_string(),
            fallback_label: FALLBACK_LABEL.to_string(),
        }
    }
}

impl ParserConfig {
    /// Create a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration builder.
    pub fn builder() -> ParserConfigBuilder {
        ParserConfigBuilder::default()
    }
}

/// Builder for `ParserConfig`.
#[derive(Debug, Clone, Default)]
pub struct ParserConfigBuilder {
    civil_offset: Option<FixedOffset>,
    unknown_channel: Option<String>,
    fallback_label: Option<String>,
}

impl ParserConfigBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the offset of the civil timezone used in segment names.
    ///
    /// Only server timestamps carry their own offset; names are always
    /// interpreted in this zone.
    pub fn civil_offset(mut self, offset: FixedOffset) -> Self {
        self.civil_offset = Some(offset);
        self
    }

    /// Set the channel sentinel.
    pub fn unknown_channel(mut self, channel: impl Into<String>) -> Self {
        self.unknown_channel = Some(channel.into());
        self
    }

    /// Set the label of last resort.
    pub fn fallback_label(mut self, label: impl Into<String>) -> Self {
        self.fallback_label = Some(label.into());
        self
    }

    /// Build the configuration.
    pub fn build(self) -> ParserConfig {
        ParserConfig {
            civil_offset: self.civil_offset.unwrap_or_else(civil_offset),
            unknown_channel: self
                .unknown_channel
                .unwrap_or_else(|| UNKNOWN_CHANNEL.to_string()),
            fallback_label: self
                .fallback_label
                .unwrap_or_else(|| FALLBACK_LABEL.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ParserConfig::default();
        assert_eq!(config.civil_offset.local_minus_utc(), -3 * 3600);
        assert_eq!(config.unknown_channel, "unknown");
        assert_eq!(config.fallback_label, "Untitled clip");
    }

    #[test]
    fn test_builder_pattern() {
        let offset = FixedOffset::east_opt(0).unwrap();
        let config = ParserConfig::builder()
            .civil_offset(offset)
            .unknown_channel("desconocido")
            .fallback_label("Clip sin titulo")
            .build();

        assert_eq!(config.civil_offset, offset);
        assert_eq!(config.unknown_channel, "desconocido");
        assert_eq!(config.fallback_label, "Clip sin titulo");
    }

    #[test]
    fn test_builder_partial() {
        let config = ParserConfig::builder().fallback_label("x").build();

        assert_eq!(config.fallback_label, "x");
        assert_eq!(config.unknown_channel, "unknown"); // default
        assert_eq!(config.civil_offset, civil_offset()); // default
    }
}
