use chrono::{DateTime, Duration, FixedOffset, NaiveDate};

/// Structured time information about one stored segment.
///
/// Produced by [`crate::parse`] and [`crate::parse_hit`]; never fails to
/// construct. Instants derived from segment names carry the civil offset
/// (`-03:00`), instants taken from server timestamps carry their own offset
/// (UTC when the server sent none). Comparisons between the two are by
/// absolute instant.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SegmentInfo {
    /// Lowercase channel identifier, or the unknown-channel sentinel.
    pub channel: String,

    /// First instant covered by the segment (inclusive).
    pub start: Option<DateTime<FixedOffset>>,

    /// Last instant covered by the segment (inclusive).
    pub end: Option<DateTime<FixedOffset>>,

    /// Short human-readable label.
    pub label: String,
}

impl SegmentInfo {
    /// Info for input that could not be interpreted at all.
    pub fn unparsed(channel: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
            start: None,
            end: None,
            label: label.into(),
        }
    }

    /// Whether both interval boundaries are known.
    pub fn has_interval(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// Inclusive containment test. False when either boundary is unknown.
    pub fn contains(&self, instant: &DateTime<FixedOffset>) -> bool {
        match (&self.start, &self.end) {
            (Some(start), Some(end)) => start <= instant && instant <= end,
            _ => false,
        }
    }

    /// Length of the recorded interval.
    pub fn duration(&self) -> Option<Duration> {
        match (&self.start, &self.end) {
            (Some(start), Some(end)) => Some(*end - *start),
            _ => None,
        }
    }

    /// Calendar date of the start instant as seen in `offset`.
    pub fn local_date(&self, offset: &FixedOffset) -> Option<NaiveDate> {
        self.start
            .as_ref()
            .map(|start| start.with_timezone(offset).date_naive())
    }
}
