/// A structured search hit or clip record as delivered by the server.
///
/// Every field is optional; [`crate::parse_hit`] fills the gaps from the
/// file name when one is present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HitRecord {
    /// Channel slug.
    pub channel: Option<String>,
    /// Start of the hit's interval. Treated as UTC when it has no offset.
    pub start_timestamp: Option<String>,
    /// End of the hit's interval. Treated as UTC when it has no offset.
    pub end_timestamp: Option<String>,
    /// Generic timestamp used by transcript hits when no start is given.
    pub timestamp: Option<String>,
    /// Segment file name or path.
    pub filename: Option<String>,
    /// Explicit short label.
    pub label: Option<String>,
    /// Explicit display name.
    pub name: Option<String>,
    /// Transcript text attached to the hit.
    pub text: Option<String>,
}

impl HitRecord {
    /// Record for a bare channel + timestamp pair.
    pub fn at(channel: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            channel: Some(channel.into()),
            timestamp: Some(timestamp.into()),
            ..Self::default()
        }
    }

    /// Record for a segment file name only.
    pub fn from_filename(filename: impl Into<String>) -> Self {
        Self {
            filename: Some(filename.into()),
            ..Self::default()
        }
    }
}
