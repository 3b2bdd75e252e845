//! Typed ID wrappers for type safety across clipstitch.
//!
//! Segment names and merged artifact names are both plain strings on the
//! wire. These newtypes keep one from being passed where the other belongs.

use serde::{Deserialize, Serialize};

/// Name of one stored segment, e.g. `c5n_20250905_234106_20250905_234236.ts`.
///
/// Equality and ordering are by exact string. Identifiers that share a
/// channel sort chronologically because the timestamp is a fixed-width
/// prefix after the channel token.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SegmentId(String);

impl SegmentId {
    /// Wrap a segment name.
    #[must_use]
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self(name.into())
    }

    /// Borrow the raw name.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the raw name.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<String> for SegmentId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl From<&str> for SegmentId {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<&SegmentId> for SegmentId {
    fn from(id: &SegmentId) -> Self {
        id.clone()
    }
}

impl AsRef<str> for SegmentId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SegmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Name of a merged artifact produced by the merge service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtifactId(String);

impl ArtifactId {
    /// Wrap an artifact name.
    #[must_use]
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self(name.into())
    }

    /// Borrow the raw name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ArtifactId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl From<&str> for ArtifactId {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl std::fmt::Display for ArtifactId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_id_ordering_is_lexical() {
        let mut ids = vec![
            SegmentId::from("c5n_20250905_234236_20250905_234406.ts"),
            SegmentId::from("c5n_20250905_234106_20250905_234236.ts"),
            SegmentId::from("c5n_20250905_233936_20250905_234106.ts"),
        ];
        ids.sort();
        assert_eq!(ids[0].as_str(), "c5n_20250905_233936_20250905_234106.ts");
        assert_eq!(ids[2].as_str(), "c5n_20250905_234236_20250905_234406.ts");
    }

    #[test]
    fn test_segment_id_display_and_conversions() {
        let id = SegmentId::new("tn_20250101_000000.ts");
        assert_eq!(id.to_string(), "tn_20250101_000000.ts");
        assert_eq!(id.as_ref(), "tn_20250101_000000.ts");
        assert_eq!(id.clone().into_inner(), "tn_20250101_000000.ts");
        assert_eq!(SegmentId::from(&id), id);
    }

    #[test]
    fn test_ids_serialize_transparently() {
        let id = SegmentId::from("c5n_20250905_234106.ts");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"c5n_20250905_234106.ts\"");

        let artifact: ArtifactId = serde_json::from_str("\"clip_123.mp4\"").unwrap();
        assert_eq!(artifact.as_str(), "clip_123.mp4");
        assert_eq!(artifact.to_string(), "clip_123.mp4");
    }
}
