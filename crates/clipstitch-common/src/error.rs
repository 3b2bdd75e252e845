//! Common error types used throughout clipstitch.
//!
//! Malformed segment names never show up here: the parser degrades them to
//! sentinel values. Window boundaries (maximum reached, nothing to remove)
//! are outcomes rather than errors. What remains are the not-found cases a
//! caller has to tell apart and failures reported by external services.

use crate::ids::SegmentId;

/// Common error type for clipstitch.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The requested anchor segment is not part of the loaded segment list.
    #[error("Segment not found in the loaded list: {0}")]
    AnchorNotFound(SegmentId),

    /// The catalog returned no segments for the requested interval.
    #[error("No segments for this interval (channel {channel}, at {instant})")]
    NoSegments { channel: String, instant: String },

    /// There is nothing selected to concatenate.
    #[error("No segments selected for concatenation")]
    EmptySelection,

    /// The merge service rejected the request or returned an unusable reply.
    #[error("Merge failed: {0}")]
    MergeFailed(String),

    /// A catalog, transcript, or search call failed.
    #[error("{service} request failed: {message}")]
    Upstream {
        service: &'static str,
        message: String,
    },

    /// Invalid input was provided.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// An I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a new AnchorNotFound error.
    pub fn anchor_not_found<S: Into<SegmentId>>(segment: S) -> Self {
        Self::AnchorNotFound(segment.into())
    }

    /// Create a new NoSegments error.
    pub fn no_segments<C: Into<String>, I: Into<String>>(channel: C, instant: I) -> Self {
        Self::NoSegments {
            channel: channel.into(),
            instant: instant.into(),
        }
    }

    /// Create a new MergeFailed error.
    pub fn merge_failed<S: Into<String>>(msg: S) -> Self {
        Self::MergeFailed(msg.into())
    }

    /// Create a new Upstream error for the named service.
    pub fn upstream<S: Into<String>>(service: &'static str, msg: S) -> Self {
        Self::Upstream {
            service,
            message: msg.into(),
        }
    }

    /// Create a new InvalidInput error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Whether this error is one of the not-found conditions a caller is
    /// expected to present as a normal outcome.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::AnchorNotFound(_) | Self::NoSegments { .. })
    }
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;
