//! External services the playback session talks to.
//!
//! Each concern is a small async trait so the session can be driven by the
//! HTTP [`ApiClient`] in production and by in-memory fakes in tests.

mod client;
mod types;

pub use client::{ApiClient, API_PREFIX};
pub use types::{MergeResponseBody, SearchHit, Transcript};

use chrono::{DateTime, FixedOffset};
use clipstitch_common::{ArtifactId, Result, SegmentId};

/// Lists the stored segments around an instant.
#[async_trait::async_trait]
pub trait SegmentCatalog: Send + Sync {
    /// Segments of `channel` near `instant`, in chronological order.
    async fn list_segments(
        &self,
        channel: &str,
        instant: &DateTime<FixedOffset>,
    ) -> Result<Vec<SegmentId>>;
}

/// Fetches transcript text for a time window.
#[async_trait::async_trait]
pub trait TranscriptSource: Send + Sync {
    /// Transcript of `channel` covering `window_secs` from `instant`.
    ///
    /// `Ok(None)` means the server has nothing for that window.
    async fn transcript(
        &self,
        channel: &str,
        instant: &DateTime<FixedOffset>,
        window_secs: u32,
    ) -> Result<Option<Transcript>>;
}

/// Concatenates segments into a downloadable artifact.
#[async_trait::async_trait]
pub trait MergeService: Send + Sync {
    /// Merge `segments` of `channel`, in the given order.
    async fn merge(&self, segments: &[SegmentId], channel: &str) -> Result<ArtifactId>;

    /// Where the merged artifact can be downloaded from.
    fn artifact_url(&self, artifact: &ArtifactId) -> Result<String>;
}

/// Full-text search over transcripts.
#[async_trait::async_trait]
pub trait TranscriptSearch: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>>;
}
