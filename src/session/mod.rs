//! Per-session playback context.
//!
//! A [`PlaybackSession`] owns one selection window and one transcript cache
//! and drives them from user actions: opening a search hit, jumping to a
//! related segment, growing or shrinking the selection, and merging it.

mod cache;

pub use cache::TranscriptCache;

use crate::catalog::{ApiClient, MergeService, SegmentCatalog, Transcript, TranscriptSource};
use crate::config::SessionConfig;
use crate::planner;
use crate::resolver::resolve_or_first;
use crate::window::{ContractOutcome, ExpandOutcome, SelectionWindow};
use chrono::{DateTime, FixedOffset};
use clipstitch_common::{ArtifactId, Error, Result, SegmentId, Side};
use clipstitch_parser::{HitRecord, Parser, SegmentInfo};
use std::sync::Arc;
use uuid::Uuid;

/// The external services a session needs.
#[derive(Clone)]
pub struct Services {
    pub catalog: Arc<dyn SegmentCatalog>,
    pub transcripts: Arc<dyn TranscriptSource>,
    pub merger: Arc<dyn MergeService>,
}

impl Services {
    /// Use one HTTP client for every service.
    pub fn from_client(client: Arc<ApiClient>) -> Self {
        Self {
            catalog: client.clone(),
            transcripts: client.clone(),
            merger: client,
        }
    }
}

/// What the player should show after the anchor moved.
#[derive(Debug, Clone)]
pub struct Playback {
    pub channel: String,
    pub segment: SegmentId,
    pub info: SegmentInfo,
    pub transcript: Transcript,
}

/// Window, cache, and channel of one playback session.
pub struct PlaybackSession {
    id: Uuid,
    services: Services,
    parser: Parser,
    config: SessionConfig,
    channel: Option<String>,
    window: SelectionWindow,
    cache: TranscriptCache,
}

impl PlaybackSession {
    pub fn new(services: Services, config: SessionConfig) -> Self {
        Self::with_parser(services, config, Parser::default())
    }

    pub fn with_parser(services: Services, config: SessionConfig, parser: Parser) -> Self {
        let id = Uuid::new_v4();
        tracing::debug!(session_id = %id, max_extra = config.max_extra, "Playback session created");
        Self {
            id,
            services,
            parser,
            window: SelectionWindow::new(config.max_extra),
            config,
            channel: None,
            cache: TranscriptCache::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Channel of the segment being played.
    pub fn channel(&self) -> Option<&str> {
        self.channel.as_deref()
    }

    pub fn window(&self) -> &SelectionWindow {
        &self.window
    }

    pub fn cache(&self) -> &TranscriptCache {
        &self.cache
    }

    pub fn parser(&self) -> &Parser {
        &self.parser
    }

    /// Channel of parsed info, unless the parser fell back to its placeholder.
    fn known_channel(&self, info: &SegmentInfo) -> Option<String> {
        let unknown = &self.parser.config().unknown_channel;
        (!info.channel.is_empty() && info.channel != *unknown).then(|| info.channel.clone())
    }

    /// Open a search hit: find the segment containing its instant and load
    /// its siblings.
    ///
    /// Clears the transcript cache. When no segment contains the instant the
    /// first sibling is played.
    pub async fn open_hit(&mut self, hit: &HitRecord) -> Result<Playback> {
        let info = self.parser.parse_hit(hit);
        let channel = self
            .known_channel(&info)
            .ok_or_else(|| Error::invalid_input("search hit has no channel"))?;
        let instant = info
            .start
            .ok_or_else(|| Error::invalid_input("search hit has no timestamp"))?;

        self.cache.clear();

        let segments = self.list_segments(&channel, &instant).await?;
        let anchor = resolve_or_first(&self.parser, &segments, &instant)
            .cloned()
            .ok_or_else(|| Error::no_segments(channel.as_str(), instant.to_rfc3339()))?;

        self.window.load(segments, &anchor)?;
        self.channel = Some(channel.clone());

        tracing::info!(
            session_id = %self.id,
            channel = %channel,
            anchor = %anchor,
            siblings = self.window.segments().len(),
            "Opened search hit"
        );

        let transcript = match self.fetch_transcript(&channel, &instant).await {
            Some(transcript) => transcript,
            None => Transcript {
                text: hit.text.clone().unwrap_or_default(),
                channel: Some(channel.clone()),
                timestamp: hit.timestamp.clone().or_else(|| hit.start_timestamp.clone()),
            },
        };
        let transcript = self.cache.insert(anchor.clone(), transcript).clone();

        Ok(Playback {
            channel,
            info: self.parser.parse(anchor.as_str()),
            segment: anchor,
            transcript,
        })
    }

    /// Make `segment` the new anchor.
    ///
    /// The segment must encode both a start and an end. A fresh sibling list
    /// is fetched around its start; when that fails and the segment is
    /// already loaded, the window is re-centered on the current list.
    pub async fn select_related(&mut self, segment: &SegmentId) -> Result<Playback> {
        let info = self.parser.parse(segment.as_str());
        let channel = self
            .known_channel(&info)
            .or_else(|| self.channel.clone());
        let (Some(channel), Some(start), Some(_)) = (channel, info.start, info.end) else {
            return Err(Error::invalid_input(format!(
                "could not interpret the selected clip: {segment}"
            )));
        };

        if self.window.anchor() == Some(segment) {
            let transcript = self.transcript_for(segment, &info, &channel, &start).await;
            return Ok(Playback {
                channel,
                segment: segment.clone(),
                info,
                transcript,
            });
        }

        match self.list_segments(&channel, &start).await {
            Ok(mut segments) => {
                if !segments.contains(segment) {
                    segments.push(segment.clone());
                }
                segments.sort();
                self.window.load(segments, segment)?;
            }
            Err(e) if self.window.contains(segment) => {
                tracing::warn!(
                    session_id = %self.id,
                    error = %e,
                    "Could not refresh siblings, re-centering on the loaded list"
                );
                self.window.recenter(segment)?;
            }
            Err(e) => return Err(e),
        }
        self.channel = Some(channel.clone());

        tracing::info!(
            session_id = %self.id,
            channel = %channel,
            anchor = %segment,
            siblings = self.window.segments().len(),
            "Re-centered on related segment"
        );

        let transcript = self.transcript_for(segment, &info, &channel, &start).await;
        Ok(Playback {
            channel,
            segment: segment.clone(),
            info,
            transcript,
        })
    }

    pub fn expand(&mut self, side: Side) -> ExpandOutcome {
        let outcome = self.window.expand(side);
        tracing::debug!(
            session_id = %self.id,
            side = %side,
            outcome = %outcome,
            "Expand"
        );
        outcome
    }

    pub fn contract(&mut self, side: Side) -> ContractOutcome {
        let outcome = self.window.contract(side);
        tracing::debug!(
            session_id = %self.id,
            side = %side,
            outcome = %outcome,
            "Contract"
        );
        outcome
    }

    /// Segments that would be merged right now.
    pub fn selection(&self) -> Result<&[SegmentId]> {
        planner::plan(&self.window)
    }

    /// Merge the current selection.
    pub async fn merge(&self) -> Result<ArtifactId> {
        let channel = self.channel.as_deref().ok_or(Error::EmptySelection)?;
        planner::submit(&self.window, channel, self.services.merger.as_ref()).await
    }

    /// Merge the current selection and return its download URL.
    pub async fn download_url(&self) -> Result<String> {
        let artifact = self.merge().await?;
        self.services.merger.artifact_url(&artifact)
    }

    async fn list_segments(
        &self,
        channel: &str,
        instant: &DateTime<FixedOffset>,
    ) -> Result<Vec<SegmentId>> {
        let segments = self.services.catalog.list_segments(channel, instant).await?;
        if segments.is_empty() {
            return Err(Error::no_segments(channel, instant.to_rfc3339()));
        }
        Ok(segments)
    }

    /// Fetch a transcript; failures are logged and reported as absent.
    async fn fetch_transcript(
        &self,
        channel: &str,
        instant: &DateTime<FixedOffset>,
    ) -> Option<Transcript> {
        match self
            .services
            .transcripts
            .transcript(channel, instant, self.config.transcript_window_secs)
            .await
        {
            Ok(transcript) => transcript,
            Err(e) => {
                tracing::warn!(
                    session_id = %self.id,
                    channel,
                    error = %e,
                    "Transcript fetch failed"
                );
                None
            }
        }
    }

    /// Cached transcript, else a fetched one (cached), else a placeholder.
    async fn transcript_for(
        &mut self,
        segment: &SegmentId,
        info: &SegmentInfo,
        channel: &str,
        start: &DateTime<FixedOffset>,
    ) -> Transcript {
        if let Some(cached) = self.cache.get(segment) {
            return cached.clone();
        }

        match self.fetch_transcript(channel, start).await {
            Some(transcript) => self.cache.insert(segment.clone(), transcript).clone(),
            None => Transcript {
                text: format!("Selected clip: {}", info.label),
                channel: Some(channel.to_string()),
                timestamp: Some(start.to_rfc3339()),
            },
        }
    }
}
