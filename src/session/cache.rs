use crate::catalog::Transcript;
use clipstitch_common::SegmentId;
use std::collections::HashMap;

/// Transcripts already fetched during a playback session, by segment.
///
/// Entries are only added; [`clear`](Self::clear) drops everything when a
/// new search result is opened.
#[derive(Debug, Default)]
pub struct TranscriptCache {
    entries: HashMap<SegmentId, Transcript>,
}

impl TranscriptCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, segment: &SegmentId) -> Option<&Transcript> {
        self.entries.get(segment)
    }

    /// Store `transcript` for `segment` unless one is already cached.
    ///
    /// Returns the cached entry.
    pub fn insert(&mut self, segment: SegmentId, transcript: Transcript) -> &Transcript {
        self.entries.entry(segment).or_insert(transcript)
    }

    pub fn contains(&self, segment: &SegmentId) -> bool {
        self.entries.contains_key(segment)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
