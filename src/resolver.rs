//! Locating the stored segment that contains a given instant.

use chrono::{DateTime, FixedOffset};
use clipstitch_common::paths::file_stem;
use clipstitch_common::SegmentId;
use clipstitch_parser::Parser;

/// Underscore-delimited tokens a name needs to encode both a start and an
/// end (`channel`, start date, start time, end date, end time).
pub const MIN_IDENTIFIER_TOKENS: usize = 5;

fn has_full_interval_tokens(id: &SegmentId) -> bool {
    file_stem(id.as_str()).split('_').count() >= MIN_IDENTIFIER_TOKENS
}

/// Return the first candidate whose `[start, end]` interval contains
/// `target`.
///
/// Candidates are scanned in the given order, so overlapping intervals
/// resolve to the earliest-listed one. Names that are structurally too short
/// to carry an end time, or whose times do not parse, never match.
///
/// There is no fallback here; see [`resolve_or_first`] for the policy callers
/// apply when nothing matches.
pub fn resolve_containing<'a>(
    parser: &Parser,
    candidates: &'a [SegmentId],
    target: &DateTime<FixedOffset>,
) -> Option<&'a SegmentId> {
    candidates
        .iter()
        .filter(|id| has_full_interval_tokens(id))
        .find(|id| parser.parse(id.as_str()).contains(target))
}

/// Resolve `target`, falling back to the first candidate when no interval
/// contains it. `None` means there are no candidates at all.
pub fn resolve_or_first<'a>(
    parser: &Parser,
    candidates: &'a [SegmentId],
    target: &DateTime<FixedOffset>,
) -> Option<&'a SegmentId> {
    match resolve_containing(parser, candidates, target) {
        Some(found) => Some(found),
        None => {
            let first = candidates.first();
            if let Some(first) = first {
                tracing::debug!(
                    target = %target,
                    fallback = %first,
                    "No segment contains the requested instant, using the first sibling"
                );
            }
            first
        }
    }
}
