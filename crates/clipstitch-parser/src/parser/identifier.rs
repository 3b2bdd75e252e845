//! Segment name grammar.
//!
//! ```text
//! identifier := channel "_" stamp ( "_" stamp )?  <anything>
//! channel    := [^_]+
//! stamp      := digit{8} "_" digit{6}
//! ```
//!
//! The grammar is anchored at the start only; trailing text after the last
//! stamp is ignored.

use winnow::combinator::{opt, preceded};
use winnow::prelude::*;
use winnow::token::take_while;

use clipstitch_common::paths::{file_name, file_stem};

use crate::config::ParserConfig;
use crate::model::SegmentInfo;
use crate::timestamp::{civil_instant, time_group_label};

/// Raw digit groups of one `YYYYMMDD_HHMMSS` stamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Stamp<'s> {
    pub date: &'s str,
    pub time: &'s str,
}

/// A segment name split into its tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RawIdentifier<'s> {
    pub channel: &'s str,
    pub start: Stamp<'s>,
    pub end: Option<Stamp<'s>>,
}

fn channel<'s>(input: &mut &'s str) -> PResult<&'s str> {
    take_while(1.., |c: char| c != '_').parse_next(input)
}

fn date_digits<'s>(input: &mut &'s str) -> PResult<&'s str> {
    take_while(8, |c: char| c.is_ascii_digit()).parse_next(input)
}

fn time_digits<'s>(input: &mut &'s str) -> PResult<&'s str> {
    take_while(6, |c: char| c.is_ascii_digit()).parse_next(input)
}

fn stamp<'s>(input: &mut &'s str) -> PResult<Stamp<'s>> {
    (date_digits, '_', time_digits)
        .map(|(date, _, time)| Stamp { date, time })
        .parse_next(input)
}

fn identifier<'s>(input: &mut &'s str) -> PResult<RawIdentifier<'s>> {
    let channel = channel.parse_next(input)?;
    let start = preceded('_', stamp).parse_next(input)?;
    let end = opt(preceded('_', stamp)).parse_next(input)?;
    Ok(RawIdentifier {
        channel,
        start,
        end,
    })
}

/// Split a file stem into channel and stamps, if it follows the convention.
pub(crate) fn split_identifier(stem: &str) -> Option<RawIdentifier<'_>> {
    let mut input = stem;
    identifier(&mut input).ok()
}

/// Parse a segment name or path into [`SegmentInfo`].
///
/// Never fails: names that do not follow the convention yield the unknown
/// channel, no instants, and the stem as label.
pub(crate) fn parse_identifier(source: &str, config: &ParserConfig) -> SegmentInfo {
    let name = file_name(source.trim());
    let stem = file_stem(name);

    let Some(raw) = split_identifier(stem) else {
        let label = [stem, name]
            .into_iter()
            .find(|s| !s.is_empty())
            .unwrap_or(config.fallback_label.as_str());
        return SegmentInfo::unparsed(config.unknown_channel.clone(), label);
    };

    let offset = &config.civil_offset;
    SegmentInfo {
        channel: raw.channel.to_lowercase(),
        start: civil_instant(raw.start.date, raw.start.time, offset),
        end: raw
            .end
            .and_then(|end| civil_instant(end.date, end.time, offset)),
        label: time_group_label(raw.start.time).unwrap_or_else(|| stem.to_string()),
    }
}
