//! Winnow-based parsers for segment names and hit records.

pub(crate) mod identifier;
mod record;

pub(crate) use identifier::parse_identifier;
pub(crate) use record::parse_record;
