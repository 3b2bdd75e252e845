//! Data model types for parsed segment information.
//!
//! [`SegmentInfo`] is what every parse produces; [`HitRecord`] is the
//! structured input shape of a search hit.

mod hit;
mod segment;

pub use hit::HitRecord;
pub use segment::SegmentInfo;

/// Channel sentinel for names and records that do not identify one.
pub const UNKNOWN_CHANNEL: &str = "unknown";

/// Label of last resort.
pub const FALLBACK_LABEL: &str = "Untitled clip";
