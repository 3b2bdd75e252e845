//! Selection window around the segment being played.
//!
//! The window holds the chronologically ordered siblings of the anchor
//! segment plus two counters saying how many neighbors on each side are
//! selected for concatenation. Only [`SelectionWindow::load`] and
//! [`SelectionWindow::recenter`] move the anchor; expand/contract only touch
//! the counters.
//!
//! Invariants, after every operation:
//!
//! - `back <= min(max_extra, anchor)`
//! - `forward <= min(max_extra, len - anchor - 1)`

use std::fmt;

use clipstitch_common::{Error, Result, SegmentId, Side};
use serde::Serialize;

/// Default number of extra segments allowed on each side of the anchor.
pub const MAX_EXTRA: usize = 3;

/// Lifecycle state of a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowState {
    /// No segments loaded, or the last load did not find its anchor.
    Empty,
    /// Segments and anchor loaded, nothing extra selected.
    Loaded,
    /// At least one neighbor selected.
    Expanded,
}

/// Result of [`SelectionWindow::expand`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpandOutcome {
    /// One more segment selected; `count` is the new total on that side.
    Added { side: Side, count: usize },
    /// The configured maximum for that side is already selected.
    MaximumReached { side: Side, max: usize },
    /// Every physically available segment on that side is already selected.
    NoMoreAvailable { side: Side, available: usize },
    /// The window has no anchor.
    NoAnchor,
}

impl ExpandOutcome {
    /// Whether a counter changed.
    pub fn is_change(&self) -> bool {
        matches!(self, Self::Added { .. })
    }
}

impl fmt::Display for ExpandOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Added { side, count } => {
                write!(f, "Added a segment {side} ({count} selected)")
            }
            Self::MaximumReached { side, max } => {
                write!(f, "Maximum additional segments reached {side} ({max})")
            }
            Self::NoMoreAvailable { side, available } => {
                write!(f, "No more segments available {side} ({available} in total)")
            }
            Self::NoAnchor => write!(f, "Segment not found in the list"),
        }
    }
}

/// Result of [`SelectionWindow::contract`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractOutcome {
    /// One segment deselected; `count` is the new total on that side.
    Removed { side: Side, count: usize },
    /// Nothing was selected on that side.
    NothingToRemove { side: Side },
    /// The window has no anchor.
    NoAnchor,
}

impl ContractOutcome {
    /// Whether a counter changed.
    pub fn is_change(&self) -> bool {
        matches!(self, Self::Removed { .. })
    }
}

impl fmt::Display for ContractOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Removed { side, count } => {
                write!(f, "Removed a segment {side} ({count} selected)")
            }
            Self::NothingToRemove { side } => write!(f, "Nothing to remove {side}"),
            Self::NoAnchor => write!(f, "Segment not found in the list"),
        }
    }
}

/// Ordered sibling segments, the anchor, and the per-side selection counts.
#[derive(Debug, Clone)]
pub struct SelectionWindow {
    segments: Vec<SegmentId>,
    anchor: Option<usize>,
    back: usize,
    forward: usize,
    max_extra: usize,
}

impl Default for SelectionWindow {
    fn default() -> Self {
        Self::new(MAX_EXTRA)
    }
}

impl SelectionWindow {
    /// Create an empty window allowing up to `max_extra` neighbors per side.
    pub fn new(max_extra: usize) -> Self {
        Self {
            segments: Vec::new(),
            anchor: None,
            back: 0,
            forward: 0,
            max_extra,
        }
    }

    /// Replace the segment list and anchor, resetting both counters.
    ///
    /// The new list is kept even when the anchor is missing from it; the
    /// window is then left without an anchor and the error is returned.
    pub fn load(&mut self, segments: Vec<SegmentId>, anchor: &SegmentId) -> Result<()> {
        self.segments = segments;
        self.back = 0;
        self.forward = 0;
        self.anchor = self.segments.iter().position(|s| s == anchor);

        match self.anchor {
            Some(index) => {
                tracing::debug!(
                    anchor = %anchor,
                    index,
                    segments = self.segments.len(),
                    "Selection window loaded"
                );
                Ok(())
            }
            None => Err(Error::anchor_not_found(anchor)),
        }
    }

    /// Move the anchor to another segment of the current list.
    ///
    /// Equivalent to [`load`](Self::load) with the same segments. Returns
    /// `AnchorNotFound` without touching the window when the segment is not
    /// in the list, so the caller can fetch a fresh sibling set instead.
    pub fn recenter(&mut self, anchor: &SegmentId) -> Result<()> {
        if !self.contains(anchor) {
            return Err(Error::anchor_not_found(anchor));
        }
        let segments = std::mem::take(&mut self.segments);
        self.load(segments, anchor)
    }

    /// Number of segments physically available on `side` of the anchor.
    fn available(&self, side: Side) -> usize {
        match (self.anchor, side) {
            (None, _) => 0,
            (Some(index), Side::Back) => index,
            (Some(index), Side::Forward) => self.segments.len() - index - 1,
        }
    }

    fn counter_mut(&mut self, side: Side) -> &mut usize {
        match side {
            Side::Back => &mut self.back,
            Side::Forward => &mut self.forward,
        }
    }

    /// Select one more neighbor on `side`.
    pub fn expand(&mut self, side: Side) -> ExpandOutcome {
        if self.anchor.is_none() {
            return ExpandOutcome::NoAnchor;
        }

        let available = self.available(side);
        let cap = self.max_extra.min(available);
        let max_extra = self.max_extra;
        let count = self.counter_mut(side);

        if *count < cap {
            *count += 1;
            ExpandOutcome::Added {
                side,
                count: *count,
            }
        } else if *count >= max_extra {
            ExpandOutcome::MaximumReached {
                side,
                max: max_extra,
            }
        } else {
            ExpandOutcome::NoMoreAvailable { side, available }
        }
    }

    /// Deselect one neighbor on `side`.
    pub fn contract(&mut self, side: Side) -> ContractOutcome {
        if self.anchor.is_none() {
            return ContractOutcome::NoAnchor;
        }

        let count = self.counter_mut(side);
        if *count > 0 {
            *count -= 1;
            ContractOutcome::Removed {
                side,
                count: *count,
            }
        } else {
            ContractOutcome::NothingToRemove { side }
        }
    }

    /// All loaded segments in chronological order.
    pub fn segments(&self) -> &[SegmentId] {
        &self.segments
    }

    /// Index of the anchor in [`segments`](Self::segments).
    pub fn anchor_index(&self) -> Option<usize> {
        self.anchor
    }

    /// The anchor segment.
    pub fn anchor(&self) -> Option<&SegmentId> {
        self.anchor.and_then(|index| self.segments.get(index))
    }

    /// Number of neighbors selected on `side`.
    pub fn count(&self, side: Side) -> usize {
        match side {
            Side::Back => self.back,
            Side::Forward => self.forward,
        }
    }

    /// Maximum neighbors per side.
    pub fn max_extra(&self) -> usize {
        self.max_extra
    }

    /// Whether `segment` is part of the loaded list.
    pub fn contains(&self, segment: &SegmentId) -> bool {
        self.segments.contains(segment)
    }

    /// Number of segments currently selected, anchor included.
    pub fn selected_len(&self) -> usize {
        match self.anchor {
            Some(_) => self.back + self.forward + 1,
            None => 0,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> WindowState {
        match self.anchor {
            None => WindowState::Empty,
            Some(_) if self.back == 0 && self.forward == 0 => WindowState::Loaded,
            Some(_) => WindowState::Expanded,
        }
    }
}
