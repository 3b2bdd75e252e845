//! Core type definitions shared by the window, planner, and CLI.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Side of the anchor segment in a selection window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Segments recorded before the anchor.
    Back,
    /// Segments recorded after the anchor.
    Forward,
}

impl Side {
    /// Both sides, back first.
    pub const ALL: [Side; 2] = [Side::Back, Side::Forward];

    /// The other side.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Back => Self::Forward,
            Self::Forward => Self::Back,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Back => write!(f, "back"),
            Self::Forward => write!(f, "forward"),
        }
    }
}

impl FromStr for Side {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "back" | "before" | "b" => Ok(Self::Back),
            "forward" | "after" | "f" => Ok(Self::Forward),
            other => Err(format!("unknown side: {other}")),
        }
    }
}
