//! Clipstitch-Common: Shared types, constants, and utilities.
//!
//! This crate provides common functionality used across clipstitch:
//!
//! - **Typed IDs**: String newtypes for stored segments and merged artifacts
//! - **Core Types**: The [`Side`] of a selection window
//! - **Channels**: Display names for channel slugs
//! - **Path Utilities**: File name helpers and path-traversal validation
//! - **Error Handling**: Common error types and result aliases
//!
//! # Examples
//!
//! ```
//! use clipstitch_common::{Error, Result, SegmentId, Side};
//! use clipstitch_common::paths::is_segment_file;
//!
//! let id = SegmentId::from("c5n_20250905_234106_20250905_234236.ts");
//! assert!(is_segment_file(id.as_str()));
//!
//! assert_eq!(Side::Back.to_string(), "back");
//!
//! fn example() -> Result<()> {
//!     Err(Error::EmptySelection)
//! }
//! ```

pub mod channels;
pub mod error;
pub mod ids;
pub mod paths;
pub mod types;

pub use error::{Error, Result};
pub use ids::*;
pub use types::*;
