//! Clipstitch - transcript search playback and broadcast segment stitching
//!
//! This library crate exposes the core functionality for integration testing.

pub mod catalog;
pub mod config;
pub mod planner;
pub mod resolver;
pub mod session;
pub mod window;
