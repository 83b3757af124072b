//! Common utilities for the Heron layout shim.
//!
//! This crate provides shared infrastructure used by every component:
//! - **Warning System** - colored terminal output for silently-degenerating
//!   conditions (dropped declarations, degenerate layouts, missing metrics)

pub mod warning;
