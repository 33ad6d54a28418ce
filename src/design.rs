//! Design systems: naming strategies, slots, regions, layouts and pages
//!
//! This module provides access to trellis-design. See the crate
//! documentation of `trellis_design` for the page rendering pipeline.

// Re-export all trellis-design functionality
pub use trellis_design::*;
