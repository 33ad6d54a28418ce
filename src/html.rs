//! HTML AST, escaping and renderers
//!
//! This module provides access to trellis-html: tag functions that build an
//! immutable node tree, and the minimized and pretty renderers.
//!
//! ## Example
//!
//! ```
//! use trellis::html::{attrs, div, input};
//!
//! let form = div(
//!     attrs!["class" => "field"],
//!     input(attrs!["disabled" => true, "hidden" => false, "value" => "x"]),
//! );
//! assert_eq!(
//!     form.render_to_string(),
//!     r#"<div class="field"><input disabled value="x"></div>"#
//! );
//! ```

// Re-export all trellis-html functionality
pub use trellis_html::*;
