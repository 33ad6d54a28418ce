//! Trellis HTML - immutable HTML AST and deterministic renderers
//!
//! Every tag function builds an explicit node tree. Trees are rendered
//! either minimized (no added whitespace) or pretty (indented), and both
//! renderers produce byte-identical output for the same tree.
//!
//! ## Guarantees
//!
//! - Attributes are sorted by key at construction time
//! - `true` attributes render bare, `false`/`None` attributes are omitted
//! - Text and attribute values are escaped exactly once
//! - Void elements never get a closing tag and never accept children
//! - [`raw`] can be disabled process-wide with [`RawPolicy::Strict`]
//!
//! ## Example
//!
//! ```
//! use trellis_html::{attrs, div, h1, p};
//!
//! let card = div(
//!     attrs!["class" => "card"],
//!     (h1((), "Hello"), p((), "<escaped>")),
//! );
//!
//! assert_eq!(
//!     card.render_to_string(),
//!     r#"<div class="card"><h1>Hello</h1><p>&lt;escaped&gt;</p></div>"#
//! );
//! assert_eq!(
//!     card.render_pretty(),
//!     "<div class=\"card\">\n  <h1>Hello</h1>\n  <p>&lt;escaped&gt;</p>\n</div>\n"
//! );
//! ```

#![warn(missing_docs)]

pub mod children;
pub mod error;
pub mod escape;
pub mod node;
pub mod raw;
pub mod render;
pub mod style;
pub mod tags;

pub use children::{Child, ChildList, IntoChildren};
pub use error::{HtmlError, Result};
pub use node::{
	AttrValue, Attrs, Element, ElementBuilder, HtmlNode, VOID_ELEMENTS, is_valid_attribute_name,
	is_void_element,
};
pub use raw::{RawHtml, RawPolicy, raw, raw_policy, set_raw_policy, trusted_raw};
pub use render::{INLINE_TEXT_LIMIT, render_minimized, render_pretty};
pub use style::{StyleMap, StyleRule, css_property_name};
pub use tags::*;
