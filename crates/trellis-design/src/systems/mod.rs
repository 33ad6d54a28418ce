//! Ready-made design systems.
//!
//! Each module builds one [`DesignSystem`](crate::DesignSystem) on the same
//! composition engine. They differ only in naming strategy, policies, head
//! assets and markup.

pub mod canonical;
pub mod corpus;
pub mod natural;
pub mod starter;

use trellis_html::p;

use crate::component::{Component, define_component};
use crate::context::RenderContext;

/// A plain `<p>` component shared by every bundled system.
pub fn paragraph() -> Component<str> {
	define_component("paragraph", |_ctx: &RenderContext, text: &str| {
		p((), text.to_string())
	})
}
