//! Raw HTML escape hatch and rendered-output wrapper.
//!
//! [`RawHtml`] pairs a serialized string with an optional retained AST. When
//! the AST is present the value can still be pretty-printed, and splicing it
//! into another tree re-uses the nodes instead of opaque markup.
//!
//! [`raw`] is subject to a process-wide [`RawPolicy`]. Under
//! [`RawPolicy::Strict`] it fails with [`HtmlError::RawPolicyViolation`];
//! [`trusted_raw`] is never checked.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};

use crate::error::{HtmlError, Result};
use crate::node::HtmlNode;
use crate::render;

/// Number of characters kept in a policy violation preview.
const PREVIEW_CHARS: usize = 32;

static RAW_POLICY: AtomicU8 = AtomicU8::new(RawPolicy::Permissive as u8);

/// Whether [`raw`] accepts markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum RawPolicy {
	/// `raw()` passes markup through unchanged.
	#[default]
	Permissive = 0,
	/// `raw()` fails; only `trusted_raw()` may inject markup.
	Strict = 1,
}

/// Sets the process-wide raw policy.
pub fn set_raw_policy(policy: RawPolicy) {
	RAW_POLICY.store(policy as u8, Ordering::SeqCst);
	tracing::debug!(?policy, "raw HTML policy changed");
}

/// Returns the current raw policy.
pub fn raw_policy() -> RawPolicy {
	match RAW_POLICY.load(Ordering::SeqCst) {
		1 => RawPolicy::Strict,
		_ => RawPolicy::Permissive,
	}
}

/// Serialized HTML with an optional retained AST.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawHtml {
	html: String,
	ast: Option<Arc<HtmlNode>>,
}

impl RawHtml {
	/// Renders `node` minimized and keeps the node for later pretty output.
	pub fn from_node(node: HtmlNode) -> Self {
		Self {
			html: render::render_minimized(&node),
			ast: Some(Arc::new(node)),
		}
	}

	/// Returns the minimized markup.
	pub fn as_str(&self) -> &str {
		&self.html
	}

	/// Returns the retained AST, if any.
	pub fn ast(&self) -> Option<&HtmlNode> {
		self.ast.as_deref()
	}

	/// Returns `true` if the markup is empty.
	pub fn is_empty(&self) -> bool {
		self.html.is_empty()
	}

	/// Consumes the wrapper into the minimized markup.
	pub fn into_string(self) -> String {
		self.html
	}

	/// Pretty-prints the retained AST, or returns the markup unchanged.
	pub fn to_pretty(&self) -> String {
		match &self.ast {
			Some(ast) => render::render_pretty(ast),
			None => self.html.clone(),
		}
	}

	pub(crate) fn into_parts(self) -> (String, Option<Arc<HtmlNode>>) {
		(self.html, self.ast)
	}
}

impl fmt::Display for RawHtml {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.html)
	}
}

impl From<HtmlNode> for RawHtml {
	fn from(node: HtmlNode) -> Self {
		RawHtml::from_node(node)
	}
}

/// Wraps markup that bypasses escaping, subject to the raw policy.
///
/// ```
/// use trellis_html::{div, raw};
///
/// let html = div((), raw("<b>ok</b>").unwrap()).render_to_string();
/// assert_eq!(html, "<div><b>ok</b></div>");
/// ```
pub fn raw(html: impl Into<String>) -> Result<RawHtml> {
	let html = html.into();
	if raw_policy() == RawPolicy::Strict {
		let preview: String = html.chars().take(PREVIEW_CHARS).collect();
		tracing::warn!(%preview, "raw HTML rejected by strict policy");
		return Err(HtmlError::RawPolicyViolation { preview });
	}
	Ok(trusted_raw(html))
}

/// Wraps markup that bypasses escaping. Only use with content you control.
pub fn trusted_raw(html: impl Into<String>) -> RawHtml {
	RawHtml {
		html: html.into(),
		ast: None,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{div, p};
	use rstest::rstest;
	use serial_test::serial;

	#[rstest]
	#[serial(raw_policy)]
	fn test_raw_permissive_by_default() {
		set_raw_policy(RawPolicy::Permissive);
		let value = raw("<i>x</i>").unwrap();
		assert_eq!(value.as_str(), "<i>x</i>");
		assert!(value.ast().is_none());
	}

	#[rstest]
	#[serial(raw_policy)]
	fn test_raw_strict_rejects() {
		set_raw_policy(RawPolicy::Strict);
		let result = raw("<script>evil()</script>");
		set_raw_policy(RawPolicy::Permissive);
		assert_eq!(
			result,
			Err(HtmlError::RawPolicyViolation {
				preview: "<script>evil()</script>".to_string()
			})
		);
	}

	#[rstest]
	#[serial(raw_policy)]
	fn test_trusted_raw_ignores_strict_policy() {
		set_raw_policy(RawPolicy::Strict);
		let value = trusted_raw("<hr>");
		set_raw_policy(RawPolicy::Permissive);
		assert_eq!(value.to_string(), "<hr>");
	}

	#[rstest]
	fn test_from_node_retains_ast() {
		let node = div((), p((), "hi"));
		let value = RawHtml::from_node(node.clone());
		assert_eq!(value.as_str(), "<div><p>hi</p></div>");
		assert_eq!(value.ast(), Some(&node));
		assert_eq!(value.to_pretty(), "<div>\n  <p>hi</p>\n</div>\n");
	}

	#[rstest]
	fn test_to_pretty_without_ast_returns_markup() {
		assert_eq!(trusted_raw("<b>x</b>").to_pretty(), "<b>x</b>");
	}
}
