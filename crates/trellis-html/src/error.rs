//! Error types for trellis-html

use thiserror::Error;

/// Errors raised while constructing HTML nodes.
///
/// All variants are construction-time failures: the node that would have
/// been produced is never returned in a partially valid state.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HtmlError {
	/// A void element (`br`, `img`, `meta`, ...) was given children.
	#[error("void element <{tag}> cannot have children")]
	VoidElementWithChildren {
		/// The offending tag name.
		tag: String,
	},

	/// An attribute name contains characters that would break the markup.
	#[error("invalid attribute name {name:?} on <{tag}>")]
	InvalidAttributeName {
		/// The element's tag name.
		tag: String,
		/// The rejected attribute name.
		name: String,
	},

	/// `raw()` was called while the strict raw policy is active.
	#[error("raw HTML rejected by strict policy: {preview:?}")]
	RawPolicyViolation {
		/// The first characters of the rejected markup.
		preview: String,
	},
}

/// Result type for HTML construction
pub type Result<T> = std::result::Result<T, HtmlError>;
