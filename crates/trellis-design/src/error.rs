//! Error types for trellis-design

use std::fmt;

use thiserror::Error;
use trellis_html::HtmlError;

use crate::settings::SettingsError;

/// What a slot map was supplied to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotOwner {
	/// A region's body slots.
	Region(String),
	/// A layout's body slots.
	Layout(String),
	/// A layout's head slots.
	Head(String),
}

impl fmt::Display for SlotOwner {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			SlotOwner::Region(name) => write!(f, "region `{name}`"),
			SlotOwner::Layout(name) => write!(f, "layout `{name}`"),
			SlotOwner::Head(name) => write!(f, "head of layout `{name}`"),
		}
	}
}

/// The kind of definition registered in a design system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationKind {
	/// A region.
	Region,
	/// A layout.
	Layout,
	/// A component.
	Component,
}

impl fmt::Display for RegistrationKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			RegistrationKind::Region => "region",
			RegistrationKind::Layout => "layout",
			RegistrationKind::Component => "component",
		})
	}
}

/// Errors raised while building a design system or rendering a page.
///
/// Every variant is raised where it is detected and propagated unchanged;
/// nothing in this crate retries or falls back.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DesignError {
	/// A required slot was not supplied.
	#[error("missing required slot `{slot}` for {owner}")]
	MissingRequiredSlot {
		/// Slot name.
		slot: String,
		/// Region or layout the slot belongs to.
		owner: SlotOwner,
	},

	/// A supplied (or requested) slot is not declared.
	#[error("unknown slot `{slot}` for {owner}")]
	UnknownSlot {
		/// Slot name.
		slot: String,
		/// Region or layout that rejected the slot.
		owner: SlotOwner,
	},

	/// A layout asked for a region that is not registered.
	#[error("unknown region `{0}`")]
	UnknownRegion(String),

	/// `page()` was called with an unregistered layout.
	#[error("unknown layout `{0}`")]
	UnknownLayout(String),

	/// Two definitions share a name in one design system.
	#[error("duplicate {kind} registration `{name}`")]
	DuplicateRegistration {
		/// Definition kind.
		kind: RegistrationKind,
		/// The repeated name.
		name: String,
	},

	/// A slot spec lists the same name twice.
	#[error("slot `{slot}` is declared more than once")]
	DuplicateSlot {
		/// The repeated slot name.
		slot: String,
	},

	/// A user-agent dependency has a MIME type that cannot be linked.
	#[error("unsupported asset type `{mime_type}` for `{mount_point}`")]
	UnsupportedAsset {
		/// URL path of the asset.
		mount_point: String,
		/// The rejected MIME type.
		mime_type: String,
	},

	/// HTML construction failed (void element children, raw policy).
	#[error(transparent)]
	Html(#[from] HtmlError),

	/// Settings could not be loaded.
	#[error(transparent)]
	Settings(#[from] SettingsError),
}

/// Result type for design-system operations
pub type Result<T> = std::result::Result<T, DesignError>;
