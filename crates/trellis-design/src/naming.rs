//! Naming strategies.
//!
//! A naming strategy turns a semantic hint (a suggested name plus a
//! [`NamingKind`]) into concrete element ids, `data-*` attribute names and
//! CSS class names. Regions, layouts and components only ever ask the
//! strategy, so two design systems can share the same composition code and
//! still emit different markup conventions.
//!
//! Implementations must be deterministic: the same inputs always produce
//! the same output, which keeps golden files and caches stable.

use std::fmt;

/// The semantic role of a generated name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamingKind {
	/// Page skeleton.
	Layout,
	/// Structural region.
	Region,
	/// Slot content wrapper.
	Slot,
	/// Reusable component.
	Component,
	/// Head asset annotation.
	Asset,
	/// Design-system specific kind.
	Custom(&'static str),
}

impl NamingKind {
	/// Returns the kind as a lowercase token.
	pub fn as_str(&self) -> &'static str {
		match self {
			NamingKind::Layout => "layout",
			NamingKind::Region => "region",
			NamingKind::Slot => "slot",
			NamingKind::Component => "component",
			NamingKind::Asset => "asset",
			NamingKind::Custom(kind) => kind,
		}
	}
}

impl fmt::Display for NamingKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Maps semantic hints to concrete names.
pub trait NamingStrategy: Send + Sync + fmt::Debug {
	/// Returns an element id.
	fn element_id(&self, suggested: &str, kind: NamingKind) -> String;

	/// Returns a `data-*` attribute name.
	fn data_attribute_name(&self, suggested: &str, kind: NamingKind) -> String;

	/// Returns a CSS class name.
	fn class_name(&self, suggested: &str, kind: NamingKind) -> String;
}

/// Converts `MainContent`, `main_content` or `main content` to `main-content`.
///
/// ```
/// use trellis_design::naming::to_kebab_case;
///
/// assert_eq!(to_kebab_case("MainContent"), "main-content");
/// assert_eq!(to_kebab_case("side_bar"), "side-bar");
/// assert_eq!(to_kebab_case("lead"), "lead");
/// ```
pub fn to_kebab_case(name: &str) -> String {
	let mut out = String::with_capacity(name.len() + 4);
	let mut prev_lower = false;
	for c in name.chars() {
		if c.is_ascii_alphanumeric() {
			if c.is_ascii_uppercase() && prev_lower {
				out.push('-');
			}
			out.push(c.to_ascii_lowercase());
			prev_lower = c.is_ascii_lowercase() || c.is_ascii_digit();
		} else {
			if !out.is_empty() && !out.ends_with('-') {
				out.push('-');
			}
			prev_lower = false;
		}
	}
	while out.ends_with('-') {
		out.pop();
	}
	out
}

/// Uses the suggested name as-is (kebab-cased).
///
/// `class_name("lead", _)` → `lead`, `data_attribute_name("state", _)` →
/// `data-state`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughNaming;

impl NamingStrategy for PassthroughNaming {
	fn element_id(&self, suggested: &str, _kind: NamingKind) -> String {
		to_kebab_case(suggested)
	}

	fn data_attribute_name(&self, suggested: &str, _kind: NamingKind) -> String {
		format!("data-{}", to_kebab_case(suggested))
	}

	fn class_name(&self, suggested: &str, _kind: NamingKind) -> String {
		to_kebab_case(suggested)
	}
}

/// Prefixes every name with its kind.
///
/// `class_name("main", Region)` → `region-main`.
#[derive(Debug, Clone, Copy, Default)]
pub struct KindPrefixNaming;

impl NamingStrategy for KindPrefixNaming {
	fn element_id(&self, suggested: &str, kind: NamingKind) -> String {
		format!("{}-{}", kind, to_kebab_case(suggested))
	}

	fn data_attribute_name(&self, suggested: &str, kind: NamingKind) -> String {
		format!("data-{}-{}", kind, to_kebab_case(suggested))
	}

	fn class_name(&self, suggested: &str, kind: NamingKind) -> String {
		format!("{}-{}", kind, to_kebab_case(suggested))
	}
}

/// Namespaces every name under a design-system prefix.
///
/// `class_name("masthead", Region)` with prefix `cds` → `cds-region-masthead`,
/// `data_attribute_name("region", _)` → `data-cds-region`.
#[derive(Debug, Clone)]
pub struct PrefixNaming {
	prefix: String,
}

impl PrefixNaming {
	/// Creates a strategy with the given prefix (kebab-cased).
	pub fn new(prefix: &str) -> Self {
		Self {
			prefix: to_kebab_case(prefix),
		}
	}

	/// Returns the prefix.
	pub fn prefix(&self) -> &str {
		&self.prefix
	}
}

impl NamingStrategy for PrefixNaming {
	fn element_id(&self, suggested: &str, kind: NamingKind) -> String {
		format!("{}-{}-{}", self.prefix, kind, to_kebab_case(suggested))
	}

	fn data_attribute_name(&self, suggested: &str, _kind: NamingKind) -> String {
		format!("data-{}-{}", self.prefix, to_kebab_case(suggested))
	}

	fn class_name(&self, suggested: &str, kind: NamingKind) -> String {
		format!("{}-{}-{}", self.prefix, kind, to_kebab_case(suggested))
	}
}
