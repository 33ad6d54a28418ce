//! Deterministic style-object conversion.
//!
//! Property names are normalised from camelCase to kebab-case and emitted
//! in sorted order, so the same declarations always produce the same CSS.

use std::collections::BTreeMap;
use std::fmt;

use crate::node::AttrValue;

/// Converts `marginTop` to `margin-top`. Custom properties (`--x`) and
/// already-kebab names are returned unchanged.
pub fn css_property_name(name: &str) -> String {
	if name.starts_with("--") {
		return name.to_string();
	}
	let mut out = String::with_capacity(name.len() + 4);
	for c in name.chars() {
		if c.is_ascii_uppercase() {
			out.push('-');
			out.push(c.to_ascii_lowercase());
		} else {
			out.push(c);
		}
	}
	out
}

/// An ordered set of CSS declarations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleMap {
	declarations: BTreeMap<String, String>,
}

impl StyleMap {
	/// Creates an empty style map.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a declaration, replacing any previous value for the property.
	pub fn with(mut self, property: &str, value: impl Into<String>) -> Self {
		self.declarations
			.insert(css_property_name(property), value.into());
		self
	}

	/// Returns `true` when there are no declarations.
	pub fn is_empty(&self) -> bool {
		self.declarations.is_empty()
	}

	/// Renders `prop: value;` pairs separated by single spaces.
	pub fn to_attr_value(&self) -> String {
		self.declarations
			.iter()
			.map(|(prop, value)| format!("{prop}: {value};"))
			.collect::<Vec<_>>()
			.join(" ")
	}
}

impl<const N: usize> From<[(&str, &str); N]> for StyleMap {
	fn from(entries: [(&str, &str); N]) -> Self {
		entries
			.into_iter()
			.fold(StyleMap::new(), |map, (prop, value)| map.with(prop, value))
	}
}

impl fmt::Display for StyleMap {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.to_attr_value())
	}
}

impl From<StyleMap> for AttrValue {
	fn from(map: StyleMap) -> Self {
		// An empty style attribute is dropped entirely
		if map.is_empty() {
			AttrValue::Flag(false)
		} else {
			AttrValue::Text(map.to_attr_value())
		}
	}
}

/// A selector with its declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRule {
	selector: String,
	declarations: StyleMap,
}

impl StyleRule {
	/// Creates a rule.
	pub fn new(selector: impl Into<String>, declarations: impl Into<StyleMap>) -> Self {
		Self {
			selector: selector.into(),
			declarations: declarations.into(),
		}
	}

	/// Returns the selector.
	pub fn selector(&self) -> &str {
		&self.selector
	}

	/// Renders `selector { a: b; c: d; }`.
	pub fn to_css(&self) -> String {
		format!("{} {{ {} }}", self.selector, self.declarations)
	}
}
