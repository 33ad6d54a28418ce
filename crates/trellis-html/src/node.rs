//! HTML node tree.
//!
//! Every tag function produces an [`HtmlNode`]. Nodes are immutable once
//! built: attributes are normalised and sorted at construction so that two
//! structurally identical trees always serialize to the same bytes.
//!
//! ## Example
//!
//! ```
//! use trellis_html::{attrs, div, p};
//!
//! let node = div(attrs!["z" => "3", "a" => "1", "m" => "2"], p((), "x"));
//! assert_eq!(
//!     node.render_to_string(),
//!     r#"<div a="1" m="2" z="3"><p>x</p></div>"#
//! );
//! ```

use std::borrow::Cow;
use std::collections::BTreeMap;

use crate::children::IntoChildren;
use crate::error::{HtmlError, Result};
use crate::render;

/// Elements that never have a closing tag and never accept children.
pub const VOID_ELEMENTS: &[&str] = &[
	"area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
	"wbr",
];

/// Returns whether `tag` is a void element.
pub fn is_void_element(tag: &str) -> bool {
	VOID_ELEMENTS.contains(&tag)
}

/// Returns whether `name` can be emitted as an attribute name as-is.
///
/// Names must be non-empty and free of whitespace, control characters,
/// quotes and `< > / =`.
pub fn is_valid_attribute_name(name: &str) -> bool {
	!name.is_empty()
		&& !name.chars().any(|c| {
			c.is_whitespace() || c.is_control() || matches!(c, '"' | '\'' | '<' | '>' | '/' | '=')
		})
}

fn debug_assert_valid_names(attrs: &Attrs) {
	if cfg!(debug_assertions) {
		if let Some((name, _)) = attrs.iter().find(|(name, _)| !is_valid_attribute_name(name)) {
			panic!("invalid attribute name {name:?}");
		}
	}
}

/// A single attribute value before normalisation.
///
/// `Flag(true)` renders as a bare attribute, `Flag(false)` removes the
/// attribute, `Text` renders as `key="escaped value"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
	/// Boolean attribute.
	Flag(bool),
	/// Textual attribute value (escaped on output).
	Text(String),
}

impl From<bool> for AttrValue {
	fn from(value: bool) -> Self {
		AttrValue::Flag(value)
	}
}

impl From<&str> for AttrValue {
	fn from(value: &str) -> Self {
		AttrValue::Text(value.to_owned())
	}
}

impl From<String> for AttrValue {
	fn from(value: String) -> Self {
		AttrValue::Text(value)
	}
}

impl From<&String> for AttrValue {
	fn from(value: &String) -> Self {
		AttrValue::Text(value.clone())
	}
}

impl From<Cow<'_, str>> for AttrValue {
	fn from(value: Cow<'_, str>) -> Self {
		AttrValue::Text(value.into_owned())
	}
}

impl<T: Into<AttrValue>> From<Option<T>> for AttrValue {
	fn from(value: Option<T>) -> Self {
		match value {
			Some(v) => v.into(),
			None => AttrValue::Flag(false),
		}
	}
}

macro_rules! attr_value_from_display {
	($($ty:ty),* $(,)?) => {
		$(
			impl From<$ty> for AttrValue {
				fn from(value: $ty) -> Self {
					AttrValue::Text(value.to_string())
				}
			}
		)*
	};
}

attr_value_from_display!(i32, i64, u8, u16, u32, u64, usize);

/// A normalised, key-sorted attribute set.
///
/// Entries hold `None` for bare (boolean) attributes. Setting a key twice
/// keeps the last value; setting a key to `false` or `None` removes it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attrs {
	entries: BTreeMap<Cow<'static, str>, Option<String>>,
}

impl Attrs {
	/// Creates an empty attribute set.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets an attribute and returns the updated set.
	pub fn with(mut self, name: impl Into<Cow<'static, str>>, value: impl Into<AttrValue>) -> Self {
		self.set(name, value);
		self
	}

	/// Sets an attribute in place.
	pub fn set(&mut self, name: impl Into<Cow<'static, str>>, value: impl Into<AttrValue>) {
		let name = name.into();
		match value.into() {
			AttrValue::Flag(true) => {
				self.entries.insert(name, None);
			}
			AttrValue::Flag(false) => {
				self.entries.remove(&name);
			}
			AttrValue::Text(text) => {
				self.entries.insert(name, Some(text));
			}
		}
	}

	/// Copies every entry of `other` over this set.
	pub fn merge(mut self, other: Attrs) -> Self {
		self.entries.extend(other.entries);
		self
	}

	/// Returns whether the attribute is present (bare or valued).
	pub fn contains(&self, name: &str) -> bool {
		self.entries.contains_key(name)
	}

	/// Returns the textual value of an attribute, `Some("")` for bare ones.
	pub fn get(&self, name: &str) -> Option<&str> {
		self.entries
			.get(name)
			.map(|value| value.as_deref().unwrap_or(""))
	}

	/// Iterates entries in sorted key order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
		self.entries
			.iter()
			.map(|(name, value)| (name.as_ref(), value.as_deref()))
	}

	/// Number of attributes that will be emitted.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns `true` when no attribute will be emitted.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

impl From<()> for Attrs {
	fn from(_: ()) -> Self {
		Attrs::new()
	}
}

impl<K, V, const N: usize> From<[(K, V); N]> for Attrs
where
	K: Into<Cow<'static, str>>,
	V: Into<AttrValue>,
{
	fn from(entries: [(K, V); N]) -> Self {
		entries
			.into_iter()
			.fold(Attrs::new(), |attrs, (k, v)| attrs.with(k, v))
	}
}

impl<K, V> From<Vec<(K, V)>> for Attrs
where
	K: Into<Cow<'static, str>>,
	V: Into<AttrValue>,
{
	fn from(entries: Vec<(K, V)>) -> Self {
		entries
			.into_iter()
			.fold(Attrs::new(), |attrs, (k, v)| attrs.with(k, v))
	}
}

/// Builds an [`Attrs`] set from `key => value` pairs.
///
/// ```
/// use trellis_html::{attrs, input};
///
/// let node = input(attrs!["disabled" => true, "hidden" => false, "value" => "x"]);
/// assert_eq!(node.render_to_string(), r#"<input disabled value="x">"#);
/// ```
#[macro_export]
macro_rules! attrs {
	() => {
		$crate::Attrs::new()
	};
	($($key:expr => $value:expr),+ $(,)?) => {
		$crate::Attrs::new()$(.with($key, $value))+
	};
}

/// An element node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
	tag: Cow<'static, str>,
	attrs: Attrs,
	children: Vec<HtmlNode>,
	is_void: bool,
}

impl Element {
	/// Creates an element, rejecting children on void tags.
	pub fn new(
		tag: impl Into<Cow<'static, str>>,
		attrs: impl Into<Attrs>,
		children: impl IntoChildren,
	) -> Result<Self> {
		let tag = tag.into();
		let is_void = is_void_element(&tag);
		let children = children.into_children();
		if is_void && !children.is_empty() {
			return Err(HtmlError::VoidElementWithChildren {
				tag: tag.into_owned(),
			});
		}
		let attrs = attrs.into();
		if let Some((name, _)) = attrs.iter().find(|(name, _)| !is_valid_attribute_name(name)) {
			return Err(HtmlError::InvalidAttributeName {
				tag: tag.into_owned(),
				name: name.to_string(),
			});
		}
		Ok(Self {
			tag,
			attrs,
			children,
			is_void,
		})
	}

	/// Creates a void element. Callers guarantee `tag` is void.
	pub(crate) fn void(tag: &'static str, attrs: Attrs) -> Self {
		debug_assert!(is_void_element(tag));
		debug_assert_valid_names(&attrs);
		Self {
			tag: Cow::Borrowed(tag),
			attrs,
			children: Vec::new(),
			is_void: true,
		}
	}

	/// Creates a non-void element. Callers guarantee `tag` is not void.
	pub(crate) fn container(tag: &'static str, attrs: Attrs, children: Vec<HtmlNode>) -> Self {
		debug_assert!(!is_void_element(tag));
		debug_assert_valid_names(&attrs);
		Self {
			tag: Cow::Borrowed(tag),
			attrs,
			children,
			is_void: false,
		}
	}

	/// Returns a copy of this element with one more attribute.
	pub fn with_attr(
		mut self,
		name: impl Into<Cow<'static, str>>,
		value: impl Into<AttrValue>,
	) -> Self {
		self.attrs.set(name, value);
		self
	}

	/// Returns the tag name.
	pub fn tag(&self) -> &str {
		&self.tag
	}

	/// Returns the sorted attribute set.
	pub fn attrs(&self) -> &Attrs {
		&self.attrs
	}

	/// Returns the child nodes.
	pub fn children(&self) -> &[HtmlNode] {
		&self.children
	}

	/// Returns whether this is a void element.
	pub fn is_void(&self) -> bool {
		self.is_void
	}
}

/// A node in the HTML tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
	/// Several nodes without a wrapper element.
	Fragment(Vec<HtmlNode>),
	/// An element.
	Element(Element),
	/// Text content, escaped on output.
	Text(Cow<'static, str>),
	/// Pre-serialized markup emitted verbatim.
	Raw(String),
	/// An HTML comment.
	Comment(String),
	/// The HTML5 doctype.
	Doctype,
}

impl HtmlNode {
	/// Creates a text node.
	pub fn text(value: impl Into<Cow<'static, str>>) -> Self {
		HtmlNode::Text(value.into())
	}

	/// Creates a fragment from any children.
	pub fn fragment(children: impl IntoChildren) -> Self {
		HtmlNode::Fragment(children.into_children())
	}

	/// An empty fragment, which renders nothing.
	pub fn empty() -> Self {
		HtmlNode::Fragment(Vec::new())
	}

	/// Returns `true` if the node renders to an empty string.
	pub fn is_empty(&self) -> bool {
		match self {
			HtmlNode::Fragment(children) => children.iter().all(HtmlNode::is_empty),
			HtmlNode::Text(text) => text.is_empty(),
			HtmlNode::Raw(html) => html.is_empty(),
			HtmlNode::Element(_) | HtmlNode::Comment(_) | HtmlNode::Doctype => false,
		}
	}

	/// Returns the element if this node is one.
	pub fn as_element(&self) -> Option<&Element> {
		match self {
			HtmlNode::Element(el) => Some(el),
			_ => None,
		}
	}

	/// Renders the node without any added whitespace.
	pub fn render_to_string(&self) -> String {
		render::render_minimized(self)
	}

	/// Renders the node as indented, one-node-per-line HTML.
	pub fn render_pretty(&self) -> String {
		render::render_pretty(self)
	}
}

impl From<Element> for HtmlNode {
	fn from(el: Element) -> Self {
		HtmlNode::Element(el)
	}
}

/// Fluent builder for elements whose tag is only known at runtime.
///
/// ```
/// use trellis_html::ElementBuilder;
///
/// let node = ElementBuilder::new("custom-card")
///     .attr("data-state", "open")
///     .child("Hello")
///     .build()
///     .unwrap();
/// assert_eq!(
///     node.render_to_string(),
///     r#"<custom-card data-state="open">Hello</custom-card>"#
/// );
/// ```
#[derive(Debug, Clone)]
pub struct ElementBuilder {
	tag: Cow<'static, str>,
	attrs: Attrs,
	children: Vec<HtmlNode>,
}

impl ElementBuilder {
	/// Starts a builder for `tag`.
	pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
		Self {
			tag: tag.into(),
			attrs: Attrs::new(),
			children: Vec::new(),
		}
	}

	/// Adds an attribute.
	pub fn attr(mut self, name: impl Into<Cow<'static, str>>, value: impl Into<AttrValue>) -> Self {
		self.attrs.set(name, value);
		self
	}

	/// Merges a whole attribute set.
	pub fn attrs(mut self, attrs: impl Into<Attrs>) -> Self {
		self.attrs = self.attrs.merge(attrs.into());
		self
	}

	/// Sets a boolean attribute: present when `on`, omitted otherwise.
	pub fn flag(self, name: impl Into<Cow<'static, str>>, on: bool) -> Self {
		self.attr(name, on)
	}

	/// Appends children.
	pub fn child(mut self, child: impl IntoChildren) -> Self {
		child.push_into(&mut self.children);
		self
	}

	/// Appends every item of `children` in order.
	pub fn children<I>(mut self, children: I) -> Self
	where
		I: IntoIterator,
		I::Item: IntoChildren,
	{
		for child in children {
			child.push_into(&mut self.children);
		}
		self
	}

	/// Finishes the element, failing if a void tag received children.
	pub fn build(self) -> Result<HtmlNode> {
		Element::new(self.tag, self.attrs, self.children).map(HtmlNode::Element)
	}
}
