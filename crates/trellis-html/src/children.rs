//! Child flattening.
//!
//! Tag functions accept any [`IntoChildren`] value. Flattening rules:
//!
//! - strings become text nodes (escaped when rendered)
//! - nodes and elements are kept as-is, fragments are spliced
//! - [`RawHtml`] contributes its retained AST, or a raw node without one
//! - `None`, `()` and both booleans contribute nothing
//! - vectors, arrays and tuples are flattened recursively, in order
//! - a [`ChildList`] splices its accumulated children in push order

use std::borrow::Cow;

use crate::node::{Element, HtmlNode};
use crate::raw::RawHtml;

/// Values that can be flattened into a list of child nodes.
pub trait IntoChildren {
	/// Appends the flattened nodes to `out`.
	fn push_into(self, out: &mut Vec<HtmlNode>);

	/// Collects the flattened nodes into a new vector.
	fn into_children(self) -> Vec<HtmlNode>
	where
		Self: Sized,
	{
		let mut out = Vec::new();
		self.push_into(&mut out);
		out
	}
}

/// A child value whose kind is decided when it is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Child {
	/// Plain text, escaped on output.
	Text(Cow<'static, str>),
	/// An already-built node.
	Node(HtmlNode),
	/// Trusted markup.
	Raw(RawHtml),
	/// An imperatively built child list.
	List(ChildList),
}

impl IntoChildren for Child {
	fn push_into(self, out: &mut Vec<HtmlNode>) {
		match self {
			Child::Text(text) => out.push(HtmlNode::Text(text)),
			Child::Node(node) => out.push(node),
			Child::Raw(raw) => raw.push_into(out),
			Child::List(list) => list.push_into(out),
		}
	}
}

/// Accumulates children imperatively, then acts as a single child value.
///
/// ```
/// use trellis_html::{ChildList, li, ul};
///
/// let mut items = ChildList::new();
/// for name in ["a", "b"] {
///     items.push(li((), name));
/// }
/// assert_eq!(ul((), items).render_to_string(), "<ul><li>a</li><li>b</li></ul>");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChildList {
	nodes: Vec<HtmlNode>,
}

impl ChildList {
	/// Creates an empty list.
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends a child (flattened immediately).
	pub fn push(&mut self, child: impl IntoChildren) -> &mut Self {
		child.push_into(&mut self.nodes);
		self
	}

	/// Appends every item of an iterator.
	pub fn extend<I>(&mut self, children: I) -> &mut Self
	where
		I: IntoIterator,
		I::Item: IntoChildren,
	{
		for child in children {
			child.push_into(&mut self.nodes);
		}
		self
	}

	/// Number of nodes accumulated so far.
	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	/// Returns `true` if nothing was pushed (or everything flattened away).
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	/// Consumes the list into a fragment node.
	pub fn into_fragment(self) -> HtmlNode {
		HtmlNode::Fragment(self.nodes)
	}
}

impl IntoChildren for ChildList {
	fn push_into(self, out: &mut Vec<HtmlNode>) {
		out.extend(self.nodes);
	}
}

// Fragments are transparent inside a child list
impl IntoChildren for HtmlNode {
	fn push_into(self, out: &mut Vec<HtmlNode>) {
		match self {
			HtmlNode::Fragment(children) => out.extend(children),
			node => out.push(node),
		}
	}
}

impl IntoChildren for Element {
	fn push_into(self, out: &mut Vec<HtmlNode>) {
		out.push(HtmlNode::Element(self));
	}
}

impl IntoChildren for RawHtml {
	fn push_into(self, out: &mut Vec<HtmlNode>) {
		match self.into_parts() {
			(_, Some(ast)) => out.push(std::sync::Arc::unwrap_or_clone(ast)),
			(html, None) => out.push(HtmlNode::Raw(html)),
		}
	}
}

impl IntoChildren for &RawHtml {
	fn push_into(self, out: &mut Vec<HtmlNode>) {
		self.clone().push_into(out);
	}
}

impl IntoChildren for &str {
	fn push_into(self, out: &mut Vec<HtmlNode>) {
		out.push(HtmlNode::Text(Cow::Owned(self.to_owned())));
	}
}

impl IntoChildren for String {
	fn push_into(self, out: &mut Vec<HtmlNode>) {
		out.push(HtmlNode::Text(Cow::Owned(self)));
	}
}

impl IntoChildren for &String {
	fn push_into(self, out: &mut Vec<HtmlNode>) {
		out.push(HtmlNode::Text(Cow::Owned(self.clone())));
	}
}

impl IntoChildren for Cow<'static, str> {
	fn push_into(self, out: &mut Vec<HtmlNode>) {
		out.push(HtmlNode::Text(self));
	}
}

impl IntoChildren for () {
	fn push_into(self, _out: &mut Vec<HtmlNode>) {}
}

impl IntoChildren for bool {
	fn push_into(self, _out: &mut Vec<HtmlNode>) {}
}

impl<T: IntoChildren> IntoChildren for Option<T> {
	fn push_into(self, out: &mut Vec<HtmlNode>) {
		if let Some(child) = self {
			child.push_into(out);
		}
	}
}

impl<T: IntoChildren> IntoChildren for Vec<T> {
	fn push_into(self, out: &mut Vec<HtmlNode>) {
		for child in self {
			child.push_into(out);
		}
	}
}

impl<T: IntoChildren, const N: usize> IntoChildren for [T; N] {
	fn push_into(self, out: &mut Vec<HtmlNode>) {
		for child in self {
			child.push_into(out);
		}
	}
}

macro_rules! into_children_display {
	($($ty:ty),* $(,)?) => {
		$(
			impl IntoChildren for $ty {
				fn push_into(self, out: &mut Vec<HtmlNode>) {
					out.push(HtmlNode::Text(Cow::Owned(self.to_string())));
				}
			}
		)*
	};
}

into_children_display!(i32, i64, u32, u64, usize);

macro_rules! into_children_tuple {
	($($name:ident),+) => {
		impl<$($name: IntoChildren),+> IntoChildren for ($($name,)+) {
			#[allow(non_snake_case)]
			fn push_into(self, out: &mut Vec<HtmlNode>) {
				let ($($name,)+) = self;
				$($name.push_into(out);)+
			}
		}
	};
}

into_children_tuple!(A);
into_children_tuple!(A, B);
into_children_tuple!(A, B, C);
into_children_tuple!(A, B, C, D);
into_children_tuple!(A, B, C, D, E);
into_children_tuple!(A, B, C, D, E, F);
into_children_tuple!(A, B, C, D, E, F, G);
into_children_tuple!(A, B, C, D, E, F, G, H);

#[cfg(test)]
mod tests {
	use super::*;
	use crate::raw::trusted_raw;
	use rstest::rstest;

	#[rstest]
	fn test_dropped_values() {
		let nodes = (None::<&str>, false, true, ()).into_children();
		assert!(nodes.is_empty());
	}

	#[rstest]
	fn test_nested_vectors_flatten_in_order() {
		let nodes = vec![vec!["a", "b"], vec![], vec!["c"]].into_children();
		assert_eq!(
			nodes,
			vec![
				HtmlNode::text("a"),
				HtmlNode::text("b"),
				HtmlNode::text("c")
			]
		);
	}

	#[rstest]
	fn test_child_list_splices_in_push_order() {
		let mut list = ChildList::new();
		list.push("one").push(None::<String>).push(("two", "three"));
		assert_eq!(list.len(), 3);
		let nodes = ("zero", list).into_children();
		let texts: Vec<_> = nodes
			.iter()
			.map(|n| match n {
				HtmlNode::Text(t) => t.to_string(),
				other => panic!("unexpected node {other:?}"),
			})
			.collect();
		assert_eq!(texts, vec!["zero", "one", "two", "three"]);
	}

	#[rstest]
	fn test_child_enum_variants() {
		let nodes = vec![
			Child::Text("t".into()),
			Child::Node(HtmlNode::Doctype),
			Child::Raw(trusted_raw("<b>x</b>")),
			Child::List(ChildList::new()),
		]
		.into_children();
		assert_eq!(nodes.len(), 3);
		assert_eq!(nodes[2], HtmlNode::Raw("<b>x</b>".to_string()));
	}

	#[rstest]
	fn test_numbers_become_text() {
		assert_eq!(42u32.into_children(), vec![HtmlNode::text("42")]);
	}
}
