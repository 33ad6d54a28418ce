//! Tag functions.
//!
//! Container tags take `(attrs, children)` and void tags take `(attrs)`
//! only, so a void element with children cannot be written with these
//! functions. [`element`] covers tags known only at runtime and performs
//! the void check there.

use std::borrow::Cow;

use crate::children::IntoChildren;
use crate::error::Result;
use crate::node::{Attrs, Element, HtmlNode};

macro_rules! container_tags {
	($($name:ident),* $(,)?) => {
		$(
			#[doc = concat!("Builds a `<", stringify!($name), ">` element.")]
			pub fn $name(attrs: impl Into<Attrs>, children: impl IntoChildren) -> HtmlNode {
				HtmlNode::Element(Element::container(
					stringify!($name),
					attrs.into(),
					children.into_children(),
				))
			}
		)*
	};
}

macro_rules! void_tags {
	($($name:ident),* $(,)?) => {
		$(
			#[doc = concat!("Builds a void `<", stringify!($name), ">` element.")]
			pub fn $name(attrs: impl Into<Attrs>) -> HtmlNode {
				HtmlNode::Element(Element::void(stringify!($name), attrs.into()))
			}
		)*
	};
}

container_tags!(
	html, head, body, title, main, section, article, aside, header, footer, nav, div, span, p, h1,
	h2, h3, h4, h5, h6, ul, ol, li, dl, dt, dd, a, button, form, label, select, option, textarea,
	pre, code, script, style, table, thead, tbody, tr, th, td, em, strong, small, blockquote,
	figure, figcaption, details, summary, template, fieldset, legend, noscript, sup, sub,
);

void_tags!(
	area, base, br, col, embed, hr, img, input, link, meta, source, track, wbr,
);

/// Builds an element for a runtime tag name.
///
/// Fails with [`HtmlError::VoidElementWithChildren`](crate::HtmlError) when
/// `tag` is void and `children` flattens to at least one node, and with
/// `InvalidAttributeName` when an attribute name cannot be emitted as-is.
pub fn element(
	tag: impl Into<Cow<'static, str>>,
	attrs: impl Into<Attrs>,
	children: impl IntoChildren,
) -> Result<HtmlNode> {
	Element::new(tag, attrs, children).map(HtmlNode::Element)
}

/// Builds a text node.
pub fn text(value: impl Into<Cow<'static, str>>) -> HtmlNode {
	HtmlNode::text(value)
}

/// Builds a fragment.
pub fn fragment(children: impl IntoChildren) -> HtmlNode {
	HtmlNode::fragment(children)
}

/// Builds a comment node.
pub fn comment(value: impl Into<String>) -> HtmlNode {
	HtmlNode::Comment(value.into())
}

/// Builds the `<!doctype html>` node.
pub fn doctype() -> HtmlNode {
	HtmlNode::Doctype
}
