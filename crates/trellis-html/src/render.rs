//! Minimized and pretty renderers.
//!
//! Both renderers are pure functions of the tree: the same [`HtmlNode`]
//! always yields the same bytes.
//!
//! Pretty output rules:
//!
//! - two spaces of indentation per depth, every line ends with `\n`
//! - an element whose only child is a short single-line text is inlined
//! - `script` and `style` bodies are emitted line by line one level deeper,
//!   exactly as the minimized renderer produced them
//! - `pre` and `textarea` bodies are kept inline and untouched

use crate::escape::{escape_attr, escape_comment, escape_text};
use crate::node::{Attrs, Element, HtmlNode};

/// Longest escaped text (in bytes) that is inlined next to its tag.
pub const INLINE_TEXT_LIMIT: usize = 80;

const INDENT: &str = "  ";

/// Elements whose body is emitted verbatim on indented lines.
const INDENTED_VERBATIM: &[&str] = &["script", "style"];

/// Elements whose body is emitted verbatim on the opening line.
const INLINE_VERBATIM: &[&str] = &["pre", "textarea"];

/// Renders the tree without added whitespace.
pub fn render_minimized(node: &HtmlNode) -> String {
	let mut out = String::new();
	write_minimized(node, &mut out);
	out
}

/// Renders the tree with indentation.
pub fn render_pretty(node: &HtmlNode) -> String {
	let mut out = String::new();
	write_pretty(node, 0, &mut out);
	out
}

fn write_attrs(attrs: &Attrs, out: &mut String) {
	for (name, value) in attrs.iter() {
		out.push(' ');
		out.push_str(name);
		if let Some(value) = value {
			out.push_str("=\"");
			out.push_str(&escape_attr(value));
			out.push('"');
		}
	}
}

fn write_open_tag(el: &Element, out: &mut String) {
	out.push('<');
	out.push_str(el.tag());
	write_attrs(el.attrs(), out);
	out.push('>');
}

fn write_close_tag(el: &Element, out: &mut String) {
	out.push_str("</");
	out.push_str(el.tag());
	out.push('>');
}

fn write_minimized(node: &HtmlNode, out: &mut String) {
	match node {
		HtmlNode::Fragment(children) => {
			for child in children {
				write_minimized(child, out);
			}
		}
		HtmlNode::Element(el) => {
			write_open_tag(el, out);
			if !el.is_void() {
				for child in el.children() {
					write_minimized(child, out);
				}
				write_close_tag(el, out);
			}
		}
		HtmlNode::Text(text) => out.push_str(&escape_text(text)),
		HtmlNode::Raw(html) => out.push_str(html),
		HtmlNode::Comment(value) => {
			out.push_str("<!--");
			out.push_str(&escape_comment(value));
			out.push_str("-->");
		}
		HtmlNode::Doctype => out.push_str("<!doctype html>"),
	}
}

fn push_line(depth: usize, line: &str, out: &mut String) {
	for _ in 0..depth {
		out.push_str(INDENT);
	}
	out.push_str(line);
	out.push('\n');
}

/// Returns the escaped text when `el` qualifies for inline output.
fn inline_text(el: &Element) -> Option<String> {
	match el.children() {
		[HtmlNode::Text(text)] => {
			let escaped = escape_text(text);
			(escaped.len() <= INLINE_TEXT_LIMIT && !escaped.contains('\n'))
				.then(|| escaped.into_owned())
		}
		_ => None,
	}
}

fn write_pretty(node: &HtmlNode, depth: usize, out: &mut String) {
	match node {
		HtmlNode::Fragment(children) => {
			for child in children {
				write_pretty(child, depth, out);
			}
		}
		HtmlNode::Element(el) => write_pretty_element(el, depth, out),
		HtmlNode::Text(text) => {
			for line in escape_text(text).lines() {
				push_line(depth, line, out);
			}
		}
		HtmlNode::Raw(html) => {
			for line in html.lines() {
				push_line(depth, line, out);
			}
		}
		HtmlNode::Comment(value) => {
			push_line(depth, &format!("<!-- {} -->", escape_comment(value)), out);
		}
		HtmlNode::Doctype => push_line(depth, "<!doctype html>", out),
	}
}

fn write_pretty_element(el: &Element, depth: usize, out: &mut String) {
	let mut open = String::new();
	write_open_tag(el, &mut open);

	if el.is_void() {
		push_line(depth, &open, out);
		return;
	}

	let mut close = String::new();
	write_close_tag(el, &mut close);

	if INLINE_VERBATIM.contains(&el.tag()) {
		let body: String = el.children().iter().map(render_minimized).collect();
		push_line(depth, &format!("{open}{body}{close}"), out);
		return;
	}

	if INDENTED_VERBATIM.contains(&el.tag()) {
		let body: String = el.children().iter().map(render_minimized).collect();
		if body.is_empty() {
			push_line(depth, &format!("{open}{close}"), out);
			return;
		}
		push_line(depth, &open, out);
		for line in body.lines() {
			push_line(depth + 1, line, out);
		}
		push_line(depth, &close, out);
		return;
	}

	if let Some(text) = inline_text(el) {
		push_line(depth, &format!("{open}{text}{close}"), out);
		return;
	}

	let mut body = String::new();
	for child in el.children() {
		write_pretty(child, depth + 1, &mut body);
	}
	if body.is_empty() {
		push_line(depth, &format!("{open}{close}"), out);
		return;
	}
	push_line(depth, &open, out);
	out.push_str(&body);
	push_line(depth, &close, out);
}
