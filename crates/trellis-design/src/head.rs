//! Document head content and the defaults merge.
//!
//! The set of mergeable keys is closed ([`HeadSlotKey`]). Merging is done
//! per key: a caller value replaces the default for that key, an unset
//! caller key falls back to the default. Values are never concatenated.

use std::fmt;

use trellis_html::{
	Attrs, HtmlNode, IntoChildren, RawHtml, link, meta, script, style, title, trusted_raw,
};

/// Keys a caller may contribute to the document head.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HeadSlotKey {
	/// `<title>`
	Title,
	/// `<meta>` tags.
	Meta,
	/// `<link>` tags.
	Links,
	/// Style blocks.
	Styles,
	/// `<script>` tags.
	Scripts,
}

impl HeadSlotKey {
	/// Every key, in emission order.
	pub const ALL: [HeadSlotKey; 5] = [
		HeadSlotKey::Title,
		HeadSlotKey::Meta,
		HeadSlotKey::Links,
		HeadSlotKey::Styles,
		HeadSlotKey::Scripts,
	];

	/// The slot name used in head slot specs.
	pub fn as_str(&self) -> &'static str {
		match self {
			HeadSlotKey::Title => "title",
			HeadSlotKey::Meta => "meta",
			HeadSlotKey::Links => "links",
			HeadSlotKey::Styles => "styles",
			HeadSlotKey::Scripts => "scripts",
		}
	}

	/// Parses a slot name.
	pub fn from_name(name: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|key| key.as_str() == name)
	}
}

impl fmt::Display for HeadSlotKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A `<meta>` tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaTag {
	attrs: Attrs,
}

impl MetaTag {
	/// `<meta name=".." content="..">`
	pub fn named(name: impl Into<String>, content: impl Into<String>) -> Self {
		Self {
			attrs: Attrs::new()
				.with("name", name.into())
				.with("content", content.into()),
		}
	}

	/// `<meta property=".." content="..">`, as used by Open Graph.
	pub fn property(property: impl Into<String>, content: impl Into<String>) -> Self {
		Self {
			attrs: Attrs::new()
				.with("property", property.into())
				.with("content", content.into()),
		}
	}

	/// `<meta charset="..">`
	pub fn charset(charset: impl Into<String>) -> Self {
		Self {
			attrs: Attrs::new().with("charset", charset.into()),
		}
	}

	/// Builds the node.
	pub fn to_node(&self) -> HtmlNode {
		meta(self.attrs.clone())
	}
}

/// A `<link>` tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTag {
	attrs: Attrs,
}

impl LinkTag {
	/// `<link href=".." rel="..">`
	pub fn new(rel: impl Into<String>, href: impl Into<String>) -> Self {
		Self {
			attrs: Attrs::new()
				.with("rel", rel.into())
				.with("href", href.into()),
		}
	}

	/// A stylesheet link.
	pub fn stylesheet(href: impl Into<String>) -> Self {
		Self::new("stylesheet", href)
	}

	/// Adds an attribute such as `crossorigin` or `media`.
	pub fn with_attr(mut self, name: &'static str, value: impl Into<trellis_html::AttrValue>) -> Self {
		self.attrs.set(name, value);
		self
	}

	/// Builds the node.
	pub fn to_node(&self) -> HtmlNode {
		link(self.attrs.clone())
	}
}

/// A `<script>` tag, external or inline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptTag {
	attrs: Attrs,
	body: Option<RawHtml>,
}

impl ScriptTag {
	/// A classic external script.
	pub fn src(src: impl Into<String>) -> Self {
		Self {
			attrs: Attrs::new().with("src", src.into()),
			body: None,
		}
	}

	/// An external ES module.
	pub fn module(src: impl Into<String>) -> Self {
		let mut tag = Self::src(src);
		tag.attrs.set("type", "module");
		tag
	}

	/// An inline script. The body is emitted verbatim.
	pub fn inline(body: RawHtml) -> Self {
		Self {
			attrs: Attrs::new(),
			body: Some(body),
		}
	}

	/// Adds an attribute such as `defer` or `nonce`.
	pub fn with_attr(mut self, name: &'static str, value: impl Into<trellis_html::AttrValue>) -> Self {
		self.attrs.set(name, value);
		self
	}

	/// Builds the node.
	pub fn to_node(&self) -> HtmlNode {
		script(self.attrs.clone(), self.body.clone())
	}
}

/// Caller or design-system head content. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadSlots {
	/// Document title.
	pub title: Option<String>,
	/// Meta tags.
	pub meta: Option<Vec<MetaTag>>,
	/// Link tags.
	pub links: Option<Vec<LinkTag>>,
	/// Style blocks, usually built with [`style_block`].
	pub styles: Option<Vec<RawHtml>>,
	/// Script tags.
	pub scripts: Option<Vec<ScriptTag>>,
}

impl HeadSlots {
	/// Empty head content.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the title.
	pub fn title(mut self, title: impl Into<String>) -> Self {
		self.title = Some(title.into());
		self
	}

	/// Sets the meta tags.
	pub fn meta(mut self, meta: impl IntoIterator<Item = MetaTag>) -> Self {
		self.meta = Some(meta.into_iter().collect());
		self
	}

	/// Sets the link tags.
	pub fn links(mut self, links: impl IntoIterator<Item = LinkTag>) -> Self {
		self.links = Some(links.into_iter().collect());
		self
	}

	/// Sets the style blocks.
	pub fn styles(mut self, styles: impl IntoIterator<Item = RawHtml>) -> Self {
		self.styles = Some(styles.into_iter().collect());
		self
	}

	/// Sets the script tags.
	pub fn scripts(mut self, scripts: impl IntoIterator<Item = ScriptTag>) -> Self {
		self.scripts = Some(scripts.into_iter().collect());
		self
	}

	/// Keys that carry a value, in emission order.
	pub fn supplied_keys(&self) -> Vec<HeadSlotKey> {
		HeadSlotKey::ALL
			.into_iter()
			.filter(|key| match key {
				HeadSlotKey::Title => self.title.is_some(),
				HeadSlotKey::Meta => self.meta.is_some(),
				HeadSlotKey::Links => self.links.is_some(),
				HeadSlotKey::Styles => self.styles.is_some(),
				HeadSlotKey::Scripts => self.scripts.is_some(),
			})
			.collect()
	}

	/// Builds head nodes: title, meta, links, styles, scripts.
	pub fn to_nodes(&self) -> Vec<HtmlNode> {
		let mut nodes = Vec::new();
		if let Some(text) = &self.title {
			nodes.push(title((), text.clone()));
		}
		nodes.extend(self.meta.iter().flatten().map(MetaTag::to_node));
		nodes.extend(self.links.iter().flatten().map(LinkTag::to_node));
		for block in self.styles.iter().flatten() {
			block.push_into(&mut nodes);
		}
		nodes.extend(self.scripts.iter().flatten().map(ScriptTag::to_node));
		nodes
	}
}

/// Merges caller head content over defaults, key by key.
///
/// ```
/// use trellis_design::head::{HeadSlots, merge_head_slots, style_block};
///
/// let defaults = HeadSlots::new()
///     .title("Site")
///     .styles([style_block("body { margin: 0; }")]);
/// let merged = merge_head_slots(&defaults, HeadSlots::new().title("About"));
///
/// assert_eq!(merged.title.as_deref(), Some("About"));
/// assert_eq!(merged.styles, defaults.styles);
/// ```
pub fn merge_head_slots(defaults: &HeadSlots, overrides: HeadSlots) -> HeadSlots {
	HeadSlots {
		title: overrides.title.or_else(|| defaults.title.clone()),
		meta: overrides.meta.or_else(|| defaults.meta.clone()),
		links: overrides.links.or_else(|| defaults.links.clone()),
		styles: overrides.styles.or_else(|| defaults.styles.clone()),
		scripts: overrides.scripts.or_else(|| defaults.scripts.clone()),
	}
}

/// Wraps trusted CSS in a `<style>` element.
pub fn style_block(css: &str) -> RawHtml {
	RawHtml::from_node(style((), trusted_raw(css)))
}
