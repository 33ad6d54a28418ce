//! The natural design system: passthrough class names, a classic article
//! page with header, sidebar, content and footer, and a small reset
//! stylesheet in the default head.

use std::sync::Arc;

use trellis_html::{
	StyleRule, a, aside, attrs, div, footer, h1, h2, header, li, main, nav, p, section, small,
	strong, ul,
};

use crate::breadcrumbs::Breadcrumbs;
use crate::component::{Component, ComponentStylesheet, define_component};
use crate::context::RenderContext;
use crate::error::Result;
use crate::head::{HeadSlots, MetaTag, style_block};
use crate::layout::define_layout;
use crate::naming::{NamingKind, PassthroughNaming};
use crate::region::define_region;
use crate::slot::{Slots, define_slot_spec};
use crate::system::DesignSystem;

use super::paragraph;

/// Design system name.
pub const NAME: &str = "natural";

/// The article layout.
pub const ARTICLE_LAYOUT: &str = "Article";

/// Reset applied to every page unless the caller supplies its own styles.
pub const RESET_CSS: &str = "*, *::before, *::after { box-sizing: border-box; } body { margin: 0; line-height: 1.5; }";

/// How loud a callout is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
	/// Neutral information.
	Info,
	/// Something to be careful about.
	Warning,
}

impl Tone {
	fn as_str(self) -> &'static str {
		match self {
			Tone::Info => "info",
			Tone::Warning => "warning",
		}
	}
}

/// Props for [`callout`].
#[derive(Debug, Clone)]
pub struct CalloutProps {
	/// Tone.
	pub tone: Tone,
	/// Short heading.
	pub title: String,
	/// Body text.
	pub body: String,
}

/// Props for [`card`].
#[derive(Debug, Clone)]
pub struct CardProps {
	/// Card heading.
	pub title: String,
	/// Card text.
	pub body: String,
	/// Optional link target for the heading.
	pub href: Option<String>,
}

/// A highlighted aside.
pub fn callout() -> Component<CalloutProps> {
	define_component("callout", |ctx: &RenderContext, props: &CalloutProps| {
		aside(
			attrs![
				"class" => ctx.class_name("callout", NamingKind::Component),
				ctx.data_attribute_name("tone", NamingKind::Component) => props.tone.as_str(),
				"role" => "note",
			],
			(strong((), props.title.clone()), p((), props.body.clone())),
		)
	})
	.with_stylesheet(ComponentStylesheet::new([
		StyleRule::new(".callout", [("borderLeft", "4px solid"), ("padding", "0.5rem 1rem")]),
		StyleRule::new(".callout[data-tone=\"warning\"]", [("borderColor", "#c60")]),
	]))
}

/// A titled content card.
pub fn card() -> Component<CardProps> {
	define_component("card", |ctx: &RenderContext, props: &CardProps| {
		let heading = match &props.href {
			Some(href) => h2((), a(attrs!["href" => href], props.title.clone())),
			None => h2((), props.title.clone()),
		};
		section(
			attrs!["class" => ctx.class_name("card", NamingKind::Component)],
			(heading, p((), props.body.clone())),
		)
	})
	.with_stylesheet(ComponentStylesheet::new([StyleRule::new(
		".card",
		[("border", "1px solid #ddd"), ("borderRadius", "6px"), ("padding", "1rem")],
	)]))
}

fn breadcrumbs() -> Breadcrumbs {
	Breadcrumbs::new("Home")
		.route("guides", "Guides")
		.route("reference", "Reference")
		.route("blog", "Blog")
}

/// Builds the natural design system.
///
/// Render data may carry a `path` string; the header then shows a
/// breadcrumb trail for it.
pub fn design_system() -> Result<DesignSystem> {
	let crumbs = breadcrumbs();
	let header_region = define_region(
		"Header",
		define_slot_spec(&["title"], &[])?,
		move |ctx, slots| {
			Ok(header(
				attrs!["class" => ctx.class_name("header", NamingKind::Region)],
				(
					ctx.get_str("path").map(|path| crumbs.render(ctx, path)),
					h1((), slots.required("title")?),
				),
			))
		},
	);

	let sidebar_region = define_region("Sidebar", define_slot_spec(&["links"], &[])?, |ctx, slots| {
		Ok(aside(
			attrs!["class" => ctx.class_name("sidebar", NamingKind::Region)],
			nav((), slots.required("links")?),
		))
	});

	let content_region = define_region("Content", define_slot_spec(&["body"], &[])?, |ctx, slots| {
		Ok(main(
			attrs![
				"class" => ctx.class_name("content", NamingKind::Region),
				"id" => ctx.element_id("content", NamingKind::Region),
			],
			slots.required("body")?,
		))
	});

	let footer_region = define_region("Footer", define_slot_spec(&[], &["note"])?, |ctx, slots| {
		Ok(footer(
			attrs!["class" => ctx.class_name("footer", NamingKind::Region)],
			small((), slots.optional("note")?),
		))
	});

	let article = define_layout(
		ARTICLE_LAYOUT,
		define_slot_spec(&["title", "body"], &["sidebar", "footer"])?,
		|ctx, api, slots| {
			let sidebar = match slots.optional("sidebar")? {
				Some(links) => Some(api.region("Sidebar", Slots::new().slot("links", move |_| links))?),
				None => None,
			};
			let note = slots.optional("footer")?;
			let footer_slots = match note {
				Some(note) => Slots::new().slot("note", move |_| note),
				None => Slots::new(),
			};

			Ok(div(
				attrs!["class" => ctx.class_name("article", NamingKind::Layout)],
				(
					api.region("Header", slots.forward(&["title"])?)?,
					sidebar,
					api.region("Content", slots.forward(&["body"])?)?,
					api.region("Footer", footer_slots)?,
				),
			))
		},
	)
	.with_head_slots(define_slot_spec(&[], &["title", "meta", "links", "styles"])?);

	DesignSystem::builder(NAME, Arc::new(PassthroughNaming))
		.default_head(
			HeadSlots::new()
				.title("Natural")
				.meta([
					MetaTag::charset("utf-8"),
					MetaTag::named("viewport", "width=device-width, initial-scale=1"),
				])
				.styles([style_block(RESET_CSS)]),
		)
		.component(&paragraph())
		.component(&callout())
		.component(&card())
		.region(header_region)
		.region(sidebar_region)
		.region(content_region)
		.region(footer_region)
		.layout(article)
		.build()
}

/// A list of sidebar links, for use as the `sidebar` slot.
pub fn link_list<'l>(links: impl IntoIterator<Item = (&'l str, &'l str)>) -> trellis_html::HtmlNode {
	ul(
		(),
		links
			.into_iter()
			.map(|(href, label)| li((), a(attrs!["href" => href], label)))
			.collect::<Vec<_>>(),
	)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::PageInput;
	use rstest::{fixture, rstest};
	use serde_json::{Value, json};

	#[fixture]
	fn ds() -> DesignSystem {
		design_system().unwrap()
	}

	#[rstest]
	fn test_components_registered_with_styles(ds: DesignSystem) {
		let names: Vec<_> = ds.components().iter().map(|c| c.name.as_str()).collect();
		assert_eq!(names, vec!["paragraph", "callout", "card"]);
		let css = ds.stylesheet().unwrap();
		assert!(css.contains(".callout { border-left: 4px solid; padding: 0.5rem 1rem; }"));
		assert!(css.contains(".card { border: 1px solid #ddd; border-radius: 6px; padding: 1rem; }"));
	}

	#[rstest]
	fn test_article_without_optional_regions(ds: DesignSystem) {
		let html = ds
			.page(
				ARTICLE_LAYOUT,
				Value::Null,
				Slots::new()
					.slot("title", |_| "Hello")
					.slot("body", |ctx| paragraph().render(ctx, "Text")),
			)
			.unwrap();
		assert!(html.contains(concat!(
			r#"<body><div class="article"><header class="header"><h1>Hello</h1></header>"#,
			r#"<main class="content" id="content"><p>Text</p></main>"#,
			r#"<footer class="footer"><small></small></footer></div></body>"#
		)));
		assert!(!html.contains("sidebar"));
	}

	#[rstest]
	fn test_article_with_everything(ds: DesignSystem) {
		let html = ds
			.page(
				ARTICLE_LAYOUT,
				json!({ "path": "/guides/install" }),
				PageInput::new(
					Slots::new()
						.slot("title", |_| "Install")
						.slot("body", |ctx| {
							callout().render(
								ctx,
								&CalloutProps {
									tone: Tone::Warning,
									title: "Heads up".to_string(),
									body: "Needs Rust".to_string(),
								},
							)
						})
						.slot("sidebar", |_| link_list([("/guides", "Guides")]))
						.slot("footer", |_| "MIT"),
				)
				.with_head(crate::HeadSlots::new().title("Install guide")),
			)
			.unwrap();

		assert!(html.contains("<title>Install guide</title>"));
		assert!(html.contains(&format!("<style>{RESET_CSS}</style>")));
		assert!(html.contains(r#"<nav aria-label="Breadcrumb" class="breadcrumbs"><ol><li><a href="/">Home</a></li><li><span aria-current="page">Guides</span></li></ol></nav>"#));
		assert!(html.contains(r#"<aside class="sidebar"><nav><ul><li><a href="/guides">Guides</a></li></ul></nav></aside>"#));
		assert!(html.contains(r#"<aside class="callout" data-tone="warning" role="note"><strong>Heads up</strong><p>Needs Rust</p></aside>"#));
		assert!(html.contains("<small>MIT</small>"));
	}

	#[rstest]
	fn test_card_with_link() {
		let node = card().render(
			&RenderContext::detached(),
			&CardProps {
				title: "Docs".to_string(),
				body: "Read them".to_string(),
				href: Some("/docs".to_string()),
			},
		);
		assert_eq!(
			node.render_to_string(),
			r#"<section class="card"><h2><a href="/docs">Docs</a></h2><p>Read them</p></section>"#
		);
	}

	#[rstest]
	fn test_head_rejects_scripts(ds: DesignSystem) {
		let err = ds
			.page(
				ARTICLE_LAYOUT,
				Value::Null,
				PageInput::new(Slots::new().slot("title", |_| "t").slot("body", |_| "b"))
					.with_head(crate::HeadSlots::new().scripts([])),
			)
			.unwrap_err();
		assert!(matches!(err, crate::DesignError::UnknownSlot { ref slot, .. } if slot == "scripts"));
	}
}
