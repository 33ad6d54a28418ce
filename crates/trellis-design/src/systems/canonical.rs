//! The canonical design system.
//!
//! Every class and data attribute is namespaced under `cds`, every region
//! root carries `data-cds-region`, and the head links a cached stylesheet
//! plus the module script that enhances those elements on the client.

use std::sync::Arc;

use trellis_html::{attrs, div, footer, h1, header, main, nav};

use crate::asset::{CacheDirectives, UaDependency};
use crate::error::Result;
use crate::layout::define_layout;
use crate::naming::{NamingKind, PrefixNaming};
use crate::policy::{Policies, WrapperPolicy};
use crate::region::define_region;
use crate::slot::define_slot_spec;
use crate::system::DesignSystem;

/// Design system name.
pub const NAME: &str = "canonical";

/// Naming prefix.
pub const PREFIX: &str = "cds";

/// The only layout.
pub const LAYOUT: &str = "Canonical";

/// Stylesheet mount point.
pub const STYLESHEET: &str = "/static/cds/canonical.css";

/// Client module mount point.
pub const MODULE: &str = "/static/cds/canonical.js";

/// Head assets, in emission order.
pub fn ua_dependencies() -> Vec<UaDependency> {
	vec![
		UaDependency::stylesheet(STYLESHEET, "packages/canonical/dist/canonical.css").with_cache(
			CacheDirectives::max_age(31_536_000)
				.immutable()
				.with_etag("\"cds-1\""),
		),
		UaDependency::module(MODULE, "packages/canonical/src/index.ts")
			.with_cache(CacheDirectives::max_age(3_600)),
	]
}

/// Builds the canonical design system.
pub fn design_system() -> Result<DesignSystem> {
	let masthead = define_region("Masthead", define_slot_spec(&["title"], &["nav"])?, |ctx, slots| {
		Ok(header(
			attrs!["class" => ctx.class_name("masthead", NamingKind::Region)],
			(
				h1((), slots.required("title")?),
				slots
					.optional("nav")?
					.map(|links| nav(attrs!["aria-label" => "Primary"], links)),
			),
		))
	});

	let body = define_region("Body", define_slot_spec(&["content"], &[])?, |ctx, slots| {
		Ok(main(
			attrs![
				"class" => ctx.class_name("body", NamingKind::Region),
				"id" => ctx.element_id("main", NamingKind::Region),
			],
			slots.required("content")?,
		))
	});

	let colophon = define_region("Colophon", define_slot_spec(&[], &["credits"])?, |ctx, slots| {
		Ok(footer(
			attrs!["class" => ctx.class_name("colophon", NamingKind::Region)],
			slots.optional("credits")?,
		))
	});

	let layout = define_layout(
		LAYOUT,
		define_slot_spec(&["title", "content"], &["nav", "credits"])?,
		|ctx, api, slots| {
			Ok(div(
				attrs!["class" => ctx.class_name("canonical", NamingKind::Layout)],
				(
					api.region("Masthead", slots.forward(&["title", "nav"])?)?,
					api.region("Body", slots.forward(&["content"])?)?,
					api.region("Colophon", slots.forward(&["credits"])?)?,
				),
			))
		},
	)
	.with_head_slots(define_slot_spec(&["title"], &["meta", "links", "scripts"])?);

	DesignSystem::builder(NAME, Arc::new(PrefixNaming::new(PREFIX)))
		.policies(Policies::default().with_wrapper(WrapperPolicy::Annotate))
		.ua_dependencies(ua_dependencies())
		.region(masthead)
		.region(body)
		.region(colophon)
		.layout(layout)
		.build()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::head::HeadSlots;
	use crate::{DesignError, PageInput, Slots};
	use rstest::{fixture, rstest};
	use serde_json::Value;
	use trellis_html::p;

	#[fixture]
	fn ds() -> DesignSystem {
		design_system().unwrap()
	}

	fn slots<'a>() -> Slots<'a> {
		Slots::new()
			.slot("title", |_| "Canon")
			.slot("content", |_| p((), "Body text"))
	}

	#[rstest]
	fn test_title_head_slot_is_required(ds: DesignSystem) {
		let err = ds.page(LAYOUT, Value::Null, slots()).unwrap_err();
		assert!(matches!(
			err,
			DesignError::MissingRequiredSlot { ref slot, .. } if slot == "title"
		));
	}

	#[rstest]
	fn test_head_assets_with_cache_annotations(ds: DesignSystem) {
		let html = ds
			.page(
				LAYOUT,
				Value::Null,
				PageInput::new(slots()).with_head(HeadSlots::new().title("Canon")),
			)
			.unwrap();
		assert!(html.contains(concat!(
			"<head>",
			r#"<link data-cds-cache-control="public, max-age=31536000, immutable" data-cds-etag="&quot;cds-1&quot;" href="/static/cds/canonical.css" rel="stylesheet">"#,
			r#"<script data-cds-cache-control="public, max-age=3600" src="/static/cds/canonical.js" type="module"></script>"#,
			"<title>Canon</title></head>"
		)));
	}

	#[rstest]
	fn test_regions_are_annotated(ds: DesignSystem) {
		let html = ds
			.page(
				LAYOUT,
				Value::Null,
				PageInput::new(slots().slot("credits", |_| "Made with trellis"))
					.with_head(HeadSlots::new().title("Canon")),
			)
			.unwrap();
		assert!(html.contains(concat!(
			r#"<body><div class="cds-layout-canonical">"#,
			r#"<header class="cds-region-masthead" data-cds-region="Masthead"><h1>Canon</h1></header>"#,
			r#"<main class="cds-region-body" data-cds-region="Body" id="cds-region-main"><p>Body text</p></main>"#,
			r#"<footer class="cds-region-colophon" data-cds-region="Colophon">Made with trellis</footer>"#,
			"</div></body>"
		)));
	}
}
