//! The starter design system: one region, one layout, PicoCSS.

use std::sync::Arc;

use trellis_html::{attrs, div, h1, main, section};

use crate::asset::UaDependency;
use crate::error::Result;
use crate::layout::define_layout;
use crate::naming::{KindPrefixNaming, NamingKind};
use crate::region::define_region;
use crate::slot::define_slot_spec;
use crate::system::DesignSystem;

/// Design system name.
pub const NAME: &str = "starter";

/// The only layout.
pub const LAYOUT: &str = "Starter";

/// The only region.
pub const MAIN_REGION: &str = "Main";

/// PicoCSS, served straight from the CDN.
pub const PICO_CSS: &str = "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.min.css";

const REQUIRED: &[&str] = &["title", "content"];
const OPTIONAL: &[&str] = &["lead"];

/// Builds the starter design system.
///
/// ```
/// use serde_json::Value;
/// use trellis_design::Slots;
/// use trellis_design::systems::{paragraph, starter};
///
/// let ds = starter::design_system().unwrap();
/// let html = ds
///     .page(
///         starter::LAYOUT,
///         Value::Null,
///         Slots::new()
///             .slot("title", |_| "Hi")
///             .slot("content", |ctx| paragraph().render(ctx, "Body")),
///     )
///     .unwrap();
/// assert!(html.contains(r#"<main class="region-main"><h1>Hi</h1><section class="region-content">"#));
/// ```
pub fn design_system() -> Result<DesignSystem> {
	let main_region = define_region(MAIN_REGION, define_slot_spec(REQUIRED, OPTIONAL)?, |ctx, slots| {
		Ok(main(
			attrs!["class" => ctx.class_name("main", NamingKind::Region)],
			(
				h1((), slots.required("title")?),
				slots.optional("lead")?.map(|lead| {
					div(attrs!["class" => ctx.class_name("lead", NamingKind::Region)], lead)
				}),
				section(
					attrs!["class" => ctx.class_name("content", NamingKind::Region)],
					slots.required("content")?,
				),
			),
		))
	});

	let layout = define_layout(LAYOUT, define_slot_spec(REQUIRED, OPTIONAL)?, |ctx, api, slots| {
		Ok(section(
			attrs!["class" => ctx.class_name("shell", NamingKind::Layout)],
			api.region(MAIN_REGION, slots.forward(&["title", "lead", "content"])?)?,
		))
	});

	DesignSystem::builder(NAME, Arc::new(KindPrefixNaming))
		.ua_dependency(UaDependency::stylesheet(PICO_CSS, "npm:@picocss/pico@2"))
		.region(main_region)
		.layout(layout)
		.build()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::systems::paragraph;
	use crate::{DesignError, Slots};
	use rstest::rstest;
	use serde_json::Value;

	#[rstest]
	fn test_registry_contents() {
		let ds = design_system().unwrap();
		assert_eq!(ds.name(), NAME);
		assert_eq!(ds.layout_names().collect::<Vec<_>>(), vec![LAYOUT]);
		assert_eq!(ds.region_names().collect::<Vec<_>>(), vec![MAIN_REGION]);
		assert_eq!(ds.ua_dependencies().len(), 1);
	}

	#[rstest]
	fn test_minimized_page() {
		let ds = design_system().unwrap();
		let html = ds
			.page(
				LAYOUT,
				Value::Null,
				Slots::new()
					.slot("title", |_| "T")
					.slot("lead", |ctx| paragraph().render(ctx, "L"))
					.slot("content", |ctx| paragraph().render(ctx, "C")),
			)
			.unwrap();
		assert_eq!(
			html,
			concat!(
				"<!doctype html><html><head>",
				r#"<link href="https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.min.css" rel="stylesheet">"#,
				"</head><body>",
				r#"<section class="layout-shell"><main class="region-main"><h1>T</h1>"#,
				r#"<div class="region-lead"><p>L</p></div>"#,
				r#"<section class="region-content"><p>C</p></section>"#,
				"</main></section></body></html>"
			)
		);
	}

	#[rstest]
	fn test_missing_content_fails() {
		let ds = design_system().unwrap();
		let err = ds
			.page(LAYOUT, Value::Null, Slots::new().slot("title", |_| "T"))
			.unwrap_err();
		assert!(matches!(
			err,
			DesignError::MissingRequiredSlot { ref slot, .. } if slot == "content"
		));
	}
}
