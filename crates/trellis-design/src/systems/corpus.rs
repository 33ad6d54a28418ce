//! The corpus design system: a long-form reader with margin notes.
//!
//! Content for this system is often generated, so unknown slots are
//! dropped with a warning instead of failing the page.

use std::sync::Arc;

use trellis_html::{StyleRule, aside, attrs, div, h1, header, li, main, ol, p, sup};

use crate::component::{Component, ComponentStylesheet, define_component};
use crate::context::RenderContext;
use crate::error::Result;
use crate::layout::define_layout;
use crate::naming::{NamingKind, PrefixNaming};
use crate::policy::{Policies, UnknownSlotPolicy};
use crate::region::define_region;
use crate::slot::define_slot_spec;
use crate::system::DesignSystem;

/// Design system name.
pub const NAME: &str = "corpus";

/// The reader layout.
pub const READER_LAYOUT: &str = "Reader";

/// A numbered margin note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Footnote {
	/// Note number as shown in the text.
	pub number: usize,
	/// Note text.
	pub text: String,
}

/// Renders one margin note.
pub fn footnote() -> Component<Footnote> {
	define_component("footnote", |ctx: &RenderContext, note: &Footnote| {
		li(
			attrs![
				"class" => ctx.class_name("footnote", NamingKind::Component),
				"id" => ctx.element_id(&format!("note-{}", note.number), NamingKind::Component),
			],
			(sup((), note.number), " ", note.text.clone()),
		)
	})
	.with_stylesheet(ComponentStylesheet::new([StyleRule::new(
		".corpus-component-footnote",
		[("fontSize", "0.85em"), ("color", "#555")],
	)]))
}

/// Renders a list of notes with [`footnote`], for the `notes` slot.
pub fn footnotes(ctx: &RenderContext, notes: &[Footnote]) -> trellis_html::HtmlNode {
	let note = footnote();
	ol((), notes.iter().map(|n| note.render(ctx, n)).collect::<Vec<_>>())
}

/// Builds the corpus design system.
pub fn design_system() -> Result<DesignSystem> {
	let masthead = define_region("Masthead", define_slot_spec(&["title"], &[])?, |ctx, slots| {
		Ok(header(
			attrs!["class" => ctx.class_name("masthead", NamingKind::Region)],
			h1((), slots.required("title")?),
		))
	});

	let body = define_region("Body", define_slot_spec(&["text"], &[])?, |ctx, slots| {
		Ok(main(
			attrs!["class" => ctx.class_name("body", NamingKind::Region)],
			slots.required("text")?,
		))
	});

	let marginalia = define_region("Marginalia", define_slot_spec(&[], &["notes"])?, |ctx, slots| {
		Ok(match slots.optional("notes")? {
			Some(notes) => aside(
				attrs!["class" => ctx.class_name("marginalia", NamingKind::Region)],
				notes,
			),
			None => p(
				attrs!["class" => ctx.class_name("marginalia-empty", NamingKind::Region)],
				"No notes.",
			),
		})
	});

	let reader = define_layout(
		READER_LAYOUT,
		define_slot_spec(&["title", "text"], &["notes"])?,
		|ctx, api, slots| {
			Ok(div(
				attrs!["class" => ctx.class_name("reader", NamingKind::Layout)],
				(
					api.region("Masthead", slots.forward(&["title"])?)?,
					api.region("Body", slots.forward(&["text"])?)?,
					api.region("Marginalia", slots.forward(&["notes"])?)?,
				),
			))
		},
	);

	DesignSystem::builder(NAME, Arc::new(PrefixNaming::new(NAME)))
		.policies(Policies::default().with_unknown_slots(UnknownSlotPolicy::Ignore))
		.component(&footnote())
		.region(masthead)
		.region(body)
		.region(marginalia)
		.layout(reader)
		.build()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::Slots;
	use rstest::rstest;
	use serde_json::Value;

	#[rstest]
	fn test_reader_with_notes_and_stray_slot() {
		let ds = design_system().unwrap();
		let notes = vec![Footnote {
			number: 1,
			text: "First & only.".to_string(),
		}];
		let html = ds
			.page(
				READER_LAYOUT,
				Value::Null,
				Slots::new()
					.slot("title", |_| "Essay")
					.slot("text", |_| p((), "Words"))
					.slot("notes", |ctx| footnotes(ctx, &notes))
					.slot("epigraph", |_| "dropped"),
			)
			.unwrap();

		assert!(!html.contains("dropped"));
		assert!(html.contains(
			"<style>.corpus-component-footnote { color: #555; font-size: 0.85em; }</style>"
		));
		assert!(html.contains(concat!(
			r#"<aside class="corpus-region-marginalia"><ol>"#,
			r#"<li class="corpus-component-footnote" id="corpus-component-note-1"><sup>1</sup> First &amp; only.</li>"#,
			"</ol></aside>"
		)));
	}

	#[rstest]
	fn test_reader_without_notes() {
		let ds = design_system().unwrap();
		let html = ds
			.page(
				READER_LAYOUT,
				Value::Null,
				Slots::new()
					.slot("title", |_| "Essay")
					.slot("text", |_| "Words"),
			)
			.unwrap();
		assert!(html.contains(concat!(
			r#"<div class="corpus-layout-reader">"#,
			r#"<header class="corpus-region-masthead"><h1>Essay</h1></header>"#,
			r#"<main class="corpus-region-body">Words</main>"#,
			r#"<p class="corpus-region-marginalia-empty">No notes.</p></div>"#
		)));
	}

	#[rstest]
	fn test_missing_required_still_fails() {
		let ds = design_system().unwrap();
		let err = ds
			.page(READER_LAYOUT, Value::Null, Slots::new().slot("title", |_| "Essay"))
			.unwrap_err();
		assert!(matches!(err, crate::DesignError::MissingRequiredSlot { .. }));
	}
}
