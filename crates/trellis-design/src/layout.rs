//! Layouts: page skeletons that compose regions.

use std::fmt;
use std::sync::Arc;

use trellis_html::{HtmlNode, div};

use crate::context::RenderContext;
use crate::error::{DesignError, Result};
use crate::naming::NamingKind;
use crate::policy::WrapperPolicy;
use crate::slot::{ResolvedSlots, SlotSpec, Slots};
use crate::system::DesignSystem;

type LayoutRenderFn = Arc<
	dyn Fn(&RenderContext, &RegionApi<'_>, &ResolvedSlots<'_>) -> Result<HtmlNode> + Send + Sync,
>;

/// A named layout definition.
#[derive(Clone)]
pub struct Layout {
	name: String,
	slots: SlotSpec,
	head_slots: Option<SlotSpec>,
	render: LayoutRenderFn,
}

/// Defines a layout.
pub fn define_layout<F>(name: impl Into<String>, slots: SlotSpec, render: F) -> Layout
where
	F: Fn(&RenderContext, &RegionApi<'_>, &ResolvedSlots<'_>) -> Result<HtmlNode>
		+ Send
		+ Sync
		+ 'static,
{
	Layout {
		name: name.into(),
		slots,
		head_slots: None,
		render: Arc::new(render),
	}
}

impl Layout {
	/// Declares which head slots callers may supply. Names must be
	/// [`HeadSlotKey`](crate::head::HeadSlotKey) names; the design system
	/// checks them at build time.
	pub fn with_head_slots(mut self, spec: SlotSpec) -> Self {
		self.head_slots = Some(spec);
		self
	}

	/// Layout name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Declared body slots.
	pub fn slots(&self) -> &SlotSpec {
		&self.slots
	}

	/// Declared head slots, if any.
	pub fn head_slots(&self) -> Option<&SlotSpec> {
		self.head_slots.as_ref()
	}

	pub(crate) fn render(
		&self,
		ctx: &RenderContext,
		api: &RegionApi<'_>,
		slots: &ResolvedSlots<'_>,
	) -> Result<HtmlNode> {
		(self.render)(ctx, api, slots)
	}
}

impl fmt::Debug for Layout {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Layout")
			.field("name", &self.name)
			.field("slots", &self.slots)
			.field("head_slots", &self.head_slots)
			.finish_non_exhaustive()
	}
}

/// Region lookup handed to layout render functions.
#[derive(Debug, Clone, Copy)]
pub struct RegionApi<'s> {
	system: &'s DesignSystem,
	ctx: &'s RenderContext,
}

impl<'s> RegionApi<'s> {
	pub(crate) fn new(system: &'s DesignSystem, ctx: &'s RenderContext) -> Self {
		Self { system, ctx }
	}

	/// Looks up the region by name, validates `slots` against it and renders
	/// it, applying the design system's wrapper policy.
	///
	/// Fails with [`DesignError::UnknownRegion`] when `name` is not
	/// registered in the same design system.
	pub fn region(&self, name: &str, slots: Slots<'_>) -> Result<HtmlNode> {
		let region = self
			.system
			.region(name)
			.ok_or_else(|| DesignError::UnknownRegion(name.to_string()))?;

		tracing::debug!(region = name, slots = slots.len(), "rendering region");
		let policies = self.system.policies();
		let node = region.invoke(self.ctx, slots, policies.unknown_slots)?;

		Ok(match policies.wrapper {
			WrapperPolicy::Bare => node,
			WrapperPolicy::Annotate => self.annotate(region.name(), node),
		})
	}

	fn annotate(&self, region: &str, node: HtmlNode) -> HtmlNode {
		let attr = self.ctx.data_attribute_name("region", NamingKind::Region);
		match node {
			HtmlNode::Element(el) => HtmlNode::Element(el.with_attr(attr, region.to_string())),
			other => div([(attr, region.to_string())], other),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::SlotOwner;
	use crate::naming::PrefixNaming;
	use crate::policy::Policies;
	use crate::region::define_region;
	use crate::slot::define_slot_spec;
	use rstest::rstest;
	use serde_json::Value;
	use trellis_html::{main, p};

	fn system(policies: Policies) -> DesignSystem {
		DesignSystem::builder("test", Arc::new(PrefixNaming::new("t")))
			.policies(policies)
			.region(define_region(
				"Body",
				define_slot_spec(&["text"], &[]).unwrap(),
				|_, slots| Ok(main((), slots.required("text")?)),
			))
			.region(define_region("Bare", SlotSpec::empty(), |_, _| {
				Ok(HtmlNode::text("plain"))
			}))
			.build()
			.unwrap()
	}

	#[rstest]
	fn test_unknown_region_fails() {
		let ds = system(Policies::default());
		let ctx = ds.context(Value::Null);
		let api = RegionApi::new(&ds, &ctx);
		let err = api.region("DoesNotExist", Slots::new()).unwrap_err();
		assert!(matches!(err, DesignError::UnknownRegion(name) if name == "DoesNotExist"));
	}

	#[rstest]
	fn test_region_slots_are_validated() {
		let ds = system(Policies::default());
		let ctx = ds.context(Value::Null);
		let api = RegionApi::new(&ds, &ctx);
		let err = api.region("Body", Slots::new()).unwrap_err();
		assert!(matches!(
			err,
			DesignError::MissingRequiredSlot { owner: SlotOwner::Region(ref r), .. } if r == "Body"
		));
	}

	#[rstest]
	fn test_annotate_tags_root_element() {
		let ds = system(Policies::default().with_wrapper(WrapperPolicy::Annotate));
		let ctx = ds.context(Value::Null);
		let api = RegionApi::new(&ds, &ctx);
		let node = api
			.region("Body", Slots::new().slot("text", |_| p((), "x")))
			.unwrap();
		assert_eq!(
			node.render_to_string(),
			r#"<main data-t-region="Body"><p>x</p></main>"#
		);

		let wrapped = api.region("Bare", Slots::new()).unwrap();
		assert_eq!(
			wrapped.render_to_string(),
			r#"<div data-t-region="Bare">plain</div>"#
		);
	}

	#[rstest]
	fn test_bare_policy_leaves_output_untouched() {
		let ds = system(Policies::default());
		let ctx = ds.context(Value::Null);
		let api = RegionApi::new(&ds, &ctx);
		let node = api.region("Bare", Slots::new()).unwrap();
		assert_eq!(node.render_to_string(), "plain");
	}
}
