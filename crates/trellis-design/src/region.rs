//! Regions: named structural subtrees consuming a slot set.

use std::fmt;
use std::sync::Arc;

use trellis_html::HtmlNode;

use crate::context::RenderContext;
use crate::error::{Result, SlotOwner};
use crate::policy::UnknownSlotPolicy;
use crate::slot::{ResolvedSlots, SlotSpec, Slots};

type RegionRenderFn =
	Arc<dyn Fn(&RenderContext, &ResolvedSlots<'_>) -> Result<HtmlNode> + Send + Sync>;

/// A named region definition.
#[derive(Clone)]
pub struct Region {
	name: String,
	slots: SlotSpec,
	render: RegionRenderFn,
}

/// Defines a region.
///
/// ```
/// use trellis_design::region::define_region;
/// use trellis_design::slot::define_slot_spec;
/// use trellis_html::aside;
///
/// let sidebar = define_region(
///     "Sidebar",
///     define_slot_spec(&["links"], &[]).unwrap(),
///     |_ctx, slots| Ok(aside((), slots.required("links")?)),
/// );
/// assert_eq!(sidebar.name(), "Sidebar");
/// ```
pub fn define_region<F>(name: impl Into<String>, slots: SlotSpec, render: F) -> Region
where
	F: Fn(&RenderContext, &ResolvedSlots<'_>) -> Result<HtmlNode> + Send + Sync + 'static,
{
	Region {
		name: name.into(),
		slots,
		render: Arc::new(render),
	}
}

impl Region {
	/// Region name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Declared slots.
	pub fn slots(&self) -> &SlotSpec {
		&self.slots
	}

	/// Validates `slots` and renders the region.
	pub fn invoke<'a>(
		&'a self,
		ctx: &'a RenderContext,
		slots: Slots<'a>,
		policy: UnknownSlotPolicy,
	) -> Result<HtmlNode> {
		let owner = SlotOwner::Region(self.name.clone());
		self.slots.validate(slots.names(), &owner, policy)?;
		let resolved = ResolvedSlots::new(&self.slots, owner, ctx, slots);
		(self.render)(ctx, &resolved)
	}
}

impl fmt::Debug for Region {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Region")
			.field("name", &self.name)
			.field("slots", &self.slots)
			.finish_non_exhaustive()
	}
}
