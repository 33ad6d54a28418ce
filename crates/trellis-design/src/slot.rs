//! Slots: named builders a region or layout requires or accepts.
//!
//! A [`SlotSpec`] declares the names; callers supply builders through
//! [`Slots`]; render functions read them back through [`ResolvedSlots`].
//!
//! ```
//! use trellis_design::slot::{ResolvedSlots, Slots, define_slot_spec};
//! use trellis_design::context::RenderContext;
//! use trellis_design::error::SlotOwner;
//! use trellis_design::policy::UnknownSlotPolicy;
//! use trellis_html::{h1, p};
//!
//! let spec = define_slot_spec(&["title"], &["lead"]).unwrap();
//! let slots = Slots::new()
//!     .slot("title", |_| "Hello")
//!     .slot("lead", |_| p((), "Intro"));
//!
//! let owner = SlotOwner::Region("Main".to_string());
//! spec.validate(slots.names(), &owner, UnknownSlotPolicy::Throw).unwrap();
//!
//! let ctx = RenderContext::detached();
//! let resolved = ResolvedSlots::new(&spec, owner, &ctx, slots);
//! let title = h1((), resolved.required("title").unwrap());
//! assert_eq!(title.render_to_string(), "<h1>Hello</h1>");
//! ```

use std::borrow::Cow;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;

use trellis_html::{HtmlNode, IntoChildren};

use crate::context::RenderContext;
use crate::error::{DesignError, Result, SlotOwner};
use crate::policy::UnknownSlotPolicy;

/// A slot name.
pub type SlotName = Cow<'static, str>;

/// Declared required and optional slot names, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotSpec {
	required: Vec<SlotName>,
	optional: Vec<SlotName>,
}

/// Shorthand for [`SlotSpec::new`] over static names.
pub fn define_slot_spec(required: &[&'static str], optional: &[&'static str]) -> Result<SlotSpec> {
	SlotSpec::new(required.iter().copied(), optional.iter().copied())
}

impl SlotSpec {
	/// Creates a spec. Fails with [`DesignError::DuplicateSlot`] when a name
	/// repeats within or across the two sets.
	pub fn new<R, O>(required: R, optional: O) -> Result<Self>
	where
		R: IntoIterator,
		R::Item: Into<SlotName>,
		O: IntoIterator,
		O::Item: Into<SlotName>,
	{
		let required: Vec<SlotName> = required.into_iter().map(Into::into).collect();
		let optional: Vec<SlotName> = optional.into_iter().map(Into::into).collect();

		let mut seen = std::collections::BTreeSet::new();
		for name in required.iter().chain(optional.iter()) {
			if !seen.insert(&**name) {
				return Err(DesignError::DuplicateSlot {
					slot: name.to_string(),
				});
			}
		}

		Ok(Self { required, optional })
	}

	/// A spec that declares nothing.
	pub fn empty() -> Self {
		Self::default()
	}

	/// Required names in declaration order.
	pub fn required(&self) -> &[SlotName] {
		&self.required
	}

	/// Optional names in declaration order.
	pub fn optional(&self) -> &[SlotName] {
		&self.optional
	}

	/// Returns whether `name` is required.
	pub fn is_required(&self, name: &str) -> bool {
		self.required.iter().any(|n| n == name)
	}

	/// Returns whether `name` is required or optional.
	pub fn is_declared(&self, name: &str) -> bool {
		self.is_required(name) || self.optional.iter().any(|n| n == name)
	}

	/// All declared names, required first.
	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.required
			.iter()
			.chain(self.optional.iter())
			.map(|name| &**name)
	}

	/// Checks supplied names against the spec.
	///
	/// The first missing required slot (in declaration order) is reported
	/// before any unknown slot. Unknown slots fail under
	/// [`UnknownSlotPolicy::Throw`] and are logged under
	/// [`UnknownSlotPolicy::Ignore`].
	pub fn validate<'n, I>(&self, supplied: I, owner: &SlotOwner, policy: UnknownSlotPolicy) -> Result<()>
	where
		I: IntoIterator<Item = &'n str>,
	{
		let supplied: Vec<&str> = supplied.into_iter().collect();

		if let Some(missing) = self
			.required
			.iter()
			.find(|name| !supplied.iter().any(|s| *s == **name))
		{
			return Err(DesignError::MissingRequiredSlot {
				slot: missing.to_string(),
				owner: owner.clone(),
			});
		}

		for name in supplied {
			if self.is_declared(name) {
				continue;
			}
			match policy {
				UnknownSlotPolicy::Throw => {
					return Err(DesignError::UnknownSlot {
						slot: name.to_string(),
						owner: owner.clone(),
					});
				}
				UnknownSlotPolicy::Ignore => {
					tracing::warn!(slot = name, %owner, "ignoring unknown slot");
				}
			}
		}

		Ok(())
	}
}

type SlotBuilder<'a> = Box<dyn FnOnce(&RenderContext) -> Result<HtmlNode> + 'a>;

/// Slot builders supplied by a caller, keyed by name.
///
/// Supplying the same name twice keeps the last builder.
#[derive(Default)]
pub struct Slots<'a> {
	builders: BTreeMap<SlotName, SlotBuilder<'a>>,
}

impl<'a> Slots<'a> {
	/// An empty slot map.
	pub fn new() -> Self {
		Self {
			builders: BTreeMap::new(),
		}
	}

	/// Adds an infallible builder returning any children.
	pub fn slot<F, C>(self, name: impl Into<SlotName>, build: F) -> Self
	where
		F: FnOnce(&RenderContext) -> C + 'a,
		C: IntoChildren,
	{
		self.try_slot(name, move |ctx| Ok(single_node(build(ctx))))
	}

	/// Adds a builder that can fail.
	pub fn try_slot<F>(mut self, name: impl Into<SlotName>, build: F) -> Self
	where
		F: FnOnce(&RenderContext) -> Result<HtmlNode> + 'a,
	{
		self.builders.insert(name.into(), Box::new(build));
		self
	}

	/// Supplied names in sorted order.
	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.builders.keys().map(|name| &**name)
	}

	/// Returns whether `name` was supplied.
	pub fn contains(&self, name: &str) -> bool {
		self.builders.contains_key(name)
	}

	/// Number of supplied slots.
	pub fn len(&self) -> usize {
		self.builders.len()
	}

	/// Returns `true` when nothing was supplied.
	pub fn is_empty(&self) -> bool {
		self.builders.is_empty()
	}
}

impl fmt::Debug for Slots<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_set().entries(self.names()).finish()
	}
}

fn single_node(children: impl IntoChildren) -> HtmlNode {
	let mut nodes = children.into_children();
	if nodes.len() == 1 {
		nodes.remove(0)
	} else {
		HtmlNode::Fragment(nodes)
	}
}

enum SlotState<'a> {
	Pending(SlotBuilder<'a>),
	Ready(HtmlNode),
}

/// Validated slots handed to a render function.
///
/// Each builder runs at most once, on first read, with the shared render
/// context. Later reads return a clone of the same node.
pub struct ResolvedSlots<'a> {
	spec: &'a SlotSpec,
	owner: SlotOwner,
	ctx: &'a RenderContext,
	states: RefCell<BTreeMap<SlotName, SlotState<'a>>>,
}

impl<'a> ResolvedSlots<'a> {
	/// Wraps already validated slots. Undeclared names are dropped.
	pub fn new(spec: &'a SlotSpec, owner: SlotOwner, ctx: &'a RenderContext, slots: Slots<'a>) -> Self {
		let states = slots
			.builders
			.into_iter()
			.filter(|(name, _)| spec.is_declared(name))
			.map(|(name, build)| (name, SlotState::Pending(build)))
			.collect();
		Self {
			spec,
			owner,
			ctx,
			states: RefCell::new(states),
		}
	}

	/// The render context builders are invoked with.
	pub fn context(&self) -> &'a RenderContext {
		self.ctx
	}

	/// Who these slots belong to.
	pub fn owner(&self) -> &SlotOwner {
		&self.owner
	}

	/// Returns whether a declared slot was supplied.
	pub fn has(&self, name: &str) -> bool {
		self.states.borrow().contains_key(name)
	}

	/// Renders a slot that must be present.
	pub fn required(&self, name: &str) -> Result<HtmlNode> {
		self.resolve(name)?
			.ok_or_else(|| DesignError::MissingRequiredSlot {
				slot: name.to_string(),
				owner: self.owner.clone(),
			})
	}

	/// Renders a slot if it was supplied.
	pub fn optional(&self, name: &str) -> Result<Option<HtmlNode>> {
		self.resolve(name)
	}

	/// Moves the named slots into a new map, typically to pass a layout's
	/// slots on to a region. Names that were not supplied are skipped.
	/// Forwarded slots are no longer readable here.
	pub fn forward(&self, names: &[&'static str]) -> Result<Slots<'a>> {
		let mut forwarded = Slots::new();
		let mut states = self.states.borrow_mut();
		for name in names {
			self.check_declared(name)?;
			match states.remove_entry(*name) {
				Some((key, SlotState::Pending(build))) => {
					forwarded.builders.insert(key, build);
				}
				Some((key, SlotState::Ready(node))) => {
					forwarded.builders.insert(key, Box::new(move |_: &RenderContext| Ok(node)));
				}
				None => {}
			}
		}
		Ok(forwarded)
	}

	fn check_declared(&self, name: &str) -> Result<()> {
		if self.spec.is_declared(name) {
			Ok(())
		} else {
			Err(DesignError::UnknownSlot {
				slot: name.to_string(),
				owner: self.owner.clone(),
			})
		}
	}

	fn resolve(&self, name: &str) -> Result<Option<HtmlNode>> {
		self.check_declared(name)?;

		// Release the borrow before running the builder
		let entry = self.states.borrow_mut().remove_entry(name);
		let (key, node) = match entry {
			None => return Ok(None),
			Some((key, SlotState::Ready(node))) => (key, node),
			Some((key, SlotState::Pending(build))) => (key, build(self.ctx)?),
		};
		self.states
			.borrow_mut()
			.insert(key, SlotState::Ready(node.clone()));
		Ok(Some(node))
	}
}

impl fmt::Debug for ResolvedSlots<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ResolvedSlots")
			.field("owner", &self.owner)
			.field("supplied", &self.states.borrow().keys().collect::<Vec<_>>())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::{fixture, rstest};
	use std::cell::{Cell, RefCell};
	use trellis_html::{div, p};

	#[fixture]
	fn spec() -> SlotSpec {
		define_slot_spec(&["a", "b"], &["c"]).unwrap()
	}

	#[fixture]
	fn owner() -> SlotOwner {
		SlotOwner::Region("R".to_string())
	}

	#[rstest]
	fn test_duplicate_slot_names_rejected() {
		let err = define_slot_spec(&["a"], &["a"]).unwrap_err();
		assert!(matches!(err, DesignError::DuplicateSlot { slot } if slot == "a"));

		let err = define_slot_spec(&["x", "x"], &[]).unwrap_err();
		assert!(matches!(err, DesignError::DuplicateSlot { .. }));
	}

	#[rstest]
	fn test_missing_required_reported_in_declaration_order(spec: SlotSpec, owner: SlotOwner) {
		let err = spec
			.validate(["a"], &owner, UnknownSlotPolicy::Throw)
			.unwrap_err();
		assert!(matches!(
			err,
			DesignError::MissingRequiredSlot { ref slot, .. } if slot == "b"
		));

		let err = spec.validate([], &owner, UnknownSlotPolicy::Throw).unwrap_err();
		assert!(matches!(
			err,
			DesignError::MissingRequiredSlot { ref slot, .. } if slot == "a"
		));
	}

	#[rstest]
	fn test_missing_wins_over_unknown(spec: SlotSpec, owner: SlotOwner) {
		let err = spec
			.validate(["a", "zzz"], &owner, UnknownSlotPolicy::Throw)
			.unwrap_err();
		assert!(matches!(err, DesignError::MissingRequiredSlot { .. }));
	}

	#[rstest]
	#[case(UnknownSlotPolicy::Throw, true)]
	#[case(UnknownSlotPolicy::Ignore, false)]
	fn test_unknown_slot_follows_policy(
		spec: SlotSpec,
		owner: SlotOwner,
		#[case] policy: UnknownSlotPolicy,
		#[case] fails: bool,
	) {
		let result = spec.validate(["a", "b", "extra"], &owner, policy);
		assert_eq!(result.is_err(), fails);
		if let Err(err) = result {
			assert!(matches!(
				err,
				DesignError::UnknownSlot { ref slot, owner: SlotOwner::Region(ref r) }
					if slot == "extra" && r == "R"
			));
		}
	}

	#[rstest]
	fn test_builder_runs_once(spec: SlotSpec, owner: SlotOwner) {
		let calls = Cell::new(0);
		let slots = Slots::new()
			.slot("a", |_| {
				calls.set(calls.get() + 1);
				"A"
			})
			.slot("b", |_| "B");
		let ctx = RenderContext::detached();
		let resolved = ResolvedSlots::new(&spec, owner, &ctx, slots);

		let first = resolved.required("a").unwrap();
		let second = resolved.required("a").unwrap();
		assert_eq!(first, second);
		assert_eq!(calls.get(), 1);
	}

	#[rstest]
	fn test_builders_run_in_read_order_not_name_order() {
		let spec = define_slot_spec(&["a", "z"], &[]).unwrap();
		let order = RefCell::new(Vec::new());
		let slots = Slots::new()
			.slot("z", |_| {
				order.borrow_mut().push("z");
				"Z"
			})
			.slot("a", |_| {
				order.borrow_mut().push("a");
				"A"
			});
		let ctx = RenderContext::detached();
		let resolved = ResolvedSlots::new(&spec, SlotOwner::Layout("L".to_string()), &ctx, slots);
		assert!(order.borrow().is_empty());

		let node = div((), (resolved.required("z").unwrap(), resolved.required("a").unwrap()));
		assert_eq!(*order.borrow(), vec!["z", "a"]);
		assert_eq!(node.render_to_string(), "<div>ZA</div>");
	}

	#[rstest]
	fn test_optional_absent_is_none(spec: SlotSpec, owner: SlotOwner) {
		let ctx = RenderContext::detached();
		let resolved = ResolvedSlots::new(&spec, owner, &ctx, Slots::new().slot("a", |_| ()));
		assert!(!resolved.has("c"));
		assert_eq!(resolved.optional("c").unwrap(), None);
		assert!(matches!(
			resolved.required("b").unwrap_err(),
			DesignError::MissingRequiredSlot { .. }
		));
	}

	#[rstest]
	fn test_undeclared_name_is_unknown(spec: SlotSpec, owner: SlotOwner) {
		let ctx = RenderContext::detached();
		let resolved = ResolvedSlots::new(&spec, owner, &ctx, Slots::new().slot("nope", |_| "x"));
		assert!(!resolved.has("nope"));
		assert!(matches!(
			resolved.optional("nope").unwrap_err(),
			DesignError::UnknownSlot { .. }
		));
	}

	#[rstest]
	fn test_builder_error_propagates(spec: SlotSpec, owner: SlotOwner) {
		let ctx = RenderContext::detached();
		let slots = Slots::new().try_slot("a", |_| Err(DesignError::UnknownRegion("X".to_string())));
		let resolved = ResolvedSlots::new(&spec, owner, &ctx, slots);
		assert!(matches!(
			resolved.required("a").unwrap_err(),
			DesignError::UnknownRegion(name) if name == "X"
		));
	}

	#[rstest]
	fn test_single_child_is_not_wrapped() {
		let ctx = RenderContext::detached();
		let spec = define_slot_spec(&["one", "many"], &[]).unwrap();
		let slots = Slots::new()
			.slot("one", |_| p((), "x"))
			.slot("many", |_| (p((), "x"), p((), "y")));
		let resolved = ResolvedSlots::new(&spec, SlotOwner::Layout("L".to_string()), &ctx, slots);
		assert!(resolved.required("one").unwrap().as_element().is_some());
		assert!(matches!(
			resolved.required("many").unwrap(),
			HtmlNode::Fragment(nodes) if nodes.len() == 2
		));
	}

	#[rstest]
	fn test_forward_moves_supplied_slots(spec: SlotSpec, owner: SlotOwner) {
		let ctx = RenderContext::detached();
		let slots = Slots::new().slot("a", |_| "A").slot("b", |_| div((), "B"));
		let resolved = ResolvedSlots::new(&spec, owner, &ctx, slots);
		let _ = resolved.required("a").unwrap();

		let forwarded = resolved.forward(&["a", "b", "c"]).unwrap();
		assert_eq!(forwarded.names().collect::<Vec<_>>(), vec!["a", "b"]);
		assert!(!resolved.has("a"));

		assert!(matches!(
			resolved.forward(&["missing"]).unwrap_err(),
			DesignError::UnknownSlot { .. }
		));
	}
}
