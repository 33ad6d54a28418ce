//! The design system registry and page rendering.
//!
//! A [`DesignSystemBuilder`] only accumulates definitions. [`build`] checks
//! them and freezes the result into a [`DesignSystem`], which never changes
//! afterwards and can be shared across threads behind an `Arc`.
//!
//! [`build`]: DesignSystemBuilder::build

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use trellis_html::{HtmlNode, RawHtml, tags, trusted_raw};

use crate::asset::UaDependency;
use crate::component::{Component, ComponentInfo};
use crate::context::RenderContext;
use crate::error::{DesignError, RegistrationKind, Result, SlotOwner};
use crate::head::{HeadSlotKey, HeadSlots, merge_head_slots};
use crate::layout::{Layout, RegionApi};
use crate::naming::NamingStrategy;
use crate::policy::Policies;
use crate::region::Region;
use crate::settings::DesignSystemSettings;
use crate::slot::{ResolvedSlots, Slots};

/// Caller input for one page.
#[derive(Debug, Default)]
pub struct PageInput<'a> {
	/// Body slots for the layout.
	pub slots: Slots<'a>,
	/// Head content merged over the design system defaults.
	pub head: HeadSlots,
}

impl<'a> PageInput<'a> {
	/// Input with body slots and no head content.
	pub fn new(slots: Slots<'a>) -> Self {
		Self {
			slots,
			head: HeadSlots::default(),
		}
	}

	/// Sets the head content.
	pub fn with_head(mut self, head: HeadSlots) -> Self {
		self.head = head;
		self
	}
}

impl<'a> From<Slots<'a>> for PageInput<'a> {
	fn from(slots: Slots<'a>) -> Self {
		Self::new(slots)
	}
}

/// Accumulates definitions for a [`DesignSystem`].
pub struct DesignSystemBuilder {
	name: String,
	naming: Arc<dyn NamingStrategy>,
	policies: Policies,
	regions: Vec<Region>,
	layouts: Vec<Layout>,
	components: Vec<ComponentInfo>,
	ua_dependencies: Vec<UaDependency>,
	default_head: HeadSlots,
}

impl DesignSystemBuilder {
	fn new(name: String, naming: Arc<dyn NamingStrategy>) -> Self {
		Self {
			name,
			naming,
			policies: Policies::default(),
			regions: Vec::new(),
			layouts: Vec::new(),
			components: Vec::new(),
			ua_dependencies: Vec::new(),
			default_head: HeadSlots::default(),
		}
	}

	/// Registers a region.
	pub fn region(mut self, region: Region) -> Self {
		self.regions.push(region);
		self
	}

	/// Registers a layout.
	pub fn layout(mut self, layout: Layout) -> Self {
		self.layouts.push(layout);
		self
	}

	/// Registers a component so its stylesheets reach the document head.
	pub fn component<P: ?Sized>(mut self, component: &Component<P>) -> Self {
		self.components.push(component.info());
		self
	}

	/// Appends one user-agent dependency.
	pub fn ua_dependency(mut self, dependency: UaDependency) -> Self {
		self.ua_dependencies.push(dependency);
		self
	}

	/// Appends user-agent dependencies, keeping their order.
	pub fn ua_dependencies(mut self, dependencies: impl IntoIterator<Item = UaDependency>) -> Self {
		self.ua_dependencies.extend(dependencies);
		self
	}

	/// Replaces the policies.
	pub fn policies(mut self, policies: Policies) -> Self {
		self.policies = policies;
		self
	}

	/// Sets the default head content callers merge over.
	pub fn default_head(mut self, head: HeadSlots) -> Self {
		self.default_head = head;
		self
	}

	/// Applies loaded settings: name, policies, default title and extra
	/// user-agent dependencies (appended after those already registered).
	/// Anything the settings leave unset keeps its current value.
	pub fn with_settings(mut self, settings: &DesignSystemSettings) -> Self {
		if let Some(name) = &settings.name {
			self.name = name.clone();
		}
		self.policies = settings.apply_policies(self.policies);
		if let Some(title) = &settings.title {
			self.default_head.title = Some(title.clone());
		}
		self.ua_dependencies
			.extend(settings.ua_dependencies.iter().cloned());
		self
	}

	/// Validates every definition and freezes the registry.
	///
	/// Fails on duplicate region, layout or component names, on user-agent
	/// dependencies with an unsupported MIME type, and on layout head slot
	/// specs naming something other than a [`HeadSlotKey`].
	pub fn build(self) -> Result<DesignSystem> {
		let regions = index_unique(self.regions, RegistrationKind::Region, |r| r.name())?;
		let layouts = index_unique(self.layouts, RegistrationKind::Layout, |l| l.name())?;

		for layout in layouts.values() {
			if let Some(spec) = layout.head_slots() {
				if let Some(bad) = spec.names().find(|n| HeadSlotKey::from_name(n).is_none()) {
					return Err(DesignError::UnknownSlot {
						slot: bad.to_string(),
						owner: SlotOwner::Head(layout.name().to_string()),
					});
				}
			}
		}

		let mut component_names = std::collections::BTreeSet::new();
		for component in &self.components {
			if !component_names.insert(component.name.as_str()) {
				return Err(DesignError::DuplicateRegistration {
					kind: RegistrationKind::Component,
					name: component.name.clone(),
				});
			}
		}

		for dependency in &self.ua_dependencies {
			dependency.kind()?;
		}

		tracing::debug!(
			design_system = %self.name,
			regions = regions.len(),
			layouts = layouts.len(),
			components = self.components.len(),
			ua_dependencies = self.ua_dependencies.len(),
			"design system built"
		);

		Ok(DesignSystem {
			name: self.name.into(),
			naming: self.naming,
			policies: self.policies,
			regions,
			layouts,
			components: self.components,
			ua_dependencies: self.ua_dependencies,
			default_head: self.default_head,
		})
	}
}

impl fmt::Debug for DesignSystemBuilder {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("DesignSystemBuilder")
			.field("name", &self.name)
			.field("regions", &self.regions.len())
			.field("layouts", &self.layouts.len())
			.finish_non_exhaustive()
	}
}

fn index_unique<T>(
	items: Vec<T>,
	kind: RegistrationKind,
	name_of: impl Fn(&T) -> &str,
) -> Result<BTreeMap<String, T>> {
	let mut map = BTreeMap::new();
	for item in items {
		match map.entry(name_of(&item).to_string()) {
			Entry::Occupied(entry) => {
				return Err(DesignError::DuplicateRegistration {
					kind,
					name: entry.key().clone(),
				});
			}
			Entry::Vacant(entry) => {
				entry.insert(item);
			}
		}
	}
	Ok(map)
}

/// An immutable registry of regions, layouts, components and head assets.
pub struct DesignSystem {
	name: Arc<str>,
	naming: Arc<dyn NamingStrategy>,
	policies: Policies,
	regions: BTreeMap<String, Region>,
	layouts: BTreeMap<String, Layout>,
	components: Vec<ComponentInfo>,
	ua_dependencies: Vec<UaDependency>,
	default_head: HeadSlots,
}

impl DesignSystem {
	/// Starts a builder.
	pub fn builder(name: impl Into<String>, naming: Arc<dyn NamingStrategy>) -> DesignSystemBuilder {
		DesignSystemBuilder::new(name.into(), naming)
	}

	/// Design system name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// The naming strategy.
	pub fn naming(&self) -> &dyn NamingStrategy {
		self.naming.as_ref()
	}

	/// Active policies.
	pub fn policies(&self) -> Policies {
		self.policies
	}

	/// User-agent dependencies in registration order.
	pub fn ua_dependencies(&self) -> &[UaDependency] {
		&self.ua_dependencies
	}

	/// Default head content.
	pub fn default_head(&self) -> &HeadSlots {
		&self.default_head
	}

	/// Registered components.
	pub fn components(&self) -> &[ComponentInfo] {
		&self.components
	}

	/// Looks up a region.
	pub fn region(&self, name: &str) -> Option<&Region> {
		self.regions.get(name)
	}

	/// Looks up a layout.
	pub fn layout(&self, name: &str) -> Option<&Layout> {
		self.layouts.get(name)
	}

	/// Region names, sorted.
	pub fn region_names(&self) -> impl Iterator<Item = &str> {
		self.regions.keys().map(String::as_str)
	}

	/// Layout names, sorted.
	pub fn layout_names(&self) -> impl Iterator<Item = &str> {
		self.layouts.keys().map(String::as_str)
	}

	/// CSS of every registered component, in registration order.
	pub fn stylesheet(&self) -> Option<String> {
		let css: Vec<String> = self
			.components
			.iter()
			.flat_map(|c| c.stylesheets.iter())
			.map(|sheet| sheet.to_css())
			.filter(|css| !css.is_empty())
			.collect();
		(!css.is_empty()).then(|| css.join("\n"))
	}

	/// A render context for this design system.
	pub fn context(&self, data: Value) -> RenderContext {
		RenderContext::new(Arc::clone(&self.name), Arc::clone(&self.naming), data)
	}

	/// Renders the whole document tree for `layout`.
	pub fn render_document<'a>(
		&self,
		layout: &str,
		data: Value,
		input: impl Into<PageInput<'a>>,
	) -> Result<HtmlNode> {
		let PageInput { slots, head } = input.into();
		let span = tracing::debug_span!("page", design_system = %self.name, layout);
		let _guard = span.enter();

		let definition = self
			.layouts
			.get(layout)
			.ok_or_else(|| DesignError::UnknownLayout(layout.to_string()))?;

		let owner = SlotOwner::Layout(definition.name().to_string());
		definition
			.slots()
			.validate(slots.names(), &owner, self.policies.unknown_slots)?;

		// A layout without a head spec accepts every head key
		if let Some(spec) = definition.head_slots() {
			spec.validate(
				head.supplied_keys().iter().map(HeadSlotKey::as_str),
				&SlotOwner::Head(definition.name().to_string()),
				self.policies.unknown_slots,
			)?;
		}

		let ctx = self.context(data);
		let api = RegionApi::new(self, &ctx);
		let resolved = ResolvedSlots::new(definition.slots(), owner, &ctx, slots);
		let body = definition.render(&ctx, &api, &resolved)?;

		let mut head_nodes = Vec::with_capacity(self.ua_dependencies.len() + 4);
		for dependency in &self.ua_dependencies {
			head_nodes.push(dependency.to_node(self.naming.as_ref())?);
		}
		if let Some(css) = self.stylesheet() {
			head_nodes.push(tags::style((), trusted_raw(css)));
		}
		head_nodes.extend(merge_head_slots(&self.default_head, head).to_nodes());

		tracing::debug!("page rendered");
		Ok(tags::fragment((
			tags::doctype(),
			tags::html((), (tags::head((), head_nodes), tags::body((), body))),
		)))
	}

	/// Renders a page as [`RawHtml`], keeping the tree for further
	/// composition.
	pub fn render_page<'a>(
		&self,
		layout: &str,
		data: Value,
		input: impl Into<PageInput<'a>>,
	) -> Result<RawHtml> {
		self.render_document(layout, data, input)
			.map(RawHtml::from_node)
	}

	/// Renders a page to a minimized HTML document string.
	///
	/// ```
	/// use std::sync::Arc;
	/// use serde_json::Value;
	/// use trellis_design::{DesignSystem, Slots, define_layout, naming::PassthroughNaming};
	/// use trellis_design::slot::SlotSpec;
	/// use trellis_html::p;
	///
	/// let ds = DesignSystem::builder("tiny", Arc::new(PassthroughNaming))
	///     .layout(define_layout("Blank", SlotSpec::empty(), |_, _, _| Ok(p((), "hi"))))
	///     .build()
	///     .unwrap();
	///
	/// let html = ds.page("Blank", Value::Null, Slots::new()).unwrap();
	/// assert_eq!(html, "<!doctype html><html><head></head><body><p>hi</p></body></html>");
	/// ```
	pub fn page<'a>(&self, layout: &str, data: Value, input: impl Into<PageInput<'a>>) -> Result<String> {
		self.render_document(layout, data, input)
			.map(|doc| doc.render_to_string())
	}

	/// Renders the same document as [`page`](Self::page), indented.
	pub fn page_pretty<'a>(
		&self,
		layout: &str,
		data: Value,
		input: impl Into<PageInput<'a>>,
	) -> Result<String> {
		self.render_document(layout, data, input)
			.map(|doc| doc.render_pretty())
	}
}

impl fmt::Debug for DesignSystem {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("DesignSystem")
			.field("name", &self.name)
			.field("naming", &self.naming)
			.field("policies", &self.policies)
			.field("regions", &self.regions.keys().collect::<Vec<_>>())
			.field("layouts", &self.layouts.keys().collect::<Vec<_>>())
			.field("ua_dependencies", &self.ua_dependencies.len())
			.finish_non_exhaustive()
	}
}
