//! Components: named, pure render functions with declarative styles.
//!
//! A component never touches shared state. Its stylesheet is data that the
//! design system collects at build time and emits once in the document head.
//!
//! ```
//! use trellis_design::component::{ComponentStylesheet, define_component};
//! use trellis_design::context::RenderContext;
//! use trellis_design::naming::NamingKind;
//! use trellis_html::{StyleRule, attrs, div};
//!
//! let badge = define_component("badge", |ctx: &RenderContext, label: &str| {
//!     div(attrs!["class" => ctx.class_name("badge", NamingKind::Component)], label)
//! })
//! .with_stylesheet(ComponentStylesheet::new([StyleRule::new(".badge", [("padding", "2px")])]));
//!
//! let node = badge.render(&RenderContext::detached(), "new");
//! assert_eq!(node.render_to_string(), r#"<div class="badge">new</div>"#);
//! ```

use std::fmt;
use std::sync::Arc;

use trellis_html::{HtmlNode, StyleRule};

use crate::context::RenderContext;

type RenderFn<P> = Arc<dyn Fn(&RenderContext, &P) -> HtmlNode + Send + Sync>;

/// Ordered style rules contributed by a component.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentStylesheet {
	rules: Vec<StyleRule>,
}

impl ComponentStylesheet {
	/// Creates a stylesheet from rules, kept in the given order.
	pub fn new(rules: impl IntoIterator<Item = StyleRule>) -> Self {
		Self {
			rules: rules.into_iter().collect(),
		}
	}

	/// The rules in declaration order.
	pub fn rules(&self) -> &[StyleRule] {
		&self.rules
	}

	/// Renders one rule per line.
	pub fn to_css(&self) -> String {
		self.rules
			.iter()
			.map(StyleRule::to_css)
			.collect::<Vec<_>>()
			.join("\n")
	}
}

/// A named, stateless render function over props of type `P`.
pub struct Component<P: ?Sized> {
	name: String,
	stylesheets: Vec<ComponentStylesheet>,
	render: RenderFn<P>,
}

impl<P: ?Sized> Clone for Component<P> {
	fn clone(&self) -> Self {
		Self {
			name: self.name.clone(),
			stylesheets: self.stylesheets.clone(),
			render: Arc::clone(&self.render),
		}
	}
}

impl<P: ?Sized> fmt::Debug for Component<P> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Component")
			.field("name", &self.name)
			.field("stylesheets", &self.stylesheets.len())
			.finish_non_exhaustive()
	}
}

/// Defines a component.
pub fn define_component<P, F>(name: impl Into<String>, render: F) -> Component<P>
where
	P: ?Sized,
	F: Fn(&RenderContext, &P) -> HtmlNode + Send + Sync + 'static,
{
	Component {
		name: name.into(),
		stylesheets: Vec::new(),
		render: Arc::new(render),
	}
}

impl<P: ?Sized> Component<P> {
	/// Attaches a stylesheet fragment.
	pub fn with_stylesheet(mut self, stylesheet: ComponentStylesheet) -> Self {
		self.stylesheets.push(stylesheet);
		self
	}

	/// Component name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Attached stylesheets in attachment order.
	pub fn stylesheets(&self) -> &[ComponentStylesheet] {
		&self.stylesheets
	}

	/// Renders the component. Calling it repeatedly with the same inputs
	/// yields equal trees.
	pub fn render(&self, ctx: &RenderContext, props: &P) -> HtmlNode {
		(self.render)(ctx, props)
	}

	/// Type-erased registration record.
	pub fn info(&self) -> ComponentInfo {
		ComponentInfo {
			name: self.name.clone(),
			stylesheets: self.stylesheets.clone(),
		}
	}
}

/// What a design system keeps about a registered component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentInfo {
	/// Component name.
	pub name: String,
	/// Component stylesheets.
	pub stylesheets: Vec<ComponentStylesheet>,
}

impl<P: ?Sized> From<&Component<P>> for ComponentInfo {
	fn from(component: &Component<P>) -> Self {
		component.info()
	}
}
