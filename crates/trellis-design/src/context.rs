//! Render context shared by every builder in one `page()` call.

use std::sync::Arc;

use serde_json::Value;

use crate::naming::{NamingKind, NamingStrategy, PassthroughNaming};

/// Naming strategy plus caller-supplied render data.
///
/// Cloning is cheap: every field is reference counted.
#[derive(Debug, Clone)]
pub struct RenderContext {
	design_system: Arc<str>,
	naming: Arc<dyn NamingStrategy>,
	data: Arc<Value>,
}

impl RenderContext {
	/// Creates a context for the named design system.
	pub fn new(design_system: impl Into<Arc<str>>, naming: Arc<dyn NamingStrategy>, data: Value) -> Self {
		Self {
			design_system: design_system.into(),
			naming,
			data: Arc::new(data),
		}
	}

	/// A context outside any design system, with passthrough naming and no
	/// data. Useful for rendering components in isolation.
	pub fn detached() -> Self {
		Self::new("", Arc::new(PassthroughNaming), Value::Null)
	}

	/// Name of the design system rendering this page.
	pub fn design_system(&self) -> &str {
		&self.design_system
	}

	/// The naming strategy in effect.
	pub fn naming(&self) -> &dyn NamingStrategy {
		self.naming.as_ref()
	}

	/// See [`NamingStrategy::element_id`].
	pub fn element_id(&self, suggested: &str, kind: NamingKind) -> String {
		self.naming.element_id(suggested, kind)
	}

	/// See [`NamingStrategy::class_name`].
	pub fn class_name(&self, suggested: &str, kind: NamingKind) -> String {
		self.naming.class_name(suggested, kind)
	}

	/// See [`NamingStrategy::data_attribute_name`].
	pub fn data_attribute_name(&self, suggested: &str, kind: NamingKind) -> String {
		self.naming.data_attribute_name(suggested, kind)
	}

	/// Render-time data supplied to `page()`.
	pub fn data(&self) -> &Value {
		&self.data
	}

	/// Looks up a top-level key when the data is an object.
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.data.get(key)
	}

	/// Looks up a top-level string value.
	pub fn get_str(&self, key: &str) -> Option<&str> {
		self.get(key).and_then(Value::as_str)
	}
}

impl Default for RenderContext {
	fn default() -> Self {
		Self::detached()
	}
}
