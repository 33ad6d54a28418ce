//! # Trellis
//!
//! Deterministic server-side HTML composition for Rust.
//!
//! Trellis builds pages from explicit trees instead of template strings.
//! Design systems declare named layouts and regions with typed slot
//! contracts; callers fill the slots and get back a complete HTML5 document
//! that is byte-for-byte reproducible.
//!
//! ## Core Principles
//!
//! - **Explicit trees**: every tag function returns an immutable node
//! - **Fail loud**: missing or misspelled slots, regions and layouts are errors
//! - **Deterministic output**: sorted attributes and stable naming for golden tests
//! - **Pluggable naming**: one composition engine, many markup conventions
//!
//! ## Feature Flags
//!
//! - `systems` (default) - the bundled `starter`, `natural`, `canonical`
//!   and `corpus` design systems
//!
//! ## Quick Example
//!
//! ```
//! use trellis::prelude::*;
//! use trellis::design::systems::{paragraph, starter};
//!
//! let ds = starter::design_system()?;
//! let html = ds.page(
//!     starter::LAYOUT,
//!     Value::Null,
//!     Slots::new()
//!         .slot("title", |_| "Starter DS")
//!         .slot("content", |ctx| paragraph().render(ctx, "Hello from the starter design system.")),
//! )?;
//!
//! assert!(html.starts_with("<!doctype html><html><head>"));
//! assert!(!html.contains("region-lead"));
//! # Ok::<(), trellis::design::DesignError>(())
//! ```

pub mod design;
pub mod html;

/// Commonly used types for building pages.
pub mod prelude {
	// HTML construction
	pub use trellis_html::{
		Attrs, Child, ChildList, HtmlNode, IntoChildren, RawHtml, StyleMap, StyleRule, attrs,
		raw, trusted_raw,
	};

	// Design systems
	pub use trellis_design::{
		Component, DesignError, DesignSystem, HeadSlots, KindPrefixNaming, NamingKind,
		NamingStrategy, PageInput, PassthroughNaming, Policies, PrefixNaming, RegionApi,
		RenderContext, ResolvedSlots, SlotSpec, Slots, UaDependency, UnknownSlotPolicy,
		WrapperPolicy, define_component, define_layout, define_region, define_slot_spec,
	};

	// External
	pub use serde_json::Value;
}
