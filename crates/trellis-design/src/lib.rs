//! Trellis Design - design systems composed from regions, layouts and slots
//!
//! A [`DesignSystem`] is an immutable registry of named [regions](region),
//! [layouts](layout) and [components](component), together with a
//! [naming strategy](naming) and the head assets every page links. Pages
//! are rendered by name:
//!
//! 1. the layout is looked up ([`DesignError::UnknownLayout`] otherwise)
//! 2. the caller's slots are checked against the layout's [`SlotSpec`]
//! 3. a [`RenderContext`] carrying the naming strategy and render data is built
//! 4. the layout renders the body, pulling in regions through [`RegionApi`]
//! 5. the head is assembled from user-agent dependencies, component styles
//!    and the caller's head slots merged over the defaults
//! 6. the document is serialized
//!
//! Rendering is synchronous and has no shared mutable state, so one
//! `DesignSystem` can serve concurrent requests behind an `Arc`.
//!
//! ## Example
//!
//! ```
//! use serde_json::Value;
//! use trellis_design::Slots;
//! use trellis_design::systems::{paragraph, starter};
//!
//! let ds = starter::design_system()?;
//! let html = ds.page_pretty(
//!     starter::LAYOUT,
//!     Value::Null,
//!     Slots::new()
//!         .slot("title", |_| "Starter DS")
//!         .slot("content", |ctx| paragraph().render(ctx, "Hello")),
//! )?;
//! assert!(html.starts_with("<!doctype html>\n<html>\n  <head>\n"));
//! # Ok::<(), trellis_design::DesignError>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `systems` (default): the bundled `starter`, `natural`, `canonical` and
//!   `corpus` design systems

#![warn(missing_docs)]

pub mod asset;
pub mod breadcrumbs;
pub mod component;
pub mod context;
pub mod error;
pub mod head;
pub mod layout;
pub mod naming;
pub mod policy;
pub mod region;
pub mod settings;
pub mod slot;
pub mod system;

#[cfg(feature = "systems")]
pub mod systems;

pub use asset::{AssetKind, CacheDirectives, UaDependency};
pub use breadcrumbs::{Breadcrumbs, Crumb};
pub use component::{Component, ComponentInfo, ComponentStylesheet, define_component};
pub use context::RenderContext;
pub use error::{DesignError, RegistrationKind, Result, SlotOwner};
pub use head::{HeadSlotKey, HeadSlots, LinkTag, MetaTag, ScriptTag, merge_head_slots, style_block};
pub use layout::{Layout, RegionApi, define_layout};
pub use naming::{KindPrefixNaming, NamingKind, NamingStrategy, PassthroughNaming, PrefixNaming};
pub use policy::{Policies, UnknownSlotPolicy, WrapperPolicy};
pub use region::{Region, define_region};
pub use settings::{DesignSystemSettings, SettingsError};
pub use slot::{ResolvedSlots, SlotName, SlotSpec, Slots, define_slot_spec};
pub use system::{DesignSystem, DesignSystemBuilder, PageInput};
