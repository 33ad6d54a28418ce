//! Design-system policies.

use serde::Deserialize;

/// What to do with a supplied slot that is not declared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownSlotPolicy {
	/// Fail with [`DesignError::UnknownSlot`](crate::DesignError::UnknownSlot).
	#[default]
	Throw,
	/// Log a warning and drop the slot.
	Ignore,
}

/// Whether region output is annotated with its region name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WrapperPolicy {
	/// Emit region output untouched.
	#[default]
	Bare,
	/// Add a naming-strategy data attribute carrying the region name to the
	/// region's root element, wrapping non-element output in a `div`.
	Annotate,
}

/// Policies applied by a design system.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Policies {
	/// Unknown slot handling.
	pub unknown_slots: UnknownSlotPolicy,
	/// Region wrapper behavior.
	pub wrapper: WrapperPolicy,
}

impl Policies {
	/// Sets the unknown-slot policy.
	pub fn with_unknown_slots(mut self, policy: UnknownSlotPolicy) -> Self {
		self.unknown_slots = policy;
		self
	}

	/// Sets the wrapper policy.
	pub fn with_wrapper(mut self, policy: WrapperPolicy) -> Self {
		self.wrapper = policy;
		self
	}
}
