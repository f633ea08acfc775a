//! Finds the packages a user chose to install, as opposed to ones pulled in as dependencies.
//!
//! # Usage
//! 1. Load a [`crate::StatusDb`].
//! 1. Create a [`SelectionBuilder`] and set the [`SelectionMode`] and [`RequirementPolicy`] if the defaults don't fit.
//! 1. [`SelectionBuilder::build()`] to get a [`SelectionResolver`].
//! 1. [`SelectionResolver::resolve()`] to get a [`SelectionFinalized`].
//! 1. [`SelectionFinalized::get_selected_packages()`] for the sorted package names.
//!
//! # Process
//! A package is a candidate when it isn't intrinsically required and no package depends on or recommends it.
//! Candidates are selected, which removes their hold on their own dependencies.
//! Any dependency left with no remaining referrers becomes selectable in turn, this repeats until nothing changes.

use crate::classifier::RequirementPolicy;

mod selection_builder;
pub use selection_builder::SelectionBuilder;
mod processing_resolver;
pub use processing_resolver::SelectionResolver;
mod finalized_selection;
pub use finalized_selection::SelectionFinalized;

/// How much of the dependency graph is taken into account.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionMode {
	/// Start from unreferenced packages and keep following their dependencies.
	#[default] Deep,
	/// Only packages nothing refers to, no expansion.
	Shallow,
	/// Every package that isn't intrinsically required, dependencies are not considered.
	IgnoreDependencies,
}
