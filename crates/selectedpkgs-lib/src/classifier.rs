//! Decides which packages are required no matter where they sit in the dependency graph.

use crate::status::{PackageRecord, Priority};

/// Rules for packages that are considered part of the system rather than chosen by a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequirementPolicy {
	/// Priorities dpkg installs by default.
	auto_installed_priorities: Vec<Priority>,
}

impl Default for RequirementPolicy {
	fn default() -> Self {
		Self {
			auto_installed_priorities: vec![Priority::Required, Priority::Important, Priority::Standard],
		}
	}
}

impl RequirementPolicy {
	pub fn new(auto_installed_priorities: impl IntoIterator<Item = Priority>) -> Self {
		Self { auto_installed_priorities: auto_installed_priorities.into_iter().collect() }
	}

	/// A package is intrinsically required when any of the following hold:
	/// - it is marked essential.
	/// - its priority is one of the auto installed priorities.
	/// - it has a source and its name appears inside the source.
	///
	/// The last rule is a substring match so unrelated names can match too, e.g. `git` inside `gitlab`.
	pub fn is_intrinsically_required(&self, package: &PackageRecord) -> bool {
		package.essential
			|| self.auto_installed_priorities.contains(&package.priority)
			|| (!package.source.is_empty() && package.source.contains(package.name.as_str()))
	}
}
