use std::collections::{BTreeSet, HashSet, VecDeque};

use petgraph::graph::NodeIndex;

use super::*;
use crate::diagnostics::Diagnostics;
use crate::status::{DependencyIndex, StatusDb};

/// Computes the selected packages of a [`StatusDb`].
///
/// Resolving doesn't change the database so it can be repeated with the same result.
#[derive(Debug)]
pub struct SelectionResolver<'db> {
	db: &'db StatusDb,
	mode: SelectionMode,
	policy: RequirementPolicy,
}

impl<'db> SelectionResolver<'db> {
	pub(super) fn new(db: &'db StatusDb, mode: SelectionMode, policy: RequirementPolicy) -> Self {
		Self { db, mode, policy }
	}

	pub fn resolve(&self, diagnostics: &dyn Diagnostics) -> SelectionFinalized {
		let selected = match self.mode {
			SelectionMode::IgnoreDependencies => {
				self.db.packages()
					.filter(|p| !self.policy.is_intrinsically_required(p))
					.map(|p| p.name.clone())
					.collect()
			},
			SelectionMode::Shallow => {
				self.initial_candidates(self.db.dependency_index())
					.into_iter()
					.map(|i| self.db[i].name.clone())
					.collect()
			},
			SelectionMode::Deep => self.expand(diagnostics),
		};

		SelectionFinalized::new(selected)
	}

	/// Packages that are not required and that nothing refers to.
	fn initial_candidates(&self, index: &DependencyIndex) -> Vec<NodeIndex> {
		self.db.package_indices().filter(|&i| self.is_free_standing(index, i)).collect()
	}

	fn is_free_standing(&self, index: &DependencyIndex, i: NodeIndex) -> bool {
		let package = &self.db[i];
		!self.policy.is_intrinsically_required(package) && !index.is_referenced(&package.name)
	}

	fn expand(&self, diagnostics: &dyn Diagnostics) -> BTreeSet<String> {
		/* Our own copy, entries are removed as packages get selected */
		let mut index = self.db.dependency_index().clone();

		let mut queue = VecDeque::from(self.initial_candidates(&index));
		let mut selected = HashSet::<NodeIndex>::new();

		while let Some(i) = queue.pop_front() {
			if !self.is_free_standing(&index, i) {
				let name = self.db[i].name.as_str();
				if index.is_referenced(name) {
					diagnostics.candidate_blocked(name, &index);
				}
				continue;
			}

			/* Revisits are harmless, only a new selection can unblock anything */
			if !selected.insert(i) {
				continue;
			}

			index.remove(&self.db[i].name);
			/* Unresolved relationships have no record to test so they aren't followed */
			queue.extend(self.db.resolved_relationships(i));
		}

		selected.into_iter().map(|i| self.db[i].name.clone()).collect()
	}
}
