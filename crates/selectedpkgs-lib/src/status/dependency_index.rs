use std::collections::{HashMap, HashSet};

/// Maps a dependent package's name to the names it depends on or recommends.
///
/// Answers "does anybody still refer to this name" in constant time by counting how many entries contain each name.
/// The selection resolver works on its own copy and removes entries as packages are selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyIndex {
	dependencies: HashMap<String, HashSet<String>>,
	/// Number of entries in `dependencies` whose set contains the name.
	references: HashMap<String, usize>,
}

impl DependencyIndex {
	/// Sets the names `dependent` refers to, replacing any previous entry.
	///
	/// An empty list leaves no entry for `dependent`.
	pub fn insert(&mut self, dependent: &str, names: impl IntoIterator<Item = String>) {
		self.remove(dependent);

		let names: HashSet<String> = names.into_iter().collect();
		if names.is_empty() {
			return;
		}
		for name in &names {
			*self.references.entry(name.clone()).or_default() += 1;
		}
		self.dependencies.insert(dependent.to_string(), names);
	}

	/// Removes the entry for `dependent`, returns `false` if it had none.
	pub fn remove(&mut self, dependent: &str) -> bool {
		let Some(names) = self.dependencies.remove(dependent) else { return false };

		for name in names {
			if let Some(count) = self.references.get_mut(&name) {
				*count -= 1;
				if *count == 0 {
					self.references.remove(&name);
				}
			}
		}
		true
	}

	/// Whether any entry depends on or recommends `name`.
	pub fn is_referenced(&self, name: &str) -> bool {
		self.references.contains_key(name)
	}

	pub fn dependencies_of(&self, dependent: &str) -> Option<&HashSet<String>> {
		self.dependencies.get(dependent)
	}

	/// Every dependent that still refers to `name`, sorted.
	pub fn dependents_of(&self, name: &str) -> Vec<&str> {
		let mut dependents: Vec<&str> = self.dependencies.iter()
			.filter(|(_, names)| names.contains(name))
			.map(|(dependent, _)| dependent.as_str())
			.collect();
		dependents.sort_unstable();
		dependents
	}

	/// Number of dependents with an entry.
	pub fn len(&self) -> usize {
		self.dependencies.len()
	}

	pub fn is_empty(&self) -> bool {
		self.dependencies.is_empty()
	}
}
