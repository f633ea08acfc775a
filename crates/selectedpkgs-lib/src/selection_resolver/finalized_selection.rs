use std::collections::BTreeSet;

/// The result of a [`super::SelectionResolver`] run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionFinalized {
	selected: BTreeSet<String>,
}

impl SelectionFinalized {
	pub(super) fn new(selected: BTreeSet<String>) -> Self {
		Self { selected }
	}

	/// Selected package names, sorted and without duplicates.
	pub fn get_selected_packages(&self) -> Vec<String> {
		self.selected.iter().cloned().collect()
	}

	pub fn contains(&self, name: &str) -> bool {
		self.selected.contains(name)
	}

	pub fn len(&self) -> usize {
		self.selected.len()
	}

	pub fn is_empty(&self) -> bool {
		self.selected.is_empty()
	}

	pub fn into_selected_packages(self) -> Vec<String> {
		self.selected.into_iter().collect()
	}
}
