//! # dpkg's status file
//!
//! The status file is a series of records separated by empty lines, each record being `Key: Value` lines.
//! [`StatusDb`] reads it in two passes:
//! 1. Every record becomes a [`PackageRecord`] with its relationships as plain names.
//! 1. Every name that matches a known package is replaced with a [`Relationship::Resolved`] index.
//!
//! Only the `Package`, `Essential`, `Priority`, `Source`, `Depends` and `Recommends` fields are used.

use std::collections::HashMap;

use petgraph::prelude::*;

use crate::diagnostics::Diagnostics;
use crate::error::Error;

mod record;
pub use record::tokenize;
pub use record::StatusRecord;

mod relationship;
pub use relationship::parse_relationship_list;
pub use relationship::RelationKind;
pub use relationship::Relationship;

mod package;
pub use package::PackageRecord;
pub use package::Priority;

mod dependency_index;
pub use dependency_index::DependencyIndex;

/// Every package in a status file.
///
/// Packages live in a graph which owns them, relationships refer to each other by [`NodeIndex`].
/// Each resolved relationship is also an edge from the dependent to the dependency.
#[derive(Debug, Default)]
pub struct StatusDb {
	graph: DiGraph<PackageRecord, RelationKind>,
	by_name: HashMap<String, NodeIndex>,
	dependency_index: DependencyIndex,
}

impl StatusDb {
	/// Reads the status file at `path`.
	///
	/// Fails only if the path doesn't exist, isn't a regular file or can't be read.
	/// Invalid UTF-8 is replaced rather than rejected.
	pub fn load_from_path(path: impl AsRef<std::path::Path>, diagnostics: &dyn Diagnostics) -> crate::Result<Self> {
		let path = path.as_ref();

		let metadata = match std::fs::metadata(path) {
			Ok(m) => m,
			Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Err(Error::StatusFileMissing(path.to_path_buf())),
			Err(e) => return Err(Error::IO(e)),
		};
		if !metadata.is_file() {
			return Err(Error::NotRegularFile(path.to_path_buf()));
		}

		let data = std::fs::read(path)?;
		Ok(Self::from_status_text(&String::from_utf8_lossy(&data), diagnostics))
	}

	/// Builds the database from the contents of a status file.
	pub fn from_status_text(text: &str, diagnostics: &dyn Diagnostics) -> Self {
		let mut db = Self::default();

		for record in tokenize(text) {
			match PackageRecord::from_record(&record) {
				Ok(package) => {
					diagnostics.record_parsed(&package);
					db.insert(package, diagnostics);
				},
				Err(e) => diagnostics.malformed_record(&e),
			}
		}

		db.resolve_relationships(diagnostics);
		db
	}

	/// Adds `package`, replacing any existing package with the same name.
	fn insert(&mut self, package: PackageRecord, diagnostics: &dyn Diagnostics) {
		self.dependency_index.insert(
			&package.name,
			[RelationKind::Depends, RelationKind::Recommends].into_iter().flat_map(|kind| package.relationships(kind)).filter_map(|r| match r {
				Relationship::Unresolved(name) => Some(name.clone()),
				Relationship::Resolved(_) => None,
			})
		);

		if let Some(&i) = self.by_name.get(&package.name) {
			diagnostics.duplicate_package(&package.name);
			self.graph[i] = package;
		} else {
			let name = package.name.clone();
			let i = self.graph.add_node(package);
			self.by_name.insert(name, i);
		}
	}

	/// Second pass, swaps names for indices where the package exists.
	fn resolve_relationships(&mut self, diagnostics: &dyn Diagnostics) {
		let mut edges = Vec::<(NodeIndex, NodeIndex, RelationKind)>::new();

		for i in self.graph.node_indices().collect::<Vec<_>>() {
			for kind in [RelationKind::Depends, RelationKind::Recommends] {
				/* Taken out so the name lookup doesn't need to borrow the graph */
				let mut relationships = std::mem::take(self.graph[i].relationships_mut(kind));

				for r in relationships.iter_mut() {
					if let Relationship::Unresolved(name) = r {
						if let Some(&target) = self.by_name.get(name.as_str()) {
							edges.push((i, target, kind));
							*r = Relationship::Resolved(target);
						} else {
							diagnostics.unresolved_relationship(&self.graph[i].name, name);
						}
					}
				}

				*self.graph[i].relationships_mut(kind) = relationships;
			}
		}

		for (a, b, kind) in edges {
			self.graph.add_edge(a, b, kind);
		}
	}

	pub fn len(&self) -> usize {
		self.graph.node_count()
	}

	pub fn is_empty(&self) -> bool {
		self.graph.node_count() == 0
	}

	pub fn get(&self, name: &str) -> Option<&PackageRecord> {
		self.index_of(name).map(|i| &self.graph[i])
	}

	pub fn index_of(&self, name: &str) -> Option<NodeIndex> {
		self.by_name.get(name).copied()
	}

	pub fn package_indices(&self) -> impl Iterator<Item = NodeIndex> + '_ {
		self.graph.node_indices()
	}

	pub fn packages(&self) -> impl Iterator<Item = &PackageRecord> + '_ {
		self.graph.node_indices().map(|i| &self.graph[i])
	}

	/// Packages `src` depends on or recommends which are themselves in the database.
	pub fn resolved_relationships(&self, src: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
		self.graph.neighbors_directed(src, Outgoing)
	}

	/// Names of the packages that depend on or recommend `name`, sorted.
	///
	/// Unlike [`DependencyIndex::dependents_of`] only references that resolved are counted.
	pub fn dependents(&self, name: &str) -> Vec<&str> {
		let Some(i) = self.index_of(name) else { return Vec::new() };

		let mut names: Vec<&str> = self.graph.neighbors_directed(i, Incoming).map(|d| self.graph[d].name.as_str()).collect();
		names.sort_unstable();
		names.dedup();
		names
	}

	/// The name a relationship refers to, whether or not it resolved.
	pub fn relationship_name<'a>(&'a self, relationship: &'a Relationship) -> &'a str {
		match relationship {
			Relationship::Resolved(i) => &self.graph[*i].name,
			Relationship::Unresolved(name) => name,
		}
	}

	/// Which package names each package depends on or recommends.
	pub fn dependency_index(&self) -> &DependencyIndex {
		&self.dependency_index
	}
}

impl std::ops::Index<NodeIndex> for StatusDb {
	type Output = PackageRecord;

	fn index(&self, index: NodeIndex) -> &Self::Output {
		&self.graph[index]
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::diagnostics::NoDiagnostics;

	#[test]
	fn relationships_resolve_to_known_packages() {
		let db = StatusDb::from_status_text("Package: a\nDepends: b, virtual-b\n\nPackage: b\n", &NoDiagnostics);
		let a = db.get("a").unwrap();
		assert_eq!(a.depends[0], Relationship::Resolved(db.index_of("b").unwrap()));
		assert_eq!(a.depends[1], Relationship::Unresolved("virtual-b".to_string()));
		assert_eq!(db.relationship_name(&a.depends[0]), "b");
		assert_eq!(db.relationship_name(&a.depends[1]), "virtual-b");
	}

	#[test]
	fn resolved_relationships_follow_edges() {
		let db = StatusDb::from_status_text("Package: a\nDepends: b, missing\nRecommends: c\n\nPackage: b\n\nPackage: c\n", &NoDiagnostics);
		let mut names: Vec<_> = db.resolved_relationships(db.index_of("a").unwrap()).map(|i| db[i].name.as_str()).collect();
		names.sort();
		assert_eq!(names, vec!["b", "c"]);
	}

	#[test]
	fn dependents_are_the_reverse_of_edges() {
		let db = StatusDb::from_status_text("Package: a\nDepends: c\nRecommends: c\n\nPackage: b\nDepends: c\n\nPackage: c\n", &NoDiagnostics);
		assert_eq!(db.dependents("c"), vec!["a", "b"]);
		assert!(db.dependents("a").is_empty());
		assert!(db.dependents("missing").is_empty());
	}

	#[test]
	fn duplicate_names_keep_last_record() {
		let db = StatusDb::from_status_text("Package: a\nPriority: optional\nDepends: b\n\nPackage: a\nPriority: extra\n", &NoDiagnostics);
		assert_eq!(db.len(), 1);
		assert_eq!(db.get("a").unwrap().priority, Priority::Extra);
		assert!(!db.dependency_index().is_referenced("b"));
	}

	#[test]
	fn records_without_package_are_skipped() {
		let db = StatusDb::from_status_text("Priority: optional\n\nPackage: a\n", &NoDiagnostics);
		assert_eq!(db.len(), 1);
		assert!(db.get("a").is_some());
	}

	#[test]
	fn self_dependency_resolves_to_itself() {
		let db = StatusDb::from_status_text("Package: a\nDepends: a\n", &NoDiagnostics);
		let i = db.index_of("a").unwrap();
		assert_eq!(db[i].depends, vec![Relationship::Resolved(i)]);
	}
}
