use petgraph::graph::NodeIndex;
use regex::Regex;
use std::sync::OnceLock;

/// A reference from one package to another.
///
/// Starts out as a name and becomes an index into the [`crate::StatusDb`] once the name is found there.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Relationship {
	/// No package with this name is known.
	Unresolved(String),
	Resolved(NodeIndex),
}

/// The field a relationship list was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationKind {
	Depends,
	Recommends,
}

impl RelationKind {
	pub fn field_name(&self) -> &'static str {
		match self {
			RelationKind::Depends => "Depends",
			RelationKind::Recommends => "Recommends",
		}
	}
}

fn package_name_regex() -> &'static Regex {
	static NAME: OnceLock<Regex> = OnceLock::new();
	/* Debian package names also allow `+`, e.g. libstdc++6 */
	NAME.get_or_init(|| Regex::new(r"^[A-Za-z0-9.+-]+").expect("package name regex failed to compile."))
}

/// Parses a `Depends` style field into bare package names.
///
/// Alternatives (`a | b`) are flattened into the list, version constraints and architecture qualifiers are dropped.
/// For [`RelationKind::Recommends`] a name equal to `source` is left out.
///
/// ```
/// use selectedpkgs::status::{parse_relationship_list, RelationKind};
///
/// let names = parse_relationship_list("libc6 (>= 2.34), exim4 | mail-transport-agent, python3:any", RelationKind::Depends, "");
/// assert_eq!(names, vec!["libc6", "exim4", "mail-transport-agent", "python3"]);
/// ```
pub fn parse_relationship_list(value: &str, kind: RelationKind, source: &str) -> Vec<String> {
	let regex = package_name_regex();

	value
		.split([',', '|'])
		.filter_map(|token| regex.find(token.trim()))
		.map(|m| m.as_str())
		.filter(|name| !(kind == RelationKind::Recommends && *name == source))
		.map(str::to_string)
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_value_has_no_names() {
		assert!(parse_relationship_list("", RelationKind::Depends, "").is_empty());
	}

	#[test]
	fn version_constraints_are_dropped() {
		assert_eq!(
			parse_relationship_list("libc6 (>= 2.34), libtinfo6 (>= 6)", RelationKind::Depends, ""),
			vec!["libc6", "libtinfo6"]
		);
	}

	#[test]
	fn alternatives_are_flattened() {
		assert_eq!(
			parse_relationship_list("default-mta | mail-transport-agent, cron", RelationKind::Depends, ""),
			vec!["default-mta", "mail-transport-agent", "cron"]
		);
	}

	#[test]
	fn architecture_qualifiers_are_dropped() {
		assert_eq!(parse_relationship_list("perl:any, libfoo1:amd64", RelationKind::Depends, ""), vec!["perl", "libfoo1"]);
	}

	#[test]
	fn plus_is_part_of_a_name() {
		assert_eq!(parse_relationship_list("libstdc++6 (>= 5.2)", RelationKind::Depends, ""), vec!["libstdc++6"]);
	}

	#[test]
	fn empty_tokens_are_dropped() {
		assert_eq!(parse_relationship_list(", a,, | b ,", RelationKind::Depends, ""), vec!["a", "b"]);
	}

	#[test]
	fn duplicates_are_kept() {
		assert_eq!(parse_relationship_list("a, a (>= 1)", RelationKind::Depends, ""), vec!["a", "a"]);
	}

	#[test]
	fn recommends_of_own_source_are_dropped() {
		assert_eq!(parse_relationship_list("vim-runtime, vim", RelationKind::Recommends, "vim"), vec!["vim-runtime"]);
	}

	#[test]
	fn depends_on_own_source_are_kept() {
		assert_eq!(parse_relationship_list("vim", RelationKind::Depends, "vim"), vec!["vim"]);
	}

	#[test]
	fn empty_source_never_filters() {
		assert_eq!(parse_relationship_list("a", RelationKind::Recommends, ""), vec!["a"]);
	}
}
