use super::record::StatusRecord;
use super::relationship::{parse_relationship_list, RelationKind, Relationship};
use crate::error::RecordError;

/// The priority tier of a package.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Priority {
	Required,
	Important,
	Standard,
	Optional,
	Extra,
	/// Missing, empty or not one of the known tiers. Keeps the original text.
	Unknown(String),
}

impl Default for Priority {
	fn default() -> Self {
		Priority::Unknown(String::new())
	}
}

impl Priority {
	/// Never fails, anything unrecognised becomes [`Priority::Unknown`].
	pub fn parse(s: &str) -> Self {
		match s {
			"required" => Priority::Required,
			"important" => Priority::Important,
			"standard" => Priority::Standard,
			"optional" => Priority::Optional,
			"extra" => Priority::Extra,
			other => Priority::Unknown(other.to_string()),
		}
	}
}

impl std::fmt::Display for Priority {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Priority::Required => write!(f, "required"),
			Priority::Important => write!(f, "important"),
			Priority::Standard => write!(f, "standard"),
			Priority::Optional => write!(f, "optional"),
			Priority::Extra => write!(f, "extra"),
			Priority::Unknown(s) => write!(f, "{}", s),
		}
	}
}

/// One package from the status file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRecord {
	pub name: String,
	pub essential: bool,
	pub priority: Priority,
	/// Empty when the record has no `Source` field.
	pub source: String,
	pub depends: Vec<Relationship>,
	/// Never contains an entry equal to `source`.
	pub recommends: Vec<Relationship>,
}

impl PackageRecord {
	pub fn from_record(record: &StatusRecord) -> Result<Self, RecordError> {
		let name = match record.get("Package") {
			Some(n) if !n.is_empty() => n.to_string(),
			_ => return Err(RecordError::MissingPackage { line: record.line }),
		};
		let source = record.get_or_empty("Source").to_string();

		let relationships = |kind: RelationKind| {
			parse_relationship_list(record.get_or_empty(kind.field_name()), kind, &source)
				.into_iter()
				.map(Relationship::Unresolved)
				.collect::<Vec<_>>()
		};

		let depends = relationships(RelationKind::Depends);
		let recommends = relationships(RelationKind::Recommends);

		Ok(PackageRecord {
			name,
			essential: record.get("Essential") == Some("yes"),
			priority: Priority::parse(record.get_or_empty("Priority")),
			source,
			depends,
			recommends,
		})
	}

	pub fn relationships(&self, kind: RelationKind) -> &[Relationship] {
		match kind {
			RelationKind::Depends => &self.depends,
			RelationKind::Recommends => &self.recommends,
		}
	}

	pub(crate) fn relationships_mut(&mut self, kind: RelationKind) -> &mut Vec<Relationship> {
		match kind {
			RelationKind::Depends => &mut self.depends,
			RelationKind::Recommends => &mut self.recommends,
		}
	}
}
