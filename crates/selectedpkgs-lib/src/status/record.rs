//! Splits status file text into records and records into fields.

use std::collections::HashMap;

/// Separates a field's key from its value.
const FIELD_DELIMITER: &str = ": ";

/// The raw fields of one record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusRecord {
	/// 1-based line number of the first line of the record.
	pub line: usize,
	pub fields: HashMap<String, String>,
}

impl StatusRecord {
	pub fn get(&self, key: &str) -> Option<&str> {
		self.fields.get(key).map(String::as_str)
	}

	/// Returns the field or an empty string when absent.
	pub fn get_or_empty(&self, key: &str) -> &str {
		self.get(key).unwrap_or_default()
	}
}

/// Splits `text` into records separated by empty lines.
///
/// - Lines without `": "` are ignored, as are continuation lines starting with whitespace.
/// - When a key is repeated in a record the last value is kept.
/// - A final record without a trailing empty line is still returned.
/// - Consecutive empty lines don't produce empty records.
pub fn tokenize(text: &str) -> Vec<StatusRecord> {
	let mut records = Vec::<StatusRecord>::new();
	let mut buffer = Vec::<&str>::new();
	let mut start = 1;

	for (i, line) in text.lines().enumerate() {
		if line.is_empty() {
			if !buffer.is_empty() {
				records.push(buffer_to_record(&buffer, start));
				buffer.clear();
			}
			start = i + 2;
		} else {
			buffer.push(line);
		}
	}

	if !buffer.is_empty() {
		records.push(buffer_to_record(&buffer, start));
	}

	records
}

fn buffer_to_record(buffer: &[&str], line: usize) -> StatusRecord {
	let mut fields = HashMap::<String, String>::new();
	for l in buffer {
		if l.starts_with(char::is_whitespace) {
			continue;
		}
		/* Everything after the first delimiter is the value, even if it contains more delimiters */
		if let Some((key, value)) = l.split_once(FIELD_DELIMITER) {
			fields.insert(key.to_string(), value.trim().to_string());
		}
	}
	StatusRecord { line, fields }
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn splits_on_empty_lines() {
		let records = tokenize("Package: a\nPriority: optional\n\nPackage: b\n\n");
		assert_eq!(records.len(), 2);
		assert_eq!(records[0].get("Package"), Some("a"));
		assert_eq!(records[0].get("Priority"), Some("optional"));
		assert_eq!(records[1].get("Package"), Some("b"));
	}

	#[test]
	fn trailing_record_is_flushed() {
		let records = tokenize("Package: a\n\nPackage: b\nEssential: yes");
		assert_eq!(records.len(), 2);
		assert_eq!(records[1].get("Essential"), Some("yes"));
	}

	#[test]
	fn empty_input_has_no_records() {
		assert!(tokenize("").is_empty());
		assert!(tokenize("\n\n\n").is_empty());
	}

	#[test]
	fn repeated_separators_make_no_empty_records() {
		let records = tokenize("Package: a\n\n\n\nPackage: b\n");
		assert_eq!(records.len(), 2);
	}

	#[test]
	fn value_keeps_later_delimiters() {
		let records = tokenize("Description: a: b: c\n");
		assert_eq!(records[0].get("Description"), Some("a: b: c"));
	}

	#[test]
	fn lines_without_delimiter_are_ignored() {
		let records = tokenize("Package: a\nConffiles:\n /etc/a 0123\nnonsense\n");
		assert_eq!(records[0].fields.len(), 1);
	}

	#[test]
	fn continuation_lines_are_not_fields() {
		let records = tokenize("Package: a\nDescription: short\n Package: b\n");
		assert_eq!(records[0].get("Package"), Some("a"));
	}

	#[test]
	fn last_duplicate_key_wins() {
		let records = tokenize("Package: a\nPriority: optional\nPriority: extra\n");
		assert_eq!(records[0].get("Priority"), Some("extra"));
	}

	#[test]
	fn values_are_trimmed() {
		let records = tokenize("Package: a  \nSource:   b\n");
		assert_eq!(records[0].get("Package"), Some("a"));
		assert_eq!(records[0].get("Source"), Some("b"));
	}

	#[test]
	fn records_know_their_first_line() {
		let records = tokenize("Package: a\nPriority: optional\n\n\nPackage: b\n");
		assert_eq!(records[0].line, 1);
		assert_eq!(records[1].line, 5);
	}

	#[test]
	fn crlf_lines_are_handled() {
		let records = tokenize("Package: a\r\n\r\nPackage: b\r\n");
		assert_eq!(records.len(), 2);
		assert_eq!(records[1].get("Package"), Some("b"));
	}
}
