//! Various helper functions for testing
//!
//! functions in this module should use results and not use any panics to avoid confusion in callers

use std::io::Write;

/// Builds the text of a status file one record at a time.
#[derive(Debug, Default, Clone)]
pub struct StatusBuilder {
	text: String,
}

impl StatusBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a record made of `(key, value)` fields, in order.
	pub fn record<'a>(mut self, fields: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
		for (key, value) in fields {
			self.text.push_str(key);
			self.text.push_str(": ");
			self.text.push_str(value);
			self.text.push('\n');
		}
		self.text.push('\n');
		self
	}

	/// Adds a plain installed package with an optional priority and nothing else.
	pub fn package(self, name: &str) -> Self {
		self.record([("Package", name), ("Status", "install ok installed"), ("Priority", "optional")])
	}

	/// Adds a package with a `Depends` field.
	pub fn package_depending(self, name: &str, depends: &str) -> Self {
		self.record([("Package", name), ("Status", "install ok installed"), ("Priority", "optional"), ("Depends", depends)])
	}

	pub fn build(self) -> String {
		self.text
	}
}

/// Writes `text` to a new temporary file, the file is deleted when the returned value is dropped.
pub fn write_status_file(text: &str) -> std::io::Result<tempfile::NamedTempFile> {
	let mut f = tempfile::NamedTempFile::new()?;
	f.write_all(text.as_bytes())?;
	f.flush()?;
	Ok(f)
}

/// An empty temporary directory, removed when the returned value is dropped.
pub fn temp_dir() -> std::io::Result<tempfile::TempDir> {
	tempfile::tempdir()
}
