//! Observer for the non-fatal events that happen while reading the status file and selecting packages.
//!
//! The core never logs through a global directly, it reports to whatever [`Diagnostics`] it is handed.
//! [`LogDiagnostics`] forwards everything to the `log` facade and is what the terminal uses.

use crate::error::RecordError;
use crate::status::{DependencyIndex, PackageRecord};

/// Receives diagnostic events. Every method defaults to doing nothing.
pub trait Diagnostics {
	/// A record was turned into a package.
	fn record_parsed(&self, _record: &PackageRecord) {}
	/// A record was skipped.
	fn malformed_record(&self, _error: &RecordError) {}
	/// A package name appeared more than once, the later record replaced the earlier one.
	fn duplicate_package(&self, _name: &str) {}
	/// `package` refers to `dependency` which isn't in the status file.
	fn unresolved_relationship(&self, _package: &str, _dependency: &str) {}
	/// `package` was reached during expansion but is still referenced by an entry of `index`.
	///
	/// Finding the referrers means scanning `index`, so only do it when they are needed.
	fn candidate_blocked(&self, _package: &str, _index: &DependencyIndex) {}
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDiagnostics;

impl Diagnostics for NoDiagnostics {}

/// Forwards events to the `log` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
	fn record_parsed(&self, record: &PackageRecord) {
		log::debug!(
			"Parsed package {} (essential: {}, priority: {}, source: {:?}, {} depends, {} recommends)",
			record.name, record.essential, record.priority, record.source, record.depends.len(), record.recommends.len()
		);
	}

	fn malformed_record(&self, error: &RecordError) {
		log::warn!("Skipping malformed record: {}", error);
	}

	fn duplicate_package(&self, name: &str) {
		log::debug!("Package {} appears more than once, keeping the last record.", name);
	}

	fn unresolved_relationship(&self, package: &str, dependency: &str) {
		log::info!("Package {} refers to {} which is not in the status file.", package, dependency);
	}

	fn candidate_blocked(&self, package: &str, index: &DependencyIndex) {
		if log::log_enabled!(log::Level::Debug) {
			log::debug!("Package {} is still required by {:?}", package, index.dependents_of(package));
		}
	}
}
