pub mod error;
pub use error::Result;
pub use error::Error;
pub use error::RecordError;

pub mod diagnostics;
pub use diagnostics::Diagnostics;
pub use diagnostics::LogDiagnostics;
pub use diagnostics::NoDiagnostics;

pub mod status;
pub use status::StatusDb;
pub use status::PackageRecord;

pub mod config;
pub use config::SelectedPkgsOptions;

pub mod classifier;
pub use classifier::RequirementPolicy;

pub mod selection_resolver;
pub use selection_resolver::SelectionMode;

/// Reads the status file named in `options` and returns the selected package names, sorted.
pub fn find_selected_packages(options: &SelectedPkgsOptions, diagnostics: &dyn Diagnostics) -> Result<Vec<String>> {
	let db = StatusDb::load_from_path(options.status_path(), diagnostics)?;

	let selection = selection_resolver::SelectionBuilder::new(&db)
		.options(options)
		.build()
		.resolve(diagnostics);

	Ok(selection.into_selected_packages())
}
