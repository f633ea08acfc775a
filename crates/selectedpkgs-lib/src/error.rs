//! Library error type.

pub type Result<T> = std::result::Result<T, Error>;

use thiserror::Error;

/// Errors that halt a run.
///
/// Problems with individual records or dependencies are never returned as an `Error`,
/// see [`RecordError`] and [`crate::Diagnostics`].
#[derive(Debug, Error)]
pub enum Error {
	#[error("IO error: {0}")]
	IO(#[from] std::io::Error),
	#[error("status file {} doesn't exist", .0.display())]
	StatusFileMissing(std::path::PathBuf),
	#[error("status file {} is not a regular file", .0.display())]
	NotRegularFile(std::path::PathBuf),
}

/// A single record in the status file that could not be turned into a package.
///
/// The record is skipped and processing continues.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
	#[error("record starting at line {line} has no Package field")]
	MissingPackage { line: usize },
}
