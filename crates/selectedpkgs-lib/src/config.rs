use crate::classifier::RequirementPolicy;
use crate::selection_resolver::SelectionMode;

/// Location of the status file relative to dpkg's admin directory.
const STATUS_FILE_NAME: &str = "status";
const DEFAULT_ADMIN_DIR: &str = "/var/lib/dpkg";

pub struct SelectedPkgsOptions {
	status_path: std::path::PathBuf,
	mode: SelectionMode,
	policy: RequirementPolicy,
}

impl Default for SelectedPkgsOptions {
	fn default() -> Self {
		Self {
			status_path: {
				/* dpkg itself honours this variable so we follow it too */
				let admin_dir = if let Ok(e) = std::env::var("DPKG_ADMINDIR") {
					std::path::PathBuf::from(e)
				} else {
					std::path::PathBuf::from(DEFAULT_ADMIN_DIR)
				};

				admin_dir.join(STATUS_FILE_NAME)
			},
			mode: SelectionMode::default(),
			policy: RequirementPolicy::default(),
		}
	}
}

impl SelectedPkgsOptions {
	pub fn status_path(&self) -> &std::path::PathBuf {
		&self.status_path
	}
	/// The path isn't checked here, loading the status file reports a missing or invalid path.
	pub fn set_status_path(&mut self, status_path: std::path::PathBuf) {
		self.status_path = status_path;
	}

	pub fn mode(&self) -> SelectionMode {
		self.mode
	}
	pub fn set_mode(&mut self, mode: SelectionMode) {
		self.mode = mode;
	}

	pub fn policy(&self) -> &RequirementPolicy {
		&self.policy
	}
	pub fn set_policy(&mut self, policy: RequirementPolicy) {
		self.policy = policy;
	}
}
