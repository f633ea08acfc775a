use super::SelectionResolver;
use super::SelectionMode;
use super::RequirementPolicy;
use crate::status::StatusDb;

pub struct SelectionBuilder<'db> {
	db: &'db StatusDb,
	mode: SelectionMode,
	policy: RequirementPolicy,
}

impl<'db> SelectionBuilder<'db> {
	pub fn new(db: &'db StatusDb) -> Self {
		Self {
			db,
			mode: Default::default(),
			policy: Default::default(),
		}
	}

	pub fn mode(mut self, mode: SelectionMode) -> Self {
		self.mode = mode;
		self
	}

	pub fn policy(mut self, policy: RequirementPolicy) -> Self {
		self.policy = policy;
		self
	}

	/// Takes the mode and policy from `options`.
	pub fn options(self, options: &crate::SelectedPkgsOptions) -> Self {
		self.mode(options.mode()).policy(options.policy().clone())
	}

	pub fn build(self) -> SelectionResolver<'db> {
		SelectionResolver::new(self.db, self.mode, self.policy)
	}
}
