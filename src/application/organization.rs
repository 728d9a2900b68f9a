//! Organization creation
//!
//! Turns the calling account into the management account of a new
//! organization.

use crate::domain::ports::Directory;
use crate::error::{OrgovError, OrgovResult};

pub struct OrganizationUseCase<D: Directory> {
    directory: D,
    feature_set: String,
}

impl<D: Directory> OrganizationUseCase<D> {
    pub fn new(directory: D, feature_set: impl Into<String>) -> Self {
        Self {
            directory,
            feature_set: feature_set.into(),
        }
    }

    /// Create the organization, returning its id
    pub fn execute(&self) -> OrgovResult<String> {
        tracing::debug!(feature_set = %self.feature_set, "creating organization");
        let id = self
            .directory
            .create_organization(&self.feature_set)
            .map_err(|e| OrgovError::remote("create-organization", &self.feature_set, e))?;
        tracing::info!(%id, "organization created");
        Ok(id)
    }
}
