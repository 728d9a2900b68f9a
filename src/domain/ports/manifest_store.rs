//! ManifestStore port - persistence of the organization tree
//!
//! Every mutation is a full read-modify-write of the tree.

use std::path::PathBuf;

use crate::domain::entities::{ManifestChange, Organization};

#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("Failed to access manifest {path}: {message}")]
    AccessError { path: PathBuf, message: String },

    #[error("Failed to serialize manifest: {message}")]
    SerializationError { message: String },

    #[error("manifest file corrupted: {path}\n  → Details: {message}")]
    Corrupted { path: PathBuf, message: String },
}

pub trait ManifestStore {
    fn load(&self) -> Result<Organization, ManifestError>;

    fn save(&self, organization: &Organization) -> Result<(), ManifestError>;

    /// Reload, apply one change, write the whole tree back
    fn apply(&self, change: ManifestChange) -> Result<Organization, ManifestError> {
        let mut organization = self.load()?;
        organization.apply(change);
        self.save(&organization)?;
        Ok(organization)
    }
}

impl<T: ManifestStore + ?Sized> ManifestStore for &T {
    fn load(&self) -> Result<Organization, ManifestError> {
        (**self).load()
    }

    fn save(&self, organization: &Organization) -> Result<(), ManifestError> {
        (**self).save(organization)
    }

    fn apply(&self, change: ManifestChange) -> Result<Organization, ManifestError> {
        (**self).apply(change)
    }
}
