//! OU Use Case
//!
//! Ensures an organizational unit exists under a named parent:
//! 1. Resolve the root, which is the only valid parent
//! 2. Return the existing OU when one with the same name is already there
//! 3. Otherwise create it and record it in the manifest

use crate::application::hierarchy::{find_child_ou, resolve_root};
use crate::domain::entities::{ManifestChange, OrganizationalUnit};
use crate::domain::ports::{Directory, ManifestStore};
use crate::error::{OrgovError, OrgovResult};

/// What ensuring an OU did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OuOutcome {
    Created { id: String },
    /// Already present under the parent; nothing was created
    Existing { id: String },
}

impl OuOutcome {
    pub fn id(&self) -> &str {
        match self {
            OuOutcome::Created { id } | OuOutcome::Existing { id } => id,
        }
    }
}

pub struct OuUseCase<D, M>
where
    D: Directory,
    M: ManifestStore,
{
    directory: D,
    manifest: M,
}

impl<D, M> OuUseCase<D, M>
where
    D: Directory,
    M: ManifestStore,
{
    pub fn new(directory: D, manifest: M) -> Self {
        Self {
            directory,
            manifest,
        }
    }

    /// Ensure `name` exists under `parent`
    ///
    /// Units live directly under the root, so `parent` must be empty or the
    /// root's name.
    pub fn ensure(&self, name: &str, parent: &str) -> OrgovResult<OuOutcome> {
        let root = resolve_root(&self.directory)?;
        if !(parent.is_empty() || parent == root.name) {
            return Err(OrgovError::ParentNotFound {
                name: parent.to_string(),
            });
        }

        if let Some(existing) = find_child_ou(&self.directory, &root.id, name)? {
            tracing::info!(ou = name, id = %existing.id, "organizational unit already exists");
            return Ok(OuOutcome::Existing { id: existing.id });
        }

        tracing::debug!(ou = name, parent_id = %root.id, "creating organizational unit");
        let id = self
            .directory
            .create_ou(name, &root.id)
            .map_err(|e| OrgovError::remote("create-organizational-unit", name, e))?;
        tracing::info!(ou = name, %id, "organizational unit created");

        self.manifest.apply(ManifestChange::NewOu(
            OrganizationalUnit::new(name, "").with_id(id.as_str()),
        ))?;

        Ok(OuOutcome::Created { id })
    }
}
