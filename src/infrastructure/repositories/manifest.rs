//! YAML Manifest Repository
//!
//! Persists the organization tree at `organization.yaml` (configurable).
//! Every mutation holds an exclusive lock on a sibling `.lock` file and
//! replaces the manifest atomically.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::domain::entities::{Account, ManifestChange, Organization, OrganizationalUnit};
use crate::domain::ports::{ManifestError, ManifestStore};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct YamlAccount {
    #[serde(default)]
    id: String,
    alias: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    template: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct YamlOrganizationalUnit {
    #[serde(default)]
    id: String,
    name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    parent: String,
    #[serde(default)]
    accounts: Vec<YamlAccount>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct YamlOrganization {
    #[serde(rename = "organizationalunits", default)]
    organizational_units: Vec<YamlOrganizationalUnit>,
    /// Accounts kept at the root
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    accounts: Vec<YamlAccount>,
}

pub struct YamlManifestStore {
    path: PathBuf,
}

impl YamlManifestStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock_path(&self) -> PathBuf {
        self.path.with_extension("lock")
    }

    fn directory(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    fn access_error(&self, e: impl ToString) -> ManifestError {
        ManifestError::AccessError {
            path: self.path.clone(),
            message: e.to_string(),
        }
    }

    /// Run `f` while holding the manifest lock
    fn with_lock<R>(
        &self,
        f: impl FnOnce() -> Result<R, ManifestError>,
    ) -> Result<R, ManifestError> {
        fs::create_dir_all(self.directory()).map_err(|e| self.access_error(e))?;

        let lock_file = fs::File::create(self.lock_path()).map_err(|e| self.access_error(e))?;
        lock_file
            .lock_exclusive()
            .map_err(|e| self.access_error(e))?;

        let result = f();

        let _ = lock_file.unlock();
        result
    }

    fn load_from_disk(&self) -> Result<Organization, ManifestError> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "manifest missing, starting empty");
            return Ok(Organization::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| self.access_error(e))?;
        if content.trim().is_empty() {
            return Ok(Organization::new());
        }

        let yaml: YamlOrganization =
            serde_yaml_ng::from_str(&content).map_err(|e| ManifestError::Corrupted {
                path: self.path.clone(),
                message: e.to_string(),
            })?;

        Ok(from_yaml(yaml))
    }

    fn save_to_disk(&self, organization: &Organization) -> Result<(), ManifestError> {
        let content = serde_yaml_ng::to_string(&to_yaml(organization)).map_err(|e| {
            ManifestError::SerializationError {
                message: e.to_string(),
            }
        })?;

        let mut staged = NamedTempFile::new_in(self.directory()).map_err(|e| self.access_error(e))?;
        staged
            .write_all(content.as_bytes())
            .map_err(|e| self.access_error(e))?;
        staged
            .persist(&self.path)
            .map_err(|e| self.access_error(e.error))?;

        tracing::debug!(path = %self.path.display(), "manifest written");
        Ok(())
    }
}

impl ManifestStore for YamlManifestStore {
    fn load(&self) -> Result<Organization, ManifestError> {
        self.load_from_disk()
    }

    fn save(&self, organization: &Organization) -> Result<(), ManifestError> {
        self.with_lock(|| self.save_to_disk(organization))
    }

    fn apply(&self, change: ManifestChange) -> Result<Organization, ManifestError> {
        self.with_lock(|| {
            let mut organization = self.load_from_disk()?;
            organization.apply(change);
            self.save_to_disk(&organization)?;
            Ok(organization)
        })
    }
}

fn account_from_yaml(account: YamlAccount) -> Account {
    Account {
        id: account.id,
        alias: account.alias,
        email: account.email,
        template: account.template,
    }
}

fn account_to_yaml(account: &Account) -> YamlAccount {
    YamlAccount {
        id: account.id.clone(),
        alias: account.alias.clone(),
        email: account.email.clone(),
        template: account.template.clone(),
    }
}

fn from_yaml(yaml: YamlOrganization) -> Organization {
    Organization {
        organizational_units: yaml
            .organizational_units
            .into_iter()
            .map(|ou| OrganizationalUnit {
                id: ou.id,
                name: ou.name,
                parent: ou.parent,
                accounts: ou.accounts.into_iter().map(account_from_yaml).collect(),
            })
            .collect(),
        accounts: yaml.accounts.into_iter().map(account_from_yaml).collect(),
    }
}

fn to_yaml(organization: &Organization) -> YamlOrganization {
    YamlOrganization {
        organizational_units: organization
            .organizational_units
            .iter()
            .map(|ou| YamlOrganizationalUnit {
                id: ou.id.clone(),
                name: ou.name.clone(),
                parent: ou.parent.clone(),
                accounts: ou.accounts.iter().map(account_to_yaml).collect(),
            })
            .collect(),
        accounts: organization.accounts.iter().map(account_to_yaml).collect(),
    }
}
