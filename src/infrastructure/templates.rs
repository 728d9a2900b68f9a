//! File-backed policy templates
//!
//! Each account gets a copy of the shared template named after its policy
//! stack, e.g. `policies/Team-X-Policies`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::ports::{PolicyTemplates, TemplateError};
use crate::domain::value_objects::PolicyStackName;

pub struct FsPolicyTemplates {
    source: PathBuf,
    output_dir: PathBuf,
}

impl FsPolicyTemplates {
    pub fn new(source: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            output_dir: output_dir.into(),
        }
    }

    /// Where an alias's rendered template lives
    pub fn rendered_path(&self, alias: &str) -> PathBuf {
        self.output_dir
            .join(PolicyStackName::for_alias(alias).template_key())
    }
}

impl PolicyTemplates for FsPolicyTemplates {
    fn check_source(&self) -> Result<(), TemplateError> {
        fs::File::open(&self.source)
            .map(drop)
            .map_err(|source| TemplateError::Read {
                path: self.source.clone(),
                source,
            })
    }

    fn render(&self, alias: &str) -> Result<PathBuf, TemplateError> {
        let destination = self.rendered_path(alias);

        let body = fs::read(&self.source).map_err(|source| TemplateError::Read {
            path: self.source.clone(),
            source,
        })?;

        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent).map_err(|source| TemplateError::Write {
                path: destination.clone(),
                source,
            })?;
        }
        fs::write(&destination, body).map_err(|source| TemplateError::Write {
            path: destination.clone(),
            source,
        })?;

        tracing::debug!(alias, path = %destination.display(), "policy template rendered");
        Ok(destination)
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>, TemplateError> {
        fs::read(path).map_err(|source| TemplateError::Read {
            path: path.to_path_buf(),
            source,
        })
    }
}
