//! PolicyTemplates port - per-account policy template files

use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("failed to read policy template {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write policy template {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub trait PolicyTemplates {
    /// Fail when the shared template cannot be read
    fn check_source(&self) -> Result<(), TemplateError>;

    /// Render the shared template for an account, returning the rendered path
    fn render(&self, alias: &str) -> Result<PathBuf, TemplateError>;

    fn read(&self, path: &Path) -> Result<Vec<u8>, TemplateError>;
}

impl<T: PolicyTemplates + ?Sized> PolicyTemplates for &T {
    fn check_source(&self) -> Result<(), TemplateError> {
        (**self).check_source()
    }

    fn render(&self, alias: &str) -> Result<PathBuf, TemplateError> {
        (**self).render(alias)
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>, TemplateError> {
        (**self).read(path)
    }
}
