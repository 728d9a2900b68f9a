//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `aws/` - Directory, object store and stack adapters over the AWS CLI
//! - `repositories/` - Manifest persistence
//! - `templates` - Policy template files
//! - `clock` - Wall-clock sleeping

pub mod aws;
mod clock;
pub mod repositories;
mod templates;

// Re-export for convenience
pub use aws::{AwsCli, AwsDirectory, AwsObjectStore, AwsStackConnector};
pub use clock::SystemClock;
pub use repositories::YamlManifestStore;
pub use templates::FsPolicyTemplates;
