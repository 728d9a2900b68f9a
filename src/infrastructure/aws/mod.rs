//! AWS adapters
//!
//! Directory, object store and stack ports implemented by driving the `aws`
//! command line tool.

mod cli;
mod cloudformation;
mod error;
mod organizations;
mod s3;

pub use cli::{AwsCli, SessionCredentials};
pub use cloudformation::{AwsStackConnector, AwsStacks};
pub use error::classify;
pub use organizations::AwsDirectory;
pub use s3::AwsObjectStore;
