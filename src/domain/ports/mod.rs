//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod clock;
pub mod directory;
pub mod manifest_store;
pub mod object_store;
pub mod policy_templates;
pub mod remote;
pub mod stack_deployment;

pub use clock::Clock;
pub use directory::{AccountPage, AccountSummary, CreationStatus, Directory, DirectoryNode};
pub use manifest_store::{ManifestError, ManifestStore};
pub use object_store::ObjectStore;
pub use policy_templates::{PolicyTemplates, TemplateError};
pub use remote::{RemoteError, RemoteErrorKind, RemoteResult};
pub use stack_deployment::{
    ChangeSetDescription, ChangeSetRequest, StackConnector, StackDeployment, StackDescription,
};
