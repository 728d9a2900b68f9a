//! Error types for orgov
//!
//! Library code returns [`OrgovError`]; the binary wraps it with `anyhow`
//! context at the command layer.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::{ManifestError, RemoteError, TemplateError};

/// Result type alias for orgov operations
pub type OrgovResult<T> = Result<T, OrgovError>;

/// Main error type for reconciliation and deployment
#[derive(Error, Debug)]
pub enum OrgovError {
    /// Parent of a new organizational unit is not the root
    #[error("parent '{name}' is not the organization root; units are created directly under the root")]
    ParentNotFound { name: String },

    /// Alias already used by an account somewhere in the organization
    #[error("account '{alias}' already exists, try another name")]
    DuplicateAlias { alias: String },

    /// Provider reported the account creation as failed
    #[error("account '{alias}' creation failed: {reason}")]
    CreationFailed { alias: String, reason: String },

    /// Completion polling ran out of attempts while still in progress
    #[error(
        "account '{alias}' creation did not complete after {attempts} checks; verify request {request_id} manually"
    )]
    CreationTimeout {
        alias: String,
        request_id: String,
        attempts: u32,
    },

    /// Account was created at the root but could not be moved into its OU
    #[error(
        "account '{alias}' ({account_id}) was created but not moved to organizational unit '{ou}': {reason}"
    )]
    PlacementFailed {
        alias: String,
        account_id: String,
        ou: String,
        reason: String,
    },

    /// Account exists remotely but its template or manifest entry could not be written
    #[error(
        "account '{alias}' ({account_id}) was created but could not be recorded, add it to the manifest manually: {reason}"
    )]
    RecordingFailed {
        alias: String,
        account_id: String,
        reason: String,
    },

    /// Stack exists in a state that accepts neither CREATE nor UPDATE
    #[error("stack {stack} is busy with status {status}")]
    StackBusy { stack: String, status: String },

    /// Change set reached a failed state for a reason other than "no changes"
    #[error("change set for stack {stack} failed: {reason}")]
    ChangeSetFailed { stack: String, reason: String },

    /// Change set execution or the following stack operation failed
    #[error("stack {stack} {operation} failed, inspect the stack manually: {reason}")]
    ExecutionFailed {
        stack: String,
        operation: String,
        reason: String,
    },

    /// Shared group parameter update failed
    #[error("group parameter update failed: {reason}")]
    AggregationFailed { reason: String },

    /// Alias is not recorded in the manifest
    #[error("account '{alias}' is not recorded in the manifest")]
    UnknownAccount { alias: String },

    /// Directory reported no organization root
    #[error("organization has no root; run create-organization first")]
    NoRoot,

    /// A capability call failed
    #[error("{operation} failed for {target}: {source}")]
    Remote {
        operation: &'static str,
        target: String,
        #[source]
        source: RemoteError,
    },

    #[error(transparent)]
    Manifest(#[from] ManifestError),

    #[error(transparent)]
    Template(#[from] TemplateError),

    /// Invalid or unreadable configuration
    #[error("invalid configuration in {file}: {message}")]
    Config { file: PathBuf, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl OrgovError {
    /// Wrap a capability error with the operation and the name it concerned
    pub fn remote(operation: &'static str, target: impl Into<String>, source: RemoteError) -> Self {
        OrgovError::Remote {
            operation,
            target: target.into(),
            source,
        }
    }
}
