//! Value Objects
//!
//! Immutable types with no identity of their own.

mod exports;
pub mod naming;
mod stack;

pub use exports::ExportedParameters;
pub use naming::{access_role_arn, change_set_name, template_url, title_case, PolicyStackName};
pub use stack::{
    ChangeSetFailure, ChangeSetStatus, ChangeSetType, StackOperation, StackOutput,
    StackParameter, StackStatus,
};
