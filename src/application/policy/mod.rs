//! Policy Use Case
//!
//! Deploys each account's policy stack through a staged change set and
//! collects the stack exports for the group parameter merge.

mod options;
mod result;
mod use_case;


pub use options::{PolicyRequest, PolicySettings};
pub use result::{PolicyReport, StackOutcome, StackReport};
pub use use_case::{DeployPolicies, PolicyUseCase};
