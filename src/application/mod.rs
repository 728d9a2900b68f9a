//! Application Layer
//!
//! Use cases that orchestrate the reconciliation flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `OuUseCase` - Idempotent organizational unit creation
//! - `AccountUseCase` - Account creation, placement and first policy deploy
//! - `PolicyUseCase` - Per-account policy stacks through change sets
//! - `GroupParametersUseCase` - Merge exports into the shared group stack
//! - `OrganizationUseCase` - Create the organization itself

pub mod account;
pub mod groups;
mod hierarchy;
pub mod organization;
pub mod ou;
pub mod policy;
mod publish;

#[cfg(test)]
pub(crate) mod test_support;

pub use account::{AccountOutcome, AccountRequest, AccountUseCase};
pub use groups::{GroupParametersUseCase, GroupReport, MergeGroupParameters};
pub use organization::OrganizationUseCase;
pub use ou::{OuOutcome, OuUseCase};
pub use policy::{
    DeployPolicies, PolicyReport, PolicyRequest, PolicySettings, PolicyUseCase, StackOutcome,
    StackReport,
};
