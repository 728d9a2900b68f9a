//! orgov - AWS Organizations governor
//!
//! Reconciles a multi-account organization with a declarative YAML manifest:
//! organizational units, member accounts with completion polling, and
//! per-account policy stacks deployed through change sets whose exports feed a
//! shared group stack.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use config::Config;
pub use error::{OrgovError, OrgovResult};
