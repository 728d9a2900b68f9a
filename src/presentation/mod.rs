//! Presentation Layer
//!
//! This layer handles:
//! - Creating use cases with infrastructure dependencies
//! - Output formatting
//!
//! ## Structure
//!
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `output` - Human summaries of command results
//!
//! ## Usage
//!
//! ```ignore
//! use orgov::presentation::factory;
//!
//! let use_case = factory::create_policy_use_case(&config)?;
//! let report = use_case.execute(&PolicyRequest::new(["team-x"]))?;
//! ```

pub mod factory;
pub mod output;

pub use factory::{
    create_account_use_case, create_organization_use_case, create_ou_use_case,
    create_policy_use_case,
};
pub use output::TextRenderer;
