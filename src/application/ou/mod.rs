//! OU Module
//!
//! Idempotent organizational unit provisioning.

mod use_case;

pub use use_case::{OuOutcome, OuUseCase};
