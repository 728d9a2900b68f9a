//! Account Module
//!
//! Creates a member account, waits for the creation to complete, places it
//! in its OU, records it and deploys its policies.
//!
//! ## Structure
//!
//! - `options` - Request type (`AccountRequest`)
//! - `result` - Outcome type (`AccountOutcome`)
//! - `use_case` - Provisioning flow (`AccountUseCase`)

mod options;
mod result;
mod use_case;

pub use options::AccountRequest;
pub use result::AccountOutcome;
pub use use_case::AccountUseCase;
