//! Domain Services
//!
//! Stateless logic shared by the use cases.

mod change_set_plan;
mod creation_poll;
mod parameter_merge;

pub use change_set_plan::select_change_set_type;
pub use creation_poll::{CreationPoll, PollState, CREATION_POLL_ATTEMPTS, CREATION_POLL_INTERVAL};
pub use parameter_merge::{dedup_preserving_order, merge_parameters, merge_values, MergedParameters};
