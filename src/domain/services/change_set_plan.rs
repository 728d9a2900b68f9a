//! Decide how to stage a change set from the stack's current state

use crate::domain::value_objects::{ChangeSetType, StackStatus};

/// Absent stack creates, a settled complete stack updates, anything else is
/// busy and handed back as the error.
pub fn select_change_set_type(current: Option<&StackStatus>) -> Result<ChangeSetType, StackStatus> {
    match current {
        None => Ok(ChangeSetType::Create),
        Some(status) if status.is_settled_complete() => Ok(ChangeSetType::Update),
        Some(status) => Err(status.clone()),
    }
}
