//! Policy Result
//!
//! Result types for policy deployment.

use std::fmt;

use crate::application::groups::GroupReport;
use crate::domain::value_objects::ExportedParameters;

/// What happened to one account's policy stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackOutcome {
    Created,
    Updated,
    /// Change set had nothing to apply
    Unchanged,
}

impl fmt::Display for StackOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StackOutcome::Created => write!(f, "created"),
            StackOutcome::Updated => write!(f, "updated"),
            StackOutcome::Unchanged => write!(f, "unchanged"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackReport {
    pub alias: String,
    pub stack: String,
    pub outcome: StackOutcome,
}

/// Result of a policy deployment run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PolicyReport {
    pub stacks: Vec<StackReport>,
    /// Exports gathered from every deployed stack
    pub exports: ExportedParameters,
    /// Present when the group stack was refreshed
    pub groups: Option<GroupReport>,
}

impl PolicyReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_changes(&self) -> bool {
        self.stacks
            .iter()
            .any(|s| s.outcome != StackOutcome::Unchanged)
            || self.groups.is_some()
    }
}
