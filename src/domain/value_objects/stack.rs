//! Stack and change set value objects

use std::fmt;

/// Remote stack status as reported by the deployment service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackStatus(String);

impl StackStatus {
    pub fn new(status: impl Into<String>) -> Self {
        Self(status.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_in_progress(&self) -> bool {
        self.0.contains("PROGRESS")
    }

    /// Settled in a completed state, so a new change set may be staged
    pub fn is_settled_complete(&self) -> bool {
        self.0.contains("COMPLETE") && !self.is_in_progress()
    }
}

impl fmt::Display for StackStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Kind of change set, which also decides the stack operation to wait for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeSetType {
    Create,
    Update,
}

impl ChangeSetType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeSetType::Create => "CREATE",
            ChangeSetType::Update => "UPDATE",
        }
    }

    pub fn operation(&self) -> StackOperation {
        match self {
            ChangeSetType::Create => StackOperation::Create,
            ChangeSetType::Update => StackOperation::Update,
        }
    }
}

impl fmt::Display for ChangeSetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stack operation a caller can wait on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackOperation {
    Create,
    Update,
}

impl fmt::Display for StackOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StackOperation::Create => write!(f, "create"),
            StackOperation::Update => write!(f, "update"),
        }
    }
}

/// Why a change set failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeSetFailure {
    /// Nothing differs between the template and the deployed stack
    NoChanges,
    Other(String),
}

/// Terminal or pending state of a change set
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeSetStatus {
    Pending,
    Ready,
    Failed(ChangeSetFailure),
}

/// One stack parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackParameter {
    pub key: String,
    pub value: String,
}

impl StackParameter {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// One stack output; only exported outputs carry an export name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackOutput {
    pub key: String,
    pub value: String,
    pub export_name: Option<String>,
}
