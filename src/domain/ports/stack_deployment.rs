//! StackDeployment port - per-account infrastructure stacks
//!
//! A [`StackConnector`] hands out a [`StackDeployment`] acting inside one
//! target account through an assumed role.

use super::remote::RemoteResult;
use crate::domain::value_objects::{
    ChangeSetStatus, ChangeSetType, StackOperation, StackOutput, StackParameter, StackStatus,
};

/// Current state of a deployed stack
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackDescription {
    pub name: String,
    pub status: StackStatus,
    pub parameters: Vec<StackParameter>,
    pub outputs: Vec<StackOutput>,
}

/// Everything needed to stage one change set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeSetRequest {
    pub stack_name: String,
    pub change_set_name: String,
    pub template_url: String,
    pub parameters: Vec<StackParameter>,
    pub change_set_type: ChangeSetType,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeSetDescription {
    pub id: String,
    pub status: ChangeSetStatus,
}

pub trait StackDeployment {
    /// Describe a stack; `Ok(None)` when it does not exist
    fn describe_stack(&self, name: &str) -> RemoteResult<Option<StackDescription>>;

    /// Stage a change set, returning its id
    fn create_change_set(&self, request: &ChangeSetRequest) -> RemoteResult<String>;

    /// Block until change set creation reaches a terminal state
    fn wait_for_change_set(&self, change_set_id: &str) -> RemoteResult<()>;

    fn describe_change_set(&self, change_set_id: &str) -> RemoteResult<ChangeSetDescription>;

    fn execute_change_set(&self, change_set_id: &str) -> RemoteResult<()>;

    /// Block until the stack finishes the given operation
    fn wait_for_stack(&self, name: &str, operation: StackOperation) -> RemoteResult<()>;

    /// Update a stack in place without staging a change set
    fn update_stack(
        &self,
        name: &str,
        template_url: &str,
        parameters: &[StackParameter],
    ) -> RemoteResult<()>;
}

/// Opens stack sessions inside member accounts
pub trait StackConnector {
    type Stacks: StackDeployment;

    fn connect(&self, role_arn: &str) -> RemoteResult<Self::Stacks>;
}

impl<T: StackConnector + ?Sized> StackConnector for &T {
    type Stacks = T::Stacks;

    fn connect(&self, role_arn: &str) -> RemoteResult<Self::Stacks> {
        (**self).connect(role_arn)
    }
}
