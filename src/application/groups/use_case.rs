//! Group Parameters Use Case
//!
//! Merges collected exports into the shared identity account's policy stack
//! and updates that stack in place, without a change set.

use crate::application::policy::PolicySettings;
use crate::application::publish::TemplatePublisher;
use crate::domain::ports::{
    ManifestStore, ObjectStore, PolicyTemplates, RemoteErrorKind, StackConnector,
    StackDeployment,
};
use crate::domain::services::merge_parameters;
use crate::domain::value_objects::{
    access_role_arn, ExportedParameters, PolicyStackName, StackOperation,
};
use crate::error::{OrgovError, OrgovResult};

/// Result of one group stack refresh
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupReport {
    pub stack: String,
    /// Parameter keys that received exported values
    pub merged_keys: Vec<String>,
}

pub trait MergeGroupParameters {
    fn merge_group_parameters(&self, exports: &ExportedParameters) -> OrgovResult<GroupReport>;
}

impl<T: MergeGroupParameters + ?Sized> MergeGroupParameters for &T {
    fn merge_group_parameters(&self, exports: &ExportedParameters) -> OrgovResult<GroupReport> {
        (**self).merge_group_parameters(exports)
    }
}

fn aggregation_failed(reason: impl Into<String>) -> OrgovError {
    OrgovError::AggregationFailed {
        reason: reason.into(),
    }
}

pub struct GroupParametersUseCase<M, O, T, S>
where
    M: ManifestStore,
    O: ObjectStore,
    T: PolicyTemplates,
    S: StackConnector,
{
    manifest: M,
    publisher: TemplatePublisher<O, T>,
    connector: S,
    settings: PolicySettings,
}

impl<M, O, T, S> GroupParametersUseCase<M, O, T, S>
where
    M: ManifestStore,
    O: ObjectStore,
    T: PolicyTemplates,
    S: StackConnector,
{
    pub fn new(manifest: M, objects: O, templates: T, connector: S, settings: PolicySettings) -> Self {
        let publisher = TemplatePublisher::new(
            objects,
            templates,
            settings.bucket.clone(),
            settings.region.clone(),
        );
        Self {
            manifest,
            publisher,
            connector,
            settings,
        }
    }

    pub fn execute(&self, exports: &ExportedParameters) -> OrgovResult<GroupReport> {
        let organization = self.manifest.load()?;
        let alias = &self.settings.identity_alias;
        let account = organization
            .find_account(alias)
            .ok_or_else(|| OrgovError::UnknownAccount {
                alias: alias.clone(),
            })?;

        let stack = PolicyStackName::for_alias(&account.alias);
        tracing::info!(stack = %stack, exports = exports.len(), "merging group parameters");

        let role = access_role_arn(&account.id, &self.settings.access_role);
        let stacks = self
            .connector
            .connect(&role)
            .map_err(|e| aggregation_failed(e.message))?;

        let current = stacks
            .describe_stack(stack.as_str())
            .map_err(|e| aggregation_failed(e.message))?
            .ok_or_else(|| aggregation_failed(format!("stack {stack} does not exist")))?;

        let merged = merge_parameters(&current.parameters, exports);
        tracing::debug!(keys = ?merged.merged_keys, "merged parameter keys");

        let template_url = self
            .publisher
            .publish(account, &stack)
            .map_err(|e| aggregation_failed(e.to_string()))?;

        match stacks.update_stack(stack.as_str(), &template_url, &merged.parameters) {
            Ok(()) => {
                stacks
                    .wait_for_stack(stack.as_str(), StackOperation::Update)
                    .map_err(|e| aggregation_failed(e.message))?;
                tracing::info!(stack = %stack, "group parameters updated");
            }
            Err(e) if e.is(RemoteErrorKind::NoChanges) => {
                tracing::info!(stack = %stack, "group parameters already up to date");
            }
            Err(e) => return Err(aggregation_failed(e.message)),
        }

        Ok(GroupReport {
            stack: stack.to_string(),
            merged_keys: merged.merged_keys,
        })
    }
}

impl<M, O, T, S> MergeGroupParameters for GroupParametersUseCase<M, O, T, S>
where
    M: ManifestStore,
    O: ObjectStore,
    T: PolicyTemplates,
    S: StackConnector,
{
    fn merge_group_parameters(&self, exports: &ExportedParameters) -> OrgovResult<GroupReport> {
        self.execute(exports)
    }
}
