//! Policy Deploy Use Case
//!
//! Per account, in request order:
//! 1. Publish the rendered template
//! 2. Pick CREATE or UPDATE from the current stack
//! 3. Stage the change set and wait for it
//! 4. Stop early when the change set has nothing to apply
//! 5. Execute and wait for the stack operation
//! 6. Collect the stack's exports
//!
//! The first failure aborts the run. When requested, the collected exports
//! are merged into the shared group stack at the end.

use crate::application::groups::MergeGroupParameters;
use crate::application::publish::TemplatePublisher;
use crate::domain::entities::{Account, Organization};
use crate::domain::ports::{
    ChangeSetRequest, ManifestStore, ObjectStore, PolicyTemplates, StackConnector,
    StackDeployment,
};
use crate::domain::services::select_change_set_type;
use crate::domain::value_objects::{
    access_role_arn, change_set_name, ChangeSetFailure, ChangeSetStatus, ChangeSetType,
    ExportedParameters, PolicyStackName, StackParameter,
};
use crate::error::{OrgovError, OrgovResult};

use super::options::{PolicyRequest, PolicySettings};
use super::result::{PolicyReport, StackOutcome, StackReport};

/// Anything able to deploy policy stacks for a set of accounts
pub trait DeployPolicies {
    fn deploy_policies(&self, request: &PolicyRequest) -> OrgovResult<PolicyReport>;
}

impl<T: DeployPolicies + ?Sized> DeployPolicies for &T {
    fn deploy_policies(&self, request: &PolicyRequest) -> OrgovResult<PolicyReport> {
        (**self).deploy_policies(request)
    }
}

/// Policy stack deployer
pub struct PolicyUseCase<M, O, T, S, G>
where
    M: ManifestStore,
    O: ObjectStore,
    T: PolicyTemplates,
    S: StackConnector,
    G: MergeGroupParameters,
{
    manifest: M,
    publisher: TemplatePublisher<O, T>,
    connector: S,
    groups: G,
    settings: PolicySettings,
}

impl<M, O, T, S, G> PolicyUseCase<M, O, T, S, G>
where
    M: ManifestStore,
    O: ObjectStore,
    T: PolicyTemplates,
    S: StackConnector,
    G: MergeGroupParameters,
{
    pub fn new(
        manifest: M,
        objects: O,
        templates: T,
        connector: S,
        groups: G,
        settings: PolicySettings,
    ) -> Self {
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
            groups,
            settings,
        }
    }

    /// Deploy every requested account, then optionally refresh the groups
    pub fn execute(&self, request: &PolicyRequest) -> OrgovResult<PolicyReport> {
        let organization = self.manifest.load()?;
        let parameters = self.account_parameters(&organization);

        let mut report = PolicyReport::new();
        for alias in &request.aliases {
            let account = organization
                .find_account(alias)
                .ok_or_else(|| OrgovError::UnknownAccount {
                    alias: alias.clone(),
                })?;
            let stack = self.deploy_account(account, &parameters, &mut report.exports)?;
            report.stacks.push(stack);
        }

        if request.update_groups {
            report.groups = Some(self.groups.merge_group_parameters(&report.exports)?);
        }

        Ok(report)
    }

    fn account_parameters(&self, organization: &Organization) -> Vec<StackParameter> {
        let identity_id = self.well_known_id(organization, &self.settings.identity_alias);
        let production_id = self.well_known_id(organization, &self.settings.production_alias);
        self.settings
            .account_parameters(&identity_id, &production_id)
    }

    fn well_known_id(&self, organization: &Organization, alias: &str) -> String {
        match organization.find_account(alias) {
            Some(account) => account.id.clone(),
            None => {
                tracing::warn!(alias, "well-known account is not in the manifest, passing an empty id");
                String::new()
            }
        }
    }

    fn deploy_account(
        &self,
        account: &Account,
        parameters: &[StackParameter],
        exports: &mut ExportedParameters,
    ) -> OrgovResult<StackReport> {
        let stack = PolicyStackName::for_alias(&account.alias);
        tracing::info!(alias = %account.alias, stack = %stack, "updating policy stack");

        let template_url = self.publisher.publish(account, &stack)?;

        let role = access_role_arn(&account.id, &self.settings.access_role);
        let stacks = self
            .connector
            .connect(&role)
            .map_err(|e| OrgovError::remote("assume-role", &account.alias, e))?;

        let current = stacks
            .describe_stack(stack.as_str())
            .map_err(|e| OrgovError::remote("describe-stacks", stack.as_str(), e))?;
        let change_set_type = select_change_set_type(current.as_ref().map(|s| &s.status))
            .map_err(|status| OrgovError::StackBusy {
                stack: stack.to_string(),
                status: status.to_string(),
            })?;

        let request = ChangeSetRequest {
            stack_name: stack.to_string(),
            change_set_name: change_set_name(),
            template_url,
            parameters: parameters.to_vec(),
            change_set_type,
        };
        tracing::debug!(change_set = %request.change_set_name, kind = %change_set_type, "creating change set");
        let change_set_id = stacks
            .create_change_set(&request)
            .map_err(|e| OrgovError::remote("create-change-set", stack.as_str(), e))?;

        tracing::info!("waiting for change set creation to complete");
        let waited = stacks.wait_for_change_set(&change_set_id);
        let description = stacks
            .describe_change_set(&change_set_id)
            .map_err(|e| OrgovError::remote("describe-change-set", stack.as_str(), e))?;

        match description.status {
            ChangeSetStatus::Ready => {
                if let Err(err) = waited {
                    tracing::debug!(error = %err, "change set wait reported an error but the change set is ready");
                }
            }
            ChangeSetStatus::Failed(ChangeSetFailure::NoChanges) => {
                tracing::info!(stack = %stack, "no changes detected");
                return Ok(StackReport {
                    alias: account.alias.clone(),
                    stack: stack.to_string(),
                    outcome: StackOutcome::Unchanged,
                });
            }
            ChangeSetStatus::Failed(ChangeSetFailure::Other(reason)) => {
                return Err(OrgovError::ChangeSetFailed {
                    stack: stack.to_string(),
                    reason,
                });
            }
            ChangeSetStatus::Pending => {
                let reason = match waited {
                    Err(err) => err.to_string(),
                    Ok(()) => "change set creation did not finish".to_string(),
                };
                return Err(OrgovError::ChangeSetFailed {
                    stack: stack.to_string(),
                    reason,
                });
            }
        }

        tracing::info!("executing change set");
        stacks
            .execute_change_set(&change_set_id)
            .map_err(|e| OrgovError::ExecutionFailed {
                stack: stack.to_string(),
                operation: "change set execution".to_string(),
                reason: e.to_string(),
            })?;

        let operation = change_set_type.operation();
        stacks
            .wait_for_stack(stack.as_str(), operation)
            .map_err(|e| OrgovError::ExecutionFailed {
                stack: stack.to_string(),
                operation: operation.to_string(),
                reason: e.to_string(),
            })?;

        let outcome = match change_set_type {
            ChangeSetType::Create => StackOutcome::Created,
            ChangeSetType::Update => StackOutcome::Updated,
        };
        tracing::info!(stack = %stack, %outcome, "stack deployed");

        let deployed = stacks
            .describe_stack(stack.as_str())
            .map_err(|e| OrgovError::remote("describe-stacks", stack.as_str(), e))?
            .ok_or_else(|| OrgovError::ExecutionFailed {
                stack: stack.to_string(),
                operation: operation.to_string(),
                reason: "stack no longer exists".to_string(),
            })?;
        for output in deployed.outputs {
            if let Some(export_name) = output.export_name {
                exports.record(export_name, output.value);
            }
        }

        Ok(StackReport {
            alias: account.alias.clone(),
            stack: stack.to_string(),
            outcome,
        })
    }
}

impl<M, O, T, S, G> DeployPolicies for PolicyUseCase<M, O, T, S, G>
where
    M: ManifestStore,
    O: ObjectStore,
    T: PolicyTemplates,
    S: StackConnector,
    G: MergeGroupParameters,
{
    fn deploy_policies(&self, request: &PolicyRequest) -> OrgovResult<PolicyReport> {
        self.execute(request)
    }
}
