//! Account Use Case
//!
//! Orchestrates account provisioning:
//! 1. Resolve the target OU (a missing OU is a logged no-op)
//! 2. Scan every account page for the alias and check the shared template
//! 3. Submit creation and poll until it completes
//! 4. Move the account from the root into its OU
//! 5. Render the policy template and record the account
//! 6. Deploy the account's policy stack
//!
//! A failed move is not rolled back: the account is recorded at the root and
//! reported as unplaced. Template or manifest failures after creation are
//! reported with the new account id.

use crate::application::hierarchy::{find_parent, resolve_root};
use crate::application::policy::{DeployPolicies, PolicyRequest};
use crate::domain::entities::{Account, ManifestChange, Placement};
use crate::domain::ports::{Clock, Directory, DirectoryNode, ManifestStore, PolicyTemplates};
use crate::domain::services::{CreationPoll, PollState};
use crate::error::{OrgovError, OrgovResult};

use super::options::AccountRequest;
use super::result::AccountOutcome;

pub struct AccountUseCase<D, M, T, C, P>
where
    D: Directory,
    M: ManifestStore,
    T: PolicyTemplates,
    C: Clock,
    P: DeployPolicies,
{
    directory: D,
    manifest: M,
    templates: T,
    clock: C,
    policies: P,
    billing_access: String,
    poll: CreationPoll,
}

impl<D, M, T, C, P> AccountUseCase<D, M, T, C, P>
where
    D: Directory,
    M: ManifestStore,
    T: PolicyTemplates,
    C: Clock,
    P: DeployPolicies,
{
    pub fn new(
        directory: D,
        manifest: M,
        templates: T,
        clock: C,
        policies: P,
        billing_access: impl Into<String>,
    ) -> Self {
        Self {
            directory,
            manifest,
            templates,
            clock,
            policies,
            billing_access: billing_access.into(),
            poll: CreationPoll::new(),
        }
    }

    pub fn execute(&self, request: &AccountRequest) -> OrgovResult<AccountOutcome> {
        let root = resolve_root(&self.directory)?;

        // None keeps the account at the root
        let target = if request.ou.is_empty() {
            None
        } else {
            match find_parent(&self.directory, &root, &request.ou)? {
                Some(node) if node.id == root.id => None,
                Some(node) => Some(node),
                None => {
                    tracing::info!(ou = %request.ou, "organizational unit does not exist, skipping account creation");
                    return Ok(AccountOutcome::SkippedMissingOu {
                        ou: request.ou.clone(),
                    });
                }
            }
        };

        self.ensure_unique_alias(&request.alias)?;
        self.templates.check_source()?;

        let account_id = self.create_and_wait(request)?;
        tracing::info!(alias = %request.alias, account_id = %account_id, "account created");

        let placement_error = match &target {
            Some(ou) => self.move_into(&account_id, &root, ou).err(),
            None => None,
        };
        if let Some(reason) = &placement_error {
            tracing::warn!(alias = %request.alias, ou = %request.ou, %reason, "account left at the organization root");
        }

        let rendered = self.templates.render(&request.alias);
        let mut account = Account::new(&request.alias, &request.email).with_id(account_id.as_str());
        if let Ok(template) = &rendered {
            account = account.with_template(template.clone());
        }

        let placement = match (&target, &placement_error) {
            (Some(ou), None) => Placement::Unit {
                name: ou.name.clone(),
                id: ou.id.clone(),
            },
            _ => Placement::Root,
        };
        self.manifest
            .apply(ManifestChange::NewAccount {
                account: account.clone(),
                placement,
            })
            .map_err(|e| unrecorded(request, &account_id, e.to_string()))?;

        if let Err(e) = rendered {
            return Err(unrecorded(request, &account_id, e.to_string()));
        }

        if let Some(reason) = placement_error {
            return Ok(AccountOutcome::CreatedButUnplaced {
                account,
                ou: request.ou.clone(),
                reason,
            });
        }

        let policies = self.policies.deploy_policies(
            &PolicyRequest::new([request.alias.as_str()]).with_update_groups(request.update_groups),
        )?;

        Ok(AccountOutcome::Created { account, policies })
    }

    fn ensure_unique_alias(&self, alias: &str) -> OrgovResult<()> {
        let mut token: Option<String> = None;
        loop {
            tracing::debug!(token = ?token, "listing accounts");
            let page = self
                .directory
                .list_accounts(token.as_deref())
                .map_err(|e| OrgovError::remote("list-accounts", alias, e))?;
            if page.accounts.iter().any(|a| a.name == alias) {
                return Err(OrgovError::DuplicateAlias {
                    alias: alias.to_string(),
                });
            }
            match page.next_token {
                Some(next) => token = Some(next),
                None => return Ok(()),
            }
        }
    }

    fn create_and_wait(&self, request: &AccountRequest) -> OrgovResult<String> {
        let request_id = self
            .directory
            .create_account(&request.alias, &request.email, &self.billing_access)
            .map_err(|e| OrgovError::remote("create-account", &request.alias, e))?;
        tracing::info!(alias = %request.alias, %request_id, "account creation submitted");

        let state = self
            .poll
            .run(&self.clock, |attempt| {
                tracing::debug!(attempt, %request_id, "checking account creation status");
                self.directory.describe_account_creation(&request_id)
            })
            .map_err(|e| OrgovError::remote("describe-create-account-status", &request.alias, e))?;

        match state {
            PollState::Succeeded { account_id, .. } => Ok(account_id),
            PollState::Failed { reason, .. } => Err(OrgovError::CreationFailed {
                alias: request.alias.clone(),
                reason,
            }),
            PollState::TimedOut { attempts } | PollState::Pending { attempts } => {
                Err(OrgovError::CreationTimeout {
                    alias: request.alias.clone(),
                    request_id,
                    attempts,
                })
            }
        }
    }

    fn move_into(&self, account_id: &str, root: &DirectoryNode, ou: &DirectoryNode) -> Result<(), String> {
        tracing::debug!(account_id, from = %root.id, to = %ou.id, "moving account");
        self.directory
            .move_account(account_id, &root.id, &ou.id)
            .map_err(|e| e.to_string())
    }
}

fn unrecorded(request: &AccountRequest, account_id: &str, reason: String) -> OrgovError {
    tracing::error!(alias = %request.alias, account_id, %reason, "account created but not fully recorded");
    OrgovError::RecordingFailed {
        alias: request.alias.clone(),
        account_id: account_id.to_string(),
        reason,
    }
}
