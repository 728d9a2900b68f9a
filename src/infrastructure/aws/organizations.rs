//! Directory over `aws organizations`

use serde::Deserialize;

use super::cli::AwsCli;
use crate::domain::ports::{
    AccountPage, AccountSummary, CreationStatus, Directory, DirectoryNode, RemoteError,
    RemoteErrorKind, RemoteResult,
};

/// Accounts requested per listing page
const ACCOUNT_PAGE_SIZE: &str = "20";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Node {
    id: String,
    #[serde(default)]
    name: String,
}

impl From<Node> for DirectoryNode {
    fn from(node: Node) -> Self {
        DirectoryNode::new(node.id, node.name)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ListRootsOutput {
    #[serde(default)]
    roots: Vec<Node>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ListUnitsOutput {
    #[serde(default)]
    organizational_units: Vec<Node>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct AccountEntry {
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ListAccountsOutput {
    #[serde(default)]
    accounts: Vec<AccountEntry>,
    next_token: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct CreateUnitOutput {
    organizational_unit: Node,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct CreateAccountStatus {
    id: String,
    state: String,
    account_id: Option<String>,
    failure_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct CreateAccountOutput {
    create_account_status: CreateAccountStatus,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct CreateOrganizationOutput {
    organization: Node,
}

fn creation_status(status: CreateAccountStatus) -> RemoteResult<CreationStatus> {
    match status.state.as_str() {
        "IN_PROGRESS" => Ok(CreationStatus::InProgress),
        "SUCCEEDED" => status
            .account_id
            .map(|account_id| CreationStatus::Succeeded { account_id })
            .ok_or_else(|| {
                RemoteError::transport(format!(
                    "creation request {} succeeded without an account id",
                    status.id
                ))
            }),
        "FAILED" => Ok(CreationStatus::Failed {
            reason: status
                .failure_reason
                .unwrap_or_else(|| "unknown failure".to_string()),
        }),
        other => Err(RemoteError::new(
            RemoteErrorKind::Other,
            format!("unknown account creation state {other}"),
        )),
    }
}

pub struct AwsDirectory {
    cli: AwsCli,
}

impl AwsDirectory {
    pub fn new(cli: AwsCli) -> Self {
        Self { cli }
    }
}

impl Directory for AwsDirectory {
    fn list_roots(&self) -> RemoteResult<Vec<DirectoryNode>> {
        let output: ListRootsOutput = self.cli.run_json("organizations", ["list-roots"])?;
        Ok(output.roots.into_iter().map(Into::into).collect())
    }

    fn list_child_ous(&self, parent_id: &str) -> RemoteResult<Vec<DirectoryNode>> {
        let output: ListUnitsOutput = self.cli.run_json(
            "organizations",
            ["list-organizational-units-for-parent", "--parent-id", parent_id],
        )?;
        Ok(output
            .organizational_units
            .into_iter()
            .map(Into::into)
            .collect())
    }

    fn list_accounts(&self, next_token: Option<&str>) -> RemoteResult<AccountPage> {
        let mut args = vec!["list-accounts", "--max-items", ACCOUNT_PAGE_SIZE];
        if let Some(token) = next_token {
            args.extend(["--starting-token", token]);
        }
        let output: ListAccountsOutput = self.cli.run_json("organizations", args)?;
        Ok(AccountPage {
            accounts: output
                .accounts
                .into_iter()
                .map(|a| AccountSummary {
                    id: a.id,
                    name: a.name,
                    email: a.email,
                })
                .collect(),
            next_token: output.next_token.filter(|t| !t.is_empty()),
        })
    }

    fn create_ou(&self, name: &str, parent_id: &str) -> RemoteResult<String> {
        let output: CreateUnitOutput = self.cli.run_json(
            "organizations",
            [
                "create-organizational-unit",
                "--parent-id",
                parent_id,
                "--name",
                name,
            ],
        )?;
        Ok(output.organizational_unit.id)
    }

    fn create_account(&self, alias: &str, email: &str, billing_access: &str) -> RemoteResult<String> {
        let output: CreateAccountOutput = self.cli.run_json(
            "organizations",
            [
                "create-account",
                "--email",
                email,
                "--account-name",
                alias,
                "--iam-user-access-to-billing",
                billing_access,
            ],
        )?;
        Ok(output.create_account_status.id)
    }

    fn describe_account_creation(&self, request_id: &str) -> RemoteResult<CreationStatus> {
        let output: CreateAccountOutput = self.cli.run_json(
            "organizations",
            [
                "describe-create-account-status",
                "--create-account-request-id",
                request_id,
            ],
        )?;
        creation_status(output.create_account_status)
    }

    fn move_account(&self, account_id: &str, from_parent_id: &str, to_parent_id: &str) -> RemoteResult<()> {
        self.cli.run(
            "organizations",
            [
                "move-account",
                "--account-id",
                account_id,
                "--source-parent-id",
                from_parent_id,
                "--destination-parent-id",
                to_parent_id,
            ],
        )?;
        Ok(())
    }

    fn create_organization(&self, feature_set: &str) -> RemoteResult<String> {
        let output: CreateOrganizationOutput = self.cli.run_json(
            "organizations",
            ["create-organization", "--feature-set", feature_set],
        )?;
        Ok(output.organization.id)
    }
}
