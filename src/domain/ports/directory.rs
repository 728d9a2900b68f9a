//! Directory port - the remote hierarchical identity service
//!
//! Covers roots, organizational units and member accounts.

use super::remote::RemoteResult;

/// A root or organizational unit as listed by the directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryNode {
    pub id: String,
    pub name: String,
}

impl DirectoryNode {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A member account as listed by the directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountSummary {
    pub id: String,
    /// Account name, which is where the alias lives
    pub name: String,
    pub email: String,
}

/// One page of the account listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountPage {
    pub accounts: Vec<AccountSummary>,
    pub next_token: Option<String>,
}

/// State of an asynchronous account creation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreationStatus {
    InProgress,
    Succeeded { account_id: String },
    Failed { reason: String },
}

pub trait Directory {
    fn list_roots(&self) -> RemoteResult<Vec<DirectoryNode>>;

    fn list_child_ous(&self, parent_id: &str) -> RemoteResult<Vec<DirectoryNode>>;

    /// List accounts starting at `next_token` (None for the first page)
    fn list_accounts(&self, next_token: Option<&str>) -> RemoteResult<AccountPage>;

    /// Create an OU, returning its id
    fn create_ou(&self, name: &str, parent_id: &str) -> RemoteResult<String>;

    /// Submit account creation, returning the request id
    fn create_account(&self, alias: &str, email: &str, billing_access: &str)
        -> RemoteResult<String>;

    fn describe_account_creation(&self, request_id: &str) -> RemoteResult<CreationStatus>;

    fn move_account(
        &self,
        account_id: &str,
        from_parent_id: &str,
        to_parent_id: &str,
    ) -> RemoteResult<()>;

    /// Turn the calling account into an organization root, returning its id
    fn create_organization(&self, feature_set: &str) -> RemoteResult<String>;
}

impl<T: Directory + ?Sized> Directory for &T {
    fn list_roots(&self) -> RemoteResult<Vec<DirectoryNode>> {
        (**self).list_roots()
    }

    fn list_child_ous(&self, parent_id: &str) -> RemoteResult<Vec<DirectoryNode>> {
        (**self).list_child_ous(parent_id)
    }

    fn list_accounts(&self, next_token: Option<&str>) -> RemoteResult<AccountPage> {
        (**self).list_accounts(next_token)
    }

    fn create_ou(&self, name: &str, parent_id: &str) -> RemoteResult<String> {
        (**self).create_ou(name, parent_id)
    }

    fn create_account(
        &self,
        alias: &str,
        email: &str,
        billing_access: &str,
    ) -> RemoteResult<String> {
        (**self).create_account(alias, email, billing_access)
    }

    fn describe_account_creation(&self, request_id: &str) -> RemoteResult<CreationStatus> {
        (**self).describe_account_creation(request_id)
    }

    fn move_account(
        &self,
        account_id: &str,
        from_parent_id: &str,
        to_parent_id: &str,
    ) -> RemoteResult<()> {
        (**self).move_account(account_id, from_parent_id, to_parent_id)
    }

    fn create_organization(&self, feature_set: &str) -> RemoteResult<String> {
        (**self).create_organization(feature_set)
    }
}
