//! In-memory organization directory.

use std::cell::RefCell;
use std::collections::HashMap;

use orgov::domain::ports::{
    AccountPage, AccountSummary, CreationStatus, Directory, DirectoryNode, RemoteError,
    RemoteErrorKind, RemoteResult,
};

pub const ROOT_ID: &str = "r-root";
const PAGE_SIZE: usize = 2;

struct Member {
    summary: AccountSummary,
    parent: String,
}

struct PendingCreation {
    alias: String,
    email: String,
    polls_left: u32,
}

#[derive(Default)]
struct State {
    /// (parent id, node)
    ous: Vec<(String, DirectoryNode)>,
    members: Vec<Member>,
    pending: HashMap<String, PendingCreation>,
    requests: u32,
    deny_moves: bool,
}

/// Directory whose account creations succeed after a fixed number of polls
pub struct FakeOrganization {
    state: RefCell<State>,
    polls_before_success: u32,
}

impl FakeOrganization {
    pub fn new(polls_before_success: u32) -> Self {
        Self {
            state: RefCell::new(State::default()),
            polls_before_success,
        }
    }

    /// An account that already exists outside the manifest
    pub fn with_member(self, id: &str, name: &str) -> Self {
        self.state.borrow_mut().members.push(Member {
            summary: AccountSummary {
                id: id.to_string(),
                name: name.to_string(),
                email: format!("{name}@example.com"),
            },
            parent: ROOT_ID.to_string(),
        });
        self
    }

    pub fn deny_moves(&self) {
        self.state.borrow_mut().deny_moves = true;
    }

    /// Parent id of a member account
    pub fn parent_of(&self, account_id: &str) -> Option<String> {
        self.state
            .borrow()
            .members
            .iter()
            .find(|m| m.summary.id == account_id)
            .map(|m| m.parent.clone())
    }

    pub fn ou_id(&self, name: &str) -> Option<String> {
        self.state
            .borrow()
            .ous
            .iter()
            .find(|(_, node)| node.name == name)
            .map(|(_, node)| node.id.clone())
    }

    pub fn ou_count(&self) -> usize {
        self.state.borrow().ous.len()
    }
}

impl Directory for FakeOrganization {
    fn list_roots(&self) -> RemoteResult<Vec<DirectoryNode>> {
        Ok(vec![DirectoryNode::new(ROOT_ID, "Root")])
    }

    fn list_child_ous(&self, parent_id: &str) -> RemoteResult<Vec<DirectoryNode>> {
        Ok(self
            .state
            .borrow()
            .ous
            .iter()
            .filter(|(parent, _)| parent == parent_id)
            .map(|(_, node)| node.clone())
            .collect())
    }

    fn list_accounts(&self, next_token: Option<&str>) -> RemoteResult<AccountPage> {
        let state = self.state.borrow();
        let start: usize = next_token
            .map(|t| t.trim_start_matches("offset-").parse().unwrap())
            .unwrap_or(0);
        let end = (start + PAGE_SIZE).min(state.members.len());
        Ok(AccountPage {
            accounts: state.members[start..end]
                .iter()
                .map(|m| m.summary.clone())
                .collect(),
            next_token: (end < state.members.len()).then(|| format!("offset-{end}")),
        })
    }

    fn create_ou(&self, name: &str, parent_id: &str) -> RemoteResult<String> {
        let mut state = self.state.borrow_mut();
        if state
            .ous
            .iter()
            .any(|(parent, node)| parent == parent_id && node.name == name)
        {
            return Err(RemoteError::new(
                RemoteErrorKind::AlreadyExists,
                format!("{name} already exists"),
            ));
        }
        let id = format!("ou-{}", name.to_lowercase());
        state
            .ous
            .push((parent_id.to_string(), DirectoryNode::new(&id, name)));
        Ok(id)
    }

    fn create_account(&self, alias: &str, email: &str, _billing: &str) -> RemoteResult<String> {
        let mut state = self.state.borrow_mut();
        state.requests += 1;
        let request_id = format!("car-{}", state.requests);
        state.pending.insert(
            request_id.clone(),
            PendingCreation {
                alias: alias.to_string(),
                email: email.to_string(),
                polls_left: self.polls_before_success,
            },
        );
        Ok(request_id)
    }

    fn describe_account_creation(&self, request_id: &str) -> RemoteResult<CreationStatus> {
        let mut state = self.state.borrow_mut();
        let pending = state.pending.get_mut(request_id).ok_or_else(|| {
            RemoteError::new(RemoteErrorKind::NotFound, format!("no request {request_id}"))
        })?;
        if pending.polls_left > 0 {
            pending.polls_left -= 1;
            return Ok(CreationStatus::InProgress);
        }

        let (alias, email) = (pending.alias.clone(), pending.email.clone());
        state.pending.remove(request_id);
        let account_id = format!("{:012}", 100_000_000_000u64 + state.members.len() as u64);
        state.members.push(Member {
            summary: AccountSummary {
                id: account_id.clone(),
                name: alias,
                email,
            },
            parent: ROOT_ID.to_string(),
        });
        Ok(CreationStatus::Succeeded { account_id })
    }

    fn move_account(&self, account_id: &str, from: &str, to: &str) -> RemoteResult<()> {
        let mut state = self.state.borrow_mut();
        if state.deny_moves {
            return Err(RemoteError::new(
                RemoteErrorKind::AccessDenied,
                "not authorized to move accounts",
            ));
        }
        let member = state
            .members
            .iter_mut()
            .find(|m| m.summary.id == account_id)
            .ok_or_else(|| RemoteError::new(RemoteErrorKind::NotFound, account_id))?;
        if member.parent != from {
            return Err(RemoteError::new(
                RemoteErrorKind::NotFound,
                format!("{account_id} is not in {from}"),
            ));
        }
        member.parent = to.to_string();
        Ok(())
    }

    fn create_organization(&self, _feature_set: &str) -> RemoteResult<String> {
        Ok("o-fake".to_string())
    }
}
