//! Hand-written port doubles shared by the use case tests

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::Duration;

use crate::application::groups::{GroupReport, MergeGroupParameters};
use crate::application::policy::{DeployPolicies, PolicyReport, PolicyRequest, StackOutcome, StackReport};
use crate::domain::entities::Organization;
use crate::domain::ports::{
    AccountPage, AccountSummary, ChangeSetDescription, ChangeSetRequest, Clock, CreationStatus,
    Directory, DirectoryNode, ManifestError, ManifestStore, ObjectStore, PolicyTemplates,
    RemoteError, RemoteErrorKind, RemoteResult, StackConnector, StackDeployment,
    StackDescription, TemplateError,
};
use crate::domain::value_objects::{
    ChangeSetStatus, ChangeSetType, ExportedParameters, PolicyStackName, StackOperation,
    StackOutput, StackParameter, StackStatus,
};
use crate::error::{OrgovError, OrgovResult};

// --- Directory ---

#[derive(Default)]
pub struct MockDirectory {
    pub roots: RefCell<Vec<DirectoryNode>>,
    pub ous: RefCell<HashMap<String, Vec<DirectoryNode>>>,
    pub account_pages: RefCell<Vec<Vec<AccountSummary>>>,
    /// Statuses handed out by `describe_account_creation`; empty means in progress
    pub creation_script: RefCell<VecDeque<CreationStatus>>,
    pub move_error: RefCell<Option<RemoteError>>,
    pub calls: RefCell<Vec<String>>,
    next_ou: Cell<u32>,
}

impl MockDirectory {
    pub fn with_root(id: &str, name: &str) -> Self {
        let directory = Self::default();
        directory.roots.borrow_mut().push(DirectoryNode::new(id, name));
        directory
    }

    pub fn add_ou(&self, parent_id: &str, id: &str, name: &str) {
        self.ous
            .borrow_mut()
            .entry(parent_id.to_string())
            .or_default()
            .push(DirectoryNode::new(id, name));
    }

    pub fn add_account_page(&self, accounts: &[(&str, &str)]) {
        let page = accounts
            .iter()
            .map(|(id, name)| AccountSummary {
                id: id.to_string(),
                name: name.to_string(),
                email: format!("{name}@example.com"),
            })
            .collect();
        self.account_pages.borrow_mut().push(page);
    }

    pub fn script(&self, statuses: impl IntoIterator<Item = CreationStatus>) {
        self.creation_script.borrow_mut().extend(statuses);
    }

    /// Number of recorded calls to one operation
    pub fn count(&self, operation: &str) -> usize {
        let prefix = format!("{operation}:");
        self.calls
            .borrow()
            .iter()
            .filter(|c| *c == operation || c.starts_with(&prefix))
            .count()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }
}

impl Directory for MockDirectory {
    fn list_roots(&self) -> RemoteResult<Vec<DirectoryNode>> {
        self.record("list_roots".to_string());
        Ok(self.roots.borrow().clone())
    }

    fn list_child_ous(&self, parent_id: &str) -> RemoteResult<Vec<DirectoryNode>> {
        self.record(format!("list_child_ous:{parent_id}"));
        Ok(self
            .ous
            .borrow()
            .get(parent_id)
            .cloned()
            .unwrap_or_default())
    }

    fn list_accounts(&self, next_token: Option<&str>) -> RemoteResult<AccountPage> {
        self.record(format!("list_accounts:{}", next_token.unwrap_or("-")));
        let index = match next_token {
            None => 0,
            Some(token) => token
                .strip_prefix("page-")
                .and_then(|n| n.parse::<usize>().ok())
                .ok_or_else(|| RemoteError::new(RemoteErrorKind::Invalid, "bad token"))?,
        };
        let pages = self.account_pages.borrow();
        let accounts = pages.get(index).cloned().unwrap_or_default();
        let next_token = (index + 1 < pages.len()).then(|| format!("page-{}", index + 1));
        Ok(AccountPage {
            accounts,
            next_token,
        })
    }

    fn create_ou(&self, name: &str, parent_id: &str) -> RemoteResult<String> {
        self.record(format!("create_ou:{name}:{parent_id}"));
        let n = self.next_ou.get() + 1;
        self.next_ou.set(n);
        let id = format!("ou-new-{n}");
        self.add_ou(parent_id, &id, name);
        Ok(id)
    }

    fn create_account(&self, alias: &str, email: &str, billing_access: &str) -> RemoteResult<String> {
        self.record(format!("create_account:{alias}:{email}:{billing_access}"));
        Ok("car-1".to_string())
    }

    fn describe_account_creation(&self, request_id: &str) -> RemoteResult<CreationStatus> {
        self.record(format!("describe_account_creation:{request_id}"));
        Ok(self
            .creation_script
            .borrow_mut()
            .pop_front()
            .unwrap_or(CreationStatus::InProgress))
    }

    fn move_account(&self, account_id: &str, from_parent_id: &str, to_parent_id: &str) -> RemoteResult<()> {
        self.record(format!("move_account:{account_id}:{from_parent_id}:{to_parent_id}"));
        match self.move_error.borrow().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn create_organization(&self, feature_set: &str) -> RemoteResult<String> {
        self.record(format!("create_organization:{feature_set}"));
        Ok("o-test".to_string())
    }
}

// --- Manifest ---

#[derive(Default)]
pub struct MemoryManifest {
    pub organization: RefCell<Organization>,
    pub saves: Cell<u32>,
    pub fail_save: Cell<bool>,
}

impl MemoryManifest {
    pub fn with(organization: Organization) -> Self {
        Self {
            organization: RefCell::new(organization),
            ..Self::default()
        }
    }

    pub fn snapshot(&self) -> Organization {
        self.organization.borrow().clone()
    }
}

impl ManifestStore for MemoryManifest {
    fn load(&self) -> Result<Organization, ManifestError> {
        Ok(self.organization.borrow().clone())
    }

    fn save(&self, organization: &Organization) -> Result<(), ManifestError> {
        if self.fail_save.get() {
            return Err(ManifestError::AccessError {
                path: PathBuf::from("organization.yaml"),
                message: "disk full".to_string(),
            });
        }
        *self.organization.borrow_mut() = organization.clone();
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}

// --- Object store and templates ---

#[derive(Default)]
pub struct MockObjects {
    pub puts: RefCell<Vec<(String, String, Vec<u8>)>>,
    pub grants: RefCell<Vec<(String, String, String)>>,
    pub put_error: RefCell<Option<RemoteError>>,
}

impl ObjectStore for MockObjects {
    fn put_object(&self, bucket: &str, key: &str, body: &[u8]) -> RemoteResult<()> {
        if let Some(err) = self.put_error.borrow().clone() {
            return Err(err);
        }
        self.puts
            .borrow_mut()
            .push((bucket.to_string(), key.to_string(), body.to_vec()));
        Ok(())
    }

    fn grant_read(&self, bucket: &str, key: &str, grantee_email: &str) -> RemoteResult<()> {
        self.grants.borrow_mut().push((
            bucket.to_string(),
            key.to_string(),
            grantee_email.to_string(),
        ));
        Ok(())
    }
}

#[derive(Default)]
pub struct MockTemplates {
    pub rendered: RefCell<Vec<String>>,
    pub reads: RefCell<Vec<PathBuf>>,
    pub missing_source: Cell<bool>,
    pub fail_render: Cell<bool>,
}

impl PolicyTemplates for MockTemplates {
    fn check_source(&self) -> Result<(), TemplateError> {
        if self.missing_source.get() {
            return Err(TemplateError::Read {
                path: PathBuf::from("policies/template_policy.json"),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
            });
        }
        Ok(())
    }

    fn render(&self, alias: &str) -> Result<PathBuf, TemplateError> {
        if self.fail_render.get() {
            return Err(TemplateError::Write {
                path: PathBuf::from("policies"),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only file system"),
            });
        }
        self.rendered.borrow_mut().push(alias.to_string());
        Ok(PathBuf::from("policies").join(PolicyStackName::for_alias(alias).as_str()))
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>, TemplateError> {
        self.reads.borrow_mut().push(path.to_path_buf());
        Ok(b"{}".to_vec())
    }
}

// --- Clock ---

#[derive(Default)]
pub struct RecordingClock {
    pub sleeps: RefCell<Vec<Duration>>,
}

impl Clock for RecordingClock {
    fn sleep(&self, duration: Duration) {
        self.sleeps.borrow_mut().push(duration);
    }
}

// --- Stacks ---

/// Remote stack state shared by a connector and every session it opens
#[derive(Default)]
pub struct StackWorld {
    pub stacks: HashMap<String, StackDescription>,
    /// Status returned by `describe_change_set`; None means ready
    pub change_set_status: Option<ChangeSetStatus>,
    pub connect_error: Option<RemoteError>,
    pub wait_change_set_error: Option<RemoteError>,
    pub execute_error: Option<RemoteError>,
    pub wait_stack_error: Option<RemoteError>,
    pub update_error: Option<RemoteError>,
    /// Outputs a stack reports once deployed
    pub outputs: HashMap<String, Vec<StackOutput>>,
    pub requests: Vec<ChangeSetRequest>,
    pub updates: Vec<(String, String, Vec<StackParameter>)>,
    pub roles: Vec<String>,
    pub calls: Vec<String>,
    staged: HashMap<String, ChangeSetRequest>,
}

#[derive(Default, Clone)]
pub struct MockConnector {
    pub world: Rc<RefCell<StackWorld>>,
}

impl MockConnector {
    pub fn with_stack(self, name: &str, status: &str, parameters: Vec<StackParameter>) -> Self {
        self.world.borrow_mut().stacks.insert(
            name.to_string(),
            StackDescription {
                name: name.to_string(),
                status: StackStatus::new(status),
                parameters,
                outputs: Vec::new(),
            },
        );
        self
    }

    pub fn set_outputs(&self, stack: &str, outputs: &[(&str, &str, Option<&str>)]) {
        let outputs = outputs
            .iter()
            .map(|(key, value, export)| StackOutput {
                key: key.to_string(),
                value: value.to_string(),
                export_name: export.map(str::to_string),
            })
            .collect();
        self.world
            .borrow_mut()
            .outputs
            .insert(stack.to_string(), outputs);
    }

    pub fn called(&self, operation: &str) -> bool {
        self.world
            .borrow()
            .calls
            .iter()
            .any(|c| c.starts_with(operation))
    }
}

impl StackConnector for MockConnector {
    type Stacks = MockStacks;

    fn connect(&self, role_arn: &str) -> RemoteResult<MockStacks> {
        let mut world = self.world.borrow_mut();
        world.roles.push(role_arn.to_string());
        if let Some(err) = world.connect_error.clone() {
            return Err(err);
        }
        Ok(MockStacks {
            world: Rc::clone(&self.world),
        })
    }
}

pub struct MockStacks {
    world: Rc<RefCell<StackWorld>>,
}

fn fail_with(error: &Option<RemoteError>) -> RemoteResult<()> {
    match error {
        Some(err) => Err(err.clone()),
        None => Ok(()),
    }
}

impl StackDeployment for MockStacks {
    fn describe_stack(&self, name: &str) -> RemoteResult<Option<StackDescription>> {
        let world = &mut *self.world.borrow_mut();
        world.calls.push(format!("describe_stack:{name}"));
        Ok(world.stacks.get(name).cloned())
    }

    fn create_change_set(&self, request: &ChangeSetRequest) -> RemoteResult<String> {
        let world = &mut *self.world.borrow_mut();
        world
            .calls
            .push(format!("create_change_set:{}:{}", request.stack_name, request.change_set_type));
        let id = format!("cs-id-{}", world.requests.len() + 1);
        world.requests.push(request.clone());
        world.staged.insert(id.clone(), request.clone());
        Ok(id)
    }

    fn wait_for_change_set(&self, change_set_id: &str) -> RemoteResult<()> {
        let world = &mut *self.world.borrow_mut();
        world.calls.push(format!("wait_for_change_set:{change_set_id}"));
        fail_with(&world.wait_change_set_error)
    }

    fn describe_change_set(&self, change_set_id: &str) -> RemoteResult<ChangeSetDescription> {
        let world = &mut *self.world.borrow_mut();
        world.calls.push(format!("describe_change_set:{change_set_id}"));
        Ok(ChangeSetDescription {
            id: change_set_id.to_string(),
            status: world
                .change_set_status
                .clone()
                .unwrap_or(ChangeSetStatus::Ready),
        })
    }

    fn execute_change_set(&self, change_set_id: &str) -> RemoteResult<()> {
        let world = &mut *self.world.borrow_mut();
        world.calls.push(format!("execute_change_set:{change_set_id}"));
        fail_with(&world.execute_error)?;

        let request = world
            .staged
            .remove(change_set_id)
            .ok_or_else(|| RemoteError::new(RemoteErrorKind::NotFound, "unknown change set"))?;
        let status = match request.change_set_type {
            ChangeSetType::Create => "CREATE_COMPLETE",
            ChangeSetType::Update => "UPDATE_COMPLETE",
        };
        let outputs = world
            .outputs
            .get(&request.stack_name)
            .cloned()
            .unwrap_or_default();
        world.stacks.insert(
            request.stack_name.clone(),
            StackDescription {
                name: request.stack_name,
                status: StackStatus::new(status),
                parameters: request.parameters,
                outputs,
            },
        );
        Ok(())
    }

    fn wait_for_stack(&self, name: &str, operation: StackOperation) -> RemoteResult<()> {
        let world = &mut *self.world.borrow_mut();
        world.calls.push(format!("wait_for_stack:{name}:{operation}"));
        fail_with(&world.wait_stack_error)
    }

    fn update_stack(&self, name: &str, template_url: &str, parameters: &[StackParameter]) -> RemoteResult<()> {
        let world = &mut *self.world.borrow_mut();
        world.calls.push(format!("update_stack:{name}"));
        fail_with(&world.update_error)?;
        world
            .updates
            .push((name.to_string(), template_url.to_string(), parameters.to_vec()));
        if let Some(stack) = world.stacks.get_mut(name) {
            stack.parameters = parameters.to_vec();
            stack.status = StackStatus::new("UPDATE_COMPLETE");
        }
        Ok(())
    }
}

// --- Downstream use cases ---

#[derive(Default)]
pub struct RecordingPolicies {
    pub requests: RefCell<Vec<PolicyRequest>>,
    pub fail: Cell<bool>,
}

impl DeployPolicies for RecordingPolicies {
    fn deploy_policies(&self, request: &PolicyRequest) -> OrgovResult<PolicyReport> {
        self.requests.borrow_mut().push(request.clone());
        if self.fail.get() {
            return Err(OrgovError::ChangeSetFailed {
                stack: "Test-Policies".to_string(),
                reason: "Template format error".to_string(),
            });
        }
        let mut report = PolicyReport::new();
        for alias in &request.aliases {
            report.stacks.push(StackReport {
                alias: alias.clone(),
                stack: PolicyStackName::for_alias(alias).to_string(),
                outcome: StackOutcome::Created,
            });
        }
        Ok(report)
    }
}

#[derive(Default)]
pub struct RecordingGroups {
    pub received: RefCell<Vec<ExportedParameters>>,
}

impl MergeGroupParameters for RecordingGroups {
    fn merge_group_parameters(&self, exports: &ExportedParameters) -> OrgovResult<GroupReport> {
        self.received.borrow_mut().push(exports.clone());
        Ok(GroupReport {
            stack: "Iam-Policies".to_string(),
            merged_keys: exports.iter().map(|(k, _)| k.to_string()).collect(),
        })
    }
}
