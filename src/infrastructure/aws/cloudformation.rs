//! Stack deployment over `aws cloudformation`
//!
//! Parameters travel as JSON so values containing commas survive intact.

use serde::{Deserialize, Serialize};

use super::cli::AwsCli;
use crate::domain::ports::{
    ChangeSetDescription, ChangeSetRequest, RemoteError, RemoteErrorKind, RemoteResult,
    StackConnector, StackDeployment, StackDescription,
};
use crate::domain::value_objects::{
    ChangeSetFailure, ChangeSetStatus, StackOperation, StackOutput, StackParameter, StackStatus,
};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Parameter {
    parameter_key: String,
    #[serde(default)]
    parameter_value: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Output {
    output_key: String,
    #[serde(default)]
    output_value: String,
    export_name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Stack {
    stack_name: String,
    stack_status: String,
    #[serde(default)]
    parameters: Vec<Parameter>,
    #[serde(default)]
    outputs: Vec<Output>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct DescribeStacksOutput {
    #[serde(default)]
    stacks: Vec<Stack>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct CreateChangeSetOutput {
    id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct DescribeChangeSetOutput {
    change_set_id: String,
    status: String,
    status_reason: Option<String>,
}

fn parameters_json(parameters: &[StackParameter]) -> RemoteResult<String> {
    let wire: Vec<Parameter> = parameters
        .iter()
        .map(|p| Parameter {
            parameter_key: p.key.clone(),
            parameter_value: p.value.clone(),
        })
        .collect();
    serde_json::to_string(&wire)
        .map_err(|e| RemoteError::new(RemoteErrorKind::Invalid, format!("bad parameters: {e}")))
}

fn stack_description(stack: Stack) -> StackDescription {
    StackDescription {
        name: stack.stack_name,
        status: StackStatus::new(stack.stack_status),
        parameters: stack
            .parameters
            .into_iter()
            .map(|p| StackParameter::new(p.parameter_key, p.parameter_value))
            .collect(),
        outputs: stack
            .outputs
            .into_iter()
            .map(|o| StackOutput {
                key: o.output_key,
                value: o.output_value,
                export_name: o.export_name,
            })
            .collect(),
    }
}

/// Status reasons CloudFormation gives for a change set with nothing to apply
const NO_CHANGES_MARKERS: &[&str] = &[
    "No updates",
    "didn't contain changes",
    "does not contain changes",
];

fn change_set_failure(reason: &str) -> ChangeSetFailure {
    if NO_CHANGES_MARKERS.iter().any(|m| reason.contains(m)) {
        ChangeSetFailure::NoChanges
    } else {
        ChangeSetFailure::Other(reason.to_string())
    }
}

fn change_set_status(status: &str, reason: Option<&str>) -> ChangeSetStatus {
    match status {
        "CREATE_COMPLETE" => ChangeSetStatus::Ready,
        "FAILED" => ChangeSetStatus::Failed(change_set_failure(reason.unwrap_or(""))),
        s if s.starts_with("DELETE") => ChangeSetStatus::Failed(ChangeSetFailure::Other(
            reason.map_or_else(|| format!("change set is {s}"), str::to_string),
        )),
        _ => ChangeSetStatus::Pending,
    }
}

/// Stack session inside one account
pub struct AwsStacks {
    cli: AwsCli,
    capabilities: Vec<String>,
}

impl AwsStacks {
    pub fn new(cli: AwsCli, capabilities: Vec<String>) -> Self {
        Self { cli, capabilities }
    }

    fn with_capabilities(&self, mut args: Vec<String>) -> Vec<String> {
        if !self.capabilities.is_empty() {
            args.push("--capabilities".to_string());
            args.extend(self.capabilities.iter().cloned());
        }
        args
    }
}

impl StackDeployment for AwsStacks {
    fn describe_stack(&self, name: &str) -> RemoteResult<Option<StackDescription>> {
        let result: RemoteResult<DescribeStacksOutput> = self
            .cli
            .run_json("cloudformation", ["describe-stacks", "--stack-name", name]);
        match result {
            Ok(output) => Ok(output.stacks.into_iter().next().map(stack_description)),
            Err(e) if e.is(RemoteErrorKind::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn create_change_set(&self, request: &ChangeSetRequest) -> RemoteResult<String> {
        let args = self.with_capabilities(vec![
            "create-change-set".to_string(),
            "--stack-name".to_string(),
            request.stack_name.clone(),
            "--change-set-name".to_string(),
            request.change_set_name.clone(),
            "--change-set-type".to_string(),
            request.change_set_type.as_str().to_string(),
            "--template-url".to_string(),
            request.template_url.clone(),
            "--parameters".to_string(),
            parameters_json(&request.parameters)?,
        ]);
        let output: CreateChangeSetOutput = self.cli.run_json("cloudformation", args)?;
        Ok(output.id)
    }

    fn wait_for_change_set(&self, change_set_id: &str) -> RemoteResult<()> {
        self.cli.run(
            "cloudformation",
            [
                "wait",
                "change-set-create-complete",
                "--change-set-name",
                change_set_id,
            ],
        )?;
        Ok(())
    }

    fn describe_change_set(&self, change_set_id: &str) -> RemoteResult<ChangeSetDescription> {
        let output: DescribeChangeSetOutput = self.cli.run_json(
            "cloudformation",
            ["describe-change-set", "--change-set-name", change_set_id],
        )?;
        Ok(ChangeSetDescription {
            status: change_set_status(&output.status, output.status_reason.as_deref()),
            id: output.change_set_id,
        })
    }

    fn execute_change_set(&self, change_set_id: &str) -> RemoteResult<()> {
        self.cli.run(
            "cloudformation",
            ["execute-change-set", "--change-set-name", change_set_id],
        )?;
        Ok(())
    }

    fn wait_for_stack(&self, name: &str, operation: StackOperation) -> RemoteResult<()> {
        let waiter = match operation {
            StackOperation::Create => "stack-create-complete",
            StackOperation::Update => "stack-update-complete",
        };
        self.cli
            .run("cloudformation", ["wait", waiter, "--stack-name", name])?;
        Ok(())
    }

    fn update_stack(&self, name: &str, template_url: &str, parameters: &[StackParameter]) -> RemoteResult<()> {
        let args = self.with_capabilities(vec![
            "update-stack".to_string(),
            "--stack-name".to_string(),
            name.to_string(),
            "--template-url".to_string(),
            template_url.to_string(),
            "--parameters".to_string(),
            parameters_json(parameters)?,
        ]);
        self.cli.run("cloudformation", args)?;
        Ok(())
    }
}

/// Opens stack sessions by assuming a role in the target account
pub struct AwsStackConnector {
    cli: AwsCli,
    capabilities: Vec<String>,
}

impl AwsStackConnector {
    pub fn new(cli: AwsCli, capabilities: Vec<String>) -> Self {
        Self { cli, capabilities }
    }
}

impl StackConnector for AwsStackConnector {
    type Stacks = AwsStacks;

    fn connect(&self, role_arn: &str) -> RemoteResult<AwsStacks> {
        let cli = self.cli.assume_role(role_arn)?;
        Ok(AwsStacks::new(cli, self.capabilities.clone()))
    }
}
