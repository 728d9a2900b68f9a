//! AWS command line driver
//!
//! Runs `aws <service> <operation> ...` with JSON output. A profile-based
//! client can assume a role, yielding a client that passes the temporary
//! credentials through the environment instead of `--profile`.

use std::ffi::OsStr;
use std::process::{Command, Stdio};

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::error::classify;
use crate::domain::ports::{RemoteError, RemoteErrorKind, RemoteResult};

/// Temporary credentials returned by `sts assume-role`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SessionCredentials {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub session_token: String,
    pub expiration: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct AssumeRoleOutput {
    credentials: SessionCredentials,
}

#[derive(Debug, Clone)]
pub struct AwsCli {
    program: String,
    profile: String,
    region: String,
    credentials: Option<SessionCredentials>,
}

impl AwsCli {
    pub fn new(
        program: impl Into<String>,
        profile: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self {
            program: program.into(),
            profile: profile.into(),
            region: region.into(),
            credentials: None,
        }
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    /// A client acting through `role_arn`
    pub fn assume_role(&self, role_arn: &str) -> RemoteResult<AwsCli> {
        let session_name = format!("orgov-{}", uuid::Uuid::new_v4().simple());
        tracing::debug!(role_arn, session_name = %session_name, "assuming role");
        let output: AssumeRoleOutput = self.run_json(
            "sts",
            [
                "assume-role",
                "--role-arn",
                role_arn,
                "--role-session-name",
                session_name.as_str(),
            ],
        )?;
        tracing::debug!(expires = %output.credentials.expiration, "role assumed");

        Ok(AwsCli {
            credentials: Some(output.credentials),
            ..self.clone()
        })
    }

    fn command<I, S>(&self, service: &str, args: I) -> Command
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let mut cmd = Command::new(&self.program);
        cmd.arg(service)
            .args(args)
            .arg("--output")
            .arg("json")
            .arg("--region")
            .arg(&self.region);

        match &self.credentials {
            Some(creds) => {
                cmd.env("AWS_ACCESS_KEY_ID", &creds.access_key_id)
                    .env("AWS_SECRET_ACCESS_KEY", &creds.secret_access_key)
                    .env("AWS_SESSION_TOKEN", &creds.session_token)
                    .env_remove("AWS_PROFILE");
            }
            None => {
                cmd.arg("--profile").arg(&self.profile);
            }
        }
        cmd
    }

    /// Run one CLI call and return its stdout
    pub fn run<I, S>(&self, service: &str, args: I) -> RemoteResult<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        if let Some(creds) = &self.credentials {
            if creds.expiration <= Utc::now() {
                return Err(RemoteError::new(
                    RemoteErrorKind::AccessDenied,
                    format!("assumed role credentials expired at {}", creds.expiration),
                ));
            }
        }

        let mut cmd = self.command(service, args);
        tracing::trace!(program = %self.program, service, "running aws cli");

        let output = cmd
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| RemoteError::transport(format!("failed to run {}: {}", self.program, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(classify(&stderr));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Run one CLI call and decode its JSON output
    pub fn run_json<T, I, S>(&self, service: &str, args: I) -> RemoteResult<T>
    where
        T: DeserializeOwned,
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let stdout = self.run(service, args)?;
        serde_json::from_str(&stdout).map_err(|e| {
            RemoteError::transport(format!("unexpected {service} output: {e}"))
        })
    }
}
