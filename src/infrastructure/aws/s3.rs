//! Object store over `aws s3api`

use std::ffi::OsStr;
use std::io::Write;

use tempfile::NamedTempFile;

use super::cli::AwsCli;
use crate::domain::ports::{ObjectStore, RemoteError, RemoteResult};

pub struct AwsObjectStore {
    cli: AwsCli,
}

impl AwsObjectStore {
    pub fn new(cli: AwsCli) -> Self {
        Self { cli }
    }
}

fn grantee(email: &str) -> String {
    format!("emailAddress={email}")
}

impl ObjectStore for AwsObjectStore {
    fn put_object(&self, bucket: &str, key: &str, body: &[u8]) -> RemoteResult<()> {
        let mut staged = NamedTempFile::new()
            .map_err(|e| RemoteError::transport(format!("failed to stage upload: {e}")))?;
        staged
            .write_all(body)
            .and_then(|()| staged.flush())
            .map_err(|e| RemoteError::transport(format!("failed to stage upload: {e}")))?;

        tracing::debug!(bucket, key, "put-object");
        self.cli.run(
            "s3api",
            [
                OsStr::new("put-object"),
                OsStr::new("--bucket"),
                OsStr::new(bucket),
                OsStr::new("--key"),
                OsStr::new(key),
                OsStr::new("--body"),
                staged.path().as_os_str(),
            ],
        )?;
        Ok(())
    }

    fn grant_read(&self, bucket: &str, key: &str, grantee_email: &str) -> RemoteResult<()> {
        tracing::debug!(bucket, key, "put-object-acl");
        self.cli.run(
            "s3api",
            [
                "put-object-acl",
                "--bucket",
                bucket,
                "--key",
                key,
                "--grant-read",
                grantee(grantee_email).as_str(),
            ],
        )?;
        Ok(())
    }
}
