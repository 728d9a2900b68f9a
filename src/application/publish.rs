//! Template publishing
//!
//! Uploads an account's rendered template under its stack key, grants the
//! account read access and returns the template URL.

use crate::domain::entities::Account;
use crate::domain::ports::{ObjectStore, PolicyTemplates};
use crate::domain::value_objects::{template_url, PolicyStackName};
use crate::error::{OrgovError, OrgovResult};

pub struct TemplatePublisher<O, T>
where
    O: ObjectStore,
    T: PolicyTemplates,
{
    objects: O,
    templates: T,
    bucket: String,
    region: String,
}

impl<O, T> TemplatePublisher<O, T>
where
    O: ObjectStore,
    T: PolicyTemplates,
{
    pub fn new(objects: O, templates: T, bucket: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            objects,
            templates,
            bucket: bucket.into(),
            region: region.into(),
        }
    }

    pub fn publish(&self, account: &Account, stack: &PolicyStackName) -> OrgovResult<String> {
        let body = self.templates.read(&account.template)?;
        let key = stack.template_key();

        tracing::debug!(bucket = %self.bucket, key, bytes = body.len(), "uploading template");
        self.objects
            .put_object(&self.bucket, key, &body)
            .map_err(|e| OrgovError::remote("put-object", &account.alias, e))?;

        self.objects
            .grant_read(&self.bucket, key, &account.email)
            .map_err(|e| OrgovError::remote("put-object-acl", &account.alias, e))?;

        Ok(template_url(&self.bucket, &self.region, key))
    }
}
