//! ObjectStore port - where rendered templates are published

use super::remote::RemoteResult;

pub trait ObjectStore {
    fn put_object(&self, bucket: &str, key: &str, body: &[u8]) -> RemoteResult<()>;

    /// Grant read access on an object to the identity behind an email
    fn grant_read(&self, bucket: &str, key: &str, grantee_email: &str) -> RemoteResult<()>;
}

impl<T: ObjectStore + ?Sized> ObjectStore for &T {
    fn put_object(&self, bucket: &str, key: &str, body: &[u8]) -> RemoteResult<()> {
        (**self).put_object(bucket, key, body)
    }

    fn grant_read(&self, bucket: &str, key: &str, grantee_email: &str) -> RemoteResult<()> {
        (**self).grant_read(bucket, key, grantee_email)
    }
}
