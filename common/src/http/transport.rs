use crate::error::Result;
use async_trait::async_trait;
use bytes::Bytes;

/// One request, one response body.
///
/// Implementations must not retry and must not look at the status code;
/// interpreting the body is up to the caller.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn get(&self, url: &str) -> Result<Bytes>;

    async fn put(&self, url: &str, content_type: &str, body: Bytes) -> Result<Bytes>;
}
