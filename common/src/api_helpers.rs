use crate::error::Result;
use crate::http::{HttpTransport, JSON_CONTENT_TYPE};
use bytes::Bytes;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

const API_SEGMENT: &str = "/api/";

/// Computes the address prefix every API resource path is appended to.
///
/// Resolved on every request; implementations may change their answer
/// between calls.
pub trait ApiBasePath: Send + Sync {
    fn resolve(&self) -> String;
}

impl<F> ApiBasePath for F
where
    F: Fn() -> String + Send + Sync,
{
    fn resolve(&self) -> String {
        self()
    }
}

/// Base path derived once from a fixed server URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticBasePath {
    base: String,
}

impl StaticBasePath {
    /// `http://host:port` becomes `http://host:port/api/`.
    pub fn new(server_url: &str) -> Self {
        let mut base = server_url.trim().to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        if !has_api_segment(&base) {
            base.push_str(&API_SEGMENT[1..]);
        }
        Self { base }
    }
}

// Only the path counts: `http://api/` names a host, not the API segment.
fn has_api_segment(base: &str) -> bool {
    let authority_start = base.find("://").map(|i| i + 3).unwrap_or(0);
    match base[authority_start..].find('/') {
        Some(i) => base[authority_start + i..].ends_with(API_SEGMENT),
        None => false,
    }
}

impl ApiBasePath for StaticBasePath {
    fn resolve(&self) -> String {
        self.base.clone()
    }
}

/// PUT `payload` as JSON to `${base}${path}` and parse the response body.
pub async fn generic_put<T, R>(
    transport: &dyn HttpTransport,
    base_path: &dyn ApiBasePath,
    path: &str,
    payload: &T,
) -> Result<R>
where
    T: Serialize + Sync + ?Sized,
    R: DeserializeOwned,
{
    let url = format!("{}{}", base_path.resolve(), path);
    let body = serde_json::to_vec(payload)?;
    debug!("PUT {} ({} bytes)", url, body.len());

    let response = transport
        .put(&url, JSON_CONTENT_TYPE, Bytes::from(body))
        .await?;
    Ok(serde_json::from_slice(&response)?)
}
