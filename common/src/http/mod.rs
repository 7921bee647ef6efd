//! HTTP plumbing shared by the API clients.

mod hyper_transport;
mod transport;

pub use hyper_transport::HyperTransport;
pub use transport::HttpTransport;

pub const JSON_CONTENT_TYPE: &str = "application/json";
