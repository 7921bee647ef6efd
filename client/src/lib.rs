pub mod cluster;

pub use cluster::ClusterApi;
pub use common::{CommonError, Result};
pub use protocol::{ConnectRequest, ConnectRequestParams, ConnectResponse};
