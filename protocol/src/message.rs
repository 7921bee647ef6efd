mod connect_request;
mod connect_response;

pub use connect_request::{ConnectRequest, ConnectRequestParams};
pub use connect_response::{
    ConnectResponse, STATUS_CONNECTED, STATUS_DISCONNECTED, STATUS_ERROR, STATUS_OK,
};

/// Resource path of the cluster connection, relative to the API base path.
pub const CONNECTION_PATH: &str = "config/connection/";
