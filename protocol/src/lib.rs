pub mod message;

pub use message::{
    CONNECTION_PATH, ConnectRequest, ConnectRequestParams, ConnectResponse, STATUS_CONNECTED,
    STATUS_DISCONNECTED, STATUS_ERROR, STATUS_OK,
};
