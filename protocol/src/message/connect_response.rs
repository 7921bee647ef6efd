use super::connect_request::ConnectRequestParams;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const STATUS_OK: &str = "ok";
pub const STATUS_CONNECTED: &str = "connected";
pub const STATUS_DISCONNECTED: &str = "disconnected";
pub const STATUS_ERROR: &str = "error";

/// Server answer to a connect or status call.
///
/// Only `status` is interpreted. All other members are kept as sent so a
/// response can be handed back to callers without losing anything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectResponse {
    pub status: String,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl ConnectResponse {
    pub fn new<S: Into<String>>(status: S) -> Self {
        Self {
            status: status.into(),
            details: Map::new(),
        }
    }

    pub fn ok(connection: &ConnectRequestParams) -> Self {
        let mut response = Self::new(STATUS_OK);
        if let Ok(value) = serde_json::to_value(connection) {
            response.details.insert("connection".to_string(), value);
        }
        response
    }

    pub fn disconnected() -> Self {
        Self::new(STATUS_DISCONNECTED)
    }

    pub fn error<S: Into<String>>(msg: S) -> Self {
        let mut response = Self::new(STATUS_ERROR);
        response
            .details
            .insert("msg".to_string(), Value::String(msg.into()));
        response
    }

    pub fn is_connected(&self) -> bool {
        self.status == STATUS_OK || self.status == STATUS_CONNECTED
    }

    /// The `connection` member, if present and well formed.
    pub fn connection(&self) -> Option<ConnectRequestParams> {
        self.details
            .get("connection")
            .and_then(|value| serde_json::from_value(value.clone()).ok())
    }

    pub fn message(&self) -> Option<&str> {
        self.details.get("msg").and_then(Value::as_str)
    }
}
