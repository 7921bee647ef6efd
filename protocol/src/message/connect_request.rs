use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// How the server should reach its compute cluster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "UPPERCASE")]
pub enum ConnectRequestParams {
    /// Spawn a cluster on the server host.
    Local {
        #[serde(
            rename = "numWorkers",
            default,
            skip_serializing_if = "Option::is_none"
        )]
        num_workers: Option<u32>,
        /// CUDA device id -> number of workers on that device
        #[serde(default, deserialize_with = "deserialize_cudas")]
        cudas: BTreeMap<u32, u32>,
    },
    /// Attach to a scheduler that is already running.
    Tcp { address: String },
}

impl ConnectRequestParams {
    pub fn local(num_workers: Option<u32>) -> Self {
        Self::Local {
            num_workers,
            cudas: BTreeMap::new(),
        }
    }

    pub fn tcp<S: Into<String>>(address: S) -> Self {
        Self::Tcp {
            address: address.into(),
        }
    }
}

// Device ids are JSON object keys. Inside a tagged enum they reach us as
// plain strings, so parse them here.
fn deserialize_cudas<'de, D>(deserializer: D) -> Result<BTreeMap<u32, u32>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    BTreeMap::<String, u32>::deserialize(deserializer)?
        .into_iter()
        .map(|(device, workers)| {
            device
                .trim()
                .parse::<u32>()
                .map(|device| (device, workers))
                .map_err(|_| D::Error::custom(format!("invalid CUDA device id '{}'", device)))
        })
        .collect()
}

/// Body of the connect call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectRequest {
    pub connection: ConnectRequestParams,
}

impl ConnectRequest {
    pub fn new(connection: ConnectRequestParams) -> Self {
        Self { connection }
    }
}
