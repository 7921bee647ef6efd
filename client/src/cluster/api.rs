use common::{ApiBasePath, HttpTransport, HyperTransport, Result, StaticBasePath, generic_put};
use protocol::{CONNECTION_PATH, ConnectRequest, ConnectRequestParams, ConnectResponse};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Client for `config/connection/`.
///
/// Holds no connection state of its own; every call is a single round trip
/// and errors are returned exactly as the transport or decoder produced them.
#[derive(Clone)]
pub struct ClusterApi {
    transport: Arc<dyn HttpTransport>,
    base_path: Arc<dyn ApiBasePath>,
}

impl ClusterApi {
    pub fn new(transport: Arc<dyn HttpTransport>, base_path: Arc<dyn ApiBasePath>) -> Self {
        Self {
            transport,
            base_path,
        }
    }

    /// Talk to the server at `server_url` over plain HTTP.
    pub fn for_server(server_url: &str) -> Self {
        Self::new(
            Arc::new(HyperTransport::new()),
            Arc::new(StaticBasePath::new(server_url)),
        )
    }

    /// Ask the server to connect to the cluster described by `params`.
    #[instrument(skip(self))]
    pub async fn connect_to_cluster(&self, params: ConnectRequestParams) -> Result<ConnectResponse> {
        let payload = ConnectRequest::new(params);
        generic_put(
            self.transport.as_ref(),
            self.base_path.as_ref(),
            CONNECTION_PATH,
            &payload,
        )
        .await
    }

    /// Current connection state as reported by the server.
    #[instrument(skip(self))]
    pub async fn check_cluster_connection(&self) -> Result<ConnectResponse> {
        let url = format!("{}{}", self.base_path.resolve(), CONNECTION_PATH);
        debug!("GET {}", url);
        let body = self.transport.get(&url).await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
