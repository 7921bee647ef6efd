use super::transport::HttpTransport;
use crate::error::{CommonError, Result};
use async_trait::async_trait;
use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::header::{CONTENT_TYPE, HOST};
use hyper::{Method, Request, Uri};
use hyper_util::rt::TokioIo;
use tokio::net::TcpStream;
use tracing::debug;

/// HTTP/1.1 transport that opens a fresh connection for every request.
#[derive(Debug, Clone, Default)]
pub struct HyperTransport;

impl HyperTransport {
    pub fn new() -> Self {
        Self
    }

    async fn send(
        &self,
        method: Method,
        url: &str,
        content_type: Option<&str>,
        body: Bytes,
    ) -> Result<Bytes> {
        let target = Target::parse(url)?;

        let stream = TcpStream::connect(target.socket_addr()).await?;
        let io = TokioIo::new(stream);

        let (mut sender, conn) = hyper::client::conn::http1::handshake(io).await?;

        tokio::spawn(async move {
            if let Err(e) = conn.await {
                debug!("Connection error: {}", e);
            }
        });

        let mut builder = Request::builder()
            .method(method.clone())
            .uri(target.path_and_query.as_str())
            .header(HOST, target.host_header.as_str());
        if let Some(content_type) = content_type {
            builder = builder.header(CONTENT_TYPE, content_type);
        }
        let req = builder.body(Full::new(body))?;

        let res = sender.send_request(req).await?;
        let status = res.status();
        let body = res.collect().await?.to_bytes();

        debug!(
            "HTTP {} {} - Status: {} - {} bytes",
            method,
            url,
            status,
            body.len()
        );

        Ok(body)
    }
}

#[async_trait]
impl HttpTransport for HyperTransport {
    async fn get(&self, url: &str) -> Result<Bytes> {
        self.send(Method::GET, url, None, Bytes::new()).await
    }

    async fn put(&self, url: &str, content_type: &str, body: Bytes) -> Result<Bytes> {
        self.send(Method::PUT, url, Some(content_type), body).await
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Target {
    host: String,
    port: u16,
    /// `host[:port]`, never carrying userinfo
    host_header: String,
    path_and_query: String,
}

impl Target {
    fn parse(url: &str) -> Result<Self> {
        let uri: Uri = url
            .parse()
            .map_err(|_| CommonError::InvalidUrl(url.to_string()))?;

        if uri.scheme_str() != Some("http") {
            return Err(CommonError::InvalidUrl(format!(
                "{}: only http:// is supported",
                url
            )));
        }

        let authority = uri
            .authority()
            .ok_or_else(|| CommonError::InvalidUrl(format!("{}: missing host", url)))?;
        let host = authority.host();
        if host.is_empty() {
            return Err(CommonError::InvalidUrl(format!("{}: missing host", url)));
        }

        let path_and_query = uri
            .path_and_query()
            .map(|pq| pq.as_str().to_string())
            .unwrap_or_else(|| "/".to_string());

        let host_header = match authority.port_u16() {
            Some(port) => format!("{}:{}", host, port),
            None => host.to_string(),
        };

        Ok(Self {
            host: host.trim_start_matches('[').trim_end_matches(']').to_string(),
            port: authority.port_u16().unwrap_or(80),
            host_header,
            path_and_query,
        })
    }

    fn socket_addr(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }
}
