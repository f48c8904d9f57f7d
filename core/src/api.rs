//! Network-backed HTTP client for the amphibians endpoint.
//!
//! # Design
//! `AmphibiansApi` owns an `AmphibiansClient` for building and parsing, and a
//! `ureq::Agent` configured once at construction. The agent is blocking, so
//! each round-trip runs on Tokio's blocking pool and the async caller only
//! suspends while awaiting it. Non-2xx statuses are returned as data
//! (`http_status_as_error(false)`) so status interpretation stays in the
//! parser.

use tokio::task;
use tracing::debug;

use crate::client::AmphibiansClient;
use crate::config::ClientConfig;
use crate::error::{ApiError, ConfigError};
use crate::http::{HttpRequest, HttpResponse};
use crate::types::Amphibian;

#[derive(Clone)]
pub struct AmphibiansApi {
    client: AmphibiansClient,
    agent: ureq::Agent,
}

impl AmphibiansApi {
    pub fn new(config: &ClientConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(config.timeout())
            .build()
            .new_agent();
        Ok(Self {
            client: AmphibiansClient::new(config.base_url.trim()),
            agent,
        })
    }

    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    /// GET `{base}/amphibians` and decode the body. One request per call, no
    /// retries.
    pub async fn get_amphibians(&self) -> Result<Vec<Amphibian>, ApiError> {
        let request = self.client.build_get_amphibians();
        debug!(url = %request.url, "fetching amphibians");

        let agent = self.agent.clone();
        let response = task::spawn_blocking(move || execute(&agent, request))
            .await
            .map_err(|e| ApiError::Transport(format!("request task failed: {e}")))??;
        debug!(status = response.status, bytes = response.body.len(), "amphibians response");

        let amphibians = self.client.parse_get_amphibians(response)?;
        debug!(count = amphibians.len(), "decoded amphibians");
        Ok(amphibians)
    }
}

impl std::fmt::Debug for AmphibiansApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AmphibiansApi")
            .field("client", &self.client)
            .finish_non_exhaustive()
    }
}

/// Execute an `HttpRequest` with ureq and return the response as data.
fn execute(agent: &ureq::Agent, request: HttpRequest) -> Result<HttpResponse, ApiError> {
    let mut builder = agent.get(&request.url);
    for (key, value) in &request.headers {
        builder = builder.header(key.as_str(), value.as_str());
    }
    let mut response = builder
        .call()
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    let status = response.status().as_u16();
    let headers = response
        .headers()
        .iter()
        .filter_map(|(k, v)| v.to_str().ok().map(|v| (k.as_str().to_string(), v.to_string())))
        .collect();
    let body = response
        .body_mut()
        .read_to_vec()
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    Ok(HttpResponse {
        status,
        headers,
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_invalid_config() {
        let err = AmphibiansApi::new(&ClientConfig::with_base_url("not a url")).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBaseUrl(_)));
    }

    #[test]
    fn new_trims_base_url() {
        let api = AmphibiansApi::new(&ClientConfig::with_base_url("http://localhost:3000/")).unwrap();
        assert_eq!(api.base_url(), "http://localhost:3000");
    }

    #[tokio::test]
    async fn connection_refused_is_a_transport_error() {
        // Bind then drop to get a port with nothing listening on it.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let api = AmphibiansApi::new(&ClientConfig::with_base_url(format!("http://{addr}"))).unwrap();
        let err = api.get_amphibians().await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)), "{err:?}");
    }

    #[tokio::test]
    async fn invalid_utf8_body_is_a_decode_error() {
        use std::io::{Read, Write};

        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let body = [b'[', 0xff, 0xfe, b']'];
            let head = format!(
                "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n",
                body.len()
            );
            stream.write_all(head.as_bytes()).unwrap();
            stream.write_all(&body).unwrap();
        });

        let api = AmphibiansApi::new(&ClientConfig::with_base_url(format!("http://{addr}"))).unwrap();
        let err = api.get_amphibians().await.unwrap_err();
        assert!(err.is_decode(), "{err:?}");
    }
}
