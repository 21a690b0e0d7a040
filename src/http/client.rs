// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Transport contract and the reqwest-backed implementation

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::redirect::Policy;
use reqwest::Client;
use tokio::sync::Semaphore;

use super::request::TransportRequest;
use super::response::ResponseEnvelope;
use crate::config::PipelineConfig;
use crate::error::{Error, Result};

/// Sends a built request and returns whatever came back
///
/// Implementations make a single attempt, honor `request.timeout`, and
/// report any status code as data rather than as an error.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send one request
    async fn send(&self, request: TransportRequest) -> Result<ResponseEnvelope>;

    /// Drop the current session and start a fresh one
    fn reset(&mut self) -> Result<()> {
        Ok(())
    }
}

/// HTTP transport backed by a `reqwest` client
pub struct HttpTransport {
    client: Client,
    config: PipelineConfig,
    /// Caps requests in flight
    semaphore: Arc<Semaphore>,
}

impl HttpTransport {
    /// Create a transport with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(PipelineConfig::default())
    }

    /// Create a transport with custom configuration
    pub fn with_config(config: PipelineConfig) -> Result<Self> {
        let client = build_client(&config)?;
        let semaphore = Arc::new(Semaphore::new(config.max_concurrent.max(1)));

        Ok(Self {
            client,
            config,
            semaphore,
        })
    }

    /// Get transport configuration
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Requests that can start right now without waiting
    pub fn available_permits(&self) -> usize {
        self.semaphore.available_permits()
    }

    /// Per-request timeout, capped by the client-wide one
    pub fn effective_timeout(&self, requested: Duration) -> Duration {
        requested.min(self.config.timeout)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: TransportRequest) -> Result<ResponseEnvelope> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| Error::transport("Transport semaphore closed"))?;

        let start = Instant::now();

        let mut builder = self
            .client
            .request(request.method.clone(), request.url.clone())
            .headers(request.headers)
            .timeout(self.effective_timeout(request.timeout));

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response.bytes().await?;

        tracing::debug!(
            method = %request.method,
            url = %request.url,
            status,
            time_ms = start.elapsed().as_millis() as u64,
            "Response received"
        );

        Ok(ResponseEnvelope::new(status, headers, Some(body)))
    }

    fn reset(&mut self) -> Result<()> {
        self.client = build_client(&self.config)?;
        tracing::info!("Transport session reset");
        Ok(())
    }
}

fn build_client(config: &PipelineConfig) -> Result<Client> {
    let mut default_headers = HeaderMap::new();
    for (name, value) in &config.default_headers {
        match (
            HeaderName::try_from(name.as_str()),
            HeaderValue::try_from(value.as_str()),
        ) {
            (Ok(name), Ok(value)) => {
                default_headers.insert(name, value);
            }
            _ => return Err(Error::Config(format!("Invalid default header: {}", name))),
        }
    }

    let mut builder = Client::builder()
        .user_agent(&config.user_agent)
        .timeout(config.timeout)
        .connect_timeout(config.connect_timeout)
        .redirect(Policy::limited(config.max_redirects))
        .danger_accept_invalid_certs(config.accept_invalid_certs)
        .default_headers(default_headers);

    if let Some(ref proxy_url) = config.proxy {
        builder = builder.proxy(
            reqwest::Proxy::all(proxy_url)
                .map_err(|e| Error::Config(format!("Invalid proxy URL: {}", e)))?,
        );
    }

    builder
        .build()
        .map_err(|e| Error::Config(format!("Failed to build HTTP client: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::DEFAULT_USER_AGENT;

    #[test]
    fn test_transport_creation() {
        let transport = HttpTransport::new().unwrap();
        assert_eq!(transport.config().user_agent, DEFAULT_USER_AGENT);
        assert_eq!(transport.available_permits(), 4);
    }

    #[test]
    fn test_invalid_proxy() {
        let config = PipelineConfig::new().proxy("::not a proxy::");
        let err = HttpTransport::with_config(config).err().unwrap();
        assert_eq!(err.kind(), crate::ErrorKind::Config);
    }

    #[test]
    fn test_invalid_default_header() {
        let config = PipelineConfig::new().default_header("bad header", "x");
        assert!(HttpTransport::with_config(config).is_err());
    }

    #[test]
    fn test_client_timeout_caps_request_timeout() {
        let transport =
            HttpTransport::with_config(PipelineConfig::new().timeout(Duration::from_secs(5))).unwrap();
        assert_eq!(
            transport.effective_timeout(Duration::from_secs(30)),
            Duration::from_secs(5)
        );
        assert_eq!(
            transport.effective_timeout(Duration::from_secs(2)),
            Duration::from_secs(2)
        );
    }

    #[test]
    fn test_reset() {
        let mut transport = HttpTransport::with_config(PipelineConfig::new().max_concurrent(2)).unwrap();
        transport.reset().unwrap();
        assert_eq!(transport.available_permits(), 2);
    }
}
