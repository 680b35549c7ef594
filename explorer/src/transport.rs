//! HTTP transport underneath [`crate::Explorer`].
//!
//! The client only ever issues GET requests against the explorer API and
//! needs the status code plus the raw body back, so the seam is a single
//! method. Tests substitute a canned transport.

use std::time::Duration;

use bytes::Bytes;
use reqwest::Client as HttpClient;
use url::Url;

use crate::addresses::MAINNET_BASE_URL;
use crate::error::TransportError;

/// Status code and undecoded body of one explorer response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Bytes,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn get(&self, url: &Url) -> Result<RawResponse, TransportError>;
}

/// Connection pool settings for [`HttpTransport`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpConfig {
    pub base_url: String,
    /// Idle keep-alive connections kept per host.
    pub max_idle_connections: usize,
    pub idle_timeout: Duration,
    /// Whole-request timeout. `None` waits indefinitely.
    pub request_timeout: Option<Duration>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            base_url: MAINNET_BASE_URL.to_string(),
            max_idle_connections: 100,
            idle_timeout: Duration::from_secs(30),
            request_timeout: None,
        }
    }
}

/// Pooled `reqwest` transport. Cheap to clone; clones share one pool and
/// can be used from many tasks at once.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    http: HttpClient,
}

impl HttpTransport {
    pub fn new(config: &HttpConfig) -> Result<Self, TransportError> {
        let mut builder = HttpClient::builder()
            .pool_max_idle_per_host(config.max_idle_connections)
            .pool_idle_timeout(config.idle_timeout);
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
        })
    }
}

impl Transport for HttpTransport {
    async fn get(&self, url: &Url) -> Result<RawResponse, TransportError> {
        tracing::debug!(%url, "explorer request");
        let resp = self.http.get(url.clone()).send().await?;
        let status = resp.status().as_u16();
        let body = resp.bytes().await?;
        tracing::debug!(status, len = body.len(), "explorer response");
        Ok(RawResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_targets_mainnet() {
        let cfg = HttpConfig::default();
        assert_eq!(cfg.base_url, MAINNET_BASE_URL);
        assert_eq!(cfg.max_idle_connections, 100);
        assert_eq!(cfg.idle_timeout, Duration::from_secs(30));
        assert!(cfg.request_timeout.is_none());
    }

    #[test]
    fn builds_with_timeout() {
        let cfg = HttpConfig {
            request_timeout: Some(Duration::from_secs(5)),
            ..HttpConfig::default()
        };
        assert!(HttpTransport::new(&cfg).is_ok());
    }
}
