use serde::de::DeserializeOwned;
use url::Url;

use crate::addresses::Network;
use crate::error::Result;
use crate::query::QueryBuilder;
use crate::response::{decode_envelope, decode_rpc};
use crate::transport::{HttpConfig, HttpTransport, Transport};

/// Client for one explorer API root, e.g. `https://explorer.celo.org/api`.
///
/// Every endpoint method issues exactly one GET and shares no mutable state
/// with other calls, so a single `Explorer<HttpTransport>` can serve many
/// concurrent tasks.
#[derive(Clone, Debug)]
pub struct Explorer<T: Transport = HttpTransport> {
    base: Url,
    transport: T,
}

impl Explorer<HttpTransport> {
    /// Pooled client with default connection settings.
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_config(HttpConfig {
            base_url: base_url.to_string(),
            ..HttpConfig::default()
        })
    }

    pub fn with_config(config: HttpConfig) -> Result<Self> {
        let transport = HttpTransport::new(&config)?;
        Self::with_transport(&config.base_url, transport)
    }

    pub fn for_network(network: Network) -> Result<Self> {
        Self::new(network.base_url())
    }
}

impl<T: Transport> Explorer<T> {
    pub fn with_transport(base_url: &str, transport: T) -> Result<Self> {
        Ok(Self {
            base: Url::parse(base_url)?,
            transport,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Request URL for a query against this explorer.
    pub fn url_for(&self, query: &QueryBuilder) -> Url {
        query.apply(&self.base)
    }

    /// Envelope-style call: `status: "1"` decodes `result` into `R`.
    pub(crate) async fn get_envelope<R: DeserializeOwned>(&self, query: &QueryBuilder) -> Result<R> {
        let resp = self.transport.get(&self.url_for(query)).await?;
        decode_envelope(&resp.body)
    }

    /// RPC-style call: returns the textual `result` of a 2xx response.
    pub(crate) async fn get_rpc(&self, query: &QueryBuilder) -> Result<String> {
        let resp = self.transport.get(&self.url_for(query)).await?;
        decode_rpc(resp.status, &resp.body)
    }
}
