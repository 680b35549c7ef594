use thiserror::Error;

pub type Result<T, E = ExplorerError> = std::result::Result<T, E>;

/// Failure to get any response at all out of the transport.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("transport failed: {0}")]
    Other(String),
}

#[derive(Debug, Error)]
pub enum ExplorerError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Failure reported by the explorer itself, message passed through verbatim.
    #[error("explorer error: {0}")]
    Upstream(String),

    #[error("malformed explorer response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid explorer url: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl ExplorerError {
    /// Message of an explorer-reported failure, if this is one.
    pub fn upstream_message(&self) -> Option<&str> {
        match self {
            ExplorerError::Upstream(msg) => Some(msg),
            _ => None,
        }
    }
}
