//! Typed client for the Celo block explorer (Blockscout) HTTP API.
//!
//! Each endpoint builds a canonical query URL, issues one GET through a
//! [`Transport`], decodes the JSON envelope and converts the string-encoded
//! fields of the result into typed records.

pub mod addresses;
pub mod client;
pub mod convert;
mod endpoints;
pub mod error;
pub mod params;
pub mod query;
pub mod response;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod mock;

pub use addresses::*;
pub use client::Explorer;
pub use error::{ExplorerError, Result, TransportError};
pub use params::*;
pub use transport::{HttpConfig, HttpTransport, RawResponse, Transport};
pub use types::*;
