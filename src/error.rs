//! Error types for the crypto market client

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur when fetching market data from the upstream API
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Transport-level failure (timeout, DNS, connection refused) -
    /// no response was received
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The upstream API answered with a non-success HTTP status
    #[error("Upstream error: HTTP {status}")]
    Upstream { status: StatusCode },

    /// The upstream API does not recognize the asset identifier
    /// (details endpoint only)
    #[error("Asset not found: {id}")]
    NotFound { id: String },
}

impl ProviderError {
    /// Creates an Upstream error from a response status
    pub fn upstream(status: StatusCode) -> Self {
        Self::Upstream { status }
    }

    /// Creates a NotFound error
    pub fn not_found(id: &str) -> Self {
        Self::NotFound { id: id.to_string() }
    }
}

/// Errors that can occur when reading or writing durable favorites storage.
///
/// These are never fatal: the favorites store always degrades to its
/// in-memory state when persistence fails.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// Storage read/write failed
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The persisted snapshot could not be serialized
    #[error("Storage serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
