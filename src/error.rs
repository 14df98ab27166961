//! Error types for the CampusNet core
//!
//! This module provides structured error handling using thiserror. Storage
//! failures are normally swallowed at the store boundary (see `storage`);
//! the variants here exist for the backends and the advisor adapter, which
//! do report failures to their immediate callers.

use thiserror::Error;

/// Main error type for CampusNet operations
#[derive(Error, Debug)]
pub enum CampusNetError {
    /// Key-value backend operation failed
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization or deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Advisor API request failed
    #[error("Advisor API error: {0}")]
    AdvisorApi(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

/// Result type alias for CampusNet operations
pub type Result<T> = std::result::Result<T, CampusNetError>;

/// Convert anyhow::Error to CampusNetError
impl From<anyhow::Error> for CampusNetError {
    fn from(err: anyhow::Error) -> Self {
        CampusNetError::Other(err.to_string())
    }
}
