//! Error types for the catalog gateway.

use thiserror::Error;

/// Errors that can occur when talking to the remote catalog.
///
/// These never escape the public gateway methods; they exist so the
/// internal fetch paths can report precisely what went wrong before the
/// gateway swallows and logs it.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API returned a non-success status
    #[error("Catalog error ({status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body, if any
        message: String,
    },

    /// Failed to parse the response body
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Invalid catalog base URL
    #[error("Invalid catalog URL: {0}")]
    InvalidUrl(String),
}

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
