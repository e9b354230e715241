//! Error types for the Datadog client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during Datadog client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Authentication configuration is missing or unusable.
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    /// Transport-level failure (connection, DNS, timeout).
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Non-2xx response from the Datadog API.
    #[error("API error ({status}) at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
    },
}
