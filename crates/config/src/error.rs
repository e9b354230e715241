//! Error types for configuration loading.

use thiserror::Error;

/// Errors that can occur while loading credentials.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// One or both required credentials are absent.
    #[error("DD_API_KEY and DD_APP_KEY must be set (via .env file or environment)")]
    MissingCredentials,
}
