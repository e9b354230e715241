//! Client builder for constructing [`DatadogClient`] instances.
//!
//! Responsibilities:
//! - Provide a fluent builder API for client configuration.
//! - Validate required configuration (credentials).
//! - Normalize the base URL (removing trailing slashes).
//! - Configure the underlying HTTP client (timeout).
//!
//! Invariants:
//! - `credentials` is required and must be provided before calling `build()`.
//! - The base URL is always normalized to have no trailing slashes.

use std::time::Duration;

use ddlog_config::Credentials;
use ddlog_config::constants::DEFAULT_TIMEOUT_SECS;

use crate::client::{DATADOG_API_URL, DatadogClient};
use crate::error::{ClientError, Result};

/// Builder for creating a new [`DatadogClient`].
///
/// Credentials are required; the base URL defaults to the production
/// Datadog endpoint and the timeout to 30 seconds.
///
/// # Example
///
/// ```rust,ignore
/// let client = DatadogClient::builder()
///     .credentials(credentials)
///     .timeout(Duration::from_secs(60))
///     .build()?;
/// ```
pub struct DatadogClientBuilder {
    base_url: String,
    credentials: Option<Credentials>,
    timeout: Duration,
}

impl Default for DatadogClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DATADOG_API_URL.to_string(),
            credentials: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl DatadogClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the API base URL.
    ///
    /// Trailing slashes will be automatically removed. Tests point this at
    /// a mock server; production keeps the default.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = url;
        self
    }

    /// Set the Datadog credentials. Required.
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set the request timeout.
    ///
    /// Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Normalize a base URL by removing trailing slashes.
    ///
    /// This prevents double slashes when concatenating with endpoint paths.
    fn normalize_base_url(url: String) -> String {
        url.trim_end_matches('/').to_string()
    }

    /// Build the [`DatadogClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::AuthFailed`] if credentials were not provided.
    /// Returns `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<DatadogClient> {
        let credentials = self
            .credentials
            .ok_or_else(|| ClientError::AuthFailed("credentials are required".to_string()))?;

        let http = reqwest::Client::builder().timeout(self.timeout).build()?;

        Ok(DatadogClient {
            http,
            base_url: Self::normalize_base_url(self.base_url),
            credentials,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;

    fn test_credentials() -> Credentials {
        Credentials {
            api_key: SecretString::new("test-api-key".to_string().into()),
            app_key: SecretString::new("test-app-key".to_string().into()),
        }
    }

    #[test]
    fn build_defaults_to_production_endpoint() {
        let client = DatadogClient::builder()
            .credentials(test_credentials())
            .build()
            .expect("build");
        assert_eq!(client.base_url(), "https://api.datadoghq.com");
    }

    #[test]
    fn build_without_credentials_fails() {
        let err = DatadogClient::builder().build().expect_err("should fail");
        assert!(matches!(err, ClientError::AuthFailed(_)));
    }

    #[test]
    fn base_url_trailing_slashes_are_stripped() {
        let client = DatadogClient::builder()
            .credentials(test_credentials())
            .base_url("http://localhost:8080//".to_string())
            .build()
            .expect("build");
        assert_eq!(client.base_url(), "http://localhost:8080");
    }
}
