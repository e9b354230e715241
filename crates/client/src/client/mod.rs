//! Datadog API client and its builder.
//!
//! The client owns one configured `reqwest::Client` plus the credentials
//! for a run; request construction and execution live in
//! [`crate::endpoints`].

pub mod builder;

use ddlog_config::Credentials;

use crate::endpoints;
use crate::error::Result;
use crate::models::LogSearchResponse;

/// Production Datadog API base URL.
pub const DATADOG_API_URL: &str = "https://api.datadoghq.com";

/// Datadog logs-search API client.
///
/// Construct with [`DatadogClient::builder()`].
#[derive(Debug)]
pub struct DatadogClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) credentials: Credentials,
}

impl DatadogClient {
    /// Create a new client builder.
    pub fn builder() -> builder::DatadogClientBuilder {
        builder::DatadogClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Search production logs for `handled request for <function_name>`
    /// over the last 7 days, returning at most `limit` entries.
    pub async fn search_logs(
        &self,
        function_name: &str,
        limit: usize,
    ) -> Result<LogSearchResponse> {
        let request = endpoints::build_search_request(function_name, limit);
        endpoints::search_logs(&self.http, &self.base_url, &self.credentials, &request).await
    }
}
