//! Log search endpoint.
//!
//! Responsibilities:
//! - Build time-windowed full-text search requests for a traced function.
//! - POST the request with Datadog auth headers and parse the response.
//!
//! Does NOT handle:
//! - Recovery from failed searches (callers decide; see the CLI runner).
//! - Pagination (a single page-limited request per function).
//!
//! Invariants:
//! - The time window always spans exactly 7 days ending at `now`.
//! - Timestamps are UTC, second precision, ISO-8601 with a `Z` suffix.
//! - Non-2xx responses carry at most 500 characters of the error body.

use chrono::{DateTime, Duration, Utc};
use reqwest::Client;
use secrecy::ExposeSecret;
use tracing::debug;

use ddlog_config::Credentials;
use ddlog_config::constants::SEARCH_WINDOW_DAYS;

use crate::error::{ClientError, Result};
use crate::models::{LogSearchResponse, SearchFilter, SearchPage, SearchRequest};

/// Path of the v2 log search endpoint.
pub const LOGS_SEARCH_PATH: &str = "/api/v2/logs/events/search";

/// Timestamp format accepted by the search filter.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Maximum number of error-body characters carried into an `ApiError`.
const ERROR_BODY_PREVIEW_CHARS: usize = 500;

/// Build a search request for logs reading `handled request for <name>` in
/// the production environment, over the last 7 days.
pub fn build_search_request(function_name: &str, limit: usize) -> SearchRequest {
    build_search_request_at(function_name, limit, Utc::now())
}

/// Same as [`build_search_request`] with an explicit upper bound for the
/// time window. The lower bound is always 7 days earlier.
pub fn build_search_request_at(
    function_name: &str,
    limit: usize,
    now: DateTime<Utc>,
) -> SearchRequest {
    let from = now - Duration::days(SEARCH_WINDOW_DAYS);

    SearchRequest {
        filter: SearchFilter {
            query: format!("env:prod \"handled request for {function_name}\""),
            from: from.format(TIMESTAMP_FORMAT).to_string(),
            to: now.format(TIMESTAMP_FORMAT).to_string(),
        },
        sort: "-timestamp".to_string(),
        page: SearchPage { limit },
    }
}

/// Execute a log search.
pub async fn search_logs(
    http: &Client,
    base_url: &str,
    credentials: &Credentials,
    request: &SearchRequest,
) -> Result<LogSearchResponse> {
    debug!("Searching Datadog logs: {}", request.filter.query);

    let url = format!("{base_url}{LOGS_SEARCH_PATH}");

    let response = http
        .post(&url)
        .header("DD-API-KEY", credentials.api_key.expose_secret())
        .header("DD-APPLICATION-KEY", credentials.app_key.expose_secret())
        .json(request)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Could not read error response body".to_string());
        let message: String = body.chars().take(ERROR_BODY_PREVIEW_CHARS).collect();

        return Err(ClientError::ApiError {
            status: status.as_u16(),
            url,
            message,
        });
    }

    Ok(response.json().await?)
}
