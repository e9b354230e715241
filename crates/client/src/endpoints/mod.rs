//! Endpoint implementations for the Datadog API.
//!
//! Endpoints are free async functions over a shared `reqwest::Client`, so
//! they can be exercised directly in tests without constructing a full
//! [`crate::DatadogClient`].

pub mod search;

pub use search::{LOGS_SEARCH_PATH, build_search_request, build_search_request_at, search_logs};
