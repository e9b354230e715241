//! Datadog logs-search API client.
//!
//! This crate provides a small typed client for the Datadog v2 log search
//! endpoint. It knows how to build the time-windowed full-text queries used
//! by the verification tool and how to map transport and API failures to
//! typed errors.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;

pub use client::{DATADOG_API_URL, DatadogClient};
pub use client::builder::DatadogClientBuilder;
pub use error::{ClientError, Result};
pub use models::{LogEntry, LogSearchResponse, SearchFilter, SearchPage, SearchRequest};
