//! Wire types for the Datadog v2 logs search API.
//!
//! The request side is a typed rendition of the vendor's JSON search
//! contract. The response side stays deliberately loose: log entries are
//! carried as raw JSON and inspected by serialization, never by schema.

use ddlog_config::constants::DEFAULT_PAGE_LIMIT;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A log search request: `{filter: {query, from, to}, sort, page: {limit}}`.
#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest {
    pub filter: SearchFilter,
    pub sort: String,
    pub page: SearchPage,
}

/// Full-text query plus time range.
#[derive(Debug, Clone, Serialize)]
pub struct SearchFilter {
    pub query: String,
    pub from: String,
    pub to: String,
}

/// Page-size limit for a search.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SearchPage {
    pub limit: usize,
}

impl Default for SearchPage {
    fn default() -> Self {
        Self {
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

/// Response body: a top-level `data` array of log entries. Unknown keys
/// are ignored; a missing `data` key is an empty result.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LogSearchResponse {
    #[serde(default)]
    pub data: Vec<LogEntry>,
}

/// One vendor-returned log entry, kept as raw JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LogEntry(pub Value);

impl LogEntry {
    /// The entry's `attributes` mapping, if present.
    pub fn attributes(&self) -> Option<&Value> {
        self.0.get("attributes")
    }

    /// Walk a nested key path, returning None as soon as a key is absent.
    pub fn lookup(&self, path: &[&str]) -> Option<&Value> {
        path.iter().try_fold(&self.0, |value, key| value.get(key))
    }
}
