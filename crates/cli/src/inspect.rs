//! Field inspection and content-sample extraction for log entries.
//!
//! Responsibilities:
//! - Check expected field names against one serialized log entry.
//! - Extract a readable content sample from a log entry's attributes.
//!
//! Does NOT handle:
//! - Report rendering (see report.rs).
//!
//! Invariants:
//! - The field check is a case-insensitive substring search over the whole
//!   serialized entry, not a JSON-path lookup. A field name appearing
//!   incidentally elsewhere in the payload counts as found; the looseness
//!   is intentional.
//! - Samples are truncated to at most 2000 characters.

use ddlog_client::LogEntry;
use serde_json::Value;

/// Maximum number of characters in an extracted content sample.
pub const SAMPLE_MAX_CHARS: usize = 2000;

/// Found-status for one expected field.
#[derive(Debug, Clone)]
pub struct FieldCheck {
    pub field: String,
    pub found: bool,
}

/// Check whether each expected field name appears anywhere in the
/// serialized log entry, case-insensitively.
pub fn check_fields(entry: &LogEntry, expected_fields: &[&str]) -> Vec<FieldCheck> {
    let haystack = serde_json::to_string(entry)
        .unwrap_or_default()
        .to_lowercase();

    expected_fields
        .iter()
        .map(|field| FieldCheck {
            field: (*field).to_string(),
            found: haystack.contains(&field.to_lowercase()),
        })
        .collect()
}

/// One candidate location for readable content in a log entry.
type Extractor = fn(&LogEntry) -> Option<String>;

/// Candidate locations tried in priority order; the first readable hit
/// wins.
const SAMPLE_EXTRACTORS: &[Extractor] = &[
    |entry| text_at(entry, &["attributes", "attributes", "response_body"]),
    |entry| text_at(entry, &["attributes", "attributes", "response"]),
    |entry| text_at(entry, &["attributes", "attributes", "body"]),
    |entry| text_at(entry, &["attributes", "message"]),
    |entry| text_at(entry, &["attributes", "attributes"]),
];

/// Extract a content sample from a log entry, truncated to
/// [`SAMPLE_MAX_CHARS`].
pub fn extract_sample(entry: &LogEntry) -> String {
    for extractor in SAMPLE_EXTRACTORS {
        if let Some(text) = extractor(entry) {
            return truncate_chars(&text, SAMPLE_MAX_CHARS);
        }
    }

    // Nothing readable at any candidate path; fall back to the raw
    // attributes mapping.
    let attributes = entry
        .attributes()
        .cloned()
        .unwrap_or_else(|| Value::Object(Default::default()));
    let text = serde_json::to_string_pretty(&attributes).unwrap_or_default();
    truncate_chars(&text, SAMPLE_MAX_CHARS)
}

fn text_at(entry: &LogEntry, path: &[&str]) -> Option<String> {
    entry.lookup(path).and_then(readable_text)
}

/// A value qualifies as readable when it is a non-empty string or a
/// non-empty mapping. Mappings are pretty-printed.
fn readable_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Object(map) if !map.is_empty() => serde_json::to_string_pretty(value).ok(),
        _ => None,
    }
}

fn truncate_chars(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}
