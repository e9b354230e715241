//! Report rendering.
//!
//! Responsibilities:
//! - Render the per-function detail sections, the fixed-width summary
//!   table, and the final verdict.
//!
//! Does NOT handle:
//! - Deciding outcomes (see verify.rs) or field inspection (inspect.rs).
//!
//! Invariants:
//! - Output is line-oriented plain text; stdout is the only result stream.
//! - Sample blocks print at most 30 lines, with a trailing marker when cut.

use std::fmt;

use crate::functions::FunctionSpec;
use crate::inspect::FieldCheck;

/// Width of the horizontal rules in the report.
const RULE_WIDTH: usize = 70;

/// Maximum number of sample lines printed per function.
const SAMPLE_MAX_LINES: usize = 30;

/// Maximum number of characters of the found-field list in a summary row.
const SUMMARY_FIELDS_CHARS: usize = 28;

/// Terminal state of one function's verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    /// Logs exist and at least one expected field was found.
    Found,
    /// Logs exist but none of the expected fields appeared.
    NoExpectedFields,
    /// The search returned no logs, or failed and was recovered.
    NoLogs,
}

impl fmt::Display for SearchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Found => "FOUND",
            Self::NoExpectedFields => "NO_EXPECTED_FIELDS",
            Self::NoLogs => "NO_LOGS",
        };
        f.write_str(label)
    }
}

/// Per-function verification outcome accumulated for the summary table.
#[derive(Debug, Clone)]
pub struct FunctionSummary {
    pub function: String,
    pub logs_found: usize,
    pub fields_found: Vec<String>,
    pub fields_missing: Vec<String>,
    pub status: SearchStatus,
}

/// Render the run banner.
pub fn render_header() -> String {
    let rule = "=".repeat(RULE_WIDTH);
    format!(
        "{rule}\nDataDog Log Verification for gRPC API Functions\n\
         Searching env:prod for 'handled request for <function_name>'\n{rule}\n"
    )
}

/// Render the section header for one function.
pub fn render_function_header(spec: &FunctionSpec) -> String {
    let rule = "─".repeat(RULE_WIDTH);
    format!(
        "\n{rule}\nFUNCTION: {}\nPurpose: {}\nExpected fields: {}\n{rule}",
        spec.name,
        spec.description,
        spec.expected_fields.join(", ")
    )
}

/// Render the per-field breakdown for the first log entry.
pub fn render_field_analysis(checks: &[FieldCheck]) -> String {
    let mut out = String::from("\n  Field Analysis (first log entry):");
    for check in checks {
        let marker = if check.found { "✅" } else { "❌" };
        out.push_str(&format!("\n    {marker} {}", check.field));
    }
    out
}

/// Render the indented sample block, cut to [`SAMPLE_MAX_LINES`] lines.
pub fn render_sample(sample: &str) -> String {
    let mut out = String::from("\n  Sample log content (truncated):");
    for line in sample.lines().take(SAMPLE_MAX_LINES) {
        out.push_str(&format!("\n    {line}"));
    }
    if sample.lines().count() > SAMPLE_MAX_LINES {
        out.push_str("\n    ... (truncated)");
    }
    out
}

/// Render the fixed-width summary table.
pub fn render_summary_table(summaries: &[FunctionSummary]) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = format!(
        "\n\n{rule}\nSUMMARY\n{rule}\n\n{:<30} {:<8} {:<30} {}\n{}",
        "Function",
        "Logs",
        "Fields Found",
        "Status",
        "-".repeat(RULE_WIDTH)
    );

    for summary in summaries {
        let joined: String = summary
            .fields_found
            .join(", ")
            .chars()
            .take(SUMMARY_FIELDS_CHARS)
            .collect();
        let fields = if joined.is_empty() {
            "none".to_string()
        } else {
            joined
        };
        let icon = if summary.status == SearchStatus::Found {
            "✅"
        } else {
            "❌"
        };

        out.push_str(&format!(
            "\n{:<30} {:<8} {:<30} {icon} {}",
            summary.function, summary.logs_found, fields, summary.status
        ));
    }

    out
}

/// Render the final verdict block.
pub fn render_conclusion(summaries: &[FunctionSummary]) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let total = summaries.len();
    let found_count = summaries
        .iter()
        .filter(|s| s.status == SearchStatus::Found)
        .count();

    let verdict = if found_count == total {
        format!("✅ All {total} API functions have logs with expected data")
    } else if found_count > 0 {
        let missing: Vec<&str> = summaries
            .iter()
            .filter(|s| s.status != SearchStatus::Found)
            .map(|s| s.function.as_str())
            .collect();
        format!(
            "⚠️  {found_count}/{total} API functions have logs with expected data\n   Missing: {}",
            missing.join(", ")
        )
    } else {
        "❌ No API functions found with expected data in logs".to_string()
    };

    format!("\n{rule}\nCONCLUSION\n{rule}\n{verdict}\n")
}
