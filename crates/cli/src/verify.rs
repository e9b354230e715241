//! Sequential verification runner.
//!
//! Responsibilities:
//! - Drive one search per traced function, in list order.
//! - Recover per-search failures into a NO_LOGS outcome for that function.
//! - Print section detail as it goes, then the summary and verdict.
//!
//! Invariants:
//! - Lookups are strictly sequential; a failed search never aborts the run.
//! - The exit status does not depend on verification outcomes.

use ddlog_client::{ClientError, DatadogClient};
use tracing::debug;

use crate::functions::API_FUNCTIONS;
use crate::inspect;
use crate::report::{self, FunctionSummary, SearchStatus};

/// Page limit requested for each function's search.
const SEARCH_RESULT_LIMIT: usize = 3;

/// Run the verification pass and print the report to stdout.
pub async fn run(client: &DatadogClient) {
    println!("{}", report::render_header());

    let mut summaries = Vec::with_capacity(API_FUNCTIONS.len());

    for spec in API_FUNCTIONS {
        println!("{}", report::render_function_header(spec));
        println!("\nSearching DataDog...");

        let response = match client.search_logs(spec.name, SEARCH_RESULT_LIMIT).await {
            Ok(response) => response,
            Err(e) => {
                print_search_error(&e);
                Default::default()
            }
        };

        let logs = response.data;
        if logs.is_empty() {
            println!("  ❌ NO LOGS FOUND for '{}'", spec.name);
            summaries.push(FunctionSummary {
                function: spec.name.to_string(),
                logs_found: 0,
                fields_found: Vec::new(),
                fields_missing: Vec::new(),
                status: SearchStatus::NoLogs,
            });
            continue;
        }

        println!("  ✅ Found {} log(s)", logs.len());

        // Only the most recent entry is inspected; the search is sorted
        // descending by timestamp.
        let first_log = &logs[0];
        let checks = inspect::check_fields(first_log, spec.expected_fields);
        let fields_found: Vec<String> = checks
            .iter()
            .filter(|c| c.found)
            .map(|c| c.field.clone())
            .collect();
        let fields_missing: Vec<String> = checks
            .iter()
            .filter(|c| !c.found)
            .map(|c| c.field.clone())
            .collect();

        println!("{}", report::render_field_analysis(&checks));

        let sample = inspect::extract_sample(first_log);
        println!("{}", report::render_sample(&sample));

        if !fields_missing.is_empty() {
            debug!(
                "{}: expected fields missing from first entry: {}",
                spec.name,
                fields_missing.join(", ")
            );
        }

        let status = if fields_found.is_empty() {
            SearchStatus::NoExpectedFields
        } else {
            SearchStatus::Found
        };

        summaries.push(FunctionSummary {
            function: spec.name.to_string(),
            logs_found: logs.len(),
            fields_found,
            fields_missing,
            status,
        });
    }

    println!("{}", report::render_summary_table(&summaries));
    println!("{}", report::render_conclusion(&summaries));
}

/// Print the failure reason for one search; the caller substitutes an
/// empty result so the remaining functions are still evaluated.
fn print_search_error(error: &ClientError) {
    match error {
        ClientError::ApiError {
            status, message, ..
        } => {
            println!("  ERROR: HTTP {status}");
            println!("  Response: {message}");
        }
        other => {
            println!("  ERROR: {other}");
        }
    }
}
