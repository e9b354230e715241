//! dd-log-verify - Datadog log verification for traced gRPC API functions.
//!
//! Responsibilities:
//! - Load Datadog credentials (`.env` file, environment fallback).
//! - Run the sequential verification pass over the traced functions.
//! - Print the human-readable report to stdout.
//!
//! Does NOT handle:
//! - REST API implementation (see `crates/client`).
//! - Persistence of results; the printed report is the whole product.
//!
//! Invariants:
//! - Credentials are resolved before any network activity; missing keys
//!   abort with exit code 1.
//! - A failed search degrades that one function to NO_LOGS and never
//!   aborts the run.

mod error;
mod functions;
mod inspect;
mod report;
mod verify;

use ddlog_client::DatadogClient;
use ddlog_config::{Credentials, env_var_or_none};
use error::ExitCode;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer())
        .init();

    let credentials = match Credentials::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("ERROR: {e}");
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };

    let mut builder = DatadogClient::builder().credentials(credentials);
    // DD_API_URL overrides the production endpoint; integration tests point
    // this at a mock server.
    if let Some(url) = env_var_or_none("DD_API_URL") {
        builder = builder.base_url(url);
    }

    let client = match builder.build() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("ERROR: {e}");
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };

    verify::run(&client).await;

    std::process::exit(ExitCode::Success.as_i32());
}
