//! Configuration for the Datadog log verification tool.
//!
//! Credentials come from an optional `.env` file in the working directory,
//! with process environment variables as a per-key fallback. File values
//! take precedence over same-named environment variables.

pub mod constants;
mod error;
mod loader;

pub use error::ConfigError;
pub use loader::{Credentials, env_var_or_none};
