//! Credential loading.
//!
//! Responsibilities:
//! - Read `DD_API_KEY` / `DD_APP_KEY` from an optional `.env` file in the
//!   working directory.
//! - Fall back to process environment variables, per key.
//!
//! Does NOT handle:
//! - Validation of key format (keys are passed through as-is).
//! - Persisting or caching credentials.
//!
//! Invariants:
//! - File values take precedence over same-named environment variables.
//! - Empty or whitespace-only values are treated as unset.
//! - Loading fails with `ConfigError::MissingCredentials` when either key
//!   is absent, before any network activity.

use std::collections::HashMap;
use std::path::Path;

use secrecy::SecretString;
use tracing::warn;

use crate::constants::{API_KEY_VAR, APP_KEY_VAR, ENV_FILE_NAME};
use crate::error::ConfigError;

/// Datadog API credentials for one verification run.
///
/// Constructed explicitly and passed into the client; there is no
/// process-global credential state.
#[derive(Debug, Clone)]
pub struct Credentials {
    /// Value sent as the `DD-API-KEY` header.
    pub api_key: SecretString,
    /// Value sent as the `DD-APPLICATION-KEY` header.
    pub app_key: SecretString,
}

impl Credentials {
    /// Load credentials from `./.env` and the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Path::new(ENV_FILE_NAME))
    }

    /// Load credentials from the given file path and the process environment.
    ///
    /// The file is optional. Each key is resolved independently: the file
    /// value wins, the environment fills the gap.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let file_vars = read_env_file(path);

        let api_key = resolve_key(&file_vars, API_KEY_VAR);
        let app_key = resolve_key(&file_vars, APP_KEY_VAR);

        match (api_key, app_key) {
            (Some(api_key), Some(app_key)) => Ok(Self {
                api_key: SecretString::new(api_key.into()),
                app_key: SecretString::new(app_key.into()),
            }),
            _ => Err(ConfigError::MissingCredentials),
        }
    }
}

/// Resolve one key: file value first, environment second.
fn resolve_key(file_vars: &HashMap<String, String>, key: &str) -> Option<String> {
    file_vars
        .get(key)
        .cloned()
        .and_then(non_empty)
        .or_else(|| env_var_or_none(key))
}

/// Read `KEY=VALUE` pairs from a dotenv-format file without touching the
/// process environment. A missing or unreadable file yields an empty map;
/// unparseable lines are skipped.
fn read_env_file(path: &Path) -> HashMap<String, String> {
    let Ok(iter) = dotenvy::from_path_iter(path) else {
        return HashMap::new();
    };

    let mut vars = HashMap::new();
    for item in iter {
        match item {
            Ok((key, value)) => {
                vars.insert(key, value);
            }
            Err(e) => {
                warn!("Skipping unparseable line in {}: {}", path.display(), e);
            }
        }
    }
    vars
}

/// Read an environment variable, returning None if unset, empty, or
/// whitespace-only. Returns the trimmed value if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(non_empty)
}

fn non_empty(s: String) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.len() == s.len() {
        Some(s)
    } else {
        Some(trimmed.to_string())
    }
}
