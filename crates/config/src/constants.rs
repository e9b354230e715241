//! Shared constants for the verification tool.

/// Name of the optional credentials file in the working directory.
pub const ENV_FILE_NAME: &str = ".env";

/// File/environment key for the Datadog API key.
pub const API_KEY_VAR: &str = "DD_API_KEY";

/// File/environment key for the Datadog application key.
pub const APP_KEY_VAR: &str = "DD_APP_KEY";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default page limit for log searches.
pub const DEFAULT_PAGE_LIMIT: usize = 5;

/// Log search window, in days before now.
pub const SEARCH_WINDOW_DAYS: i64 = 7;
