/// Constants used throughout the contextutil codebase
// Retry gate defaults
pub const DEFAULT_SAFE_WHILE_SLEEP_SECS: f64 = 6.0;
pub const DEFAULT_SAFE_WHILE_INCREMENT_SECS: f64 = 0.0;
pub const DEFAULT_SAFE_WHILE_TRIES: u32 = 10;

// Environment variable names
pub const CONTEXTUTIL_LOG_VAR: &str = "CONTEXTUTIL_LOG";

// Filter used when CONTEXTUTIL_LOG is unset
pub const DEFAULT_LOG_FILTER: &str = "info";

// Logged when a nested scope sees a failure
pub const NESTED_FAILURE_MESSAGE: &str = "Saw exception from nested scope";
