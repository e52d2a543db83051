//! Core error type definitions

/// Result type alias for contextutil operations
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed error used as the source of resource and block failures
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Core error type for contextutil operations using thiserror
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A scoped resource failed to be built, entered or exited
    #[error("scoped resource '{resource}' failed to {operation}: {message}")]
    Resource {
        resource: String,
        operation: String,
        message: String,
        #[source]
        source: Option<BoxError>,
    },

    /// The block wrapped by a nested scope failed
    #[error("scoped block failed: {message}")]
    Block {
        message: String,
        #[source]
        source: Option<BoxError>,
    },

    /// A retry gate ran out of tries
    #[error("{}", format_max_tries(.action, .tries, .total_wait))]
    MaxTriesExceeded {
        action: Option<String>,
        tries: u32,
        /// Sleep the whole configured budget adds up to, in seconds
        total_wait: f64,
        /// Sleep actually requested before the budget ran out, in seconds
        elapsed_wait: f64,
    },

    /// Configuration errors
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

fn format_max_tries(action: &Option<String>, tries: &u32, total_wait: &f64) -> String {
    // An empty label counts as no label
    match action.as_deref().filter(|action| !action.is_empty()) {
        Some(action) => format!(
            "'{action}' reached maximum tries ({tries}) after waiting for {total_wait} seconds"
        ),
        None => format!("reached maximum tries ({tries}) after waiting for {total_wait} seconds"),
    }
}
