//! Builder methods for creating errors with context

use super::types::{BoxError, Error};

// Helper methods for creating errors with context
impl Error {
    /// Create a scoped resource error
    #[must_use]
    pub fn resource(
        resource: impl Into<String>,
        operation: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Error::Resource {
            resource: resource.into(),
            operation: operation.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Create a scoped resource error with a source error
    #[must_use]
    pub fn resource_with_source(
        resource: impl Into<String>,
        operation: impl Into<String>,
        message: impl Into<String>,
        source: impl Into<BoxError>,
    ) -> Self {
        Error::Resource {
            resource: resource.into(),
            operation: operation.into(),
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Create a block failure
    #[must_use]
    pub fn block(message: impl Into<String>) -> Self {
        Error::Block {
            message: message.into(),
            source: None,
        }
    }

    /// Create a block failure wrapping the error that caused it
    #[must_use]
    pub fn block_with_source(message: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Error::Block {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Create a max-tries error for an exhausted retry gate
    #[must_use]
    pub fn max_tries_exceeded(
        action: Option<String>,
        tries: u32,
        total_wait: f64,
        elapsed_wait: f64,
    ) -> Self {
        Error::MaxTriesExceeded {
            action,
            tries,
            total_wait,
            elapsed_wait,
        }
    }

    /// Create a configuration error
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }

    /// Whether this error came from an exhausted retry gate
    #[must_use]
    pub fn is_max_tries_exceeded(&self) -> bool {
        matches!(self, Error::MaxTriesExceeded { .. })
    }
}
