//! Failure observers for nested scopes.

use contextutil_core::{Error, NESTED_FAILURE_MESSAGE};

/// Receives every failure a nested scope sees before it propagates
pub trait FailureObserver {
    /// Record a failure observed by the scope
    fn record_exception(&self, error: &Error);
}

impl<O: FailureObserver + ?Sized> FailureObserver for &O {
    fn record_exception(&self, error: &Error) {
        (**self).record_exception(error);
    }
}

impl<O: FailureObserver + ?Sized> FailureObserver for Box<O> {
    fn record_exception(&self, error: &Error) {
        (**self).record_exception(error);
    }
}

/// Default observer: emits one `tracing` error event per failure
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl FailureObserver for TracingObserver {
    fn record_exception(&self, error: &Error) {
        tracing::error!(error = %error, "{}", NESTED_FAILURE_MESSAGE);
    }
}
