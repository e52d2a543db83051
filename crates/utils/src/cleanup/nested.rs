//! Nested scopes: enter several resources as one and exit them all.
//!
//! Resources are entered in order and exited in reverse order no matter which
//! step fails. The first failure (from a factory, an `enter`, or the block) is
//! handed to every `exit`. An `exit` may suppress it by returning `Ok(true)`,
//! or replace it by returning an error, in which case the newest teardown
//! error is the one returned to the caller.

use super::observer::{FailureObserver, TracingObserver};
use super::resource::{factory, BoxedResource, ResourceFactory, ScopedResource};
use contextutil_core::{Error, Result};

/// Builder for a nested scope over resources yielding `V`
pub struct Nested<'a, V> {
    factories: Vec<ResourceFactory<'a, V>>,
    observer: Box<dyn FailureObserver + 'a>,
}

impl<'a, V: 'a> Default for Nested<'a, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, V: 'a> Nested<'a, V> {
    /// Create an empty scope that logs failures through `tracing`
    pub fn new() -> Self {
        Self {
            factories: Vec::new(),
            observer: Box::new(TracingObserver),
        }
    }

    /// Create a scope from already boxed factories
    pub fn from_factories(factories: Vec<ResourceFactory<'a, V>>) -> Self {
        Self {
            factories,
            ..Self::new()
        }
    }

    /// Append a factory; it is not called until the scope runs
    #[must_use]
    pub fn with<R, F>(mut self, build: F) -> Self
    where
        R: ScopedResource<Value = V> + 'a,
        F: FnOnce() -> Result<R> + 'a,
    {
        self.factories.push(factory(build));
        self
    }

    /// Append an already constructed resource
    #[must_use]
    pub fn with_resource<R>(self, resource: R) -> Self
    where
        R: ScopedResource<Value = V> + 'a,
    {
        self.with(move || Ok(resource))
    }

    /// Replace the observer that receives every failure the scope sees
    #[must_use]
    pub fn with_observer(mut self, observer: impl FailureObserver + 'a) -> Self {
        self.observer = Box::new(observer);
        self
    }

    /// Number of factories queued
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Whether no factories are queued
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// Enter every resource, run `body` over the entered values, then exit
    /// every entered resource in reverse order.
    ///
    /// Returns `Ok(Some(value))` when the body completed and no exit failed,
    /// and `Ok(None)` when a failure was raised but an exit suppressed it.
    pub fn run<T, F>(self, body: F) -> Result<Option<T>>
    where
        F: FnOnce(&mut [V]) -> Result<T>,
    {
        let Nested {
            factories,
            observer,
        } = self;

        let mut stack = EnteredStack::new(&*observer);
        let mut values = Vec::with_capacity(factories.len());

        let outcome =
            enter_all(factories, &mut stack, &mut values).and_then(|()| body(&mut values));

        let (completed, failure) = match outcome {
            Ok(value) => (Some(value), None),
            Err(error) => {
                stack.observer.record_exception(&error);
                (None, Some(error))
            }
        };

        match stack.unwind(failure) {
            Some(error) => Err(error),
            None => Ok(completed),
        }
    }
}

/// Run `body` inside a nested scope built from `factories`
pub fn nested<'a, V: 'a, T, F>(
    factories: Vec<ResourceFactory<'a, V>>,
    body: F,
) -> Result<Option<T>>
where
    F: FnOnce(&mut [V]) -> Result<T>,
{
    Nested::from_factories(factories).run(body)
}

fn enter_all<'a, V>(
    factories: Vec<ResourceFactory<'a, V>>,
    stack: &mut EnteredStack<'_, 'a, V>,
    values: &mut Vec<V>,
) -> Result<()> {
    for build in factories {
        let mut resource = build()?;
        let value = resource.enter()?;
        tracing::debug!(resource = resource.name(), "Entered scoped resource");
        values.push(value);
        stack.push(resource);
    }
    Ok(())
}

/// Resources entered so far, exited in reverse order
struct EnteredStack<'o, 'a, V> {
    entries: Vec<BoxedResource<'a, V>>,
    observer: &'o dyn FailureObserver,
}

impl<'o, 'a, V> EnteredStack<'o, 'a, V> {
    fn new(observer: &'o dyn FailureObserver) -> Self {
        Self {
            entries: Vec::new(),
            observer,
        }
    }

    fn push(&mut self, resource: BoxedResource<'a, V>) {
        self.entries.push(resource);
    }

    /// Exit every entry, threading the current failure through each exit
    fn unwind(&mut self, mut failure: Option<Error>) -> Option<Error> {
        while let Some(mut resource) = self.entries.pop() {
            match resource.exit(failure.as_ref()) {
                Ok(true) => {
                    if let Some(suppressed) = failure.take() {
                        tracing::debug!(
                            resource = resource.name(),
                            error = %suppressed,
                            "Scoped resource suppressed failure"
                        );
                    }
                }
                Ok(false) => {
                    tracing::debug!(resource = resource.name(), "Exited scoped resource");
                }
                Err(error) => {
                    self.observer.record_exception(&error);
                    let superseded = failure.take();
                    if let Some(superseded) = &superseded {
                        tracing::warn!(
                            resource = resource.name(),
                            superseded = %superseded,
                            "Scoped resource exit failed, replacing earlier failure"
                        );
                    }
                    failure = Some(chain_superseded(error, superseded));
                }
            }
        }
        failure
    }
}

/// Keep a replaced failure reachable through `source()` when the
/// replacement is a resource error without a cause of its own
fn chain_superseded(error: Error, superseded: Option<Error>) -> Error {
    match (error, superseded) {
        (
            Error::Resource {
                resource,
                operation,
                message,
                source: None,
            },
            Some(superseded),
        ) => Error::Resource {
            resource,
            operation,
            message,
            source: Some(Box::new(superseded)),
        },
        (error, _) => error,
    }
}

impl<V> Drop for EnteredStack<'_, '_, V> {
    fn drop(&mut self) {
        // Only non-empty when the body or a hook panicked
        if self.entries.is_empty() {
            return;
        }
        tracing::warn!(
            remaining = self.entries.len(),
            "Nested scope unwinding after panic"
        );
        if let Some(error) = self.unwind(None) {
            tracing::error!(error = %error, "Scoped resource exit failed during panic");
        }
    }
}
