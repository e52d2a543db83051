//! Scoped resources and the factories that build them.

use contextutil_core::{Error, Result};

/// A resource with paired enter/exit hooks.
///
/// `enter` acquires the resource and returns the value handed to the scoped
/// block. `exit` releases it and receives the failure currently propagating
/// out of the scope, if any. Returning `Ok(true)` from `exit` suppresses that
/// failure; returning an error replaces it.
pub trait ScopedResource {
    /// Value bound by `enter`
    type Value;

    /// Label used in diagnostics
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Acquire the resource
    fn enter(&mut self) -> Result<Self::Value>;

    /// Release the resource, optionally suppressing `failure`
    fn exit(&mut self, failure: Option<&Error>) -> Result<bool>;
}

impl<R: ScopedResource + ?Sized> ScopedResource for Box<R> {
    type Value = R::Value;

    fn name(&self) -> &str {
        (**self).name()
    }

    fn enter(&mut self) -> Result<Self::Value> {
        (**self).enter()
    }

    fn exit(&mut self, failure: Option<&Error>) -> Result<bool> {
        (**self).exit(failure)
    }
}

/// Type-erased resource yielding `V`
pub type BoxedResource<'a, V> = Box<dyn ScopedResource<Value = V> + 'a>;

/// Zero-argument callable producing a fresh resource
pub type ResourceFactory<'a, V> = Box<dyn FnOnce() -> Result<BoxedResource<'a, V>> + 'a>;

/// Box a typed factory closure so it can sit next to factories of other
/// resource types in one `Nested` scope.
pub fn factory<'a, R, F>(build: F) -> ResourceFactory<'a, R::Value>
where
    R: ScopedResource + 'a,
    F: FnOnce() -> Result<R> + 'a,
{
    Box::new(move || build().map(|resource| Box::new(resource) as BoxedResource<'a, R::Value>))
}

/// Resource built from a pair of closures
pub struct FnResource<En, Ex> {
    name: String,
    enter_fn: Option<En>,
    exit_fn: Option<Ex>,
}

impl<V, En, Ex> FnResource<En, Ex>
where
    En: FnOnce() -> Result<V>,
    Ex: FnOnce(Option<&Error>) -> Result<bool>,
{
    /// Create a new resource from enter and exit closures
    pub fn new(name: impl Into<String>, enter_fn: En, exit_fn: Ex) -> Self {
        Self {
            name: name.into(),
            enter_fn: Some(enter_fn),
            exit_fn: Some(exit_fn),
        }
    }
}

impl<V, En, Ex> ScopedResource for FnResource<En, Ex>
where
    En: FnOnce() -> Result<V>,
    Ex: FnOnce(Option<&Error>) -> Result<bool>,
{
    type Value = V;

    fn name(&self) -> &str {
        &self.name
    }

    fn enter(&mut self) -> Result<V> {
        match self.enter_fn.take() {
            Some(enter_fn) => enter_fn(),
            None => Err(Error::resource(&self.name, "enter", "already entered")),
        }
    }

    fn exit(&mut self, failure: Option<&Error>) -> Result<bool> {
        match self.exit_fn.take() {
            Some(exit_fn) => exit_fn(failure),
            None => Err(Error::resource(&self.name, "exit", "already exited")),
        }
    }
}
