//! Scoped resource composition with guaranteed teardown.
//!
//! [`Nested`] enters any number of [`ScopedResource`]s as one scope and
//! exits all of them in reverse order, even when an enter, the block, or
//! another exit fails. Failures are reported to a [`FailureObserver`]
//! before they propagate.
//!
//! ```rust
//! use contextutil_core::Error;
//! use contextutil_utils::cleanup::{FnResource, Nested};
//!
//! let result = Nested::new()
//!     .with(|| Ok(FnResource::new("mon", || Ok("mon.a"), |_: Option<&Error>| Ok(false))))
//!     .with(|| Ok(FnResource::new("mgr", || Ok("mgr.x"), |_: Option<&Error>| Ok(false))))
//!     .run(|daemons| Ok(daemons.join(" ")))?;
//!
//! assert_eq!(result.as_deref(), Some("mon.a mgr.x"));
//! # Ok::<(), Error>(())
//! ```

mod nested;
mod observer;
mod resource;

pub use nested::{nested, Nested};
pub use observer::{FailureObserver, TracingObserver};
pub use resource::{factory, BoxedResource, FnResource, ResourceFactory, ScopedResource};
