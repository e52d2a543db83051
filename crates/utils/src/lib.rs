//! Scoped resource composition and bounded retry loops for contextutil
//!
//! - [`cleanup`]: enter several scoped resources as one, with guaranteed
//!   reverse-order teardown.
//! - [`resilience`]: the `SafeWhile` retry gate.
//! - [`logging`]: subscriber setup for binaries and test harnesses.

pub mod cleanup;
pub mod logging;
pub mod resilience;

pub use cleanup::*;
pub use resilience::*;
