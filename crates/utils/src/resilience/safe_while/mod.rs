//! Bounded retry gate for polling loops
//!
//! A [`SafeWhile`] replaces the usual "loop, count, sleep, give up" boiler
//! plate around polling code. The defaults try 10 times and sleep 6 seconds
//! between tries; a non-zero `increment` grows the sleep after every try.
//!
//! - [`config`] - `SafeWhileConfig` and its defaults
//! - [`sleeper`] - the `Sleeper` seam and stock implementations
//! - [`gate`] - the gate and its state
//! - `tests` - behaviour tests

pub mod config;
pub mod gate;
pub mod sleeper;
#[cfg(test)]
pub mod tests;

pub use config::SafeWhileConfig;
pub use gate::{GateState, SafeWhile};
pub use sleeper::{NoopSleeper, Sleeper, ThreadSleeper};
