//! Resilience patterns for polling loops.
//!
//! ## Key Components
//!
//! - **`safe_while`**: a bounded retry gate that sleeps between tries, with
//!   optional linear backoff, and fails with `Error::MaxTriesExceeded` once
//!   its try budget is spent.

pub mod safe_while;

pub use safe_while::{GateState, NoopSleeper, SafeWhile, SafeWhileConfig, Sleeper, ThreadSleeper};
