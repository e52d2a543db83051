//! Core errors and constants shared by the `contextutil` crates.
//!
//! ## Key Components
//!
//! - **`errors`**: Defines the primary `Error` enum and `Result` type alias.
//!   Nested scopes propagate it from resources and blocks, and retry gates
//!   report `Error::MaxTriesExceeded` through it.
//! - **`constants`**: Default retry budget, log filter variable and the
//!   diagnostic message emitted for nested scope failures.

pub mod constants;
pub mod errors;

pub use self::{
    constants::*,
    errors::{BoxError, Error, Result, ResultExt},
};
