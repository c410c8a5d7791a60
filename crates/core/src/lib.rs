//! Explicit presence and outcome containers for railway-oriented programming.
//!
//! This crate replaces two implicit control-flow habits with explicit data:
//!
//! - **Null-sentinel presence checks** become [`Maybe<T>`]: a value that is
//!   `Present` or `Empty`, with combinators that short-circuit once empty.
//! - **Raised-error control flow** becomes [`Outcome<T, E>`]: a `Success`
//!   value or a typed `Failure`, chained with combinators that switch onto
//!   the failure track at the first error and stay there.
//!
//! Both containers are immutable value types fixed at construction. The only
//! raised errors left are the fail-fast accessors (`get`, `into_value`,
//! `into_error`), which panic on API misuse; every expected failure travels
//! as data.
//!
//! # Example
//!
//! ```
//! use railway_core::prelude::*;
//!
//! fn parse_port(raw: &str) -> Outcome<u16, String> {
//!     raw.trim()
//!         .parse::<u16>()
//!         .map_err(|e| format!("invalid port {raw:?}: {e}"))
//!         .into_outcome()
//! }
//!
//! let port = parse_port(" 8080 ")
//!     .tap_failure(|e| eprintln!("{e}"))
//!     .value_or(80);
//! assert_eq!(port, 8080);
//! ```

pub mod convert;
pub mod error;
pub mod maybe;
pub mod outcome;
pub mod prelude;

pub use convert::{OptionExt, ResultExt};
pub use error::AccessError;
pub use maybe::Maybe;
pub use outcome::Outcome;
