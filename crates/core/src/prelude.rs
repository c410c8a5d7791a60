//! Prelude module - common imports for railway-style code
//!
//! Import this module to get all common types and traits:
//! ```rust
//! use railway_core::prelude::*;
//! ```

// Re-export functional utilities
pub use either::Either;
pub use itertools::Itertools;
pub use tap::{Pipe, Tap};

// Re-export container and error types
pub use crate::convert::{OptionExt, ResultExt};
pub use crate::error::AccessError;
pub use crate::maybe::Maybe;
pub use crate::outcome::Outcome;
