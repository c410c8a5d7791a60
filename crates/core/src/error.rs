//! Error type for checked container accessors.
//!
//! Expected failure is data (`Maybe::Empty`, `Outcome::Failure`), never a
//! raised error. The only error this crate itself defines is the one returned
//! by the `try_*` accessors when a caller reads a payload slot that the
//! container's discriminant does not populate.

use thiserror::Error;

/// An accessor was invoked on a container in the wrong state.
///
/// This is a programmer-error signal, not a recoverable runtime condition:
/// callers who cannot guarantee the discriminant should branch on
/// `is_present`/`is_success` or use the combinators instead of accessors.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AccessError {
    /// A value was read from an empty `Maybe`.
    #[error("value accessed on an empty container")]
    Empty,

    /// A success value was read from a failure `Outcome`.
    #[error("success value accessed on a failure outcome")]
    NotSuccess,

    /// A failure error was read from a success `Outcome`.
    #[error("failure error accessed on a success outcome")]
    NotFailure,
}
