//! Extension traits bridging `std` types into the railway containers.
//!
//! Code at the boundary of this crate usually receives `Option` and `Result`
//! from std and third-party APIs; these traits lift those values onto the
//! railway in one call instead of a `match` at every call site.

use std::fmt;

use crate::maybe::Maybe;
use crate::outcome::Outcome;

/// Lifts `std::option::Option` into the railway containers.
pub trait OptionExt<T> {
    /// Converts to a [`Maybe`], preserving presence.
    fn into_maybe(self) -> Maybe<T>;

    /// Converts to an [`Outcome`], supplying the error lazily for the
    /// `None` case.
    fn into_outcome<E, F: FnOnce() -> E>(self, error: F) -> Outcome<T, E>;
}

impl<T> OptionExt<T> for Option<T> {
    fn into_maybe(self) -> Maybe<T> {
        self.into()
    }

    fn into_outcome<E, F: FnOnce() -> E>(self, error: F) -> Outcome<T, E> {
        match self {
            Some(value) => Outcome::Success(value),
            None => Outcome::Failure(error()),
        }
    }
}

/// Lifts `std::result::Result` into the railway containers.
pub trait ResultExt<T, E> {
    /// Converts to an [`Outcome`], preserving the discriminant.
    fn into_outcome(self) -> Outcome<T, E>;

    /// Collapses to a [`Maybe`], logging the error if present.
    fn into_maybe_logged(self) -> Maybe<T>
    where
        E: fmt::Display;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    fn into_outcome(self) -> Outcome<T, E> {
        self.into()
    }

    fn into_maybe_logged(self) -> Maybe<T>
    where
        E: fmt::Display,
    {
        match self {
            Ok(value) => Maybe::Present(value),
            Err(error) => {
                tracing::error!("operation failed, discarding error: {}", error);
                Maybe::Empty
            }
        }
    }
}
