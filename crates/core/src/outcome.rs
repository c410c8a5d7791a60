//! An explicit outcome container replacing raised-error control flow.
//!
//! `Outcome<T, E>` carries either a success value or a typed error, set once
//! at construction. Chaining fallible steps with [`Outcome::flat_map`] rides
//! the railway: the first failure switches the chain onto the error track and
//! every later transform is skipped, with the original error untouched.

use std::fmt;

use either::Either;
use serde::{Deserialize, Serialize};

use crate::error::AccessError;
use crate::maybe::Maybe;

/// A successful value of type `T`, or an error of type `E`.
///
/// Two terminal states, fixed at construction; no transitions afterwards.
/// Expected failure travels as data through [`Outcome::Failure`], never as a
/// raised error.
///
/// # Example
///
/// ```
/// use railway_core::Outcome;
///
/// fn halve(n: i32) -> Outcome<i32, String> {
///     if n % 2 == 0 {
///         Outcome::success(n / 2)
///     } else {
///         Outcome::failure(format!("{n} is odd"))
///     }
/// }
///
/// let result = Outcome::success(8).flat_map(halve).flat_map(halve);
/// assert_eq!(result, Outcome::success(2));
///
/// let failed = Outcome::success(10).flat_map(halve).flat_map(halve);
/// assert_eq!(failed, Outcome::failure("5 is odd".to_string()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome<T, E> {
    /// The operation produced a value.
    Success(T),
    /// The operation failed with a typed error.
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    /// Wraps a value in a success outcome.
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Wraps an error in a failure outcome.
    pub const fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    /// Captures the outcome of a fallible closure.
    pub fn from_fn<F: FnOnce() -> Result<T, E>>(f: F) -> Self {
        f().into()
    }

    /// Whether the outcome is a success.
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Whether the outcome is a failure.
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Returns the success value, failing fast on a failure outcome.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a `Failure`. Use [`Outcome::value_or`] or the
    /// combinators when failure is an expected state.
    #[allow(clippy::panic)]
    pub fn into_value(self) -> T
    where
        E: fmt::Debug,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => {
                panic!("called `Outcome::into_value()` on a `Failure`: {error:?}")
            }
        }
    }

    /// Returns the failure error, failing fast on a success outcome.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a `Success`.
    #[allow(clippy::panic)]
    pub fn into_error(self) -> E
    where
        T: fmt::Debug,
    {
        match self {
            Self::Failure(error) => error,
            Self::Success(value) => {
                panic!("called `Outcome::into_error()` on a `Success`: {value:?}")
            }
        }
    }

    /// Non-panicking companion to [`Outcome::into_value`].
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::NotSuccess`] on a failure outcome.
    pub fn try_into_value(self) -> Result<T, AccessError> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(_) => Err(AccessError::NotSuccess),
        }
    }

    /// Non-panicking companion to [`Outcome::into_error`].
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::NotFailure`] on a success outcome.
    pub fn try_into_error(self) -> Result<E, AccessError> {
        match self {
            Self::Failure(error) => Ok(error),
            Self::Success(_) => Err(AccessError::NotFailure),
        }
    }

    /// Borrows both payload slots, yielding an `Outcome<&T, &E>`.
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Transforms the success value; a failure propagates untouched.
    ///
    /// The mapper never runs on a failure outcome.
    pub fn map<U, F: FnOnce(T) -> U>(self, mapper: F) -> Outcome<U, E> {
        match self {
            Self::Success(value) => Outcome::Success(mapper(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Transforms the error; a success passes through unchanged.
    pub fn map_error<F2, F: FnOnce(E) -> F2>(self, mapper: F) -> Outcome<T, F2> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(mapper(error)),
        }
    }

    /// Chains a fallible operation, short-circuiting at the first failure.
    ///
    /// Once the chain is on the failure track, later mappers never run and
    /// the original error rides through unchanged.
    pub fn flat_map<U, F: FnOnce(T) -> Outcome<U, E>>(self, mapper: F) -> Outcome<U, E> {
        match self {
            Self::Success(value) => mapper(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Re-enters the happy path by turning the error into a value.
    pub fn recover<F: FnOnce(E) -> T>(self, mapper: F) -> Self {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(error) => Self::Success(mapper(error)),
        }
    }

    /// Like [`Outcome::recover`], but the handler may itself fail.
    pub fn recover_with<F: FnOnce(E) -> Self>(self, mapper: F) -> Self {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(error) => mapper(error),
        }
    }

    /// Returns the success value or an eagerly evaluated default.
    pub fn value_or(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Returns the success value or computes a fallback from the error.
    ///
    /// The fallback never runs on a success outcome.
    pub fn value_or_else<F: FnOnce(E) -> T>(self, fallback: F) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => fallback(error),
        }
    }

    /// Returns the success value or a default, logging the discarded error.
    pub fn value_or_logged(self, default: T) -> T
    where
        E: fmt::Display,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => {
                tracing::error!("operation failed, using default: {}", error);
                default
            }
        }
    }

    /// Performs a side effect on the success value, returning the outcome
    /// unchanged for fluent chaining.
    pub fn tap_success<F: FnOnce(&T)>(self, f: F) -> Self {
        if let Self::Success(ref value) = self {
            f(value);
        }
        self
    }

    /// Performs a side effect on the error, returning the outcome unchanged.
    pub fn tap_failure<F: FnOnce(&E)>(self, f: F) -> Self {
        if let Self::Failure(ref error) = self {
            f(error);
        }
        self
    }

    /// Collapses the outcome into a presence container, logging the
    /// discarded error.
    pub fn into_maybe(self) -> Maybe<T>
    where
        E: fmt::Display,
    {
        match self {
            Self::Success(value) => Maybe::Present(value),
            Self::Failure(error) => {
                tracing::error!("operation failed, discarding error: {}", error);
                Maybe::Empty
            }
        }
    }

    /// Views the outcome as an `Either`, success on the left.
    pub fn into_either(self) -> Either<T, E> {
        match self {
            Self::Success(value) => Either::Left(value),
            Self::Failure(error) => Either::Right(error),
        }
    }

    /// Builds an outcome from an `Either`, success on the left.
    pub fn from_either(either: Either<T, E>) -> Self {
        match either {
            Either::Left(value) => Self::Success(value),
            Either::Right(error) => Self::Failure(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }
}

/// Collects an iterator of outcomes into an outcome of a collection.
///
/// Yields `Success` of the collected values iff every item succeeded;
/// otherwise the first `Failure` encountered.
impl<T, E, C: FromIterator<T>> FromIterator<Outcome<T, E>> for Outcome<C, E> {
    fn from_iter<I: IntoIterator<Item = Outcome<T, E>>>(iter: I) -> Self {
        let collected: Result<C, E> = iter.into_iter().map(Result::from).collect();
        collected.into()
    }
}
