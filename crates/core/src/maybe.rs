//! An explicit presence container replacing null-sentinel checks.
//!
//! `Maybe<T>` is a value that is either `Present` or `Empty`. Combinators on
//! an empty container short-circuit: no caller-supplied closure runs once the
//! chain has gone empty. That short-circuit is the property that separates
//! this type from manual presence checks scattered through calling code.

use serde::{Deserialize, Serialize};

use crate::error::AccessError;
use crate::outcome::Outcome;

/// A value of type `T`, or nothing.
///
/// Constructed once via [`Maybe::present`] or [`Maybe::empty`] and immutable
/// afterwards. Both variants are plain data: the container is `Send`/`Sync`
/// whenever its payload is, and every operation is a pure function of the
/// already-fixed payload.
///
/// # Example
///
/// ```
/// use railway_core::Maybe;
///
/// let label = Maybe::present("railway")
///     .map(str::to_uppercase)
///     .filter(|s| s.len() > 3)
///     .value_or_else(|| "unnamed".to_string());
/// assert_eq!(label, "RAILWAY");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Maybe<T> {
    /// Exactly one held value.
    Present(T),
    /// No value.
    Empty,
}

impl<T> Maybe<T> {
    /// Wraps a value in a present container.
    pub const fn present(value: T) -> Self {
        Self::Present(value)
    }

    /// Creates an empty container.
    pub const fn empty() -> Self {
        Self::Empty
    }

    /// Whether the container holds a value.
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Whether the container is empty.
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns the held value, failing fast when there is none.
    ///
    /// # Panics
    ///
    /// Panics if the container is `Empty`. Reading a value that was never
    /// established is API misuse; branch on [`Maybe::is_present`] or use
    /// [`Maybe::value_or`] when absence is an expected state.
    #[allow(clippy::panic)]
    pub fn get(self) -> T {
        match self {
            Self::Present(value) => value,
            Self::Empty => panic!("called `Maybe::get()` on an `Empty` container"),
        }
    }

    /// Non-panicking companion to [`Maybe::get`].
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::Empty`] when the container holds no value.
    pub fn try_get(self) -> Result<T, AccessError> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Empty => Err(AccessError::Empty),
        }
    }

    /// Borrows the payload, yielding a `Maybe<&T>` for non-consuming chains.
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Present(value) => Maybe::Present(value),
            Self::Empty => Maybe::Empty,
        }
    }

    /// Transforms the held value, if any.
    ///
    /// The mapper never runs on an empty container.
    pub fn map<U, F: FnOnce(T) -> U>(self, mapper: F) -> Maybe<U> {
        match self {
            Self::Present(value) => Maybe::Present(mapper(value)),
            Self::Empty => Maybe::Empty,
        }
    }

    /// Chains an operation that itself may come up empty.
    ///
    /// The result is the mapper's container directly, never double-wrapped,
    /// and the mapper never runs once the chain is empty.
    pub fn flat_map<U, F: FnOnce(T) -> Maybe<U>>(self, mapper: F) -> Maybe<U> {
        match self {
            Self::Present(value) => mapper(value),
            Self::Empty => Maybe::Empty,
        }
    }

    /// Keeps the value only when the predicate holds.
    pub fn filter<P: FnOnce(&T) -> bool>(self, predicate: P) -> Self {
        match self {
            Self::Present(value) => {
                if predicate(&value) {
                    Self::Present(value)
                } else {
                    Self::Empty
                }
            }
            Self::Empty => Self::Empty,
        }
    }

    /// Returns the held value or an eagerly evaluated default.
    pub fn value_or(self, default: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Empty => default,
        }
    }

    /// Returns the held value or computes a default.
    ///
    /// The supplier never runs on a present container.
    pub fn value_or_else<F: FnOnce() -> T>(self, supplier: F) -> T {
        match self {
            Self::Present(value) => value,
            Self::Empty => supplier(),
        }
    }

    /// Replaces an empty container with the supplied one.
    ///
    /// The supplier never runs on a present container.
    pub fn or_else<F: FnOnce() -> Self>(self, supplier: F) -> Self {
        match self {
            Self::Present(value) => Self::Present(value),
            Self::Empty => supplier(),
        }
    }

    /// Performs a side effect on the held value, returning the container
    /// unchanged for fluent chaining.
    pub fn tap_present<F: FnOnce(&T)>(self, f: F) -> Self {
        if let Self::Present(ref value) = self {
            f(value);
        }
        self
    }

    /// Performs a side effect when empty, returning the container unchanged.
    pub fn tap_empty<F: FnOnce()>(self, f: F) -> Self {
        if self.is_empty() {
            f();
        }
        self
    }

    /// Converts presence into an outcome, supplying the error lazily.
    ///
    /// `Present(v)` becomes `Success(v)`; `Empty` becomes `Failure` of the
    /// supplied error. The error supplier never runs on a present container.
    pub fn into_outcome<E, F: FnOnce() -> E>(self, error: F) -> Outcome<T, E> {
        match self {
            Self::Present(value) => Outcome::Success(value),
            Self::Empty => Outcome::Failure(error()),
        }
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Self::Empty
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Present(value),
            None => Self::Empty,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(maybe: Maybe<T>) -> Self {
        match maybe {
            Maybe::Present(value) => Some(value),
            Maybe::Empty => None,
        }
    }
}

/// Collects an iterator of containers into a container of a collection.
///
/// Yields `Present` of the collected values iff every item was present;
/// the first `Empty` item makes the whole collection empty.
impl<T, C: FromIterator<T>> FromIterator<Maybe<T>> for Maybe<C> {
    fn from_iter<I: IntoIterator<Item = Maybe<T>>>(iter: I) -> Self {
        let collected: Option<C> = iter.into_iter().map(Option::from).collect();
        collected.into()
    }
}
