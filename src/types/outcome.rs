//! Two-state outcome: `Success(T)` or `Fail(Error)`.
//!
//! The valueless outcome is `Outcome<()>` (alias [`UnitOutcome`]); composing it
//! with a value-producing step through [`Outcome::and_then`] yields a
//! value-carrying outcome.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! let out = Outcome::success(4)
//!     .map(|x| x * 2)
//!     .and_then(|x| {
//!         if x > 0 {
//!             Outcome::success(x.to_string())
//!         } else {
//!             Outcome::fail("neg")
//!         }
//!     });
//!
//! assert_eq!(out, Outcome::success("8".to_string()));
//! ```

use crate::config::{self, StackCapture};
use crate::types::{Error, InvalidStateAccess, OptionalOutcome, OutcomeState, StateKind};

/// Valueless outcome: only success or failure matters.
pub type UnitOutcome = Outcome<()>;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Repr<T> {
    Success(T),
    Fail(Error),
}

/// Result of an operation that either produced a `T` or failed with an [`Error`].
///
/// Built only through factory functions; the failure factories run the
/// [`config`] pipeline (stack capture, replacer, hook).
#[must_use = "this outcome may be a failure, which should be handled"]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome<T = ()> {
    repr: Repr<T>,
}

impl Outcome<()> {
    /// Valueless success.
    #[inline]
    pub fn unit() -> Self {
        Self::success(())
    }
}

impl<T> Outcome<T> {
    /// Wraps a produced value.
    #[inline]
    pub fn success(value: T) -> Self {
        Self { repr: Repr::Success(value) }
    }

    /// Builds a failure through the global failure pipeline.
    #[inline]
    pub fn fail(error: impl Into<Error>) -> Self {
        Self::fail_with(error, StackCapture::Inherit)
    }

    /// Builds a failure with a per-call stack-capture override.
    pub fn fail_with(error: impl Into<Error>, capture: StackCapture) -> Self {
        Self::from_prepared_failure(config::prepare_failure(error.into(), capture))
    }

    /// Wraps an error that already went through a failure pipeline.
    #[inline]
    pub(crate) fn from_prepared_failure(error: Error) -> Self {
        Self { repr: Repr::Fail(error) }
    }

    /// `Some` becomes success; `None` becomes a failure with [`Error::value_required`].
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::success(value),
            None => Self::fail(Error::value_required()),
        }
    }

    /// Maps `Ok` to success and `Err` to a failure built through the pipeline.
    pub fn from_result<E: Into<Error>>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::success(value),
            Err(error) => Self::fail(error),
        }
    }

    /// Returns `true` for a success.
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self.repr, Repr::Success(_))
    }

    /// Returns `true` for a failure.
    #[inline]
    pub fn is_fail(&self) -> bool {
        !self.is_success()
    }

    /// Which state this outcome is in.
    #[inline]
    pub fn kind(&self) -> StateKind {
        match self.repr {
            Repr::Success(_) => StateKind::Success,
            Repr::Fail(_) => StateKind::Fail,
        }
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics with an [`InvalidStateAccess`] message if the outcome failed.
    #[track_caller]
    pub fn value(&self) -> &T {
        match self.try_value() {
            Ok(value) => value,
            Err(access) => panic!("{access}"),
        }
    }

    /// Returns the failure error.
    ///
    /// # Panics
    ///
    /// Panics with an [`InvalidStateAccess`] message if the outcome succeeded.
    #[track_caller]
    pub fn error(&self) -> &Error {
        match self.try_error() {
            Ok(error) => error,
            Err(access) => panic!("{access}"),
        }
    }

    /// Non-panicking form of [`value`](Self::value).
    ///
    /// On failure the returned [`InvalidStateAccess`] carries a clone of the
    /// error, so callers can still report it.
    ///
    /// ```
    /// use outcome_rail::{config::StackCapture, Outcome, StateKind};
    ///
    /// let failed: Outcome<u8> = Outcome::fail_with("down", StackCapture::Skip);
    /// let access = failed.try_value().unwrap_err();
    /// assert_eq!(access.actual(), StateKind::Fail);
    /// ```
    pub fn try_value(&self) -> Result<&T, InvalidStateAccess> {
        match &self.repr {
            Repr::Success(value) => Ok(value),
            Repr::Fail(error) => Err(InvalidStateAccess::new(
                StateKind::Success,
                StateKind::Fail,
                Some(error.clone()),
            )),
        }
    }

    /// Non-panicking form of [`error`](Self::error).
    pub fn try_error(&self) -> Result<&Error, InvalidStateAccess> {
        match &self.repr {
            Repr::Fail(error) => Ok(error),
            Repr::Success(_) => {
                Err(InvalidStateAccess::new(StateKind::Fail, StateKind::Success, None))
            },
        }
    }

    /// Converts into `Option<T>`, discarding the error.
    #[inline]
    pub fn ok(self) -> Option<T> {
        match self.repr {
            Repr::Success(value) => Some(value),
            Repr::Fail(_) => None,
        }
    }

    /// Converts into `Option<Error>`, discarding the value.
    #[inline]
    pub fn err(self) -> Option<Error> {
        match self.repr {
            Repr::Success(_) => None,
            Repr::Fail(error) => Some(error),
        }
    }

    /// Borrowing view of the raw state.
    #[inline]
    pub fn state(&self) -> OutcomeState<&T, &Error> {
        match &self.repr {
            Repr::Success(value) => OutcomeState::Success(value),
            Repr::Fail(error) => OutcomeState::Fail(error),
        }
    }

    /// Owning view of the raw state.
    #[inline]
    pub fn into_state(self) -> OutcomeState<T, Error> {
        match self.repr {
            Repr::Success(value) => OutcomeState::Success(value),
            Repr::Fail(error) => OutcomeState::Fail(error),
        }
    }

    /// Converts into a `Result` for `?`-style code at a boundary.
    #[inline]
    pub fn into_result(self) -> Result<T, Error> {
        match self.repr {
            Repr::Success(value) => Ok(value),
            Repr::Fail(error) => Err(error),
        }
    }

    /// Borrowing form of [`into_result`](Self::into_result).
    #[inline]
    pub fn as_result(&self) -> Result<&T, &Error> {
        match &self.repr {
            Repr::Success(value) => Ok(value),
            Repr::Fail(error) => Err(error),
        }
    }

    /// Evaluates exactly one branch and returns its result.
    #[inline]
    pub fn match_with<R, S, F>(self, on_success: S, on_fail: F) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(Error) -> R,
    {
        match self.repr {
            Repr::Success(value) => on_success(value),
            Repr::Fail(error) => on_fail(error),
        }
    }

    /// Transforms the success value; a failure passes through untouched.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self.repr {
            Repr::Success(value) => Outcome::success(f(value)),
            Repr::Fail(error) => Outcome::from_prepared_failure(error),
        }
    }

    /// Transforms the error of a failure; a success passes through untouched.
    #[inline]
    pub fn map_err<G>(self, g: G) -> Self
    where
        G: FnOnce(Error) -> Error,
    {
        match self.repr {
            Repr::Success(value) => Self::success(value),
            Repr::Fail(error) => Self::from_prepared_failure(g(error)),
        }
    }

    /// [`map`](Self::map) with an error transform for the failure branch.
    #[inline]
    pub fn map_both<U, F, G>(self, f: F, g: G) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
        G: FnOnce(Error) -> Error,
    {
        match self.repr {
            Repr::Success(value) => Outcome::success(f(value)),
            Repr::Fail(error) => Outcome::from_prepared_failure(g(error)),
        }
    }

    /// Chains a step returning another outcome; short-circuits on failure.
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self.repr {
            Repr::Success(value) => f(value),
            Repr::Fail(error) => Outcome::from_prepared_failure(error),
        }
    }

    /// Chains a step that may legitimately produce nothing.
    #[inline]
    pub fn and_then_optional<U, F>(self, f: F) -> OptionalOutcome<U>
    where
        F: FnOnce(T) -> OptionalOutcome<U>,
    {
        match self.repr {
            Repr::Success(value) => f(value),
            Repr::Fail(error) => OptionalOutcome::from_prepared_failure(error),
        }
    }

    /// Recovers from a failure; a success passes through untouched.
    #[inline]
    pub fn or_else<F>(self, f: F) -> Self
    where
        F: FnOnce(Error) -> Self,
    {
        match self.repr {
            Repr::Success(value) => Self::success(value),
            Repr::Fail(error) => f(error),
        }
    }

    /// Runs `f` on the success value and returns the outcome unchanged.
    #[inline]
    pub fn on_success<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Repr::Success(value) = &self.repr {
            f(value);
        }
        self
    }

    /// Runs `f` on the error and returns the outcome unchanged.
    #[inline]
    pub fn on_fail<F>(self, f: F) -> Self
    where
        F: FnOnce(&Error),
    {
        if let Repr::Fail(error) = &self.repr {
            f(error);
        }
        self
    }

    /// Turns a success into a failure when `predicate` rejects the value.
    ///
    /// The produced failure goes through the failure pipeline.
    pub fn ensure<P, F, E>(self, predicate: P, error_factory: F) -> Self
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce(&T) -> E,
        E: Into<Error>,
    {
        match self.repr {
            Repr::Success(value) if !predicate(&value) => Self::fail(error_factory(&value)),
            repr => Self { repr },
        }
    }

    /// Drops the value, keeping only success or failure.
    #[inline]
    pub fn truncate(self) -> Outcome<()> {
        self.map(|_| ())
    }

    /// Lifts into an [`OptionalOutcome`] with the same state.
    #[inline]
    pub fn into_optional(self) -> OptionalOutcome<T> {
        match self.repr {
            Repr::Success(value) => OptionalOutcome::success(value),
            Repr::Fail(error) => OptionalOutcome::from_prepared_failure(error),
        }
    }

    /// Returns the value, or `default` on failure.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self.repr {
            Repr::Success(value) => value,
            Repr::Fail(_) => default,
        }
    }

    /// Returns the value, or computes one from the error.
    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(Error) -> T,
    {
        match self.repr {
            Repr::Success(value) => value,
            Repr::Fail(error) => f(error),
        }
    }

    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.unwrap_or_else(|_| T::default())
    }

    /// Borrows the success value, if any, without consuming the outcome.
    #[inline]
    pub fn as_ref(&self) -> Outcome<&T> {
        match &self.repr {
            Repr::Success(value) => Outcome::success(value),
            Repr::Fail(error) => Outcome::from_prepared_failure(error.clone()),
        }
    }

    /// Iterates over the success value (zero or one item).
    #[inline]
    pub fn iter(&self) -> core::option::IntoIter<&T> {
        self.as_result().ok().into_iter()
    }
}

impl<T> From<Outcome<T>> for Result<T, Error> {
    #[inline]
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_result()
    }
}

impl<T, E: Into<Error>> From<Result<T, E>> for Outcome<T> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        Self::from_result(result)
    }
}

impl<T> From<Option<T>> for Outcome<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        Self::from_option(value)
    }
}

impl<T> IntoIterator for Outcome<T> {
    type Item = T;
    type IntoIter = core::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.ok().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Outcome<T> {
    type Item = &'a T;
    type IntoIter = core::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
