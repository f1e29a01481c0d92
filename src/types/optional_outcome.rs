//! Three-state outcome: `Success(T)`, `None`, or `Fail(Error)`.
//!
//! `None` means the operation completed and produced nothing, which is not an
//! error. It propagates through optional-to-optional chains and turns into
//! [`Error::value_required`] when it reaches a target type that has no `None`
//! state.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{Error, OptionalOutcome};
//!
//! let empty: OptionalOutcome<String> = OptionalOutcome::none();
//! assert!(empty.clone().map(|s| s.len()).is_none());
//!
//! let required = empty.require();
//! assert!(required.is_fail());
//! assert_eq!(required.error().identifier(), Error::value_required().identifier());
//! ```

use crate::config::{self, StackCapture};
use crate::types::{Error, InvalidStateAccess, OptionalOutcomeState, Outcome, StateKind};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Repr<T> {
    Success(T),
    None,
    Fail(Error),
}

/// Result of an operation that produced a `T`, produced nothing, or failed.
///
/// Build one through [`success`](Self::success), [`none`](Self::none) or
/// [`fail`](Self::fail); there is no parameterless constructor.
///
/// ```compile_fail
/// use outcome_rail::OptionalOutcome;
///
/// let implicit: OptionalOutcome<u8> = Default::default();
/// ```
#[must_use = "this outcome may be a failure, which should be handled"]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionalOutcome<T> {
    repr: Repr<T>,
}

impl<T> OptionalOutcome<T> {
    /// Wraps a produced value.
    #[inline]
    pub fn success(value: T) -> Self {
        Self { repr: Repr::Success(value) }
    }

    /// The operation completed and legitimately produced nothing.
    #[inline]
    pub fn none() -> Self {
        Self { repr: Repr::None }
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

    #[inline]
    pub(crate) fn from_prepared_failure(error: Error) -> Self {
        Self { repr: Repr::Fail(error) }
    }

    /// `Some` becomes success, `None` becomes the `None` state. Never fails.
    #[inline]
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::success(value),
            None => Self::none(),
        }
    }

    /// `Ok(Some)` is success, `Ok(None)` is `None` and `Err` goes through the
    /// failure pipeline.
    pub fn from_result<E: Into<Error>>(result: Result<Option<T>, E>) -> Self {
        match result {
            Ok(value) => Self::from_option(value),
            Err(error) => Self::fail(error),
        }
    }

    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self.repr, Repr::Success(_))
    }

    /// Returns `true` only for the `None` state, never for a failure.
    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self.repr, Repr::None)
    }

    #[inline]
    pub fn is_fail(&self) -> bool {
        matches!(self.repr, Repr::Fail(_))
    }

    /// Which of the three states this outcome is in.
    #[inline]
    pub fn kind(&self) -> StateKind {
        match self.repr {
            Repr::Success(_) => StateKind::Success,
            Repr::None => StateKind::None,
            Repr::Fail(_) => StateKind::Fail,
        }
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics with an [`InvalidStateAccess`] message unless the outcome succeeded.
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
    /// Panics with an [`InvalidStateAccess`] message unless the outcome failed.
    #[track_caller]
    pub fn error(&self) -> &Error {
        match self.try_error() {
            Ok(error) => error,
            Err(access) => panic!("{access}"),
        }
    }

    /// Non-panicking form of [`value`](Self::value). Only a failure attaches
    /// its error to the returned [`InvalidStateAccess`].
    pub fn try_value(&self) -> Result<&T, InvalidStateAccess> {
        match &self.repr {
            Repr::Success(value) => Ok(value),
            Repr::None => Err(InvalidStateAccess::new(StateKind::Success, StateKind::None, None)),
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
            Repr::None => Err(InvalidStateAccess::new(StateKind::Fail, StateKind::None, None)),
        }
    }

    /// Converts into `Option<T>`; `None` and failures both become `None`.
    #[inline]
    pub fn ok(self) -> Option<T> {
        match self.repr {
            Repr::Success(value) => Some(value),
            _ => None,
        }
    }

    /// Converts into `Option<Error>`; success and `None` both become `None`.
    #[inline]
    pub fn err(self) -> Option<Error> {
        match self.repr {
            Repr::Fail(error) => Some(error),
            _ => None,
        }
    }

    /// Borrowing view of the raw state.
    #[inline]
    pub fn state(&self) -> OptionalOutcomeState<&T, &Error> {
        match &self.repr {
            Repr::Success(value) => OptionalOutcomeState::Success(value),
            Repr::None => OptionalOutcomeState::None,
            Repr::Fail(error) => OptionalOutcomeState::Fail(error),
        }
    }

    /// Owning view of the raw state.
    #[inline]
    pub fn into_state(self) -> OptionalOutcomeState<T, Error> {
        match self.repr {
            Repr::Success(value) => OptionalOutcomeState::Success(value),
            Repr::None => OptionalOutcomeState::None,
            Repr::Fail(error) => OptionalOutcomeState::Fail(error),
        }
    }

    /// `Ok(Some(_))` for success, `Ok(None)` for none, `Err(_)` for failure.
    #[inline]
    pub fn into_result(self) -> Result<Option<T>, Error> {
        match self.repr {
            Repr::Success(value) => Ok(Some(value)),
            Repr::None => Ok(None),
            Repr::Fail(error) => Err(error),
        }
    }

    /// Evaluates exactly one branch and returns its result.
    #[inline]
    pub fn match_with<R, S, F, N>(self, on_success: S, on_fail: F, on_none: N) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(Error) -> R,
        N: FnOnce() -> R,
    {
        match self.repr {
            Repr::Success(value) => on_success(value),
            Repr::None => on_none(),
            Repr::Fail(error) => on_fail(error),
        }
    }

    /// Transforms the success value; `None` and failures pass through.
    #[inline]
    pub fn map<U, F>(self, f: F) -> OptionalOutcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self.repr {
            Repr::Success(value) => OptionalOutcome::success(f(value)),
            Repr::None => OptionalOutcome::none(),
            Repr::Fail(error) => OptionalOutcome::from_prepared_failure(error),
        }
    }

    /// Transforms the error of a failure without re-running the pipeline.
    #[inline]
    pub fn map_err<G>(self, g: G) -> Self
    where
        G: FnOnce(Error) -> Error,
    {
        match self.repr {
            Repr::Fail(error) => Self::from_prepared_failure(g(error)),
            repr => Self { repr },
        }
    }

    /// [`map`](Self::map) and [`map_err`](Self::map_err) in one step.
    #[inline]
    pub fn map_both<U, F, G>(self, f: F, g: G) -> OptionalOutcome<U>
    where
        F: FnOnce(T) -> U,
        G: FnOnce(Error) -> Error,
    {
        match self.repr {
            Repr::Success(value) => OptionalOutcome::success(f(value)),
            Repr::None => OptionalOutcome::none(),
            Repr::Fail(error) => OptionalOutcome::from_prepared_failure(g(error)),
        }
    }

    /// Chains an optional step; `None` and failures short-circuit.
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> OptionalOutcome<U>
    where
        F: FnOnce(T) -> OptionalOutcome<U>,
    {
        match self.repr {
            Repr::Success(value) => f(value),
            Repr::None => OptionalOutcome::none(),
            Repr::Fail(error) => OptionalOutcome::from_prepared_failure(error),
        }
    }

    /// Chains a step whose target has no `None` state.
    ///
    /// A `None` source fails with [`Error::value_required`] without calling `f`.
    pub fn and_then_required<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self.repr {
            Repr::Success(value) => f(value),
            Repr::None => Outcome::fail(Error::value_required()),
            Repr::Fail(error) => Outcome::from_prepared_failure(error),
        }
    }

    /// Converts to an [`Outcome`], failing with [`Error::value_required`] on `None`.
    #[inline]
    pub fn require(self) -> Outcome<T> {
        self.and_then_required(Outcome::success)
    }

    /// Converts to an [`Outcome`], failing with `error` on `None`.
    pub fn require_or(self, error: impl Into<Error>) -> Outcome<T> {
        match self.repr {
            Repr::Success(value) => Outcome::success(value),
            Repr::None => Outcome::fail(error),
            Repr::Fail(error) => Outcome::from_prepared_failure(error),
        }
    }

    /// Recovers from a failure; success and `None` pass through untouched.
    #[inline]
    pub fn or_else<F>(self, f: F) -> Self
    where
        F: FnOnce(Error) -> Self,
    {
        match self.repr {
            Repr::Fail(error) => f(error),
            repr => Self { repr },
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

    /// Runs `f` only in the `None` state.
    #[inline]
    pub fn on_none<F>(self, f: F) -> Self
    where
        F: FnOnce(),
    {
        if let Repr::None = self.repr {
            f();
        }
        self
    }

    /// Turns a success into a failure when `predicate` rejects the value.
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

    /// Drops the value. `None` counts as success: the operation completed without error.
    #[inline]
    pub fn truncate(self) -> Outcome<()> {
        match self.repr {
            Repr::Success(_) | Repr::None => Outcome::unit(),
            Repr::Fail(error) => Outcome::from_prepared_failure(error),
        }
    }

    /// Returns the value, or `default` for both `None` and failure.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self.repr {
            Repr::Success(value) => value,
            _ => default,
        }
    }

    /// Returns the value, or computes one. `f` receives the error on failure
    /// and `None` in the `None` state.
    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(Option<Error>) -> T,
    {
        match self.repr {
            Repr::Success(value) => value,
            Repr::None => f(None),
            Repr::Fail(error) => f(Some(error)),
        }
    }

    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.unwrap_or_else(|_| T::default())
    }

    /// Borrows the success value without consuming the outcome.
    #[inline]
    pub fn as_ref(&self) -> OptionalOutcome<&T> {
        match &self.repr {
            Repr::Success(value) => OptionalOutcome::success(value),
            Repr::None => OptionalOutcome::none(),
            Repr::Fail(error) => OptionalOutcome::from_prepared_failure(error.clone()),
        }
    }

    /// Iterates over the success value (zero or one item).
    #[inline]
    pub fn iter(&self) -> core::option::IntoIter<&T> {
        match &self.repr {
            Repr::Success(value) => Some(value).into_iter(),
            _ => None.into_iter(),
        }
    }
}

impl<T> From<OptionalOutcome<T>> for Result<Option<T>, Error> {
    #[inline]
    fn from(outcome: OptionalOutcome<T>) -> Self {
        outcome.into_result()
    }
}

impl<T, E: Into<Error>> From<Result<Option<T>, E>> for OptionalOutcome<T> {
    #[inline]
    fn from(result: Result<Option<T>, E>) -> Self {
        Self::from_result(result)
    }
}

impl<T> From<Option<T>> for OptionalOutcome<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        Self::from_option(value)
    }
}

impl<T> From<Outcome<T>> for OptionalOutcome<T> {
    #[inline]
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_optional()
    }
}

impl<T> IntoIterator for OptionalOutcome<T> {
    type Item = T;
    type IntoIter = core::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.ok().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a OptionalOutcome<T> {
    type Item = &'a T;
    type IntoIter = core::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
