//! Extension traits for converting `Result` and `Option` into outcomes.

use crate::types::{Error, OptionalOutcome, Outcome};

/// Extension trait turning a `Result` into an outcome at a boundary.
///
/// Conversions through this trait are failure constructions, so they run the
/// global failure pipeline exactly like [`Outcome::fail`].
///
/// # Examples
///
/// ```
/// use outcome_rail::traits::ResultExt;
/// use outcome_rail::Error;
///
/// let read = std::fs::read_to_string("definitely/not/here.toml")
///     .into_outcome_with(|e| Error::new(format!("config unreadable: {e}")).with_error_code(2));
///
/// assert_eq!(read.error().error_code(), Some(2));
/// ```
pub trait ResultExt<T, E> {
    /// Maps the error through [`Error::from_exception`].
    fn into_outcome(self) -> Outcome<T>
    where
        E: std::error::Error + 'static;

    /// Maps the error with `f`; the closure only runs on `Err`.
    fn into_outcome_with<F>(self, f: F) -> Outcome<T>
    where
        F: FnOnce(E) -> Error;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    #[inline]
    fn into_outcome(self) -> Outcome<T>
    where
        E: std::error::Error + 'static,
    {
        match self {
            Ok(value) => Outcome::success(value),
            Err(error) => Outcome::fail(Error::from_exception(&error)),
        }
    }

    #[inline]
    fn into_outcome_with<F>(self, f: F) -> Outcome<T>
    where
        F: FnOnce(E) -> Error,
    {
        match self {
            Ok(value) => Outcome::success(value),
            Err(error) => Outcome::fail(f(error)),
        }
    }
}

/// Extension trait turning an `Option` into an outcome.
pub trait OptionExt<T> {
    /// `None` becomes the `None` state.
    fn into_optional_outcome(self) -> OptionalOutcome<T>;

    /// `None` becomes a failure built lazily from `f`.
    fn into_outcome_or_else<F, E>(self, f: F) -> Outcome<T>
    where
        F: FnOnce() -> E,
        E: Into<Error>;
}

impl<T> OptionExt<T> for Option<T> {
    #[inline]
    fn into_optional_outcome(self) -> OptionalOutcome<T> {
        OptionalOutcome::from_option(self)
    }

    #[inline]
    fn into_outcome_or_else<F, E>(self, f: F) -> Outcome<T>
    where
        F: FnOnce() -> E,
        E: Into<Error>,
    {
        match self {
            Some(value) => Outcome::success(value),
            None => Outcome::fail(f()),
        }
    }
}
