//! Boundary helpers turning fallible Rust code into outcomes.
//!
//! These play the role of exception handlers at the edge of the outcome
//! algebra: run a fallible block, map its error through
//! [`Error::from_exception`], and continue with combinators from there.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::convert::attempt;
//!
//! let port = attempt(|| "8080".parse::<u16>());
//! assert_eq!(port.unwrap_or(0), 8080);
//!
//! let bad = attempt(|| "eighty".parse::<u16>());
//! assert_eq!(bad.error().title(), "ParseIntError");
//! ```

use crate::types::{Error, OptionalOutcome, Outcome};

/// Runs `f`, converting any `Err` into a failed outcome via [`Error::from_exception`].
#[inline]
pub fn attempt<T, E, F>(f: F) -> Outcome<T>
where
    F: FnOnce() -> Result<T, E>,
    E: std::error::Error + 'static,
{
    match f() {
        Ok(value) => Outcome::success(value),
        Err(error) => Outcome::fail(Error::from_exception(&error)),
    }
}

/// Type-erased error returned by catch-all fallible blocks.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// [`attempt`] for blocks that return a boxed, type-erased error.
///
/// The `source()` chain of the erased error is kept as the inner-error chain,
/// and a boxed [`Error`] comes back unchanged.
///
/// ```
/// use outcome_rail::convert::{attempt_dyn, BoxError};
///
/// fn port(raw: &str) -> Result<u16, BoxError> {
///     Ok(raw.trim().parse()?)
/// }
///
/// assert_eq!(attempt_dyn(|| port(" 443 ")).unwrap_or(0), 443);
/// assert!(attempt_dyn(|| port("https")).is_fail());
/// ```
#[inline]
pub fn attempt_dyn<T, F>(f: F) -> Outcome<T>
where
    F: FnOnce() -> Result<T, BoxError>,
{
    match f() {
        Ok(value) => Outcome::success(value),
        Err(error) => Outcome::fail(Error::from(error)),
    }
}

/// Runs `f`, converting only the errors accepted by `filter`.
///
/// Errors the filter rejects are handed back untouched as `Err(E)` so the
/// caller can propagate them with `?`.
///
/// ```
/// use std::io::{self, ErrorKind};
/// use outcome_rail::convert::attempt_where;
///
/// let handled = attempt_where(
///     || Err::<(), _>(io::Error::from(ErrorKind::NotFound)),
///     |e| e.kind() == ErrorKind::NotFound,
/// );
/// assert!(handled.unwrap().is_fail());
///
/// let escaped = attempt_where(
///     || Err::<(), _>(io::Error::from(ErrorKind::PermissionDenied)),
///     |e| e.kind() == ErrorKind::NotFound,
/// );
/// assert!(escaped.is_err());
/// ```
pub fn attempt_where<T, E, F, P>(f: F, filter: P) -> Result<Outcome<T>, E>
where
    F: FnOnce() -> Result<T, E>,
    P: FnOnce(&E) -> bool,
    E: std::error::Error + 'static,
{
    match f() {
        Ok(value) => Ok(Outcome::success(value)),
        Err(error) if filter(&error) => Ok(Outcome::fail(Error::from_exception(&error))),
        Err(error) => Err(error),
    }
}

/// Like [`attempt`] for lookups: `Ok(None)` becomes the `None` state.
#[inline]
pub fn attempt_optional<T, E, F>(f: F) -> OptionalOutcome<T>
where
    F: FnOnce() -> Result<Option<T>, E>,
    E: std::error::Error + 'static,
{
    match f() {
        Ok(value) => OptionalOutcome::from_option(value),
        Err(error) => OptionalOutcome::fail(Error::from_exception(&error)),
    }
}

/// Runs `f`, converting any `Err` with a caller-supplied mapping.
#[inline]
pub fn attempt_with<T, E, F, M>(f: F, map_error: M) -> Outcome<T>
where
    F: FnOnce() -> Result<T, E>,
    M: FnOnce(E) -> Error,
{
    match f() {
        Ok(value) => Outcome::success(value),
        Err(error) => Outcome::fail(map_error(error)),
    }
}

/// Flattens an outcome into a plain `Result`.
#[inline]
pub fn outcome_to_result<T>(outcome: Outcome<T>) -> Result<T, Error> {
    outcome.into_result()
}

/// Flattens an optional outcome into `Result<Option<T>, Error>`.
#[inline]
pub fn optional_to_result<T>(outcome: OptionalOutcome<T>) -> Result<Option<T>, Error> {
    outcome.into_result()
}
