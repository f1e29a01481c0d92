//! State names, raw state views and the invalid-state access error.

use core::fmt;

use crate::types::Error;

/// Name of an outcome state, used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateKind {
    Success,
    None,
    Fail,
}

impl fmt::Display for StateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Success => "Success",
            Self::None => "None",
            Self::Fail => "Fail",
        })
    }
}

/// Read-only view over the state of an [`Outcome`](crate::Outcome).
///
/// Meant for adapters converting outcomes into other representations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeState<T, E> {
    Success(T),
    Fail(E),
}

/// Read-only view over the state of an [`OptionalOutcome`](crate::OptionalOutcome).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionalOutcomeState<T, E> {
    Success(T),
    None,
    Fail(E),
}

/// Programmer error raised when reading a payload the current state does not carry.
///
/// Returned by the `try_*` accessors and used as the panic message of the
/// guarded accessors and of the [`UnsafeAccess`](crate::escape::UnsafeAccess)
/// escape hatch. It never becomes a `Fail` outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidStateAccess {
    requested: StateKind,
    actual: StateKind,
    source_error: Option<Error>,
}

impl InvalidStateAccess {
    pub(crate) fn new(requested: StateKind, actual: StateKind, source_error: Option<Error>) -> Self {
        Self { requested, actual, source_error }
    }

    /// State whose payload was requested.
    #[inline]
    pub fn requested(&self) -> StateKind {
        self.requested
    }

    /// State the outcome was actually in.
    #[inline]
    pub fn actual(&self) -> StateKind {
        self.actual
    }

    /// Error carried by the outcome, when it was a failure.
    #[inline]
    pub fn source_error(&self) -> Option<&Error> {
        self.source_error.as_ref()
    }
}

impl fmt::Display for InvalidStateAccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let payload = match self.requested {
            StateKind::Fail => "error",
            _ => "value",
        };
        write!(
            f,
            "invalid state access: cannot read the {payload} of an outcome in the {} state",
            self.actual
        )?;
        if let Some(err) = &self.source_error {
            write!(f, " ({err:#})")?;
        }
        Ok(())
    }
}

impl std::error::Error for InvalidStateAccess {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source_error.as_ref().map(|e| e as &(dyn std::error::Error + 'static))
    }
}
