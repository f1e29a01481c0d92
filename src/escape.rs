//! Direct extraction of values and errors, for interoperability boundaries.
//!
//! Importing [`UnsafeAccess`] is an explicit opt-in: the methods panic when the
//! outcome is in the wrong state. Prefer the combinators, or check the state
//! first. The "unsafe" in the name is about state, not memory; nothing here
//! uses `unsafe` code.
//!
//! ```
//! use outcome_rail::escape::UnsafeAccess;
//! use outcome_rail::Outcome;
//!
//! assert_eq!(Outcome::success(5).unsafe_get_value(), 5);
//! ```
//!
//! ```should_panic
//! use outcome_rail::escape::UnsafeAccess;
//! use outcome_rail::Outcome;
//!
//! let failed: Outcome<u8> = Outcome::fail("nope");
//! failed.unsafe_get_value(); // panics: invalid state access
//! ```

use crate::types::{
    Error, InvalidStateAccess, OptionalOutcome, OptionalOutcomeState, Outcome, OutcomeState,
    StateKind,
};

/// Unchecked extraction from outcomes.
pub trait UnsafeAccess {
    type Value;

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics with an [`InvalidStateAccess`] message, including the outcome's
    /// error when it failed.
    fn unsafe_get_value(self) -> Self::Value;

    /// Returns the failure error.
    ///
    /// # Panics
    ///
    /// Panics with an [`InvalidStateAccess`] message when the outcome did not fail.
    fn unsafe_get_error(self) -> Error;
}

#[track_caller]
fn invalid(requested: StateKind, actual: StateKind, source_error: Option<Error>) -> ! {
    panic!("{}", InvalidStateAccess::new(requested, actual, source_error))
}

impl<T> UnsafeAccess for Outcome<T> {
    type Value = T;

    #[track_caller]
    fn unsafe_get_value(self) -> T {
        match self.into_state() {
            OutcomeState::Success(value) => value,
            OutcomeState::Fail(error) => invalid(StateKind::Success, StateKind::Fail, Some(error)),
        }
    }

    #[track_caller]
    fn unsafe_get_error(self) -> Error {
        match self.into_state() {
            OutcomeState::Fail(error) => error,
            OutcomeState::Success(_) => invalid(StateKind::Fail, StateKind::Success, None),
        }
    }
}

impl<T> UnsafeAccess for OptionalOutcome<T> {
    type Value = T;

    #[track_caller]
    fn unsafe_get_value(self) -> T {
        match self.into_state() {
            OptionalOutcomeState::Success(value) => value,
            OptionalOutcomeState::None => invalid(StateKind::Success, StateKind::None, None),
            OptionalOutcomeState::Fail(error) => {
                invalid(StateKind::Success, StateKind::Fail, Some(error))
            },
        }
    }

    #[track_caller]
    fn unsafe_get_error(self) -> Error {
        match self.into_state() {
            OptionalOutcomeState::Fail(error) => error,
            OptionalOutcomeState::Success(_) => invalid(StateKind::Fail, StateKind::Success, None),
            OptionalOutcomeState::None => invalid(StateKind::Fail, StateKind::None, None),
        }
    }
}
