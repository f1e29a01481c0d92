//! Collecting and splitting sequences of outcomes.
//!
//! Collecting is fail-fast: the first failure stops iteration and becomes the
//! result, matching how a hand-written loop with early return would behave.
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! let all: Outcome<Vec<i32>> = (1..=3).map(Outcome::success).collect();
//! assert_eq!(all.into_result().unwrap(), vec![1, 2, 3]);
//!
//! let mut seen = 0;
//! let failed: Outcome<Vec<i32>> = [Outcome::success(1), Outcome::fail("bad"), Outcome::success(3)]
//!     .into_iter()
//!     .inspect(|_| seen += 1)
//!     .collect();
//! assert!(failed.is_fail());
//! assert_eq!(seen, 2);
//! ```

use crate::types::{Error, OptionalOutcome, OptionalOutcomeState, Outcome, OutcomeState};

impl<T, C> FromIterator<Outcome<T>> for Outcome<C>
where
    C: FromIterator<T>,
{
    fn from_iter<I: IntoIterator<Item = Outcome<T>>>(iter: I) -> Self {
        let mut failure = None;
        let collected = iter
            .into_iter()
            .map_while(|outcome| match outcome.into_state() {
                OutcomeState::Success(value) => Some(value),
                OutcomeState::Fail(error) => {
                    failure = Some(error);
                    None
                },
            })
            .collect();

        match failure {
            Some(error) => Outcome::from_prepared_failure(error),
            None => Outcome::success(collected),
        }
    }
}

/// Collects successes, skipping `None` items; the first failure wins.
///
/// The collection is a success even when every item was `None`.
impl<T, C> FromIterator<OptionalOutcome<T>> for OptionalOutcome<C>
where
    C: FromIterator<T>,
{
    fn from_iter<I: IntoIterator<Item = OptionalOutcome<T>>>(iter: I) -> Self {
        let mut failure = None;
        let collected = iter
            .into_iter()
            .map_while(|outcome| match outcome.into_state() {
                OptionalOutcomeState::Success(value) => Some(Some(value)),
                OptionalOutcomeState::None => Some(None),
                OptionalOutcomeState::Fail(error) => {
                    failure = Some(error);
                    None
                },
            })
            .flatten()
            .collect();

        match failure {
            Some(error) => OptionalOutcome::from_prepared_failure(error),
            None => OptionalOutcome::success(collected),
        }
    }
}

/// Iterator adapters over sequences of [`Outcome`]s.
pub trait OutcomeIterExt<T>: Iterator<Item = Outcome<T>> + Sized {
    /// Yields only the success values.
    fn successes(self) -> impl Iterator<Item = T> {
        self.filter_map(Outcome::ok)
    }

    /// Yields only the errors.
    fn failures(self) -> impl Iterator<Item = Error> {
        self.filter_map(Outcome::err)
    }

    /// Splits the sequence into success values and errors, visiting every item.
    fn partition_outcomes(self) -> (Vec<T>, Vec<Error>) {
        let mut values = Vec::new();
        let mut errors = Vec::new();
        for outcome in self {
            match outcome.into_state() {
                OutcomeState::Success(value) => values.push(value),
                OutcomeState::Fail(error) => errors.push(error),
            }
        }
        (values, errors)
    }
}

impl<I, T> OutcomeIterExt<T> for I where I: Iterator<Item = Outcome<T>> {}
