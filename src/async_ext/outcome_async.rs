//! Asynchronous counterparts of the outcome combinators.
//!
//! Each method mirrors its synchronous namesake but takes a closure returning a
//! future. The closure is only invoked (and its future only awaited) when the
//! synchronous form would have invoked it, so both forms observe the same
//! calls in the same order. Nothing here spawns, blocks or races: the outcome
//! is settled before the next step starts.
//!
//! Cancellation is the caller's business: dropping the returned future drops
//! the in-flight step, and any token the steps need is captured by the
//! closures themselves.

use core::future::Future;

use crate::types::{Error, OptionalOutcome, OptionalOutcomeState, Outcome, OutcomeState};

impl<T> Outcome<T> {
    /// Async [`map`](Outcome::map).
    pub async fn map_async<U, F, Fut>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self.into_state() {
            OutcomeState::Success(value) => Outcome::success(f(value).await),
            OutcomeState::Fail(error) => Outcome::from_prepared_failure(error),
        }
    }

    /// Async [`map_err`](Outcome::map_err).
    pub async fn map_err_async<G, Fut>(self, g: G) -> Outcome<T>
    where
        G: FnOnce(Error) -> Fut,
        Fut: Future<Output = Error>,
    {
        match self.into_state() {
            OutcomeState::Success(value) => Outcome::success(value),
            OutcomeState::Fail(error) => Outcome::from_prepared_failure(g(error).await),
        }
    }

    /// Async [`map_both`](Outcome::map_both).
    pub async fn map_both_async<U, F, FFut, G, GFut>(self, f: F, g: G) -> Outcome<U>
    where
        F: FnOnce(T) -> FFut,
        FFut: Future<Output = U>,
        G: FnOnce(Error) -> GFut,
        GFut: Future<Output = Error>,
    {
        match self.into_state() {
            OutcomeState::Success(value) => Outcome::success(f(value).await),
            OutcomeState::Fail(error) => Outcome::from_prepared_failure(g(error).await),
        }
    }

    /// Async [`and_then`](Outcome::and_then).
    pub async fn and_then_async<U, F, Fut>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<U>>,
    {
        match self.into_state() {
            OutcomeState::Success(value) => f(value).await,
            OutcomeState::Fail(error) => Outcome::from_prepared_failure(error),
        }
    }

    /// Async [`and_then_optional`](Outcome::and_then_optional).
    pub async fn and_then_optional_async<U, F, Fut>(self, f: F) -> OptionalOutcome<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = OptionalOutcome<U>>,
    {
        match self.into_state() {
            OutcomeState::Success(value) => f(value).await,
            OutcomeState::Fail(error) => OptionalOutcome::from_prepared_failure(error),
        }
    }

    /// Async [`or_else`](Outcome::or_else).
    pub async fn or_else_async<F, Fut>(self, f: F) -> Outcome<T>
    where
        F: FnOnce(Error) -> Fut,
        Fut: Future<Output = Outcome<T>>,
    {
        match self.into_state() {
            OutcomeState::Success(value) => Outcome::success(value),
            OutcomeState::Fail(error) => f(error).await,
        }
    }

    /// Async [`on_success`](Outcome::on_success).
    ///
    /// The returned future cannot borrow the value; copy what it needs.
    pub async fn on_success_async<F, Fut>(self, f: F) -> Outcome<T>
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = ()>,
    {
        if let Ok(value) = self.as_result() {
            f(value).await;
        }
        self
    }

    /// Async [`on_fail`](Outcome::on_fail). The side effect receives a clone of the error.
    pub async fn on_fail_async<F, Fut>(self, f: F) -> Outcome<T>
    where
        F: FnOnce(Error) -> Fut,
        Fut: Future<Output = ()>,
    {
        if let Err(error) = self.as_result() {
            f(error.clone()).await;
        }
        self
    }

    /// Async [`ensure`](Outcome::ensure).
    pub async fn ensure_async<P, Fut, F, E>(self, predicate: P, error_factory: F) -> Outcome<T>
    where
        P: FnOnce(&T) -> Fut,
        Fut: Future<Output = bool>,
        F: FnOnce(&T) -> E,
        E: Into<Error>,
    {
        match self.into_state() {
            OutcomeState::Success(value) => {
                if predicate(&value).await {
                    Outcome::success(value)
                } else {
                    Outcome::fail(error_factory(&value))
                }
            },
            OutcomeState::Fail(error) => Outcome::from_prepared_failure(error),
        }
    }

    /// Async [`match_with`](Outcome::match_with).
    pub async fn match_async<R, S, SFut, F, FFut>(self, on_success: S, on_fail: F) -> R
    where
        S: FnOnce(T) -> SFut,
        SFut: Future<Output = R>,
        F: FnOnce(Error) -> FFut,
        FFut: Future<Output = R>,
    {
        match self.into_state() {
            OutcomeState::Success(value) => on_success(value).await,
            OutcomeState::Fail(error) => on_fail(error).await,
        }
    }
}

impl<T> OptionalOutcome<T> {
    /// Async [`map`](OptionalOutcome::map).
    pub async fn map_async<U, F, Fut>(self, f: F) -> OptionalOutcome<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self.into_state() {
            OptionalOutcomeState::Success(value) => OptionalOutcome::success(f(value).await),
            OptionalOutcomeState::None => OptionalOutcome::none(),
            OptionalOutcomeState::Fail(error) => OptionalOutcome::from_prepared_failure(error),
        }
    }

    /// Async [`map_err`](OptionalOutcome::map_err).
    pub async fn map_err_async<G, Fut>(self, g: G) -> OptionalOutcome<T>
    where
        G: FnOnce(Error) -> Fut,
        Fut: Future<Output = Error>,
    {
        match self.into_state() {
            OptionalOutcomeState::Success(value) => OptionalOutcome::success(value),
            OptionalOutcomeState::None => OptionalOutcome::none(),
            OptionalOutcomeState::Fail(error) => {
                OptionalOutcome::from_prepared_failure(g(error).await)
            },
        }
    }

    /// Async [`map_both`](OptionalOutcome::map_both).
    pub async fn map_both_async<U, F, FFut, G, GFut>(self, f: F, g: G) -> OptionalOutcome<U>
    where
        F: FnOnce(T) -> FFut,
        FFut: Future<Output = U>,
        G: FnOnce(Error) -> GFut,
        GFut: Future<Output = Error>,
    {
        match self.into_state() {
            OptionalOutcomeState::Success(value) => OptionalOutcome::success(f(value).await),
            OptionalOutcomeState::None => OptionalOutcome::none(),
            OptionalOutcomeState::Fail(error) => {
                OptionalOutcome::from_prepared_failure(g(error).await)
            },
        }
    }

    /// Async [`and_then`](OptionalOutcome::and_then).
    pub async fn and_then_async<U, F, Fut>(self, f: F) -> OptionalOutcome<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = OptionalOutcome<U>>,
    {
        match self.into_state() {
            OptionalOutcomeState::Success(value) => f(value).await,
            OptionalOutcomeState::None => OptionalOutcome::none(),
            OptionalOutcomeState::Fail(error) => OptionalOutcome::from_prepared_failure(error),
        }
    }

    /// Async [`and_then_required`](OptionalOutcome::and_then_required).
    pub async fn and_then_required_async<U, F, Fut>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<U>>,
    {
        match self.into_state() {
            OptionalOutcomeState::Success(value) => f(value).await,
            OptionalOutcomeState::None => Outcome::fail(Error::value_required()),
            OptionalOutcomeState::Fail(error) => Outcome::from_prepared_failure(error),
        }
    }

    /// Async [`or_else`](OptionalOutcome::or_else).
    pub async fn or_else_async<F, Fut>(self, f: F) -> OptionalOutcome<T>
    where
        F: FnOnce(Error) -> Fut,
        Fut: Future<Output = OptionalOutcome<T>>,
    {
        match self.into_state() {
            OptionalOutcomeState::Success(value) => OptionalOutcome::success(value),
            OptionalOutcomeState::None => OptionalOutcome::none(),
            OptionalOutcomeState::Fail(error) => f(error).await,
        }
    }

    pub async fn on_success_async<F, Fut>(self, f: F) -> OptionalOutcome<T>
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = ()>,
    {
        if let OptionalOutcomeState::Success(value) = self.state() {
            f(value).await;
        }
        self
    }

    pub async fn on_fail_async<F, Fut>(self, f: F) -> OptionalOutcome<T>
    where
        F: FnOnce(Error) -> Fut,
        Fut: Future<Output = ()>,
    {
        if let OptionalOutcomeState::Fail(error) = self.state() {
            f(error.clone()).await;
        }
        self
    }

    pub async fn on_none_async<F, Fut>(self, f: F) -> OptionalOutcome<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ()>,
    {
        if self.is_none() {
            f().await;
        }
        self
    }

    pub async fn ensure_async<P, Fut, F, E>(
        self,
        predicate: P,
        error_factory: F,
    ) -> OptionalOutcome<T>
    where
        P: FnOnce(&T) -> Fut,
        Fut: Future<Output = bool>,
        F: FnOnce(&T) -> E,
        E: Into<Error>,
    {
        match self.into_state() {
            OptionalOutcomeState::Success(value) => {
                if predicate(&value).await {
                    OptionalOutcome::success(value)
                } else {
                    OptionalOutcome::fail(error_factory(&value))
                }
            },
            OptionalOutcomeState::None => OptionalOutcome::none(),
            OptionalOutcomeState::Fail(error) => OptionalOutcome::from_prepared_failure(error),
        }
    }

    /// Async [`match_with`](OptionalOutcome::match_with).
    pub async fn match_async<R, S, SFut, F, FFut, N, NFut>(
        self,
        on_success: S,
        on_fail: F,
        on_none: N,
    ) -> R
    where
        S: FnOnce(T) -> SFut,
        SFut: Future<Output = R>,
        F: FnOnce(Error) -> FFut,
        FFut: Future<Output = R>,
        N: FnOnce() -> NFut,
        NFut: Future<Output = R>,
    {
        match self.into_state() {
            OptionalOutcomeState::Success(value) => on_success(value).await,
            OptionalOutcomeState::None => on_none().await,
            OptionalOutcomeState::Fail(error) => on_fail(error).await,
        }
    }
}
