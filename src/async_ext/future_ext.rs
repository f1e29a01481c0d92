//! Extension traits for futures resolving to outcomes.
//!
//! Provides the synchronous combinator vocabulary directly on
//! `Future<Output = Outcome<T>>` and `Future<Output = OptionalOutcome<T>>`, so
//! async pipelines read like their sync counterparts.

use core::future::Future;

use crate::types::{Error, OptionalOutcome, Outcome};

use super::map_future::MapOutcome;

/// Combinators for futures that resolve to an [`Outcome`].
///
/// Every step awaits the previous one; nothing runs speculatively.
///
/// # Examples
///
/// ```rust
/// use outcome_rail::async_ext::FutureOutcomeExt;
/// use outcome_rail::Outcome;
///
/// async fn load_len(name: &'static str) -> Outcome<usize> {
///     async move { Outcome::success(name) }
///         .map(str::len)
///         .ensure(|len| *len > 0, |_| "empty name")
///         .await
/// }
/// ```
pub trait FutureOutcomeExt<T>: Future<Output = Outcome<T>> + Sized {
    /// Maps the success value once the future resolves.
    fn map<U, F>(self, f: F) -> MapOutcome<Self, F>
    where
        F: FnOnce(T) -> U,
    {
        MapOutcome::new(self, f)
    }

    fn map_err<G>(self, g: G) -> impl Future<Output = Outcome<T>>
    where
        G: FnOnce(Error) -> Error,
    {
        async move { self.await.map_err(g) }
    }

    fn map_both<U, F, G>(self, f: F, g: G) -> impl Future<Output = Outcome<U>>
    where
        F: FnOnce(T) -> U,
        G: FnOnce(Error) -> Error,
    {
        async move { self.await.map_both(f, g) }
    }

    fn and_then<U, F>(self, f: F) -> impl Future<Output = Outcome<U>>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        async move { self.await.and_then(f) }
    }

    /// Chains an asynchronous step; short-circuits on failure.
    fn and_then_async<U, F, Fut>(self, f: F) -> impl Future<Output = Outcome<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<U>>,
    {
        async move { self.await.and_then_async(f).await }
    }

    /// Chains a step that may legitimately produce nothing.
    fn and_then_optional<U, F>(self, f: F) -> impl Future<Output = OptionalOutcome<U>>
    where
        F: FnOnce(T) -> OptionalOutcome<U>,
    {
        async move { self.await.and_then_optional(f) }
    }

    fn or_else<F>(self, f: F) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce(Error) -> Outcome<T>,
    {
        async move { self.await.or_else(f) }
    }

    fn on_success<F>(self, f: F) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce(&T),
    {
        async move { self.await.on_success(f) }
    }

    fn on_fail<F>(self, f: F) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce(&Error),
    {
        async move { self.await.on_fail(f) }
    }

    fn ensure<P, F, E>(self, predicate: P, error_factory: F) -> impl Future<Output = Outcome<T>>
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce(&T) -> E,
        E: Into<Error>,
    {
        async move { self.await.ensure(predicate, error_factory) }
    }

    fn truncate(self) -> impl Future<Output = Outcome<()>> {
        async move { self.await.truncate() }
    }
}

impl<Fut, T> FutureOutcomeExt<T> for Fut where Fut: Future<Output = Outcome<T>> {}

/// Combinators for futures that resolve to an [`OptionalOutcome`].
pub trait FutureOptionalOutcomeExt<T>: Future<Output = OptionalOutcome<T>> + Sized {
    fn map<U, F>(self, f: F) -> impl Future<Output = OptionalOutcome<U>>
    where
        F: FnOnce(T) -> U,
    {
        async move { self.await.map(f) }
    }

    fn map_err<G>(self, g: G) -> impl Future<Output = OptionalOutcome<T>>
    where
        G: FnOnce(Error) -> Error,
    {
        async move { self.await.map_err(g) }
    }

    fn map_both<U, F, G>(self, f: F, g: G) -> impl Future<Output = OptionalOutcome<U>>
    where
        F: FnOnce(T) -> U,
        G: FnOnce(Error) -> Error,
    {
        async move { self.await.map_both(f, g) }
    }

    fn and_then<U, F>(self, f: F) -> impl Future<Output = OptionalOutcome<U>>
    where
        F: FnOnce(T) -> OptionalOutcome<U>,
    {
        async move { self.await.and_then(f) }
    }

    fn and_then_async<U, F, Fut>(self, f: F) -> impl Future<Output = OptionalOutcome<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = OptionalOutcome<U>>,
    {
        async move { self.await.and_then_async(f).await }
    }

    /// Chains a step whose target has no `None` state.
    fn and_then_required<U, F>(self, f: F) -> impl Future<Output = Outcome<U>>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        async move { self.await.and_then_required(f) }
    }

    fn require(self) -> impl Future<Output = Outcome<T>> {
        async move { self.await.require() }
    }

    fn require_or<E>(self, error: E) -> impl Future<Output = Outcome<T>>
    where
        E: Into<Error>,
    {
        async move { self.await.require_or(error) }
    }

    /// Recovers from a failure; success and `None` pass through untouched.
    fn or_else<F>(self, f: F) -> impl Future<Output = OptionalOutcome<T>>
    where
        F: FnOnce(Error) -> OptionalOutcome<T>,
    {
        async move { self.await.or_else(f) }
    }

    fn on_success<F>(self, f: F) -> impl Future<Output = OptionalOutcome<T>>
    where
        F: FnOnce(&T),
    {
        async move { self.await.on_success(f) }
    }

    fn on_fail<F>(self, f: F) -> impl Future<Output = OptionalOutcome<T>>
    where
        F: FnOnce(&Error),
    {
        async move { self.await.on_fail(f) }
    }

    fn on_none<F>(self, f: F) -> impl Future<Output = OptionalOutcome<T>>
    where
        F: FnOnce(),
    {
        async move { self.await.on_none(f) }
    }

    fn ensure<P, F, E>(
        self,
        predicate: P,
        error_factory: F,
    ) -> impl Future<Output = OptionalOutcome<T>>
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce(&T) -> E,
        E: Into<Error>,
    {
        async move { self.await.ensure(predicate, error_factory) }
    }

    fn truncate(self) -> impl Future<Output = Outcome<()>> {
        async move { self.await.truncate() }
    }
}

impl<Fut, T> FutureOptionalOutcomeExt<T> for Fut where Fut: Future<Output = OptionalOutcome<T>> {}
