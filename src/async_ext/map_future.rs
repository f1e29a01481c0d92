//! Future wrapper applying a transform to a resolved outcome.
//!
//! [`MapOutcome`] wraps a `Future<Output = Outcome<T>>` and maps the success
//! value once the inner future resolves. The transform is never called for a
//! failed outcome.

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::future::FusedFuture;

use pin_project_lite::pin_project;

use crate::types::Outcome;

pin_project! {
    /// A Future that maps the success value of an outcome-producing future.
    ///
    /// # Cancel Safety
    ///
    /// `MapOutcome` is cancel-safe if the inner future is cancel-safe.
    /// The transform only runs when the inner future is ready.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome_rail::async_ext::FutureOutcomeExt;
    /// use outcome_rail::Outcome;
    ///
    /// async fn example() -> Outcome<usize> {
    ///     async { Outcome::success("four") }
    ///         .map(str::len)
    ///         .await
    /// }
    /// ```
    #[must_use = "futures do nothing unless polled"]
    pub struct MapOutcome<Fut, F> {
        #[pin]
        future: Fut,
        transform: Option<F>,
    }
}

impl<Fut, F> MapOutcome<Fut, F> {
    /// Wraps `future`, applying `transform` to a success value once it resolves.
    #[inline]
    pub fn new(future: Fut, transform: F) -> Self {
        Self { future, transform: Some(transform) }
    }
}

impl<Fut, F, T, U> Future for MapOutcome<Fut, F>
where
    Fut: Future<Output = Outcome<T>>,
    F: FnOnce(T) -> U,
{
    type Output = Outcome<U>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        this.future.poll(cx).map(|outcome| match this.transform.take() {
            Some(transform) => outcome.map(transform),
            None => panic!("MapOutcome polled after completion"),
        })
    }
}

impl<Fut, F, T, U> FusedFuture for MapOutcome<Fut, F>
where
    Fut: FusedFuture<Output = Outcome<T>>,
    F: FnOnce(T) -> U,
{
    fn is_terminated(&self) -> bool {
        self.transform.is_none() || self.future.is_terminated()
    }
}
