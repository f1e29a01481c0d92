//! Tracing integration for outcome-rail.
//!
//! The crate never logs on its own. This module offers two opt-in bridges to the
//! `tracing` ecosystem: a ready-made failure hook that emits one event per
//! failure, and an extension trait that stamps the active span's name onto a
//! failed outcome's error.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! outcome-rail = { version = "0.1", features = ["tracing"] }
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use outcome_rail::{config, tracing_ext::failure_logger};
//! use tracing::Level;
//!
//! config::set_failure_hook(failure_logger(Level::WARN));
//! ```

use tracing::{Level, Span};

use crate::types::{Error, OptionalOutcome, Outcome};

/// Extension key under which the span name is stored.
pub const SPAN_EXTENSION: &str = "span";

/// Returns a failure hook that emits a `tracing` event at `level` for each failure.
///
/// The event carries `title`, `error_code` and `identifier` fields, plus the
/// error message as `detail` when the error is not sensitive.
pub fn failure_logger(level: Level) -> impl Fn(&Error) + Send + Sync + 'static {
    move |error: &Error| log_failure(level, error)
}

fn log_failure(level: Level, error: &Error) {
    let title = error.title();
    let code = error.error_code();
    let identifier = error.identifier();
    let detail = if error.is_sensitive() { None } else { Some(error.message()) };

    // `tracing` levels must be known at the call site.
    match level {
        Level::ERROR => tracing::error!(title, error_code = code, identifier, detail, "outcome failed"),
        Level::WARN => tracing::warn!(title, error_code = code, identifier, detail, "outcome failed"),
        Level::INFO => tracing::info!(title, error_code = code, identifier, detail, "outcome failed"),
        Level::DEBUG => tracing::debug!(title, error_code = code, identifier, detail, "outcome failed"),
        _ => tracing::trace!(title, error_code = code, identifier, detail, "outcome failed"),
    }
}

fn span_name(span: &Span) -> &'static str {
    span.metadata().map(|m| m.name()).unwrap_or("unknown")
}

/// Extension trait adding the current span's name to failed outcomes.
///
/// # Example
///
/// ```rust
/// use outcome_rail::tracing_ext::{OutcomeSpanExt, SPAN_EXTENSION};
/// use outcome_rail::{config::StackCapture, Outcome};
///
/// let out: Outcome<()> = Outcome::fail_with("timeout", StackCapture::Skip).with_current_span();
/// assert!(out.error().extensions().contains_key(SPAN_EXTENSION));
/// ```
pub trait OutcomeSpanExt: Sized {
    /// Records the current span's name under [`SPAN_EXTENSION`] on failure.
    fn with_current_span(self) -> Self {
        self.with_span(&Span::current())
    }

    /// Records the given span's name under [`SPAN_EXTENSION`] on failure.
    fn with_span(self, span: &Span) -> Self;
}

impl<T> OutcomeSpanExt for Outcome<T> {
    fn with_span(self, span: &Span) -> Self {
        self.map_err(|error| error.with_extension(SPAN_EXTENSION, span_name(span)))
    }
}

impl<T> OutcomeSpanExt for OptionalOutcome<T> {
    fn with_span(self, span: &Span) -> Self {
        self.map_err(|error| error.with_extension(SPAN_EXTENSION, span_name(span)))
    }
}
