//! Process-wide diagnostic configuration.
//!
//! Every failed outcome is built through [`prepare_failure`], which runs the
//! same steps regardless of the outcome type:
//!
//! 1. attach a freshly captured stack trace, unless the error already carries
//!    one or capture is disabled (the per-call [`StackCapture`] wins over the
//!    global flag);
//! 2. pass the error through the configured replacer, if any;
//! 3. invoke the configured failure hook with the final error, if any;
//! 4. hand the final error back to the outcome constructor.
//!
//! # Concurrency
//!
//! The stack-capture flag is an atomic and the hook and replacer each sit in
//! their own lock, so a single setter call is atomic and readers never see a
//! half-written hook. Setters racing each other resolve as last write wins;
//! [`install`] writes each knob separately and is not atomic as a whole.
//! Hooks run with no lock held and may reconfigure the crate themselves.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{config, Outcome};
//!
//! config::set_stack_capture(false);
//! config::set_error_replacer(|err| err.with_title("Replaced"));
//!
//! let failed: Outcome<i32> = Outcome::fail("boom");
//! assert_eq!(failed.error().title(), "Replaced");
//! assert!(failed.error().stack_trace().is_none());
//!
//! config::reset();
//! ```

use std::backtrace::Backtrace;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use crate::types::{Error, OptionalOutcome, Outcome};

/// Side-effect callback invoked with every final failure error.
pub type FailureHook = Arc<dyn Fn(&Error) + Send + Sync>;

/// Function that may substitute the error before it is attached to an outcome.
pub type ErrorReplacer = Arc<dyn Fn(Error) -> Error + Send + Sync>;

/// Per-call override of the global stack-capture flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StackCapture {
    /// Follow [`stack_capture_enabled`].
    #[default]
    Inherit,
    /// Never capture for this call.
    Skip,
    /// Always capture for this call (still never overwrites an existing trace).
    Force,
}

impl StackCapture {
    fn resolve(self, global: bool) -> bool {
        match self {
            Self::Inherit => global,
            Self::Skip => false,
            Self::Force => true,
        }
    }
}

static STACK_CAPTURE: AtomicBool = AtomicBool::new(true);
static FAILURE_HOOK: RwLock<Option<FailureHook>> = RwLock::new(None);
static ERROR_REPLACER: RwLock<Option<ErrorReplacer>> = RwLock::new(None);

/// Enables or disables stack capture for failures built from now on.
#[inline]
pub fn set_stack_capture(enabled: bool) {
    STACK_CAPTURE.store(enabled, Ordering::SeqCst);
}

/// Returns the global stack-capture flag (enabled by default).
#[inline]
pub fn stack_capture_enabled() -> bool {
    STACK_CAPTURE.load(Ordering::SeqCst)
}

/// Replaces the failure hook.
pub fn set_failure_hook<F>(hook: F)
where
    F: Fn(&Error) + Send + Sync + 'static,
{
    let hook: FailureHook = Arc::new(hook);
    write_slot(&FAILURE_HOOK, Some(hook));
}

/// Removes the failure hook. Failures built afterwards notify nobody.
pub fn clear_failure_hook() {
    write_slot(&FAILURE_HOOK, None);
}

/// Replaces the error replacer.
pub fn set_error_replacer<F>(replacer: F)
where
    F: Fn(Error) -> Error + Send + Sync + 'static,
{
    let replacer: ErrorReplacer = Arc::new(replacer);
    write_slot(&ERROR_REPLACER, Some(replacer));
}

/// Removes the error replacer, so new failures keep the error they were given.
pub fn clear_error_replacer() {
    write_slot(&ERROR_REPLACER, None);
}

/// Restores the process defaults: capture on, no hook, no replacer.
pub fn reset() {
    install(DiagnosticConfig::default());
}

/// Copies the current global settings into a [`DiagnosticConfig`].
pub fn snapshot() -> DiagnosticConfig {
    DiagnosticConfig {
        stack_capture: stack_capture_enabled(),
        failure_hook: read_slot(&FAILURE_HOOK),
        error_replacer: read_slot(&ERROR_REPLACER),
    }
}

/// Applies every knob of `config` to the global settings, one at a time.
pub fn install(config: DiagnosticConfig) {
    set_stack_capture(config.stack_capture);
    write_slot(&FAILURE_HOOK, config.failure_hook);
    write_slot(&ERROR_REPLACER, config.error_replacer);
}

/// Runs the failure pipeline against the global settings.
///
/// All outcome `fail` constructors call this; adapters building their own
/// failure representations may call it too so hooks observe them.
pub fn prepare_failure(error: Error, capture: StackCapture) -> Error {
    run_pipeline(
        error,
        capture.resolve(stack_capture_enabled()),
        read_slot(&ERROR_REPLACER).as_deref(),
        read_slot(&FAILURE_HOOK).as_deref(),
    )
}

fn run_pipeline(
    error: Error,
    capture: bool,
    replacer: Option<&(dyn Fn(Error) -> Error + Send + Sync)>,
    hook: Option<&(dyn Fn(&Error) + Send + Sync)>,
) -> Error {
    let mut error = error;
    if capture && error.stack_trace().is_none() {
        error = error.with_stack_trace(Backtrace::force_capture().to_string());
    }
    if let Some(replace) = replacer {
        error = replace(error);
    }
    if let Some(hook) = hook {
        hook(&error);
    }
    error
}

fn read_slot<T: Clone>(slot: &RwLock<Option<T>>) -> Option<T> {
    slot.read().unwrap_or_else(PoisonError::into_inner).clone()
}

fn write_slot<T>(slot: &RwLock<Option<T>>, value: Option<T>) {
    *slot.write().unwrap_or_else(PoisonError::into_inner) = value;
}

/// Diagnostic settings as a plain value, for explicit wiring at a composition root.
///
/// Failures built through [`DiagnosticConfig::fail`] and friends run the same
/// pipeline as the global constructors but ignore the global settings.
///
/// ```
/// use std::sync::{Arc, Mutex};
/// use outcome_rail::config::DiagnosticConfig;
/// use outcome_rail::Outcome;
///
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let sink = Arc::clone(&seen);
/// let diagnostics = DiagnosticConfig::new()
///     .stack_capture(false)
///     .failure_hook(move |err| sink.lock().unwrap().push(err.message().to_owned()));
///
/// let failed: Outcome<u8> = diagnostics.fail("no quota");
/// assert!(failed.is_fail());
/// assert_eq!(*seen.lock().unwrap(), ["no quota"]);
/// ```
#[derive(Clone)]
pub struct DiagnosticConfig {
    stack_capture: bool,
    failure_hook: Option<FailureHook>,
    error_replacer: Option<ErrorReplacer>,
}

impl Default for DiagnosticConfig {
    fn default() -> Self {
        Self { stack_capture: true, failure_hook: None, error_replacer: None }
    }
}

impl fmt::Debug for DiagnosticConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiagnosticConfig")
            .field("stack_capture", &self.stack_capture)
            .field("failure_hook", &self.failure_hook.is_some())
            .field("error_replacer", &self.error_replacer.is_some())
            .finish()
    }
}

impl DiagnosticConfig {
    /// Default settings: capture on, no hook, no replacer.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether failures capture a stack trace when the call site says
    /// [`StackCapture::Inherit`].
    #[must_use]
    pub fn stack_capture(mut self, enabled: bool) -> Self {
        self.stack_capture = enabled;
        self
    }

    /// Sets the hook that observes each prepared failure.
    #[must_use]
    pub fn failure_hook<F>(mut self, hook: F) -> Self
    where
        F: Fn(&Error) + Send + Sync + 'static,
    {
        self.failure_hook = Some(Arc::new(hook));
        self
    }

    /// Sets the replacer applied before the hook sees the error.
    #[must_use]
    pub fn error_replacer<F>(mut self, replacer: F) -> Self
    where
        F: Fn(Error) -> Error + Send + Sync + 'static,
    {
        self.error_replacer = Some(Arc::new(replacer));
        self
    }

    /// Whether these settings capture stack traces by default.
    #[inline]
    pub fn is_stack_capture_enabled(&self) -> bool {
        self.stack_capture
    }

    /// Runs the failure pipeline with these settings.
    pub fn prepare_failure(&self, error: Error, capture: StackCapture) -> Error {
        run_pipeline(
            error,
            capture.resolve(self.stack_capture),
            self.error_replacer.as_deref(),
            self.failure_hook.as_deref(),
        )
    }

    /// Builds a failed [`Outcome`] with these settings.
    pub fn fail<T>(&self, error: impl Into<Error>) -> Outcome<T> {
        Outcome::from_prepared_failure(self.prepare_failure(error.into(), StackCapture::Inherit))
    }

    /// Builds a failed [`OptionalOutcome`] with these settings.
    pub fn fail_optional<T>(&self, error: impl Into<Error>) -> OptionalOutcome<T> {
        OptionalOutcome::from_prepared_failure(
            self.prepare_failure(error.into(), StackCapture::Inherit),
        )
    }
}
