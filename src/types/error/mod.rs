//! Immutable structured error carried by every failed outcome.
//!
//! [`Error`] is a value object: once built, none of its fields change. Every
//! `with_*` method is a copy-with operation returning a new value, so an error
//! observed by a failure hook is exactly the error stored in the outcome.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::Error;
//!
//! let root = Error::new("connection refused").with_title("Network");
//! let err = Error::builder()
//!     .message("could not load profile")
//!     .title("Profile")
//!     .error_code(503)
//!     .identifier("profile.load")
//!     .extension("user_id", 42)
//!     .inner_error(root)
//!     .build();
//!
//! assert_eq!(err.error_code(), Some(503));
//! assert_eq!(err.root_cause().message(), "connection refused");
//! assert_eq!(err.chain().count(), 2);
//! ```

use std::sync::Arc;

use serde_json::Value;

use crate::types::Extensions;

mod builder;
mod render;
mod wire;

pub use builder::ErrorBuilder;

/// Message used when an error is built without one.
pub const DEFAULT_MESSAGE: &str = "An unexpected error has occurred.";

/// Title used when an error is built without one.
pub const DEFAULT_TITLE: &str = "Error";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ErrorData {
    pub(crate) message: String,
    pub(crate) title: String,
    pub(crate) error_code: Option<i32>,
    pub(crate) identifier: Option<String>,
    pub(crate) inner_error: Option<Error>,
    pub(crate) extensions: Extensions,
    pub(crate) stack_trace: Option<String>,
    pub(crate) is_sensitive: bool,
}

impl Default for ErrorData {
    fn default() -> Self {
        Self {
            message: DEFAULT_MESSAGE.into(),
            title: DEFAULT_TITLE.into(),
            error_code: None,
            identifier: None,
            inner_error: None,
            extensions: Extensions::new(),
            stack_trace: None,
            is_sensitive: false,
        }
    }
}

/// Structured diagnostic value attached to a failed outcome.
///
/// Cloning is cheap: the fields sit behind a shared pointer.
#[must_use]
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Error {
    data: Arc<ErrorData>,
}

impl Error {
    /// Creates an error with the given message and default title.
    #[inline]
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self::from_data(ErrorData { message: message.into(), ..ErrorData::default() })
    }

    /// Starts a builder where every field is optional.
    #[inline]
    pub fn builder() -> ErrorBuilder {
        ErrorBuilder::default()
    }

    #[inline]
    pub(crate) fn from_data(data: ErrorData) -> Self {
        Self { data: Arc::new(data) }
    }

    /// Error used when an absent value reaches a target that has no `None` state.
    pub fn value_required() -> Self {
        Self::builder()
            .title("ValueRequired")
            .message("A value was required but none was present.")
            .identifier("outcome_rail.value_required")
            .build()
    }

    /// Maps a caught error into an [`Error`].
    ///
    /// The display text becomes the message, the short type name becomes the
    /// title and the `source()` chain becomes the inner-error chain. Trait
    /// objects such as `dyn Error + Send + Sync` are accepted; their title is
    /// the generic [`DEFAULT_TITLE`] since the concrete type is erased.
    ///
    /// ```
    /// use outcome_rail::Error;
    ///
    /// let io = std::io::Error::new(std::io::ErrorKind::NotFound, "config.toml missing");
    /// let err = Error::from_exception(&io);
    ///
    /// assert_eq!(err.message(), "config.toml missing");
    /// assert_eq!(err.title(), "Error");
    /// ```
    pub fn from_exception<E>(error: &E) -> Self
    where
        E: std::error::Error + ?Sized + 'static,
    {
        Self::from_data(ErrorData {
            message: error.to_string(),
            title: short_type_name::<E>().into(),
            inner_error: error.source().map(Self::from_source),
            ..ErrorData::default()
        })
    }

    /// Like [`from_exception`](Self::from_exception) but overrides message, code and identifier.
    pub fn from_exception_with<E>(
        error: &E,
        message: Option<String>,
        error_code: Option<i32>,
        identifier: Option<String>,
    ) -> Self
    where
        E: std::error::Error + ?Sized + 'static,
    {
        let mut data = Self::from_exception(error).into_data();
        if let Some(message) = message {
            data.message = message;
        }
        if error_code.is_some() {
            data.error_code = error_code;
        }
        if identifier.is_some() {
            data.identifier = identifier;
        }
        Self::from_data(data)
    }

    fn from_source(source: &(dyn std::error::Error + 'static)) -> Self {
        // Already converted somewhere up the stack: keep the structured value.
        if let Some(err) = source.downcast_ref::<Error>() {
            return err.clone();
        }
        Self::from_data(ErrorData {
            message: source.to_string(),
            inner_error: source.source().map(Self::from_source),
            ..ErrorData::default()
        })
    }

    fn into_data(self) -> ErrorData {
        Arc::unwrap_or_clone(self.data)
    }

    fn modify(self, f: impl FnOnce(&mut ErrorData)) -> Self {
        let mut data = self.into_data();
        f(&mut data);
        Self::from_data(data)
    }

    /// Human-readable description, shown unless the error is sensitive.
    #[inline]
    pub fn message(&self) -> &str {
        &self.data.message
    }

    /// Short category, by default the source error's type name.
    #[inline]
    pub fn title(&self) -> &str {
        &self.data.title
    }

    /// Numeric code, e.g. an HTTP status.
    #[inline]
    pub fn error_code(&self) -> Option<i32> {
        self.data.error_code
    }

    /// Stable machine-readable tag, e.g. `user.not_found`.
    #[inline]
    pub fn identifier(&self) -> Option<&str> {
        self.data.identifier.as_deref()
    }

    /// The direct cause, if any. See [`chain`](Self::chain) for the full list.
    #[inline]
    pub fn inner_error(&self) -> Option<&Error> {
        self.data.inner_error.as_ref()
    }

    /// Open-ended key/value details.
    #[inline]
    pub fn extensions(&self) -> &Extensions {
        &self.data.extensions
    }

    /// Trace captured by the failure pipeline or supplied by the caller.
    #[inline]
    pub fn stack_trace(&self) -> Option<&str> {
        self.data.stack_trace.as_deref()
    }

    /// Sensitive errors keep their message out of `Display`, `Debug` and logs.
    #[inline]
    pub fn is_sensitive(&self) -> bool {
        self.data.is_sensitive
    }

    /// Iterates this error followed by each inner error, outermost first.
    pub fn chain(&self) -> impl Iterator<Item = &Error> {
        core::iter::successors(Some(self), |err| err.inner_error())
    }

    /// Returns the innermost error of the chain.
    pub fn root_cause(&self) -> &Error {
        let mut current = self;
        while let Some(inner) = current.inner_error() {
            current = inner;
        }
        current
    }

    /// Copy with a new message. The same shape applies to the other `with_*`
    /// and `without_*` methods: the receiver's fields are reused when it is the
    /// only handle to its data.
    pub fn with_message<S: Into<String>>(self, message: S) -> Self {
        self.modify(|d| d.message = message.into())
    }

    pub fn with_title<S: Into<String>>(self, title: S) -> Self {
        self.modify(|d| d.title = title.into())
    }

    pub fn with_error_code(self, code: i32) -> Self {
        self.modify(|d| d.error_code = Some(code))
    }

    pub fn without_error_code(self) -> Self {
        self.modify(|d| d.error_code = None)
    }

    pub fn with_identifier<S: Into<String>>(self, identifier: S) -> Self {
        self.modify(|d| d.identifier = Some(identifier.into()))
    }

    /// Replaces the inner error.
    pub fn with_inner_error(self, inner: Error) -> Self {
        self.modify(|d| d.inner_error = Some(inner))
    }

    /// Adds or replaces a single extension entry.
    pub fn with_extension<K, V>(self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.modify(|d| d.extensions.insert(key.into(), value.into()))
    }

    /// Merges `extensions` into the existing bag; incoming keys win.
    pub fn with_extensions(self, extensions: Extensions) -> Self {
        self.modify(|d| d.extensions.extend(extensions))
    }

    pub fn with_stack_trace<S: Into<String>>(self, stack_trace: S) -> Self {
        self.modify(|d| d.stack_trace = Some(stack_trace.into()))
    }

    /// Drops the trace so the next failure pipeline may capture a fresh one.
    pub fn without_stack_trace(self) -> Self {
        self.modify(|d| d.stack_trace = None)
    }

    /// Marks the error as sensitive (or not), which controls what `Display` reveals.
    pub fn with_sensitivity(self, is_sensitive: bool) -> Self {
        self.modify(|d| d.is_sensitive = is_sensitive)
    }
}

impl From<&str> for Error {
    #[inline]
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for Error {
    #[inline]
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<Box<dyn std::error::Error + Send + Sync>> for Error {
    /// Keeps a boxed [`Error`] as is; anything else goes through
    /// [`from_exception`](Error::from_exception).
    fn from(error: Box<dyn std::error::Error + Send + Sync>) -> Self {
        match error.downcast::<Error>() {
            Ok(error) => *error,
            Err(other) => Self::from_exception(&*other),
        }
    }
}

impl From<Box<dyn std::error::Error>> for Error {
    fn from(error: Box<dyn std::error::Error>) -> Self {
        match error.downcast::<Error>() {
            Ok(error) => *error,
            Err(other) => Self::from_exception(&*other),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.inner_error().map(|inner| inner as &(dyn std::error::Error + 'static))
    }
}

fn short_type_name<T: ?Sized>() -> &'static str {
    let full = core::any::type_name::<T>();
    if full.starts_with("dyn ") {
        return DEFAULT_TITLE;
    }
    // Drop generic arguments before taking the last path segment.
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
