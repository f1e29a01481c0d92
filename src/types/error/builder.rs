use serde_json::Value;

use super::{Error, ErrorData};
use crate::types::Extensions;

/// Builder for [`Error`] where every field is optional.
///
/// Unset fields fall back to the same defaults as [`Error::default`].
#[must_use]
#[derive(Debug, Clone, Default)]
pub struct ErrorBuilder {
    data: ErrorData,
}

impl ErrorBuilder {
    /// Sets the message.
    pub fn message<S: Into<String>>(mut self, message: S) -> Self {
        self.data.message = message.into();
        self
    }

    /// Sets the title.
    pub fn title<S: Into<String>>(mut self, title: S) -> Self {
        self.data.title = title.into();
        self
    }

    /// Sets the numeric code.
    pub fn error_code(mut self, code: i32) -> Self {
        self.data.error_code = Some(code);
        self
    }

    /// Sets the machine-readable identifier.
    pub fn identifier<S: Into<String>>(mut self, identifier: S) -> Self {
        self.data.identifier = Some(identifier.into());
        self
    }

    /// Sets the wrapped cause.
    pub fn inner_error(mut self, inner: Error) -> Self {
        self.data.inner_error = Some(inner);
        self
    }

    /// Adds or replaces one extension entry.
    pub fn extension<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.data.extensions.insert(key.into(), value.into());
        self
    }

    /// Merges a whole bag; incoming keys win.
    pub fn extensions(mut self, extensions: Extensions) -> Self {
        self.data.extensions.extend(extensions);
        self
    }

    /// Supplies a trace the failure pipeline will not overwrite.
    pub fn stack_trace<S: Into<String>>(mut self, stack_trace: S) -> Self {
        self.data.stack_trace = Some(stack_trace.into());
        self
    }

    /// Marks the error as sensitive.
    pub fn sensitive(mut self, is_sensitive: bool) -> Self {
        self.data.is_sensitive = is_sensitive;
        self
    }

    /// Freezes the collected fields into an [`Error`].
    #[inline]
    pub fn build(self) -> Error {
        Error::from_data(self.data)
    }
}
