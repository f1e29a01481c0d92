//! Human-readable rendering of [`Error`].
//!
//! The default form is a multi-line dump of every field, with inner errors
//! indented one level per hop. Sensitive errors only ever render their title,
//! code and identifier, in both `Display` and `Debug`.

use core::fmt::{self, Display, Write};

use serde_json::Value;

use super::Error;

const INDENT: &str = "  ";

impl Error {
    fn write_block(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let pad = INDENT.repeat(depth);

        writeln!(f, "{pad}Title: {}", self.title())?;
        if !self.is_sensitive() {
            writeln!(f, "{pad}Message: {}", self.message())?;
        }
        if let Some(code) = self.error_code() {
            writeln!(f, "{pad}ErrorCode: {code}")?;
        }
        if let Some(identifier) = self.identifier() {
            writeln!(f, "{pad}Identifier: {identifier}")?;
        }
        if self.is_sensitive() {
            return Ok(());
        }

        if !self.extensions().is_empty() {
            writeln!(f, "{pad}Extensions:")?;
            for (key, value) in self.extensions().iter() {
                writeln!(f, "{pad}{INDENT}{key}: {}", DisplayValue(value))?;
            }
        }
        if let Some(trace) = self.stack_trace() {
            writeln!(f, "{pad}StackTrace:")?;
            for line in trace.lines() {
                writeln!(f, "{pad}{INDENT}{line}")?;
            }
        }
        if let Some(inner) = self.inner_error() {
            writeln!(f, "{pad}InnerError:")?;
            inner.write_block(f, depth + 1)?;
        }
        Ok(())
    }

    fn write_summary(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())?;
        if !self.is_sensitive() {
            write!(f, ": {}", self.message())?;
        }
        if let Some(code) = self.error_code() {
            write!(f, " (code: {code})")?;
        }
        Ok(())
    }

    /// Renders the one-line `title: message (code: N)` summary.
    ///
    /// Same as formatting with `{:#}`.
    pub fn summary(&self) -> String {
        let mut out = String::new();
        let _ = write!(out, "{self:#}");
        out
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            self.write_summary(f)
        } else {
            self.write_block(f, 0)
        }
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Error");
        s.field("title", &self.title());
        if !self.is_sensitive() {
            s.field("message", &self.message());
        }
        s.field("error_code", &self.error_code())
            .field("identifier", &self.identifier());
        if !self.is_sensitive() {
            s.field("extensions", self.extensions())
                .field("has_stack_trace", &self.stack_trace().is_some())
                .field("inner_error", &self.inner_error());
        }
        s.field("is_sensitive", &self.is_sensitive()).finish()
    }
}

struct DisplayValue<'a>(&'a Value);

impl Display for DisplayValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Value::String(s) => f.write_str(s),
            other => write!(f, "{other}"),
        }
    }
}
