//! Outcome types that make failure and absence explicit, composable values.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `outcome_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Chaining Outcomes
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! let out = Outcome::success(4)
//!     .map(|x| x * 2)
//!     .and_then(|x| if x > 0 { Outcome::success(format!("{x}")) } else { Outcome::fail("neg") });
//!
//! assert_eq!(out, Outcome::success("8".to_string()));
//! ```
//!
//! ## Absence Is Not Failure
//!
//! ```
//! use outcome_rail::OptionalOutcome;
//!
//! let nothing: OptionalOutcome<String> = OptionalOutcome::none();
//! let len = nothing.map(|s| s.len());
//!
//! assert!(len.is_none());
//! assert!(!len.is_fail());
//! ```
//!
//! ## Structured Errors
//!
//! ```
//! use outcome_rail::{config::StackCapture, Error, Outcome};
//!
//! let failed: Outcome<()> = Outcome::fail_with(
//!     Error::builder()
//!         .title("Storage")
//!         .message("bucket is read-only")
//!         .error_code(409)
//!         .extension("bucket", "invoices")
//!         .build(),
//!     StackCapture::Skip,
//! );
//!
//! let err = failed.error();
//! assert_eq!(err.summary(), "Storage: bucket is read-only (code: 409)");
//! assert!(err.to_string().contains("bucket: invoices"));
//! ```

/// Process-wide diagnostic configuration and the failure pipeline
pub mod config;
/// Boundary helpers turning fallible code into outcomes
pub mod convert;
/// Unchecked value/error extraction for interoperability boundaries
pub mod escape;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Extension traits for `Result` and `Option`
pub mod traits;
/// Outcome types and the structured Error
pub mod types;

/// Async combinators (requires `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

/// Async prelude - all async utilities in one import (requires `async` feature)
#[cfg(feature = "async")]
pub mod prelude_async;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use config::{DiagnosticConfig, StackCapture};
pub use traits::*;
pub use types::{
    Error, ErrorBuilder, Extensions, InvalidStateAccess, OptionalOutcome,
    OptionalOutcomeState, Outcome, OutcomeIterExt, OutcomeState, StateKind, UnitOutcome,
};
