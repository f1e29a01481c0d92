//! Convenience re-exports for common usage patterns.
//!
//! This prelude module provides the most commonly used items for quick starts.
//! Import everything with:
//!
//! ```
//! use outcome_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Types**: [`Outcome`], [`OptionalOutcome`], [`UnitOutcome`], [`Error`]
//! - **Traits**: [`ResultExt`], [`OptionExt`], [`OutcomeIterExt`]
//! - **Helpers**: [`attempt`], [`attempt_dyn`], [`attempt_optional`]
//!
//! The escape hatch ([`UnsafeAccess`](crate::escape::UnsafeAccess)) is left out
//! on purpose; import it explicitly where it is needed.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::prelude::*;
//!
//! fn parse_port(raw: &str) -> Outcome<u16> {
//!     attempt(|| raw.parse::<u16>()).ensure(|port| *port >= 1024, |port| {
//!         Error::new(format!("port {port} is privileged")).with_error_code(22)
//!     })
//! }
//!
//! assert!(parse_port("8080").is_success());
//! assert_eq!(parse_port("80").error().error_code(), Some(22));
//! ```

// Core types
pub use crate::types::{Error, OptionalOutcome, Outcome, UnitOutcome};

// Traits
pub use crate::traits::{OptionExt, ResultExt};
pub use crate::types::OutcomeIterExt;

// Boundary helpers
pub use crate::convert::{attempt, attempt_dyn, attempt_optional};
