//! Outcome and error types.
//!
//! This module provides the three outcome types and the structured [`Error`]
//! they carry on failure.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{Error, OptionalOutcome, Outcome};
//!
//! fn find_user(id: u64) -> OptionalOutcome<String> {
//!     match id {
//!         0 => OptionalOutcome::fail(Error::new("id 0 is reserved").with_error_code(400)),
//!         1 => OptionalOutcome::success("ada".to_string()),
//!         _ => OptionalOutcome::none(),
//!     }
//! }
//!
//! let name: Outcome<usize> = find_user(1).require().map(|name| name.len());
//! assert_eq!(name.unwrap_or(0), 3);
//! assert!(find_user(7).is_none());
//! ```
use smallvec::SmallVec;

pub mod error;
pub mod extensions;
pub mod optional_outcome;
pub mod outcome;
pub mod sequence;
pub mod state;

pub use error::{Error, ErrorBuilder};
pub use extensions::Extensions;
pub use optional_outcome::OptionalOutcome;
pub use outcome::{Outcome, UnitOutcome};
pub use sequence::OutcomeIterExt;
pub use state::{InvalidStateAccess, OptionalOutcomeState, OutcomeState, StateKind};

/// Inline storage behind [`Extensions`]; most errors carry zero or one entry.
pub(crate) type ExtensionVec<E> = SmallVec<[E; 1]>;
