//! Extension traits bridging plain Rust types into outcomes.
//!
//! - [`ResultExt`]: `Result<T, E>` into [`Outcome`](crate::Outcome)
//! - [`OptionExt`]: `Option<T>` into [`OptionalOutcome`](crate::OptionalOutcome)
//!   or a failing [`Outcome`](crate::Outcome)
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::{OptionExt, ResultExt};
//!
//! let parsed = "12".parse::<i32>().into_outcome();
//! assert_eq!(parsed.unwrap_or(0), 12);
//!
//! let missing = None::<i32>.into_optional_outcome();
//! assert!(missing.is_none());
//! ```

pub mod result_ext;

pub use result_ext::{OptionExt, ResultExt};
