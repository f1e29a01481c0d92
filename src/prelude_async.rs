//! Async prelude - all async utilities in one import.
//!
//! This module re-exports everything from the sync [`prelude`](crate::prelude)
//! plus the async extension traits.
//!
//! # Usage
//!
//! ```ignore
//! use outcome_rail::prelude_async::*;
//!
//! async fn load(id: u64) -> Outcome<Profile> {
//!     fetch_user(id)
//!         .and_then_async(|user| fetch_profile(user.profile_id))
//!         .await
//! }
//! ```
//!
//! # What's Included
//!
//! ## From Sync Prelude
//!
//! - **Types**: [`Outcome`], [`OptionalOutcome`], [`UnitOutcome`], [`Error`]
//! - **Traits**: [`ResultExt`], [`OptionExt`], [`OutcomeIterExt`]
//!
//! ## Async-Specific
//!
//! - **Traits**: [`FutureOutcomeExt`](crate::async_ext::FutureOutcomeExt),
//!   [`FutureOptionalOutcomeExt`](crate::async_ext::FutureOptionalOutcomeExt)
//! - **Types**: [`MapOutcome`](crate::async_ext::MapOutcome)

// Re-export everything from sync prelude
pub use crate::prelude::*;

// Async-specific exports
pub use crate::async_ext::{FutureOptionalOutcomeExt, FutureOutcomeExt, MapOutcome};
