//! Async extensions for outcome-rail.
//!
//! This module provides async forms of every combinator, keeping the same
//! short-circuit semantics as the sync counterparts: a transform is only
//! awaited when the sync form would have called it.
//!
//! # Feature Flag
//!
//! Requires the `async` feature to be enabled:
//!
//! ```toml
//! [dependencies]
//! outcome-rail = { version = "0.1", features = ["async"] }
//! ```
//!
//! # Examples
//!
//! ```ignore
//! use outcome_rail::prelude_async::*;
//!
//! async fn load_profile(id: u64) -> Outcome<Profile> {
//!     fetch_user(id)
//!         .and_then_async(|user| fetch_profile(user.profile_id))
//!         .on_fail(|err| eprintln!("{err:#}"))
//!         .await
//! }
//! ```

mod future_ext;
mod map_future;
mod outcome_async;

pub use future_ext::{FutureOptionalOutcomeExt, FutureOutcomeExt};
pub use map_future::MapOutcome;
