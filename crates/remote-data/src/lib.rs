//! # RemoteData
//!
//! The lifecycle of an asynchronously fetched value as a single sum type:
//! not asked yet, loading, failed with an error, or succeeded with data.
//!
//! Holding one `RemoteData<E, A>` instead of separate loading flags, error
//! slots and data slots means the states cannot drift out of sync. The type
//! only describes where a fetch stands; deciding when to move from one state
//! to the next is left to whoever owns the value.
//!
//! - **Constructors**: [`not_asked`], [`loading`], [`failure`], [`success`]
//! - **Predicates**: [`RemoteData::is_not_asked`] and friends
//! - **Exhaustive match**: [`RemoteData::match_with`], data-first [`match_with`],
//!   data-last [`match_on`]
//! - **Conversions**: [`to_option`], [`from_option`], [`from_either`], [`from_result`]
//!
//! # Example
//!
//! ```
//! use remote_data::prelude::*;
//!
//! let state: RemoteData<String, Vec<&str>> = RemoteData::loading();
//! let view = state.pipe(match_on(Handlers {
//!     on_not_asked: || "press fetch".to_string(),
//!     on_loading: || "spinner".to_string(),
//!     on_failure: |e: String| format!("error: {e}"),
//!     on_success: |movies: Vec<&str>| movies.join(", "),
//! }));
//! assert_eq!(view, "spinner");
//! ```

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![forbid(clippy::panic)]

pub mod convert;
pub mod error;
pub mod matcher;
pub mod prelude;
pub mod remote_data;
pub mod tag;

#[cfg(test)]
mod test_support;

// Re-export main types
pub use convert::{from_either, from_option, from_result, to_option};
pub use error::{Error, Result};
pub use matcher::{Handlers, MatchTable, MatchTableBuilder, Matcher, match_on, match_with};
pub use remote_data::{RemoteData, failure, loading, not_asked, success};
pub use tag::Tag;
