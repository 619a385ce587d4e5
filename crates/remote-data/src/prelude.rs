//! Prelude module - common imports for working with `RemoteData`
//!
//! ```rust
//! use remote_data::prelude::*;
//! ```

// Re-export functional utilities
pub use tap::{Pipe, Tap};

// Re-export the core type and its matchers
pub use crate::matcher::{Handlers, MatchTable, Matcher, match_on, match_with};
pub use crate::remote_data::RemoteData;
pub use crate::tag::Tag;
