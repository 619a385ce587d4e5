//! Error types for RemoteData operations.
//!
//! Every constructor, predicate and conversion is total. The only failure is a
//! match configuration assembled at runtime that does not cover every variant.

use itertools::Itertools;
use thiserror::Error;

use crate::tag::Tag;

/// Result type alias for RemoteData operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for RemoteData operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("incomplete match configuration: no handler for {}", format_tags(.missing))]
    IncompleteMatch { missing: Vec<Tag> },
}

impl Error {
    /// Create an incomplete match error.
    pub fn incomplete_match(missing: impl IntoIterator<Item = Tag>) -> Self {
        Self::IncompleteMatch {
            missing: missing.into_iter().collect(),
        }
    }

    /// Variants left without a handler, if this is an incomplete match.
    #[must_use]
    pub fn missing(&self) -> &[Tag] {
        match self {
            Self::IncompleteMatch { missing } => missing,
        }
    }
}

fn format_tags(tags: &[Tag]) -> String {
    tags.iter().join(", ")
}
