//! The discriminant of a `RemoteData` value.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies which of the four variants a `RemoteData` value is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tag {
    NotAsked,
    Loading,
    Failure,
    Success,
}

impl Tag {
    /// Every tag, in declaration order.
    pub const ALL: [Self; 4] = [Self::NotAsked, Self::Loading, Self::Failure, Self::Success];

    /// The wire name of the tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotAsked => "NotAsked",
            Self::Loading => "Loading",
            Self::Failure => "Failure",
            Self::Success => "Success",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
