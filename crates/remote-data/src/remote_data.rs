//! The `RemoteData<E, A>` sum type.
//!
//! A value is exactly one of four variants: the fetch has not been asked for,
//! it is in flight, it failed with an `E`, or it succeeded with an `A`. Values
//! are immutable; moving to another state means building a new value.

use serde::{Deserialize, Serialize};

use crate::matcher::Matcher;
use crate::tag::Tag;

/// The lifecycle of an asynchronously fetched value.
///
/// Serialized with an internal `tag` field, so a failure looks like
/// `{"tag":"Failure","error":...}` and a success like `{"tag":"Success","data":...}`.
///
/// # Examples
///
/// ```
/// use remote_data::RemoteData;
///
/// let movies: RemoteData<String, Vec<&str>> = RemoteData::success(vec!["Inception"]);
/// assert!(movies.is_success());
/// assert_eq!(movies.data().map(Vec::len), Some(1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "tag")]
pub enum RemoteData<E, A> {
    /// The fetch has not been initiated.
    NotAsked,
    /// The fetch is in progress.
    Loading,
    /// The fetch completed with an error.
    Failure { error: E },
    /// The fetch completed with a value.
    Success { data: A },
}

impl<E, A> Default for RemoteData<E, A> {
    fn default() -> Self {
        Self::NotAsked
    }
}

impl<E, A> RemoteData<E, A> {
    /// Create a `NotAsked` value.
    #[must_use]
    pub const fn not_asked() -> Self {
        Self::NotAsked
    }

    /// Create a `Loading` value.
    #[must_use]
    pub const fn loading() -> Self {
        Self::Loading
    }

    /// Create a `Failure` holding `error` as given.
    #[must_use]
    pub const fn failure(error: E) -> Self {
        Self::Failure { error }
    }

    /// Create a `Success` holding `data` as given.
    #[must_use]
    pub const fn success(data: A) -> Self {
        Self::Success { data }
    }

    /// The discriminant of this value.
    #[must_use]
    pub const fn tag(&self) -> Tag {
        match self {
            Self::NotAsked => Tag::NotAsked,
            Self::Loading => Tag::Loading,
            Self::Failure { .. } => Tag::Failure,
            Self::Success { .. } => Tag::Success,
        }
    }

    #[must_use]
    pub const fn is_not_asked(&self) -> bool {
        matches!(self, Self::NotAsked)
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure { .. })
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Dispatch to exactly one handler of `matcher` and return its result.
    ///
    /// This is the only place the variants are eliminated; every other
    /// combinator in the crate goes through it.
    ///
    /// # Examples
    ///
    /// ```
    /// use remote_data::{Handlers, RemoteData};
    ///
    /// let len = RemoteData::<&str, i32>::failure("Internal Server Error").match_with(Handlers {
    ///     on_not_asked: || 0,
    ///     on_loading: || 1,
    ///     on_failure: |e: &str| e.len(),
    ///     on_success: |_| 2,
    /// });
    /// assert_eq!(len, 21);
    /// ```
    pub fn match_with<M: Matcher<E, A>>(self, matcher: M) -> M::Output {
        match self {
            Self::NotAsked => matcher.on_not_asked(),
            Self::Loading => matcher.on_loading(),
            Self::Failure { error } => matcher.on_failure(error),
            Self::Success { data } => matcher.on_success(data),
        }
    }

    /// Borrow the payload, keeping the variant.
    #[must_use]
    pub const fn as_ref(&self) -> RemoteData<&E, &A> {
        match self {
            Self::NotAsked => RemoteData::NotAsked,
            Self::Loading => RemoteData::Loading,
            Self::Failure { error } => RemoteData::Failure { error },
            Self::Success { data } => RemoteData::Success { data },
        }
    }

    /// The error, if this is a `Failure`.
    #[must_use]
    pub const fn error(&self) -> Option<&E> {
        match self {
            Self::Failure { error } => Some(error),
            _ => None,
        }
    }

    /// The data, if this is a `Success`.
    #[must_use]
    pub const fn data(&self) -> Option<&A> {
        match self {
            Self::Success { data } => Some(data),
            _ => None,
        }
    }

    #[must_use]
    pub fn into_error(self) -> Option<E> {
        match self {
            Self::Failure { error } => Some(error),
            _ => None,
        }
    }

    #[must_use]
    pub fn into_data(self) -> Option<A> {
        match self {
            Self::Success { data } => Some(data),
            _ => None,
        }
    }

    /// Map over the `Success` data.
    #[must_use]
    pub fn map<B, F: FnOnce(A) -> B>(self, f: F) -> RemoteData<E, B> {
        self.bimap(|e| e, f)
    }

    /// Map over the `Failure` error.
    #[must_use]
    pub fn map_error<E2, F: FnOnce(E) -> E2>(self, f: F) -> RemoteData<E2, A> {
        self.bimap(f, |a| a)
    }

    /// Map both payloads in a single pass.
    #[must_use]
    pub fn bimap<E2, B, EF, F>(self, err_fn: EF, data_fn: F) -> RemoteData<E2, B>
    where
        EF: FnOnce(E) -> E2,
        F: FnOnce(A) -> B,
    {
        match self {
            Self::NotAsked => RemoteData::NotAsked,
            Self::Loading => RemoteData::Loading,
            Self::Failure { error } => RemoteData::Failure { error: err_fn(error) },
            Self::Success { data } => RemoteData::Success { data: data_fn(data) },
        }
    }

    /// Chain a dependent fetch state off the `Success` data.
    #[must_use]
    pub fn and_then<B, F: FnOnce(A) -> RemoteData<E, B>>(self, f: F) -> RemoteData<E, B> {
        match self {
            Self::NotAsked => RemoteData::NotAsked,
            Self::Loading => RemoteData::Loading,
            Self::Failure { error } => RemoteData::Failure { error },
            Self::Success { data } => f(data),
        }
    }

    /// The data, or `default` for every other variant.
    #[must_use]
    pub fn data_or(self, default: A) -> A {
        self.into_data().unwrap_or(default)
    }

    /// The data, or the result of `f` for every other variant.
    #[must_use]
    pub fn data_or_else<F: FnOnce() -> A>(self, f: F) -> A {
        self.into_data().unwrap_or_else(f)
    }
}

/// Create a `NotAsked` value.
#[must_use]
pub const fn not_asked<E, A>() -> RemoteData<E, A> {
    RemoteData::not_asked()
}

/// Create a `Loading` value.
#[must_use]
pub const fn loading<E, A>() -> RemoteData<E, A> {
    RemoteData::loading()
}

/// Create a `Failure` value.
#[must_use]
pub const fn failure<E, A>(error: E) -> RemoteData<E, A> {
    RemoteData::failure(error)
}

/// Create a `Success` value.
#[must_use]
pub const fn success<E, A>(data: A) -> RemoteData<E, A> {
    RemoteData::success(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    type Rd = RemoteData<String, i32>;

    fn all_variants() -> [Rd; 4] {
        [
            Rd::not_asked(),
            Rd::loading(),
            Rd::failure("bad".to_string()),
            Rd::success(42),
        ]
    }

    #[test]
    fn test_constructors_produce_their_variant() {
        assert_eq!(not_asked::<String, i32>(), Rd::NotAsked);
        assert_eq!(loading::<String, i32>(), Rd::Loading);
        assert_eq!(
            failure::<_, i32>("Internal Server Error".to_string()),
            Rd::Failure {
                error: "Internal Server Error".to_string()
            }
        );
        assert_eq!(success::<String, _>(vec!["Inception"]).into_data(), Some(vec!["Inception"]));
    }

    #[test]
    fn test_default_is_not_asked() {
        assert!(Rd::default().is_not_asked());
    }

    #[test]
    fn test_exactly_one_predicate_holds() {
        for value in all_variants() {
            let hits = [
                value.is_not_asked(),
                value.is_loading(),
                value.is_failure(),
                value.is_success(),
            ]
            .into_iter()
            .filter(|hit| *hit)
            .count();
            assert_eq!(hits, 1, "{value:?}");
        }
    }

    #[test]
    fn test_tag_follows_variant() {
        let tags = all_variants().map(|v| v.tag());
        assert_eq!(tags, Tag::ALL);
    }

    #[test]
    fn test_accessors_narrow_to_payload() {
        let failed = Rd::failure("bad".to_string());
        assert!(failed.is_failure());
        assert_eq!(failed.error().map(String::as_str), Some("bad"));
        assert_eq!(failed.data(), None);

        let done = Rd::success(7);
        assert_eq!(done.data(), Some(&7));
        assert_eq!(done.error(), None);
        assert_eq!(done.into_error(), None);
    }

    #[test]
    fn test_map_only_touches_success() {
        assert_eq!(Rd::success(21).map(|n| n.saturating_mul(2)), Rd::success(42));
        assert_eq!(Rd::loading().map(|n| n.saturating_mul(2)), Rd::loading());
        assert_eq!(
            Rd::failure("bad".to_string()).map(|n| n.saturating_mul(2)),
            Rd::failure("bad".to_string())
        );
    }

    #[test]
    fn test_map_error_only_touches_failure() {
        let mapped: RemoteData<usize, i32> =
            Rd::failure("hello".to_string()).map_error(|e| e.len());
        assert_eq!(mapped, RemoteData::failure(5));
        let untouched: RemoteData<usize, i32> = Rd::success(1).map_error(|e| e.len());
        assert_eq!(untouched, RemoteData::success(1));
    }

    #[test]
    fn test_and_then_chains_from_success() {
        let chained = Rd::success(2).and_then(|n| {
            if n > 1 {
                Rd::success(n.saturating_mul(10))
            } else {
                Rd::loading()
            }
        });
        assert_eq!(chained, Rd::success(20));
        assert_eq!(Rd::not_asked().and_then(Rd::success), Rd::not_asked());
        assert_eq!(Rd::success(1).and_then(|_| Rd::loading()), Rd::loading());
    }

    #[test]
    fn test_data_or_falls_back_for_non_success() {
        assert_eq!(Rd::success(3).data_or(0), 3);
        assert_eq!(Rd::loading().data_or(0), 0);
        assert_eq!(Rd::failure("bad".to_string()).data_or_else(|| -1), -1);
    }

    #[test]
    fn test_as_ref_keeps_variant() {
        let value = Rd::failure("bad".to_string());
        assert_eq!(value.as_ref().tag(), Tag::Failure);
        assert_eq!(value.as_ref().into_error().map(String::len), Some(3));
    }
}
