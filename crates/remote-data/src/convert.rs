//! Conversions between `RemoteData` and the optional / result-or-error types.
//!
//! Going to `Option` forgets why there is no value: `NotAsked`, `Loading` and
//! `Failure` all become `None`, and coming back from `None` always yields
//! `NotAsked`.
//!
//! The `from_*` functions are plain function values, so data-last use is just
//! passing them along:
//!
//! ```
//! use remote_data::prelude::*;
//!
//! let fetched: RemoteData<String, u32> = Some(3).pipe(RemoteData::from_option);
//! assert_eq!(fetched, RemoteData::success(3));
//! ```

use either::Either;

use crate::matcher::Handlers;
use crate::remote_data::RemoteData;

impl<E, A> RemoteData<E, A> {
    /// `Some(data)` for a `Success`, `None` for everything else.
    #[must_use]
    #[allow(clippy::wrong_self_convention)]
    pub fn to_option(self) -> Option<A> {
        self.match_with(Handlers {
            on_not_asked: || None,
            on_loading: || None,
            on_failure: |_| None,
            on_success: Some,
        })
    }

    /// `None` becomes `NotAsked`, `Some(data)` becomes `Success`.
    #[must_use]
    pub fn from_option(option: Option<A>) -> Self {
        option.map_or(Self::NotAsked, Self::success)
    }

    /// `Left(error)` becomes `Failure`, `Right(data)` becomes `Success`.
    #[must_use]
    pub fn from_either(either: Either<E, A>) -> Self {
        either.either(Self::failure, Self::success)
    }

    /// `Err(error)` becomes `Failure`, `Ok(data)` becomes `Success`.
    #[must_use]
    pub fn from_result(result: Result<A, E>) -> Self {
        result.map_or_else(Self::failure, Self::success)
    }
}

impl<E, A> From<Option<A>> for RemoteData<E, A> {
    fn from(option: Option<A>) -> Self {
        Self::from_option(option)
    }
}

impl<E, A> From<Either<E, A>> for RemoteData<E, A> {
    fn from(either: Either<E, A>) -> Self {
        Self::from_either(either)
    }
}

impl<E, A> From<Result<A, E>> for RemoteData<E, A> {
    fn from(result: Result<A, E>) -> Self {
        Self::from_result(result)
    }
}

/// Free-function form of [`RemoteData::to_option`].
#[must_use]
pub fn to_option<E, A>(value: RemoteData<E, A>) -> Option<A> {
    value.to_option()
}

/// Free-function form of [`RemoteData::from_option`].
#[must_use]
pub fn from_option<E, A>(option: Option<A>) -> RemoteData<E, A> {
    RemoteData::from_option(option)
}

/// Free-function form of [`RemoteData::from_either`].
#[must_use]
pub fn from_either<E, A>(either: Either<E, A>) -> RemoteData<E, A> {
    RemoteData::from_either(either)
}

/// Free-function form of [`RemoteData::from_result`].
#[must_use]
pub fn from_result<E, A>(result: Result<A, E>) -> RemoteData<E, A> {
    RemoteData::from_result(result)
}

#[cfg(test)]
mod tests {
    use tap::Pipe;

    use super::*;

    type Rd = RemoteData<&'static str, &'static str>;

    #[test]
    fn test_to_option_keeps_only_success() {
        assert_eq!(Rd::not_asked().pipe(to_option), None);
        assert_eq!(Rd::loading().pipe(to_option), None);
        assert_eq!(Rd::failure("bad").pipe(to_option), None);
        assert_eq!(Rd::success("good").pipe(to_option), Some("good"));
    }

    #[test]
    fn test_failure_payload_never_reaches_the_log() {
        let logs = crate::test_support::capture_logs(|| {
            let dropped = RemoteData::<&str, u8>::failure("secret-token-123").to_option();
            assert_eq!(dropped, None);
            let chained = RemoteData::<&str, u8>::failure("secret-token-123").map(u16::from);
            assert_eq!(chained.to_option(), None);
        });
        assert!(!logs.contains("secret-token-123"), "{logs}");
    }

    #[test]
    fn test_from_option_data_last_and_data_first() {
        assert_eq!(None.pipe(from_option), Rd::not_asked());
        assert_eq!(Rd::from_option(None), Rd::not_asked());
        assert_eq!(Some("good").pipe(Rd::from_option), Rd::success("good"));
        assert_eq!(from_option(Some("good")), Rd::success("good"));
    }

    #[test]
    fn test_from_either_maps_left_to_failure() {
        assert_eq!(Either::Left("bad").pipe(Rd::from_either), Rd::failure("bad"));
        assert_eq!(from_either(Either::Right("good")), Rd::success("good"));
        assert_eq!(Rd::from(Either::Left("bad")), Rd::failure("bad"));
    }

    #[test]
    fn test_from_result_maps_err_to_failure() {
        assert_eq!(Err("bad").pipe(Rd::from_result), Rd::failure("bad"));
        assert_eq!(Rd::from(Ok("good")), Rd::success("good"));
        assert_eq!(from_result::<&str, &str>(Ok("good")), Rd::success("good"));
    }

    #[test]
    fn test_round_trip_through_option_loses_pending_and_failure() {
        assert_eq!(Rd::success("good").to_option().pipe(Rd::from_option), Rd::success("good"));
        for lossy in [Rd::not_asked(), Rd::loading(), Rd::failure("bad")] {
            assert_eq!(lossy.to_option().pipe(Rd::from_option), Rd::not_asked());
        }
    }
}
