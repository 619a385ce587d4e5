//! Exhaustive matching over `RemoteData`.
//!
//! A [`Matcher`] is a record with one handler per variant. It comes in two
//! flavours:
//!
//! - [`Handlers`]: four closures fixed at compile time. Leaving one out does
//!   not compile.
//! - [`MatchTable`]: handlers registered one by one at runtime. Building a
//!   table that misses a variant fails with [`Error::IncompleteMatch`], so a
//!   table that exists always covers every variant.
//!
//! Both can be applied data-first ([`match_with`]) or data-last ([`match_on`]).
//! Every path ends in [`RemoteData::match_with`].
//!
//! All handlers of one matcher return the same type. Callers that want a
//! different result per variant pick a common type for them, such as their
//! own enum or `either::Either`.

use std::fmt;

use crate::error::{Error, Result};
use crate::remote_data::RemoteData;
use crate::tag::Tag;

/// A configuration with one handler per `RemoteData` variant.
///
/// Exactly one method is called per dispatch, so each takes `self`.
pub trait Matcher<E, A> {
    /// The value every handler produces.
    type Output;

    fn on_not_asked(self) -> Self::Output;

    fn on_loading(self) -> Self::Output;

    fn on_failure(self, error: E) -> Self::Output;

    fn on_success(self, data: A) -> Self::Output;
}

/// Four closures, one per variant.
///
/// # Examples
///
/// ```
/// use remote_data::{Handlers, RemoteData};
///
/// let label = RemoteData::<String, u32>::loading().match_with(Handlers {
///     on_not_asked: || "not_asked",
///     on_loading: || "loading",
///     on_failure: |_| "failure",
///     on_success: |_| "success",
/// });
/// assert_eq!(label, "loading");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Handlers<N, L, F, S> {
    pub on_not_asked: N,
    pub on_loading: L,
    pub on_failure: F,
    pub on_success: S,
}

impl<E, A, R, N, L, F, S> Matcher<E, A> for Handlers<N, L, F, S>
where
    N: FnOnce() -> R,
    L: FnOnce() -> R,
    F: FnOnce(E) -> R,
    S: FnOnce(A) -> R,
{
    type Output = R;

    fn on_not_asked(self) -> R {
        (self.on_not_asked)()
    }

    fn on_loading(self) -> R {
        (self.on_loading)()
    }

    fn on_failure(self, error: E) -> R {
        (self.on_failure)(error)
    }

    fn on_success(self, data: A) -> R {
        (self.on_success)(data)
    }
}

/// Data-first matching: `match_with(value, handlers)`.
pub fn match_with<E, A, M: Matcher<E, A>>(value: RemoteData<E, A>, matcher: M) -> M::Output {
    value.match_with(matcher)
}

/// Data-last matching: `match_on(handlers)` returns a function awaiting the value.
///
/// # Examples
///
/// ```
/// use remote_data::prelude::*;
///
/// let label = RemoteData::<String, u32>::success(7).pipe(match_on(Handlers {
///     on_not_asked: || 0,
///     on_loading: || 0,
///     on_failure: |_| 0,
///     on_success: |n| n,
/// }));
/// assert_eq!(label, 7);
/// ```
pub fn match_on<E, A, M: Matcher<E, A>>(matcher: M) -> impl FnOnce(RemoteData<E, A>) -> M::Output {
    move |value| value.match_with(matcher)
}

type Thunk<'a, R> = Box<dyn FnOnce() -> R + 'a>;
type Handler<'a, T, R> = Box<dyn FnOnce(T) -> R + 'a>;

/// A complete set of boxed handlers, assembled at runtime.
pub struct MatchTable<'a, E, A, R> {
    on_not_asked: Thunk<'a, R>,
    on_loading: Thunk<'a, R>,
    on_failure: Handler<'a, E, R>,
    on_success: Handler<'a, A, R>,
}

impl<'a, E, A, R> MatchTable<'a, E, A, R> {
    /// Start registering handlers.
    #[must_use]
    pub const fn builder() -> MatchTableBuilder<'a, E, A, R> {
        MatchTableBuilder {
            on_not_asked: None,
            on_loading: None,
            on_failure: None,
            on_success: None,
        }
    }
}

impl<E, A, R> Matcher<E, A> for MatchTable<'_, E, A, R> {
    type Output = R;

    fn on_not_asked(self) -> R {
        (self.on_not_asked)()
    }

    fn on_loading(self) -> R {
        (self.on_loading)()
    }

    fn on_failure(self, error: E) -> R {
        (self.on_failure)(error)
    }

    fn on_success(self, data: A) -> R {
        (self.on_success)(data)
    }
}

impl<E, A, R> fmt::Debug for MatchTable<'_, E, A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatchTable").finish_non_exhaustive()
    }
}

/// Collects handlers for a [`MatchTable`].
///
/// Registering the same variant twice keeps the last handler.
///
/// # Examples
///
/// ```
/// use remote_data::{MatchTable, Tag};
///
/// let err = MatchTable::<String, u32, u32>::builder()
///     .on_not_asked(|| 0)
///     .on_success(|n| n)
///     .build();
/// assert_eq!(err.err().map(|e| e.missing().to_vec()), Some(vec![Tag::Loading, Tag::Failure]));
/// ```
pub struct MatchTableBuilder<'a, E, A, R> {
    on_not_asked: Option<Thunk<'a, R>>,
    on_loading: Option<Thunk<'a, R>>,
    on_failure: Option<Handler<'a, E, R>>,
    on_success: Option<Handler<'a, A, R>>,
}

impl<'a, E, A, R> MatchTableBuilder<'a, E, A, R> {
    #[must_use]
    pub fn on_not_asked(mut self, f: impl FnOnce() -> R + 'a) -> Self {
        self.on_not_asked = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn on_loading(mut self, f: impl FnOnce() -> R + 'a) -> Self {
        self.on_loading = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn on_failure(mut self, f: impl FnOnce(E) -> R + 'a) -> Self {
        self.on_failure = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn on_success(mut self, f: impl FnOnce(A) -> R + 'a) -> Self {
        self.on_success = Some(Box::new(f));
        self
    }

    /// Variants that still lack a handler, in declaration order.
    #[must_use]
    pub fn missing(&self) -> Vec<Tag> {
        let registered = [
            self.on_not_asked.is_some(),
            self.on_loading.is_some(),
            self.on_failure.is_some(),
            self.on_success.is_some(),
        ];
        Tag::ALL
            .into_iter()
            .zip(registered)
            .filter_map(|(tag, present)| (!present).then_some(tag))
            .collect()
    }

    /// Finish the table.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IncompleteMatch`] naming every variant without a handler.
    pub fn build(self) -> Result<MatchTable<'a, E, A, R>> {
        match (self.on_not_asked, self.on_loading, self.on_failure, self.on_success) {
            (Some(on_not_asked), Some(on_loading), Some(on_failure), Some(on_success)) => {
                Ok(MatchTable {
                    on_not_asked,
                    on_loading,
                    on_failure,
                    on_success,
                })
            }
            (not_asked, loading, failure, success) => {
                let err = Error::incomplete_match(
                    Tag::ALL
                        .into_iter()
                        .zip([
                            not_asked.is_none(),
                            loading.is_none(),
                            failure.is_none(),
                            success.is_none(),
                        ])
                        .filter_map(|(tag, absent)| absent.then_some(tag)),
                );
                tracing::debug!(error = %err, "rejecting match table");
                Err(err)
            }
        }
    }
}

impl<E, A, R> fmt::Debug for MatchTableBuilder<'_, E, A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatchTableBuilder")
            .field("missing", &self.missing())
            .finish()
    }
}
