//! Sentinel errors with stable identity.
//!
//! A [`Sentinel`] is a pre-allocated error value whose identity, not its
//! message, is what callers are allowed to depend on. Functions declare the
//! sentinels they return; the return filter lets those through untouched and
//! anonymizes everything else.
//!
//! Two sentinels are the same error only when they share a backing
//! allocation. Cloning preserves identity; constructing a second sentinel
//! with an equal message does not.
//!
//! # Examples
//!
//! ```
//! use error_fence::Sentinel;
//!
//! let missing = Sentinel::new("record missing");
//! let copy = missing.clone();
//! let lookalike = Sentinel::new("record missing");
//!
//! assert!(copy.same(&missing));
//! assert!(!lookalike.same(&missing));
//! ```

use crate::traits::Matcher;
use crate::types::alloc_type::{Arc, Cow, String};
use crate::types::{DynError, SentinelVec};
use core::fmt::{self, Debug, Display};
use core::ptr;

/// Backing storage for a [`Sentinel`].
///
/// The address of a `SentinelData` value is the sentinel's identity. The
/// [`sentinel!`](crate::sentinel) macro places one value in a hidden `static`
/// per declaration; [`Sentinel::new`] allocates one behind an `Arc`.
pub struct SentinelData {
    message: Cow<'static, str>,
}

impl SentinelData {
    /// Creates backing data from a static message.
    ///
    /// `const`, so the result can live in a `static` item. Prefer the
    /// [`sentinel!`](crate::sentinel) macro over calling this directly.
    #[must_use]
    pub const fn from_static(message: &'static str) -> Self {
        Self { message: Cow::Borrowed(message) }
    }

    fn new(message: String) -> Self {
        Self { message: Cow::Owned(message) }
    }

    /// Returns the sentinel's message text.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[derive(Clone)]
enum Repr {
    Static(&'static SentinelData),
    Shared(Arc<SentinelData>),
}

/// A pre-allocated error value distinguished by identity rather than message.
///
/// Sentinels are the declared vocabulary of a function's failure modes, the
/// counterpart of a package-level error constant. They implement
/// [`core::error::Error`], so a sentinel travels as an ordinary boxed error,
/// and they implement [`Matcher`] directly: passing `&MY_SENTINEL` to a
/// filter declares that exact error as allowed.
///
/// Identity survives cloning and boxing, but not wrapping: an error that
/// merely contains a sentinel as its source is a different value and will not
/// match.
///
/// # Examples
///
/// ```
/// use error_fence::{enforce, BoxError, Sentinel};
///
/// let timeout = Sentinel::new("upstream timed out");
///
/// let mut slot: Option<BoxError> = Some(timeout.clone().into());
/// enforce(&mut slot, &[&timeout]);
///
/// let kept = slot.unwrap();
/// assert!(kept.downcast_ref::<Sentinel>().unwrap().same(&timeout));
/// ```
#[must_use]
#[derive(Clone)]
pub struct Sentinel {
    repr: Repr,
}

impl Sentinel {
    /// Creates a sentinel with a fresh identity.
    ///
    /// Every call allocates new backing data, so two sentinels built from the
    /// same message are still distinct errors. Keep the returned value (or
    /// clones of it) anywhere the identity must be recognized later.
    pub fn new(message: impl Into<String>) -> Self {
        Self { repr: Repr::Shared(Arc::new(SentinelData::new(message.into()))) }
    }

    /// Wraps statically-allocated backing data.
    ///
    /// This is the `const` construction path used by the
    /// [`sentinel!`](crate::sentinel) macro; the `static` holding `data`
    /// provides the identity.
    pub const fn from_static(data: &'static SentinelData) -> Self {
        Self { repr: Repr::Static(data) }
    }

    /// Returns the message text.
    #[inline]
    pub fn message(&self) -> &str {
        self.data().message()
    }

    /// Returns `true` when `other` shares this sentinel's backing allocation.
    ///
    /// This is identity comparison, never message comparison.
    #[inline]
    #[must_use]
    pub fn same(&self, other: &Self) -> bool {
        ptr::eq(self.data(), other.data())
    }

    fn data(&self) -> &SentinelData {
        match &self.repr {
            Repr::Static(data) => data,
            Repr::Shared(data) => data,
        }
    }
}

impl PartialEq for Sentinel {
    /// Identity equality; see [`Sentinel::same`].
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.same(other)
    }
}

impl Eq for Sentinel {}

impl Debug for Sentinel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sentinel")
            .field("message", &self.message())
            .finish_non_exhaustive()
    }
}

impl Display for Sentinel {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl core::error::Error for Sentinel {}

impl Matcher for Sentinel {
    /// Matches errors that are this sentinel, by identity.
    #[inline]
    fn matches(&self, err: &DynError) -> bool {
        err.downcast_ref::<Self>().is_some_and(|candidate| candidate.same(self))
    }
}

/// Set-membership matcher over a fixed group of sentinels.
///
/// Built with [`any_of`] or collected from an iterator of sentinels. The
/// order of the set never affects the result, and an empty set matches
/// nothing.
#[derive(Clone, Debug)]
pub struct SentinelSet {
    sentinels: SentinelVec,
}

impl FromIterator<Sentinel> for SentinelSet {
    fn from_iter<I: IntoIterator<Item = Sentinel>>(iter: I) -> Self {
        Self { sentinels: iter.into_iter().collect() }
    }
}

impl Matcher for SentinelSet {
    fn matches(&self, err: &DynError) -> bool {
        err.downcast_ref::<Sentinel>()
            .is_some_and(|candidate| self.sentinels.iter().any(|s| s.same(candidate)))
    }
}

/// Builds a matcher that accepts any of the given sentinels.
///
/// Membership is tested by identity. With zero sentinels the returned matcher
/// never accepts anything.
///
/// # Examples
///
/// ```
/// use error_fence::{any_of, enforce, BoxError, Sentinel};
///
/// let closed = Sentinel::new("stream closed");
/// let reset = Sentinel::new("stream reset");
/// let declared = any_of([&closed, &reset]);
///
/// let mut slot: Option<BoxError> = Some(reset.clone().into());
/// enforce(&mut slot, &[&declared]);
/// assert!(slot.unwrap().downcast_ref::<Sentinel>().is_some());
/// ```
pub fn any_of<'a, I>(sentinels: I) -> SentinelSet
where
    I: IntoIterator<Item = &'a Sentinel>,
{
    sentinels.into_iter().cloned().collect()
}
