//! Predicates that decide whether an error was declared.

use crate::types::DynError;

/// A predicate over dynamic errors.
///
/// Matchers are the vocabulary of a declaration: each one accepts some set
/// of errors, and an error accepted by any matcher at a boundary counts as
/// declared. [`Sentinel`](crate::Sentinel) and
/// [`SentinelSet`](crate::SentinelSet) implement this by identity; closures
/// implement it structurally.
///
/// Any `Fn(&DynError) -> bool` is a matcher, so ad-hoc predicates need no
/// wrapper type:
///
/// ```
/// use error_fence::{enforce, BoxError, DynError};
///
/// let parse_errors = |err: &DynError| err.is::<core::num::ParseIntError>();
///
/// let mut slot: Option<BoxError> = Some("abc".parse::<u32>().unwrap_err().into());
/// enforce(&mut slot, &[&parse_errors]);
///
/// // Declared, so the concrete type survived.
/// assert!(slot.unwrap().is::<core::num::ParseIntError>());
/// ```
pub trait Matcher {
    /// Whether `err` belongs to the set this matcher declares.
    fn matches(&self, err: &DynError) -> bool;
}

impl<F> Matcher for F
where
    F: Fn(&DynError) -> bool,
{
    #[inline]
    fn matches(&self, err: &DynError) -> bool {
        self(err)
    }
}

/// Matches any [`std::io::Error`] of the given kind.
///
/// The returned matcher downcasts and compares kinds, so it accepts every
/// I/O error of that kind regardless of where it was constructed.
///
/// # Examples
///
/// ```
/// use error_fence::{io_kind, BoxError, ReturnFilter};
/// use std::io::{self, ErrorKind};
///
/// let missing = io_kind(ErrorKind::NotFound);
///
/// let err: BoxError = io::Error::new(ErrorKind::NotFound, "no such table").into();
/// let kept = ReturnFilter::new().check(err, &[&missing]);
/// assert!(kept.downcast_ref::<io::Error>().is_some());
/// ```
#[cfg(feature = "std")]
pub fn io_kind(kind: std::io::ErrorKind) -> impl Matcher {
    move |err: &DynError| {
        err.downcast_ref::<std::io::Error>()
            .is_some_and(|io| io.kind() == kind)
    }
}
