//! Ergonomic macros for declaring sentinels and fencing fallible code.
//!
//! These macros cover the two declaration sites of the crate:
//!
//! - [`macro@crate::sentinel`] - Declares `static` [`Sentinel`](crate::Sentinel)s
//!   with stable identity, the crate-level counterpart of a library's public
//!   error values.
//! - [`macro@crate::fence`] - Runs a block through
//!   [`ReturnFilter::scope`](crate::ReturnFilter::scope) with the default
//!   policy, so every exit of the block, including `?`, is filtered.
//!
//! # Examples
//!
//! ```
//! use error_fence::{fence, sentinel, AnonymizedError, BoxError, Sentinel};
//!
//! sentinel! {
//!     static BAD_HANDSHAKE = "bad handshake";
//! }
//!
//! fn connect(flaky: bool) -> Result<(), BoxError> {
//!     fence!([BAD_HANDSHAKE], {
//!         if flaky {
//!             return Err(BAD_HANDSHAKE.clone().into());
//!         }
//!         Err("socket poisoned".into())
//!     })
//! }
//!
//! let declared = connect(true).unwrap_err();
//! assert!(declared.downcast_ref::<Sentinel>().is_some_and(|s| s.same(&BAD_HANDSHAKE)));
//!
//! let stray = connect(false).unwrap_err();
//! assert!(stray.downcast_ref::<AnonymizedError>().is_some());
//! assert_eq!(stray.to_string(), "socket poisoned");
//! ```

/// Declares `static` [`Sentinel`](crate::Sentinel)s with stable identity.
///
/// Each declaration expands to a `static` sentinel backed by a hidden
/// `static` [`SentinelData`](crate::types::sentinel::SentinelData), so the
/// identity is fixed at compile time and every clone taken anywhere in the
/// program recognizes it.
///
/// # Syntax
///
/// One or more declarations of the form `[vis] static NAME = "message";`,
/// each optionally preceded by attributes and doc comments.
///
/// # Examples
///
/// ```
/// use error_fence::sentinel;
///
/// mod store {
///     use error_fence::sentinel;
///
///     sentinel! {
///         /// Returned when the requested row does not exist.
///         pub static NOT_FOUND = "row not found";
///     }
/// }
///
/// sentinel! {
///     static INTERNAL = "internal failure";
/// }
///
/// assert!(store::NOT_FOUND.same(&store::NOT_FOUND.clone()));
/// assert!(!store::NOT_FOUND.same(&INTERNAL));
/// assert_eq!(store::NOT_FOUND.to_string(), "row not found");
/// ```
#[macro_export]
macro_rules! sentinel {
    ($($(#[$meta:meta])* $vis:vis static $name:ident = $message:expr;)+) => {
        $(
            $(#[$meta])*
            $vis static $name: $crate::Sentinel = {
                static __DATA: $crate::types::sentinel::SentinelData =
                    $crate::types::sentinel::SentinelData::from_static($message);
                $crate::Sentinel::from_static(&__DATA)
            };
        )+
    };
}

/// Fences a fallible block with the default filter policy.
///
/// Expands to [`ReturnFilter::new`](crate::ReturnFilter::new) followed by
/// [`scope`](crate::ReturnFilter::scope): the body runs as a closure, and
/// any error it produces is checked against the listed matchers, with misses
/// anonymized. Early `return`s and `?` inside the body exit the fenced block,
/// not the surrounding function, and are filtered on the way out.
///
/// # Syntax
///
/// `fence!([matcher, ...], body)` where each matcher is a value implementing
/// [`Matcher`](crate::Matcher) (a sentinel, a set, a closure) and `body` is
/// an expression or block producing `Result<T, BoxError>`.
///
/// # Examples
///
/// ```
/// use error_fence::{fence, sentinel, BoxError, Sentinel};
///
/// sentinel! {
///     static EMPTY = "queue empty";
/// }
///
/// fn pop(len: usize) -> Result<usize, BoxError> {
///     fence!([EMPTY], {
///         if len == 0 {
///             return Err(EMPTY.clone().into());
///         }
///         Ok(len - 1)
///     })
/// }
///
/// assert_eq!(pop(3).unwrap(), 2);
/// assert!(pop(0).unwrap_err().downcast_ref::<Sentinel>().is_some());
/// ```
#[macro_export]
macro_rules! fence {
    ([$($matcher:expr),* $(,)?], $body:expr $(,)?) => {
        $crate::ReturnFilter::new().scope(&[$(&$matcher),*], || $body)
    };
}
