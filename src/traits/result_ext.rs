//! Extension trait for filtering `Result` values in tail position.
//!
//! This module provides [`ResultExt`], which lets a function declare its
//! returnable errors directly on the result expression instead of through a
//! slot or a guard.
//!
//! # Examples
//!
//! ```
//! use error_fence::{BoxError, ResultExt, Sentinel};
//!
//! let not_found = Sentinel::new("user not found");
//!
//! let result: Result<u32, BoxError> = Err(not_found.clone().into());
//! let err = result.fence(&[&not_found]).unwrap_err();
//!
//! assert!(err.downcast_ref::<Sentinel>().is_some());
//! ```

use crate::traits::Matcher;
use crate::types::{BoxError, ReturnFilter};

/// Extension trait for filtering `Result` values in tail position.
///
/// Both methods are ordinary combinators: they filter the `Err` value, if
/// any, and leave `Ok` untouched. Unlike [`FilterGuard`](crate::FilterGuard)
/// they only cover the expression they are called on, so `?` exits elsewhere
/// in the function bypass them; use a guard or [`ReturnFilter::scope`] when
/// every exit path must be filtered.
///
/// # Examples
///
/// ```
/// use error_fence::{AnonymizedError, BoxError, ResultExt, Sentinel};
///
/// let declared = Sentinel::new("declared failure");
///
/// fn risky() -> Result<(), BoxError> {
///     Err("stray failure".into())
/// }
///
/// let err = risky().fence(&[&declared]).unwrap_err();
/// assert!(err.downcast_ref::<AnonymizedError>().is_some());
/// assert_eq!(err.to_string(), "stray failure");
/// ```
pub trait ResultExt<T>: Sized {
    /// Filters the error with the default policy of [`ReturnFilter::new`].
    fn fence(self, allowed: &[&dyn Matcher]) -> Self;

    /// Filters the error with an explicit filter configuration.
    ///
    /// ```
    /// use error_fence::{BoxError, ResultExt, ReturnFilter};
    ///
    /// let wrapping = ReturnFilter::passthrough()
    ///     .with_miss(|err: BoxError| format!("filtered: {err}").into());
    ///
    /// let result: Result<(), BoxError> = Err("out of disk".into());
    /// let err = result.fence_with(&wrapping, &[]).unwrap_err();
    /// assert_eq!(err.to_string(), "filtered: out of disk");
    /// ```
    fn fence_with(self, filter: &ReturnFilter, allowed: &[&dyn Matcher]) -> Self;
}

impl<T> ResultExt<T> for Result<T, BoxError> {
    #[inline]
    fn fence(self, allowed: &[&dyn Matcher]) -> Self {
        self.fence_with(&ReturnFilter::new(), allowed)
    }

    #[inline]
    fn fence_with(self, filter: &ReturnFilter, allowed: &[&dyn Matcher]) -> Self {
        self.map_err(|err| filter.check(err, allowed))
    }
}
