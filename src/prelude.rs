//! Convenience re-exports for common usage patterns.
//!
//! This prelude module provides the most commonly used items for quick starts.
//! Import everything with:
//!
//! ```
//! use error_fence::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`fence!`], [`sentinel!`]
//! - **Types**: [`AnonymizedError`], [`BoxError`], [`FilterGuard`],
//!   [`ReturnFilter`], [`Sentinel`], [`SentinelSet`]
//! - **Traits**: [`Matcher`], [`ResultExt`]
//! - **Operations**: [`anonymize`], [`any_of`], [`enforce`]
//!
//! # Examples
//!
//! ## 30-Second Quick Start
//!
//! ```
//! use error_fence::prelude::*;
//!
//! sentinel! {
//!     static STALE = "cache entry stale";
//! }
//!
//! fn refresh(age_secs: u64) -> FenceResult<u64> {
//!     fence!([STALE], {
//!         if age_secs > 60 {
//!             return Err(STALE.clone().into());
//!         }
//!         Ok(age_secs)
//!     })
//! }
//!
//! assert_eq!(refresh(5).unwrap(), 5);
//! assert!(refresh(120).unwrap_err().downcast_ref::<Sentinel>().is_some());
//! ```

// Macros
pub use crate::{fence, sentinel};

// Core types
pub use crate::types::{
    AnonymizedError, BoxError, DynError, FilterGuard, ReturnFilter, Sentinel, SentinelSet,
};

// Operations
pub use crate::types::{anonymize, any_of, enforce};

// Traits
#[cfg(feature = "std")]
pub use crate::traits::io_kind;
pub use crate::traits::{Matcher, ResultExt};

/// Convenient result type alias for fenced functions.
///
/// This is the recommended return type for functions that filter their
/// errors: the error side is the crate-wide [`BoxError`], so declared
/// sentinels and anonymized strays both fit without conversion.
///
/// # Examples
///
/// ```
/// use error_fence::prelude::*;
///
/// fn checked_div(a: u32, b: u32) -> FenceResult<u32> {
///     fence!([], {
///         a.checked_div(b).ok_or_else(|| "division by zero".into())
///     })
/// }
///
/// assert_eq!(checked_div(10, 2).unwrap(), 5);
/// ```
pub type FenceResult<T> = Result<T, BoxError>;
