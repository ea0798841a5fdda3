//! Error declaration and filtering types.
//!
//! This module provides the building blocks for declaring which errors a
//! function may return and for enforcing that declaration at the boundary.
//! Declarations are made with sentinels and enforced by filters; undeclared
//! failures collapse into [`AnonymizedError`].
//!
//! # Examples
//!
//! ```
//! use error_fence::{enforce, AnonymizedError, BoxError, Sentinel};
//!
//! let timeout = Sentinel::new("deadline exceeded");
//! let mut slot: Option<BoxError> = Some("connection reset".into());
//!
//! enforce(&mut slot, &[&timeout]);
//!
//! // Undeclared, so only the message survived.
//! let err = slot.unwrap();
//! assert!(err.downcast_ref::<AnonymizedError>().is_some());
//! assert_eq!(err.to_string(), "connection reset");
//! ```
use smallvec::SmallVec;

use crate::traits::Matcher;

pub(crate) mod alloc_type;
pub mod anonymized;
pub mod guard;
pub mod return_filter;
pub mod sentinel;

pub use anonymized::*;
pub use guard::*;
pub use return_filter::*;
pub use sentinel::*;

/// Dynamic error object shared across the crate.
///
/// `Send + Sync + 'static` so filtered errors can cross thread and task
/// boundaries like any other boxed error.
pub type DynError = dyn core::error::Error + Send + Sync + 'static;

/// Owned, type-erased error as it crosses a filtered boundary.
pub type BoxError = alloc_type::Box<DynError>;

/// SmallVec-backed collection of sentinels.
///
/// Uses inline storage for up to 2 elements to avoid heap allocations
/// in the common case of a handful of declared errors.
pub type SentinelVec = SmallVec<[Sentinel; 2]>;

/// SmallVec-backed collection of borrowed matchers, as captured by a
/// [`FilterGuard`].
pub type MatcherVec<'a> = SmallVec<[&'a dyn Matcher; 2]>;
