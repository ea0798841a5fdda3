//! Declared-error filtering for fallible functions.
//!
//! A function that passes errors straight up from its callees leaks types
//! its callers were never promised, and those leaks harden into behavior
//! someone depends on. `error_fence` inverts the default: each function
//! declares the sentinel errors it may return, and a filter at the boundary
//! lets those through with identity intact. Everything undeclared is reduced
//! to an [`AnonymizedError`] carrying only the message text, so callers can
//! still read what went wrong without being able to match on it.
//!
//! Enforcement fits wherever the function already is:
//!
//! - [`fence!`] and [`ReturnFilter::scope`] wrap a fallible block, covering
//!   `?` and early returns
//! - [`FilterGuard`] binds a filter to an error slot and runs on drop, even
//!   during unwinding
//! - [`ResultExt::fence`] filters a single `Result` expression in tail
//!   position
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! depend on `error_fence::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Declaring Returnable Errors
//!
//! ```
//! use error_fence::{fence, sentinel, BoxError, Sentinel};
//!
//! sentinel! {
//!     static BAD_PORT = "port out of range";
//! }
//!
//! fn parse_port(raw: &str) -> Result<u16, BoxError> {
//!     fence!([BAD_PORT], {
//!         let n: u32 = raw.parse()?;
//!         if n > u32::from(u16::MAX) {
//!             return Err(BAD_PORT.clone().into());
//!         }
//!         Ok(n as u16)
//!     })
//! }
//!
//! // Declared errors keep their identity for callers to match on.
//! let err = parse_port("70000").unwrap_err();
//! assert!(err.downcast_ref::<Sentinel>().is_some_and(|s| s.same(&BAD_PORT)));
//!
//! // Everything else leaves as an anonymized message.
//! let err = parse_port("abc").unwrap_err();
//! assert!(err.downcast_ref::<Sentinel>().is_none());
//! assert_eq!(err.to_string(), "invalid digit found in string");
//! ```
//!
//! ## Filtering an Error Slot
//!
//! ```
//! use error_fence::{enforce, AnonymizedError, BoxError, Sentinel};
//!
//! let declared = Sentinel::new("declared failure");
//! let mut slot: Option<BoxError> = Some("database password wrong".into());
//!
//! enforce(&mut slot, &[&declared]);
//!
//! // The message survives; the concrete type and source chain do not.
//! let err = slot.unwrap();
//! assert_eq!(err.to_string(), "database password wrong");
//! assert!(err.downcast_ref::<AnonymizedError>().is_some());
//! ```
//!
//! ## Customizing the Filter
//!
//! ```
//! use error_fence::{BoxError, ResultExt, ReturnFilter};
//!
//! let wrapping = ReturnFilter::passthrough()
//!     .with_miss(|err: BoxError| format!("filtered: {err}").into());
//!
//! let result: Result<(), BoxError> = Err("out of disk".into());
//! let err = result.fence_with(&wrapping, &[]).unwrap_err();
//! assert_eq!(err.to_string(), "filtered: out of disk");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Ergonomic macros for declaring sentinels and fencing fallible code
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Core traits for declaring and filtering errors
pub mod traits;
/// Error declaration and filtering types
pub mod types;

// Re-export the common surface at root,
// but encourage using the prelude for quick starts.
pub use traits::*;
pub use types::{
    anonymize, any_of, enforce, AnonymizedError, BoxError, DynError, ErrorTransform, FilterGuard,
    MatcherVec, ReturnFilter, Sentinel, SentinelSet, SentinelVec,
};
