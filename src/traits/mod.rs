//! Core traits for declaring and filtering returned errors.
//!
//! This module defines the small trait surface the filtering machinery is
//! built on:
//!
//! - [`Matcher`]: predicate deciding whether an error was declared
//! - [`ResultExt`]: tail-position filtering for `Result` values
//!
//! # Examples
//!
//! ```
//! use error_fence::traits::ResultExt;
//! use error_fence::{AnonymizedError, BoxError, Sentinel};
//!
//! let declared = Sentinel::new("declared failure");
//!
//! let result: Result<(), BoxError> = Err("stray failure".into());
//! let err = result.fence(&[&declared]).unwrap_err();
//!
//! assert!(err.downcast_ref::<AnonymizedError>().is_some());
//! ```

pub mod matcher;
pub mod result_ext;

#[cfg(feature = "std")]
pub use matcher::io_kind;
pub use matcher::Matcher;
pub use result_ext::ResultExt;
