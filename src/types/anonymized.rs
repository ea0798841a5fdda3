//! The message-preserving replacement error.
//!
//! When a function returns an error it never declared, the filter swaps it
//! for an [`AnonymizedError`]: same message text, no identity, no type, no
//! source chain. Callers can still log something readable; they can no longer
//! depend on what the error used to be.

use crate::types::alloc_type::{Box, String};
use crate::types::BoxError;
use core::fmt::{self, Display};

#[cfg(not(feature = "std"))]
use alloc::string::ToString;
#[cfg(feature = "std")]
use std::string::ToString;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Generic error carrying only the message text of the error it replaced.
///
/// The `Display` output is exactly the original message, with no prefix or
/// decoration, so replacing an error does not change what ends up in logs.
/// The original's concrete type and source chain are discarded and cannot
/// be recovered.
///
/// # Examples
///
/// ```
/// use error_fence::AnonymizedError;
///
/// let err = AnonymizedError::new("disk offline");
/// assert_eq!(err.to_string(), "disk offline");
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnonymizedError {
    message: String,
}

impl AnonymizedError {
    /// Creates a replacement error carrying `message`.
    #[inline]
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    /// Returns the preserved message text.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for AnonymizedError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl core::error::Error for AnonymizedError {}

/// Replaces an error with an [`AnonymizedError`] carrying the same message.
///
/// This is the default miss transform of
/// [`ReturnFilter::new`](crate::ReturnFilter::new). The replacement is
/// irreversible, and each application allocates a fresh value: re-filtering
/// an already-anonymized error yields a new object with the same message.
#[must_use]
pub fn anonymize(err: BoxError) -> BoxError {
    #[cfg(feature = "tracing")]
    tracing::debug!(original = %err, "anonymizing undeclared error");
    Box::new(AnonymizedError::new(err.to_string()))
}
