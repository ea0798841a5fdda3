//! Filter configurations and the core filtering operation.

use crate::traits::Matcher;
use crate::types::alloc_type::Arc;
use crate::types::anonymized::anonymize;
use crate::types::guard::FilterGuard;
use crate::types::BoxError;
use core::fmt::{self, Debug};

/// Shared transform applied to an error on a match or a miss.
pub type ErrorTransform = Arc<dyn Fn(BoxError) -> BoxError + Send + Sync>;

/// Immutable filter configuration: what happens to an error that matched a
/// declared predicate, and what happens to one that missed them all.
///
/// A `ReturnFilter` is built once and reused; it is `Clone + Send + Sync`,
/// so one configuration can serve any number of call sites and threads, each
/// operating on its own error slot. There is no process-wide default to
/// reassign; the default policy is simply the value [`ReturnFilter::new`]
/// returns.
///
/// Both transforms are optional. An absent transform passes the error
/// through unmodified, so [`ReturnFilter::passthrough`] changes nothing on
/// either outcome, while [`ReturnFilter::new`] anonymizes misses and leaves
/// matches alone.
///
/// # Examples
///
/// Wrapping undeclared errors instead of anonymizing them:
///
/// ```
/// use error_fence::{BoxError, ReturnFilter};
///
/// let filter = ReturnFilter::passthrough()
///     .with_miss(|err: BoxError| format!("filtered: {err}").into());
///
/// let mut slot: Option<BoxError> = Some("out of disk".into());
/// filter.apply(&mut slot, &[]);
/// assert_eq!(slot.unwrap().to_string(), "filtered: out of disk");
/// ```
#[must_use]
#[derive(Clone)]
pub struct ReturnFilter {
    on_miss: Option<ErrorTransform>,
    on_match: Option<ErrorTransform>,
}

impl ReturnFilter {
    /// The default policy: anonymize on miss, pass matches through.
    ///
    /// Misses go through [`anonymize`], which keeps the message text and
    /// discards everything else.
    pub fn new() -> Self {
        Self { on_miss: Some(Arc::new(anonymize)), on_match: None }
    }

    /// A filter with no transforms: errors pass through unmodified whether
    /// they match or miss.
    ///
    /// This is the escape hatch for call sites that want declaration without
    /// enforcement, and the neutral base for [`with_miss`](Self::with_miss) /
    /// [`with_match`](Self::with_match) customization.
    pub fn passthrough() -> Self {
        Self { on_miss: None, on_match: None }
    }

    /// Replaces the miss transform.
    ///
    /// `transform` receives every error that matched none of the declared
    /// predicates and decides what the caller sees instead.
    pub fn with_miss<F>(mut self, transform: F) -> Self
    where
        F: Fn(BoxError) -> BoxError + Send + Sync + 'static,
    {
        self.on_miss = Some(Arc::new(transform));
        self
    }

    /// Replaces the match transform.
    ///
    /// Most callers leave this unset so declared errors keep their identity.
    /// It exists for codebases that stamp or wrap every returned error, even
    /// the declared ones.
    pub fn with_match<F>(mut self, transform: F) -> Self
    where
        F: Fn(BoxError) -> BoxError + Send + Sync + 'static,
    {
        self.on_match = Some(Arc::new(transform));
        self
    }

    /// Filters one error value: the pure form of the operation.
    ///
    /// Matchers are consulted in order and the first one to accept the error
    /// wins; later matchers are not invoked. On a match the match transform
    /// (if any) is applied; otherwise the miss transform (if any) is. With no
    /// matchers at all, every error is a miss.
    #[must_use]
    pub fn check(&self, err: BoxError, allowed: &[&dyn Matcher]) -> BoxError {
        for matcher in allowed {
            if matcher.matches(err.as_ref()) {
                return match &self.on_match {
                    Some(transform) => transform.as_ref()(err),
                    None => err,
                };
            }
        }
        match &self.on_miss {
            Some(transform) => transform.as_ref()(err),
            None => err,
        }
    }

    /// Filters the error held in `slot`, if any.
    ///
    /// An empty slot is a no-op, never a fault: nothing is allocated and the
    /// slot is not touched. A held error is replaced by the result of
    /// [`check`](Self::check).
    pub fn apply(&self, slot: &mut Option<BoxError>, allowed: &[&dyn Matcher]) {
        if let Some(err) = slot.take() {
            *slot = Some(self.check(err, allowed));
        }
    }

    /// Runs `body` and filters the error on the way out.
    ///
    /// Every exit of `body` flows through the filter, including `?` early
    /// returns, which makes this the closure equivalent of declaring the
    /// filter at the top of a function. A panic inside `body` produces no
    /// error value, so there is nothing to filter on that path.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_fence::{BoxError, ReturnFilter, Sentinel};
    ///
    /// let empty = Sentinel::new("queue empty");
    ///
    /// let result: Result<u32, BoxError> = ReturnFilter::new().scope(&[&empty], || {
    ///     Err(empty.clone().into())
    /// });
    /// assert!(result.unwrap_err().downcast_ref::<Sentinel>().is_some());
    /// ```
    pub fn scope<T, F>(&self, allowed: &[&dyn Matcher], body: F) -> Result<T, BoxError>
    where
        F: FnOnce() -> Result<T, BoxError>,
    {
        body().map_err(|err| self.check(err, allowed))
    }

    /// Binds this filter to `slot` until the returned guard drops.
    ///
    /// See [`FilterGuard`] for the slot-and-destructor form of the
    /// operation.
    pub fn guard<'a>(
        &self,
        slot: &'a mut Option<BoxError>,
        allowed: &[&'a dyn Matcher],
    ) -> FilterGuard<'a> {
        FilterGuard::with_filter(self, slot, allowed)
    }
}

impl Default for ReturnFilter {
    /// Equivalent to [`ReturnFilter::new`].
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for ReturnFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReturnFilter")
            .field("on_miss", &self.on_miss.is_some())
            .field("on_match", &self.on_match.is_some())
            .finish()
    }
}

/// Filters the error held in `slot` with the default policy.
///
/// Errors accepted by at least one matcher in `allowed` keep their identity;
/// anything else is replaced by an
/// [`AnonymizedError`](crate::AnonymizedError) with the same message. An
/// empty slot is a no-op.
///
/// # Examples
///
/// ```
/// use error_fence::{enforce, AnonymizedError, BoxError, Sentinel};
///
/// let declared = Sentinel::new("declared failure");
/// let stray: BoxError = Sentinel::new("stray failure").into();
///
/// let mut slot = Some(stray);
/// enforce(&mut slot, &[&declared]);
///
/// let err = slot.unwrap();
/// assert_eq!(err.to_string(), "stray failure");
/// assert!(err.downcast_ref::<AnonymizedError>().is_some());
/// ```
pub fn enforce(slot: &mut Option<BoxError>, allowed: &[&dyn Matcher]) {
    ReturnFilter::new().apply(slot, allowed);
}
