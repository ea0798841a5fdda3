//! Scope-bound filtering that runs on every exit path.

use crate::traits::Matcher;
use crate::types::return_filter::ReturnFilter;
use crate::types::{BoxError, MatcherVec};
use core::fmt::{self, Debug};

/// Binds a filter to an error slot for the rest of a scope.
///
/// When the guard drops it runs its [`ReturnFilter`] over whatever the slot
/// holds at that moment. Because drop glue runs on every exit path, the
/// filter fires whether the scope ends normally, returns early, or unwinds
/// from a panic; code between construction and drop cannot skip it.
///
/// The guard copies the matcher list at construction, so the slice passed in
/// may be a temporary. The matchers themselves must outlive the guard.
///
/// # Examples
///
/// ```
/// use error_fence::{BoxError, FilterGuard, Sentinel};
///
/// let not_found = Sentinel::new("row not found");
/// let mut slot: Option<BoxError> = None;
///
/// {
///     let mut guard = FilterGuard::new(&mut slot, &[&not_found]);
///     guard.capture(not_found.clone());
/// }
///
/// // Declared, so identity survived the filter.
/// assert!(slot.unwrap().downcast_ref::<Sentinel>().is_some());
/// ```
#[must_use = "the filter only runs when the guard is dropped"]
pub struct FilterGuard<'a> {
    slot: &'a mut Option<BoxError>,
    filter: ReturnFilter,
    allowed: MatcherVec<'a>,
}

impl<'a> FilterGuard<'a> {
    /// Guards `slot` with the default policy of [`ReturnFilter::new`].
    pub fn new(slot: &'a mut Option<BoxError>, allowed: &[&'a dyn Matcher]) -> Self {
        Self::with_filter(&ReturnFilter::new(), slot, allowed)
    }

    /// Guards `slot` with an explicit filter configuration.
    ///
    /// The filter is cloned, so the original stays usable at other call
    /// sites while the guard is alive.
    pub fn with_filter(
        filter: &ReturnFilter,
        slot: &'a mut Option<BoxError>,
        allowed: &[&'a dyn Matcher],
    ) -> Self {
        Self {
            slot,
            filter: filter.clone(),
            allowed: MatcherVec::from_slice(allowed),
        }
    }

    /// Stores `err` in the guarded slot, replacing any earlier value.
    ///
    /// The stored error is not filtered yet; filtering happens once, at
    /// drop, on the final value.
    pub fn capture(&mut self, err: impl Into<BoxError>) {
        *self.slot = Some(err.into());
    }

    /// Whether the guarded slot currently holds an error.
    #[must_use]
    pub fn has_error(&self) -> bool {
        self.slot.is_some()
    }
}

impl Drop for FilterGuard<'_> {
    fn drop(&mut self) {
        self.filter.apply(self.slot, &self.allowed);
    }
}

impl Debug for FilterGuard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterGuard")
            .field("filter", &self.filter)
            .field("matchers", &self.allowed.len())
            .field("pending", &self.slot.is_some())
            .finish_non_exhaustive()
    }
}
