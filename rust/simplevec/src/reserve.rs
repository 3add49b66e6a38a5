//! Capacity reservation marker.

use crate::SimpleVector;

/// A request to construct a container with reserved but empty capacity.
///
/// It exists to distinguish "this many reserved slots" from "this many
/// default elements" when building a [`SimpleVector`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReserveProxy {
    capacity: usize,
}

impl ReserveProxy {
    pub const fn new(capacity: usize) -> ReserveProxy {
        ReserveProxy { capacity }
    }

    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Returns a [`ReserveProxy`] for `capacity_to_reserve` slots.
pub const fn reserve(capacity_to_reserve: usize) -> ReserveProxy {
    ReserveProxy::new(capacity_to_reserve)
}

impl<T: Default> From<ReserveProxy> for SimpleVector<T> {
    fn from(proxy: ReserveProxy) -> Self {
        SimpleVector::with_capacity(proxy.capacity())
    }
}
