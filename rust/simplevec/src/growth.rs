//! Capacity growth policy shared by the appending, inserting and resizing operations.

/// Smallest capacity allocated when an empty container has to grow.
pub const MIN_CAPACITY: usize = 1;

/// Multiplier applied to the current capacity on reallocation.
pub const GROWTH_FACTOR: usize = 2;

/// Returns the capacity to allocate when a full buffer needs room for one more
/// element: `max(1, 2 * capacity)`.
///
/// ```
/// use simplevec::growth::grown_capacity;
///
/// assert_eq!(grown_capacity(0), 1);
/// assert_eq!(grown_capacity(1), 2);
/// assert_eq!(grown_capacity(6), 12);
/// ```
#[inline]
pub fn grown_capacity(capacity: usize) -> usize {
    capacity.saturating_mul(GROWTH_FACTOR).max(MIN_CAPACITY)
}

/// Returns the capacity to allocate when resizing past the current capacity:
/// `max(2 * capacity, new_len)`.
#[inline]
pub fn resized_capacity(capacity: usize, new_len: usize) -> usize {
    capacity.saturating_mul(GROWTH_FACTOR).max(new_len)
}
