//! Vector builders shared by the integration suites and the scenario runner.

use simplevec::{SimpleVector, reserve};

use crate::NonCopyable;

/// Builds `1..=size` by appending into a vector reserved for exactly `size`
/// elements, so no reallocation happens along the way.
pub fn generate_vector(size: usize) -> SimpleVector<i32> {
    let mut v = SimpleVector::from(reserve(size));
    for i in 1..=size {
        v.push_back(i as i32);
    }
    v
}

/// Builds `size` move-only elements holding `0..size`, growing from empty.
pub fn generate_noncopyable(size: usize) -> SimpleVector<NonCopyable> {
    let mut v = SimpleVector::new();
    for i in 0..size {
        v.push_back(NonCopyable::new(i));
    }
    v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_vector_fills_reserved_capacity() {
        let v = generate_vector(100);
        assert_eq!(v.len(), 100);
        assert_eq!(v.capacity(), 100);
        assert_eq!(v[0], 1);
        assert_eq!(v[99], 100);
        assert!(generate_vector(0).is_empty());
    }

    #[test]
    fn test_generate_noncopyable() {
        let v = generate_noncopyable(5);
        assert!(v.iter().map(NonCopyable::value).eq(0..5));
        assert_eq!(v.capacity(), 8);
    }
}
