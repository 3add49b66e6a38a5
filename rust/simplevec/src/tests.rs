use simplevec_common::error::ErrorKind;
use simplevec_testkit::{CopyTally, DropTally, NonCopyable};

use crate::{SimpleVector, reserve, simple_vector};

fn assert_invariant<T>(v: &SimpleVector<T>) {
    assert!(v.len() <= v.capacity(), "len {} > cap {}", v.len(), v.capacity());
}

#[test]
fn test_default_is_empty() {
    let v = SimpleVector::<i32>::new();
    assert_eq!(v.len(), 0);
    assert_eq!(v.capacity(), 0);
    assert!(v.is_empty());
    assert_eq!(v, SimpleVector::default());
}

#[test]
fn test_with_size_default_fills() {
    let v = SimpleVector::<i32>::with_size(5);
    assert_eq!(v.len(), 5);
    assert_eq!(v.capacity(), 5);
    assert!(v.iter().all(|&x| x == 0));

    let v = SimpleVector::<i32>::with_size(0);
    assert!(v.is_empty());
    assert_eq!(v.capacity(), 0);
}

#[test]
fn test_from_elem() {
    let v = SimpleVector::from_elem(3, &42);
    assert_eq!(v.as_slice(), &[42, 42, 42]);
    assert_eq!(v.capacity(), 3);

    let v = simple_vector![7u8; 0];
    assert!(v.is_empty());
}

#[test]
fn test_initializer_list() {
    let v = simple_vector![1, 2, 3];
    assert_eq!(v.len(), 3);
    assert_eq!(v.capacity(), 3);
    assert_eq!(v.as_slice(), &[1, 2, 3]);

    let empty: SimpleVector<i32> = simple_vector![];
    assert!(empty.is_empty());

    let v = SimpleVector::from(vec![4, 5]);
    assert_eq!(v.as_slice(), &[4, 5]);
    let v = SimpleVector::from(&[6, 7][..]);
    assert_eq!(v.as_slice(), &[6, 7]);
}

#[test]
fn test_reservation_constructor() {
    let v: SimpleVector<i32> = SimpleVector::from(reserve(5));
    assert_eq!(v.capacity(), 5);
    assert!(v.is_empty());

    let v = SimpleVector::<String>::with_capacity(0);
    assert_eq!(v.capacity(), 0);
}

#[test]
fn test_push_back_preserves_order() {
    for n in [0usize, 1, 2, 3, 10, 100] {
        let mut v = SimpleVector::new();
        for i in 0..n {
            v.push_back(i);
            assert_invariant(&v);
        }
        assert_eq!(v.len(), n);
        for i in 0..n {
            assert_eq!(v[i], i);
        }
    }
}

#[test]
fn test_push_back_doubles_capacity() {
    let mut v = SimpleVector::new();
    let mut expected_caps = Vec::new();
    for i in 0..9 {
        let before = v.capacity();
        v.push_back(i);
        if v.capacity() != before {
            assert_eq!(v.capacity(), (2 * before).max(1));
        }
        expected_caps.push(v.capacity());
    }
    assert_eq!(expected_caps, vec![1, 2, 4, 4, 8, 8, 8, 8, 16]);
    assert_eq!(v.as_slice(), &[0, 1, 2, 3, 4, 5, 6, 7, 8]);
}

#[test]
fn test_push_back_within_capacity_does_not_reallocate() {
    let mut v: SimpleVector<u32> = SimpleVector::from(reserve(4));
    let before = v.as_ptr();
    for i in 0..4 {
        v.push_back(i);
    }
    assert_eq!(v.capacity(), 4);
    assert_eq!(v.as_ptr(), before);
}

#[test]
fn test_insert_positions() {
    let mut v = simple_vector![1, 2, 3];
    assert_eq!(*v.insert(0, 0), 0);
    assert_eq!(v.as_slice(), &[0, 1, 2, 3]);
    assert_eq!(v.capacity(), 6);

    assert_eq!(*v.insert(4, 4), 4);
    assert_eq!(v.as_slice(), &[0, 1, 2, 3, 4]);

    *v.insert(2, 10) += 1;
    assert_eq!(v.as_slice(), &[0, 1, 11, 2, 3, 4]);
    assert_eq!(v.capacity(), 6);

    v.insert(6, 99);
    assert_eq!(v.capacity(), 12);
    assert_eq!(v.as_slice(), &[0, 1, 11, 2, 3, 4, 99]);
}

#[test]
fn test_insert_into_empty() {
    let mut v = SimpleVector::new();
    v.insert(0, 'a');
    assert_eq!(v.len(), 1);
    assert_eq!(v.capacity(), 1);
    assert_eq!(v[0], 'a');
}

#[test]
#[should_panic(expected = "insert index 4 > size 3")]
fn test_insert_past_end_panics() {
    let mut v = simple_vector![1, 2, 3];
    v.insert(4, 0);
}

#[test]
fn test_insert_then_erase_restores_sequence() {
    let original = simple_vector![10, 20, 30, 40];
    for p in 0..=original.len() {
        let mut v = original.clone();
        v.insert(p, -1);
        assert_eq!(v[p], -1);
        v.erase(p);
        assert_eq!(v, original);
    }
}

#[test]
fn test_erase_returns_following_element() {
    let mut v = simple_vector![1, 2, 3, 4];
    assert_eq!(v.erase(1).copied(), Some(3));
    assert_eq!(v.as_slice(), &[1, 3, 4]);
    assert_eq!(v.erase(2), None);
    assert_eq!(v.as_slice(), &[1, 3]);
    assert_eq!(v.capacity(), 4);
}

#[test]
#[should_panic(expected = "erase index 2 >= size 2")]
fn test_erase_out_of_range_panics() {
    let mut v = simple_vector![1, 2];
    v.erase(2);
}

#[test]
fn test_pop_back_and_clear() {
    let mut v = simple_vector![1, 2, 3];
    v.pop_back();
    assert_eq!(v.as_slice(), &[1, 2]);
    assert_eq!(v.capacity(), 3);

    v.clear();
    assert!(v.is_empty());
    assert_eq!(v.capacity(), 3);

    v.push_back(9);
    assert_eq!(v.as_slice(), &[9]);
    assert_eq!(v.capacity(), 3);
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "pop_back on an empty SimpleVector")]
fn test_pop_back_on_empty_is_caught_in_debug() {
    let mut v = SimpleVector::<i32>::new();
    v.pop_back();
}

#[test]
fn test_at_checks_bounds() {
    let mut v = simple_vector![1, 2, 3];
    for i in 0..v.len() {
        assert_eq!(*v.at(i).unwrap(), v[i]);
    }
    *v.at_mut(1).unwrap() = 20;
    assert_eq!(v[1], 20);

    let err = v.at(3).unwrap_err();
    assert!(err.is_out_of_range());
    assert!(matches!(
        err.kind(),
        ErrorKind::OutOfRange { index: 3, size: 3 }
    ));
    assert_eq!(err.to_string(), "index 3 >= size 3");
    assert!(v.at_mut(100).is_err());

    v.clear();
    assert!(v.at(0).is_err());
}

#[test]
fn test_resize() {
    let mut v = simple_vector![1, 2, 3, 4, 5];

    v.resize(2);
    assert_eq!(v.as_slice(), &[1, 2]);
    assert_eq!(v.capacity(), 5);

    v.resize(4);
    assert_eq!(v.as_slice(), &[1, 2, 0, 0]);
    assert_eq!(v.capacity(), 5);

    v.resize(7);
    assert_eq!(v.as_slice(), &[1, 2, 0, 0, 0, 0, 0]);
    assert_eq!(v.capacity(), 10);

    v.resize(30);
    assert_eq!(v.len(), 30);
    assert_eq!(v.capacity(), 30);
    assert!(v.iter().skip(2).all(|&x| x == 0));

    v.resize(0);
    assert!(v.is_empty());
    assert_eq!(v.capacity(), 30);
}

#[test]
fn test_reserve() {
    let mut v = simple_vector![1, 2, 3];
    v.reserve(10);
    assert_eq!(v.capacity(), 10);
    assert_eq!(v.as_slice(), &[1, 2, 3]);

    let ptr = v.as_ptr();
    v.reserve(5);
    v.reserve(10);
    assert_eq!(v.capacity(), 10);
    assert_eq!(v.as_ptr(), ptr);
    assert_eq!(v.as_slice(), &[1, 2, 3]);
}

#[test]
fn test_try_reserve_overflow_leaves_vector_untouched() {
    let mut v = simple_vector![1u64, 2, 3];
    let err = v.try_reserve(usize::MAX).unwrap_err();
    assert!(err.is_allocation_error());
    assert_eq!(v.as_slice(), &[1, 2, 3]);
    assert_eq!(v.capacity(), 3);

    v.try_reserve(8).unwrap();
    assert_eq!(v.capacity(), 8);
}

#[test]
fn test_clone_is_deep_and_keeps_capacity() {
    let mut a = simple_vector![1, 2, 3];
    a.reserve(8);
    let mut b = a.clone();
    assert_eq!(b.len(), 3);
    assert_eq!(b.capacity(), 8);
    assert_ne!(a.as_ptr(), b.as_ptr());

    b.push_back(4);
    b[0] = 100;
    assert_eq!(a.as_slice(), &[1, 2, 3]);
    assert_eq!(a.capacity(), 8);
    assert_eq!(b.as_slice(), &[100, 2, 3, 4]);
}

#[test]
fn test_clone_copies_logical_elements_only() {
    let tally = CopyTally::new();
    let mut a = SimpleVector::with_capacity(6);
    for i in 0..4 {
        a.push_back(tally.track(i));
    }
    a.pop_back();
    assert_eq!(tally.copies(), 0);

    let b = a.clone();
    assert_eq!(tally.copies(), 3);
    assert_eq!(b.capacity(), 6);
    assert_eq!(b, a);
}

#[test]
fn test_clone_from_replaces_contents() {
    let a = simple_vector![1, 2];
    let mut b = simple_vector![9, 9, 9, 9];
    b.clone_from(&a);
    assert_eq!(b, a);
    assert_eq!(b.capacity(), 2);
}

#[test]
fn test_growth_moves_instead_of_copying() {
    let tally = CopyTally::new();
    let mut v = SimpleVector::new();
    for i in 0..50 {
        v.push_back(tally.track(i));
    }
    v.insert(0, tally.track(-1));
    v.insert(25, tally.track(-2));
    v.erase(3);
    v.resize(200);
    v.reserve(1000);
    assert_eq!(tally.copies(), 0);
    assert_eq!(v[0].value(), -1);
}

#[test]
fn test_move_transfers_buffer() {
    let mut a = simple_vector![1, 2, 3];
    a.reserve(5);
    let ptr = a.as_ptr();

    let b = std::mem::take(&mut a);
    assert_eq!(b.as_slice(), &[1, 2, 3]);
    assert_eq!(b.capacity(), 5);
    assert_eq!(b.as_ptr(), ptr);
    assert!(a.is_empty());
    assert_eq!(a.capacity(), 0);

    let mut c = simple_vector![7];
    assert_eq!(c.as_slice(), &[7]);
    c = b;
    assert_eq!(c.as_slice(), &[1, 2, 3]);
    assert_eq!(c.as_ptr(), ptr);
}

#[test]
fn test_swap() {
    let mut a = simple_vector![1, 2, 3];
    let mut b = SimpleVector::with_capacity(10);
    b.push_back(9);
    let (pa, pb) = (a.as_ptr(), b.as_ptr());

    a.swap(&mut b);
    assert_eq!(a.as_slice(), &[9]);
    assert_eq!(a.capacity(), 10);
    assert_eq!(b.as_slice(), &[1, 2, 3]);
    assert_eq!(b.capacity(), 3);
    assert_eq!(a.as_ptr(), pb);
    assert_eq!(b.as_ptr(), pa);
}

#[test]
fn test_equality_and_ordering() {
    assert_eq!(simple_vector![1, 2, 3], simple_vector![1, 2, 3]);
    assert_ne!(simple_vector![1, 2, 3], simple_vector![1, 2]);
    assert_ne!(simple_vector![1, 2, 3], simple_vector![1, 2, 4]);

    assert!(simple_vector![1, 2] < simple_vector![1, 2, 3]);
    assert!(simple_vector![1, 3] > simple_vector![1, 2, 9]);
    assert!(simple_vector![1, 2] <= simple_vector![1, 2]);
    assert!(simple_vector![1, 2] >= simple_vector![1, 2]);
    assert!(!(simple_vector![1, 2] < simple_vector![1, 2]));
    assert!(SimpleVector::<i32>::new() < simple_vector![0]);
    assert_eq!(
        simple_vector![1, 3].cmp(&simple_vector![1, 2, 9]),
        std::cmp::Ordering::Greater
    );
}

#[test]
fn test_unordered_elements_are_consistent() {
    use std::cmp::Ordering;

    let nan = simple_vector![f64::NAN];
    let one = simple_vector![1.0];
    assert_eq!(nan.partial_cmp(&one), None);
    assert!(!(nan < one));
    assert!(!(nan <= one));
    assert!(!(nan > one));
    assert!(!(nan >= one));
    assert!(!(nan <= nan.clone()));

    // A later ordered element decides when the earlier ones are unordered.
    let a = simple_vector![f64::NAN, 1.0];
    let b = simple_vector![f64::NAN, 2.0];
    assert_eq!(a.partial_cmp(&b), Some(Ordering::Less));
    assert!(a < b && a <= b);
    assert!(b > a && b >= a);

    let x = simple_vector![1.5, 2.0];
    assert_eq!(x.partial_cmp(&x.clone()), Some(Ordering::Equal));
    assert!(x <= x.clone() && x >= x.clone());
}

#[test]
fn test_slice_methods_through_deref() {
    let mut v = simple_vector![1, 2, 3, 4];
    v.reserve(8);
    unsafe {
        assert_eq!(v.get_unchecked(1..3), &[2, 3]);
        *v.get_unchecked_mut(0) = 10;
    }
    assert_eq!(v.get(4), None);
    assert_eq!(v.as_slice(), &[10, 2, 3, 4]);
}

#[test]
fn test_equality_ignores_capacity_and_placeholders() {
    let mut a = simple_vector![1, 2, 3, 4];
    a.pop_back();
    let mut b = SimpleVector::with_capacity(10);
    b.extend([1, 2, 3]);
    assert_eq!(a, b);
}

#[test]
fn test_noncopyable_elements() {
    let mut v = SimpleVector::new();
    for i in 0..5 {
        v.push_back(NonCopyable::new(i));
    }
    v.insert(0, NonCopyable::new(100));
    v.insert(3, NonCopyable::new(200));
    assert_eq!(v.erase(1).map(|x| x.value()), Some(1));

    let values: Vec<usize> = v.iter().map(NonCopyable::value).collect();
    assert_eq!(values, vec![100, 1, 200, 2, 3, 4]);

    let moved = v;
    assert_eq!(moved.len(), 6);
    let values: Vec<usize> = moved.into_iter().map(|x| x.value()).collect();
    assert_eq!(values, vec![100, 1, 200, 2, 3, 4]);
}

#[test]
fn test_every_element_dropped_once() {
    let tally = DropTally::new();
    {
        let mut v = SimpleVector::new();
        for i in 0..20 {
            v.push_back(tally.track(i));
        }
        v.pop_back();
        v.erase(4);
        v.insert(2, tally.track(-1));
        v.resize(5);
        v.clear();
        v.push_back(tally.track(-2));
        // Only the overwritten placeholders have been dropped so far.
        assert_eq!(tally.dropped(), 2);
    }
    assert_eq!(tally.created(), 22);
    assert_eq!(tally.dropped(), 22);
}

#[test]
fn test_into_iter_drops_placeholders() {
    let tally = DropTally::new();
    let mut v = SimpleVector::new();
    for i in 0..4 {
        v.push_back(tally.track(i));
    }
    v.pop_back();
    let items: Vec<i32> = v.into_iter().map(|x| x.value()).collect();
    assert_eq!(items, vec![0, 1, 2]);
    assert_eq!(tally.alive(), 0);
}

#[test]
fn test_iteration() {
    let mut v: SimpleVector<i32> = (1..=4).collect();
    assert_eq!(v.capacity(), 4);
    for x in &mut v {
        *x *= 10;
    }
    let sum: i32 = (&v).into_iter().sum();
    assert_eq!(sum, 100);
    assert_eq!(v.iter().rev().copied().collect::<Vec<_>>(), vec![40, 30, 20, 10]);
    assert_eq!(v.first(), Some(&10));
    assert_eq!(v.into_vec(), vec![10, 20, 30, 40]);
}

#[test]
fn test_zero_sized_elements() {
    let mut v = SimpleVector::new();
    for _ in 0..10 {
        v.push_back(());
    }
    v.insert(3, ());
    v.erase(0);
    assert_eq!(v.len(), 10);
    assert_eq!(v.capacity(), 16);
}

#[test]
fn test_debug_format() {
    let v = simple_vector![1, 2];
    assert_eq!(
        format!("{v:?}"),
        "SimpleVector { values: [1, 2], len: 2, cap: 2 }"
    );
}
