//! `SimpleVector<T>`: the growable sequence and its comparison operators.

use std::borrow::{Borrow, BorrowMut};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem;
use std::ops::{Deref, DerefMut, Index, IndexMut};

use simplevec_array_ptr::ArrayPtr;
use simplevec_common::{Result, result::verify_index};

use crate::growth::{grown_capacity, resized_capacity};

/// A growable, contiguous sequence that owns exactly one [`ArrayPtr`].
///
/// Slots `[0, len)` of the buffer are the logical contents. Slots
/// `[len, capacity)` are live placeholder values (defaults, or elements left
/// behind by `pop_back`, `erase` and `clear`) that are never observed as content
/// and are dropped when overwritten or when the buffer goes away.
///
/// Capacity is the length of the owned buffer, so `len <= capacity` is the only
/// invariant the operations have to maintain.
pub struct SimpleVector<T> {
    items: ArrayPtr<T>,
    size: usize,
}

impl<T> SimpleVector<T> {
    /// Creates an empty vector without allocating.
    pub const fn new() -> SimpleVector<T> {
        SimpleVector {
            items: ArrayPtr::empty(),
            size: 0,
        }
    }

    /// Creates a vector of `size` default-constructed elements, with capacity `size`.
    pub fn with_size(size: usize) -> SimpleVector<T>
    where
        T: Default,
    {
        SimpleVector {
            items: ArrayPtr::new(size),
            size,
        }
    }

    /// Creates a vector of `size` clones of `value`, with capacity `size`.
    pub fn from_elem(size: usize, value: &T) -> SimpleVector<T>
    where
        T: Clone,
    {
        SimpleVector {
            items: ArrayPtr::from_elem(size, value),
            size,
        }
    }

    /// Creates an empty vector with `capacity` reserved slots.
    pub fn with_capacity(capacity: usize) -> SimpleVector<T>
    where
        T: Default,
    {
        SimpleVector {
            items: ArrayPtr::new(capacity),
            size: 0,
        }
    }

    /// Returns the number of elements in the vector.
    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns the number of slots allocated in the owned buffer.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items[..self.size]
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items[..self.size]
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns an `OutOfRange` error if `index >= len`.
    pub fn at(&self, index: usize) -> Result<&T> {
        verify_index(index, self.size)?;
        Ok(&self.items[index])
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns an `OutOfRange` error if `index >= len`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        verify_index(index, self.size)?;
        Ok(&mut self.items[index])
    }

    /// Removes the last element from the logical contents.
    ///
    /// The element stays in its slot as a placeholder until it is overwritten or
    /// the vector is dropped.
    ///
    /// The vector must not be empty. This precondition is only checked in debug
    /// builds.
    #[inline]
    pub fn pop_back(&mut self) {
        debug_assert!(self.size > 0, "pop_back on an empty SimpleVector");
        self.size -= 1;
    }

    /// Removes the element at `index`, shifting the following elements left.
    ///
    /// Returns the element that now occupies `index`, or `None` if the erased
    /// element was the last one.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn erase(&mut self, index: usize) -> Option<&mut T> {
        assert!(
            index < self.size,
            "erase index {index} >= size {}",
            self.size
        );
        self.items[index..self.size].rotate_left(1);
        self.size -= 1;
        self.as_mut_slice().get_mut(index)
    }

    /// Sets the length to zero. The capacity and the buffer are kept.
    #[inline]
    pub fn clear(&mut self) {
        self.size = 0;
    }

    /// Exchanges the contents of two vectors in O(1).
    pub fn swap(&mut self, other: &mut SimpleVector<T>) {
        self.items.swap(&mut other.items);
        mem::swap(&mut self.size, &mut other.size);
    }

    /// Converts the vector into a `Vec` holding just the logical elements,
    /// without copying them. Placeholder slots are dropped.
    pub fn into_vec(mut self) -> Vec<T> {
        let len = mem::take(&mut self.size);
        let mut values = self.items.release().into_vec();
        values.truncate(len);
        values
    }

    /// Moves the logical contents into `buf` and installs it as the owned buffer.
    /// The previous buffer, now holding only placeholders, is dropped.
    fn relocate(&mut self, mut buf: ArrayPtr<T>) {
        debug_assert!(buf.len() >= self.size);
        log::trace!(
            "relocating SimpleVector<{}>: len {}, capacity {} -> {}",
            std::any::type_name::<T>(),
            self.size,
            self.capacity(),
            buf.len()
        );
        buf[..self.size].swap_with_slice(&mut self.items[..self.size]);
        self.items.swap(&mut buf);
    }
}

impl<T: Default> SimpleVector<T> {
    /// Ensures the capacity is at least `new_capacity`, allocating exactly
    /// `new_capacity` slots if it has to grow. Never shrinks.
    pub fn reserve(&mut self, new_capacity: usize) {
        if new_capacity > self.capacity() {
            self.relocate(ArrayPtr::new(new_capacity));
        }
    }

    /// Fallible counterpart of [`SimpleVector::reserve`].
    ///
    /// On error the vector is left untouched.
    pub fn try_reserve(&mut self, new_capacity: usize) -> Result<()> {
        if new_capacity > self.capacity() {
            let buf = ArrayPtr::try_new(new_capacity)?;
            self.relocate(buf);
        }
        Ok(())
    }

    /// Appends `value`, doubling the capacity if the buffer is full.
    pub fn push_back(&mut self, value: T) {
        if self.size == self.capacity() {
            self.relocate(ArrayPtr::new(grown_capacity(self.capacity())));
        }
        self.items[self.size] = value;
        self.size += 1;
    }

    /// Inserts `value` at `index`, shifting the following elements right.
    ///
    /// Returns a reference to the inserted element.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, value: T) -> &mut T {
        assert!(
            index <= self.size,
            "insert index {index} > size {}",
            self.size
        );
        if self.size < self.capacity() {
            self.items[self.size] = value;
            self.items[index..=self.size].rotate_right(1);
        } else {
            let mut buf = ArrayPtr::new(grown_capacity(self.capacity()));
            log::trace!(
                "relocating SimpleVector<{}> for insert at {index}: len {}, capacity {} -> {}",
                std::any::type_name::<T>(),
                self.size,
                self.capacity(),
                buf.len()
            );
            buf[..index].swap_with_slice(&mut self.items[..index]);
            buf[index] = value;
            buf[index + 1..=self.size].swap_with_slice(&mut self.items[index..self.size]);
            self.items.swap(&mut buf);
        }
        self.size += 1;
        &mut self.items[index]
    }

    /// Changes the length to `new_size`.
    ///
    /// Shrinking keeps the capacity. Growing within the capacity resets the new
    /// slots to their default value. Growing past the capacity reallocates to
    /// `max(2 * capacity, new_size)` slots.
    pub fn resize(&mut self, new_size: usize) {
        if new_size <= self.size {
            self.size = new_size;
        } else if new_size <= self.capacity() {
            self.items[self.size..new_size].fill_with(T::default);
            self.size = new_size;
        } else {
            let new_capacity = resized_capacity(self.capacity(), new_size);
            self.relocate(ArrayPtr::new(new_capacity));
            self.size = new_size;
        }
    }
}

impl<T> Default for SimpleVector<T> {
    fn default() -> Self {
        SimpleVector::new()
    }
}

impl<T: Clone + Default> Clone for SimpleVector<T> {
    /// Deep copy into a new buffer sized to this vector's capacity.
    fn clone(&self) -> Self {
        let items = ArrayPtr::from_fn(self.capacity(), |i| {
            if i < self.size {
                self.items[i].clone()
            } else {
                T::default()
            }
        });
        SimpleVector {
            items,
            size: self.size,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        let mut copy = source.clone();
        self.swap(&mut copy);
    }
}

impl<T> Deref for SimpleVector<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for SimpleVector<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

/// Unchecked element access: `index < len` is a precondition, verified only in
/// debug builds. Use [`SimpleVector::at`] for a checked lookup.
impl<T> Index<usize> for SimpleVector<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        debug_assert!(index < self.size, "index {index} >= size {}", self.size);
        &self.items[index]
    }
}

impl<T> IndexMut<usize> for SimpleVector<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.size, "index {index} >= size {}", self.size);
        &mut self.items[index]
    }
}

impl<T> AsRef<[T]> for SimpleVector<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for SimpleVector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Borrow<[T]> for SimpleVector<T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> BorrowMut<[T]> for SimpleVector<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: fmt::Debug> fmt::Debug for SimpleVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimpleVector")
            .field("values", &self.as_slice())
            .field("len", &self.size)
            .field("cap", &self.capacity())
            .finish()
    }
}

impl<T: PartialEq> PartialEq for SimpleVector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for SimpleVector<T> {}

/// Lexicographic ordering with `lt` as the primitive. Two vectors neither of
/// which is less than the other are `Equal` only if they compare `==`;
/// otherwise they are unordered, as with a `NaN` element.
impl<T: PartialOrd> PartialOrd for SimpleVector<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.lt(other) {
            Some(Ordering::Less)
        } else if other.lt(self) {
            Some(Ordering::Greater)
        } else if self == other {
            Some(Ordering::Equal)
        } else {
            None
        }
    }

    fn lt(&self, other: &Self) -> bool {
        lexicographic_less(self.as_slice(), other.as_slice())
    }

    fn le(&self, other: &Self) -> bool {
        self.lt(other) || self == other
    }

    fn gt(&self, other: &Self) -> bool {
        other.lt(self)
    }

    fn ge(&self, other: &Self) -> bool {
        other.lt(self) || self == other
    }
}

impl<T: Ord> Ord for SimpleVector<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: Hash> Hash for SimpleVector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

/// `true` if `lhs` orders before `rhs`, comparing elements with `<` only.
/// The first differing element decides; otherwise the shorter sequence is less.
fn lexicographic_less<T: PartialOrd>(lhs: &[T], rhs: &[T]) -> bool {
    for (l, r) in lhs.iter().zip(rhs) {
        if l < r {
            return true;
        }
        if r < l {
            return false;
        }
    }
    lhs.len() < rhs.len()
}

impl<T> From<Vec<T>> for SimpleVector<T> {
    /// Adopts the vector's elements; capacity equals the element count.
    fn from(vec: Vec<T>) -> Self {
        let size = vec.len();
        SimpleVector {
            items: ArrayPtr::from(vec),
            size,
        }
    }
}

impl<T, const N: usize> From<[T; N]> for SimpleVector<T> {
    fn from(values: [T; N]) -> Self {
        let boxed: Box<[T]> = Box::new(values);
        SimpleVector {
            items: ArrayPtr::from(boxed),
            size: N,
        }
    }
}

impl<T: Clone> From<&[T]> for SimpleVector<T> {
    fn from(values: &[T]) -> Self {
        SimpleVector {
            items: ArrayPtr::from_fn(values.len(), |i| values[i].clone()),
            size: values.len(),
        }
    }
}

impl<T: Default> Extend<T> for SimpleVector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        let needed = self.size.saturating_add(lower);
        if needed > self.capacity() {
            self.reserve(needed);
        }
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T: Default> FromIterator<T> for SimpleVector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut v = SimpleVector::new();
        v.extend(iter);
        v
    }
}
