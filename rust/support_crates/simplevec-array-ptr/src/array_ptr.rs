//! `ArrayPtr<T>`: a single heap allocation of a fixed number of initialized slots.
//!
//! The buffer holds no notion of a "logical" length: every slot in the allocation
//! is a live `T`, and the owner decides which of them are meaningful. The slot
//! count is kept only because deallocation needs the original layout.
//!
//! Element access, both positional and by range, goes through the `[T]` the
//! buffer dereferences to.
//!
//! # Ownership
//!
//! An `ArrayPtr` is never copied. Ownership moves with the value, can be handed
//! off as a `Box<[T]>` through [`ArrayPtr::release`], or exchanged in O(1)
//! through [`ArrayPtr::swap`]:
//!
//! ```compile_fail
//! use simplevec_array_ptr::ArrayPtr;
//!
//! let a = ArrayPtr::<u32>::new(4);
//! let b = a.clone(); // ArrayPtr does not implement Clone
//! ```

use std::alloc::{self, Layout};
use std::marker::PhantomData;
use std::mem::{self, ManuallyDrop};
use std::ops::{Deref, DerefMut};
use std::ptr::{self, NonNull};

use simplevec_common::{Result, error::Error};

/// An exclusively owned heap array of `len` initialized `T` values.
///
/// An empty buffer holds a dangling pointer and performs no allocation.
/// Zero-sized element types never allocate either, but still run the destructor
/// of every slot on drop.
pub struct ArrayPtr<T> {
    /// Start of the allocation, or a dangling pointer when nothing is allocated.
    ptr: NonNull<T>,
    /// Number of initialized slots; fixed for the lifetime of the allocation.
    len: usize,
    _owns: PhantomData<T>,
}

unsafe impl<T: Send> Send for ArrayPtr<T> {}

unsafe impl<T: Sync> Sync for ArrayPtr<T> {}

impl<T> ArrayPtr<T> {
    /// Creates an empty buffer without allocating.
    pub const fn empty() -> ArrayPtr<T> {
        ArrayPtr {
            ptr: NonNull::dangling(),
            len: 0,
            _owns: PhantomData,
        }
    }

    /// Allocates `len` default-constructed slots.
    ///
    /// `len == 0` produces an empty buffer. Allocation failure is fatal and is
    /// reported through [`std::alloc::handle_alloc_error`].
    pub fn new(len: usize) -> ArrayPtr<T>
    where
        T: Default,
    {
        Self::from_fn(len, |_| T::default())
    }

    /// Fallible counterpart of [`ArrayPtr::new`].
    pub fn try_new(len: usize) -> Result<ArrayPtr<T>>
    where
        T: Default,
    {
        Self::try_from_fn(len, |_| T::default())
    }

    /// Allocates `len` slots, each holding a clone of `value`.
    pub fn from_elem(len: usize, value: &T) -> ArrayPtr<T>
    where
        T: Clone,
    {
        Self::from_fn(len, |_| value.clone())
    }

    /// Allocates `len` slots, initializing slot `i` with `f(i)`.
    ///
    /// If `f` panics, the slots written so far are dropped and the allocation
    /// is released before the panic propagates.
    ///
    /// # Panics
    ///
    /// Panics if the total size in bytes would exceed `isize::MAX`.
    pub fn from_fn<F>(len: usize, f: F) -> ArrayPtr<T>
    where
        F: FnMut(usize) -> T,
    {
        let layout = match Self::layout_for(len) {
            Ok(layout) => layout,
            Err(e) => panic!("{e}"),
        };
        let Some(ptr) = Self::allocate(layout) else {
            alloc::handle_alloc_error(layout);
        };
        unsafe { Self::fill(ptr, len, layout, f) }
    }

    /// Fallible counterpart of [`ArrayPtr::from_fn`].
    ///
    /// # Errors
    ///
    /// Returns `CapacityOverflow` if `len` elements cannot be described by a valid
    /// layout, or `AllocationFailed` if the allocator refuses the request.
    pub fn try_from_fn<F>(len: usize, f: F) -> Result<ArrayPtr<T>>
    where
        F: FnMut(usize) -> T,
    {
        let layout = Self::layout_for(len)?;
        let ptr = Self::allocate(layout).ok_or_else(|| {
            log::debug!(
                "allocation of {len} x {} ({} bytes) failed",
                std::any::type_name::<T>(),
                layout.size()
            );
            Error::allocation_failed(len, layout.size())
        })?;
        Ok(unsafe { Self::fill(ptr, len, layout, f) })
    }

    /// Returns the number of slots in the allocation.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the buffer holds no slots.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if the buffer currently owns a non-empty region.
    #[inline]
    pub fn is_allocated(&self) -> bool {
        self.len != 0
    }

    /// Returns a raw pointer to the first slot.
    ///
    /// The pointer is dangling when the buffer is empty. It is meant for identity
    /// checks and diagnostics; all element access goes through slices.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    /// Returns all slots as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        unsafe { std::slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    /// Returns all slots as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { std::slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }

    /// Gives up ownership of the allocation, leaving this buffer empty.
    ///
    /// The returned box owns every slot and releases the memory when dropped.
    pub fn release(&mut self) -> Box<[T]> {
        let this = ManuallyDrop::new(mem::replace(self, ArrayPtr::empty()));
        unsafe {
            Box::from_raw(ptr::slice_from_raw_parts_mut(
                this.ptr.as_ptr(),
                this.len,
            ))
        }
    }

    /// Exchanges the allocations of two buffers without touching any element.
    #[inline]
    pub fn swap(&mut self, other: &mut ArrayPtr<T>) {
        mem::swap(self, other);
    }
}

impl<T> ArrayPtr<T> {
    fn layout_for(len: usize) -> Result<Layout> {
        Layout::array::<T>(len).map_err(|_| Error::capacity_overflow(len))
    }

    /// Returns uninitialized storage for `layout`, or `None` if the allocator fails.
    fn allocate(layout: Layout) -> Option<NonNull<T>> {
        if layout.size() == 0 {
            return Some(NonNull::dangling());
        }
        let raw = unsafe { alloc::alloc(layout) };
        let ptr = NonNull::new(raw.cast::<T>())?;
        log::trace!(
            "allocated {} x {} ({} bytes)",
            layout.size() / mem::size_of::<T>(),
            std::any::type_name::<T>(),
            layout.size()
        );
        Some(ptr)
    }

    /// Writes `f(0)..f(len)` into freshly allocated storage.
    ///
    /// # Safety
    ///
    /// `ptr` must come from [`ArrayPtr::allocate`] with `layout`, and `layout`
    /// must describe exactly `len` elements of `T`.
    unsafe fn fill<F>(ptr: NonNull<T>, len: usize, layout: Layout, mut f: F) -> ArrayPtr<T>
    where
        F: FnMut(usize) -> T,
    {
        let mut guard = FillGuard {
            ptr,
            initialized: 0,
            layout,
        };
        while guard.initialized < len {
            let value = f(guard.initialized);
            unsafe { ptr.as_ptr().add(guard.initialized).write(value) };
            guard.initialized += 1;
        }
        mem::forget(guard);
        ArrayPtr {
            ptr,
            len,
            _owns: PhantomData,
        }
    }
}

/// Cleans up a partially filled allocation when the fill closure panics.
struct FillGuard<T> {
    ptr: NonNull<T>,
    initialized: usize,
    layout: Layout,
}

impl<T> Drop for FillGuard<T> {
    fn drop(&mut self) {
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.ptr.as_ptr(),
                self.initialized,
            ));
            if self.layout.size() != 0 {
                alloc::dealloc(self.ptr.as_ptr().cast(), self.layout);
            }
        }
    }
}

impl<T> Drop for ArrayPtr<T> {
    fn drop(&mut self) {
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.ptr.as_ptr(), self.len));
        }
        // The layout was valid when the buffer was built, so this cannot fail.
        if let Ok(layout) = Layout::array::<T>(self.len) {
            if layout.size() != 0 {
                unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), layout) };
            }
        }
    }
}

impl<T> Default for ArrayPtr<T> {
    fn default() -> Self {
        ArrayPtr::empty()
    }
}

impl<T> Deref for ArrayPtr<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for ArrayPtr<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> From<Box<[T]>> for ArrayPtr<T> {
    /// Adopts an existing boxed slice without copying its elements.
    fn from(boxed: Box<[T]>) -> Self {
        let len = boxed.len();
        let raw = Box::into_raw(boxed);
        ArrayPtr {
            ptr: unsafe { NonNull::new_unchecked(raw.cast::<T>()) },
            len,
            _owns: PhantomData,
        }
    }
}

impl<T> From<Vec<T>> for ArrayPtr<T> {
    fn from(vec: Vec<T>) -> Self {
        ArrayPtr::from(vec.into_boxed_slice())
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for ArrayPtr<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArrayPtr")
            .field("values", &self.as_slice())
            .field("len", &self.len)
            .finish_non_exhaustive()
    }
}
