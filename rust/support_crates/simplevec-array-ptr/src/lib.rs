//! Exclusively owned, fixed-length heap arrays.
//!
//! [`ArrayPtr`] is the only place in the simplevec crates that talks to the
//! global allocator. Higher-level containers track their own logical size and
//! replace the whole buffer when they need a different length.

pub mod array_ptr;

pub use array_ptr::ArrayPtr;
