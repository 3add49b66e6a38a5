//! A growable, contiguous sequence container built on an exclusively owned
//! heap buffer.
//!
//! [`SimpleVector`] keeps its logical length separate from the capacity of the
//! [`ArrayPtr`] it owns. Appends and inserts double the capacity when the buffer
//! is full, moving the existing elements into the new allocation; nothing is
//! ever cloned during relocation, so move-only element types are supported.
//!
//! ```
//! use simplevec::{SimpleVector, reserve, simple_vector};
//!
//! let mut v: SimpleVector<i32> = SimpleVector::from(reserve(4));
//! assert_eq!((v.len(), v.capacity()), (0, 4));
//!
//! v.push_back(1);
//! v.push_back(3);
//! v.insert(1, 2);
//! assert_eq!(v, simple_vector![1, 2, 3]);
//! assert!(v.at(3).is_err());
//! ```

pub mod growth;
pub mod iter;
mod macros;
pub mod reserve;
pub mod vector;

pub use reserve::{ReserveProxy, reserve};
pub use simplevec_array_ptr::ArrayPtr;
pub use vector::SimpleVector;

#[cfg(test)]
mod tests;
