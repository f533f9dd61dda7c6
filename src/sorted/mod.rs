//! Sorted collection types. Namely [`SortedArray`], a type-checked array that keeps its
//! elements in comparator order through binary-search insertion.

pub mod array;

#[doc(inline)]
pub use array::SortedArray;
