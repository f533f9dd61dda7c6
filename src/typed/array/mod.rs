//! A module containing [`TypedArray`] and the [`MapOutcome`] of its type-re-deriving
//! transforms.
//!
//! As a note, there is no mutable iterator over the elements of a TypedArray because swapping a
//! value in place could break the tag discipline without any check firing.
//!
//! [`TypedArray`] is also re-exported under the parent module.

mod typed_array;

pub use typed_array::*;
