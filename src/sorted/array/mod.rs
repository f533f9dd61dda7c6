//! A module containing [`SortedArray`], its binary-search internals and the [`MapOutcome`] of
//! its type-re-deriving transforms.
//!
//! As a note, there is no mutable iterator over the elements of a SortedArray because mutating
//! an element in place could silently break the sort order.
//!
//! [`SortedArray`] is also re-exported under the parent module.

mod search;
mod sorted_array;

pub use sorted_array::*;
