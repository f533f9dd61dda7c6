//! A module containing [`TypedSet`].
//!
//! As a note, there is no mutable iterator over the elements of a set because mutating entries
//! in place could introduce duplicates or break the tag discipline.
//!
//! [`TypedSet`] is also re-exported under the parent module.

mod typed_set;

pub use typed_set::*;
