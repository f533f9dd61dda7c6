//! Runtime-type-checked collections over a closed dynamic value model.
//!
//! # Purpose
//! This crate provides a small family of containers that enforce element-type homogeneity at
//! run time rather than compile time: a resizable [`TypedArray`](typed::TypedArray), a
//! comparator-ordered [`SortedArray`](sorted::SortedArray) with binary-search lookup and
//! insertion, a uniqueness-enforcing [`TypedSet`](typed::TypedSet), and bounded
//! [`Stack`](typed::Stack) / [`Queue`](typed::Queue) adapters built on a generic
//! [`DoublyLinkedList`](linked::DoublyLinkedList).
//!
//! # Type Discipline
//! Most Rust code wants compile-time homogeneity, and for that the plain generic
//! [`DoublyLinkedList<T>`](linked::DoublyLinkedList) is the right tool: the type parameter is the
//! whole discipline and nothing is checked at run time. The remaining containers exist for the
//! other situation, where elements are dynamically shaped [`Value`](value::Value)s (numbers,
//! text, booleans, nested lists) and the container itself must police that everything it holds
//! shares one [`TypeTag`](value::TypeTag). Every such container fixes its tag at construction and
//! validates each batch of incoming values before touching its contents, so a failed call leaves
//! the container exactly as it was.
//!
//! # Error Handling
//! Fallible operations return strongly typed [`Result`]s: [`TypeMismatch`](typed::TypeMismatch)
//! for a value whose tag differs from the declared element type, and
//! [`CapacityViolation`](typed::CapacityViolation) for an attempt to shrink a bounded adapter
//! below its population. Both carry the diagnostics a caller needs (the offending values and the
//! expected tag, or the requested bound and the current length), and a union enum is provided for
//! callers that hold either. Out-of-bounds access through the infallible indexed accessors
//! panics, the same trade-off `std` makes: nobody wants to unwrap every `get`.
//!
//! # Dependencies
//! The containers themselves are written against `std` alone. The crate depends on `derive_more`
//! for error and outcome-enum plumbing, because hand-writing `From`/`TryInto`/`Display` for every
//! variant is very repetitive programming.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "linked")]
pub mod linked;
#[cfg(feature = "sorted")]
pub mod sorted;
#[cfg(feature = "typed")]
pub mod typed;
pub mod value;
