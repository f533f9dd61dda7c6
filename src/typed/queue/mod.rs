//! A module containing [`Queue`], the bounded FIFO adapter.
//!
//! [`Queue`] is also re-exported under the parent module.

mod queue;

pub use queue::*;

mod tests;
