//! Traits shared between collection types.

mod queue;

pub use queue::*;
