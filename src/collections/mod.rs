//! Queue collection types and the trait they share.
//!
//! # Method
//! Each queue owns its elements in one or more [`Vec`]s and implements
//! [`Queue`](traits::Queue), so most callers only need to name a concrete type once, at
//! construction.

#[cfg(feature = "queues")]
pub mod queue;
pub mod traits;
