//! FIFO queue types. Primarily revolves around [`ArrayQueue`] and [`StackPairQueue`], two
//! interchangeable implementations of [`Queue`](super::traits::Queue).
//!
//! # Choosing a Queue
//! [`ArrayQueue`] is the simplest correct queue and is fine when queues stay small or are rarely
//! dequeued from. [`StackPairQueue`] should be preferred otherwise, as its dequeue is `O(1)`
//! amortized rather than `O(n)`. When the choice is only known at runtime, [`AnyQueue`] holds
//! either one.

#[cfg(all(feature = "array", feature = "stack-pair"))]
mod any;
#[cfg(feature = "array")]
pub mod array;
#[cfg(feature = "stack-pair")]
pub mod stack_pair;


#[cfg(all(feature = "array", feature = "stack-pair"))]
pub use any::*;
#[doc(inline)]
#[cfg(feature = "array")]
pub use array::ArrayQueue;
#[doc(inline)]
#[cfg(feature = "stack-pair")]
pub use stack_pair::StackPairQueue;
