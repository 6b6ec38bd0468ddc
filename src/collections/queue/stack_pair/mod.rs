//! A module containing [`StackPairQueue`] and associated types.
//!
//! Currently, the only other included types are for iteration, providing owned ([`IntoIter`]) and
//! borrowed ([`Iter`]) iteration over the queue in FIFO order. Neither needs to move elements
//! between the two stacks.
//!
//! [`StackPairQueue`] is also re-exported under the parent module.

mod iter;
mod stack_pair_queue;
mod tests;

pub use iter::*;
pub use stack_pair_queue::*;
