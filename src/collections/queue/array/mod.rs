//! A module containing [`ArrayQueue`] and associated types.
//!
//! Currently, the only other included types are for iteration. [`IntoIter`] yields owned elements
//! in FIFO order and [`Iter`](std::slice::Iter) from [`std::slice`] is used for borrowed iteration.
//!
//! [`ArrayQueue`] is also re-exported under the parent module.

mod array_queue;
mod iter;

pub use array_queue::*;
pub use iter::*;
