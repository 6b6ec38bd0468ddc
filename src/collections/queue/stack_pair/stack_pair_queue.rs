use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};

use super::Iter;
use crate::collections::traits::Queue;

/// A queue built from two stacks, `incoming` and `outgoing`, which amortizes dequeuing to `O(1)`.
///
/// Enqueued elements are pushed onto `incoming`. Elements are taken from the top of `outgoing`,
/// which always holds the front of the queue. When `outgoing` runs dry and the front is requested,
/// all of `incoming` is moved onto `outgoing` in one block, reversing its order. Reading `outgoing`
/// from top to bottom followed by `incoming` from bottom to top gives the full FIFO order.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the StackPairQueue.
/// - `m`: The number of items in `incoming`.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `is_empty` | `O(1)` |
/// | `enqueue` | `O(1)`*, `O(n)` |
/// | `dequeue` | `O(1)`**, `O(m)` |
/// | `peek` | `O(1)`**, `O(m)` |
/// | `clear` | `O(n)` |
///
/// \* If `incoming` doesn't have enough capacity for the new element, `enqueue` will take `O(n)`.
///
/// \** If `outgoing` is empty, the transfer moves all `m` elements of `incoming`. Each element is
/// transferred at most once over its lifetime, so any sequence of `n` enqueues and dequeues does at
/// most `n` moves in total.
pub struct StackPairQueue<T> {
    pub(crate) incoming: Vec<T>,
    /// The logical front is the last element.
    pub(crate) outgoing: Vec<T>,
}

impl<T> StackPairQueue<T> {
    /// Creates a new StackPairQueue with no elements. Memory will be allocated on the first
    /// enqueue.
    ///
    /// # Examples
    /// ```
    /// # use queue_lib::collections::queue::StackPairQueue;
    /// let queue: StackPairQueue<u8> = StackPairQueue::new();
    /// assert!(queue.is_empty());
    /// ```
    pub const fn new() -> StackPairQueue<T> {
        StackPairQueue {
            incoming: Vec::new(),
            outgoing: Vec::new(),
        }
    }

    /// Creates a new StackPairQueue which can take at least `cap` enqueues before reallocating.
    /// `outgoing` stays unallocated until the first transfer.
    pub fn with_cap(cap: usize) -> StackPairQueue<T> {
        StackPairQueue {
            incoming: Vec::with_capacity(cap),
            outgoing: Vec::new(),
        }
    }

    /// Returns the number of elements in the StackPairQueue, across both stacks.
    pub fn len(&self) -> usize {
        self.incoming.len() + self.outgoing.len()
    }

    /// Returns true if the StackPairQueue contains no elements.
    pub fn is_empty(&self) -> bool {
        self.incoming.is_empty() && self.outgoing.is_empty()
    }

    /// Adds `value` to the back of the StackPairQueue. Always returns true.
    ///
    /// # Examples
    /// ```
    /// # use queue_lib::collections::queue::StackPairQueue;
    /// let mut queue = StackPairQueue::new();
    /// assert!(queue.enqueue('a'));
    /// assert_eq!(queue.len(), 1);
    /// ```
    pub fn enqueue(&mut self, value: T) -> bool {
        self.incoming.push(value);
        true
    }

    /// Removes the element at the front of the StackPairQueue and returns it, if the queue isn't
    /// empty.
    ///
    /// # Examples
    /// ```
    /// # use queue_lib::collections::queue::StackPairQueue;
    /// let mut queue: StackPairQueue<_> = (1..=3).collect();
    /// assert_eq!(queue.dequeue(), Some(1));
    /// queue.enqueue(4);
    /// assert_eq!(queue.dequeue(), Some(2));
    /// assert_eq!(queue.dequeue(), Some(3));
    /// assert_eq!(queue.dequeue(), Some(4));
    /// assert_eq!(queue.dequeue(), None);
    /// ```
    pub fn dequeue(&mut self) -> Option<T> {
        self.transfer_if_drained();
        self.outgoing.pop()
    }

    /// Returns a reference to the element at the front of the StackPairQueue, if it exists.
    ///
    /// Like [`dequeue`](StackPairQueue::dequeue), this transfers `incoming` onto `outgoing` if
    /// `outgoing` is empty, so both always agree on the front. Repeated calls don't transfer again.
    ///
    /// # Examples
    /// ```
    /// # use queue_lib::collections::queue::StackPairQueue;
    /// let mut queue = StackPairQueue::new();
    /// queue.enqueue("a");
    /// queue.enqueue("b");
    /// assert_eq!(queue.peek(), Some(&"a"));
    /// assert_eq!(queue.peek(), Some(&"a"));
    /// assert_eq!(queue.len(), 2);
    /// ```
    pub fn peek(&mut self) -> Option<&T> {
        self.transfer_if_drained();
        self.outgoing.last()
    }

    /// Removes all elements from the StackPairQueue, dropping them in FIFO order.
    pub fn clear(&mut self) {
        // Drop the front of the queue first.
        while self.outgoing.pop().is_some() {}
        self.incoming.clear();
    }

    /// Returns an iterator over the elements of the StackPairQueue, from front to back. This
    /// doesn't transfer any elements between the stacks.
    ///
    /// # Examples
    /// ```
    /// # use queue_lib::collections::queue::StackPairQueue;
    /// let mut queue: StackPairQueue<_> = (0..3).collect();
    /// queue.dequeue();
    /// queue.enqueue(3);
    /// assert!(queue.iter().copied().eq(1..=3));
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.outgoing.iter().rev().chain(self.incoming.iter()),
        }
    }

    /// Moves every element of `incoming` onto `outgoing` in reverse order, but only if `outgoing`
    /// is empty. This is the only place elements move between the two stacks.
    pub(crate) fn transfer_if_drained(&mut self) {
        if self.outgoing.is_empty() {
            self.outgoing.extend(self.incoming.drain(..).rev());
        }
    }
}

impl<T> Queue<T> for StackPairQueue<T> {
    fn enqueue(&mut self, value: T) -> bool {
        StackPairQueue::enqueue(self, value)
    }

    fn dequeue(&mut self) -> Option<T> {
        StackPairQueue::dequeue(self)
    }

    fn peek(&mut self) -> Option<&T> {
        StackPairQueue::peek(self)
    }

    fn len(&self) -> usize {
        StackPairQueue::len(self)
    }

    fn is_empty(&self) -> bool {
        StackPairQueue::is_empty(self)
    }
}

impl<T> Extend<T> for StackPairQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.incoming.extend(iter);
    }
}

impl<T> FromIterator<T> for StackPairQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        StackPairQueue {
            incoming: iter.into_iter().collect(),
            outgoing: Vec::new(),
        }
    }
}

impl<T> Default for StackPairQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for StackPairQueue<T> {
    fn clone(&self) -> Self {
        StackPairQueue {
            incoming: self.incoming.clone(),
            outgoing: self.outgoing.clone(),
        }
    }
}

// Two queues holding the same elements in the same order are equal, regardless of how those
// elements are split between the stacks.
impl<T: PartialEq> PartialEq for StackPairQueue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for StackPairQueue<T> {}

impl<T: Hash> Hash for StackPairQueue<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for item in self.iter() {
            item.hash(state);
        }
    }
}

impl<T: Debug> Debug for StackPairQueue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("StackPairQueue")
            .field("incoming", &self.incoming)
            .field("outgoing", &self.outgoing)
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Debug> Display for StackPairQueue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
