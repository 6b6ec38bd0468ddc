use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::slice;

use crate::collections::traits::Queue;

/// A queue backed by a single growable sequence, with the front of the queue at index 0.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the ArrayQueue.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `is_empty` | `O(1)` |
/// | `enqueue` | `O(1)`*, `O(n)` |
/// | `dequeue` | `O(n)` |
/// | `peek` | `O(1)` |
/// | `clear` | `O(n)` |
///
/// \* If the backing storage doesn't have enough capacity for the new element, `enqueue` will take
/// `O(n)`.
///
/// Every dequeue shifts all remaining elements down by one position. This is the baseline queue:
/// acceptable when queues stay small or dequeues are rare, otherwise see
/// [`StackPairQueue`](crate::collections::queue::StackPairQueue).
pub struct ArrayQueue<T> {
    pub(crate) storage: Vec<T>,
}

impl<T> ArrayQueue<T> {
    /// Creates a new ArrayQueue with no elements. Memory will be allocated on the first enqueue.
    ///
    /// # Examples
    /// ```
    /// # use queue_lib::collections::queue::ArrayQueue;
    /// let queue: ArrayQueue<u8> = ArrayQueue::new();
    /// assert!(queue.is_empty());
    /// ```
    pub const fn new() -> ArrayQueue<T> {
        ArrayQueue {
            storage: Vec::new(),
        }
    }

    /// Creates a new ArrayQueue with room for at least `cap` elements before reallocating.
    pub fn with_cap(cap: usize) -> ArrayQueue<T> {
        ArrayQueue {
            storage: Vec::with_capacity(cap),
        }
    }

    /// Returns the number of elements in the ArrayQueue.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Returns true if the ArrayQueue contains no elements.
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Adds `value` to the back of the ArrayQueue. Always returns true.
    ///
    /// # Examples
    /// ```
    /// # use queue_lib::collections::queue::ArrayQueue;
    /// let mut queue = ArrayQueue::new();
    /// assert!(queue.enqueue('a'));
    /// assert_eq!(queue.len(), 1);
    /// ```
    pub fn enqueue(&mut self, value: T) -> bool {
        self.storage.push(value);
        true
    }

    /// Removes the element at the front of the ArrayQueue and returns it, if the queue isn't
    /// empty. All remaining elements are moved forward to fill the gap.
    ///
    /// # Examples
    /// ```
    /// # use queue_lib::collections::queue::ArrayQueue;
    /// let mut queue: ArrayQueue<_> = (1..=3).collect();
    /// assert_eq!(queue.dequeue(), Some(1));
    /// assert_eq!(queue.dequeue(), Some(2));
    /// assert_eq!(queue.dequeue(), Some(3));
    /// assert_eq!(queue.dequeue(), None);
    /// ```
    pub fn dequeue(&mut self) -> Option<T> {
        if self.storage.is_empty() {
            None
        } else {
            Some(self.storage.remove(0))
        }
    }

    /// Returns a reference to the element at the front of the ArrayQueue, if it exists.
    pub fn peek(&self) -> Option<&T> {
        self.storage.first()
    }

    /// Removes all elements from the ArrayQueue, dropping them in FIFO order.
    pub fn clear(&mut self) {
        self.storage.clear();
    }

    /// Returns an iterator over the elements of the ArrayQueue, from front to back.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.storage.iter()
    }
}

impl<T> Queue<T> for ArrayQueue<T> {
    fn enqueue(&mut self, value: T) -> bool {
        ArrayQueue::enqueue(self, value)
    }

    fn dequeue(&mut self) -> Option<T> {
        ArrayQueue::dequeue(self)
    }

    fn peek(&mut self) -> Option<&T> {
        ArrayQueue::peek(self)
    }

    fn len(&self) -> usize {
        ArrayQueue::len(self)
    }

    fn is_empty(&self) -> bool {
        ArrayQueue::is_empty(self)
    }
}

impl<T> Extend<T> for ArrayQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.storage.extend(iter);
    }
}

impl<T> FromIterator<T> for ArrayQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        ArrayQueue {
            storage: iter.into_iter().collect(),
        }
    }
}

impl<T> Default for ArrayQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for ArrayQueue<T> {
    fn clone(&self) -> Self {
        ArrayQueue {
            storage: self.storage.clone(),
        }
    }
}

impl<T: PartialEq> PartialEq for ArrayQueue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.storage == other.storage
    }
}

impl<T: Eq> Eq for ArrayQueue<T> {}

impl<T: Hash> Hash for ArrayQueue<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.storage.hash(state);
    }
}

impl<T: Debug> Debug for ArrayQueue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayQueue")
            .field("storage", &self.storage)
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Debug> Display for ArrayQueue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
