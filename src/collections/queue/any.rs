use derive_more::IsVariant;

use super::{ArrayQueue, StackPairQueue};
use crate::collections::traits::Queue;

/// The queue implementations available through [`AnyQueue`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
pub enum QueueKind {
    Array,
    #[default]
    StackPair,
}

/// Either of the queue implementations, for when the choice is made at runtime. Dispatch is static,
/// by matching on the variant.
///
/// # Examples
/// ```
/// # use queue_lib::collections::queue::{AnyQueue, QueueKind};
/// # use queue_lib::collections::traits::Queue;
/// for kind in [QueueKind::Array, QueueKind::StackPair] {
///     let mut queue = AnyQueue::new(kind);
///     queue.enqueue(1);
///     queue.enqueue(2);
///     assert_eq!(queue.kind(), kind);
///     assert_eq!(queue.dequeue(), Some(1));
///     assert_eq!(queue.peek(), Some(&2));
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, IsVariant)]
pub enum AnyQueue<T> {
    Array(ArrayQueue<T>),
    StackPair(StackPairQueue<T>),
}

use AnyQueue::*;

impl<T> AnyQueue<T> {
    /// Creates a new, empty queue of the provided kind.
    pub const fn new(kind: QueueKind) -> AnyQueue<T> {
        match kind {
            QueueKind::Array => Array(ArrayQueue::new()),
            QueueKind::StackPair => StackPair(StackPairQueue::new()),
        }
    }

    /// Returns the kind of queue backing this AnyQueue.
    pub const fn kind(&self) -> QueueKind {
        match self {
            Array(_) => QueueKind::Array,
            StackPair(_) => QueueKind::StackPair,
        }
    }
}

impl<T> Queue<T> for AnyQueue<T> {
    fn enqueue(&mut self, value: T) -> bool {
        match self {
            Array(queue) => queue.enqueue(value),
            StackPair(queue) => queue.enqueue(value),
        }
    }

    fn dequeue(&mut self) -> Option<T> {
        match self {
            Array(queue) => queue.dequeue(),
            StackPair(queue) => queue.dequeue(),
        }
    }

    fn peek(&mut self) -> Option<&T> {
        match self {
            Array(queue) => queue.peek(),
            StackPair(queue) => queue.peek(),
        }
    }

    fn len(&self) -> usize {
        match self {
            Array(queue) => queue.len(),
            StackPair(queue) => queue.len(),
        }
    }

    fn is_empty(&self) -> bool {
        match self {
            Array(queue) => queue.is_empty(),
            StackPair(queue) => queue.is_empty(),
        }
    }
}

impl<T> Default for AnyQueue<T> {
    fn default() -> Self {
        Self::new(QueueKind::default())
    }
}

impl<T> From<ArrayQueue<T>> for AnyQueue<T> {
    fn from(value: ArrayQueue<T>) -> Self {
        Array(value)
    }
}

impl<T> From<StackPairQueue<T>> for AnyQueue<T> {
    fn from(value: StackPairQueue<T>) -> Self {
        StackPair(value)
    }
}
