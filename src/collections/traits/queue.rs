#[doc(inline)]
pub use crate::util::error::EmptyQueue;

/// A first-in-first-out collection. Elements leave in exactly the order they arrived, with ties
/// between equal values broken by arrival rather than by value, so `T` needs no bounds.
///
/// Taking from an empty queue is not a failure: [`dequeue`](Queue::dequeue) and
/// [`peek`](Queue::peek) return [`None`] and leave the queue untouched. The
/// [`try_dequeue`](Queue::try_dequeue) and [`try_peek`](Queue::try_peek) methods are provided for
/// call sites that would rather propagate [`EmptyQueue`] with `?`.
///
/// # Examples
/// ```
/// # use queue_lib::collections::queue::{ArrayQueue, StackPairQueue};
/// # use queue_lib::collections::traits::Queue;
/// fn drain<Q: Queue<u8>>(mut queue: Q) -> Vec<u8> {
///     let mut out = Vec::new();
///     while let Some(value) = queue.dequeue() {
///         out.push(value);
///     }
///     out
/// }
///
/// let mut array = ArrayQueue::new();
/// let mut pair = StackPairQueue::new();
/// for i in 0..4 {
///     array.enqueue(i);
///     pair.enqueue(i);
/// }
/// assert_eq!(drain(array), drain(pair));
/// ```
pub trait Queue<T> {
    /// Adds `value` at the logical tail of the queue. Queues in this crate are unbounded, so this
    /// always returns true. A bounded queue would return false instead of accepting the value.
    fn enqueue(&mut self, value: T) -> bool;

    /// Removes and returns the logical head of the queue, if there is one.
    fn dequeue(&mut self) -> Option<T>;

    /// Returns a reference to the logical head of the queue without removing it.
    ///
    /// This takes `&mut self` because some implementations reorganize their internal storage to
    /// find the head. The contents and order of the queue are never changed.
    fn peek(&mut self) -> Option<&T>;

    /// Returns the number of elements in the queue.
    fn len(&self) -> usize;

    /// Returns true if the queue contains no elements.
    fn is_empty(&self) -> bool;

    /// Removes and returns the logical head of the queue, returning an [`Err`] if the queue is
    /// empty.
    ///
    /// # Examples
    /// ```
    /// # use queue_lib::collections::queue::StackPairQueue;
    /// # use queue_lib::collections::traits::{EmptyQueue, Queue};
    /// let mut queue = StackPairQueue::<&str>::new();
    /// assert_eq!(queue.try_dequeue(), Err(EmptyQueue));
    /// queue.enqueue("a");
    /// assert_eq!(queue.try_dequeue(), Ok("a"));
    /// ```
    fn try_dequeue(&mut self) -> Result<T, EmptyQueue> {
        self.dequeue().ok_or(EmptyQueue)
    }

    /// Returns a reference to the logical head of the queue, returning an [`Err`] if the queue is
    /// empty.
    fn try_peek(&mut self) -> Result<&T, EmptyQueue> {
        self.peek().ok_or(EmptyQueue)
    }
}
