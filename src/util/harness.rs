#![cfg(test)]

use derive_more::IsVariant;
use proptest::collection;
use proptest::prelude::*;

use crate::collections::traits::Queue;

/// A single call against the [`Queue`] interface.
#[derive(Debug, Clone, PartialEq, Eq, IsVariant)]
pub enum Op<T> {
    Enqueue(T),
    Dequeue,
    Peek,
    IsEmpty,
}

/// What a single [`Op`] returned, with references cloned out so that results from different queue
/// types can be compared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Observation<T> {
    Enqueued(bool),
    Dequeued(Option<T>),
    Peeked(Option<T>),
    IsEmpty(bool),
}

/// Applies every op to `queue` in order, recording each result.
pub fn replay<T, Q>(queue: &mut Q, ops: &[Op<T>]) -> Vec<Observation<T>>
where
    T: Clone,
    Q: Queue<T>,
{
    ops.iter()
        .map(|op| match op {
            Op::Enqueue(value) => Observation::Enqueued(queue.enqueue(value.clone())),
            Op::Dequeue => Observation::Dequeued(queue.dequeue()),
            Op::Peek => Observation::Peeked(queue.peek().cloned()),
            Op::IsEmpty => Observation::IsEmpty(queue.is_empty()),
        })
        .collect()
}

/// Generates interleaved op sequences. Enqueues are weighted slightly heavier so that queues
/// regularly grow past a handful of elements before draining.
pub fn arb_ops(max_len: usize) -> impl Strategy<Value = Vec<Op<i32>>> {
    let op = prop_oneof![
        3 => any::<i32>().prop_map(Op::Enqueue),
        2 => Just(Op::Dequeue),
        1 => Just(Op::Peek),
        1 => Just(Op::IsEmpty),
    ];
    collection::vec(op, 0..max_len)
}
