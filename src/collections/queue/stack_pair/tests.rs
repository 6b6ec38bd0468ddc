#![cfg(test)]

use std::hash::{BuildHasher, RandomState};
use std::iter;

use proptest::prelude::*;

use super::*;
use crate::util::alloc::CountedDrop;
use crate::util::harness::{arb_ops, Op};

#[test]
fn test_transfer_on_demand() {
    let mut queue = StackPairQueue::new();
    queue.enqueue('A');
    queue.enqueue('B');
    assert_eq!(queue.incoming, ['A', 'B']);
    assert!(queue.outgoing.is_empty(), "Enqueue should never touch outgoing.");

    assert_eq!(queue.peek(), Some(&'A'));
    assert!(queue.incoming.is_empty());
    assert_eq!(
        queue.outgoing,
        ['B', 'A'],
        "Peek should transfer incoming in reverse, leaving the front on top."
    );

    assert_eq!(queue.peek(), Some(&'A'));
    assert_eq!(queue.outgoing, ['B', 'A'], "A second peek shouldn't transfer again.");

    assert_eq!(queue.dequeue(), Some('A'));
    assert_eq!(queue.outgoing, ['B']);

    queue.enqueue('C');
    assert_eq!(queue.incoming, ['C']);

    assert_eq!(queue.dequeue(), Some('B'));
    assert!(queue.outgoing.is_empty());
    assert_eq!(
        queue.incoming,
        ['C'],
        "C shouldn't move until outgoing is asked for the front while empty."
    );

    assert_eq!(queue.dequeue(), Some('C'));
    assert!(queue.is_empty());
    assert_eq!(queue.dequeue(), None);
}

#[test]
fn test_is_empty_checks_both_stacks() {
    let mut queue = StackPairQueue::new();
    assert!(queue.is_empty());

    queue.enqueue(1);
    assert!(!queue.is_empty(), "Elements only in incoming should count.");

    queue.transfer_if_drained();
    assert!(queue.incoming.is_empty());
    assert!(!queue.is_empty(), "Elements only in outgoing should count.");
    assert_eq!(queue.len(), 1);
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new(0);
    let mut queue: StackPairQueue<_> = iter::repeat_with(|| counter.clone()).take(6).collect();

    drop(queue.dequeue());
    queue.extend(iter::repeat_with(|| counter.clone()).take(4));
    assert_eq!(queue.outgoing.len(), 5);
    assert_eq!(queue.incoming.len(), 4);

    drop(queue);
    assert_eq!(
        counter.count(),
        10,
        "Elements in both stacks should be dropped exactly once."
    );

    let counter = CountedDrop::new(0);
    let mut queue: StackPairQueue<_> = iter::repeat_with(|| counter.clone()).take(3).collect();
    queue.peek();
    queue.enqueue(counter.clone());
    queue.clear();
    assert_eq!(counter.count(), 4, "Clearing should drop every element.");
    assert!(queue.is_empty());
}

#[test]
fn test_iterators_span_both_stacks() {
    let mut queue: StackPairQueue<_> = (0_usize..4).collect();
    queue.dequeue();
    queue.extend(4..6);

    assert!(queue.iter().copied().eq(1..6));
    assert!(queue.iter().rev().copied().eq((1..6).rev()));
    assert_eq!((&queue).into_iter().len(), 5);
    assert!(queue.outgoing.len() == 3, "Iteration shouldn't transfer anything.");

    let mut iter = queue.into_iter();
    assert_eq!(iter.len(), 5);
    assert_eq!(iter.next(), Some(1));
    assert_eq!(iter.next_back(), Some(5));
    assert_eq!(iter.next_back(), Some(4));
    assert_eq!(iter.next_back(), Some(3));
    assert_eq!(iter.next(), Some(2));
    assert_eq!(iter.next(), None);

    let counter = CountedDrop::new(0);
    let mut queue: StackPairQueue<_> = iter::repeat_with(|| counter.clone()).take(4).collect();
    queue.peek();
    queue.enqueue(counter.clone());
    drop(queue.into_iter());
    assert_eq!(
        counter.count(),
        5,
        "Dropping an owned iterator should drop all elements."
    );
}

#[test]
fn test_equality_ignores_split() {
    let untouched: StackPairQueue<_> = (1_u8..=3).collect();

    let mut split = StackPairQueue::new();
    split.enqueue(1_u8);
    split.enqueue(2);
    split.peek();
    split.enqueue(3);
    assert_eq!(split.outgoing, [2, 1]);
    assert_eq!(split.incoming, [3]);

    assert_eq!(untouched, split, "Queues with the same FIFO order should be equal.");

    let state = RandomState::new();
    assert_eq!(
        state.hash_one(&untouched),
        state.hash_one(&split),
        "Equal queues should produce the same hash."
    );

    split.dequeue();
    assert_ne!(untouched, split);
}

#[test]
fn test_formatting() {
    let mut queue: StackPairQueue<_> = [1, 2].into_iter().collect();
    queue.peek();
    queue.enqueue(3);

    assert_eq!(queue.to_string(), "[1, 2, 3]");
    assert_eq!(
        format!("{queue:?}"),
        "StackPairQueue { incoming: [3], outgoing: [2, 1], len: 3 }"
    );
}

proptest! {
    #[test]
    fn prop_each_element_moves_at_most_once(ops in arb_ops(400)) {
        let mut queue = StackPairQueue::new();
        let mut moves = 0;
        let mut calls = 0;

        for op in ops.into_iter() {
            if matches!(op, Op::Dequeue | Op::Peek) && queue.outgoing.is_empty() {
                moves += queue.incoming.len();
            }

            match op {
                Op::Enqueue(value) => {
                    calls += 1;
                    queue.enqueue(value);
                },
                Op::Dequeue => {
                    calls += 1;
                    queue.dequeue();
                },
                Op::Peek => {
                    queue.peek();
                },
                Op::IsEmpty => {
                    queue.is_empty();
                },
            }

            prop_assert!(
                moves <= calls,
                "Moved {} elements over {} enqueue/dequeue calls.",
                moves,
                calls
            );
        }
    }
}
