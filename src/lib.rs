//! This crate is a small collection of FIFO queues, written to compare two ways of building the same
//! abstraction.
//!
//! # Purpose
//! A queue is about the simplest collection there is, which makes it a good place to look at how
//! the choice of backing storage changes the cost of each operation. Both queues here implement the
//! [`Queue`](collections::traits::Queue) trait and can be swapped for one another at the call site.
//!
//! - [`ArrayQueue`](collections::queue::ArrayQueue) keeps everything in one ordered sequence.
//!   Dequeuing shifts every remaining element, so it is `O(n)`. It is the baseline.
//! - [`StackPairQueue`](collections::queue::StackPairQueue) keeps an incoming and an outgoing stack
//!   and only moves elements between them when the outgoing one runs dry. Every element is moved
//!   at most once, so dequeuing is `O(1)` amortized.
//!
//! # Error Handling
//! Taking from an empty queue isn't an error, it's just an empty queue. All of the primary methods
//! return an [`Option`] and nothing panics on an empty queue. For call sites that would rather use
//! `?`, the `try_*` methods on [`Queue`](collections::traits::Queue) convert the empty case into
//! [`EmptyQueue`](collections::traits::EmptyQueue), a ZST that implements
//! [`Error`](std::error::Error).
//!
//! # Dependencies
//! The queues are backed by [`Vec`]. The only runtime dependency is `derive_more`, for the derive
//! macros that remove some very repetitive programming.
//!
//! # Features
//! Each queue is gated behind its own feature (`array` and `stack-pair`), both enabled by default
//! through `queues-all`. [`AnyQueue`](collections::queue::AnyQueue) needs both.

#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

pub(crate) mod util;
