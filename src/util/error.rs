use derive_more::{Display, Error};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Attempted to take an element from an empty queue!")]
pub struct EmptyQueue;
