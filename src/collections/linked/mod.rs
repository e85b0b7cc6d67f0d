//! Linked collection types. Currently this is only [`LinkedDeque`], an unbounded double-ended
//! queue.

pub mod deque;

#[doc(inline)]
pub use deque::LinkedDeque;
