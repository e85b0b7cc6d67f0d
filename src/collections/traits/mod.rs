//! Traits shared between collections. Currently this is only [`Deque`], the contract implemented by
//! both [`RingDeque`](super::circ::RingDeque) and [`LinkedDeque`](super::linked::LinkedDeque).

mod deque;
mod tests;

pub use deque::*;
