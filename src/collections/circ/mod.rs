//! A module containing [`RingDeque`] and associated types.
//!
//! The other included types are for iteration: [`IntoIter`] for owned iteration and [`Iter`] /
//! [`IterMut`] for borrowed iteration, all of which run from front to back.
//!
//! [`RingDeque`] is also re-exported under the parent module.

mod iter;
mod ring_deque;

pub use iter::*;
pub use ring_deque::*;
