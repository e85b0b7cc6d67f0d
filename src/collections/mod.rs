//! Double-ended queue collections.
//!
//! # Purpose
//! Both deques here implement the same [`Deque`](traits::Deque) contract with different storage:
//! [`RingDeque`] keeps a fixed number of slots in a ring buffer, while [`LinkedDeque`] allocates a
//! node per element and grows without limit. Writing both side by side shows what each storage
//! strategy costs and what it guarantees.
//!
//! # Errors
//! Operations that can fail return a [`Result`] with a small, strongly typed error:
//! [`Underflow`] for reads and removals on an empty deque and [`CapacityExceeded`] for pushes into a
//! full [`RingDeque`]. [`DequeError`] joins the two for callers that want a single error type.

#[cfg(feature = "circ")]
pub mod circ;
#[cfg(feature = "linked")]
pub mod linked;
#[cfg(feature = "traits")]
pub mod traits;

#[cfg(feature = "circ")]
#[doc(inline)]
pub use circ::RingDeque;
#[cfg(feature = "linked")]
#[doc(inline)]
pub use linked::LinkedDeque;
#[cfg(feature = "traits")]
#[doc(inline)]
pub use traits::Deque;

#[doc(inline)]
pub use crate::util::error::{CapacityExceeded, DequeError, Underflow};
