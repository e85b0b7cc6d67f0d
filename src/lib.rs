//! This crate is a small collections library built around one contract: the double-ended queue.
//!
//! # Purpose
//! A deque is the simplest container with invariants worth getting right. Elements enter and
//! leave at both ends, the front and back can coincide, and a bounded deque has to tell "empty"
//! apart from "full" even though both can leave its cursors in the same place. This crate
//! implements the contract twice, once over a fixed ring buffer and once over a chain of
//! heap-allocated nodes, so that the two can be tested against each other and against
//! [`VecDeque`](std::collections::VecDeque).
//!
//! # Method
//! Both collections manage their memory by hand: [`RingDeque`](collections::RingDeque) tracks
//! which slots of an uninitialized buffer hold values, and [`LinkedDeque`](collections::LinkedDeque)
//! owns raw node pointers that it allocates and frees itself. All `unsafe` is confined to those
//! two modules and every block states the invariant it relies on.
//!
//! # Error Handling
//! Nothing in this crate panics or exits on an empty or full deque. Failing operations return a
//! [`Result`] holding a zero or small sized error struct, each implementing
//! [`Error`](std::error::Error). The only unrecoverable condition is the allocator itself failing
//! while pushing onto a [`LinkedDeque`](collections::LinkedDeque), which aborts the same way
//! [`Box::new`] does.
//!
//! # Concurrency
//! None of the collections are thread safe. [`LinkedDeque`](collections::LinkedDeque) is neither
//! [`Send`] nor [`Sync`].
//!
//! # Features
//! - `circ`: [`RingDeque`](collections::RingDeque), the bounded ring-buffer deque.
//! - `linked`: [`LinkedDeque`](collections::LinkedDeque), the unbounded linked deque.
//! - `traits`: the shared [`Deque`](collections::Deque) trait.
//! - `demo`: the `deque-demo` binary, which replays the deque scenarios on the terminal.

// #![warn(missing_docs)]
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;

#[cfg(feature = "collections")]
pub(crate) mod util;
