use derive_more::{Display, Error, From, IsVariant, TryInto};

/// Returned when an element is read or removed from a deque that contains no elements. The deque
/// is left unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Error)]
#[display("attempted to access an element of an empty deque")]
pub struct Underflow;

/// Returned when an element is pushed into a bounded deque that has already reached its
/// capacity. The deque is left unchanged and the rejected element is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Error)]
#[display("capacity of {cap} elements exceeded")]
pub struct CapacityExceeded {
    /// The capacity of the deque that rejected the element.
    pub cap: usize,
}

/// The union of all recoverable deque errors, for callers that mix pushes and pops behind a single
/// `?`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Error, From, TryInto, IsVariant)]
pub enum DequeError {
    /// See [`Underflow`].
    Underflow(Underflow),
    /// See [`CapacityExceeded`].
    CapacityExceeded(CapacityExceeded),
}
