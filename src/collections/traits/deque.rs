use crate::util::error::{CapacityExceeded, Underflow};

/// A double-ended queue: an ordered sequence that can only be modified at its front and back.
///
/// Implementations differ in how they store their elements, but all of them uphold the same
/// contract:
/// - `len` always equals the number of pushes minus the number of pops that succeeded.
/// - Iterating from front to back yields elements in the order implied by the history of pushes
///   and pops, with `push_front` and `pop_front` behaving as a stack at the front and the same at
///   the back.
/// - A failed operation leaves the deque exactly as it was.
///
/// None of the implementations in this crate are thread safe, nor do they attempt to be.
pub trait Deque<T> {
    /// A borrowed iterator over the deque, from front to back.
    type Iter<'a>: DoubleEndedIterator<Item = &'a T> + ExactSizeIterator
    where
        Self: 'a,
        T: 'a;

    /// Returns the number of elements in the deque.
    fn len(&self) -> usize;

    /// Returns true if the deque contains no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if the deque can't accept any more elements. Unbounded deques are never full.
    fn is_full(&self) -> bool;

    /// Adds `value` as the new front element, returning an [`Err`] if the deque is full.
    fn push_front(&mut self, value: T) -> Result<(), CapacityExceeded>;

    /// Adds `value` as the new back element, returning an [`Err`] if the deque is full.
    fn push_back(&mut self, value: T) -> Result<(), CapacityExceeded>;

    /// Removes and returns the front element, returning an [`Err`] if the deque is empty.
    fn pop_front(&mut self) -> Result<T, Underflow>;

    /// Removes and returns the back element, returning an [`Err`] if the deque is empty.
    fn pop_back(&mut self) -> Result<T, Underflow>;

    /// Returns a reference to the front element, returning an [`Err`] if the deque is empty.
    fn front(&self) -> Result<&T, Underflow>;

    /// Returns a reference to the back element, returning an [`Err`] if the deque is empty.
    fn back(&self) -> Result<&T, Underflow>;

    /// Drops every element in the deque, leaving it empty.
    fn clear(&mut self);

    /// Returns a borrowed iterator over the deque, from front to back.
    fn iter<'a>(&'a self) -> Self::Iter<'a>;

    /// Clones the elements of the deque into a [`Vec`], from front to back. The deque itself isn't
    /// modified, so this can be called any number of times.
    fn to_sequence(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}
