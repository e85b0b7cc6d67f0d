use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::mem;

use derive_more::IsVariant;

use super::{Iter, IterMut, Length, Node, NodePtr, ONE};
use crate::collections::traits::Deque;
#[doc(inline)]
pub use crate::util::error::{CapacityExceeded, Underflow};
use crate::util::fmt::{self as util_fmt, DebugIter};

/// A double-ended queue with no fixed capacity, made of nodes linked in both directions.
///
/// Each element lives in its own heap allocation, which is created when the element is pushed and
/// released when it is popped, or when the LinkedDeque is cleared or dropped. Pushing never fails,
/// unless the allocator itself does, in which case the process is aborted the same way it would be
/// for [`Box::new`].
///
/// LinkedDeque is neither [`Send`] nor [`Sync`]. It is intended for single-threaded use only.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the LinkedDeque.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `push_front/back` | `O(1)` |
/// | `pop_front/back` | `O(1)` |
/// | `append` | `O(1)` |
/// | `clear` | `O(n)` |
/// | `to_sequence` | `O(n)` |
pub struct LinkedDeque<T> {
    pub(crate) state: DequeState<T>,
    pub(crate) _phantom: PhantomData<T>,
}

#[derive(IsVariant)]
pub(crate) enum DequeState<T> {
    Empty,
    Occupied(DequeContents<T>),
}

use DequeState::*;

pub(crate) struct DequeContents<T> {
    pub len: Length,
    pub head: NodePtr<T>,
    pub tail: NodePtr<T>,
}

impl<T> LinkedDeque<T> {
    /// Creates a new LinkedDeque with no elements. Nothing is allocated until the first push.
    ///
    /// # Examples
    /// ```
    /// # use deque_lib::collections::LinkedDeque;
    /// let deque: LinkedDeque<i32> = LinkedDeque::new();
    /// assert!(deque.is_empty());
    /// ```
    pub const fn new() -> LinkedDeque<T> {
        LinkedDeque {
            state: Empty,
            _phantom: PhantomData,
        }
    }

    /// Returns the length of the LinkedDeque.
    pub const fn len(&self) -> usize {
        self.state.len()
    }

    /// Returns true if the LinkedDeque contains no elements.
    pub const fn is_empty(&self) -> bool {
        matches!(self.state, Empty)
    }

    /// Returns a reference to the first element in the LinkedDeque, if it exists.
    pub fn front(&self) -> Result<&T, Underflow> {
        match &self.state {
            Empty => Err(Underflow),
            Occupied(DequeContents { head, .. }) => Ok(head.value()),
        }
    }

    /// Returns a mutable reference to the first element in the LinkedDeque, if it exists.
    pub fn front_mut(&mut self) -> Result<&mut T, Underflow> {
        match &mut self.state {
            Empty => Err(Underflow),
            Occupied(DequeContents { head, .. }) => Ok(head.value_mut()),
        }
    }

    /// Returns a reference to the last element in the LinkedDeque, if it exists.
    pub fn back(&self) -> Result<&T, Underflow> {
        match &self.state {
            Empty => Err(Underflow),
            Occupied(DequeContents { tail, .. }) => Ok(tail.value()),
        }
    }

    /// Returns a mutable reference to the last element in the LinkedDeque, if it exists.
    pub fn back_mut(&mut self) -> Result<&mut T, Underflow> {
        match &mut self.state {
            Empty => Err(Underflow),
            Occupied(DequeContents { tail, .. }) => Ok(tail.value_mut()),
        }
    }

    /// Add the provided element to the front of the LinkedDeque.
    ///
    /// # Examples
    /// ```
    /// # use deque_lib::collections::LinkedDeque;
    /// let mut deque = LinkedDeque::new();
    /// deque.push_front(2);
    /// deque.push_front(1);
    /// assert_eq!(deque.to_sequence(), [1, 2]);
    /// ```
    pub fn push_front(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = DequeState::single(value),
            Occupied(contents) => contents.push_front(value),
        }
    }

    /// Add the provided element to the back of the LinkedDeque.
    pub fn push_back(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = DequeState::single(value),
            Occupied(contents) => contents.push_back(value),
        }
    }

    /// Removes the first element from the LinkedDeque and returns it, if the LinkedDeque isn't
    /// empty.
    pub fn pop_front(&mut self) -> Result<T, Underflow> {
        match &mut self.state {
            Empty => Err(Underflow),
            Occupied(DequeContents { len, head, .. }) => {
                // SAFETY: The head is owned by this deque and is replaced below, so the pointer is
                // never used again.
                let node = unsafe { head.take_node() };

                match (len.decremented(), node.next) {
                    (Some(new_len), Some(new_head)) => {
                        *new_head.prev_mut() = None;
                        *head = new_head;
                        *len = new_len;
                    },
                    // The removed node was the only one, so the tail pointed to it too.
                    _ => self.state = Empty,
                }

                Ok(node.value)
            },
        }
    }

    /// Removes the last element from the LinkedDeque and returns it, if the LinkedDeque isn't
    /// empty.
    pub fn pop_back(&mut self) -> Result<T, Underflow> {
        match &mut self.state {
            Empty => Err(Underflow),
            Occupied(DequeContents { len, tail, .. }) => {
                // SAFETY: The tail is owned by this deque and is replaced below, so the pointer is
                // never used again.
                let node = unsafe { tail.take_node() };

                match (len.decremented(), node.prev) {
                    (Some(new_len), Some(new_tail)) => {
                        *new_tail.next_mut() = None;
                        *tail = new_tail;
                        *len = new_len;
                    },
                    _ => self.state = Empty,
                }

                Ok(node.value)
            },
        }
    }

    /// Moves all elements from `other` onto the back of this LinkedDeque, by linking the two
    /// chains together.
    ///
    /// # Examples
    /// ```
    /// # use deque_lib::collections::LinkedDeque;
    /// let mut front: LinkedDeque<_> = (1..=2).collect();
    /// front.append((3..=4).collect());
    /// assert_eq!(front.to_sequence(), [1, 2, 3, 4]);
    /// ```
    pub fn append(&mut self, mut other: LinkedDeque<T>) {
        let Occupied(other_contents) = mem::take(&mut other.state) else {
            return;
        };

        match &mut self.state {
            Empty => self.state = Occupied(other_contents),
            Occupied(self_contents) => {
                *self_contents.tail.next_mut() = Some(other_contents.head);
                *other_contents.head.prev_mut() = Some(self_contents.tail);
                self_contents.tail = other_contents.tail;
                self_contents.len = self_contents.len.joined(other_contents.len);
            },
        }
    }

    /// Drops all elements in the LinkedDeque, from front to back, releasing every node.
    pub fn clear(&mut self) {
        while self.pop_front().is_ok() {}
    }

    /// Returns an iterator over mutable references to the elements of the LinkedDeque.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }

    /// Returns an iterator over references to the elements of the LinkedDeque, front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Clones the elements of the LinkedDeque into a [`Vec`], from front to back.
    pub fn to_sequence(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T> LinkedDeque<T> {
    #[allow(clippy::unwrap_used)]
    #[cfg(test)]
    pub(crate) fn verify_double_links(&self) {
        match &self.state {
            Empty => {},
            Occupied(DequeContents { len, head, tail }) => {
                assert!(head.prev().is_none());
                let mut count = 1;
                let mut curr = *head;
                while let Some(next) = curr.next() {
                    // UNWRAP: This needs to panic if prev is None.
                    assert!(next.prev().unwrap() == curr);
                    curr = *next;
                    count += 1;
                }
                assert!(*tail == curr);
                assert_eq!(count, len.get());
            },
        }
    }
}

impl<T> DequeContents<T> {
    pub fn push_front(&mut self, value: T) {
        self.len = self.len.incremented();

        let node = NodePtr::from_node(Node {
            value,
            prev: None,
            next: Some(self.head),
        });

        *self.head.prev_mut() = Some(node);
        self.head = node;
    }

    pub fn push_back(&mut self, value: T) {
        self.len = self.len.incremented();

        let node = NodePtr::from_node(Node {
            value,
            prev: Some(self.tail),
            next: None,
        });

        *self.tail.next_mut() = Some(node);
        self.tail = node;
    }

    pub fn wrap_one(value: T) -> DequeContents<T> {
        let node = NodePtr::from_node(Node {
            value,
            prev: None,
            next: None,
        });

        DequeContents {
            len: ONE,
            head: node,
            tail: node,
        }
    }
}

impl<T> DequeState<T> {
    pub fn single(value: T) -> DequeState<T> {
        Occupied(DequeContents::wrap_one(value))
    }

    pub const fn len(&self) -> usize {
        match self {
            Empty => 0,
            Occupied(DequeContents { len, .. }) => len.get(),
        }
    }
}

impl<T> Default for DequeState<T> {
    fn default() -> Self {
        Empty
    }
}

impl<T> Clone for DequeContents<T> {
    fn clone(&self) -> Self {
        DequeContents {
            len: self.len,
            head: self.head,
            tail: self.tail,
        }
    }
}

impl<T> Clone for DequeState<T> {
    fn clone(&self) -> Self {
        match self {
            Empty => Empty,
            Occupied(contents) => Occupied(contents.clone()),
        }
    }
}

impl<T> Deque<T> for LinkedDeque<T> {
    type Iter<'a>
        = Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    fn len(&self) -> usize {
        LinkedDeque::len(self)
    }

    fn is_full(&self) -> bool {
        false
    }

    fn push_front(&mut self, value: T) -> Result<(), CapacityExceeded> {
        LinkedDeque::push_front(self, value);
        Ok(())
    }

    fn push_back(&mut self, value: T) -> Result<(), CapacityExceeded> {
        LinkedDeque::push_back(self, value);
        Ok(())
    }

    fn pop_front(&mut self) -> Result<T, Underflow> {
        LinkedDeque::pop_front(self)
    }

    fn pop_back(&mut self) -> Result<T, Underflow> {
        LinkedDeque::pop_back(self)
    }

    fn front(&self) -> Result<&T, Underflow> {
        LinkedDeque::front(self)
    }

    fn back(&self) -> Result<&T, Underflow> {
        LinkedDeque::back(self)
    }

    fn clear(&mut self) {
        LinkedDeque::clear(self)
    }

    fn iter<'a>(&'a self) -> Iter<'a, T> {
        LinkedDeque::iter(self)
    }
}

impl<T> FromIterator<T> for LinkedDeque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = LinkedDeque::new();
        deque.extend(iter);
        deque
    }
}

impl<T> Extend<T> for LinkedDeque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> Default for LinkedDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedDeque<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for LinkedDeque<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedDeque<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedDeque<T> {}

impl<T: Hash> Hash for LinkedDeque<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for item in self.iter() {
            item.hash(state);
        }
    }
}

impl<T: Debug> Debug for LinkedDeque<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedDeque")
            .field("contents", &DebugIter(self.iter()))
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Display> Display for LinkedDeque<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        util_fmt::write_sequence(f, self.iter())
    }
}
