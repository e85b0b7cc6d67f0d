use std::iter::FusedIterator;
use std::marker::PhantomData;

use DequeState::*;

use super::{DequeContents, DequeState, LinkedDeque, NodePtr};

#[derive(Clone, Copy)]
enum End {
    Front,
    Back,
}

impl<T> DequeState<T> {
    /// Treats the state as a view over part of a chain, detaches the node at `end` from the view
    /// and returns it. The nodes themselves are never touched, so the chain stays intact for the
    /// deque that owns it.
    fn step(&mut self, end: End) -> Option<NodePtr<T>> {
        let Occupied(DequeContents { len, head, tail }) = self else {
            return None;
        };

        let (node, following, cursor) = match end {
            End::Front => (*head, *head.next(), head),
            End::Back => (*tail, *tail.prev(), tail),
        };

        match len.decremented().zip(following) {
            Some((new_len, new_end)) => {
                *cursor = new_end;
                *len = new_len;
            },
            None => *self = Empty,
        }

        Some(node)
    }
}

impl<T> IntoIterator for LinkedDeque<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            deque: self,
        }
    }
}

/// An iterator that moves elements out of a [`LinkedDeque`], releasing each node as it goes.
///
/// Elements that haven't been yielded are dropped along with the iterator.
pub struct IntoIter<T> {
    pub(crate) deque: LinkedDeque<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.deque.pop_front().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.deque.pop_back().ok()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.deque.len()
    }
}

impl<'a, T> IntoIterator for &'a mut LinkedDeque<T> {
    type Item = &'a mut T;

    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        IterMut {
            view: self.state.clone(),
            _phantom: PhantomData,
        }
    }
}

/// An iterator over mutable references to the elements of a [`LinkedDeque`], from front to back.
pub struct IterMut<'a, T> {
    // A copy of the deque's endpoints that shrinks from both ends as elements are yielded.
    pub(crate) view: DequeState<T>,
    pub(crate) _phantom: PhantomData<&'a mut T>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.view.step(End::Front).map(|mut node| node.value_mut())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.view.step(End::Back).map(|mut node| node.value_mut())
    }
}

impl<T> FusedIterator for IterMut<'_, T> {}

impl<T> ExactSizeIterator for IterMut<'_, T> {
    fn len(&self) -> usize {
        self.view.len()
    }
}

impl<'a, T> IntoIterator for &'a LinkedDeque<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            view: self.state.clone(),
            _phantom: PhantomData,
        }
    }
}

/// An iterator over references to the elements of a [`LinkedDeque`], from front to back.
pub struct Iter<'a, T> {
    pub(crate) view: DequeState<T>,
    pub(crate) _phantom: PhantomData<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.view.step(End::Front).map(|node| node.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.view.step(End::Back).map(|node| node.value())
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.view.len()
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            view: self.view.clone(),
            _phantom: PhantomData,
        }
    }
}
