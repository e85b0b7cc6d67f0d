use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem::MaybeUninit;
use std::ops::Range;

use super::{Iter, IterMut};
use crate::collections::traits::Deque;
#[doc(inline)]
pub use crate::util::error::{CapacityExceeded, Underflow};
use crate::util::fmt::{self as util_fmt, DebugIter};

/// A double-ended queue with a fixed capacity, backed by a ring buffer.
///
/// Elements occupy a contiguous run of slots starting at the front cursor, wrapping around from the
/// last slot to the first. The number of elements is tracked explicitly, rather than inferred from
/// the cursors, so an empty RingDeque can never be mistaken for a full one.
///
/// Pushing into a full RingDeque returns a [`CapacityExceeded`] error and leaves it unchanged,
/// while reading from or popping an empty one returns an [`Underflow`] error.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the RingDeque.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `push_front/back` | `O(1)` |
/// | `pop_front/back` | `O(1)` |
/// | `as_slices` | `O(1)` |
/// | `clear` | `O(n)` |
/// | `to_sequence` | `O(n)` |
pub struct RingDeque<T> {
    pub(crate) buf: Box<[MaybeUninit<T>]>,
    pub(crate) head: usize,
    pub(crate) len: usize,
}

impl<T> RingDeque<T> {
    /// Creates a new RingDeque that can hold at most `cap` elements. All of the memory required is
    /// allocated upfront, and no further allocation happens for the lifetime of the RingDeque.
    ///
    /// A capacity of 0 is allowed, producing a RingDeque that is both empty and full.
    ///
    /// # Examples
    /// ```
    /// # use deque_lib::collections::RingDeque;
    /// let deque: RingDeque<i32> = RingDeque::with_cap(5);
    /// assert_eq!(deque.cap(), 5);
    /// assert!(deque.is_empty());
    /// ```
    pub fn with_cap(cap: usize) -> RingDeque<T> {
        RingDeque {
            buf: Box::new_uninit_slice(cap),
            head: 0,
            len: 0,
        }
    }

    /// Returns the number of elements in the RingDeque.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns the maximum number of elements that the RingDeque can hold.
    pub fn cap(&self) -> usize {
        self.buf.len()
    }

    /// Returns the number of elements that can still be pushed before the RingDeque is full.
    pub fn remaining(&self) -> usize {
        self.cap() - self.len
    }

    /// Returns true if the RingDeque contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if the RingDeque has reached its capacity.
    pub fn is_full(&self) -> bool {
        self.len == self.cap()
    }

    /// Adds the provided element to the front of the RingDeque, moving the front cursor back by
    /// one slot.
    ///
    /// # Examples
    /// ```
    /// # use deque_lib::collections::RingDeque;
    /// let mut deque = RingDeque::with_cap(2);
    /// assert!(deque.push_front(1).is_ok());
    /// assert!(deque.push_front(2).is_ok());
    /// assert!(deque.push_front(3).is_err());
    /// assert_eq!(deque.to_sequence(), [2, 1]);
    /// ```
    pub fn push_front(&mut self, value: T) -> Result<(), CapacityExceeded> {
        self.check_space()?;

        self.head = match self.head {
            0 => self.cap() - 1,
            head => head - 1,
        };
        self.buf[self.head].write(value);
        self.len += 1;
        Ok(())
    }

    /// Adds the provided element to the back of the RingDeque, in the slot after the current back
    /// element.
    ///
    /// # Examples
    /// ```
    /// # use deque_lib::collections::RingDeque;
    /// let mut deque = RingDeque::with_cap(1);
    /// assert!(deque.push_back(1).is_ok());
    /// assert_eq!(deque.push_back(2).unwrap_err().cap, 1);
    /// ```
    pub fn push_back(&mut self, value: T) -> Result<(), CapacityExceeded> {
        self.check_space()?;

        let index = self.physical_index(self.len);
        self.buf[index].write(value);
        self.len += 1;
        Ok(())
    }

    /// Removes the first element from the RingDeque and returns it, if the RingDeque isn't empty.
    pub fn pop_front(&mut self) -> Result<T, Underflow> {
        if self.is_empty() {
            return Err(Underflow);
        }

        // SAFETY: The RingDeque isn't empty, so the slot at head is initialized. The cursor is
        // moved past it below, so the value is never read again.
        let value = unsafe { self.buf[self.head].assume_init_read() };
        self.len -= 1;
        self.head = match self.len {
            0 => 0,
            _ => self.physical_index(1),
        };
        Ok(value)
    }

    /// Removes the last element from the RingDeque and returns it, if the RingDeque isn't empty.
    pub fn pop_back(&mut self) -> Result<T, Underflow> {
        if self.is_empty() {
            return Err(Underflow);
        }

        self.len -= 1;
        let index = self.physical_index(self.len);
        // SAFETY: The slot was the last initialized one before len was decremented, and is now
        // outside of the initialized range, so the value is never read again.
        let value = unsafe { self.buf[index].assume_init_read() };
        if self.len == 0 {
            self.head = 0;
        }
        Ok(value)
    }

    /// Returns a reference to the first element in the RingDeque, if it exists.
    pub fn front(&self) -> Result<&T, Underflow> {
        if self.is_empty() {
            return Err(Underflow);
        }
        // SAFETY: The RingDeque isn't empty, so the slot at head is initialized.
        Ok(unsafe { self.buf[self.head].assume_init_ref() })
    }

    /// Returns a mutable reference to the first element in the RingDeque, if it exists.
    pub fn front_mut(&mut self) -> Result<&mut T, Underflow> {
        if self.is_empty() {
            return Err(Underflow);
        }
        // SAFETY: The RingDeque isn't empty, so the slot at head is initialized.
        Ok(unsafe { self.buf[self.head].assume_init_mut() })
    }

    /// Returns a reference to the last element in the RingDeque, if it exists.
    pub fn back(&self) -> Result<&T, Underflow> {
        if self.is_empty() {
            return Err(Underflow);
        }
        let index = self.physical_index(self.len - 1);
        // SAFETY: The offset is less than len, so the slot is initialized.
        Ok(unsafe { self.buf[index].assume_init_ref() })
    }

    /// Returns a mutable reference to the last element in the RingDeque, if it exists.
    pub fn back_mut(&mut self) -> Result<&mut T, Underflow> {
        if self.is_empty() {
            return Err(Underflow);
        }
        let index = self.physical_index(self.len - 1);
        // SAFETY: The offset is less than len, so the slot is initialized.
        Ok(unsafe { self.buf[index].assume_init_mut() })
    }

    /// Drops all elements in the RingDeque, from front to back. The capacity is unchanged.
    pub fn clear(&mut self) {
        while self.pop_front().is_ok() {}
    }

    /// Pushes every item produced by `iter` onto the back of the RingDeque, stopping at the first
    /// item that doesn't fit. Items pushed before the error remain in the RingDeque.
    pub fn try_extend<I: IntoIterator<Item = T>>(&mut self, iter: I) -> Result<(), CapacityExceeded> {
        for value in iter {
            self.push_back(value)?;
        }
        Ok(())
    }

    /// Returns the elements of the RingDeque as two slices, which together hold every element from
    /// front to back. The second slice is only non-empty if the elements wrap around the end of
    /// the buffer.
    ///
    /// # Examples
    /// ```
    /// # use deque_lib::collections::RingDeque;
    /// let mut deque = RingDeque::with_cap(3);
    /// deque.push_back(2).unwrap();
    /// deque.push_back(3).unwrap();
    /// deque.push_front(1).unwrap();
    /// assert_eq!(deque.as_slices(), (&[1][..], &[2, 3][..]));
    /// ```
    pub fn as_slices(&self) -> (&[T], &[T]) {
        let (first, second) = self.occupied_ranges();
        // SAFETY: The occupied ranges cover exactly the initialized slots.
        unsafe {
            (
                assume_init_slice(&self.buf[first]),
                assume_init_slice(&self.buf[second]),
            )
        }
    }

    /// Returns the elements of the RingDeque as two mutable slices. See
    /// [`as_slices`](RingDeque::as_slices).
    pub fn as_mut_slices(&mut self) -> (&mut [T], &mut [T]) {
        let (first, second) = self.occupied_ranges();
        // The first range always starts at head and the second always starts at 0 and ends before
        // head, so splitting at head makes them disjoint.
        let (before_head, from_head) = self.buf.split_at_mut(self.head);
        let first = &mut from_head[..first.len()];
        let second = &mut before_head[second];
        // SAFETY: The occupied ranges cover exactly the initialized slots.
        unsafe { (assume_init_slice_mut(first), assume_init_slice_mut(second)) }
    }

    /// Returns an iterator over references to the elements of the RingDeque, front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Returns an iterator over mutable references to the elements of the RingDeque.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }

    /// Clones the elements of the RingDeque into a [`Vec`], from front to back.
    pub fn to_sequence(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T> RingDeque<T> {
    pub(crate) fn check_space(&self) -> Result<(), CapacityExceeded> {
        if self.is_full() {
            Err(CapacityExceeded { cap: self.cap() })
        } else {
            Ok(())
        }
    }

    /// Maps an `offset` from the front of the RingDeque to an index into the buffer. `offset` must
    /// be less than the capacity.
    pub(crate) fn physical_index(&self, offset: usize) -> usize {
        // Written so that head + offset is never computed, which could overflow for ZSTs.
        let to_end = self.cap() - self.head;
        if offset < to_end {
            self.head + offset
        } else {
            offset - to_end
        }
    }

    /// Returns the ranges of initialized slots, in front to back order.
    pub(crate) fn occupied_ranges(&self) -> (Range<usize>, Range<usize>) {
        let to_end = self.cap() - self.head;
        if self.len <= to_end {
            (self.head..(self.head + self.len), 0..0)
        } else {
            (self.head..self.cap(), 0..(self.len - to_end))
        }
    }
}

/// # Safety
/// Every element of `slice` must be initialized.
unsafe fn assume_init_slice<T>(slice: &[MaybeUninit<T>]) -> &[T] {
    // SAFETY: MaybeUninit<T> has the same layout as T, and the caller guarantees initialization.
    unsafe { &*(slice as *const [MaybeUninit<T>] as *const [T]) }
}

/// # Safety
/// Every element of `slice` must be initialized.
unsafe fn assume_init_slice_mut<T>(slice: &mut [MaybeUninit<T>]) -> &mut [T] {
    // SAFETY: MaybeUninit<T> has the same layout as T, and the caller guarantees initialization.
    unsafe { &mut *(slice as *mut [MaybeUninit<T>] as *mut [T]) }
}

impl<T> Deque<T> for RingDeque<T> {
    type Iter<'a>
        = Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    fn len(&self) -> usize {
        RingDeque::len(self)
    }

    fn is_full(&self) -> bool {
        RingDeque::is_full(self)
    }

    fn push_front(&mut self, value: T) -> Result<(), CapacityExceeded> {
        RingDeque::push_front(self, value)
    }

    fn push_back(&mut self, value: T) -> Result<(), CapacityExceeded> {
        RingDeque::push_back(self, value)
    }

    fn pop_front(&mut self) -> Result<T, Underflow> {
        RingDeque::pop_front(self)
    }

    fn pop_back(&mut self) -> Result<T, Underflow> {
        RingDeque::pop_back(self)
    }

    fn front(&self) -> Result<&T, Underflow> {
        RingDeque::front(self)
    }

    fn back(&self) -> Result<&T, Underflow> {
        RingDeque::back(self)
    }

    fn clear(&mut self) {
        RingDeque::clear(self)
    }

    fn iter<'a>(&'a self) -> Iter<'a, T> {
        RingDeque::iter(self)
    }
}

impl<T> Drop for RingDeque<T> {
    fn drop(&mut self) {
        // The buffer itself never drops its slots, so every initialized one is dropped here.
        self.clear();
    }
}

impl<T: Clone> Clone for RingDeque<T> {
    fn clone(&self) -> Self {
        let mut clone = RingDeque::with_cap(self.cap());
        for (slot, value) in clone.buf.iter_mut().zip(self.iter()) {
            slot.write(value.clone());
            // Incremented per element so that a panicking clone still drops what was written.
            clone.len += 1;
        }
        clone
    }
}

impl<T: PartialEq> PartialEq for RingDeque<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for RingDeque<T> {}

impl<T: Hash> Hash for RingDeque<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for item in self.iter() {
            item.hash(state);
        }
    }
}

impl<T: Debug> Debug for RingDeque<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("RingDeque")
            .field("contents", &DebugIter(self.iter()))
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Display> Display for RingDeque<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        util_fmt::write_sequence(f, self.iter())
    }
}
