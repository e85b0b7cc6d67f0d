use std::num::NonZeroUsize;

/// The length of a non-empty chain of nodes.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub(crate) struct Length(pub NonZeroUsize);

impl Length {
    pub const fn get(self) -> usize {
        self.0.get()
    }

    /// Returns the length after removing one node, or None if no nodes would remain.
    pub const fn decremented(self) -> Option<Length> {
        match NonZeroUsize::new(self.0.get() - 1) {
            Some(res) => Some(Length(res)),
            None => None,
        }
    }

    pub const fn incremented(self) -> Length {
        // Every node is a separate allocation of at least two pointers, so the number of live nodes
        // can't reach usize::MAX.
        Length(self.0.saturating_add(1))
    }

    pub const fn joined(self, other: Length) -> Length {
        Length(self.0.saturating_add(other.get()))
    }
}

pub(crate) const ONE: Length = Length(NonZeroUsize::MIN);
