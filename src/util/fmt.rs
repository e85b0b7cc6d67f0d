use std::fmt::{self, Debug, Display, Formatter};

/// Formats a clonable iterator as a debug list, so collections can show their contents without
/// collecting them first.
pub(crate) struct DebugIter<I>(pub I);

impl<I> Debug for DebugIter<I>
where
    I: Iterator + Clone,
    I::Item: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.clone()).finish()
    }
}

/// Writes the items front to back as `[a, b, c]`.
pub(crate) fn write_sequence<'a, T, I>(f: &mut Formatter<'_>, iter: I) -> fmt::Result
where
    T: Display + 'a,
    I: Iterator<Item = &'a T>,
{
    write!(f, "[")?;
    for (index, item) in iter.enumerate() {
        if index > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{item}")?;
    }
    write!(f, "]")
}
