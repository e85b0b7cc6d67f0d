mod iter;
mod length;
mod linked_deque;
mod node;
mod tests;

pub use iter::*;
pub(crate) use length::*;
pub use linked_deque::*;
pub(crate) use node::*;
