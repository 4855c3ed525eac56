use core::ptr::NonNull;

use crate::error::Result;

/// The list contract shared by every chain in this crate.
///
/// Index-based operations are bounds-checked before anything is touched, so a
/// call that returns an error leaves the chain exactly as it was.
pub trait Chain {
    /// The element type stored in the chain.
    type Item;

    /// Add an element after the current tail.
    fn append(&mut self, value: Self::Item);

    /// Add an element before the current head.
    fn prepend(&mut self, value: Self::Item);

    /// Insert an element so that it ends up at `index`.
    ///
    /// Valid for `index <= len`; anything larger is `OutOfRange`.
    fn insert_at(&mut self, index: usize, value: Self::Item) -> Result<()>;

    /// Remove and return the head element.
    fn delete_first(&mut self) -> Result<Self::Item>;

    /// Remove and return the tail element.
    fn delete_last(&mut self) -> Result<Self::Item>;

    /// Remove and return the element at `index`, valid for `index < len`.
    fn delete_at(&mut self, index: usize) -> Result<Self::Item>;

    /// Borrow the element at `index`, valid for `index < len`.
    fn get(&self, index: usize) -> Result<&Self::Item>;

    /// Position of the first element equal to `value`, or `None` if absent.
    fn search(&self, value: &Self::Item) -> Option<usize>
    where
        Self::Item: PartialEq;

    /// Reverse the chain in place.
    fn reverse(&mut self);

    /// Number of elements in the chain.
    fn len(&self) -> usize;

    /// Check if the chain holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A node with a forward link.
pub(crate) trait Link: Sized {
    /// Get the next node in the chain
    fn next(&self) -> Option<NonNull<Self>>;

    /// Set the next node in the chain
    fn set_next(&mut self, next: Option<NonNull<Self>>);
}

/// A node that can also reach its predecessor.
pub(crate) trait LinkWithPrev: Link {
    /// Get the previous node in the chain
    fn prev(&self) -> Option<NonNull<Self>>;

    /// Set the previous node in the chain
    fn set_prev(&mut self, prev: Option<NonNull<Self>>);
}

/// A node that carries an element.
pub(crate) trait NodeWithData: Link {
    /// The type of data stored in the node.
    type Data;

    /// Get the data associated with the node
    fn data(&self) -> &Self::Data;

    /// Consume a heap node and hand back its data.
    fn into_data(self: alloc::boxed::Box<Self>) -> Self::Data;
}
