use core::{iter::FusedIterator, marker::PhantomData, ptr::NonNull};

use super::traits::{Chain, NodeWithData};

/// A read cursor over the nodes of a chain.
///
/// The cursor walks whichever link the caller hands to [`Cursor::advance`],
/// and stops after the number of nodes the chain reported when the cursor was
/// created.
pub(crate) struct Cursor<'a, N> {
    current: Option<NonNull<N>>,
    remaining: usize,
    _chain: PhantomData<&'a N>,
}

impl<'a, N> Cursor<'a, N>
where
    N: NodeWithData,
{
    /// Creates a cursor starting at `start` that yields `len` elements.
    ///
    /// # Safety
    ///
    /// `start` and the `len - 1` nodes reachable from it through the link later
    /// passed to `advance` must stay live and unmodified for `'a`.
    pub(crate) unsafe fn new(start: Option<NonNull<N>>, len: usize) -> Self {
        Self {
            current: start,
            remaining: len,
            _chain: PhantomData,
        }
    }

    pub(crate) fn advance(
        &mut self,
        step: impl FnOnce(&N) -> Option<NonNull<N>>,
    ) -> Option<&'a N::Data> {
        if self.remaining == 0 {
            return None;
        }
        let node = unsafe { self.current?.as_ref() };
        self.current = step(node);
        self.remaining -= 1;
        Some(node.data())
    }

    pub(crate) fn remaining(&self) -> usize {
        self.remaining
    }
}

impl<N> Clone for Cursor<'_, N> {
    fn clone(&self) -> Self {
        Self {
            current: self.current,
            remaining: self.remaining,
            _chain: PhantomData,
        }
    }
}

/// An owning iterator that drains a chain from its head.
pub struct IntoIter<C> {
    pub(crate) chain: C,
}

impl<C> Iterator for IntoIter<C>
where
    C: Chain,
{
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.chain.delete_first().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.chain.len();
        (len, Some(len))
    }
}

impl<C: Chain> ExactSizeIterator for IntoIter<C> {}

impl<C: Chain> FusedIterator for IntoIter<C> {}
