use alloc::boxed::Box;
use core::{
    fmt::{self, Debug, Display, Formatter},
    iter::FusedIterator,
    marker::PhantomData,
    mem,
    ptr::NonNull,
};

use crate::error::{ChainError, Result};

use super::{
    display::{write_joined, write_named_list},
    iter::{Cursor, IntoIter},
    node::{DoubleNode, alloc, release, walk_backward, walk_forward},
    traits::{Chain, Link, LinkWithPrev, NodeWithData},
};

/// A chain whose nodes know both neighbours.
///
/// The back link makes `delete_last` O(1) and lets index lookups start from
/// whichever end is nearer, which halves the average walk without changing
/// the O(n) worst case.
pub struct DoublyLinkedChain<T> {
    head: Option<NonNull<DoubleNode<T>>>,
    tail: Option<NonNull<DoubleNode<T>>>,
    len: usize,
    _marker: PhantomData<Box<DoubleNode<T>>>,
}

impl<T> DoublyLinkedChain<T> {
    /// Creates a new, empty chain.
    pub const fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Borrow the head element.
    pub fn front(&self) -> Option<&T> {
        self.head.map(|node| unsafe { node.as_ref() }.data())
    }

    /// Borrow the tail element.
    pub fn back(&self) -> Option<&T> {
        self.tail.map(|node| unsafe { node.as_ref() }.data())
    }

    /// Remove every element.
    pub fn clear(&mut self) {
        while self.delete_first().is_ok() {}
    }

    /// Iterate from head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            cursor: unsafe { Cursor::new(self.head, self.len) },
        }
    }

    /// Iterate from tail to head.
    pub fn iter_rev(&self) -> RevIter<'_, T> {
        RevIter {
            cursor: unsafe { Cursor::new(self.tail, self.len) },
        }
    }

    /// Render the chain from tail to head, e.g. `3 <-> 2 <-> 1`.
    pub fn display_rev(&self) -> RevDisplay<'_, T> {
        RevDisplay { chain: self }
    }

    /// Locate the node at `index`, walking from the nearer end.
    fn node_at(&self, index: usize) -> Result<NonNull<DoubleNode<T>>> {
        let out_of_range = ChainError::OutOfRange {
            index,
            len: self.len,
        };
        if index >= self.len {
            return Err(out_of_range);
        }

        let node = if index < self.len / 2 {
            let head = self.head.ok_or(out_of_range)?;
            unsafe { walk_forward(head, index) }
        } else {
            let tail = self.tail.ok_or(out_of_range)?;
            unsafe { walk_backward(tail, self.len - index - 1) }
        };
        node.ok_or(out_of_range)
    }
}

impl<T> Chain for DoublyLinkedChain<T> {
    type Item = T;

    fn append(&mut self, value: T) {
        let node = alloc(DoubleNode::new(value, self.tail, None));
        match self.tail {
            Some(mut tail) => unsafe { tail.as_mut().set_next(Some(node)) },
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len += 1;
    }

    fn prepend(&mut self, value: T) {
        let node = alloc(DoubleNode::new(value, None, self.head));
        match self.head {
            Some(mut head) => unsafe { head.as_mut().set_prev(Some(node)) },
            None => self.tail = Some(node),
        }
        self.head = Some(node);
        self.len += 1;
    }

    fn insert_at(&mut self, index: usize, value: T) -> Result<()> {
        let out_of_range = ChainError::OutOfRange {
            index,
            len: self.len,
        };
        if index > self.len {
            return Err(out_of_range);
        }
        if index == 0 {
            self.prepend(value);
            return Ok(());
        }
        if index == self.len {
            self.append(value);
            return Ok(());
        }

        // Splice in front of the node currently at `index`.
        let mut current = self.node_at(index)?;
        let mut prev = unsafe { current.as_ref().prev() }.ok_or(out_of_range)?;
        let node = alloc(DoubleNode::new(value, Some(prev), Some(current)));
        unsafe {
            prev.as_mut().set_next(Some(node));
            current.as_mut().set_prev(Some(node));
        }
        self.len += 1;
        Ok(())
    }

    fn delete_first(&mut self) -> Result<T> {
        let head = self.head.ok_or(ChainError::EmptyCollection)?;
        self.head = unsafe { head.as_ref().next() };
        match self.head {
            Some(mut next) => unsafe { next.as_mut().set_prev(None) },
            None => self.tail = None,
        }
        self.len -= 1;
        Ok(unsafe { release(head) })
    }

    fn delete_last(&mut self) -> Result<T> {
        let tail = self.tail.ok_or(ChainError::EmptyCollection)?;
        self.tail = unsafe { tail.as_ref().prev() };
        match self.tail {
            Some(mut prev) => unsafe { prev.as_mut().set_next(None) },
            None => self.head = None,
        }
        self.len -= 1;
        Ok(unsafe { release(tail) })
    }

    fn delete_at(&mut self, index: usize) -> Result<T> {
        let out_of_range = ChainError::OutOfRange {
            index,
            len: self.len,
        };
        if index >= self.len {
            return Err(out_of_range);
        }
        if index == 0 {
            return self.delete_first();
        }
        if index == self.len - 1 {
            return self.delete_last();
        }

        let node = self.node_at(index)?;
        let (Some(mut prev), Some(mut next)) = (unsafe { node.as_ref().prev() }, unsafe {
            node.as_ref().next()
        }) else {
            return Err(out_of_range);
        };
        unsafe {
            prev.as_mut().set_next(Some(next));
            next.as_mut().set_prev(Some(prev));
        }
        self.len -= 1;
        Ok(unsafe { release(node) })
    }

    fn get(&self, index: usize) -> Result<&T> {
        self.node_at(index)
            .map(|node| unsafe { node.as_ref() }.data())
    }

    fn search(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|item| item == value)
    }

    fn reverse(&mut self) {
        let mut current = self.head;
        while let Some(mut node) = current {
            let node = unsafe { node.as_mut() };
            let (prev, next) = (node.prev(), node.next());
            node.set_next(prev);
            node.set_prev(next);
            current = next;
        }
        mem::swap(&mut self.head, &mut self.tail);
    }

    fn len(&self) -> usize {
        self.len
    }
}

impl<T> Drop for DoublyLinkedChain<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for DoublyLinkedChain<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DoublyLinkedChain<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for DoublyLinkedChain<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DoublyLinkedChain<T> {}

impl<T> Extend<T> for DoublyLinkedChain<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

impl<T> FromIterator<T> for DoublyLinkedChain<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut chain = Self::new();
        chain.extend(iter);
        chain
    }
}

impl<T: Debug> Debug for DoublyLinkedChain<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_named_list(f, "DoublyLinkedChain", self)
    }
}

/// Renders `1 <-> 2 <-> 3`, or `[]` for an empty chain.
impl<T: Display> Display for DoublyLinkedChain<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_joined(f, self, " <-> ")
    }
}

impl<'a, T> IntoIterator for &'a DoublyLinkedChain<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for DoublyLinkedChain<T> {
    type Item = T;
    type IntoIter = IntoIter<Self>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { chain: self }
    }
}

impl<T> DoubleEndedIterator for IntoIter<DoublyLinkedChain<T>> {
    fn next_back(&mut self) -> Option<T> {
        self.chain.delete_last().ok()
    }
}

unsafe impl<T: Send> Send for DoublyLinkedChain<T> {}
unsafe impl<T: Sync> Sync for DoublyLinkedChain<T> {}

/// A head-to-tail iterator over a [`DoublyLinkedChain`].
pub struct Iter<'a, T> {
    cursor: Cursor<'a, DoubleNode<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.cursor.advance(Link::next)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.cursor.remaining();
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            cursor: self.cursor.clone(),
        }
    }
}

/// A tail-to-head iterator over a [`DoublyLinkedChain`].
pub struct RevIter<'a, T> {
    cursor: Cursor<'a, DoubleNode<T>>,
}

impl<'a, T> Iterator for RevIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.cursor.advance(LinkWithPrev::prev)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.cursor.remaining();
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for RevIter<'_, T> {}

impl<T> FusedIterator for RevIter<'_, T> {}

impl<T> Clone for RevIter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            cursor: self.cursor.clone(),
        }
    }
}

unsafe impl<T: Sync> Send for Iter<'_, T> {}
unsafe impl<T: Sync> Sync for Iter<'_, T> {}
unsafe impl<T: Sync> Send for RevIter<'_, T> {}
unsafe impl<T: Sync> Sync for RevIter<'_, T> {}

/// Tail-to-head rendering returned by [`DoublyLinkedChain::display_rev`].
pub struct RevDisplay<'a, T> {
    chain: &'a DoublyLinkedChain<T>,
}

impl<T: Display> Display for RevDisplay<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_joined(f, self.chain.iter_rev(), " <-> ")
    }
}
