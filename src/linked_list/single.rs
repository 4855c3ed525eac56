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
    node::{SingleNode, alloc, release, walk_forward},
    traits::{Chain, Link, NodeWithData},
};

/// A chain whose nodes only know their successor.
///
/// Head and tail are both tracked, so `append`, `prepend` and `delete_first`
/// are O(1). Reaching the node before the tail needs a walk from the head,
/// which makes `delete_last` O(n).
pub struct SinglyLinkedChain<T> {
    head: Option<NonNull<SingleNode<T>>>,
    tail: Option<NonNull<SingleNode<T>>>,
    len: usize,
    _marker: PhantomData<Box<SingleNode<T>>>,
}

impl<T> SinglyLinkedChain<T> {
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

    fn node_at(&self, index: usize) -> Result<NonNull<SingleNode<T>>> {
        let out_of_range = ChainError::OutOfRange {
            index,
            len: self.len,
        };
        if index >= self.len {
            return Err(out_of_range);
        }
        let head = self.head.ok_or(out_of_range)?;
        unsafe { walk_forward(head, index) }.ok_or(out_of_range)
    }
}

impl<T> Chain for SinglyLinkedChain<T> {
    type Item = T;

    fn append(&mut self, value: T) {
        let node = alloc(SingleNode::new(value, None));
        match self.tail {
            Some(mut tail) => unsafe { tail.as_mut().set_next(Some(node)) },
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len += 1;
    }

    fn prepend(&mut self, value: T) {
        let node = alloc(SingleNode::new(value, self.head));
        if self.tail.is_none() {
            self.tail = Some(node);
        }
        self.head = Some(node);
        self.len += 1;
    }

    fn insert_at(&mut self, index: usize, value: T) -> Result<()> {
        if index > self.len {
            return Err(ChainError::OutOfRange {
                index,
                len: self.len,
            });
        }
        if index == 0 {
            self.prepend(value);
            return Ok(());
        }
        if index == self.len {
            self.append(value);
            return Ok(());
        }

        let mut prev = self.node_at(index - 1)?;
        unsafe {
            let node = alloc(SingleNode::new(value, prev.as_ref().next()));
            prev.as_mut().set_next(Some(node));
        }
        self.len += 1;
        Ok(())
    }

    fn delete_first(&mut self) -> Result<T> {
        let head = self.head.ok_or(ChainError::EmptyCollection)?;
        self.head = unsafe { head.as_ref().next() };
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;
        Ok(unsafe { release(head) })
    }

    fn delete_last(&mut self) -> Result<T> {
        let tail = self.tail.ok_or(ChainError::EmptyCollection)?;
        if self.len == 1 {
            return self.delete_first();
        }

        // No back link: find the second-to-last node from the head.
        let mut prev = self.node_at(self.len - 2)?;
        unsafe { prev.as_mut().set_next(None) };
        self.tail = Some(prev);
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

        let mut prev = self.node_at(index - 1)?;
        let target = unsafe { prev.as_ref().next() }.ok_or(out_of_range)?;
        unsafe { prev.as_mut().set_next(target.as_ref().next()) };
        if self.tail == Some(target) {
            self.tail = Some(prev);
        }
        self.len -= 1;
        Ok(unsafe { release(target) })
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
        if self.len < 2 {
            return;
        }

        let mut prev = None;
        let mut current = self.head;
        while let Some(mut node) = current {
            unsafe {
                current = node.as_ref().next();
                node.as_mut().set_next(prev);
            }
            prev = Some(node);
        }
        mem::swap(&mut self.head, &mut self.tail);
    }

    fn len(&self) -> usize {
        self.len
    }
}

impl<T> Drop for SinglyLinkedChain<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for SinglyLinkedChain<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for SinglyLinkedChain<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedChain<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SinglyLinkedChain<T> {}

impl<T> Extend<T> for SinglyLinkedChain<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

impl<T> FromIterator<T> for SinglyLinkedChain<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut chain = Self::new();
        chain.extend(iter);
        chain
    }
}

impl<T: Debug> Debug for SinglyLinkedChain<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_named_list(f, "SinglyLinkedChain", self)
    }
}

/// Renders `1 -> 2 -> 3`, or `[]` for an empty chain.
impl<T: Display> Display for SinglyLinkedChain<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_joined(f, self, " -> ")
    }
}

impl<'a, T> IntoIterator for &'a SinglyLinkedChain<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for SinglyLinkedChain<T> {
    type Item = T;
    type IntoIter = IntoIter<Self>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { chain: self }
    }
}

unsafe impl<T: Send> Send for SinglyLinkedChain<T> {}
unsafe impl<T: Sync> Sync for SinglyLinkedChain<T> {}

/// A forward iterator over a [`SinglyLinkedChain`].
pub struct Iter<'a, T> {
    cursor: Cursor<'a, SingleNode<T>>,
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

unsafe impl<T: Sync> Send for Iter<'_, T> {}
unsafe impl<T: Sync> Sync for Iter<'_, T> {}
