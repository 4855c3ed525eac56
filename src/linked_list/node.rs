use alloc::boxed::Box;
use core::ptr::NonNull;

use super::traits::{Link, LinkWithPrev, NodeWithData};

/// A node in a singly linked chain.
pub(crate) struct SingleNode<T> {
    next: Option<NonNull<Self>>,
    data: T,
}

impl<T> SingleNode<T> {
    pub(crate) fn new(data: T, next: Option<NonNull<Self>>) -> Self {
        Self { next, data }
    }
}

impl<T> Link for SingleNode<T> {
    fn next(&self) -> Option<NonNull<Self>> {
        self.next
    }

    fn set_next(&mut self, next: Option<NonNull<Self>>) {
        self.next = next;
    }
}

impl<T> NodeWithData for SingleNode<T> {
    type Data = T;

    fn data(&self) -> &T {
        &self.data
    }

    fn into_data(self: Box<Self>) -> T {
        self.data
    }
}

/// A node in a doubly linked chain.
///
/// `next` is the owning direction: dropping a chain releases nodes by walking
/// it. `prev` is a plain back-reference and is never used to free anything.
pub(crate) struct DoubleNode<T> {
    next: Option<NonNull<Self>>,
    prev: Option<NonNull<Self>>,
    data: T,
}

impl<T> DoubleNode<T> {
    pub(crate) fn new(data: T, prev: Option<NonNull<Self>>, next: Option<NonNull<Self>>) -> Self {
        Self { next, prev, data }
    }
}

impl<T> Link for DoubleNode<T> {
    fn next(&self) -> Option<NonNull<Self>> {
        self.next
    }

    fn set_next(&mut self, next: Option<NonNull<Self>>) {
        self.next = next;
    }
}

impl<T> LinkWithPrev for DoubleNode<T> {
    fn prev(&self) -> Option<NonNull<Self>> {
        self.prev
    }

    fn set_prev(&mut self, prev: Option<NonNull<Self>>) {
        self.prev = prev;
    }
}

impl<T> NodeWithData for DoubleNode<T> {
    type Data = T;

    fn data(&self) -> &T {
        &self.data
    }

    fn into_data(self: Box<Self>) -> T {
        self.data
    }
}

/// Move a node onto the heap and hand ownership to the caller as a raw link.
pub(crate) fn alloc<N>(node: N) -> NonNull<N> {
    NonNull::from(Box::leak(Box::new(node)))
}

/// Free a node created by [`alloc`] and return its data.
///
/// # Safety
///
/// `node` must come from [`alloc`], must not have been released already, and
/// must no longer be reachable from any chain.
pub(crate) unsafe fn release<N: NodeWithData>(node: NonNull<N>) -> N::Data {
    unsafe { Box::from_raw(node.as_ptr()) }.into_data()
}

/// Follow `steps` forward links starting at `start`.
///
/// Returns `None` if the chain ends first.
///
/// # Safety
///
/// Every node reached, `start` included, must be live.
pub(crate) unsafe fn walk_forward<N: Link>(start: NonNull<N>, steps: usize) -> Option<NonNull<N>> {
    (0..steps).try_fold(start, |node, _| unsafe { node.as_ref().next() })
}

/// Follow `steps` backward links starting at `start`.
///
/// # Safety
///
/// Same as [`walk_forward`].
pub(crate) unsafe fn walk_backward<N: LinkWithPrev>(
    start: NonNull<N>,
    steps: usize,
) -> Option<NonNull<N>> {
    (0..steps).try_fold(start, |node, _| unsafe { node.as_ref().prev() })
}
