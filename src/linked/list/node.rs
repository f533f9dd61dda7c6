use std::fmt::{self, Debug, Formatter};
use std::ptr::NonNull;

pub(crate) type Link<T> = Option<NodePtr<T>>;

// NOTE: Nodes are allocated through Box<T> rather than alloc, because moving a Node back out of
// its Box is exactly the "hand the value to the caller" step of pop and remove.

pub(crate) struct NodePtr<T>(NonNull<Node<T>>);

impl<T> NodePtr<T> {
    pub fn from_node(node: Node<T>) -> NodePtr<T> {
        NodePtr(NonNull::from(Box::leak(Box::new(node))))
    }

    /// Reclaims the heap allocation and moves the node out of it. The caller is responsible for
    /// having unlinked this node from its chain first.
    pub fn take_node(self) -> Node<T> {
        // SAFETY: The pointer was produced by Box::leak in from_node, and every node leaves the
        // chain exactly once (pop, remove, drain or Drop), so it is reclaimed exactly once.
        *unsafe { Box::from_raw(self.0.as_ptr()) }
    }

    pub fn value<'a>(&self) -> &'a T {
        // SAFETY: The allocation is live for as long as the node remains in a chain.
        unsafe { &(*self.0.as_ptr()).value }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn value_mut<'a>(&self) -> &'a mut T {
        // SAFETY: As for value; callers never hold two references to the same node's value.
        unsafe { &mut (*self.0.as_ptr()).value }
    }

    pub fn prev<'a>(&self) -> &'a Link<T> {
        // SAFETY: As for value.
        unsafe { &(*self.0.as_ptr()).prev }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn prev_mut<'a>(&self) -> &'a mut Link<T> {
        // SAFETY: As for value_mut.
        unsafe { &mut (*self.0.as_ptr()).prev }
    }

    pub fn next<'a>(&self) -> &'a Link<T> {
        // SAFETY: As for value.
        unsafe { &(*self.0.as_ptr()).next }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn next_mut<'a>(&self) -> &'a mut Link<T> {
        // SAFETY: As for value_mut.
        unsafe { &mut (*self.0.as_ptr()).next }
    }
}

impl<T> Clone for NodePtr<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodePtr<T> {}

impl<T> PartialEq for NodePtr<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Debug for NodePtr<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NodePtr").field(&self.0).finish()
    }
}

pub(crate) struct Node<T> {
    pub value: T,
    pub prev: Link<T>,
    pub next: Link<T>,
}
