//! List nodes
//!
//! A node wraps one value together with the key its owning list assigned
//! and a forward link. Nodes can exist detached (before `add_node`, or after
//! being polled/removed), in which case the link is always cleared.

use std::fmt;

use crate::arena::NodeHandle;

/// Capability contract for anything that can sit in a key-indexed chain
pub trait LinkedNode {
    /// Stored value type
    type Value;

    /// Key assigned by the owning list
    fn key(&self) -> usize;

    /// Overwrite the key
    fn set_key(&mut self, key: usize);

    /// Stored value
    fn value(&self) -> &Self::Value;

    /// Forward link, `None` for the tail
    fn next(&self) -> Option<NodeHandle>;

    /// Point the forward link at `next`
    fn set_next(&mut self, next: NodeHandle);

    /// Make this node a valid terminal node
    fn clear_next(&mut self);

    /// True when nothing follows this node
    fn is_terminal(&self) -> bool {
        self.next().is_none()
    }
}

/// Value plus key plus forward link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<T> {
    value: T,
    key: usize,
    next: Option<NodeHandle>,
}

impl<T> Node<T> {
    /// Detached node with key 0; the list re-keys it on insertion
    pub fn new(value: T) -> Self {
        Self::with_key(value, 0)
    }

    /// Detached node with an explicit key
    pub fn with_key(value: T, key: usize) -> Self {
        Self {
            value,
            key,
            next: None,
        }
    }

    /// Mutable access to the stored value
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Unwrap the stored value
    pub fn into_value(self) -> T {
        self.value
    }

    pub(crate) fn detached(mut self) -> Self {
        self.next = None;
        self
    }
}

impl<T> LinkedNode for Node<T> {
    type Value = T;

    #[inline]
    fn key(&self) -> usize {
        self.key
    }

    #[inline]
    fn set_key(&mut self, key: usize) {
        self.key = key;
    }

    #[inline]
    fn value(&self) -> &T {
        &self.value
    }

    #[inline]
    fn next(&self) -> Option<NodeHandle> {
        self.next
    }

    #[inline]
    fn set_next(&mut self, next: NodeHandle) {
        self.next = Some(next);
    }

    #[inline]
    fn clear_next(&mut self) {
        self.next = None;
    }
}

impl<T> From<T> for Node<T> {
    fn from(value: T) -> Self {
        Node::new(value)
    }
}

/// Borrowed view of a node that is currently linked into a list
///
/// Carries the node's handle so a caller can come back and remove exactly
/// this node once the borrow ends. Equality is identity: two refs are equal
/// when they point at the same node of the same list.
pub struct NodeRef<'a, T> {
    handle: NodeHandle,
    node: &'a Node<T>,
}

impl<'a, T> NodeRef<'a, T> {
    /// Pair a linked node with its handle
    pub fn new(handle: NodeHandle, node: &'a Node<T>) -> Self {
        Self { handle, node }
    }

    /// Handle of the backing node
    #[inline]
    pub fn handle(&self) -> NodeHandle {
        self.handle
    }

    /// Current key of the node
    #[inline]
    pub fn key(&self) -> usize {
        self.node.key()
    }

    /// Stored value
    #[inline]
    pub fn value(&self) -> &'a T {
        &self.node.value
    }

    /// Handle of the following node
    #[inline]
    pub fn next(&self) -> Option<NodeHandle> {
        self.node.next()
    }

    /// The backing node itself
    pub fn node(&self) -> &'a Node<T> {
        self.node
    }
}

impl<T> Clone for NodeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<'_, T> {}

impl<T> PartialEq for NodeRef<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.handle == other.handle
    }
}

impl<T> Eq for NodeRef<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for NodeRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("handle", &self.handle)
            .field("key", &self.node.key)
            .field("value", &self.node.value)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_key_overwrites() {
        let mut node = Node::with_key("x", 9);
        node.set_key(2);
        node.set_key(2);
        assert_eq!(node.key(), 2);
        assert_eq!(node.value(), &"x");
    }

    #[test]
    fn test_clear_next_makes_terminal() {
        let mut node = Node::new(1);
        node.set_next(NodeHandle::new(0, 4, 0));
        assert!(!node.is_terminal());

        node.clear_next();
        assert!(node.is_terminal());
    }

    #[test]
    fn test_node_ref_identity() {
        let a = Node::new(5);
        let b = Node::new(5);
        let ra = NodeRef::new(NodeHandle::new(0, 0, 0), &a);
        let rb = NodeRef::new(NodeHandle::new(0, 1, 0), &b);

        assert_eq!(ra.value(), rb.value());
        assert_ne!(ra, rb);
        assert_eq!(ra, NodeRef::new(NodeHandle::new(0, 0, 0), &a));
    }
}
