//! Forward traversal over a list
//!
//! All borrowing iterators start at head and follow `next` links, one node
//! per step. They hold a shared borrow of the list, so the chain cannot
//! change underneath them.

use std::fmt;
use std::iter::FusedIterator;

use super::LinkedList;
use crate::{
    arena::NodeHandle,
    node::{LinkedNode, Node, NodeRef},
};

/// Iterator over `(key, value)` pairs
///
/// Besides the pairs it remembers which node produced the last one, see
/// [`Iter::current_node`].
pub struct Iter<'a, T> {
    list: &'a LinkedList<T>,

    /// Node the next call will yield
    pending: Option<NodeHandle>,

    /// Node behind the most recently yielded pair
    current: Option<NodeHandle>,

    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(list: &'a LinkedList<T>) -> Self {
        Self {
            list,
            pending: list.head,
            current: None,
            remaining: list.count,
        }
    }

    /// Node backing the pair returned by the last `next` call
    ///
    /// `None` before the first advance and once the chain is exhausted.
    pub fn current_node(&self) -> Option<NodeRef<'a, T>> {
        let list = self.list;
        self.current.and_then(|handle| list.node(handle))
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (usize, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let list = self.list;
        let Some(link) = self.pending.and_then(|handle| list.nodes.get(handle)) else {
            self.pending = None;
            self.current = None;
            return None;
        };

        self.current = self.pending;
        self.pending = link.node.next();
        self.remaining = self.remaining.saturating_sub(1);
        Some((link.node.key(), link.node.value()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            list: self.list,
            pending: self.pending,
            current: self.current,
            remaining: self.remaining,
        }
    }
}

impl<T> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("pending", &self.pending)
            .field("current", &self.current)
            .field("remaining", &self.remaining)
            .finish()
    }
}

/// Iterator over linked nodes, each carrying its handle
pub struct Nodes<'a, T> {
    inner: Iter<'a, T>,
}

impl<'a, T> Nodes<'a, T> {
    pub(super) fn new(list: &'a LinkedList<T>) -> Self {
        Self {
            inner: Iter::new(list),
        }
    }
}

impl<'a, T> Iterator for Nodes<'a, T> {
    type Item = NodeRef<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()?;
        self.inner.current_node()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Nodes<'_, T> {}

impl<T> FusedIterator for Nodes<'_, T> {}

impl<T> fmt::Debug for Nodes<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Nodes").field(&self.inner).finish()
    }
}

/// Iterator over values
pub struct Values<'a, T> {
    inner: Iter<'a, T>,
}

impl<'a, T> Values<'a, T> {
    pub(super) fn new(list: &'a LinkedList<T>) -> Self {
        Self {
            inner: Iter::new(list),
        }
    }
}

impl<'a, T> Iterator for Values<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Values<'_, T> {}

impl<T> FusedIterator for Values<'_, T> {}

impl<T> fmt::Debug for Values<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Values").field(&self.inner).finish()
    }
}

/// Owning iterator draining values front to back
pub struct IntoIter<T> {
    list: LinkedList<T>,
}

impl<T> IntoIter<T> {
    pub(super) fn new(list: LinkedList<T>) -> Self {
        Self { list }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        // Keys of a list being drained are never observed, skip renumbering
        let head = self.list.head?;
        self.list.unlink(head).map(Node::into_value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.count, Some(self.list.count))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.list).finish()
    }
}
