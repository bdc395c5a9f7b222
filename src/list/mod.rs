//! Key-indexed linked list
//!
//! The list owns a forward chain of [`Node`]s stored in a generational
//! arena private to the list.
//! Every structural change leaves keys dense: the node at position `i`
//! carries key `i`.
//!
//! Lookup by key or value is a linear walk from head. Each arena entry also
//! keeps a private back link, so tail removal and reverse search never rely
//! on key arithmetic.

mod api;
mod invariants;
mod iter;
#[cfg(feature = "serde")]
mod serde_impl;
mod sort;

pub use api::KeyedList;
pub use iter::{IntoIter, Iter, Nodes, Values};

use std::collections::BTreeMap;
use std::fmt;

use tracing::{debug, trace};

use crate::{
    arena::{Arena, NodeHandle},
    node::{LinkedNode, Node, NodeRef},
    ListConfig, ListError,
};

/// Arena entry: the public node plus its back link
#[derive(Debug, Clone)]
struct Link<T> {
    node: Node<T>,
    prev: Option<NodeHandle>,
}

/// Singly linked list with dense, automatically assigned keys
pub struct LinkedList<T> {
    nodes: Arena<Link<T>>,
    head: Option<NodeHandle>,
    tail: Option<NodeHandle>,
    count: usize,
    config: ListConfig,
}

impl<T> LinkedList<T> {
    /// Create an empty list with default configuration
    pub fn new() -> Self {
        Self::with_config(ListConfig::default())
    }

    /// Create an empty list with explicit configuration
    pub fn with_config(config: ListConfig) -> Self {
        Self {
            nodes: Arena::with_capacity(config.initial_capacity),
            head: None,
            tail: None,
            count: 0,
            config,
        }
    }

    /// Active configuration
    pub fn config(&self) -> &ListConfig {
        &self.config
    }

    /// First node, `None` when empty
    pub fn first(&self) -> Option<NodeRef<'_, T>> {
        self.head.and_then(|handle| self.node(handle))
    }

    /// Last node, `None` when empty
    pub fn last(&self) -> Option<NodeRef<'_, T>> {
        self.tail.and_then(|handle| self.node(handle))
    }

    /// Resolve a handle previously obtained from this list
    ///
    /// Returns `None` once the node has been removed, and for handles
    /// issued by any other list, clones included.
    pub fn node(&self, handle: NodeHandle) -> Option<NodeRef<'_, T>> {
        self.nodes
            .get(handle)
            .map(|link| NodeRef::new(handle, &link.node))
    }

    /// Number of linked nodes
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Alias of [`LinkedList::count`]
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    /// True when the list holds no node
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Append a value; returns the key it was given
    pub fn add(&mut self, value: T) -> usize {
        self.add_node(Node::new(value))
    }

    /// Append a detached node, re-keying it to the current count
    pub fn add_node(&mut self, mut node: Node<T>) -> usize {
        let key = self.count;
        node.set_key(key);
        self.splice(self.tail, None, node);
        trace!(key, "appended node");
        self.check_invariants();
        key
    }

    /// Key → value view in key order
    pub fn as_map(&self) -> BTreeMap<usize, &T> {
        self.iter().collect()
    }

    /// Node carrying `key`
    ///
    /// Walks the chain comparing keys; there is no direct indexing.
    pub fn get(&self, key: usize) -> Option<NodeRef<'_, T>> {
        self.nodes().find(|node| node.key() == key)
    }

    /// True when some node carries `key`
    pub fn contains_key(&self, key: usize) -> bool {
        self.get(key).is_some()
    }

    /// Detach and return the first node
    pub fn poll(&mut self) -> Option<Node<T>> {
        let head = self.head?;
        self.remove_handle(head)
    }

    /// Detach and return the last node
    pub fn poll_last(&mut self) -> Option<Node<T>> {
        let tail = self.tail?;
        self.remove_handle(tail)
    }

    /// Detach the node carrying `key`; later keys shift down by one
    pub fn remove_at(&mut self, key: usize) -> Option<Node<T>> {
        let handle = self.get(key)?.handle();
        self.remove_handle(handle)
    }

    /// Detach exactly the node behind `handle`
    ///
    /// Identity is the handle, so duplicates of the same value are never
    /// confused. A stale handle, or one issued by another list, yields
    /// `None` and leaves the list untouched.
    pub fn remove_node(&mut self, handle: NodeHandle) -> Option<Node<T>> {
        self.remove_handle(handle)
    }

    /// Insert `value` in front of the node carrying `key`
    ///
    /// The new node takes over `key`; every node from the old one onwards
    /// shifts up by one.
    pub fn insert_before(&mut self, key: usize, value: T) -> Result<usize, ListError> {
        let target = self.require(key)?;
        let prev = self.nodes.get(target).and_then(|link| link.prev);
        self.splice(prev, Some(target), Node::with_key(value, key));
        self.renumber_from(Some(target), key + 1);

        if self.config.verbose {
            debug!(key, count = self.count, "inserted node before");
        }
        self.check_invariants();
        Ok(key)
    }

    /// Insert `value` right behind the node carrying `key`
    pub fn insert_after(&mut self, key: usize, value: T) -> Result<usize, ListError> {
        let target = self.require(key)?;
        let next = self.nodes.get(target).and_then(|link| link.node.next());
        self.splice(Some(target), next, Node::with_key(value, key + 1));
        self.renumber_from(next, key + 2);

        if self.config.verbose {
            debug!(key = key + 1, count = self.count, "inserted node after");
        }
        self.check_invariants();
        Ok(key + 1)
    }

    /// Drop every node; outstanding handles go stale
    pub fn clear(&mut self) {
        if self.config.verbose {
            debug!(count = self.count, "clearing list");
        }
        self.nodes.clear();
        self.head = None;
        self.tail = None;
        self.count = 0;
    }

    /// Traverse `(key, value)` pairs from head
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Traverse the linked nodes from head
    pub fn nodes(&self) -> Nodes<'_, T> {
        Nodes::new(self)
    }

    /// Traverse the values from head
    pub fn values(&self) -> Values<'_, T> {
        Values::new(self)
    }

    fn require(&self, key: usize) -> Result<NodeHandle, ListError> {
        self.get(key)
            .map(|node| node.handle())
            .ok_or(ListError::KeyNotFound {
                key,
                count: self.count,
            })
    }

    /// Unlink one node and close the key gap it leaves
    fn remove_handle(&mut self, handle: NodeHandle) -> Option<Node<T>> {
        let (key, next) = {
            let link = self.nodes.get(handle)?;
            (link.node.key(), link.node.next())
        };
        let node = self.unlink(handle)?;
        self.renumber_from(next, key);

        if self.config.verbose {
            debug!(key, remaining = self.count, "removed node");
        }
        self.check_invariants();
        Some(node)
    }

    /// Store `node` between `prev` and `next`, fixing head/tail as needed
    fn splice(
        &mut self,
        prev: Option<NodeHandle>,
        next: Option<NodeHandle>,
        mut node: Node<T>,
    ) -> NodeHandle {
        match next {
            Some(next) => node.set_next(next),
            None => node.clear_next(),
        }
        let handle = self.nodes.insert(Link { node, prev });

        match prev {
            Some(prev) => {
                if let Some(link) = self.nodes.get_mut(prev) {
                    link.node.set_next(handle);
                }
            }
            None => self.head = Some(handle),
        }
        match next {
            Some(next) => {
                if let Some(link) = self.nodes.get_mut(next) {
                    link.prev = Some(handle);
                }
            }
            None => self.tail = Some(handle),
        }

        self.count += 1;
        handle
    }

    /// Detach a node from the chain without touching other keys
    fn unlink(&mut self, handle: NodeHandle) -> Option<Node<T>> {
        let Link { node, prev } = self.nodes.remove(handle)?;
        let next = node.next();

        match prev {
            Some(prev) => {
                if let Some(link) = self.nodes.get_mut(prev) {
                    match next {
                        Some(next) => link.node.set_next(next),
                        None => link.node.clear_next(),
                    }
                }
            }
            None => self.head = next,
        }
        match next {
            Some(next) => {
                if let Some(link) = self.nodes.get_mut(next) {
                    link.prev = prev;
                }
            }
            None => self.tail = prev,
        }

        self.count -= 1;
        Some(node.detached())
    }

    /// Re-key the chain from `start` onwards, beginning at `first_key`
    fn renumber_from(&mut self, start: Option<NodeHandle>, first_key: usize) {
        let mut cursor = start;
        let mut key = first_key;

        while let Some(handle) = cursor {
            let Some(link) = self.nodes.get_mut(handle) else {
                break;
            };
            link.node.set_key(key);
            key += 1;
            cursor = link.node.next();
        }
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// True when some node holds a value equal to `value`
    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// First node holding `value`
    pub fn find(&self, value: &T) -> Option<NodeRef<'_, T>> {
        self.nodes().find(|node| node.value() == value)
    }

    /// Every node holding `value`, in chain order; `None` when there is none
    pub fn find_all(&self, value: &T) -> Option<Vec<NodeRef<'_, T>>> {
        let matches: Vec<_> = self.nodes().filter(|node| node.value() == value).collect();
        if matches.is_empty() {
            None
        } else {
            Some(matches)
        }
    }

    /// Last node holding `value`, searched from the tail backwards
    pub fn find_last(&self, value: &T) -> Option<NodeRef<'_, T>> {
        let mut cursor = self.tail;

        while let Some(handle) = cursor {
            let link = self.nodes.get(handle)?;
            if link.node.value() == value {
                return Some(NodeRef::new(handle, &link.node));
            }
            cursor = link.prev;
        }

        None
    }

    /// Unlink every node holding `value`; returns how many went
    pub fn remove(&mut self, value: &T) -> usize {
        let matches: Vec<NodeHandle> = self
            .nodes()
            .filter(|node| node.value() == value)
            .map(|node| node.handle())
            .collect();
        if matches.is_empty() {
            return 0;
        }

        for handle in &matches {
            self.unlink(*handle);
        }
        self.renumber_from(self.head, 0);

        if self.config.verbose {
            debug!(removed = matches.len(), remaining = self.count, "removed matching nodes");
        }
        self.check_invariants();
        matches.len()
    }
}

/// Deep copy with its own handle space
///
/// Handles taken from the source list do not resolve in the copy.
impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        let mut nodes = self.nodes.clone();
        let owner = nodes.owner();
        for link in nodes.entries_mut() {
            link.prev = link.prev.map(|prev| prev.with_owner(owner));
            if let Some(next) = link.node.next() {
                link.node.set_next(next.with_owner(owner));
            }
        }

        Self {
            nodes,
            head: self.head.map(|head| head.with_owner(owner)),
            tail: self.tail.map(|tail| tail.with_owner(owner)),
            count: self.count,
            config: self.config.clone(),
        }
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.count == other.count && self.values().eq(other.values())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = (usize, &'a T);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
