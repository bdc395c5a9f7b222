//! Capability trait shared by substitutable keyed containers

use std::cmp::Ordering;
use std::collections::BTreeMap;

use super::LinkedList;
use crate::{
    arena::NodeHandle,
    node::{Node, NodeRef},
    ListError,
};

/// Capability contract for key-indexed ordered containers
///
/// Anything implementing this can stand in for [`LinkedList`]. Alias
/// operations (`push`, `peek*`, `poll_first`, `pop`, `remove_first`,
/// `remove_last`, `find_first`) come for free.
pub trait KeyedList<T: PartialEq> {
    /// First node
    fn first(&self) -> Option<NodeRef<'_, T>>;

    /// Last node
    fn last(&self) -> Option<NodeRef<'_, T>>;

    /// Append a value, returning its key
    fn add(&mut self, value: T) -> usize;

    /// Append a detached node, re-keyed to the current count
    fn add_node(&mut self, node: Node<T>) -> usize;

    /// Number of nodes
    fn count(&self) -> usize;

    /// Fresh forward traversal of `(key, value)` pairs from the first node
    fn iter(&self) -> Box<dyn Iterator<Item = (usize, &T)> + '_>;

    /// Key → value view in key order
    fn as_map(&self) -> BTreeMap<usize, &T>;

    /// Node carrying `key`
    fn get(&self, key: usize) -> Option<NodeRef<'_, T>>;

    /// First node holding `value`
    fn find(&self, value: &T) -> Option<NodeRef<'_, T>>;

    /// All nodes holding `value`, `None` when there is none
    fn find_all(&self, value: &T) -> Option<Vec<NodeRef<'_, T>>>;

    /// Last node holding `value`
    fn find_last(&self, value: &T) -> Option<NodeRef<'_, T>>;

    /// Remove and return the first node
    fn poll(&mut self) -> Option<Node<T>>;

    /// Remove and return the last node
    fn poll_last(&mut self) -> Option<Node<T>>;

    /// Remove every node holding `value`, returning how many went
    fn remove(&mut self, value: &T) -> usize;

    /// Remove the node carrying `key`
    fn remove_at(&mut self, key: usize) -> Option<Node<T>>;

    /// Remove the node behind `handle`
    fn remove_node(&mut self, handle: NodeHandle) -> Option<Node<T>>;

    /// Insert in front of the node carrying `key`
    fn insert_before(&mut self, key: usize, value: T) -> Result<usize, ListError>;

    /// Insert behind the node carrying `key`
    fn insert_after(&mut self, key: usize, value: T) -> Result<usize, ListError>;

    /// Stable sort with a comparator, keys reassigned afterwards
    fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering;

    /// Same as [`KeyedList::add`]
    fn push(&mut self, value: T) -> usize {
        self.add(value)
    }

    /// True when the container holds nothing
    fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// True when some node carries `key`
    fn contains_key(&self, key: usize) -> bool {
        self.get(key).is_some()
    }

    /// True when some node holds `value`
    fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// Same as [`KeyedList::find`]
    fn find_first(&self, value: &T) -> Option<NodeRef<'_, T>> {
        self.find(value)
    }

    /// First node, left in place
    fn peek(&self) -> Option<NodeRef<'_, T>> {
        self.first()
    }

    /// First node, left in place
    fn peek_first(&self) -> Option<NodeRef<'_, T>> {
        self.first()
    }

    /// Last node, left in place
    fn peek_last(&self) -> Option<NodeRef<'_, T>> {
        self.last()
    }

    /// Same as [`KeyedList::poll`]
    fn poll_first(&mut self) -> Option<Node<T>> {
        self.poll()
    }

    /// Remove the last node and return its value
    fn pop(&mut self) -> Option<T> {
        self.poll_last().map(Node::into_value)
    }

    /// Same as [`KeyedList::poll`]
    fn remove_first(&mut self) -> Option<Node<T>> {
        self.poll()
    }

    /// Same as [`KeyedList::poll_last`]
    fn remove_last(&mut self) -> Option<Node<T>> {
        self.poll_last()
    }

    /// Stable ascending sort by value
    fn sort(&mut self)
    where
        T: Ord,
    {
        self.sort_by(T::cmp)
    }
}

impl<T: PartialEq> KeyedList<T> for LinkedList<T> {
    fn first(&self) -> Option<NodeRef<'_, T>> {
        LinkedList::first(self)
    }

    fn last(&self) -> Option<NodeRef<'_, T>> {
        LinkedList::last(self)
    }

    fn add(&mut self, value: T) -> usize {
        LinkedList::add(self, value)
    }

    fn add_node(&mut self, node: Node<T>) -> usize {
        LinkedList::add_node(self, node)
    }

    fn count(&self) -> usize {
        LinkedList::count(self)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = (usize, &T)> + '_> {
        Box::new(LinkedList::iter(self))
    }

    fn as_map(&self) -> BTreeMap<usize, &T> {
        LinkedList::as_map(self)
    }

    fn get(&self, key: usize) -> Option<NodeRef<'_, T>> {
        LinkedList::get(self, key)
    }

    fn find(&self, value: &T) -> Option<NodeRef<'_, T>> {
        LinkedList::find(self, value)
    }

    fn find_all(&self, value: &T) -> Option<Vec<NodeRef<'_, T>>> {
        LinkedList::find_all(self, value)
    }

    fn find_last(&self, value: &T) -> Option<NodeRef<'_, T>> {
        LinkedList::find_last(self, value)
    }

    fn poll(&mut self) -> Option<Node<T>> {
        LinkedList::poll(self)
    }

    fn poll_last(&mut self) -> Option<Node<T>> {
        LinkedList::poll_last(self)
    }

    fn remove(&mut self, value: &T) -> usize {
        LinkedList::remove(self, value)
    }

    fn remove_at(&mut self, key: usize) -> Option<Node<T>> {
        LinkedList::remove_at(self, key)
    }

    fn remove_node(&mut self, handle: NodeHandle) -> Option<Node<T>> {
        LinkedList::remove_node(self, handle)
    }

    fn insert_before(&mut self, key: usize, value: T) -> Result<usize, ListError> {
        LinkedList::insert_before(self, key, value)
    }

    fn insert_after(&mut self, key: usize, value: T) -> Result<usize, ListError> {
        LinkedList::insert_after(self, key, value)
    }

    fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        LinkedList::sort_by(self, compare)
    }

    fn is_empty(&self) -> bool {
        LinkedList::is_empty(self)
    }
}
