//! Stable reordering
//!
//! Sorting gathers handles in chain order, runs the standard library's
//! stable merge sort over them and then rewrites every link and key in the
//! new order. Values never move inside the arena, so handles survive a sort.

use std::cmp::Ordering;

use tracing::debug;

use super::LinkedList;
use crate::{arena::NodeHandle, node::LinkedNode};

impl<T> LinkedList<T> {
    /// Sort by value in ascending order
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        self.sort_by(T::cmp)
    }

    /// Sort with a comparator; equal elements keep their relative order
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        if self.count < 2 {
            return;
        }

        let mut order: Vec<NodeHandle> = self.nodes().map(|node| node.handle()).collect();
        let nodes = &self.nodes;
        order.sort_by(|a, b| match (nodes.get(*a), nodes.get(*b)) {
            (Some(a), Some(b)) => compare(a.node.value(), b.node.value()),
            _ => Ordering::Equal,
        });

        self.relink(&order);
        if self.config.verbose {
            debug!(count = self.count, "sorted list");
        }
        self.check_invariants();
    }

    /// Sort by a key derived from each value
    pub fn sort_by_key<K, F>(&mut self, mut key: F)
    where
        F: FnMut(&T) -> K,
        K: Ord,
    {
        self.sort_by(|a, b| key(a).cmp(&key(b)))
    }

    /// Rebuild the chain so that it follows `order`, keys 0..n
    fn relink(&mut self, order: &[NodeHandle]) {
        for (position, &handle) in order.iter().enumerate() {
            let prev = position.checked_sub(1).map(|p| order[p]);
            let next = order.get(position + 1).copied();

            if let Some(link) = self.nodes.get_mut(handle) {
                link.prev = prev;
                link.node.set_key(position);
                match next {
                    Some(next) => link.node.set_next(next),
                    None => link.node.clear_next(),
                }
            }
        }

        self.head = order.first().copied();
        self.tail = order.last().copied();
    }
}
