//! # Key-indexed linked list
//!
//! A singly linked sequence where every node carries an integer key equal
//! to its position. Keys stay dense (`0..count`) through appends, inserts,
//! removals and sorts.
//!
//! ## Storage
//!
//! Nodes live in a generational arena and are addressed by [`NodeHandle`].
//! A handle held past removal of its node resolves to `None` rather than
//! dangling, so lookups can hand out handles and callers can come back to
//! remove exactly that node.
//!
//! ## Usage Example
//!
//! ```
//! use keyed_list::{KeyedList, LinkedList};
//!
//! let mut list = LinkedList::new();
//! assert_eq!(list.add("x"), 0);
//! assert_eq!(list.add("y"), 1);
//!
//! let y = list.find(&"y").map(|node| node.handle()).unwrap();
//! list.insert_before(0, "w").unwrap();
//! list.remove_node(y);
//!
//! let keys: Vec<_> = list.iter().collect();
//! assert_eq!(keys, vec![(0, &"w"), (1, &"x")]);
//! assert_eq!(list.pop(), Some("x"));
//! ```
//!
//! Search and removal are linear scans: there is no auxiliary index.

#![warn(missing_docs, missing_debug_implementations)]

pub(crate) mod arena; // Generational node storage
pub mod list; // The list container and its traversal
pub mod node; // Node type and node capability trait

pub use arena::NodeHandle;
pub use list::{IntoIter, Iter, KeyedList, LinkedList, Nodes, Values};
pub use node::{LinkedNode, Node, NodeRef};

use thiserror::Error;

/// Construction parameters for a [`LinkedList`]
#[derive(Debug, Clone)]
pub struct ListConfig {
    /// Number of node slots to reserve up front
    pub initial_capacity: usize,

    /// Re-check chain invariants after every structural mutation
    pub verify_invariants: bool,

    /// Emit a debug event for every structural mutation
    pub verbose: bool,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 0,
            verify_invariants: cfg!(debug_assertions),
            verbose: false,
        }
    }
}

impl ListConfig {
    /// Reserve room for `capacity` nodes
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Enable or disable post-mutation invariant checks
    pub fn with_invariant_checks(mut self, enabled: bool) -> Self {
        self.verify_invariants = enabled;
        self
    }

    /// Enable verbose mutation logging
    pub fn with_verbose(mut self, enabled: bool) -> Self {
        self.verbose = enabled;
        self
    }
}

/// Errors reported by list operations and by [`LinkedList::verify`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    /// No node carries the requested key
    #[error("no node with key {key} (list holds {count} nodes)")]
    KeyNotFound {
        /// Key that was requested
        key: usize,
        /// Number of nodes in the list
        count: usize,
    },

    /// Walking from head did not visit exactly `count` nodes
    #[error("chain from head visited {visited} nodes but count is {count}")]
    ChainLength {
        /// Nodes reached before the walk stopped
        visited: usize,
        /// Recorded node count
        count: usize,
    },

    /// A node's key does not match its position
    #[error("node {handle} carries key {found}, expected {expected}")]
    KeyOutOfSequence {
        /// Offending node
        handle: NodeHandle,
        /// Position in the chain
        expected: usize,
        /// Key stored on the node
        found: usize,
    },

    /// A back link disagrees with the forward chain
    #[error("back link of node {0} does not point at its predecessor")]
    BrokenBackLink(NodeHandle),

    /// The chain ends somewhere other than the recorded tail
    #[error("chain ends at {found:?} but tail is {tail:?}")]
    TailMismatch {
        /// Last node reached from head
        found: Option<NodeHandle>,
        /// Recorded tail
        tail: Option<NodeHandle>,
    },

    /// Head, tail and count disagree about emptiness
    #[error("head/tail presence disagrees with count {count}")]
    EmptinessMismatch {
        /// Recorded node count
        count: usize,
    },

    /// A link points at a slot that holds no live node
    #[error("link to {0} does not resolve to a live node")]
    DanglingLink(NodeHandle),

    /// Storage holds nodes the chain never reaches
    #[error("{live} live nodes in storage but count is {count}")]
    OrphanedNodes {
        /// Live nodes in storage
        live: usize,
        /// Recorded node count
        count: usize,
    },
}
