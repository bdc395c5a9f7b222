//! Chain invariants
//!
//! A well-formed list satisfies:
//!   - head, tail and `count == 0` agree about emptiness
//!   - following `next` from head reaches tail in exactly `count` steps
//!   - the node at position `i` carries key `i`
//!   - every back link points at the forward predecessor
//!   - the arena holds no node outside the chain

use tracing::error;

use super::LinkedList;
use crate::{node::LinkedNode, ListError};

impl<T> LinkedList<T> {
    /// Walk the whole chain and report the first broken invariant
    pub fn verify(&self) -> Result<(), ListError> {
        let empty = self.count == 0;
        if self.head.is_none() != empty || self.tail.is_none() != empty {
            return Err(ListError::EmptinessMismatch { count: self.count });
        }

        let mut prev = None;
        let mut cursor = self.head;
        let mut visited = 0;

        while let Some(handle) = cursor {
            // More nodes than recorded, or a cycle
            if visited == self.count {
                return Err(ListError::ChainLength {
                    visited: visited + 1,
                    count: self.count,
                });
            }

            let link = self
                .nodes
                .get(handle)
                .ok_or(ListError::DanglingLink(handle))?;
            if link.prev != prev {
                return Err(ListError::BrokenBackLink(handle));
            }
            if link.node.key() != visited {
                return Err(ListError::KeyOutOfSequence {
                    handle,
                    expected: visited,
                    found: link.node.key(),
                });
            }

            prev = Some(handle);
            cursor = link.node.next();
            visited += 1;
        }

        if visited != self.count {
            return Err(ListError::ChainLength {
                visited,
                count: self.count,
            });
        }
        if prev != self.tail {
            return Err(ListError::TailMismatch {
                found: prev,
                tail: self.tail,
            });
        }
        if self.nodes.len() != self.count {
            return Err(ListError::OrphanedNodes {
                live: self.nodes.len(),
                count: self.count,
            });
        }

        Ok(())
    }

    /// Post-mutation check, active when the config asks for it
    pub(super) fn check_invariants(&self) {
        if !self.config.verify_invariants {
            return;
        }
        if let Err(err) = self.verify() {
            error!(%err, "list invariant violated");
            debug_assert!(false, "list invariant violated: {err}");
        }
    }
}
