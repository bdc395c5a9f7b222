//! Stable node handles
//!
//! A handle names the arena that issued it, a slot index, and the
//! generation the slot had when the node was stored. Freeing a slot bumps
//! its generation, so old handles stop resolving instead of aliasing
//! whatever reuses the slot. Handles from another arena never resolve.

use std::fmt;

/// Generation-checked reference to a node stored in a list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeHandle {
    owner: u32,
    index: u32,
    generation: u32,
}

impl NodeHandle {
    pub(crate) fn new(owner: u32, index: u32, generation: u32) -> Self {
        Self {
            owner,
            index,
            generation,
        }
    }

    /// Slot index inside the owning list's storage
    #[inline]
    pub fn index(&self) -> usize {
        self.index as usize
    }

    /// Generation of the slot when this handle was issued
    #[inline]
    pub fn generation(&self) -> u32 {
        self.generation
    }

    #[inline]
    pub(crate) fn owner(&self) -> u32 {
        self.owner
    }

    #[inline]
    pub(crate) fn slot(&self) -> u32 {
        self.index
    }

    /// Same slot and generation, issued by `owner`
    pub(crate) fn with_owner(self, owner: u32) -> Self {
        Self { owner, ..self }
    }
}

impl fmt::Display for NodeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}v{}@{}", self.index, self.generation, self.owner)
    }
}
