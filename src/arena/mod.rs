//! Generational slot storage
//!
//! Backing store for the node chain. Entries are addressed by
//! [`NodeHandle`]; vacated slots are kept on a free list and reused with a
//! bumped generation. Every arena, clones included, draws its own owner id,
//! so a handle only resolves in the arena that issued it.

mod handle;

pub use handle::NodeHandle;

use std::sync::atomic::{AtomicU32, Ordering};

/// Source of owner ids, shared by every arena in the process
static NEXT_OWNER: AtomicU32 = AtomicU32::new(0);

fn next_owner() -> u32 {
    NEXT_OWNER.fetch_add(1, Ordering::Relaxed)
}

#[derive(Debug, Clone)]
struct Slot<E> {
    generation: u32,
    entry: Option<E>,
}

/// Slot arena with owner- and generation-checked handles
#[derive(Debug)]
pub(crate) struct Arena<E> {
    owner: u32,

    slots: Vec<Slot<E>>,

    /// Indices of vacant slots, most recently freed last
    free: Vec<u32>,

    /// Number of occupied slots
    len: usize,
}

impl<E> Arena<E> {
    /// Create an empty arena with room for `capacity` entries
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            owner: next_owner(),
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            len: 0,
        }
    }

    /// Id stamped into every handle this arena issues
    #[inline]
    pub(crate) fn owner(&self) -> u32 {
        self.owner
    }

    /// Number of live entries
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Store an entry, reusing a vacant slot when one exists
    ///
    /// # Panics
    ///
    /// When more than `u32::MAX` slots would be needed.
    pub(crate) fn insert(&mut self, entry: E) -> NodeHandle {
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            debug_assert!(slot.entry.is_none(), "free list points at a live slot");
            slot.entry = Some(entry);
            self.len += 1;
            return NodeHandle::new(self.owner, index, slot.generation);
        }

        let index = u32::try_from(self.slots.len())
            .expect("arena capacity exceeded: at most u32::MAX slots per list");
        self.slots.push(Slot {
            generation: 0,
            entry: Some(entry),
        });
        self.len += 1;
        NodeHandle::new(self.owner, index, 0)
    }

    fn slot(&self, handle: NodeHandle) -> Option<&Slot<E>> {
        if handle.owner() != self.owner {
            return None;
        }
        self.slots
            .get(handle.index())
            .filter(|slot| slot.generation == handle.generation())
    }

    fn slot_mut(&mut self, handle: NodeHandle) -> Option<&mut Slot<E>> {
        if handle.owner() != self.owner {
            return None;
        }
        self.slots
            .get_mut(handle.index())
            .filter(|slot| slot.generation == handle.generation())
    }

    /// Resolve a handle, `None` if it is stale or was issued elsewhere
    pub(crate) fn get(&self, handle: NodeHandle) -> Option<&E> {
        self.slot(handle).and_then(|slot| slot.entry.as_ref())
    }

    /// Mutable variant of [`Arena::get`]
    pub(crate) fn get_mut(&mut self, handle: NodeHandle) -> Option<&mut E> {
        self.slot_mut(handle).and_then(|slot| slot.entry.as_mut())
    }

    /// Take the entry out and retire the handle
    pub(crate) fn remove(&mut self, handle: NodeHandle) -> Option<E> {
        let slot = self.slot_mut(handle)?;
        let entry = slot.entry.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(handle.slot());
        self.len -= 1;
        Some(entry)
    }

    /// Visit every live entry
    pub(crate) fn entries_mut(&mut self) -> impl Iterator<Item = &mut E> {
        self.slots.iter_mut().filter_map(|slot| slot.entry.as_mut())
    }

    /// Drop every entry; all outstanding handles become stale
    pub(crate) fn clear(&mut self) {
        for (index, slot) in (0u32..).zip(self.slots.iter_mut()) {
            if slot.entry.take().is_some() {
                slot.generation = slot.generation.wrapping_add(1);
                self.free.push(index);
            }
        }
        self.len = 0;
    }
}

/// Copies the slots under a fresh owner id
///
/// Handles stored inside the entries still name the source arena; the
/// caller restamps them.
impl<E: Clone> Clone for Arena<E> {
    fn clone(&self) -> Self {
        Self {
            owner: next_owner(),
            slots: self.slots.clone(),
            free: self.free.clone(),
            len: self.len,
        }
    }
}
