//! Generational storage for all entities of ECS.

use super::Entity;


/// Handle to an entity stored in [`EntityStorage`].
///
/// Holds the slot index together with the generation the slot had when the
/// handle was issued; the handle goes stale as soon as the entity is
/// removed, even if the slot is later reused. A handle does not keep its
/// target alive, it is purely a lookup key.
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct EntityId {
    index: usize,
    gen: u64,
}

impl EntityId {
    /// Index of the storage slot this handle points at.
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Generation the slot held when this handle was issued.
    pub const fn generation(&self) -> u64 {
        self.gen
    }
}

struct Entry {
    entity: Entity,
    gen: u64,
}

/// Slot array owning every entity, with stale-handle detection.
///
/// Freed slots are reused most-recently-freed first; correctness does not
/// depend on the reuse order, only on the generation check.
///
pub struct EntityStorage {
    entries: Vec<Entry>,
    tombstones: Vec<usize>,
    next_gen: u64,
    len: usize,
}

impl EntityStorage {
    /// Generation of slots which hold no live entity.
    /// Never issued to a handle.
    pub const INVALID_GEN: u64 = 0;

    /// Creates an empty storage.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty storage with room for `capacity` entities
    /// before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            tombstones: Vec::new(),
            next_gen: Self::INVALID_GEN + 1,
            len: 0,
        }
    }

    /// Stores the entity and issues a handle for it.
    ///
    /// The most recently freed slot is reused when one is available,
    /// otherwise a new slot is appended. Every insert issues a generation
    /// greater than any previously issued for the slot.
    ///
    pub fn insert(&mut self, entity: Entity) -> EntityId {
        let gen = self.next_gen;
        self.next_gen += 1;

        let index = match self.tombstones.pop() {
            Some(index) => {
                let entry = &mut self.entries[index];
                entry.entity = entity;
                entry.gen = gen;
                index
            }
            None => {
                self.entries.push(Entry { entity, gen });
                self.entries.len() - 1
            }
        };
        self.len += 1;
        log::trace!("entity stored at slot {} (generation {})", index, gen);
        EntityId { index, gen }
    }

    /// Resolves a handle into the stored entity.
    ///
    /// Returns `None` for stale and out-of-range handles.
    ///
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        let entry = self.entries.get(id.index)?;
        if entry.gen == id.gen {
            Some(&entry.entity)
        } else {
            None
        }
    }

    /// Resolves a handle into the stored entity, mutably.
    ///
    /// Returns `None` for stale and out-of-range handles.
    ///
    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        let entry = self.entries.get_mut(id.index)?;
        if entry.gen == id.gen {
            Some(&mut entry.entity)
        } else {
            None
        }
    }

    /// Removes the entity behind the handle and frees its slot for reuse.
    ///
    /// Stale and out-of-range handles are ignored, so double removal is
    /// harmless. The entity's components are dropped before the slot is
    /// tombstoned, so a late stale handle can never observe them.
    ///
    pub fn remove(&mut self, id: EntityId) {
        let entry = match self.entries.get_mut(id.index) {
            Some(entry) if entry.gen == id.gen => entry,
            _ => return,
        };
        entry.entity.clear();
        entry.gen = Self::INVALID_GEN;
        self.tombstones.push(id.index);
        self.len -= 1;
        log::trace!("slot {} freed", id.index);
    }

    /// Number of live entities, tracked incrementally.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Default for EntityStorage {
    fn default() -> Self {
        Self::new()
    }
}
