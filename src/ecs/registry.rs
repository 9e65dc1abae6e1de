//! Mapping of stable component tags to per-process runtime ids.

use std::collections::HashMap;
use std::sync::Mutex;

use lazy_static::lazy_static;

use super::StableTypeId;

/// Dense per-process identifier standing in for a [`StableTypeId`].
///
/// Cheap to hash and compare, so per-entity component maps key on this
/// instead of the full 128-bit tag. Assigned on first sight, never reused,
/// and only meaningful within one process run.
///
pub type RuntimeId = u32;

/// Incremental table assigning a [`RuntimeId`] to every tag on first sight.
///
/// Entries are never removed; ids are handed out sequentially from zero.
/// The table is the sole authority translating between the stable external
/// tag and the volatile internal key.
///
#[derive(Default)]
pub struct TypeIdRegistry {
    mapping: HashMap<StableTypeId, RuntimeId>,
    next: RuntimeId,
}

impl TypeIdRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the runtime id of the tag, assigning the next free id
    /// if the tag has not been seen before.
    pub fn resolve(&mut self, tag: StableTypeId) -> RuntimeId {
        if let Some(id) = self.mapping.get(&tag) {
            return *id;
        }
        let id = self.next;
        self.mapping.insert(tag, id);
        self.next += 1;
        log::debug!("component kind {} assigned runtime id {}", tag, id);
        id
    }

    /// Number of component kinds seen so far.
    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }
}

lazy_static! {
    static ref REGISTRY: Mutex<TypeIdRegistry> = Mutex::new(TypeIdRegistry::new());
}

/// Resolves a tag against the process-wide registry.
///
/// Check-and-insert runs as one critical section, so concurrent first-time
/// resolutions of the same tag converge on a single id.
///
pub(super) fn resolve(tag: StableTypeId) -> RuntimeId {
    let mut registry = REGISTRY.lock().expect("type id registry lock poisoned");
    registry.resolve(tag)
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;

    #[test]
    fn test_idempotence() {
        let mut registry = TypeIdRegistry::new();
        let tag = StableTypeId::fixed(1, 2);

        let id = registry.resolve(tag);
        assert_eq!(registry.resolve(tag), id);
        assert_eq!(registry.resolve(tag), id);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_dense_assignment() {
        let mut registry = TypeIdRegistry::new();
        assert!(registry.is_empty());

        let ids: Vec<_> = (0..32)
            .map(|lo| registry.resolve(StableTypeId::fixed(0, lo)))
            .collect();
        assert_eq!(ids, (0..32).collect::<Vec<_>>());
        assert_eq!(registry.len(), 32);
    }

    #[test]
    fn test_distinct_tags_distinct_ids() {
        let mut registry = TypeIdRegistry::new();
        let first = registry.resolve(StableTypeId::random());
        let second = registry.resolve(StableTypeId::random());
        assert_ne!(first, second);
    }

    #[test]
    fn test_concurrent_resolution_converges() {
        let tag = StableTypeId::random();

        let handles: Vec<_> = (0..8)
            .map(|_| thread::spawn(move || resolve(tag)))
            .collect();
        let ids: Vec<_> = handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect();

        assert!(ids.windows(2).all(|pair| pair[0] == pair[1]));
    }
}
