//! Entity/component storage core for a simple game engine.
//!
//! Components are opaque, cloneable payloads tagged by a [`StableTypeId`];
//! an [`Entity`] owns at most one component per kind; the [`EntityStorage`]
//! arena owns all entities and hands out generational [`EntityId`] handles
//! which go stale on removal.

pub use ecs::{Component, ComponentKind, Entity, EntityId, EntityStorage, StableTypeId};

use config::Config;

pub mod config;
pub mod ecs;
pub mod error;
pub mod logger;

/// Creates the entity storage for an application.
///
/// The storage is pre-sized from the given config. Logging should already
/// be set up (see [`logger::init`]) so the greeting goes somewhere.
///
pub fn init(config: Config) -> EntityStorage {
    log::info!(
        "{} v{} running on {} v{}",
        config.name(),
        config.version(),
        config::ENGINE_NAME,
        *config::ENGINE_VERSION,
    );
    EntityStorage::with_capacity(config.entity_capacity())
}
