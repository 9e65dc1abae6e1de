//! Entity Component System (ECS) utilities for game engine.

pub use component::{Component, ComponentKind};
pub use entity::Entity;
pub use registry::{RuntimeId, TypeIdRegistry};
pub use storage::{EntityId, EntityStorage};
pub use type_id::StableTypeId;

mod component;
mod entity;
mod registry;
mod storage;
mod type_id;
