//! Utilities for *entities* in ECS.

use std::collections::HashMap;

use crate::error::{Error, Result};

use super::{registry, Component, ComponentKind, RuntimeId, StableTypeId};

/// A bag of components, at most one per kind.
///
/// Entities have value semantics: cloning deep-clones every contained
/// component, since components are exclusively owned by their entity.
/// Moving an entity transfers ownership without cloning.
///
#[derive(Clone, Default)]
pub struct Entity {
    components: HashMap<RuntimeId, Box<dyn Component>>,
}

impl Entity {
    /// Creates an entity with no components attached.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches a component, replacing any previous one of the same kind.
    ///
    /// Returns the replaced component, if any.
    ///
    pub fn add(&mut self, component: Box<dyn Component>) -> Option<Box<dyn Component>> {
        let id = registry::resolve(component.stable_id());
        self.components.insert(id, component)
    }

    /// Retrieves the component of the given kind, if attached.
    pub fn get(&self, tag: StableTypeId) -> Option<&dyn Component> {
        let id = registry::resolve(tag);
        self.components.get(&id).map(|component| component.as_ref())
    }

    /// Retrieves the component of the given kind mutably, if attached.
    pub fn get_mut(&mut self, tag: StableTypeId) -> Option<&mut dyn Component> {
        let id = registry::resolve(tag);
        self.components
            .get_mut(&id)
            .map(|component| component.as_mut())
    }

    /// Like [`get`](Entity::get), but absence is reported as an error.
    ///
    /// # Errors
    /// [`Error::ComponentNotFound`] if no component of the kind is attached.
    ///
    pub fn get_checked(&self, tag: StableTypeId) -> Result<&dyn Component> {
        self.get(tag).ok_or(Error::ComponentNotFound(tag))
    }

    /// Typed lookup for a statically known component kind.
    pub fn get_as<T>(&self) -> Option<&T>
    where
        T: ComponentKind,
    {
        self.get(T::STABLE_ID)?.as_any().downcast_ref()
    }

    /// Typed mutable lookup for a statically known component kind.
    pub fn get_as_mut<T>(&mut self) -> Option<&mut T>
    where
        T: ComponentKind,
    {
        self.get_mut(T::STABLE_ID)?.as_any_mut().downcast_mut()
    }

    /// Detaches the component of the given kind and hands ownership back.
    pub fn take(&mut self, tag: StableTypeId) -> Option<Box<dyn Component>> {
        let id = registry::resolve(tag);
        self.components.remove(&id)
    }

    /// Detaches and drops the component of the given kind; no-op if absent.
    pub fn remove(&mut self, tag: StableTypeId) {
        self.take(tag);
    }

    /// Drops all attached components.
    pub fn clear(&mut self) {
        self.components.clear();
    }

    /// Number of attached components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}
