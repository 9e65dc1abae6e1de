//! Utilities for *components* in ECS.

use std::any::Any;

use super::StableTypeId;

/// Objects of this trait represent *component* of ECS.
///
/// A component reports the stable tag of its kind and can produce an
/// owned, kind-preserving duplicate of itself. Once attached to an
/// [`Entity`](super::Entity) the entity owns it exclusively.
///
pub trait Component: Any + Send + Sync {
    /// Stable tag of this component's kind.
    fn stable_id(&self) -> StableTypeId;

    /// Deep, kind-preserving duplicate of this component.
    fn boxed_clone(&self) -> Box<dyn Component>;

    /// Upcast for typed access.
    fn as_any(&self) -> &dyn Any;

    /// Mutable upcast for typed access.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Component kind known at compile time, carrying its fixed tag.
///
/// Implementing this trait is enough to make a type usable as a
/// [`Component`]; the blanket impl wires up cloning and the tag. Kinds
/// whose tag only exists at runtime implement [`Component`] directly.
///
pub trait ComponentKind: Any + Send + Sync + Clone {
    /// Tag of this kind, stable across process runs.
    const STABLE_ID: StableTypeId;
}

impl<T> Component for T
where
    T: ComponentKind,
{
    fn stable_id(&self) -> StableTypeId {
        T::STABLE_ID
    }

    fn boxed_clone(&self) -> Box<dyn Component> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl Clone for Box<dyn Component> {
    fn clone(&self) -> Self {
        self.boxed_clone()
    }
}
