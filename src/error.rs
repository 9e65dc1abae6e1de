//! Utilities for storage engine error handling.

use thiserror::Error;

use crate::ecs::StableTypeId;

/// Result of any operation which can return an error.
pub type Result<T> = std::result::Result<T, Error>;

/// General error type of the storage engine.
///
/// Absence of a component or an entity is an expected outcome and is
/// reported as `None` by the unchecked lookups; only the checked variants
/// surface it as an error.
///
#[derive(Debug, Error)]
pub enum Error {
    /// No component of the requested kind is attached to the entity.
    #[error("component {0} not found on entity")]
    ComponentNotFound(StableTypeId),
}
