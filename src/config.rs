//! Engine configuration provided by the application.

use semver::Version;

/// Engine name, as the build system knows it.
pub const ENGINE_NAME: &str = env!("CARGO_CRATE_NAME", "library must be compiled by Cargo");

const ENGINE_VERSION_STR: &str = env!("CARGO_PKG_VERSION", "library must be compiled by Cargo");
lazy_static::lazy_static! {
    /// Engine version, parsed once from the crate metadata.
    pub static ref ENGINE_VERSION: Version = ENGINE_VERSION_STR.parse().unwrap();
}

/// Application-supplied configuration of the storage engine.
#[derive(Debug, Clone)]
pub struct Config {
    name: String,
    version: Version,
    entity_capacity: usize,
}

impl Config {
    pub const fn new(name: String, version: Version) -> Self {
        Self {
            name,
            version,
            entity_capacity: 0,
        }
    }

    /// Pre-sizes the entity storage created by [`init`](crate::init).
    pub fn with_entity_capacity(mut self, capacity: usize) -> Self {
        self.entity_capacity = capacity;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &Version {
        &self.version
    }

    pub const fn entity_capacity(&self) -> usize {
        self.entity_capacity
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new("Hello World".to_string(), Version::new(0, 0, 0))
    }
}
