//! Space registry - per-space configuration lookup for the indexing engine.
//!
//! The engine registers one [`SpaceIndexingConfig`] per configured space at
//! startup and looks it up by name when it builds tables and plans queries.
//!
//! # Invariants
//!
//! - At most one configuration per space name
//! - Registered configurations are shared as `Arc` and never change
//! - Spaces without a configuration resolve to all-default settings

use crate::config::SpaceIndexingConfig;
use crate::error::{IndexingError, IndexingResult};
use crate::types::SpaceName;
use parking_lot::RwLock;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, trace};

/// Registry of per-space indexing configurations.
///
/// Readers never block each other. Registration normally happens once,
/// before the engine starts serving queries.
#[derive(Debug, Default)]
pub struct SpaceRegistry {
    spaces: RwLock<HashMap<SpaceName, Arc<SpaceIndexingConfig>>>,
}

impl SpaceRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the given configurations.
    ///
    /// Fails on the first space name that appears twice.
    pub fn with_configs<I>(configs: I) -> IndexingResult<Self>
    where
        I: IntoIterator<Item = SpaceIndexingConfig>,
    {
        let registry = Self::new();
        for config in configs {
            registry.register(config)?;
        }
        Ok(registry)
    }

    /// Registers the configuration of a space.
    ///
    /// Returns the shared handle the engine keeps for the space.
    pub fn register(
        &self,
        config: SpaceIndexingConfig,
    ) -> IndexingResult<Arc<SpaceIndexingConfig>> {
        let mut spaces = self.spaces.write();
        match spaces.entry(config.space_name().clone()) {
            Entry::Occupied(entry) => Err(IndexingError::duplicate_space(entry.key().as_str())),
            Entry::Vacant(entry) => {
                debug!(space = %entry.key(), config = %config, "registered space indexing config");
                let config = Arc::new(config);
                entry.insert(Arc::clone(&config));
                Ok(config)
            }
        }
    }

    /// Removes the configuration of a space, returning it if present.
    pub fn unregister(&self, name: &str) -> Option<Arc<SpaceIndexingConfig>> {
        let removed = self.spaces.write().remove(name);
        if let Some(config) = &removed {
            debug!(space = %config.space_name(), "unregistered space indexing config");
        }
        removed
    }

    /// Returns the configuration registered for a space.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Arc<SpaceIndexingConfig>> {
        self.spaces.read().get(name).cloned()
    }

    /// Returns the configuration registered for a space, or an error.
    pub fn require(&self, name: &str) -> IndexingResult<Arc<SpaceIndexingConfig>> {
        self.get(name).ok_or_else(|| IndexingError::space_not_found(name))
    }

    /// Returns the configuration for a space, falling back to defaults.
    ///
    /// A space with no registered configuration gets every flag off.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Arc<SpaceIndexingConfig> {
        match self.get(name) {
            Some(config) => config,
            None => {
                trace!(space = %SpaceName::from(name), "no indexing config, using defaults");
                Arc::new(SpaceIndexingConfig::new(name))
            }
        }
    }

    /// Returns true if a configuration is registered for the space.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.spaces.read().contains_key(name)
    }

    /// Returns the registered space names in sorted order.
    #[must_use]
    pub fn names(&self) -> Vec<SpaceName> {
        let mut names: Vec<_> = self.spaces.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Returns the number of registered spaces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.spaces.read().len()
    }

    /// Returns true if no space is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spaces.read().is_empty()
    }
}
