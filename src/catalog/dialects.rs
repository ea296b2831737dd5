//! Catalog of registered dialects over a settings key

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info};

use crate::catalog::descriptor::DialectDescriptor;
use crate::config::SETTINGS_DIALECT_REGISTRY;
use crate::store::error::{StoreError, json_type_name};
use crate::store::traits::ConfigStore;

/// Read and upsert access to the dialect list stored under one settings key
///
/// The catalog keeps no state of its own. Every call goes to the store, and
/// `register` is a plain read-modify-write: two callers racing on the same
/// key are last-write-wins, and the earlier registration can be lost.
pub struct DialectCatalog<S: ConfigStore> {
    store: Arc<S>,
    key: String,
}

impl<S: ConfigStore> DialectCatalog<S> {
    /// Creates a catalog over the default dialect registry key
    pub fn new(store: Arc<S>) -> Self {
        Self::with_key(store, SETTINGS_DIALECT_REGISTRY)
    }

    pub fn with_key(store: Arc<S>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the registered dialects in stored order
    ///
    /// An unset key yields an empty list. A value of the wrong shape is an
    /// error.
    pub fn list(&self) -> Result<Vec<DialectDescriptor>, StoreError> {
        let Some(value) = self.store.get(&self.key)? else {
            debug!("{} is not set", self.key);
            return Ok(Vec::new());
        };

        if !value.is_array() {
            return Err(StoreError::InvalidShape {
                key: self.key.clone(),
                reason: format!("expected an array, found {}", json_type_name(&value)),
            });
        }

        serde_json::from_value(value).map_err(|e| StoreError::InvalidShape {
            key: self.key.clone(),
            reason: e.to_string(),
        })
    }

    /// Registers a dialect, replacing any entry with the same name
    ///
    /// The new entry always ends up last.
    pub fn register(
        &self,
        name: &str,
        path: &str,
        description: &str,
        owner_id: &str,
    ) -> Result<(), StoreError> {
        self.register_descriptor(DialectDescriptor::new(name, path, description, owner_id))
    }

    pub fn register_descriptor(&self, descriptor: DialectDescriptor) -> Result<(), StoreError> {
        let mut dialects = self.list()?;
        let before = dialects.len();
        dialects.retain(|d| d.name != descriptor.name);
        let replaced = before != dialects.len();

        info!(
            "{} dialect {} from {}",
            if replaced { "Replacing" } else { "Registering" },
            descriptor.name,
            descriptor.owner_id
        );
        dialects.push(descriptor);

        let value: Value = serde_json::to_value(&dialects)?;
        self.store.set(&self.key, value)
    }

    /// Looks up a dialect by exact name
    pub fn find(&self, name: &str) -> Result<Option<DialectDescriptor>, StoreError> {
        Ok(self.list()?.into_iter().find(|d| d.name == name))
    }

    /// Returns the grammar path of every registered dialect, in stored order
    pub fn dialect_paths(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.list()?.into_iter().map(|d| d.path).collect())
    }
}
