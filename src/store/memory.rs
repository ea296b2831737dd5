//! In-process settings store

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use serde_json::Value;
use tracing::debug;

use crate::store::error::StoreError;
use crate::store::traits::ConfigStore;

/// Settings store kept entirely in memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with one value
    pub fn with_value(key: &str, value: Value) -> Self {
        let mut values = HashMap::new();
        values.insert(key.to_string(), value);
        Self {
            values: Mutex::new(values),
        }
    }

    fn lock_values(&self) -> Result<MutexGuard<'_, HashMap<String, Value>>, StoreError> {
        self.values.lock().map_err(|_| StoreError::LockPoisoned)
    }
}

impl ConfigStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        let values = self.lock_values()?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: Value) -> Result<(), StoreError> {
        debug!("Setting {} in memory store", key);
        let mut values = self.lock_values()?;
        values.insert(key.to_string(), value);
        Ok(())
    }
}
