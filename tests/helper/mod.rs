//! Store test utilities

use std::sync::{Arc, Mutex};

use serde_json::Value;

use dialect_registry::{ConfigStore, MemoryStore, StoreError};

type Hook = Box<dyn FnOnce(&Arc<MemoryStore>) + Send>;

/// Store that runs a hook right after the first `get` returns
///
/// The hook sees the same backing store, so it can play the part of a second
/// caller that writes between this caller's read and write.
pub struct InterleavingStore {
    inner: Arc<MemoryStore>,
    hook: Mutex<Option<Hook>>,
}

impl InterleavingStore {
    pub fn new(inner: Arc<MemoryStore>) -> Self {
        Self {
            inner,
            hook: Mutex::new(None),
        }
    }

    pub fn after_first_get(self, hook: impl FnOnce(&Arc<MemoryStore>) + Send + 'static) -> Self {
        *self.hook.lock().unwrap() = Some(Box::new(hook));
        self
    }
}

impl ConfigStore for InterleavingStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        let value = self.inner.get(key)?;
        let hook = self.hook.lock().unwrap().take();
        if let Some(hook) = hook {
            hook(&self.inner);
        }
        Ok(value)
    }

    fn set(&self, key: &str, value: Value) -> Result<(), StoreError> {
        self.inner.set(key, value)
    }
}
