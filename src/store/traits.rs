//! ConfigStore trait definition

#[cfg(test)]
use mockall::automock;
use serde_json::Value;

use crate::store::error::StoreError;

/// Key-value settings store owned by the host
///
/// Each call is a whole-value read or write. Stores give no guarantee across
/// calls, so a `get` followed by a `set` is not atomic.
#[cfg_attr(test, automock)]
pub trait ConfigStore: Send + Sync {
    /// Returns the value stored under `key`, or `None` if it was never set
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError>;

    /// Replaces the value stored under `key`
    fn set(&self, key: &str, value: Value) -> Result<(), StoreError>;
}
