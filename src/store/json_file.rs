//! Flat `settings.json` store
//!
//! The file holds a single JSON object whose keys are dotted settings
//! identifiers, the same layout editors use for user settings:
//!
//! ```json
//! {
//!   "editor.tabSize": 4,
//!   "cobol-lsp.dialect.registry": [
//!     { "name": "idms", "path": "/dialects/idms.json", "description": "IDMS", "extensionId": "ext.idms" }
//!   ]
//! }
//! ```

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::store::error::{StoreError, json_type_name};
use crate::store::traits::ConfigStore;

type Settings = IndexMap<String, Value>;

/// Root of a settings file; anything but an object is rejected after parsing
#[derive(Deserialize)]
#[serde(untagged)]
enum SettingsRoot {
    Object(Settings),
    Other(Value),
}

/// Settings store backed by a JSON file
///
/// Every `set` rereads the file and rewrites it whole. Unrelated keys keep
/// their position. Concurrent writers are last-write-wins.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_settings(&self, key: &str) -> Result<Settings, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Settings file {:?} does not exist yet", self.path);
                return Ok(Settings::new());
            }
            Err(e) => return Err(e.into()),
        };

        if content.trim().is_empty() {
            return Ok(Settings::new());
        }

        match serde_json::from_str::<SettingsRoot>(&content)? {
            SettingsRoot::Object(settings) => Ok(settings),
            SettingsRoot::Other(other) => Err(StoreError::InvalidShape {
                key: key.to_string(),
                reason: format!(
                    "settings file {} must contain a JSON object, found {}",
                    self.path.display(),
                    json_type_name(&other)
                ),
            }),
        }
    }

    /// Writes to a sibling temp file and renames it over the settings file,
    /// so a failed write leaves the previous file intact
    fn write_settings(&self, settings: &Settings) -> Result<(), StoreError> {
        let dir = match self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            Some(parent) => {
                fs::create_dir_all(parent)?;
                parent
            }
            None => Path::new("."),
        };
        let mut content = serde_json::to_string_pretty(settings)?;
        content.push('\n');

        let mut temp = NamedTempFile::new_in(dir)?;
        temp.write_all(content.as_bytes())?;
        temp.as_file().sync_all()?;
        temp.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

impl ConfigStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        let mut settings = self.read_settings(key)?;
        Ok(settings.shift_remove(key))
    }

    fn set(&self, key: &str, value: Value) -> Result<(), StoreError> {
        let mut settings = self.read_settings(key)?;
        settings.insert(key.to_string(), value);
        self.write_settings(&settings)?;
        info!("Wrote {} to {:?}", key, self.path);
        Ok(())
    }
}
