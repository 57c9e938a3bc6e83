//! File-backed key-value storage.
//!
//! Persists all entries as a single JSON object map in one file.
//! Cross-platform: uses appropriate config directories for each OS.

use log::debug;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{Result, StoreError};
use crate::storage::kv::KeyValueStore;

const APP_NAME: &str = "user-settings";
const STORAGE_FILE: &str = "storage.json";

/// Get the configuration directory path.
/// - Linux: ~/.config/user-settings/
/// - Windows: %APPDATA%\user-settings\
pub fn get_config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|p| p.join(APP_NAME))
        .ok_or(StoreError::ConfigDirUnavailable)
}

/// Get the full path to the default storage file.
pub fn get_storage_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join(STORAGE_FILE))
}

/// Key-value backend persisted as a JSON object map in a single file.
///
/// Each `get` re-reads the file and each `set` rewrites it, so the file is
/// always the source of truth. A missing file behaves as an empty store.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Open a store backed by the platform default location.
    pub fn open_default() -> Result<Self> {
        Ok(Self::open(get_storage_path()?))
    }

    /// Open a store backed by an explicit file path.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<HashMap<String, serde_json::Value>> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }
        let content = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    fn write_entries(&self, entries: &HashMap<String, serde_json::Value>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(entries)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let mut entries = self.read_entries()?;
        match entries.remove(key) {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }

    fn set<T: Serialize>(&mut self, key: &str, value: &T) -> Result<()> {
        let mut entries = self.read_entries()?;
        entries.insert(key.to_string(), serde_json::to_value(value)?);
        self.write_entries(&entries)?;
        debug!("Wrote key '{}' to {}", key, self.path.display());
        Ok(())
    }
}
