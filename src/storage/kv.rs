//! Generic key-value storage collaborator.
//!
//! Values are kept as JSON, so whatever type `set` serialized is what a
//! matching `get` deserializes. No schema is enforced on stored values.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;

use crate::error::Result;

/// Key-value persistence over string keys and JSON-serializable values.
///
/// `get` of a key that was never set yields `Ok(None)`; `set` overwrites
/// unconditionally. Backends decide where the data actually lives.
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any.
    fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set<T: Serialize>(&mut self, key: &str, value: &T) -> Result<()>;
}

/// In-memory backend, mainly for tests and embedders that manage their
/// own persistence.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, serde_json::Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.entries.get(key) {
            Some(value) => Ok(Some(serde_json::from_value(value.clone())?)),
            None => Ok(None),
        }
    }

    fn set<T: Serialize>(&mut self, key: &str, value: &T) -> Result<()> {
        self.entries
            .insert(key.to_string(), serde_json::to_value(value)?);
        Ok(())
    }
}
