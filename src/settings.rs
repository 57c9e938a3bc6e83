//! User-profile settings persisted through a key-value backend.
//!
//! One settings value lives under one storage key. Loading falls back to
//! the built-in defaults when nothing is stored; saving replaces the whole
//! value. There is no field-level patching and no merge with defaults on
//! load: a stored document missing newer fields keeps those fields absent.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::storage::kv::KeyValueStore;

/// Storage key used when none is supplied.
pub const DEFAULT_STORAGE_KEY: &str = "userStorage";

/// Avatar shown before the user picks one.
const DEFAULT_AVATAR: &str = "https://avatars.githubusercontent.com/u/32251822?v=4";

// =============================================================================
// Settings Structures
// =============================================================================

/// Profile fields of the local user.
///
/// Every field is optional in the persisted form. Documents written by an
/// older schema deserialize with the newer fields as `None`; they are
/// returned that way, not filled in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    /// Avatar image URI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,

    /// Account balance, non-negative.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_balance: Option<f64>,

    /// String-encoded tier identifier (e.g. "0").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_grade: Option<String>,

    /// Display name, may be empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nick_name: Option<String>,
}

/// The entire persisted settings surface for the (singular) local user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserState {
    pub user_info: UserInfo,
}

impl UserState {
    /// Built-in defaults used when nothing has been stored yet.
    ///
    /// Pure and deterministic: repeated calls yield equal values.
    pub fn default_settings() -> Self {
        Self {
            user_info: UserInfo {
                avatar: Some(DEFAULT_AVATAR.to_string()),
                user_balance: Some(0.0),
                user_grade: Some("0".to_string()),
                nick_name: Some(String::new()),
            },
        }
    }
}

// =============================================================================
// Settings Store
// =============================================================================

/// Reads and writes the single persisted [`UserState`] value.
///
/// The backend and the key name are constructor parameters so embedders can
/// isolate tests with a [`MemoryStore`](crate::storage::MemoryStore) or keep
/// several profiles under distinct keys.
#[derive(Debug, Clone)]
pub struct SettingsStore<S: KeyValueStore> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> SettingsStore<S> {
    /// Wrap `store` using the default key, [`DEFAULT_STORAGE_KEY`].
    pub fn new(store: S) -> Self {
        Self::with_key(store, DEFAULT_STORAGE_KEY)
    }

    /// Wrap `store` using an explicit key name.
    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Key the settings value is stored under.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Load the persisted settings, or the defaults if none are stored.
    ///
    /// A stored value is returned unmodified: no merge with defaults and no
    /// validation. Backend failures propagate untranslated.
    pub fn load(&self) -> Result<UserState> {
        match self.store.get::<UserState>(&self.key)? {
            Some(state) => Ok(state),
            None => {
                debug!("No settings under '{}', using defaults", self.key);
                Ok(UserState::default_settings())
            }
        }
    }

    /// Persist `state`, unconditionally overwriting any prior value.
    pub fn save(&mut self, state: &UserState) -> Result<()> {
        self.store.set(&self.key, state)?;
        debug!("Saved settings under '{}'", self.key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::kv::MemoryStore;
    use serde_json::json;

    fn sample_state() -> UserState {
        UserState {
            user_info: UserInfo {
                avatar: Some("x".to_string()),
                user_balance: Some(42.0),
                user_grade: Some("3".to_string()),
                nick_name: Some("Bob".to_string()),
            },
        }
    }

    #[test]
    fn test_defaults_are_deterministic() {
        assert_eq!(UserState::default_settings(), UserState::default_settings());
    }

    #[test]
    fn test_default_field_values() {
        let info = UserState::default_settings().user_info;
        assert_eq!(info.user_balance, Some(0.0));
        assert_eq!(info.user_grade.as_deref(), Some("0"));
        assert_eq!(info.nick_name.as_deref(), Some(""));
        assert!(!info.avatar.unwrap().is_empty());
    }

    #[test]
    fn test_load_empty_store_returns_defaults() {
        let settings = SettingsStore::new(MemoryStore::new());
        assert_eq!(settings.load().unwrap(), UserState::default_settings());
    }

    #[test]
    fn test_save_load_round_trip() {
        let mut settings = SettingsStore::new(MemoryStore::new());
        let state = sample_state();
        settings.save(&state).unwrap();
        assert_eq!(settings.load().unwrap(), state);
    }

    #[test]
    fn test_last_write_wins() {
        let mut settings = SettingsStore::new(MemoryStore::new());
        let mut first = sample_state();
        first.user_info.nick_name = Some("Alice".to_string());
        let second = sample_state();

        settings.save(&first).unwrap();
        settings.save(&second).unwrap();
        assert_eq!(settings.load().unwrap(), second);
    }

    #[test]
    fn test_partial_document_is_not_merged() {
        let mut store = MemoryStore::new();
        store
            .set(
                DEFAULT_STORAGE_KEY,
                &json!({ "userInfo": { "nickName": "Alice" } }),
            )
            .unwrap();

        let loaded = SettingsStore::new(store).load().unwrap();
        assert_eq!(loaded.user_info.nick_name.as_deref(), Some("Alice"));
        assert_eq!(loaded.user_info.avatar, None);
        assert_eq!(loaded.user_info.user_balance, None);
        assert_eq!(loaded.user_info.user_grade, None);
    }

    #[test]
    fn test_partial_document_round_trips_unmodified() {
        let mut store = MemoryStore::new();
        store
            .set(
                DEFAULT_STORAGE_KEY,
                &json!({ "userInfo": { "nickName": "Alice" } }),
            )
            .unwrap();

        let mut settings = SettingsStore::new(store);
        let loaded = settings.load().unwrap();
        settings.save(&loaded).unwrap();
        assert_eq!(settings.load().unwrap(), loaded);
    }

    #[test]
    fn test_custom_key_is_isolated() {
        let mut store = MemoryStore::new();
        store.set("other", &sample_state()).unwrap();

        let settings = SettingsStore::with_key(store, "mine");
        assert_eq!(settings.load().unwrap(), UserState::default_settings());
    }

    #[test]
    fn test_round_trip_through_file_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = crate::storage::FileStore::open(dir.path().join("storage.json"));
        let mut settings = SettingsStore::new(store);

        let state = sample_state();
        settings.save(&state).unwrap();
        assert_eq!(settings.load().unwrap(), state);
    }

    #[test]
    fn test_persisted_layout_is_camel_case() {
        let value = serde_json::to_value(sample_state()).unwrap();
        assert_eq!(
            value,
            json!({
                "userInfo": {
                    "avatar": "x",
                    "userBalance": 42.0,
                    "userGrade": "3",
                    "nickName": "Bob",
                }
            })
        );
    }
}
