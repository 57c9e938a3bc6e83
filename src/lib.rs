//! User Settings Library
//!
//! Local persistence for a single user-profile settings value over a
//! pluggable key-value store.
//!
//! # Features
//!
//! - Load settings with a built-in default fallback
//! - Save settings by whole-value replacement
//! - File-backed and in-memory storage backends
//!
//! # Example
//!
//! ```no_run
//! use user_settings::settings::SettingsStore;
//! use user_settings::storage::FileStore;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = FileStore::open_default()?;
//!     let mut settings = SettingsStore::new(store);
//!
//!     // Defaults until something has been saved
//!     let mut state = settings.load()?;
//!     state.user_info.nick_name = Some("Bob".to_string());
//!     settings.save(&state)?;
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod settings;
pub mod storage;

// Re-exports for convenience
pub use error::{Result, StoreError};
pub use settings::{DEFAULT_STORAGE_KEY, SettingsStore, UserInfo, UserState};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
