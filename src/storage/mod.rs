//! Key-value storage backends.
//!
//! Defines the storage collaborator trait plus the in-memory and
//! file-backed implementations.

pub mod file;
pub mod kv;

// Re-export commonly used items
pub use file::{FileStore, get_config_dir, get_storage_path};
pub use kv::{KeyValueStore, MemoryStore};
