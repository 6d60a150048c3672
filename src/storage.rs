//! Local key/value storage for the persisted conversation.
//!
//! Native builds keep one JSON file per key under the platform data dir.
//! wasm builds use the browser's `localStorage`, so the log survives reloads.
//! The in-process map backs tests.

use std::collections::HashMap;
use std::sync::Mutex;

#[cfg(not(target_arch = "wasm32"))]
use std::{fs, path::PathBuf};

pub const CHAT_HISTORY_KEY: &str = "chatHistory";

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode snapshot: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Storage lock poisoned")]
    Poisoned,

    #[error("Browser storage failed: {0}")]
    Browser(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
    fn remove(&self, key: &str) -> StorageResult<()>;
}

// ============================================
// In-memory backend
// ============================================

#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        let entries = self.entries.lock().ok()?;
        entries.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        entries.remove(key);
        Ok(())
    }
}

// ============================================
// File backend (native platforms)
// ============================================

#[cfg(not(target_arch = "wasm32"))]
pub struct FileStore {
    dir: PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// `<data_local_dir>/productfinder/storage`, or `cache/storage` when the
    /// platform has no data dir.
    pub fn default_dir() -> PathBuf {
        if let Some(data_dir) = dirs::data_local_dir() {
            return data_dir.join("productfinder").join("storage");
        }
        PathBuf::from("cache").join("storage")
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", sanitize_key(key)))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path_for(key)).ok()
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(key);
        // Readers only ever see the old file or the complete new one
        let staging = path.with_extension("json.tmp");
        fs::write(&staging, value)?;
        fs::rename(&staging, &path)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        let path = self.path_for(key);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

// ============================================
// Browser backend (web)
// ============================================

/// `window.localStorage`. The handle is looked up per call because JS values
/// cannot be shared across threads.
#[cfg(target_arch = "wasm32")]
#[derive(Default)]
pub struct BrowserStore;

#[cfg(target_arch = "wasm32")]
impl BrowserStore {
    pub fn new() -> Self {
        Self
    }

    fn local_storage() -> StorageResult<web_sys::Storage> {
        let window =
            web_sys::window().ok_or_else(|| StorageError::Browser("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|err| StorageError::Browser(format!("{:?}", err)))?
            .ok_or_else(|| StorageError::Browser("localStorage unavailable".to_string()))
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::local_storage().ok()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        Self::local_storage()?
            .set_item(key, value)
            .map_err(|err| StorageError::Browser(format!("{:?}", err)))
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        Self::local_storage()?
            .remove_item(key)
            .map_err(|err| StorageError::Browser(format!("{:?}", err)))
    }
}

/// Sanitize storage key for filesystem use
#[cfg(not(target_arch = "wasm32"))]
fn sanitize_key(key: &str) -> String {
    key.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .take(64)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_key() {
        assert_eq!(sanitize_key("chatHistory"), "chatHistory");
        assert_eq!(sanitize_key("user:preferences"), "user_preferences");
        assert_eq!(sanitize_key("../escape"), "___escape");
    }

    #[test]
    fn test_memory_store_set_get_remove() {
        let store = MemoryStore::new();
        assert!(store.get(CHAT_HISTORY_KEY).is_none());

        store.set(CHAT_HISTORY_KEY, "[]").expect("Failed to set");
        assert_eq!(store.get(CHAT_HISTORY_KEY), Some("[]".to_string()));

        store.remove(CHAT_HISTORY_KEY).expect("Failed to remove");
        assert!(store.get(CHAT_HISTORY_KEY).is_none());
    }
}
