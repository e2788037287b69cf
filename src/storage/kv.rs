//! Key-value persistence
//!
//! The narrow storage interface the application layer persists through.
//! Values are opaque strings; callers own their encoding.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::error::{ForecastError, ForecastResult};

use super::file_io::{read_json, write_json_atomic};

/// String key-value store
pub trait KeyValueStore {
    fn get(&self, key: &str) -> ForecastResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> ForecastResult<()>;

    /// Remove a key, returning whether it was present
    fn remove(&self, key: &str) -> ForecastResult<bool>;

    /// All keys in sorted order
    fn keys(&self) -> ForecastResult<Vec<String>>;
}

fn poisoned<E: std::fmt::Display>(e: E) -> ForecastError {
    ForecastError::Storage(format!("Failed to acquire lock: {}", e))
}

/// In-process store, useful for tests and embedding
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: RwLock<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> ForecastResult<Option<String>> {
        let data = self.data.read().map_err(poisoned)?;
        Ok(data.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> ForecastResult<()> {
        let mut data = self.data.write().map_err(poisoned)?;
        data.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> ForecastResult<bool> {
        let mut data = self.data.write().map_err(poisoned)?;
        Ok(data.remove(key).is_some())
    }

    fn keys(&self) -> ForecastResult<Vec<String>> {
        let data = self.data.read().map_err(poisoned)?;
        Ok(data.keys().cloned().collect())
    }
}

/// Store backed by a single JSON object file
///
/// The file is read once on open and rewritten atomically on every change.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    data: RwLock<BTreeMap<String, String>>,
}

impl JsonFileStore {
    /// Open the store, treating a missing file as empty
    pub fn open(path: impl Into<PathBuf>) -> ForecastResult<Self> {
        let path = path.into();
        let data: BTreeMap<String, String> = read_json(&path)?;
        tracing::debug!(path = %path.display(), entries = data.len(), "Opened key-value store");
        Ok(Self {
            path,
            data: RwLock::new(data),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, data: &BTreeMap<String, String>) -> ForecastResult<()> {
        write_json_atomic(&self.path, data)
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> ForecastResult<Option<String>> {
        let data = self.data.read().map_err(poisoned)?;
        Ok(data.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> ForecastResult<()> {
        let mut data = self.data.write().map_err(poisoned)?;
        let mut next = data.clone();
        next.insert(key.to_string(), value.to_string());
        self.persist(&next)?;
        *data = next;
        Ok(())
    }

    fn remove(&self, key: &str) -> ForecastResult<bool> {
        let mut data = self.data.write().map_err(poisoned)?;
        if !data.contains_key(key) {
            return Ok(false);
        }
        let mut next = data.clone();
        next.remove(key);
        self.persist(&next)?;
        *data = next;
        Ok(true)
    }

    fn keys(&self) -> ForecastResult<Vec<String>> {
        let data = self.data.read().map_err(poisoned)?;
        Ok(data.keys().cloned().collect())
    }
}
