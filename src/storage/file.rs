//! Durable JSON-file backend
//!
//! Persists the whole key-value map as one JSON document, standing in for an
//! origin-scoped browser store. Every operation reads the file fresh and
//! every write rewrites it in full, so the latest on-disk state always wins.

use crate::error::{CampusNetError, Result};
use crate::storage::KeyValueBackend;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File-backed [`KeyValueBackend`]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    /// Open (or lazily create) a backend at the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let raw = fs::read_to_string(&self.path)?;
        if raw.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&raw)
            .map_err(|e| CampusNetError::Storage(format!("corrupt store file: {}", e)))
    }

    fn persist(&self, map: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let raw = serde_json::to_string(map)?;
        fs::write(&self.path, raw)?;
        debug!("Persisted {} keys to {}", map.len(), self.path.display());
        Ok(())
    }
}

impl KeyValueBackend for FileBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.load()?.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let mut map = self.load().unwrap_or_default();
        map.insert(key.to_string(), value.to_string());
        self.persist(&map)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut map = self.load().unwrap_or_default();
        if map.remove(key).is_some() {
            self.persist(&map)?;
        }
        Ok(())
    }
}
