//! In-memory backend for tests and ephemeral sessions

use crate::error::{CampusNetError, Result};
use crate::storage::KeyValueBackend;
use std::collections::HashMap;
use std::sync::RwLock;

/// [`KeyValueBackend`] backed by a plain map; nothing survives the process
#[derive(Default)]
pub struct MemoryBackend {
    map: RwLock<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueBackend for MemoryBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let map = self
            .map
            .read()
            .map_err(|e| CampusNetError::Storage(format!("lock poisoned: {}", e)))?;
        Ok(map.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let mut map = self
            .map
            .write()
            .map_err(|e| CampusNetError::Storage(format!("lock poisoned: {}", e)))?;
        map.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut map = self
            .map
            .write()
            .map_err(|e| CampusNetError::Storage(format!("lock poisoned: {}", e)))?;
        map.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_read_remove() {
        let backend = MemoryBackend::new();
        assert_eq!(backend.read("k").unwrap(), None);
        backend.write("k", "v").unwrap();
        assert_eq!(backend.read("k").unwrap().as_deref(), Some("v"));
        backend.remove("k").unwrap();
        assert_eq!(backend.read("k").unwrap(), None);
    }
}
