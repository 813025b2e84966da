//! In-memory key-value store.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::{RafiqError, Result};

use super::traits::KeyValueStore;

/// HashMap-backed store for tests and for running without a writable disk.
#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|_| RafiqError::Cache("Store lock poisoned".to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| RafiqError::Cache("Store lock poisoned".to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| RafiqError::Cache("Store lock poisoned".to_string()))?;
        entries.remove(key);
        Ok(())
    }
}
