//! Single-file JSON key-value store.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::{RafiqError, Result};

use super::traits::KeyValueStore;

/// Persists keys in one JSON object on disk, the local-storage equivalent for
/// a CLI process.
///
/// The file is read on every `get` so edits made by another process (or an
/// operator with a text editor) are picked up without restarts. Writes are
/// serialized through an internal lock; cross-process writers are not
/// coordinated, which is fine for the access pattern here (one foreground
/// process at a time).
pub struct FileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => {
                return Err(RafiqError::Cache(format!(
                    "Failed to read {}: {e}",
                    self.path.display()
                )))
            }
        };
        serde_json::from_str(&contents).map_err(|e| {
            RafiqError::Cache(format!(
                "Store file {} is not valid JSON: {e}",
                self.path.display()
            ))
        })
    }

    fn save(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    RafiqError::Cache(format!(
                        "Failed to create {}: {e}",
                        parent.display()
                    ))
                })?;
            }
        }
        let json = serde_json::to_string_pretty(entries)
            .map_err(|e| RafiqError::Cache(format!("Failed to serialize store: {e}")))?;
        std::fs::write(&self.path, json).map_err(|e| {
            RafiqError::Cache(format!(
                "Failed to write {}: {e}",
                self.path.display()
            ))
        })
    }

    /// Loads the current entries for writing, recovering from a corrupt file.
    ///
    /// A reader must surface corruption (the caller decides what absence
    /// means), but a writer that refused to write would wedge the store
    /// forever. Writers start over from an empty map instead.
    fn load_for_write(&self) -> BTreeMap<String, String> {
        match self.load() {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(error = %e, "Store file unreadable, rewriting from scratch");
                BTreeMap::new()
            }
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.load()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| RafiqError::Cache("Store lock poisoned".to_string()))?;
        let mut entries = self.load_for_write();
        entries.insert(key.to_string(), value.to_string());
        self.save(&entries)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| RafiqError::Cache("Store lock poisoned".to_string()))?;
        let mut entries = self.load_for_write();
        if entries.remove(key).is_some() {
            self.save(&entries)?;
        }
        Ok(())
    }
}
