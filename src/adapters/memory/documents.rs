//! In-memory document store.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use serde_json::Value;

use crate::adapters::backend::traits::DocumentStore;
use crate::domain::{DocumentStoreError, RafiqError, Result};

/// Document store backed by nested hash maps.
///
/// Mirrors the REST store's semantics: absent documents read as `None`, and a
/// merge write replaces only the top-level attributes it names. The
/// [`set_fail_reads`](Self::set_fail_reads) switch turns every read into an
/// error so degraded-backend behavior can be tested.
#[derive(Default)]
pub struct MemoryDocumentStore {
    collections: RwLock<HashMap<String, HashMap<String, Value>>>,
    fail_reads: AtomicBool,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent `get_document` fail.
    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn get_document(&self, collection: &str, id: &str) -> Result<Option<Value>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(RafiqError::Documents(DocumentStoreError::ReadFailed(
                "injected read failure".to_string(),
            )));
        }
        let collections = self
            .collections
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        Ok(collections
            .get(collection)
            .and_then(|documents| documents.get(id))
            .cloned())
    }

    async fn merge_document(&self, collection: &str, id: &str, attributes: Value) -> Result<()> {
        let attributes = match attributes {
            Value::Object(map) => map,
            other => {
                return Err(RafiqError::Documents(DocumentStoreError::WriteFailed(
                    format!("merge payload must be a JSON object, got {other}"),
                )))
            }
        };

        let mut collections = self
            .collections
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let document = collections
            .entry(collection.to_string())
            .or_default()
            .entry(id.to_string())
            .or_insert_with(|| Value::Object(serde_json::Map::new()));

        if !document.is_object() {
            *document = Value::Object(serde_json::Map::new());
        }
        if let Some(map) = document.as_object_mut() {
            for (key, value) in attributes {
                map.insert(key, value);
            }
        }
        Ok(())
    }
}
