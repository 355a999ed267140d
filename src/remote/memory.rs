//! In-Memory Document Store
//!
//! Reference `DocumentStore` backed by a map, used by the test suite and by
//! hosts that want an ephemeral backend. Records every write and can be
//! told to start failing writes, which the tests use to exercise the
//! optimistic-sync and partial-reorder failure paths.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tokio::sync::Mutex;

use crate::domain::{DomainError, DomainResult};

use super::traits::{Document, DocumentStore};

/// One recorded write, in issue order
#[derive(Debug, Clone, PartialEq)]
pub enum WriteOp {
    Create {
        collection: String,
        id: String,
    },
    Update {
        collection: String,
        id: String,
        fields: Vec<String>,
    },
    Delete {
        collection: String,
        id: String,
    },
}

struct Inner {
    collections: HashMap<String, BTreeMap<String, Document>>,
    next_id: u64,
    writes: Vec<WriteOp>,
    /// Updates/deletes still allowed to succeed; None = unlimited
    remaining_ok_writes: Option<usize>,
}

/// Map-backed document store
#[derive(Clone)]
pub struct MemoryStore {
    inner: Arc<Mutex<Inner>>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                collections: HashMap::new(),
                next_id: 1,
                writes: Vec::new(),
                remaining_ok_writes: None,
            })),
        }
    }

    /// Let `n` more update/delete writes succeed, then reject the rest
    pub async fn fail_writes_after(&self, n: usize) {
        self.inner.lock().await.remaining_ok_writes = Some(n);
    }

    /// Reject every update/delete write from now on
    pub async fn fail_all_writes(&self) {
        self.fail_writes_after(0).await;
    }

    /// Snapshot of the write log, in issue order
    pub async fn writes(&self) -> Vec<WriteOp> {
        self.inner.lock().await.writes.clone()
    }

    /// Fetch one stored document
    pub async fn document(&self, collection: &str, id: &str) -> Option<Document> {
        self.inner
            .lock()
            .await
            .collections
            .get(collection)
            .and_then(|docs| docs.get(id))
            .cloned()
    }
}

impl Inner {
    fn consume_write_budget(&mut self) -> DomainResult<()> {
        match self.remaining_ok_writes {
            None => Ok(()),
            Some(0) => Err(DomainError::Remote("write rejected".to_string())),
            Some(n) => {
                self.remaining_ok_writes = Some(n - 1);
                Ok(())
            }
        }
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn query(&self, collection: &str, owner_id: &str) -> DomainResult<Vec<Document>> {
        let inner = self.inner.lock().await;
        let docs = match inner.collections.get(collection) {
            Some(docs) => docs,
            None => return Ok(Vec::new()),
        };
        Ok(docs
            .values()
            .filter(|doc| {
                doc.get("ownerId").and_then(|v| v.as_str()) == Some(owner_id)
            })
            .cloned()
            .collect())
    }

    async fn create(&self, collection: &str, mut doc: Document) -> DomainResult<String> {
        let mut inner = self.inner.lock().await;
        let id = format!("doc-{}", inner.next_id);
        inner.next_id += 1;
        // The store materializes the assigned id on the document itself
        doc.insert("id".to_string(), json!(id));
        inner
            .collections
            .entry(collection.to_string())
            .or_default()
            .insert(id.clone(), doc);
        inner.writes.push(WriteOp::Create {
            collection: collection.to_string(),
            id: id.clone(),
        });
        Ok(id)
    }

    async fn update(&self, collection: &str, id: &str, fields: Document) -> DomainResult<()> {
        let mut inner = self.inner.lock().await;
        inner.consume_write_budget()?;
        let doc = inner
            .collections
            .get_mut(collection)
            .and_then(|docs| docs.get_mut(id))
            .ok_or_else(|| DomainError::NotFound(format!("{}/{}", collection, id)))?;
        let field_names: Vec<String> = fields.keys().cloned().collect();
        for (key, value) in fields {
            doc.insert(key, value);
        }
        inner.writes.push(WriteOp::Update {
            collection: collection.to_string(),
            id: id.to_string(),
            fields: field_names,
        });
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> DomainResult<()> {
        let mut inner = self.inner.lock().await;
        inner.consume_write_budget()?;
        if let Some(docs) = inner.collections.get_mut(collection) {
            docs.remove(id);
        }
        inner.writes.push(WriteOp::Delete {
            collection: collection.to_string(),
            id: id.to_string(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_query_filters_by_owner() {
        let store = MemoryStore::new();
        let mut doc = Document::new();
        doc.insert("ownerId".to_string(), json!("alice"));
        store.create("goals", doc.clone()).await.unwrap();
        doc.insert("ownerId".to_string(), json!("bob"));
        store.create("goals", doc).await.unwrap();

        let docs = store.query("goals", "alice").await.unwrap();
        assert_eq!(docs.len(), 1);
        assert!(store.query("goals", "").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_overwrites_named_fields_only() {
        let store = MemoryStore::new();
        let mut doc = Document::new();
        doc.insert("ownerId".to_string(), json!("alice"));
        doc.insert("title".to_string(), json!("Old"));
        doc.insert("favorite".to_string(), json!(false));
        let id = store.create("goals", doc).await.unwrap();

        let mut fields = Document::new();
        fields.insert("title".to_string(), json!("New"));
        store.update("goals", &id, fields).await.unwrap();

        let stored = store.document("goals", &id).await.unwrap();
        assert_eq!(stored["title"], json!("New"));
        assert_eq!(stored["favorite"], json!(false));
    }

    #[tokio::test]
    async fn test_write_budget_rejects_after_limit() {
        let store = MemoryStore::new();
        let mut doc = Document::new();
        doc.insert("ownerId".to_string(), json!("alice"));
        let id = store.create("goals", doc).await.unwrap();

        store.fail_writes_after(1).await;
        assert!(store.update("goals", &id, Document::new()).await.is_ok());
        assert!(store.update("goals", &id, Document::new()).await.is_err());
    }
}
