//! Sync Layer
//!
//! Every mutation updates the in-memory store first, then fires one of
//! these tasks at the remote store. The task is not awaited by the store;
//! a failed write is logged and otherwise lost; local state stays the
//! (possibly divergent) truth until something later overwrites the same
//! field or the store is reloaded. No retry, no backoff, no rollback.

use std::sync::Arc;

use crate::remote::{Document, DocumentStore};

/// Handle to an in-flight remote write. Awaiting it only observes
/// completion; failures are already logged inside the task.
pub type SyncTask = tokio::task::JoinHandle<()>;

/// Overwrite the named fields of one remote document
pub(crate) fn spawn_update(
    remote: Arc<dyn DocumentStore>,
    collection: &'static str,
    id: String,
    fields: Document,
) -> SyncTask {
    tokio::spawn(async move {
        if let Err(e) = remote.update(collection, &id, fields).await {
            log::error!("sync: update {}/{} failed: {}", collection, id, e);
        }
    })
}

/// Hard-delete one remote document
pub(crate) fn spawn_delete(
    remote: Arc<dyn DocumentStore>,
    collection: &'static str,
    id: String,
) -> SyncTask {
    tokio::spawn(async move {
        if let Err(e) = remote.delete(collection, &id).await {
            log::error!("sync: delete {}/{} failed: {}", collection, id, e);
        }
    })
}
