//! Tracker Store
//!
//! The in-memory, owner-scoped collection of entries for one tracker page,
//! the single source of truth for rendering. Loaded once from the remote
//! store, then mutated only through the operations here and in
//! `sub_items`; every mutation applies locally first and fires a
//! fire-and-forget remote write (see `sync`).
//!
//! The store requires `&mut self` for mutation, so there is a single
//! writer by construction. Overlapping remote writes may still land in
//! arbitrary order; the remote store's last-write-wins semantics decide.

use std::sync::Arc;

use serde_json::{json, Value};

use crate::domain::{DomainError, DomainResult, EntryPatch, TrackerEntry, TrackerKind};
use crate::remote::{Document, DocumentStore, Identity};

use super::reorder::reorder_sequence;
use super::sync::{spawn_delete, spawn_update, SyncTask};

/// Owner-scoped entry collection for one tracker page
pub struct TrackerStore {
    pub(super) kind: TrackerKind,
    pub(super) owner_id: String,
    pub(super) remote: Arc<dyn DocumentStore>,
    pub(super) entries: Vec<TrackerEntry>,
}

impl TrackerStore {
    /// Load every entry the current user owns on this page.
    ///
    /// A signed-out identity degrades to the empty-string owner, which
    /// matches no documents: an empty page, not an error. No pagination;
    /// one owner's entries are assumed to fit in memory.
    pub async fn load(
        kind: TrackerKind,
        remote: Arc<dyn DocumentStore>,
        identity: &dyn Identity,
    ) -> DomainResult<Self> {
        let owner_id = identity.current_owner_id().unwrap_or_default();
        let docs = remote.query(kind.collection(), &owner_id).await?;
        let mut entries = docs
            .into_iter()
            .map(|doc| {
                serde_json::from_value::<TrackerEntry>(Value::Object(doc))
                    .map_err(|e| DomainError::Internal(e.to_string()))
            })
            .collect::<DomainResult<Vec<TrackerEntry>>>()?;
        entries.sort_by_key(|e| (e.archived, e.order));
        Ok(Self {
            kind,
            owner_id,
            remote,
            entries,
        })
    }

    pub fn kind(&self) -> TrackerKind {
        self.kind
    }

    pub fn owner_id(&self) -> &str {
        &self.owner_id
    }

    /// Every loaded entry, archived included
    pub fn entries(&self) -> &[TrackerEntry] {
        &self.entries
    }

    /// Active entries in display order
    pub fn active(&self) -> Vec<&TrackerEntry> {
        let mut active: Vec<&TrackerEntry> =
            self.entries.iter().filter(|e| !e.archived).collect();
        active.sort_by_key(|e| e.order);
        active
    }

    /// Archived entries; excluded from ordering but still addressable
    pub fn archived_entries(&self) -> Vec<&TrackerEntry> {
        self.entries.iter().filter(|e| e.archived).collect()
    }

    pub fn get(&self, id: &str) -> Option<&TrackerEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub(super) fn get_mut(&mut self, id: &str) -> Option<&mut TrackerEntry> {
        self.entries.iter_mut().find(|e| e.id == id)
    }

    fn active_ids(&self) -> Vec<String> {
        self.active().iter().map(|e| e.id.clone()).collect()
    }

    /// Create an entry with default field values at the end of the active
    /// list. This is the one operation that awaits its remote call: the
    /// store assigns the id. The entry is locally visible the moment this
    /// returns, independent of any later writes.
    pub async fn create(&mut self, title: impl Into<String>) -> DomainResult<TrackerEntry> {
        let order = self.active().len() as i64 + 1;
        let mut entry = TrackerEntry::new(self.owner_id.clone(), title.into(), order);
        let mut doc = entry_document(&entry)?;
        // The store assigns the id; don't ship the placeholder
        doc.remove("id");
        entry.id = self.remote.create(self.kind.collection(), doc).await?;
        self.entries.push(entry.clone());
        Ok(entry)
    }

    /// Merge a scalar-field patch into one entry and persist the changed
    /// fields. An unknown id is a stale reference and a silent no-op
    /// (`None`), as is an empty patch.
    pub fn update(&mut self, id: &str, patch: EntryPatch) -> Option<SyncTask> {
        let collection = self.kind.collection();
        let remote = self.remote.clone();
        let entry = self.get_mut(id)?;
        let fields = patch.apply(entry);
        if fields.is_empty() {
            return None;
        }
        Some(spawn_update(remote, collection, id.to_string(), fields))
    }

    /// Toggle the favorite flag; independent of status and order
    pub fn set_favorite(&mut self, id: &str, favorite: bool) -> Option<SyncTask> {
        self.update(
            id,
            EntryPatch {
                favorite: Some(favorite),
                ..Default::default()
            },
        )
    }

    /// Hard-delete an entry. Local removal is immediate and unconditional;
    /// the remote delete is fire-and-forget. Callers must have obtained
    /// user confirmation before invoking this. Removing an active entry
    /// renumbers the remaining actives to keep `order` contiguous.
    pub fn remove(&mut self, id: &str) -> Vec<SyncTask> {
        let Some(pos) = self.entries.iter().position(|e| e.id == id) else {
            return Vec::new();
        };
        let was_active = !self.entries[pos].archived;
        self.entries.remove(pos);
        let mut tasks = vec![spawn_delete(
            self.remote.clone(),
            self.kind.collection(),
            id.to_string(),
        )];
        if was_active {
            let ids = self.active_ids();
            tasks.extend(self.apply_active_order(ids));
        }
        tasks
    }

    /// Soft-delete: remove from the ordering and the primary surface,
    /// keep the entry addressable. Reversible via `restore`.
    pub fn archive(&mut self, id: &str) -> Vec<SyncTask> {
        let collection = self.kind.collection();
        let remote = self.remote.clone();
        let Some(entry) = self.get_mut(id) else {
            return Vec::new();
        };
        if entry.archived {
            return Vec::new();
        }
        entry.archived = true;
        let mut fields = Document::new();
        fields.insert("archived".to_string(), json!(true));
        let mut tasks = vec![spawn_update(remote, collection, id.to_string(), fields)];
        let ids = self.active_ids();
        tasks.extend(self.apply_active_order(ids));
        tasks
    }

    /// Bring an archived entry back, appended at the end of the active list
    pub fn restore(&mut self, id: &str) -> Vec<SyncTask> {
        let order = self.active().len() as i64 + 1;
        let collection = self.kind.collection();
        let remote = self.remote.clone();
        let Some(entry) = self.get_mut(id) else {
            return Vec::new();
        };
        if !entry.archived {
            return Vec::new();
        }
        entry.archived = false;
        entry.order = order;
        let mut fields = Document::new();
        fields.insert("archived".to_string(), json!(false));
        fields.insert("order".to_string(), json!(order));
        vec![spawn_update(remote, collection, id.to_string(), fields)]
    }

    /// Apply a completed drag: reinsert the source at the target's position
    /// and renumber the whole active subset 1..=N.
    ///
    /// One independent write per entry whose order changed, not an atomic
    /// batch. A failure partway through leaves remote `order` values from
    /// two orderings interleaved until the next full load; local display
    /// stays consistent. Dropping on self, on an archived entry, or from
    /// a stale id is a no-op with zero writes. Two sessions reordering
    /// concurrently resolve by last-write-wins, possibly leaving the
    /// remote ordering non-contiguous until reload.
    pub fn complete_drop(&mut self, source_id: &str, target_id: &str) -> Vec<SyncTask> {
        let ids = self.active_ids();
        let Some(next) = reorder_sequence(&ids, source_id, target_id) else {
            return Vec::new();
        };
        self.apply_active_order(next)
    }

    /// Renumber the given active sequence as 1..=N, persisting the order
    /// of every entry whose value changed
    fn apply_active_order(&mut self, ids: Vec<String>) -> Vec<SyncTask> {
        let collection = self.kind.collection();
        let mut tasks = Vec::new();
        for (index, id) in ids.iter().enumerate() {
            let new_order = index as i64 + 1;
            let remote = self.remote.clone();
            let Some(entry) = self.get_mut(id) else {
                continue;
            };
            if entry.order == new_order {
                continue;
            }
            entry.order = new_order;
            let mut fields = Document::new();
            fields.insert("order".to_string(), json!(new_order));
            tasks.push(spawn_update(remote, collection, id.clone(), fields));
        }
        tasks
    }
}

/// Serialize an entry into its document shape
fn entry_document(entry: &TrackerEntry) -> DomainResult<Document> {
    match serde_json::to_value(entry) {
        Ok(Value::Object(doc)) => Ok(doc),
        Ok(_) => Err(DomainError::Internal(
            "entry did not serialize to an object".to_string(),
        )),
        Err(e) => Err(DomainError::Internal(e.to_string())),
    }
}
