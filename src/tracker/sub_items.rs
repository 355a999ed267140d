//! Sub-item Editing
//!
//! Checklist and note operations on one loaded entry. Checklist mutations
//! all flow through `edit_sub_items`, which recomputes the derived status
//! before syncing, so status can never silently drift from the sub-items.
//! The remote store has no array-element patches, so every operation ships
//! the complete updated array.

use serde_json::{json, Value};

use crate::domain::{derive_status, Note, SubItem};
use crate::remote::Document;

use super::store::TrackerStore;
use super::sync::{spawn_update, SyncTask};

impl TrackerStore {
    /// Append a checklist item with a fresh id
    pub fn add_sub_item(&mut self, entry_id: &str, name: impl Into<String>) -> Option<SyncTask> {
        let item = SubItem::new(name.into());
        self.edit_sub_items(entry_id, |items| {
            items.push(item);
            true
        })
    }

    /// Flip one checklist item's completion flag
    pub fn toggle_sub_item(&mut self, entry_id: &str, item_id: &str) -> Option<SyncTask> {
        self.edit_sub_items(entry_id, |items| {
            match items.iter_mut().find(|i| i.id == item_id) {
                Some(item) => {
                    item.completed = !item.completed;
                    true
                }
                None => false,
            }
        })
    }

    /// Rename one checklist item, identity-preserving for the rest
    pub fn rename_sub_item(
        &mut self,
        entry_id: &str,
        item_id: &str,
        name: impl Into<String>,
    ) -> Option<SyncTask> {
        let name = name.into();
        self.edit_sub_items(entry_id, |items| {
            match items.iter_mut().find(|i| i.id == item_id) {
                Some(item) => {
                    item.name = name;
                    true
                }
                None => false,
            }
        })
    }

    /// Remove one checklist item by id. Callers must have obtained user
    /// confirmation first; the id is never reused.
    pub fn delete_sub_item(&mut self, entry_id: &str, item_id: &str) -> Option<SyncTask> {
        self.edit_sub_items(entry_id, |items| {
            let before = items.len();
            items.retain(|i| i.id != item_id);
            items.len() != before
        })
    }

    /// Prepend a note stamped with the current time (newest first)
    pub fn add_note(&mut self, entry_id: &str, text: impl Into<String>) -> Option<SyncTask> {
        let note = Note::new(text.into());
        self.edit_notes(entry_id, |notes| {
            notes.insert(0, note);
            true
        })
    }

    /// Replace one note's text; the original timestamp is kept
    pub fn edit_note(
        &mut self,
        entry_id: &str,
        note_id: &str,
        text: impl Into<String>,
    ) -> Option<SyncTask> {
        let text = text.into();
        self.edit_notes(entry_id, |notes| {
            match notes.iter_mut().find(|n| n.id == note_id) {
                Some(note) => {
                    note.text = text;
                    true
                }
                None => false,
            }
        })
    }

    /// Remove one note by id; callers confirm destructive deletes first
    pub fn delete_note(&mut self, entry_id: &str, note_id: &str) -> Option<SyncTask> {
        self.edit_notes(entry_id, |notes| {
            let before = notes.len();
            notes.retain(|n| n.id != note_id);
            notes.len() != before
        })
    }

    /// The single checklist edit path: apply the edit, recompute status,
    /// ship the full array plus the (possibly unchanged) status. Stale
    /// entry or item references are silent no-ops.
    fn edit_sub_items<F>(&mut self, entry_id: &str, edit: F) -> Option<SyncTask>
    where
        F: FnOnce(&mut Vec<SubItem>) -> bool,
    {
        let collection = self.kind.collection();
        let remote = self.remote.clone();
        let entry = self.get_mut(entry_id)?;
        if !edit(&mut entry.sub_items) {
            return None;
        }
        entry.status = derive_status(&entry.sub_items);
        let mut fields = Document::new();
        fields.insert("subItems".to_string(), array_value(&entry.sub_items));
        fields.insert("status".to_string(), json!(entry.status));
        Some(spawn_update(remote, collection, entry_id.to_string(), fields))
    }

    /// Note edits don't touch status; only the notes array is shipped
    fn edit_notes<F>(&mut self, entry_id: &str, edit: F) -> Option<SyncTask>
    where
        F: FnOnce(&mut Vec<Note>) -> bool,
    {
        let collection = self.kind.collection();
        let remote = self.remote.clone();
        let entry = self.get_mut(entry_id)?;
        if !edit(&mut entry.notes) {
            return None;
        }
        let mut fields = Document::new();
        fields.insert("notes".to_string(), array_value(&entry.notes));
        Some(spawn_update(remote, collection, entry_id.to_string(), fields))
    }
}

fn array_value<T: serde::Serialize>(items: &[T]) -> Value {
    serde_json::to_value(items).unwrap_or(Value::Null)
}
