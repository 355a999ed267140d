//! Tracker Entry
//!
//! The one generic record behind the goal / project / to-do / shopping-list
//! pages. The per-page differences (collection name, what a checklist item
//! is called) live in `TrackerKind`; ordering, archival, favorites,
//! derived status, and the embedded sub-items and notes are all shared.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use super::status::Status;
use super::sub_item::{Note, SubItem};

/// Which tracker page an entry belongs to.
///
/// Selects the remote collection and the user-facing noun for checklist
/// items; the behavior of every operation is identical across kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TrackerKind {
    Goals,
    Projects,
    Todos,
    ShoppingLists,
}

impl TrackerKind {
    /// Remote collection name, one document per entry
    pub fn collection(&self) -> &'static str {
        match self {
            TrackerKind::Goals => "goals",
            TrackerKind::Projects => "projects",
            TrackerKind::Todos => "todos",
            TrackerKind::ShoppingLists => "shopping_lists",
        }
    }

    /// What a checklist item is called on this page
    pub fn sub_item_noun(&self) -> &'static str {
        match self {
            TrackerKind::Goals | TrackerKind::Projects => "milestone",
            TrackerKind::Todos => "task",
            TrackerKind::ShoppingLists => "list item",
        }
    }
}

/// A user-owned tracker entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackerEntry {
    /// Opaque identifier assigned by the remote store on creation
    pub id: String,
    /// Owning user; every query filters by it
    pub owner_id: String,
    pub title: String,
    /// Display position among active (non-archived) siblings; contiguous
    /// 1..=N within one owner's active set after a reorder completes
    pub order: i64,
    /// Archived entries are excluded from ordering but stay addressable
    pub archived: bool,
    pub favorite: bool,
    /// Derived from `sub_items`; persisted for convenience, never
    /// authoritative
    pub status: Status,
    /// Checklist items; insertion order is display order
    pub sub_items: Vec<SubItem>,
    /// Newest-first at insertion time, never re-sorted
    pub notes: Vec<Note>,

    // Page-specific extras, orthogonal to the core invariants:
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// 1..=6 where present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<u8>,
}

impl TrackerEntry {
    /// A fresh entry with default field values; `order` is the caller's
    /// `active_count + 1`
    pub fn new(owner_id: String, title: String, order: i64) -> Self {
        Self {
            id: String::new(),
            owner_id,
            title,
            order,
            archived: false,
            favorite: false,
            status: Status::NotStarted,
            sub_items: Vec::new(),
            notes: Vec::new(),
            deadline: None,
            image_url: None,
            difficulty: None,
        }
    }
}

/// Partial update over an entry's scalar fields.
///
/// Ordering, archival, status, and the embedded arrays are deliberately
/// absent: those change only through their dedicated store operations.
#[derive(Debug, Clone, Default)]
pub struct EntryPatch {
    pub title: Option<String>,
    pub favorite: Option<bool>,
    pub deadline: Option<Option<i64>>,
    pub image_url: Option<Option<String>>,
    pub difficulty: Option<Option<u8>>,
}

impl EntryPatch {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Merge into an entry, returning the changed fields as a remote
    /// field map (camelCase keys, matching the document shape)
    pub fn apply(&self, entry: &mut TrackerEntry) -> Map<String, Value> {
        let mut fields = Map::new();
        if let Some(title) = &self.title {
            entry.title = title.clone();
            fields.insert("title".to_string(), json!(title));
        }
        if let Some(favorite) = self.favorite {
            entry.favorite = favorite;
            fields.insert("favorite".to_string(), json!(favorite));
        }
        if let Some(deadline) = self.deadline {
            entry.deadline = deadline;
            fields.insert("deadline".to_string(), json!(deadline));
        }
        if let Some(image_url) = &self.image_url {
            entry.image_url = image_url.clone();
            fields.insert("imageUrl".to_string(), json!(image_url));
        }
        if let Some(difficulty) = self.difficulty {
            entry.difficulty = difficulty;
            fields.insert("difficulty".to_string(), json!(difficulty));
        }
        fields
    }
}
