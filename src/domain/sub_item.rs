//! Sub-items
//!
//! Records embedded in a tracker entry's array fields: checklist items
//! (milestones / tasks / list items) and notes. They have no existence
//! outside their parent and are always persisted by rewriting the whole
//! array field on the parent document.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// A checklist item embedded in an entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubItem {
    /// Unique within the parent entry, never reused after deletion
    pub id: String,
    pub name: String,
    pub completed: bool,
}

impl SubItem {
    pub fn new(name: String) -> Self {
        Self {
            id: new_sub_item_id(),
            name,
            completed: false,
        }
    }
}

/// A free-text note embedded in an entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub text: String,
    /// Milliseconds since epoch, stamped at creation; notes are not
    /// re-sorted afterwards
    pub timestamp: i64,
}

impl Note {
    pub fn new(text: String) -> Self {
        Self {
            id: new_sub_item_id(),
            text,
            timestamp: chrono::Utc::now().timestamp_millis(),
        }
    }
}

/// Generate a fresh sub-item id: creation millis plus a random hex suffix.
/// No global counter; uniqueness within one parent is what matters.
pub fn new_sub_item_id() -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let suffix: u16 = rand::thread_rng().gen();
    format!("{}-{:04x}", millis, suffix)
}
