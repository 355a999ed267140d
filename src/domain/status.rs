//! Derived Status
//!
//! An entry's lifecycle status is computed from its sub-items and persisted
//! redundantly for display/query convenience. The sub-items are the
//! authoritative source; status must be recomputed on every sub-item change.

use serde::{Deserialize, Serialize};

use super::sub_item::SubItem;

/// Entry lifecycle status, derived from sub-item completion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum Status {
    #[default]
    NotStarted,
    InProgress,
    Done,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::NotStarted => "notStarted",
            Status::InProgress => "inProgress",
            Status::Done => "done",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "inProgress" => Status::InProgress,
            "done" => Status::Done,
            _ => Status::NotStarted,
        }
    }
}

/// Compute status from a sub-item sequence.
///
/// Empty → NotStarted; all completed → Done; some completed → InProgress;
/// none completed (non-empty) → NotStarted.
pub fn derive_status(sub_items: &[SubItem]) -> Status {
    if sub_items.is_empty() {
        return Status::NotStarted;
    }
    let completed = sub_items.iter().filter(|s| s.completed).count();
    if completed == sub_items.len() {
        Status::Done
    } else if completed > 0 {
        Status::InProgress
    } else {
        Status::NotStarted
    }
}
