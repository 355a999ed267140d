//! Drag Reorder Session
//!
//! Tracks one drag gesture over the active entries of a tracker page.
//! The session itself never mutates data; it only records the dragged
//! source and the current highlight target. The data change happens in
//! `TrackerStore::complete_drop` once the session yields a valid pair.

use super::store::TrackerStore;

/// State of one drag-and-drop gesture
#[derive(Debug, Clone, Default)]
pub struct DragSession {
    source: Option<String>,
    over: Option<String>,
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start dragging an entry. Archived or unknown entries are not
    /// draggable; returns whether the drag actually started.
    pub fn begin(&mut self, store: &TrackerStore, id: &str) -> bool {
        match store.get(id) {
            Some(entry) if !entry.archived => {
                self.source = Some(id.to_string());
                self.over = None;
                true
            }
            _ => false,
        }
    }

    /// Pointer crossed a sibling entry. Updates the highlight target only;
    /// entering the source's own position or an archived entry is a no-op.
    pub fn over(&mut self, store: &TrackerStore, target_id: &str) {
        let Some(source) = &self.source else {
            return;
        };
        if source == target_id {
            return;
        }
        match store.get(target_id) {
            Some(entry) if !entry.archived => {
                self.over = Some(target_id.to_string());
            }
            _ => {}
        }
    }

    /// Pointer left the draggable surface; clear the highlight
    pub fn leave(&mut self) {
        self.over = None;
    }

    /// Drop the dragged entry. Returns `(source, target)` when the gesture
    /// ends over a valid target, otherwise behaves like `cancel`. Either
    /// way the session returns to idle and any lifted styling can be
    /// restored by the caller.
    pub fn drop_on_target(&mut self) -> Option<(String, String)> {
        let source = self.source.take();
        let target = self.over.take();
        match (source, target) {
            (Some(source), Some(target)) if source != target => Some((source, target)),
            _ => None,
        }
    }

    /// Abort the gesture without any data mutation
    pub fn cancel(&mut self) {
        self.source = None;
        self.over = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.source.is_some()
    }

    /// Currently dragged entry, for lifted styling
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Current highlight target, for drop-preview styling
    pub fn target(&self) -> Option<&str> {
        self.over.as_deref()
    }
}

/// Compute the new active sequence for a drop: remove the source and
/// reinsert it at the target's original index. Returns `None` when either
/// id is missing from the sequence or the drop is on self.
pub(crate) fn reorder_sequence(
    ids: &[String],
    source_id: &str,
    target_id: &str,
) -> Option<Vec<String>> {
    if source_id == target_id {
        return None;
    }
    let source_pos = ids.iter().position(|id| id == source_id)?;
    let target_pos = ids.iter().position(|id| id == target_id)?;
    let mut next: Vec<String> = ids.to_vec();
    let moved = next.remove(source_pos);
    // Target index from the pre-removal sequence: dragging downward lands
    // the source after the target, dragging upward lands it before.
    next.insert(target_pos.min(next.len()), moved);
    Some(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_drag_down_lands_after_target() {
        let next = reorder_sequence(&ids(&["a", "b", "c"]), "a", "c").unwrap();
        assert_eq!(next, ids(&["b", "c", "a"]));
    }

    #[test]
    fn test_drag_up_lands_at_target() {
        let next = reorder_sequence(&ids(&["a", "b", "c"]), "c", "a").unwrap();
        assert_eq!(next, ids(&["c", "a", "b"]));
    }

    #[test]
    fn test_drop_on_self_is_none() {
        assert!(reorder_sequence(&ids(&["a", "b"]), "a", "a").is_none());
    }

    #[test]
    fn test_unknown_ids_are_none() {
        assert!(reorder_sequence(&ids(&["a", "b"]), "x", "a").is_none());
        assert!(reorder_sequence(&ids(&["a", "b"]), "a", "x").is_none());
    }
}
