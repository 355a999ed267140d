//! Tracker Layer
//!
//! The optimistic, owner-scoped tracker engine:
//! - store: in-memory source of truth + entry CRUD / archival / ordering
//! - sub_items: checklist and note editing on one entry
//! - reorder: drag-and-drop session state machine
//! - sync: fire-and-forget remote writes

mod reorder;
mod store;
mod sub_items;
mod sync;


pub use reorder::DragSession;
pub use store::TrackerStore;
pub use sync::SyncTask;
