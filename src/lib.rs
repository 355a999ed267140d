//! Lifedash Core
//!
//! The shared tracker engine behind the goal / project / to-do /
//! shopping-list pages of the dashboard: an owner-scoped, user-ordered
//! collection of entries with embedded sub-items, derived status, and
//! optimistic persistence to a remote document store.
//!
//! Layered architecture:
//! - domain: Core entities and business rules
//! - remote: Document store and identity abstractions
//! - tracker: In-memory store, sub-item editing, drag reorder, sync

pub mod domain;
pub mod remote;
pub mod tracker;

pub use domain::{
    derive_status, DomainError, DomainResult, EntryPatch, Note, Status, SubItem, TrackerEntry,
    TrackerKind,
};
pub use remote::{Document, DocumentStore, FixedIdentity, Identity, MemoryStore};
pub use tracker::{DragSession, SyncTask, TrackerStore};
