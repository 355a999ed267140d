//! Domain Layer
//!
//! Contains all domain entities and core business rules.
//! This layer performs no I/O (serde for serialization, chrono/rand for
//! timestamps and fresh ids).

mod entity;
mod entry;
mod status;
mod sub_item;

pub use entity::{DomainError, DomainResult};
pub use entry::{EntryPatch, TrackerEntry, TrackerKind};
pub use status::{derive_status, Status};
pub use sub_item::{new_sub_item_id, Note, SubItem};
