//! Remote Layer
//!
//! Abstractions over the external collaborators: the remote document store
//! and the identity provider. The concrete production backends live outside
//! this crate; an in-memory store is provided for tests and embedding.

mod memory;
mod traits;

pub use memory::{MemoryStore, WriteOp};
pub use traits::{Document, DocumentStore, FixedIdentity, Identity};
