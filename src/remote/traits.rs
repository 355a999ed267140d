//! Remote Layer - Core Traits
//!
//! Defines the abstract interfaces for the remote document store and the
//! identity provider. Implementations can be a cloud document database,
//! an in-memory map, etc.

use async_trait::async_trait;

use crate::domain::DomainResult;

/// One persisted document: a flat map of camelCase field names to JSON
/// values. Entries serialize to exactly this shape, sub-items embedded
/// inline.
pub type Document = serde_json::Map<String, serde_json::Value>;

/// Remote document store, one collection per tracker kind.
///
/// No transactions are assumed across documents; `update` carries the full
/// new value of each field it names (there are no array-element patches).
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// All documents in `collection` whose `ownerId` field matches
    async fn query(&self, collection: &str, owner_id: &str) -> DomainResult<Vec<Document>>;

    /// Persist a new document; the store assigns and returns its id
    async fn create(&self, collection: &str, doc: Document) -> DomainResult<String>;

    /// Overwrite the named fields of one document, leaving others intact
    async fn update(&self, collection: &str, id: &str, fields: Document) -> DomainResult<()>;

    /// Hard-delete one document
    async fn delete(&self, collection: &str, id: &str) -> DomainResult<()>;
}

/// Identity provider: supplies the stable owner id stamped on every entry.
///
/// A `None` owner is not an error; callers degrade to the empty-string
/// owner, which matches no documents.
pub trait Identity: Send + Sync {
    fn current_owner_id(&self) -> Option<String>;
}

/// Identity backed by a known owner id; used by tests and by hosts that
/// resolve the session user elsewhere.
pub struct FixedIdentity {
    owner_id: Option<String>,
}

impl FixedIdentity {
    pub fn new(owner_id: impl Into<String>) -> Self {
        Self {
            owner_id: Some(owner_id.into()),
        }
    }

    /// A signed-out identity
    pub fn anonymous() -> Self {
        Self { owner_id: None }
    }
}

impl Identity for FixedIdentity {
    fn current_owner_id(&self) -> Option<String> {
        self.owner_id.clone()
    }
}
