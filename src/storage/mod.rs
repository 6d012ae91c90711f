//! Storage layer for dashboard records.
//!
//! Records are stored as JSON documents grouped by collection (entity type)
//! and owning user. [`DocumentStore`] is the seam a durable datastore would
//! implement; [`MemoryStore`] is the in-process implementation the server
//! runs with.

use anyhow::Result;
use async_trait::async_trait;

use crate::schema::Document;

pub mod memory;

pub use memory::MemoryStore;

/// Key-value document storage keyed by collection and user id.
///
/// Implementations keep documents in insertion order and resolve concurrent
/// writes to the same document as last write wins.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// All documents of one user in one collection, in insertion order
    async fn all(&self, collection: &str, user_id: &str) -> Result<Vec<Document>>;

    /// A single document by id
    async fn get(&self, collection: &str, user_id: &str, id: &str) -> Result<Option<Document>>;

    /// Store a new document under `id`
    async fn insert(&self, collection: &str, user_id: &str, id: &str, document: Document) -> Result<()>;

    /// Overwrite an existing document. Returns `false` when `id` is unknown.
    async fn replace(&self, collection: &str, user_id: &str, id: &str, document: Document) -> Result<bool>;

    /// Remove a document. Returns `false` when `id` is unknown.
    async fn remove(&self, collection: &str, user_id: &str, id: &str) -> Result<bool>;

    /// Remove every document of one user in one collection, returning how many were dropped
    async fn clear(&self, collection: &str, user_id: &str) -> Result<usize>;
}
