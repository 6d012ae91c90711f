//! In-memory [`DocumentStore`](super::DocumentStore) used by the server.

use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use super::DocumentStore;
use crate::schema::Document;

type Key = (String, String);

#[derive(Debug, Clone)]
struct StoredDocument {
    id: String,
    document: Document,
}

/// In-process document store.
///
/// Nothing is persisted; all data is lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<Key, Vec<StoredDocument>>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    fn key(collection: &str, user_id: &str) -> Key {
        (collection.to_string(), user_id.to_string())
    }

    /// Total number of documents across all collections and users
    pub async fn len(&self) -> usize {
        self.collections.read().await.values().map(Vec::len).sum()
    }

    /// Whether the store holds no documents at all
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn all(&self, collection: &str, user_id: &str) -> Result<Vec<Document>> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(&Self::key(collection, user_id))
            .map(|docs| docs.iter().map(|stored| stored.document.clone()).collect())
            .unwrap_or_default())
    }

    async fn get(&self, collection: &str, user_id: &str, id: &str) -> Result<Option<Document>> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(&Self::key(collection, user_id))
            .and_then(|docs| docs.iter().find(|stored| stored.id == id))
            .map(|stored| stored.document.clone()))
    }

    async fn insert(&self, collection: &str, user_id: &str, id: &str, document: Document) -> Result<()> {
        let mut collections = self.collections.write().await;
        let docs = collections.entry(Self::key(collection, user_id)).or_default();

        if docs.iter().any(|stored| stored.id == id) {
            anyhow::bail!("Document {} already exists in {}", id, collection);
        }

        docs.push(StoredDocument {
            id: id.to_string(),
            document,
        });
        Ok(())
    }

    async fn replace(&self, collection: &str, user_id: &str, id: &str, document: Document) -> Result<bool> {
        let mut collections = self.collections.write().await;
        let Some(docs) = collections.get_mut(&Self::key(collection, user_id)) else {
            return Ok(false);
        };

        match docs.iter_mut().find(|stored| stored.id == id) {
            Some(stored) => {
                stored.document = document;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn remove(&self, collection: &str, user_id: &str, id: &str) -> Result<bool> {
        let mut collections = self.collections.write().await;
        let Some(docs) = collections.get_mut(&Self::key(collection, user_id)) else {
            return Ok(false);
        };

        let before = docs.len();
        docs.retain(|stored| stored.id != id);
        Ok(docs.len() < before)
    }

    async fn clear(&self, collection: &str, user_id: &str) -> Result<usize> {
        let mut collections = self.collections.write().await;
        Ok(collections
            .remove(&Self::key(collection, user_id))
            .map(|docs| docs.len())
            .unwrap_or(0))
    }
}
