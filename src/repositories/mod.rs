//! Repository layer over the document store.
//!
//! A single generic [`Repository`] implements list/get/create/update/delete
//! for every entity type. The entity supplies its field schema and its
//! filter and sort hooks; the repository handles identity, defaults,
//! partial-update merging and validation.

pub mod filter;

pub use filter::ListFilter;

use chrono::Utc;
use log::debug;
use serde::Serialize;
use serde_json::Value;
use std::marker::PhantomData;
use std::sync::Arc;
use uuid::Uuid;

use crate::entities::{Entity, RecordMeta};
use crate::schema::{self, Document, Mode, ValidationError};
use crate::storage::DocumentStore;

/// Errors returned by repository operations
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("storage failure: {0}")]
    Storage(#[from] anyhow::Error),
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// CRUD access to one entity collection.
pub struct Repository<E> {
    store: Arc<dyn DocumentStore>,
    _entity: PhantomData<fn() -> E>,
}

impl<E> Clone for Repository<E> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            _entity: PhantomData,
        }
    }
}

impl<E: Entity> Repository<E> {
    /// Create a repository over a shared store
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            _entity: PhantomData,
        }
    }

    /// All records of `user_id` passing `filter`, in the entity's list order.
    pub async fn list(&self, user_id: &str, filter: &ListFilter) -> RepoResult<Vec<E>> {
        filter.validate()?;

        let documents = self.store.all(E::COLLECTION, user_id).await?;
        let mut records = Vec::with_capacity(documents.len());
        for document in documents {
            let record = decode_stored::<E>(document)?;
            if filter.matches(&record) {
                records.push(record);
            }
        }

        // Stable sort: ties stay in creation order
        records.sort_by(|a, b| a.compare(b));
        Ok(records)
    }

    /// A single record by id
    pub async fn get(&self, user_id: &str, id: &str) -> RepoResult<Option<E>> {
        match self.store.get(E::COLLECTION, user_id, id).await? {
            Some(document) => Ok(Some(decode_stored(document)?)),
            None => Ok(None),
        }
    }

    /// Validate a client body, assign identity and defaults, and store it.
    ///
    /// Any `id`, `userId` or `createdAt` in the body is discarded.
    pub async fn create(&self, user_id: &str, body: Value) -> RepoResult<E> {
        let mut body = schema::into_document(body)?;
        schema::sanitize(E::FIELDS, &mut body);
        schema::validate(E::FIELDS, &body, Mode::Create)?;

        let meta = RecordMeta {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            created_at: Utc::now(),
        };
        let mut document = to_document(&meta)?;
        document.extend(body);

        let record = decode_submitted::<E>(document)?;
        record.check()?;

        self.store
            .insert(E::COLLECTION, user_id, record.id(), to_document(&record)?)
            .await?;

        debug!("Created {} {} for {}", E::NAME, record.id(), user_id);
        Ok(record)
    }

    /// Merge a partial body into an existing record.
    ///
    /// Fields absent from the body keep their stored values. Returns `None`
    /// when no record with `id` exists for `user_id`, whatever the body holds;
    /// nothing is created.
    pub async fn update(&self, user_id: &str, id: &str, body: Value) -> RepoResult<Option<E>> {
        let Some(mut document) = self.store.get(E::COLLECTION, user_id, id).await? else {
            return Ok(None);
        };

        let mut patch = schema::into_document(body)?;
        schema::sanitize(E::FIELDS, &mut patch);
        schema::validate(E::FIELDS, &patch, Mode::Patch)?;
        document.extend(patch);

        let record = decode_submitted::<E>(document)?;
        record.check()?;

        if !self
            .store
            .replace(E::COLLECTION, user_id, id, to_document(&record)?)
            .await?
        {
            // removed between read and write
            return Ok(None);
        }

        debug!("Updated {} {} for {}", E::NAME, id, user_id);
        Ok(Some(record))
    }

    /// Remove a record. Returns whether one was removed.
    pub async fn delete(&self, user_id: &str, id: &str) -> RepoResult<bool> {
        let removed = self.store.remove(E::COLLECTION, user_id, id).await?;
        if removed {
            debug!("Deleted {} {} for {}", E::NAME, id, user_id);
        }
        Ok(removed)
    }

    /// Remove every record of `user_id`, returning how many were removed
    pub async fn clear(&self, user_id: &str) -> RepoResult<usize> {
        Ok(self.store.clear(E::COLLECTION, user_id).await?)
    }
}

fn to_document<T: Serialize>(value: &T) -> anyhow::Result<Document> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        other => anyhow::bail!("expected a JSON object, got {}", other),
    }
}

/// Decode a document built from client input; failures are the client's
fn decode_submitted<E: Entity>(document: Document) -> Result<E, ValidationError> {
    serde_json::from_value(Value::Object(document)).map_err(|e| ValidationError::single("body", e.to_string()))
}

/// Decode a document read back from storage; failures are internal
fn decode_stored<E: Entity>(document: Document) -> anyhow::Result<E> {
    serde_json::from_value(Value::Object(document))
        .map_err(|e| anyhow::anyhow!("Stored {} is unreadable: {}", E::NAME, e))
}
