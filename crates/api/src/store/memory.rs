//! In-memory document store for tests.
//!
//! Mirrors just enough MongoDB behavior for handler pipelines: generated
//! `ObjectId`s, field-subset filter matching, insertion order, and declared
//! unique indexes. Backed by a mutex held only for the duration of each
//! operation.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use mongodb::bson::Document;
use mongodb::bson::oid::ObjectId;

use super::{DocumentStore, StoreError};

/// Document store held entirely in process memory.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    collections: HashMap<String, Vec<Document>>,
    unique_indexes: Vec<(String, String)>,
}

impl MemoryStore {
    /// Create an empty store with no collections and no indexes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a unique index on `collection.field`, enforced on subsequent
    /// inserts.
    #[must_use]
    pub fn with_unique_index(self, collection: &str, field: &str) -> Self {
        self.lock()
            .unique_indexes
            .push((collection.to_owned(), field.to_owned()));
        self
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // A poisoned lock is still usable; no operation leaves partial state
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Whether every field in `filter` is present in `document` with an equal
/// value. An empty filter matches everything.
fn matches_filter(document: &Document, filter: &Document) -> bool {
    filter
        .iter()
        .all(|(key, value)| document.get(key) == Some(value))
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert(
        &self,
        collection: &str,
        mut document: Document,
    ) -> Result<ObjectId, StoreError> {
        let mut inner = self.lock();

        for (indexed_collection, field) in &inner.unique_indexes {
            if indexed_collection != collection {
                continue;
            }
            let Some(value) = document.get(field) else {
                continue;
            };
            let taken = inner
                .collections
                .get(collection)
                .is_some_and(|docs| docs.iter().any(|doc| doc.get(field) == Some(value)));
            if taken {
                return Err(StoreError::DuplicateKey(collection.to_owned()));
            }
        }

        let id = match document.get_object_id("_id") {
            Ok(id) => {
                // Mongo's implicit unique index on _id
                let taken = inner.collections.get(collection).is_some_and(|docs| {
                    docs.iter()
                        .any(|doc| doc.get_object_id("_id").is_ok_and(|existing| existing == id))
                });
                if taken {
                    return Err(StoreError::DuplicateKey(collection.to_owned()));
                }
                id
            }
            Err(_) => {
                let id = ObjectId::new();
                document.insert("_id", id);
                id
            }
        };

        inner
            .collections
            .entry(collection.to_owned())
            .or_default()
            .push(document);
        Ok(id)
    }

    async fn find_one(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<Option<Document>, StoreError> {
        let inner = self.lock();
        let found = inner
            .collections
            .get(collection)
            .and_then(|docs| docs.iter().find(|doc| matches_filter(doc, &filter)))
            .cloned();
        Ok(found)
    }

    async fn find_many(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<Vec<Document>, StoreError> {
        let inner = self.lock();
        let found = inner
            .collections
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .filter(|doc| matches_filter(doc, &filter))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        Ok(found)
    }

    async fn count(&self, collection: &str, filter: Document) -> Result<u64, StoreError> {
        let inner = self.lock();
        let count = inner
            .collections
            .get(collection)
            .map_or(0, |docs| {
                docs.iter().filter(|doc| matches_filter(doc, &filter)).count()
            });
        Ok(count as u64)
    }

    async fn delete_one(&self, collection: &str, filter: Document) -> Result<u64, StoreError> {
        let mut inner = self.lock();
        let Some(docs) = inner.collections.get_mut(collection) else {
            return Ok(0);
        };
        match docs.iter().position(|doc| matches_filter(doc, &filter)) {
            Some(index) => {
                docs.remove(index);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
