//! Document store gateway.
//!
//! Handlers never touch the database driver directly; they go through the
//! [`DocumentStore`] trait, a small set of uniform operations against named
//! collections. Two implementations exist: [`MongoStore`] for production and
//! [`MemoryStore`] as an in-process double for handler tests.

pub mod memory;
pub mod mongo;

use async_trait::async_trait;
use mongodb::bson::Document;
use mongodb::bson::oid::ObjectId;
use thiserror::Error;

pub use memory::MemoryStore;
pub use mongo::MongoStore;

/// Name of the customer collection.
pub const CUSTOMERS: &str = "customers";

/// Name of the order collection.
pub const ORDERS: &str = "orders";

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing database failed or is unreachable.
    #[error("store backend error: {0}")]
    Backend(#[from] mongodb::error::Error),

    /// A unique index rejected the document.
    #[error("unique constraint violated in {0}")]
    DuplicateKey(String),

    /// The store returned data that does not match the expected shape.
    #[error("data corruption: {0}")]
    Corrupted(String),
}

/// Uniform operations against named collections of a document database.
///
/// Documents are BSON; identifiers are store-generated [`ObjectId`]s. The
/// trait is object-safe so the concrete backend can be chosen at startup and
/// injected through application state.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert a document, returning the store-generated id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::DuplicateKey` if a unique index rejects the
    /// document, or `StoreError::Backend` if the store is unreachable.
    async fn insert(&self, collection: &str, document: Document) -> Result<ObjectId, StoreError>;

    /// Find the first document matching `filter`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Backend` if the store is unreachable.
    async fn find_one(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<Option<Document>, StoreError>;

    /// Find all documents matching `filter`, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Backend` if the store is unreachable.
    async fn find_many(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<Vec<Document>, StoreError>;

    /// Count documents matching `filter`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Backend` if the store is unreachable.
    async fn count(&self, collection: &str, filter: Document) -> Result<u64, StoreError>;

    /// Delete the first document matching `filter`, returning how many
    /// documents were removed (0 or 1).
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Backend` if the store is unreachable.
    async fn delete_one(&self, collection: &str, filter: Document) -> Result<u64, StoreError>;

    /// Verify the store is reachable.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Backend` if the store is unreachable.
    async fn ping(&self) -> Result<(), StoreError>;
}
