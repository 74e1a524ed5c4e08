//! MongoDB-backed document store.

use std::time::Duration;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{Bson, Document, doc};
use mongodb::options::{ClientOptions, IndexOptions};
use mongodb::{Client, Database, IndexModel};
use secrecy::{ExposeSecret, SecretString};

use super::{CUSTOMERS, DocumentStore, StoreError};

/// How long the driver waits for a reachable server before giving up.
const SERVER_SELECTION_TIMEOUT: Duration = Duration::from_secs(5);

/// Document store backed by a MongoDB database.
pub struct MongoStore {
    db: Database,
}

impl MongoStore {
    /// Connect to MongoDB, verify connectivity, and ensure indexes.
    ///
    /// The driver connects lazily, so this pings the server up front; an
    /// unreachable database aborts startup within the server-selection
    /// timeout instead of failing on the first request. The unique index on
    /// `customers.email` created here is what makes email uniqueness hold
    /// across concurrent inserts.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Backend` if the URI is malformed, the server is
    /// unreachable, or index creation fails.
    pub async fn connect(uri: &SecretString, database: &str) -> Result<Self, StoreError> {
        let mut options = ClientOptions::parse(uri.expose_secret()).await?;
        options.server_selection_timeout = Some(SERVER_SELECTION_TIMEOUT);

        let client = Client::with_options(options)?;
        let db = client.database(database);

        db.run_command(doc! {"ping": 1}).await?;

        let email_index = IndexModel::builder()
            .keys(doc! {"email": 1})
            .options(IndexOptions::builder().unique(true).build())
            .build();
        db.collection::<Document>(CUSTOMERS)
            .create_index(email_index)
            .await?;

        Ok(Self { db })
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn insert(&self, collection: &str, document: Document) -> Result<ObjectId, StoreError> {
        let result = self
            .db
            .collection::<Document>(collection)
            .insert_one(document)
            .await
            .map_err(|err| {
                if is_duplicate_key_error(&err) {
                    StoreError::DuplicateKey(collection.to_owned())
                } else {
                    StoreError::Backend(err)
                }
            })?;

        match result.inserted_id {
            Bson::ObjectId(id) => Ok(id),
            other => Err(StoreError::Corrupted(format!(
                "inserted id is not an ObjectId: {other}"
            ))),
        }
    }

    async fn find_one(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<Option<Document>, StoreError> {
        let document = self
            .db
            .collection::<Document>(collection)
            .find_one(filter)
            .await?;
        Ok(document)
    }

    async fn find_many(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<Vec<Document>, StoreError> {
        let mut cursor = self.db.collection::<Document>(collection).find(filter).await?;
        let mut documents = Vec::new();
        while cursor.advance().await? {
            documents.push(cursor.deserialize_current()?);
        }
        Ok(documents)
    }

    async fn count(&self, collection: &str, filter: Document) -> Result<u64, StoreError> {
        let count = self
            .db
            .collection::<Document>(collection)
            .count_documents(filter)
            .await?;
        Ok(count)
    }

    async fn delete_one(&self, collection: &str, filter: Document) -> Result<u64, StoreError> {
        let result = self
            .db
            .collection::<Document>(collection)
            .delete_one(filter)
            .await?;
        Ok(result.deleted_count)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.db.run_command(doc! {"ping": 1}).await?;
        Ok(())
    }
}

/// Whether a driver error is a unique-index violation (server code 11000).
fn is_duplicate_key_error(err: &mongodb::error::Error) -> bool {
    use mongodb::error::{ErrorKind, WriteFailure};

    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => write_error.code == 11000,
        _ => false,
    }
}
