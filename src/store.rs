// src/store.rs

use async_trait::async_trait;
use mongodb::bson::{doc, oid::ObjectId, spec::ElementType, Bson, Document};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database operation failed: {0}")]
    Mongo(#[from] mongodb::error::Error),
    #[error("invalid record id: {0}")]
    InvalidId(#[from] mongodb::bson::oid::Error),
    #[error("record cannot be encoded as BSON: {0}")]
    Encode(#[from] mongodb::bson::ser::Error),
    #[error("record id must be an ObjectId, got {0:?}")]
    IdType(ElementType),
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Durable storage for the flat record collections, addressed by collection name.
///
/// Every operation is a single round trip; nothing is cached between calls.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn find_all(&self, collection: &str) -> Result<Vec<Document>>;

    /// Stores `document` and returns it as persisted, `_id` included.
    async fn insert(&self, collection: &str, document: Document) -> Result<Document>;

    /// Removes the record with the given ObjectId. A missing record is not an error.
    async fn delete_by_id(&self, collection: &str, id: &str) -> Result<()>;

    async fn count(&self, collection: &str) -> Result<u64>;

    async fn insert_many(&self, collection: &str, documents: Vec<Document>) -> Result<()>;
}

/// Moves the record id to the front of `document` as an ObjectId.
///
/// A missing id is generated and a hex string id is cast; any other id is rejected.
pub fn with_record_id(mut document: Document) -> Result<Document> {
    let id = match document.remove("_id") {
        None => ObjectId::new(),
        Some(Bson::ObjectId(oid)) => oid,
        Some(Bson::String(hex)) => ObjectId::parse_str(&hex)?,
        Some(other) => return Err(StoreError::IdType(other.element_type())),
    };

    let mut stored = doc! { "_id": id };
    for (key, value) in document {
        stored.insert(key, value);
    }
    Ok(stored)
}
