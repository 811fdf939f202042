// src/db.rs

use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::{bson::{doc, oid::ObjectId, Document}, Client, Collection, Database};
//
use crate::{config::Config, store::{with_record_id, RecordStore, Result}};

#[derive(Clone, Debug)]
pub struct DB {
    pub client: Client,
    pub database: Database,
}

impl DB {
    pub async fn new(config: &Config) -> Result<Self> {
        let client = Client::with_uri_str(&config.mongodb_uri).await?;
        let database = client.database(&config.database);

        Ok(Self { client, database })
    }

    fn collection(&self, name: &str) -> Collection<Document> {
        self.database.collection(name)
    }
}

#[async_trait]
impl RecordStore for DB {
    async fn find_all(&self, collection: &str) -> Result<Vec<Document>> {
        let cursor = self.collection(collection).find(None, None).await?;

        Ok(cursor.try_collect().await?)
    }

    async fn insert(&self, collection: &str, document: Document) -> Result<Document> {
        let document = with_record_id(document)?;
        self.collection(collection).insert_one(&document, None).await?;

        Ok(document)
    }

    async fn delete_by_id(&self, collection: &str, id: &str) -> Result<()> {
        let oid = ObjectId::parse_str(id)?;
        self.collection(collection).delete_one(doc! { "_id": oid }, None).await?;

        Ok(())
    }

    async fn count(&self, collection: &str) -> Result<u64> {
        Ok(self.collection(collection).count_documents(None, None).await?)
    }

    async fn insert_many(&self, collection: &str, documents: Vec<Document>) -> Result<()> {
        // the server rejects an empty batch
        if documents.is_empty() {
            return Ok(());
        }

        let documents = documents
            .into_iter()
            .map(with_record_id)
            .collect::<Result<Vec<_>>>()?;
        self.collection(collection).insert_many(documents, None).await?;

        Ok(())
    }
}
