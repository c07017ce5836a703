use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mongodb::{bson::doc, Client, Collection};
use serde::{Deserialize, Serialize};

use crate::error::{PersistError, Result};
use crate::store::KeyValueStore;

const COLLECTION_NAME: &str = "kv";

/// One stored entry; the key doubles as the document id
#[derive(Debug, Clone, Serialize, Deserialize)]
struct KvDocument {
    #[serde(rename = "_id")]
    key: String,
    value: String,
    updated_at: DateTime<Utc>,
}

#[derive(Clone)]
pub struct MongoStore {
    collection: Collection<KvDocument>,
}

impl MongoStore {
    /// Connect to MongoDB and bind the `kv` collection
    pub async fn connect(mongodb_uri: &str, database: &str) -> Result<Self> {
        let client = Client::with_uri_str(mongodb_uri)
            .await
            .map_err(|e| PersistError::Connection(e.to_string()))?;

        let collection = client.database(database).collection(COLLECTION_NAME);
        Ok(Self { collection })
    }
}

#[async_trait]
impl KeyValueStore for MongoStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let filter = doc! { "_id": key };
        let document = self.collection.find_one(filter).await?;
        Ok(document.map(|d| d.value))
    }

    async fn set(&self, key: &str, value: String) -> Result<()> {
        let filter = doc! { "_id": key };
        let document = KvDocument {
            key: key.to_string(),
            value,
            updated_at: Utc::now(),
        };
        self.collection
            .replace_one(filter, &document)
            .upsert(true)
            .await?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let filter = doc! { "_id": key };
        self.collection.delete_one(filter).await?;
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "mongodb"
    }
}
