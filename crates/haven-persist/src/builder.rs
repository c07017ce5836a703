use serde::Deserialize;
use std::path::PathBuf;
use std::sync::Arc;

use crate::client::Storage;
use crate::dbs::file::FileStore;
use crate::dbs::memory::MemoryStore;
use crate::error::{PersistError, Result};
use crate::store::KeyValueStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Memory,
    #[default]
    File,
    Mongodb,
}

pub struct StorageBuilder {
    backend: StorageBackend,
    data_dir: Option<PathBuf>,
    mongodb_uri: Option<String>,
    database: Option<String>,
}

impl StorageBuilder {
    pub fn new() -> Self {
        Self {
            backend: StorageBackend::default(),
            data_dir: None,
            mongodb_uri: None,
            database: None,
        }
    }

    pub fn backend(mut self, backend: StorageBackend) -> Self {
        self.backend = backend;
        self
    }

    pub fn data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    pub fn mongodb_uri(mut self, uri: impl Into<String>) -> Self {
        self.mongodb_uri = Some(uri.into());
        self
    }

    pub fn database(mut self, db: impl Into<String>) -> Self {
        self.database = Some(db.into());
        self
    }

    pub async fn build(self) -> Result<Storage> {
        let backend = self.backend;
        let store: Arc<dyn KeyValueStore> = match backend {
            StorageBackend::Memory => Arc::new(MemoryStore::new()),
            StorageBackend::File => {
                let dir = self
                    .data_dir
                    .ok_or_else(|| PersistError::Config("data_dir is required".to_string()))?;
                Arc::new(FileStore::open(dir).await?)
            }
            StorageBackend::Mongodb => self.build_mongo().await?,
        };

        tracing::info!(backend = store.backend_name(), "Storage ready");
        Ok(Storage::new(store))
    }

    #[cfg(feature = "mongodb")]
    async fn build_mongo(self) -> Result<Arc<dyn KeyValueStore>> {
        let uri = self
            .mongodb_uri
            .ok_or_else(|| PersistError::Config("mongodb_uri is required".to_string()))?;
        let database = self
            .database
            .ok_or_else(|| PersistError::Config("database is required".to_string()))?;
        Ok(Arc::new(crate::dbs::mongo::MongoStore::connect(&uri, &database).await?))
    }

    #[cfg(not(feature = "mongodb"))]
    async fn build_mongo(self) -> Result<Arc<dyn KeyValueStore>> {
        Err(PersistError::Config(
            "mongodb backend requires the `mongodb` feature".to_string(),
        ))
    }
}

impl Default for StorageBuilder {
    fn default() -> Self {
        Self::new()
    }
}
