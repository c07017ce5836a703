use async_trait::async_trait;

use crate::error::Result;

/// Raw string key-value storage
///
/// Implementations provide backend-specific reads and writes. Values are
/// opaque strings; typed access goes through [`crate::Storage`].
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read a value, `None` when the key is absent
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Insert or overwrite a value
    async fn set(&self, key: &str, value: String) -> Result<()>;

    /// Remove a key. Removing an absent key is not an error.
    async fn remove(&self, key: &str) -> Result<()>;

    /// Short backend name used in logs and health checks
    fn backend_name(&self) -> &'static str;
}
