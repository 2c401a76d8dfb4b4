use async_trait::async_trait;

use crate::item::Item;

use super::StoreResult;

/// Structured store holding full item records keyed by id.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Provisions the backing table if it does not exist yet.
    ///
    /// Called once during startup, before the server accepts traffic.
    /// Transient probe failures are retried a bounded number of times;
    /// exhausting the retries is fatal.
    async fn ensure_ready(&self) -> StoreResult<()>;

    /// Gets the record for `id`, or `None` if the key does not exist.
    async fn get(&self, id: &str) -> StoreResult<Option<Item>>;

    /// Upserts the full record under its id, overwriting any existing
    /// value.
    async fn put(&self, item: &Item) -> StoreResult<()>;

    /// Removes the record for `id`. Absence of the key is not an error.
    async fn delete(&self, id: &str) -> StoreResult<()>;
}

/// Object store holding raw payload bytes keyed by item id.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Provisions the backing bucket if it does not exist yet.
    ///
    /// Same startup and retry contract as
    /// [`KeyValueStore::ensure_ready`].
    async fn ensure_ready(&self) -> StoreResult<()>;

    /// Returns the stored bytes for `key`, or `None` if missing.
    async fn get(&self, key: &str) -> StoreResult<Option<Vec<u8>>>;

    /// Stores `bytes` under `key`, overwriting any existing object.
    async fn put(&self, key: &str, bytes: &[u8]) -> StoreResult<()>;

    /// Removes the object for `key`. A missing key is not an error.
    async fn delete(&self, key: &str) -> StoreResult<()>;
}
