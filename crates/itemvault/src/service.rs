//! Item CRUD orchestration across the two backing stores.
//!
//! The key-value store is the source of truth for existence checks; the
//! blob store is never consulted to decide existence, only written and
//! deleted in lockstep after the key-value decision. Writes always go
//! key-value first, blob second, and there is no rollback if the second
//! write fails: a crash between the two leaves a partially-written state.

use std::sync::Arc;

use itemvault_core::item::{Item, ItemError};
use itemvault_core::storage::{BlobStore, KeyValueStore, StoreError};

/// Coordinates item CRUD across the key-value and blob stores.
pub struct ItemService {
    kv: Arc<dyn KeyValueStore>,
    blobs: Arc<dyn BlobStore>,
}

impl ItemService {
    /// Creates a service over the given store handles.
    pub fn new(kv: Arc<dyn KeyValueStore>, blobs: Arc<dyn BlobStore>) -> Self {
        Self { kv, blobs }
    }

    /// Creates a new item from raw request bytes.
    ///
    /// The decoded record goes to the key-value store and the exact raw
    /// bytes to the blob store.
    pub async fn create(&self, raw: &[u8]) -> Result<(), ItemError> {
        let item = Item::from_slice(raw)?;
        if self.get_record(item.id()).await.is_some() {
            return Err(ItemError::AlreadyExists);
        }
        self.put_record(&item, raw).await;
        tracing::info!(id = %item.id(), "Item created");
        Ok(())
    }

    /// Reads the stored record for `id` from the key-value store.
    pub async fn read(&self, id: &str) -> Result<Item, ItemError> {
        if id.is_empty() {
            return Err(ItemError::MissingId);
        }
        self.get_record(id).await.ok_or(ItemError::NotFound)
    }

    /// Overwrites an existing item from raw request bytes.
    pub async fn update(&self, raw: &[u8]) -> Result<(), ItemError> {
        let item = Item::from_slice(raw)?;
        if self.get_record(item.id()).await.is_none() {
            return Err(ItemError::NotFound);
        }
        self.put_record(&item, raw).await;
        tracing::info!(id = %item.id(), "Item updated");
        Ok(())
    }

    /// Removes an item from both stores.
    pub async fn delete(&self, id: &str) -> Result<(), ItemError> {
        if id.is_empty() {
            return Err(ItemError::MissingId);
        }
        if self.get_record(id).await.is_none() {
            return Err(ItemError::NotFound);
        }
        if let Err(err) = self.kv.delete(id).await {
            log_store_error("key-value delete", id, &err);
        }
        if let Err(err) = self.blobs.delete(id).await {
            log_store_error("blob delete", id, &err);
        }
        tracing::info!(id, "Item deleted");
        Ok(())
    }

    /// Existence checks and reads go through the key-value store only.
    ///
    /// A backend error is logged and reported as absence; the typed
    /// error stays observable at the store trait for tests.
    async fn get_record(&self, id: &str) -> Option<Item> {
        match self.kv.get(id).await {
            Ok(found) => found,
            Err(err) => {
                log_store_error("key-value get", id, &err);
                None
            }
        }
    }

    /// Key-value write first, blob write second. Failures are logged and
    /// swallowed (fire-and-forget), so a failed first write does not
    /// stop the second.
    async fn put_record(&self, item: &Item, raw: &[u8]) {
        if let Err(err) = self.kv.put(item).await {
            log_store_error("key-value put", item.id(), &err);
        }
        if let Err(err) = self.blobs.put(item.id(), raw).await {
            log_store_error("blob put", item.id(), &err);
        }
    }
}

fn log_store_error(operation: &str, id: &str, err: &StoreError) {
    tracing::error!(id, error = %err, "{operation} failed");
}
