//! In-memory store implementations.
//!
//! Both stores use HashMaps wrapped in `Arc<RwLock<_>>` for thread-safe
//! access. Data is not persisted and is lost when the store is dropped.
//! Cloning shares the underlying map, so tests can keep a handle for
//! inspection while the service owns another.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use itemvault_core::item::Item;
use itemvault_core::storage::{BlobStore, KeyValueStore, StoreResult};

/// In-memory key-value store holding full item records.
#[derive(Debug, Clone, Default)]
pub struct MemoryKeyValueStore {
    records: Arc<RwLock<HashMap<String, Item>>>,
}

impl MemoryKeyValueStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }
}

#[async_trait]
impl KeyValueStore for MemoryKeyValueStore {
    async fn ensure_ready(&self) -> StoreResult<()> {
        Ok(())
    }

    async fn get(&self, id: &str) -> StoreResult<Option<Item>> {
        let records = self.records.read().await;
        Ok(records.get(id).cloned())
    }

    async fn put(&self, item: &Item) -> StoreResult<()> {
        let mut records = self.records.write().await;
        records.insert(item.id().to_string(), item.clone());
        Ok(())
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        let mut records = self.records.write().await;
        records.remove(id);
        Ok(())
    }
}

/// In-memory blob store holding raw payload bytes.
#[derive(Debug, Clone, Default)]
pub struct MemoryBlobStore {
    objects: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl MemoryBlobStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored objects.
    pub async fn len(&self) -> usize {
        self.objects.read().await.len()
    }
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    async fn ensure_ready(&self) -> StoreResult<()> {
        Ok(())
    }

    async fn get(&self, key: &str) -> StoreResult<Option<Vec<u8>>> {
        let objects = self.objects.read().await;
        Ok(objects.get(key).cloned())
    }

    async fn put(&self, key: &str, bytes: &[u8]) -> StoreResult<()> {
        let mut objects = self.objects.write().await;
        objects.insert(key.to_string(), bytes.to_vec());
        Ok(())
    }

    async fn delete(&self, key: &str) -> StoreResult<()> {
        let mut objects = self.objects.write().await;
        objects.remove(key);
        Ok(())
    }
}
