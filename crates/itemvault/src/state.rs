//! Shared application state.
//!
//! The state carries the item service, which in turn holds the two store
//! client handles. Handles are constructed once at startup and shared by
//! reference across all in-flight requests; there are no per-request
//! globals.

use std::sync::Arc;

use itemvault_core::storage::{BlobStore, KeyValueStore};

use crate::service::ItemService;

/// Shared application state, cloned into each request handler.
#[derive(Clone)]
pub struct AppState {
    /// Item CRUD orchestration over the two backing stores.
    pub items: Arc<ItemService>,
}

impl AppState {
    /// Creates state from already-provisioned store handles.
    pub fn new(kv: Arc<dyn KeyValueStore>, blobs: Arc<dyn BlobStore>) -> Self {
        Self {
            items: Arc::new(ItemService::new(kv, blobs)),
        }
    }
}
