//! In-memory storage backend for tests.

mod store;

pub use store::{MemoryBlobStore, MemoryKeyValueStore};
