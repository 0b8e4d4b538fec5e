//! Infrastructure layer: blob storage adapters and the persistence bridge.

pub mod blob_store;
pub mod codec;
pub mod persistence;

pub use blob_store::{BlobStore, BlobStoreError, InMemoryBlobStore, SqliteBlobStore};
pub use codec::{ITEMS_KEY, ItemRecord};
pub use persistence::{PersistenceBridge, PersistenceError, PersistencePort};
