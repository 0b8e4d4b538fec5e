//! Key/value blob store boundary.
//!
//! The inventory is persisted as one serialized value under one key; this
//! module abstracts where that value lives.

pub mod in_memory;
pub mod sqlite;
pub mod r#trait;

pub use in_memory::InMemoryBlobStore;
pub use r#trait::{BlobStore, BlobStoreError};
pub use sqlite::SqliteBlobStore;
