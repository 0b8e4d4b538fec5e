use std::sync::Arc;

use thiserror::Error;

/// Blob store operation error.
///
/// Infrastructure errors (backend unavailable, IO failures) as opposed to
/// domain errors (validation, invariants).
#[derive(Debug, Error)]
pub enum BlobStoreError {
    #[error("blob store unavailable: {0}")]
    Unavailable(String),

    #[error("blob read failed for key `{key}`: {reason}")]
    Read { key: String, reason: String },

    #[error("blob write failed for key `{key}`: {reason}")]
    Write { key: String, reason: String },
}

/// Opaque key/value store holding whole serialized values.
///
/// `set` replaces the previous value for the key in a single step; there is no
/// partial write and no merge.
pub trait BlobStore: Send + Sync {
    /// Read the value stored under `key`, or `None` when absent.
    fn get(&self, key: &str) -> Result<Option<String>, BlobStoreError>;

    /// Overwrite the value stored under `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), BlobStoreError>;
}

impl<S> BlobStore for Arc<S>
where
    S: BlobStore + ?Sized,
{
    fn get(&self, key: &str) -> Result<Option<String>, BlobStoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), BlobStoreError> {
        (**self).set(key, value)
    }
}

impl<S> BlobStore for Box<S>
where
    S: BlobStore + ?Sized,
{
    fn get(&self, key: &str) -> Result<Option<String>, BlobStoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), BlobStoreError> {
        (**self).set(key, value)
    }
}
