use std::collections::HashMap;
use std::sync::RwLock;

use super::r#trait::{BlobStore, BlobStoreError};

/// In-memory blob store for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryBlobStore {
    inner: RwLock<HashMap<String, String>>,
}

impl InMemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a single value.
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        let store = Self::new();
        if let Ok(mut map) = store.inner.write() {
            map.insert(key.into(), value.into());
        }
        store
    }
}

impl BlobStore for InMemoryBlobStore {
    fn get(&self, key: &str) -> Result<Option<String>, BlobStoreError> {
        let map = self
            .inner
            .read()
            .map_err(|_| BlobStoreError::Unavailable("in-memory store lock poisoned".into()))?;
        Ok(map.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), BlobStoreError> {
        let mut map = self
            .inner
            .write()
            .map_err(|_| BlobStoreError::Unavailable("in-memory store lock poisoned".into()))?;
        map.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_missing_key_is_none() {
        let store = InMemoryBlobStore::new();
        assert_eq!(store.get("items").unwrap(), None);
    }

    #[test]
    fn set_overwrites() {
        let store = InMemoryBlobStore::with_value("items", "[]");
        store.set("items", "[1]").unwrap();
        assert_eq!(store.get("items").unwrap().as_deref(), Some("[1]"));
    }
}
