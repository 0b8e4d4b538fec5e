//! Persistence bridge between the in-memory inventory and a blob store.

use thiserror::Error;

use minibar_inventory::{InventoryState, default_catalog};

use crate::blob_store::{BlobStore, BlobStoreError};
use crate::codec::{self, ITEMS_KEY};

/// Persistence failure. Never surfaced to the user; the bridge logs it.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("failed to read persisted inventory: {0}")]
    Read(#[source] BlobStoreError),

    #[error("persisted inventory is unreadable: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("failed to encode inventory: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("failed to write inventory: {0}")]
    Write(#[source] BlobStoreError),
}

/// Port through which the application loads and saves inventory snapshots.
///
/// Both operations are infallible from the caller's point of view: `load`
/// falls back to the default catalog and `save` failures leave the in-memory
/// state authoritative.
pub trait PersistencePort {
    fn load(&self) -> InventoryState;
    fn save(&self, state: &InventoryState);
}

impl<P> PersistencePort for Box<P>
where
    P: PersistencePort + ?Sized,
{
    fn load(&self) -> InventoryState {
        (**self).load()
    }

    fn save(&self, state: &InventoryState) {
        (**self).save(state)
    }
}

/// Stores the full item list as one JSON blob under a fixed key.
#[derive(Debug)]
pub struct PersistenceBridge<S> {
    store: S,
    key: String,
}

impl<S: BlobStore> PersistenceBridge<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, ITEMS_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    /// Read the persisted state. `Ok(None)` when nothing has been saved yet.
    ///
    /// Decoded items are returned verbatim; invariants are not re-checked.
    pub fn try_load(&self) -> Result<Option<InventoryState>, PersistenceError> {
        let raw = self.store.get(&self.key).map_err(PersistenceError::Read)?;
        match raw {
            Some(raw) if !raw.trim().is_empty() => codec::decode(&raw)
                .map(Some)
                .map_err(PersistenceError::Decode),
            _ => Ok(None),
        }
    }

    /// Overwrite the persisted state with `state`.
    pub fn try_save(&self, state: &InventoryState) -> Result<(), PersistenceError> {
        let payload = codec::encode(state).map_err(PersistenceError::Encode)?;
        self.store
            .set(&self.key, &payload)
            .map_err(PersistenceError::Write)
    }
}

impl<S: BlobStore> PersistencePort for PersistenceBridge<S> {
    fn load(&self) -> InventoryState {
        match self.try_load() {
            Ok(Some(state)) => {
                tracing::info!(key = %self.key, items = state.len(), "inventory loaded");
                state
            }
            Ok(None) => {
                tracing::info!(key = %self.key, "no saved inventory; using default catalog");
                default_catalog()
            }
            Err(err) => {
                tracing::warn!(key = %self.key, error = %err, "failed to load inventory; using default catalog");
                default_catalog()
            }
        }
    }

    fn save(&self, state: &InventoryState) {
        match self.try_save(state) {
            Ok(()) => tracing::debug!(key = %self.key, items = state.len(), "inventory saved"),
            Err(err) => {
                tracing::error!(key = %self.key, error = %err, "failed to save inventory")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blob_store::InMemoryBlobStore;
    use minibar_inventory::InventoryStore;

    struct BrokenStore;

    impl BlobStore for BrokenStore {
        fn get(&self, key: &str) -> Result<Option<String>, BlobStoreError> {
            Err(BlobStoreError::Read {
                key: key.to_string(),
                reason: "disk on fire".into(),
            })
        }

        fn set(&self, key: &str, _value: &str) -> Result<(), BlobStoreError> {
            Err(BlobStoreError::Write {
                key: key.to_string(),
                reason: "disk on fire".into(),
            })
        }
    }

    #[test]
    fn load_without_saved_state_yields_catalog() {
        let bridge = PersistenceBridge::new(InMemoryBlobStore::new());
        assert!(bridge.try_load().unwrap().is_none());
        assert_eq!(bridge.load().items(), default_catalog().items());
    }

    #[test]
    fn blank_blob_counts_as_absent() {
        let bridge = PersistenceBridge::new(InMemoryBlobStore::with_value(ITEMS_KEY, ""));
        assert!(bridge.try_load().unwrap().is_none());
    }

    #[test]
    fn corrupt_blob_falls_back_to_catalog() {
        let bridge = PersistenceBridge::new(InMemoryBlobStore::with_value(ITEMS_KEY, "{not json"));
        assert!(matches!(bridge.try_load(), Err(PersistenceError::Decode(_))));
        assert_eq!(bridge.load().items(), default_catalog().items());
    }

    #[test]
    fn unreadable_store_falls_back_to_catalog() {
        let bridge = PersistenceBridge::new(BrokenStore);
        assert!(matches!(bridge.try_load(), Err(PersistenceError::Read(_))));
        assert_eq!(bridge.load().items(), default_catalog().items());
    }

    #[test]
    fn save_failure_is_reported_by_try_save_only() {
        let bridge = PersistenceBridge::new(BrokenStore);
        let state = default_catalog();
        assert!(matches!(bridge.try_save(&state), Err(PersistenceError::Write(_))));
        bridge.save(&state);
    }

    #[test]
    fn null_quantity_does_not_discard_saved_counts() {
        let raw = r#"[{"id":"water","name":"WATER","qty":7},{"id":"soju","name":"SOJU","qty":null}]"#;
        let bridge = PersistenceBridge::new(InMemoryBlobStore::with_value(ITEMS_KEY, raw));
        let state = bridge.load();
        assert_eq!(state.len(), 2);
        assert_eq!(state.quantity_of("WATER"), Some(7));
        assert_eq!(state.quantity_of("SOJU"), Some(0));
    }

    #[test]
    fn loaded_data_is_returned_verbatim() {
        // Duplicate names are not rejected on load.
        let raw = r#"[{"id":"a","name":"WATER","qty":1},{"id":"b","name":"WATER","qty":2}]"#;
        let bridge = PersistenceBridge::new(InMemoryBlobStore::with_value(ITEMS_KEY, raw));
        let state = bridge.load();
        assert_eq!(state.len(), 2);
        assert_eq!(state.items()[1].quantity(), 2);
    }

    #[test]
    fn save_of_load_is_idempotent() {
        let bridge = PersistenceBridge::new(InMemoryBlobStore::new());
        let mut store = InventoryStore::new(bridge.load());
        store.create_item("cola").unwrap();
        store.inbound("COLA", "7").unwrap();
        bridge.save(store.state());

        let first = bridge.load();
        bridge.save(&first);
        let second = bridge.load();
        assert_eq!(first.items(), second.items());
        assert_eq!(second.quantity_of("COLA"), Some(7));
    }

    #[test]
    fn custom_key_is_isolated() {
        let bridge = PersistenceBridge::with_key(InMemoryBlobStore::new(), "other");
        bridge.save(&default_catalog());
        assert!(bridge.store().get(ITEMS_KEY).unwrap().is_none());
        assert!(bridge.store().get("other").unwrap().is_some());
    }
}
