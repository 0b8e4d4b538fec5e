//! Inventory session: the mutation boundary the UI calls into.

use minibar_core::{DomainResult, ItemId};
use minibar_infra::PersistencePort;
use minibar_inventory::{Direction, InventoryState, InventoryStore, Item};

use crate::mode::Mode;

/// Owns the live inventory and saves it after every successful mutation.
///
/// Rejected operations never reach persistence. A failed save is logged by
/// the port and does not undo the in-memory change; the next successful
/// save catches storage up.
#[derive(Debug)]
pub struct InventorySession<P> {
    store: InventoryStore,
    persistence: P,
}

impl<P: PersistencePort> InventorySession<P> {
    /// Load the saved inventory (or the default catalog) and start a session.
    pub fn open(persistence: P) -> Self {
        let state = persistence.load();
        Self {
            store: InventoryStore::new(state),
            persistence,
        }
    }

    pub fn state(&self) -> &InventoryState {
        self.store.state()
    }

    pub fn items(&self) -> &[Item] {
        self.store.state().items()
    }

    pub fn persistence(&self) -> &P {
        &self.persistence
    }

    pub fn create_item(&mut self, raw_name: &str) -> DomainResult<&InventoryState> {
        self.store.create_item(raw_name)?;
        Ok(self.persist())
    }

    pub fn create_item_with_id(
        &mut self,
        item_id: ItemId,
        raw_name: &str,
    ) -> DomainResult<&InventoryState> {
        self.store.create_item_with_id(item_id, raw_name)?;
        Ok(self.persist())
    }

    pub fn adjust_quantity(
        &mut self,
        item_name: &str,
        delta: &str,
        direction: Direction,
    ) -> DomainResult<&InventoryState> {
        self.store.adjust_quantity(item_name, delta, direction)?;
        Ok(self.persist())
    }

    pub fn inbound(&mut self, item_name: &str, delta: &str) -> DomainResult<&InventoryState> {
        self.adjust_quantity(item_name, delta, Direction::Increase)
    }

    pub fn outbound(&mut self, item_name: &str, delta: &str) -> DomainResult<&InventoryState> {
        self.adjust_quantity(item_name, delta, Direction::Decrease)
    }

    /// Quantity submission from the given screen mode.
    ///
    /// In [`Mode::Stock`] there is nothing to submit; the current state is
    /// returned unchanged and nothing is saved.
    pub fn submit(
        &mut self,
        mode: Mode,
        item_name: &str,
        delta: &str,
    ) -> DomainResult<&InventoryState> {
        match mode.direction() {
            Some(direction) => self.adjust_quantity(item_name, delta, direction),
            None => Ok(self.store.state()),
        }
    }

    fn persist(&self) -> &InventoryState {
        let state = self.store.state();
        self.persistence.save(state);
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minibar_core::DomainError;
    use minibar_infra::{BlobStore, BlobStoreError, PersistenceBridge};
    use minibar_inventory::default_catalog;
    use std::cell::RefCell;

    /// Blob store whose writes always fail; reads find nothing.
    struct ReadOnlyDisk;

    impl BlobStore for ReadOnlyDisk {
        fn get(&self, _key: &str) -> Result<Option<String>, BlobStoreError> {
            Ok(None)
        }

        fn set(&self, key: &str, _value: &str) -> Result<(), BlobStoreError> {
            Err(BlobStoreError::Write {
                key: key.to_string(),
                reason: "read-only file system".into(),
            })
        }
    }

    /// Records every saved snapshot; loads a fixed state.
    #[derive(Default)]
    struct RecordingPort {
        initial: Option<InventoryState>,
        saves: RefCell<Vec<InventoryState>>,
    }

    impl PersistencePort for RecordingPort {
        fn load(&self) -> InventoryState {
            self.initial.clone().unwrap_or_else(default_catalog)
        }

        fn save(&self, state: &InventoryState) {
            self.saves.borrow_mut().push(state.clone());
        }
    }

    #[test]
    fn open_uses_loaded_state() {
        let initial = InventoryState::from_items(vec![Item::restore(ItemId::seed("x"), "X", 9)]);
        let session = InventorySession::open(RecordingPort {
            initial: Some(initial),
            ..RecordingPort::default()
        });
        assert_eq!(session.items().len(), 1);
        assert_eq!(session.state().quantity_of("X"), Some(9));
        assert!(session.persistence().saves.borrow().is_empty());
    }

    #[test]
    fn every_successful_mutation_is_saved() {
        let mut session = InventorySession::open(RecordingPort::default());
        session.create_item("cola").unwrap();
        session.inbound("COLA", "5").unwrap();
        session.outbound("COLA", "2").unwrap();

        let saves = session.persistence().saves.borrow();
        assert_eq!(saves.len(), 3);
        assert_eq!(saves[0].quantity_of("COLA"), Some(0));
        assert_eq!(saves[1].quantity_of("COLA"), Some(5));
        assert_eq!(saves[2].quantity_of("COLA"), Some(3));
        assert_eq!(saves[2], *session.state());
    }

    #[test]
    fn rejected_operations_are_not_saved() {
        let mut session = InventorySession::open(RecordingPort::default());
        assert_eq!(session.create_item(" ").unwrap_err(), DomainError::EmptyName);
        assert_eq!(
            session.outbound("WATER", "1").unwrap_err(),
            DomainError::InsufficientStock {
                name: "WATER".into(),
                requested: 1,
                available: 0,
            }
        );
        assert_eq!(session.inbound("", "1").unwrap_err(), DomainError::NoSelection);
        assert!(session.persistence().saves.borrow().is_empty());
    }

    #[test]
    fn failed_writes_keep_in_memory_changes() {
        let mut session = InventorySession::open(PersistenceBridge::new(ReadOnlyDisk));

        let state = session.create_item("cola").unwrap();
        assert_eq!(state.items()[0].name(), "COLA");

        let state = session.inbound("COLA", "6").unwrap();
        assert_eq!(state.quantity_of("COLA"), Some(6));

        let state = session.outbound("COLA", "2").unwrap();
        assert_eq!(state.quantity_of("COLA"), Some(4));

        assert_eq!(session.state().quantity_of("COLA"), Some(4));
        assert_eq!(session.items().len(), default_catalog().len() + 1);
        assert!(session.persistence().try_load().unwrap().is_none());
    }

    #[test]
    fn submit_follows_mode() {
        let mut session = InventorySession::open(RecordingPort::default());
        session.submit(Mode::Inbound, "SOJU", "4").unwrap();
        session.submit(Mode::Outbound, "SOJU", "1").unwrap();
        let state = session.submit(Mode::Stock, "SOJU", "100").unwrap();
        assert_eq!(state.quantity_of("SOJU"), Some(3));
        assert_eq!(session.persistence().saves.borrow().len(), 2);
    }
}
