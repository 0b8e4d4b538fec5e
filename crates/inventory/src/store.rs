//! The inventory store: the three mutations the UI may invoke.

use minibar_core::{Aggregate, DomainResult, ItemId};

use crate::catalog::default_catalog;
use crate::quantity::Direction;
use crate::state::{AdjustQuantity, CreateItem, InventoryCommand, InventoryState};

/// Owns the canonical [`InventoryState`] and applies validated commands to it.
///
/// Every operation either fully applies and returns the new snapshot, or
/// returns a [`minibar_core::DomainError`] with the state untouched. The store
/// never persists anything itself; callers save the returned snapshot.
#[derive(Debug, Clone, Default)]
pub struct InventoryStore {
    state: InventoryState,
}

impl InventoryStore {
    pub fn new(state: InventoryState) -> Self {
        Self { state }
    }

    pub fn with_default_catalog() -> Self {
        Self::new(default_catalog())
    }

    pub fn state(&self) -> &InventoryState {
        &self.state
    }

    pub fn into_state(self) -> InventoryState {
        self.state
    }

    /// Add a new item (quantity 0) at the front of the list.
    pub fn create_item(&mut self, raw_name: &str) -> DomainResult<&InventoryState> {
        self.create_item_with_id(ItemId::new(), raw_name)
    }

    /// Like [`Self::create_item`] with a caller-chosen id.
    pub fn create_item_with_id(
        &mut self,
        item_id: ItemId,
        raw_name: &str,
    ) -> DomainResult<&InventoryState> {
        let cmd = InventoryCommand::CreateItem(CreateItem {
            item_id,
            raw_name: raw_name.to_string(),
        });
        self.execute(cmd)
    }

    /// Move stock of `item_name` by the parsed `delta` in `direction`.
    pub fn adjust_quantity(
        &mut self,
        item_name: &str,
        delta: &str,
        direction: Direction,
    ) -> DomainResult<&InventoryState> {
        let cmd = InventoryCommand::AdjustQuantity(AdjustQuantity {
            item_name: item_name.to_string(),
            delta: delta.to_string(),
            direction,
        });
        self.execute(cmd)
    }

    pub fn inbound(&mut self, item_name: &str, delta: &str) -> DomainResult<&InventoryState> {
        self.adjust_quantity(item_name, delta, Direction::Increase)
    }

    pub fn outbound(&mut self, item_name: &str, delta: &str) -> DomainResult<&InventoryState> {
        self.adjust_quantity(item_name, delta, Direction::Decrease)
    }

    fn execute(&mut self, cmd: InventoryCommand) -> DomainResult<&InventoryState> {
        match self.state.execute(&cmd) {
            Ok(events) => {
                for event in &events {
                    tracing::debug!(event_type = event.event_type(), ?event, "inventory event applied");
                }
                Ok(&self.state)
            }
            Err(err) => {
                tracing::debug!(error = %err, ?cmd, "inventory command rejected");
                Err(err)
            }
        }
    }
}
