use minibar_core::{Entity, ItemId};

use crate::name::ItemName;

/// One stocked product.
///
/// `id` and `name` are fixed at creation; `quantity` is the only field that
/// changes, and only through [`crate::InventoryState`] events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    id: ItemId,
    name: String,
    quantity: u64,
}

impl Item {
    /// A freshly created item starts with no stock.
    pub fn new(id: ItemId, name: ItemName) -> Self {
        Self {
            id,
            name: name.into_string(),
            quantity: 0,
        }
    }

    /// Rebuild an item from persisted data, verbatim.
    pub fn restore(id: ItemId, name: impl Into<String>, quantity: u64) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    pub(crate) fn set_quantity(&mut self, quantity: u64) {
        self.quantity = quantity;
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
