use serde::{Deserialize, Serialize};

use minibar_core::{Aggregate, AggregateRoot, DomainError, Entity, ItemId};

use crate::item::Item;
use crate::name::ItemName;
use crate::quantity::{Direction, parse_delta};

/// Aggregate root: the ordered inventory list.
///
/// Invariants held after every applied event:
/// - item ids are pairwise distinct;
/// - item names are pairwise distinct after normalization;
/// - quantities are never negative (enforced by `u64` and checked deltas).
///
/// Order is display order only; newly created items go to the front.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InventoryState {
    items: Vec<Item>,
    version: u64,
}

impl InventoryState {
    /// Wrap an existing item sequence as-is (no invariant checks).
    pub fn from_items(items: Vec<Item>) -> Self {
        Self { items, version: 0 }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up an item by its exact stored name.
    pub fn find(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.name() == name)
    }

    pub fn quantity_of(&self, name: &str) -> Option<u64> {
        self.find(name).map(Item::quantity)
    }

    fn contains_name(&self, name: &ItemName) -> bool {
        self.items.iter().any(|i| name.matches(i.name()))
    }

    fn contains_id(&self, id: &ItemId) -> bool {
        self.items.iter().any(|i| i.id() == id)
    }
}

impl AggregateRoot for InventoryState {
    fn version(&self) -> u64 {
        self.version
    }
}

/// Command: CreateItem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateItem {
    pub item_id: ItemId,
    pub raw_name: String,
}

/// Command: AdjustQuantity.
///
/// `item_name` is the exact stored name picked by the caller; `delta` is the
/// free text typed by the user and is parsed during validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjustQuantity {
    pub item_name: String,
    pub delta: String,
    pub direction: Direction,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InventoryCommand {
    CreateItem(CreateItem),
    AdjustQuantity(AdjustQuantity),
}

/// Event: ItemCreated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemCreated {
    pub item_id: ItemId,
    pub name: ItemName,
}

/// Event: QuantityAdjusted.
///
/// `position` is the list slot resolved by `handle`; restored data may repeat
/// ids, so the slot (not the id) selects the item. `quantity` is the new,
/// already checked stock level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityAdjusted {
    pub item_id: ItemId,
    pub position: usize,
    pub direction: Direction,
    pub delta: u64,
    pub quantity: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InventoryEvent {
    ItemCreated(ItemCreated),
    QuantityAdjusted(QuantityAdjusted),
}

impl InventoryEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            InventoryEvent::ItemCreated(_) => "inventory.item.created",
            InventoryEvent::QuantityAdjusted(_) => "inventory.item.quantity_adjusted",
        }
    }
}

impl Aggregate for InventoryState {
    type Command = InventoryCommand;
    type Event = InventoryEvent;
    type Error = DomainError;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            InventoryEvent::ItemCreated(e) => {
                self.items
                    .insert(0, Item::new(e.item_id.clone(), e.name.clone()));
            }
            InventoryEvent::QuantityAdjusted(e) => {
                if let Some(item) = self.items.get_mut(e.position) {
                    item.set_quantity(e.quantity);
                }
            }
        }

        // Deterministic version tracking: +1 per applied event.
        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            InventoryCommand::CreateItem(cmd) => self.handle_create(cmd),
            InventoryCommand::AdjustQuantity(cmd) => self.handle_adjust(cmd),
        }
    }
}

impl InventoryState {
    fn handle_create(&self, cmd: &CreateItem) -> Result<Vec<InventoryEvent>, DomainError> {
        let name = ItemName::parse(&cmd.raw_name)?;
        if self.contains_name(&name) {
            return Err(DomainError::DuplicateName(name.into_string()));
        }
        if self.contains_id(&cmd.item_id) {
            return Err(DomainError::invalid_id(format!(
                "ItemId `{}` already in use",
                cmd.item_id
            )));
        }
        Ok(vec![InventoryEvent::ItemCreated(ItemCreated {
            item_id: cmd.item_id.clone(),
            name,
        })])
    }

    // Order matters: selection and number format are reported before the
    // item lookup and the stock check.
    fn handle_adjust(&self, cmd: &AdjustQuantity) -> Result<Vec<InventoryEvent>, DomainError> {
        if cmd.item_name.is_empty() {
            return Err(DomainError::NoSelection);
        }
        let delta = parse_delta(&cmd.delta)?;
        let position = self
            .items
            .iter()
            .position(|i| i.name() == cmd.item_name)
            .ok_or_else(|| DomainError::ItemNotFound(cmd.item_name.clone()))?;
        let item = &self.items[position];

        let quantity = match cmd.direction {
            Direction::Increase => item.quantity().checked_add(delta).ok_or_else(|| {
                DomainError::QuantityOverflow {
                    name: item.name().to_string(),
                }
            })?,
            Direction::Decrease => item.quantity().checked_sub(delta).ok_or_else(|| {
                DomainError::InsufficientStock {
                    name: item.name().to_string(),
                    requested: delta,
                    available: item.quantity(),
                }
            })?,
        };

        Ok(vec![InventoryEvent::QuantityAdjusted(QuantityAdjusted {
            item_id: item.id().clone(),
            position,
            direction: cmd.direction,
            delta,
            quantity,
        })])
    }
}
