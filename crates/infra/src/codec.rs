//! Wire format of the persisted inventory.
//!
//! The whole item list is one JSON array of `{id, name, qty}` records. There
//! is no schema version, so every field is optional on read.

use serde::{Deserialize, Deserializer, Serialize};

use minibar_core::{Entity, ItemId};
use minibar_inventory::{InventoryState, Item};

/// Key under which the item list is stored.
pub const ITEMS_KEY: &str = "items";

/// One persisted item. Absent and `null` fields both read as the default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub qty: u64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl From<&Item> for ItemRecord {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id().to_string(),
            name: item.name().to_string(),
            qty: item.quantity(),
        }
    }
}

impl ItemRecord {
    /// Rebuild the domain item verbatim; a missing id gets a fresh one.
    pub fn into_item(self) -> Item {
        let id = if self.id.is_empty() {
            let id = ItemId::new();
            tracing::warn!(name = %self.name, %id, "persisted item had no id; assigned a new one");
            id
        } else {
            ItemId::seed(&self.id)
        };
        Item::restore(id, self.name, self.qty)
    }
}

pub fn encode(state: &InventoryState) -> Result<String, serde_json::Error> {
    let records: Vec<ItemRecord> = state.items().iter().map(ItemRecord::from).collect();
    serde_json::to_string(&records)
}

pub fn decode(raw: &str) -> Result<InventoryState, serde_json::Error> {
    let records: Vec<ItemRecord> = serde_json::from_str(raw)?;
    Ok(InventoryState::from_items(
        records.into_iter().map(ItemRecord::into_item).collect(),
    ))
}
