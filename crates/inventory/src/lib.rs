//! Inventory domain module.
//!
//! Business rules for the minibar stock list, implemented as deterministic
//! domain logic (no IO, no UI, no storage). Persistence is wired in by the
//! caller after each successful operation.

pub mod catalog;
pub mod item;
pub mod name;
pub mod quantity;
pub mod state;
pub mod store;

pub use catalog::default_catalog;
pub use item::Item;
pub use name::ItemName;
pub use quantity::{Direction, parse_delta};
pub use state::{
    AdjustQuantity, CreateItem, InventoryCommand, InventoryEvent, InventoryState, ItemCreated,
    QuantityAdjusted,
};
pub use store::InventoryStore;
