//! Screen mode selector.

use minibar_inventory::Direction;

/// The three tabs of the inventory screen.
///
/// A mode only decides which operation the UI may invoke; it never changes
/// how the store behaves.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Stock overview; new items are added here.
    #[default]
    Stock,
    /// Restocking.
    Inbound,
    /// Withdrawal.
    Outbound,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Stock, Mode::Inbound, Mode::Outbound];

    /// Quantity direction this mode submits, if any.
    pub fn direction(self) -> Option<Direction> {
        match self {
            Mode::Stock => None,
            Mode::Inbound => Some(Direction::Increase),
            Mode::Outbound => Some(Direction::Decrease),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mode::Stock => "Stock",
            Mode::Inbound => "Inbound",
            Mode::Outbound => "Outbound",
        }
    }
}
