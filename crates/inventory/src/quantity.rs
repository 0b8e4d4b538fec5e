//! Quantity deltas and their direction.

use serde::{Deserialize, Serialize};

use minibar_core::{DomainError, DomainResult};

/// Which way a quantity adjustment moves stock.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Restock ("inbound").
    Increase,
    /// Withdrawal or sale ("outbound").
    Decrease,
}

impl Direction {
    pub const INBOUND: Direction = Direction::Increase;
    pub const OUTBOUND: Direction = Direction::Decrease;

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Increase => "increase",
            Direction::Decrease => "decrease",
        }
    }
}

/// Parse a free-text delta into a strictly positive integer.
///
/// Surrounding whitespace is ignored. Anything else that is not a plain
/// integer (fractions, exponents, trailing text) is rejected rather than
/// coerced, as are zero and negative values.
pub fn parse_delta(raw: &str) -> DomainResult<u64> {
    let value: i64 = raw
        .trim()
        .parse()
        .map_err(|_| DomainError::invalid_quantity(raw))?;
    if value <= 0 {
        return Err(DomainError::invalid_quantity(raw));
    }
    u64::try_from(value).map_err(|_| DomainError::invalid_quantity(raw))
}
