//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is a recoverable, user-correctable input error. They are all
/// detected before any state change, so surfacing one never leaves the
/// inventory half-updated. Storage failures belong to the infra layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A new item name was blank after normalization.
    #[error("enter a name for the new item")]
    EmptyName,

    /// A new item name collides with an existing (normalized) name.
    #[error("item `{0}` already exists")]
    DuplicateName(String),

    /// A quantity change was requested without choosing an item.
    #[error("select an item first")]
    NoSelection,

    /// The requested quantity was not a positive integer.
    #[error("`{0}` is not a valid quantity; enter a whole number greater than zero")]
    InvalidQuantity(String),

    /// The selected item no longer exists.
    #[error("item `{0}` was not found")]
    ItemNotFound(String),

    /// An outbound quantity exceeded the stock on hand.
    #[error("cannot remove {requested} of `{name}`: only {available} in stock")]
    InsufficientStock {
        name: String,
        requested: u64,
        available: u64,
    },

    /// An inbound quantity would overflow the stock counter.
    #[error("quantity of `{name}` would exceed the supported maximum")]
    QuantityOverflow { name: String },

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn invalid_quantity(raw: impl Into<String>) -> Self {
        Self::InvalidQuantity(raw.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    /// Short heading for the blocking notification that shows this error.
    pub fn title(&self) -> &'static str {
        match self {
            DomainError::DuplicateName(_) => "Duplicate error",
            DomainError::ItemNotFound(_)
            | DomainError::InsufficientStock { .. }
            | DomainError::QuantityOverflow { .. } => "Stock error",
            DomainError::EmptyName
            | DomainError::NoSelection
            | DomainError::InvalidQuantity(_)
            | DomainError::InvalidId(_) => "Input error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_group_input_and_stock_errors() {
        assert_eq!(DomainError::EmptyName.title(), "Input error");
        assert_eq!(DomainError::NoSelection.title(), "Input error");
        assert_eq!(DomainError::invalid_quantity("abc").title(), "Input error");
        assert_eq!(
            DomainError::DuplicateName("COLA".into()).title(),
            "Duplicate error"
        );
        assert_eq!(
            DomainError::InsufficientStock {
                name: "WATER".into(),
                requested: 10,
                available: 2,
            }
            .title(),
            "Stock error"
        );
    }

    #[test]
    fn insufficient_stock_message_names_amounts() {
        let err = DomainError::InsufficientStock {
            name: "WATER".into(),
            requested: 10,
            available: 2,
        };
        assert_eq!(
            err.to_string(),
            "cannot remove 10 of `WATER`: only 2 in stock"
        );
    }
}
