//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Identifier of an inventory item.
///
/// Opaque and immutable. Catalog items carry fixed seed ids (`"water"`),
/// user-added items get a generated UUIDv7 string, so rapid successive
/// additions never collide.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Generate a fresh identifier.
    ///
    /// Prefer passing IDs explicitly in tests for determinism.
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Wrap a fixed seed identifier.
    pub fn seed(id: &str) -> Self {
        Self(id.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ItemId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(DomainError::invalid_id("ItemId: empty"));
        }
        Ok(Self(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_distinct() {
        let ids: std::collections::HashSet<ItemId> = (0..1000).map(|_| ItemId::new()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn seed_ids_keep_their_text() {
        let id = ItemId::seed("water");
        assert_eq!(id.as_str(), "water");
        assert_eq!(id.to_string(), "water");
    }

    #[test]
    fn parse_rejects_blank() {
        assert!(matches!(ItemId::from_str("  "), Err(DomainError::InvalidId(_))));
        assert_eq!(ItemId::from_str("soju").unwrap(), ItemId::seed("soju"));
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&ItemId::seed("coke")).unwrap();
        assert_eq!(json, "\"coke\"");
    }
}
