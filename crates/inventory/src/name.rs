//! Item name normalization.

use serde::{Deserialize, Serialize};

use minibar_core::{DomainError, DomainResult, ValueObject};

/// A normalized item name: trimmed and uppercased.
///
/// Two names are the same item exactly when their normalized forms are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemName(String);

impl ItemName {
    /// Canonical form used for storage and uniqueness checks. Idempotent.
    pub fn normalize(raw: &str) -> String {
        raw.trim().to_uppercase()
    }

    /// Normalize free text into a name, rejecting blank input.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let normalized = Self::normalize(raw);
        if normalized.is_empty() {
            return Err(DomainError::EmptyName);
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// True when `other` normalizes to this name.
    pub fn matches(&self, other: &str) -> bool {
        Self::normalize(other) == self.0
    }
}

impl ValueObject for ItemName {}

impl core::fmt::Display for ItemName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}
