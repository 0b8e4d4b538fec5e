//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values. An item
/// name is a value object; an item (which keeps its id while its quantity
/// changes) is an entity.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
