//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity. A `Product` describing a medium Americano
/// priced at 30 is equal to any other with the same attributes, and the
/// ingredient requirements of two orders compare equal when they ask for the
/// same counts.
///
/// Value objects are immutable once built; "changing" one means constructing
/// a new value.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
