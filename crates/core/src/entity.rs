//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Two customers with the same name are still different customers; the id is
/// what makes them distinct.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
