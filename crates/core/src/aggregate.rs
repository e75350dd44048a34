//! Aggregate root trait for stateful domain models.

/// Aggregate root marker + minimal interface.
///
/// Aggregates own a consistency boundary (an order and its lifecycle) and
/// track how many state changes they have gone through.
pub trait AggregateRoot {
    /// Strongly-typed aggregate identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the aggregate identifier.
    fn id(&self) -> &Self::Id;

    /// Monotonically increasing version of the aggregate's state.
    ///
    /// Starts at 0 on construction and grows by one per state transition.
    fn version(&self) -> u64;
}
