//! Entity trait: records that keep their identity across fetches.

/// Entity marker + minimal interface.
///
/// Invoice rows and line items are re-fetched wholesale on every refresh; the
/// id is what lets a realtime update replace the previous copy of a row.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
