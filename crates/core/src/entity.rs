//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// An entity keeps its identity while its attributes change. A stocked product,
/// for instance, is the same entry no matter how often its quantity moves.
pub trait Entity {
    /// Identifier type. Unsized ids (e.g. `str`) are allowed so entities keyed
    /// by a name can hand out a borrow instead of cloning.
    type Id: Eq + core::hash::Hash + core::fmt::Debug + ?Sized;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Whether `other` refers to the same entity (identity, not attribute equality).
    fn same_identity(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
