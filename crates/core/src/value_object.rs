//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. Receipts and
/// report lines are value objects: two receipts with the same product snapshot,
/// counterparty and date are interchangeable.
///
/// - **Value Object**: no identity (two with the same values are equal)
/// - **Entity**: has identity (see [`crate::Entity`])
///
/// The bounds keep value objects cheap to copy around, comparable, and
/// printable in logs and test failures.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
