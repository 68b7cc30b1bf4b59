//! Value object trait: equality by value, not identity.
//!
//! Everything the generator produces is a value: two ledger lines with the same
//! account and amount are interchangeable, and reference data (parties, catalog
//! entries) is never mutated after the profile is built.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one.
///
/// ```ignore
/// let a = Money::from_rupees(100);
/// let b = Money::from_paise(10_000);
/// assert_eq!(a, b);
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
