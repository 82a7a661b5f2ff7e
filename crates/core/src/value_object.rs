//! Value object trait: equality by value, not identity.
//!
//! Derived figures on the dashboard (per-status summaries, invoice totals)
//! have no identity of their own. They are recomputed from the current rows on
//! every refresh and compared by value.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "change" one,
/// compute a new one from fresh input.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct StatusSummary {
///     count: u64,
///     total: Decimal,
/// }
///
/// impl ValueObject for StatusSummary {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
