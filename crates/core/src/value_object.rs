//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// A value object is immutable and fully described by its attributes: two
/// grocery items with the same name, category, date and day counts are the
/// same value, even when the household tracks duplicates of it.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct ItemName(String);
///
/// impl ValueObject for ItemName {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
