/// Growable lists of values.
///
/// Defines `List`, the ordered container behind list values. It tracks a
/// slot capacity separately from its length and grows by a fixed step, and it
/// supports insertion and removal by shifting, ranges, and copies.
pub mod list;

/// The runtime value type.
///
/// Declares `Value`, its capability masks, and the conversions between
/// variants: the non-destructive `to_*` readings, the in-place `convert_to_*`
/// operations, equality, truthiness, and rendering.
pub mod core;
