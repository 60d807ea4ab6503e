/// Arithmetic along the promotion ladder.
pub mod core;

/// Bitwise operators on integer readings.
pub mod bitwise;

/// Ordering of values for comparisons and selection.
pub mod comparison;
