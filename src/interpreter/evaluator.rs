/// Binary operator evaluation logic.
///
/// Implements the promotion ladder for arithmetic, the integer-only bitwise
/// operators, and the ordering used by comparisons.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements increment, decrement, complement and logical not in place, and
/// the in-place type conversions.
pub mod unary;

/// Core evaluation logic and context management.
///
/// Contains the runtime context, the token loop, and nested array literal
/// evaluation.
pub mod core;

/// Command resolution.
///
/// Declares handlers, their claims and preconditions, the ordered handler
/// groups, and the dispatcher that picks the first applicable handler.
pub mod handler;
