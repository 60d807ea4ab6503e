/// Numeric parsing and rendering helpers.
///
/// This module holds the small conversion routines shared by the value model
/// and the handlers: C-style `%g` rendering of floats, lenient extraction of
/// the first decimal run of a byte string, and clamping conversions between
/// `i64` and `usize` for counts and indices.
pub mod num;
/// Native stack growth for recursive evaluation.
///
/// Nested array literals are evaluated recursively. Every recursive step goes
/// through [`recursion::ensure_sufficient_stack`] so that deeply nested input
/// grows the stack on the heap instead of overflowing it.
pub mod recursion;
