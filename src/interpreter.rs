/// The evaluator module runs a line against the operand stack.
///
/// The evaluator walks the token stream, pushes literals, evaluates nested
/// array literals on fresh stacks, and hands every command to the ordered
/// handler groups, which pick the first handler whose operand types fit.
///
/// # Responsibilities
/// - Owns the evaluation context: stack, variables and I/O streams.
/// - Implements the numeric promotion ladder and the comparison rules.
/// - Reports fatal faults such as division by zero with their column.
pub mod evaluator;
/// The lexer module splits a source line into tokens.
///
/// Numeric literals, text literals, bracketed array and block literals, the
/// two-character `:X` and `eX` commands, and single-character commands are
/// recognised here. Spaces and control characters only separate tokens.
pub mod lexer;
/// The operand stack.
pub mod stack;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the `Value` sum type (integers, floats, characters,
/// texts, lists and blocks), the growable `List` container, and the
/// conversions between variants.
///
/// # Responsibilities
/// - Defines `Value` and `List`.
/// - Implements the readings, in-place conversions, equality and rendering.
pub mod value;
/// The twenty-six variable slots `A`..`Z`.
pub mod variables;
