/// Lexing errors.
///
/// Defines the errors raised while splitting a source line into tokens. The
/// only fatal lexing condition is a numeric literal that does not fit its
/// type; every other byte sequence is a valid command stream.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors that can be raised while commands run: arithmetic
/// domain faults such as division by zero, and failures of the input and
/// output streams used by the I/O commands.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
