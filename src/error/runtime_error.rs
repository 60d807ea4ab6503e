#[derive(Debug)]
/// Represents all errors that can occur while commands are evaluated.
///
/// Rejected commands are not errors; a handler whose precondition fails leaves
/// the stack untouched and lets the next handler try. These variants are the
/// faults that abort the whole line.
pub enum RuntimeError {
    /// Integer or character division or modulo by zero.
    DivisionByZero {
        /// The byte offset of the command in the source line.
        column: usize,
    },
    /// A result does not fit: signed division overflowed (`i64::MIN / -1`)
    /// or a repeated or ranged array is too large to allocate.
    Overflow {
        /// The byte offset of the command in the source line.
        column: usize,
    },
    /// Reading input or writing output failed.
    Io {
        /// Details reported by the underlying stream.
        details: String,
        /// The byte offset of the command in the source line.
        column:  usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero { column } => {
                write!(f, "Error at column {column}: Division by zero.")
            },
            Self::Overflow { column } => {
                write!(f, "Error at column {column}: Result too large to represent.")
            },
            Self::Io { details, column } => {
                write!(f, "Error at column {column}: I/O failure: {details}.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
