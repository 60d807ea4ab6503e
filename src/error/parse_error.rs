#[derive(Debug)]
/// Represents all errors that can occur while tokenizing a line.
pub enum ParseError {
    /// A numeric literal could not be represented by its type.
    InvalidLiteral {
        /// The literal as written in the source.
        literal: String,
        /// The byte offset of the literal in the source line.
        column:  usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLiteral { literal, column } => {
                write!(f, "Error at column {column}: Invalid numeric literal '{literal}'.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
