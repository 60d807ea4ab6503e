use std::fmt;

/// A command read from the source line.
///
/// Literals are pushed directly by the evaluator; everything else reaches the
/// handler tables as one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// A single character command such as `+` or `A`.
    Plain(char),
    /// `:` followed by a variable letter, e.g. `:X`.
    Store(char),
    /// The extended-logic prefix `e` followed by its operator, e.g. `e&`.
    Extended(char),
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain(c) => write!(f, "{c}"),
            Self::Store(c) => write!(f, ":{c}"),
            Self::Extended(c) => write!(f, "e{c}"),
        }
    }
}

/// Arithmetic operators resolved along the promotion ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Mod,
    /// `#`
    Pow,
}

/// Bitwise operators; both operands are read as integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitwiseOperator {
    /// `&`
    And,
    /// `|`
    Or,
    /// `^`
    Xor,
}

/// Comparison operators; each yields `1` or `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOperator {
    /// `=`
    Equal,
    /// `<`
    Less,
    /// `>`
    Greater,
}

/// Operators applied in place to a single numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    /// `)`: add one, keeping the numeric type.
    Increment,
    /// `(`: subtract one, keeping the numeric type.
    Decrement,
    /// `~`: bitwise complement.
    Complement,
    /// `!`: logical negation, producing `0` or `1`.
    Not,
}

/// Target types of the in-place conversion commands `i`, `f` and `c`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    /// `i`
    Integer,
    /// `f`
    Float,
    /// `c`
    Character,
}

impl fmt::Display for ArithmeticOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Pow => "#",
        };
        write!(f, "{symbol}")
    }
}

impl fmt::Display for BitwiseOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::And => "&",
            Self::Or => "|",
            Self::Xor => "^",
        };
        write!(f, "{symbol}")
    }
}
