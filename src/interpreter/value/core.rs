use std::fmt;

use bitflags::bitflags;

use crate::{
    interpreter::value::list::List,
    syntax::Conversion,
    util::num::{
        f64_to_i64_truncated, format_general, i64_to_f64, parse_leading_float,
        parse_leading_integer,
    },
};

/// Largest difference at which two floats still compare equal.
pub const FLOAT_EQUALITY_EPSILON: f64 = 4.9e-64;

bitflags! {
    /// Capability sets over value types, used by handler preconditions.
    ///
    /// # Example
    /// ```
    /// use golfstack::interpreter::value::core::{TypeMask, Value};
    ///
    /// let c = Value::Character(b'a');
    /// assert!(c.is_type(TypeMask::NUMERIC));
    /// assert!(c.is_type(TypeMask::TEXTUAL));
    /// assert!(!c.is_type(TypeMask::ARRAY));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TypeMask: u8 {
        const INTEGER = 1;
        const FLOAT = 1 << 1;
        const CHARACTER = 1 << 2;
        const TEXT = 1 << 3;
        const LIST = 1 << 4;
        const BLOCK = 1 << 5;

        /// Integer or Character.
        const WHOLE = Self::INTEGER.bits() | Self::CHARACTER.bits();
        /// Integer, Float or Character.
        const NUMERIC = Self::WHOLE.bits() | Self::FLOAT.bits();
        /// Any numeric value, or Text.
        const NUMERIC_OR_TEXT = Self::NUMERIC.bits() | Self::TEXT.bits();
        /// Character or Text.
        const TEXTUAL = Self::CHARACTER.bits() | Self::TEXT.bits();
        /// Text or List.
        const ARRAY = Self::TEXT.bits() | Self::LIST.bits();
    }
}

/// Represents a runtime value on the operand stack.
///
/// Every variant owns its payload. `clone` is a deep copy: lists clone their
/// elements and texts duplicate their bytes, so mutating a copy never affects
/// the original.
///
/// `==` is structural and distinguishes tags (`Integer(1) != Float(1.0)`);
/// the language's equality is [`Value::equals`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A signed 64-bit integer.
    Integer(i64),
    /// A double precision float.
    Float(f64),
    /// A single 8-bit code unit.
    Character(u8),
    /// A byte string.
    Text(Vec<u8>),
    /// A list of values.
    List(List),
    /// Unevaluated source captured between `{` and `}`.
    Block(String),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.as_bytes().to_vec())
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Self::Text(v)
    }
}

impl From<List> for Value {
    fn from(v: List) -> Self {
        Self::List(v)
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::List(v.into_iter().collect())
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Integer(i64::from(v))
    }
}

impl Value {
    /// Returns the single-bit mask of this value's type.
    #[must_use]
    pub const fn kind(&self) -> TypeMask {
        match self {
            Self::Integer(_) => TypeMask::INTEGER,
            Self::Float(_) => TypeMask::FLOAT,
            Self::Character(_) => TypeMask::CHARACTER,
            Self::Text(_) => TypeMask::TEXT,
            Self::List(_) => TypeMask::LIST,
            Self::Block(_) => TypeMask::BLOCK,
        }
    }

    /// Tests whether this value's type belongs to `mask`.
    #[must_use]
    pub const fn is_type(&self, mask: TypeMask) -> bool {
        self.kind().intersects(mask)
    }

    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        self.is_type(TypeMask::NUMERIC)
    }

    #[must_use]
    pub const fn is_numeric_or_text(&self) -> bool {
        self.is_type(TypeMask::NUMERIC_OR_TEXT)
    }

    #[must_use]
    pub const fn is_array(&self) -> bool {
        self.is_type(TypeMask::ARRAY)
    }

    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    /// Length of a Text, List or Block; `None` for scalars.
    #[must_use]
    pub fn len(&self) -> Option<usize> {
        match self {
            Self::Text(bytes) => Some(bytes.len()),
            Self::List(list) => Some(list.len()),
            Self::Block(source) => Some(source.len()),
            _ => None,
        }
    }

    /// Reads the value as an integer without modifying it.
    ///
    /// Floats truncate toward zero, characters give their code, and texts
    /// read the integer they start with (`1` when they do not start with
    /// one). Lists and blocks read as `0`.
    ///
    /// # Example
    /// ```
    /// use golfstack::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Float(-3.9).to_integer(), -3);
    /// assert_eq!(Value::Character(b'A').to_integer(), 65);
    /// assert_eq!(Value::from(" 42px").to_integer(), 42);
    /// assert_eq!(Value::from("width: 42px").to_integer(), 1);
    /// assert_eq!(Value::Block("7".into()).to_integer(), 0);
    /// ```
    #[must_use]
    pub fn to_integer(&self) -> i64 {
        match self {
            Self::Integer(n) => *n,
            Self::Float(x) => f64_to_i64_truncated(*x),
            Self::Character(c) => i64::from(*c),
            Self::Text(bytes) => parse_leading_integer(bytes),
            Self::List(_) | Self::Block(_) => 0,
        }
    }

    /// Reads the value as a float without modifying it.
    ///
    /// # Example
    /// ```
    /// use golfstack::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(3).to_float(), 3.0);
    /// assert_eq!(Value::from("3.14 is pi").to_float(), 3.14);
    /// assert_eq!(Value::from("pi is 3.14").to_float(), 1.0);
    /// ```
    #[must_use]
    pub fn to_float(&self) -> f64 {
        match self {
            Self::Integer(n) => i64_to_f64(*n),
            Self::Float(x) => *x,
            Self::Character(c) => f64::from(*c),
            Self::Text(bytes) => parse_leading_float(bytes),
            Self::List(_) | Self::Block(_) => 0.0,
        }
    }

    /// Reads the value as a character without modifying it.
    ///
    /// Numbers narrow to 8 bits, texts give their first byte (or `0` when
    /// empty), and lists and blocks read as a space.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn to_character(&self) -> u8 {
        match self {
            Self::Integer(n) => *n as u8,
            Self::Float(x) => f64_to_i64_truncated(*x) as u8,
            Self::Character(c) => *c,
            Self::Text(bytes) => bytes.first().copied().unwrap_or(0),
            Self::List(_) | Self::Block(_) => b' ',
        }
    }

    /// Renders the value into a new byte string.
    ///
    /// # Example
    /// ```
    /// use golfstack::interpreter::value::core::Value;
    ///
    /// let list = Value::from(vec![Value::Integer(1), Value::Float(0.5), Value::from("ab")]);
    /// assert_eq!(list.to_text(), b"10.5ab");
    /// assert_eq!(Value::Block("1+".into()).to_text(), b"{1+}");
    /// ```
    #[must_use]
    pub fn to_text(&self) -> Vec<u8> {
        let mut rendered = Vec::new();
        self.render_into(&mut rendered);
        rendered
    }

    /// Reads the value as a list without modifying it.
    ///
    /// Lists are copied, texts explode into characters, and every other value
    /// becomes a one-element list.
    #[must_use]
    pub fn to_list(&self) -> List {
        match self {
            Self::List(list) => list.clone(),
            Self::Text(bytes) => List::from_text(bytes),
            other => std::iter::once(other.clone()).collect(),
        }
    }

    /// Like [`Value::to_list`], but reuses the value instead of copying it.
    #[must_use]
    pub fn into_list(self) -> List {
        match self {
            Self::List(list) => list,
            Self::Text(bytes) => List::from_text(&bytes),
            other => std::iter::once(other).collect(),
        }
    }

    /// Replaces the value with its integer reading.
    ///
    /// Only numeric values and texts convert; anything else is left untouched
    /// and `false` is returned.
    ///
    /// # Example
    /// ```
    /// use golfstack::interpreter::value::core::Value;
    ///
    /// let mut v = Value::from("12 monkeys");
    /// assert!(v.convert_to_integer());
    /// assert_eq!(v, Value::Integer(12));
    ///
    /// let mut block = Value::Block(String::new());
    /// assert!(!block.convert_to_integer());
    /// assert_eq!(block, Value::Block(String::new()));
    /// ```
    pub fn convert_to_integer(&mut self) -> bool {
        if !self.is_numeric_or_text() {
            return false;
        }
        *self = Self::Integer(self.to_integer());
        true
    }

    /// Replaces the value with its float reading; see
    /// [`Value::convert_to_integer`].
    pub fn convert_to_float(&mut self) -> bool {
        if !self.is_numeric_or_text() {
            return false;
        }
        *self = Self::Float(self.to_float());
        true
    }

    /// Replaces the value with its character reading; see
    /// [`Value::convert_to_integer`].
    pub fn convert_to_character(&mut self) -> bool {
        if !self.is_numeric_or_text() {
            return false;
        }
        *self = Self::Character(self.to_character());
        true
    }

    /// Applies one of the in-place conversions.
    pub fn convert(&mut self, target: Conversion) -> bool {
        match target {
            Conversion::Integer => self.convert_to_integer(),
            Conversion::Float => self.convert_to_float(),
            Conversion::Character => self.convert_to_character(),
        }
    }

    /// Truthiness used by the `?` command.
    ///
    /// Texts and lists are true when non-empty; everything else is true when
    /// its integer reading is non-zero, so blocks are always false.
    ///
    /// # Example
    /// ```
    /// use golfstack::interpreter::value::core::Value;
    ///
    /// assert!(Value::from("0").is_truthy());
    /// assert!(!Value::from("").is_truthy());
    /// assert!(!Value::Float(0.5).is_truthy());
    /// assert!(Value::Character(b'x').is_truthy());
    /// assert!(!Value::Block("1".into()).is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Text(bytes) => !bytes.is_empty(),
            Self::List(list) => !list.is_empty(),
            other => other.to_integer() != 0,
        }
    }

    /// Compares two values the way the `=` command does.
    ///
    /// Two texts, two blocks or two lists compare by content (lists
    /// element-wise). Any other pair of numbers and texts compares by value:
    /// integer readings when both are whole numbers, float readings within
    /// [`FLOAT_EQUALITY_EPSILON`] otherwise, so `"2"` equals `2`. Remaining
    /// mixed pairs are never equal.
    ///
    /// # Example
    /// ```
    /// use golfstack::interpreter::value::core::Value;
    ///
    /// assert!(Value::Integer(65).equals(&Value::Character(b'A')));
    /// assert!(Value::Float(2.0).equals(&Value::Integer(2)));
    /// assert!(Value::from("2").equals(&Value::Integer(2)));
    /// assert!(Value::from("2.5x").equals(&Value::Float(2.5)));
    /// assert!(!Value::from("2").equals(&Value::from("2.0")));
    /// assert!(!Value::Integer(0).equals(&Value::from(Vec::<Value>::new())));
    /// ```
    #[must_use]
    pub fn equals(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Block(a), Self::Block(b)) => a == b,
            (Self::List(a), Self::List(b)) => a.equals(b),
            (a, b) if a.is_type(TypeMask::WHOLE) && b.is_type(TypeMask::WHOLE) => {
                a.to_integer() == b.to_integer()
            },
            (a, b) if a.is_numeric_or_text() && b.is_numeric_or_text() => {
                (a.to_float() - b.to_float()).abs() < FLOAT_EQUALITY_EPSILON
            },
            _ => false,
        }
    }

    /// Exchanges the tag and payload of two values.
    pub fn swap_contents(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }

    /// Appends the rendering of the value to `out`.
    ///
    /// Integers render in decimal, floats like C's `%g`, characters and texts
    /// as their raw bytes, blocks wrapped in braces, and lists as the
    /// concatenation of their elements.
    pub fn render_into(&self, out: &mut Vec<u8>) {
        match self {
            Self::Integer(n) => out.extend_from_slice(n.to_string().as_bytes()),
            Self::Float(x) => out.extend_from_slice(format_general(*x).as_bytes()),
            Self::Character(c) => out.push(*c),
            Self::Text(bytes) => out.extend_from_slice(bytes),
            Self::List(list) => list.render_into(out),
            Self::Block(source) => {
                out.push(b'{');
                out.extend_from_slice(source.as_bytes());
                out.push(b'}');
            },
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.to_text()))
    }
}
