use crate::interpreter::value::core::Value;

/// Number of variable slots, one per uppercase letter.
pub const VARIABLE_COUNT: usize = 26;

/// The name of a variable slot: a single uppercase ASCII letter.
///
/// # Example
/// ```
/// use golfstack::interpreter::variables::VariableName;
///
/// assert!(VariableName::try_from('Q').is_ok());
/// assert!(VariableName::try_from('q').is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VariableName(u8);

impl TryFrom<char> for VariableName {
    type Error = char;

    fn try_from(letter: char) -> Result<Self, Self::Error> {
        if letter.is_ascii_uppercase() {
            Ok(Self(letter as u8 - b'A'))
        } else {
            Err(letter)
        }
    }
}

impl VariableName {
    /// The letter naming this slot.
    #[must_use]
    pub const fn letter(self) -> char {
        (b'A' + self.0) as char
    }

    const fn index(self) -> usize {
        self.0 as usize
    }
}

/// The variable table shared by a line and all of its nested array literals.
///
/// Every slot always holds a value. A fresh table is seeded with `A`..`F` set
/// to the integers 10..15, `N` to a newline character, `S` to a space
/// character, `X`, `Y` and `Z` to 0, 1 and 2, and every other slot to 0.
///
/// # Example
/// ```
/// use golfstack::interpreter::{value::core::Value, variables::{VariableName, Variables}};
///
/// let mut variables = Variables::new();
/// let b = VariableName::try_from('B').unwrap();
/// assert_eq!(variables.get(b), &Value::Integer(11));
///
/// variables.set(b, Value::from("bee"));
/// assert_eq!(variables.get(b), &Value::from("bee"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Variables {
    slots: [Value; VARIABLE_COUNT],
}

impl Default for Variables {
    fn default() -> Self {
        Self::new()
    }
}

impl Variables {
    /// Creates a table holding the default seed values.
    #[must_use]
    pub fn new() -> Self {
        Self { slots: std::array::from_fn(seed) }
    }

    #[must_use]
    pub const fn get(&self, name: VariableName) -> &Value {
        &self.slots[name.index()]
    }

    /// Stores `value` in the slot, returning the value it replaced.
    pub fn set(&mut self, name: VariableName, value: Value) -> Value {
        std::mem::replace(&mut self.slots[name.index()], value)
    }
}

/// Default value of the slot at `index` (0 is `A`).
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn seed(index: usize) -> Value {
    match (b'A' + index as u8) as char {
        letter @ 'A'..='F' => Value::Integer(10 + i64::from(letter as u8 - b'A')),
        'N' => Value::Character(b'\n'),
        'S' => Value::Character(b' '),
        'Y' => Value::Integer(1),
        'Z' => Value::Integer(2),
        _ => Value::Integer(0),
    }
}
