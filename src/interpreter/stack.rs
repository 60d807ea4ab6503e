use std::fmt;

use crate::interpreter::value::{core::Value, list::List};

/// Number of values the operand stack has room for before it first grows.
pub const STACK_INITIAL_CAPACITY: usize = 100;

/// The operand stack every command works on.
///
/// The stack owns its values until they are popped. Positional access counts
/// from the top: position `0` is the top itself.
///
/// # Example
/// ```
/// use golfstack::interpreter::{stack::Stack, value::core::Value};
///
/// let mut stack = Stack::new();
/// stack.push(Value::Integer(1));
/// stack.push(Value::from("two"));
///
/// assert_eq!(stack.peek(), Some(&Value::from("two")));
/// assert_eq!(stack.peek_nth(1), Some(&Value::Integer(1)));
/// assert_eq!(stack.to_string(), "1two");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Stack {
    items: Vec<Value>,
}

impl Default for Stack {
    fn default() -> Self {
        Self::new()
    }
}

impl Stack {
    #[must_use]
    pub fn new() -> Self {
        Self { items: Vec::with_capacity(STACK_INITIAL_CAPACITY) }
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn push(&mut self, value: Value) {
        self.items.push(value);
    }

    pub fn pop(&mut self) -> Option<Value> {
        self.items.pop()
    }

    #[must_use]
    pub fn peek(&self) -> Option<&Value> {
        self.items.last()
    }

    /// Returns the value `n` positions below the top.
    #[must_use]
    pub fn peek_nth(&self, n: usize) -> Option<&Value> {
        let index = self.items.len().checked_sub(n + 1)?;
        self.items.get(index)
    }

    /// Returns a deep copy of the value `n` positions below the top.
    #[must_use]
    pub fn copy_nth(&self, n: usize) -> Option<Value> {
        self.peek_nth(n).cloned()
    }

    /// Borrows the top `N` values, deepest first, without popping them.
    ///
    /// Returns `None` when fewer than `N` values are on the stack.
    #[must_use]
    pub fn top<const N: usize>(&self) -> Option<&[Value; N]> {
        let start = self.items.len().checked_sub(N)?;
        self.items[start..].try_into().ok()
    }

    /// Pops the top `N` values, deepest first.
    ///
    /// Either all `N` values are popped or, when fewer are available, none.
    ///
    /// # Example
    /// ```
    /// use golfstack::interpreter::{stack::Stack, value::core::Value};
    ///
    /// let mut stack = Stack::new();
    /// stack.push(Value::Integer(1));
    /// stack.push(Value::Integer(2));
    ///
    /// assert_eq!(stack.pop_n::<3>(), None);
    /// assert_eq!(stack.len(), 2);
    /// assert_eq!(stack.pop_n::<2>(), Some([Value::Integer(1), Value::Integer(2)]));
    /// assert!(stack.is_empty());
    /// ```
    pub fn pop_n<const N: usize>(&mut self) -> Option<[Value; N]> {
        let start = self.items.len().checked_sub(N)?;
        self.items.split_off(start).try_into().ok()
    }

    /// Exchanges the top two values; returns `false` when there are fewer than
    /// two.
    pub fn swap_top(&mut self) -> bool {
        let len = self.items.len();
        if len < 2 {
            return false;
        }
        let (below, top) = self.items.split_at_mut(len - 1);
        below[len - 2].swap_contents(&mut top[0]);
        true
    }

    /// Moves the third value from the top to the top (`a b c` becomes
    /// `b c a`); returns `false` when there are fewer than three.
    pub fn rotate_top(&mut self) -> bool {
        let len = self.items.len();
        if len < 3 {
            return false;
        }
        self.items[len - 3..].rotate_left(1);
        true
    }

    /// Iterates from the bottom of the stack to the top.
    pub fn iter(&self) -> impl Iterator<Item = &Value> {
        self.items.iter()
    }

    /// Consumes the stack, turning it into a list ordered bottom to top.
    #[must_use]
    pub fn into_list(self) -> List {
        self.items.into_iter().collect()
    }

    /// Renders every value, bottom to top, with no separators.
    #[must_use]
    pub fn render(&self) -> Vec<u8> {
        let mut rendered = Vec::new();
        for value in &self.items {
            value.render_into(&mut rendered);
        }
        rendered
    }

    /// Renders every value separated by single spaces, for trace output.
    #[must_use]
    pub fn render_spaced(&self) -> String {
        self.items.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ")
    }
}

impl fmt::Display for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.render()))
    }
}
