use std::fmt;

use crate::{interpreter::value::core::Value, util::num::i64_to_count};

/// Number of slots a list starts with.
pub const LIST_INITIAL_CAPACITY: usize = 25;
/// Extra slots added on top of the requested room whenever a list grows.
pub const LIST_GROWTH_STEP: usize = 25;

/// An ordered, growable, index-addressable sequence of values.
///
/// The list owns every element it holds. Storage is a vector of slots of
/// which the first `count` are logically present; everything past `count` is
/// always empty. A slot inside the live range may be absent (left open by
/// [`List::shift_right`]); absent slots render as `_`.
///
/// Equality through `==` is structural (same tags, same payloads). The
/// language's notion of equality, with numeric tolerance, is
/// [`List::equals`].
#[derive(Debug, Clone)]
pub struct List {
    slots: Vec<Option<Value>>,
    count: usize,
}

impl Default for List {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for List {
    fn eq(&self, other: &Self) -> bool {
        self.slots[..self.count] == other.slots[..other.count]
    }
}

impl FromIterator<Value> for List {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        let mut list = Self::new();
        for value in iter {
            list.push(value);
        }
        list
    }
}

impl List {
    /// Creates an empty list with the default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(LIST_INITIAL_CAPACITY)
    }

    /// Creates an empty list with room for `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Self { slots, count: 0 }
    }

    /// Creates an empty list with room for `capacity` elements, or `None` when
    /// that much storage cannot be reserved.
    #[must_use]
    pub fn try_with_capacity(capacity: usize) -> Option<Self> {
        let mut slots = Vec::new();
        slots.try_reserve_exact(capacity).ok()?;
        slots.resize_with(capacity, || None);
        Some(Self { slots, count: 0 })
    }

    /// Creates the list `[0, 1, ..., n - 1]` of integers.
    ///
    /// A non-positive `n` gives an empty list. Returns `None` when the list
    /// would not fit in memory.
    ///
    /// # Example
    /// ```
    /// use golfstack::interpreter::value::list::List;
    ///
    /// assert_eq!(List::range(5).unwrap().to_string(), "01234");
    /// assert!(List::range(-3).unwrap().is_empty());
    /// assert!(List::range(i64::MAX).is_none());
    /// ```
    #[must_use]
    pub fn range(n: i64) -> Option<Self> {
        let mut list = Self::try_with_capacity(i64_to_count(n))?;
        for i in 0..n {
            list.push(Value::Integer(i));
        }
        Some(list)
    }

    /// Explodes a byte string into one character value per byte.
    ///
    /// # Example
    /// ```
    /// use golfstack::interpreter::value::{core::Value, list::List};
    ///
    /// let list = List::from_text(b"hi");
    /// assert_eq!(list.get(0), Some(&Value::Character(b'h')));
    /// assert_eq!(list.len(), 2);
    /// ```
    #[must_use]
    pub fn from_text(bytes: &[u8]) -> Self {
        let mut list = Self::with_capacity(bytes.len());
        for &byte in bytes {
            list.push(Value::Character(byte));
        }
        list
    }

    /// Number of slots currently allocated.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of live slots, absent ones included.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.count
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns the element at `index`, if it is live and present.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.slots[..self.count].get(index)?.as_ref()
    }

    /// Iterates over the live slots, yielding `None` for absent ones.
    pub fn slots(&self) -> impl Iterator<Item = Option<&Value>> {
        self.slots[..self.count].iter().map(Option::as_ref)
    }

    /// Iterates over the present elements.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.slots[..self.count].iter().flatten()
    }

    /// Consumes the list, yielding its present elements in order.
    pub fn into_values(self) -> impl Iterator<Item = Value> {
        let count = self.count;
        self.slots.into_iter().take(count).flatten()
    }

    /// Adds `extra` empty slots to the storage.
    pub fn grow(&mut self, extra: usize) {
        self.slots.resize_with(self.slots.len() + extra, || None);
    }

    /// Makes sure `n` more elements fit, growing by `n` plus the growth step
    /// when they do not.
    ///
    /// # Example
    /// ```
    /// use golfstack::interpreter::value::list::{LIST_INITIAL_CAPACITY, List};
    ///
    /// let mut list = List::new();
    /// list.ensure_room(LIST_INITIAL_CAPACITY);
    /// assert_eq!(list.capacity(), LIST_INITIAL_CAPACITY);
    ///
    /// list.ensure_room(LIST_INITIAL_CAPACITY + 1);
    /// assert_eq!(list.capacity(), 2 * LIST_INITIAL_CAPACITY + 26);
    /// ```
    pub fn ensure_room(&mut self, n: usize) {
        if self.count + n > self.capacity() {
            self.grow(n + LIST_GROWTH_STEP);
        }
    }

    /// Appends an element.
    pub fn push(&mut self, value: Value) {
        self.ensure_room(1);
        self.slots[self.count] = Some(value);
        self.count += 1;
    }

    /// Inserts an element before `index`; an index at or past the end appends.
    ///
    /// # Example
    /// ```
    /// use golfstack::interpreter::value::{core::Value, list::List};
    ///
    /// let mut list = List::range(3).unwrap();
    /// list.insert(1, Value::Integer(7));
    /// list.insert(99, Value::Integer(8));
    /// assert_eq!(list.to_string(), "07128");
    /// ```
    pub fn insert(&mut self, index: usize, value: Value) {
        if index >= self.count {
            self.push(value);
        } else {
            self.shift_right(index, 1);
            self.slots[index] = Some(value);
        }
    }

    /// Moves every element of `other` to the end of this list.
    pub fn append(&mut self, other: Self) {
        self.ensure_room(other.len());
        for slot in other.slots.into_iter().take(other.count) {
            self.slots[self.count] = slot;
            self.count += 1;
        }
    }

    /// Appends deep copies of every element of `other`.
    pub fn extend_copied(&mut self, other: &Self) {
        self.ensure_room(other.len());
        for slot in &other.slots[..other.count] {
            self.slots[self.count].clone_from(slot);
            self.count += 1;
        }
    }

    /// Closes the gap of `n` slots starting at `from`, moving the following
    /// elements down. Elements still inside the gap are dropped and the vacated
    /// trailing slots are emptied.
    ///
    /// # Example
    /// ```
    /// use golfstack::interpreter::value::list::List;
    ///
    /// let mut list = List::range(6).unwrap();
    /// list.shift_left(1, 2);
    /// assert_eq!(list.to_string(), "0345");
    /// assert_eq!(list.len(), 4);
    /// ```
    pub fn shift_left(&mut self, from: usize, n: usize) {
        let from = from.min(self.count);
        let n = n.min(self.count - from);

        self.slots[from..self.count].rotate_left(n);
        for slot in &mut self.slots[self.count - n..self.count] {
            *slot = None;
        }
        self.count -= n;
    }

    /// Opens a gap of `n` absent slots at `from`, moving the following elements
    /// up.
    ///
    /// # Example
    /// ```
    /// use golfstack::interpreter::value::list::List;
    ///
    /// let mut list = List::range(3).unwrap();
    /// list.shift_right(1, 2);
    /// assert_eq!(list.to_string(), "0__12");
    /// ```
    pub fn shift_right(&mut self, from: usize, n: usize) {
        let from = from.min(self.count);
        self.ensure_room(n);

        // Slots past `count` are always empty, so rotating them to the front
        // of the moved range opens the gap.
        self.slots[from..self.count + n].rotate_right(n);
        self.count += n;
    }

    /// Removes and returns the last element.
    pub fn pop(&mut self) -> Option<Value> {
        if self.count == 0 {
            return None;
        }
        self.count -= 1;
        self.slots[self.count].take()
    }

    /// Removes and returns the element at `index`, closing the gap.
    ///
    /// Returns `None` when `index` is outside `[0, len)`.
    ///
    /// # Example
    /// ```
    /// use golfstack::interpreter::value::{core::Value, list::List};
    ///
    /// let mut list = List::range(4).unwrap();
    /// assert_eq!(list.remove(1), Some(Value::Integer(1)));
    /// assert_eq!(list.to_string(), "023");
    /// assert_eq!(list.remove(3), None);
    /// ```
    pub fn remove(&mut self, index: usize) -> Option<Value> {
        if index >= self.count {
            return None;
        }
        let removed = self.slots[index].take();
        self.shift_left(index, 1);
        removed
    }

    /// Consumes the list and returns it in reverse order.
    #[must_use]
    pub fn reverse(mut self) -> Self {
        self.slots[..self.count].reverse();
        self
    }

    /// Copies the first `n` elements (all of them when `n` exceeds the length).
    #[must_use]
    pub fn first_n(&self, n: usize) -> Self {
        let n = n.min(self.count);
        let mut taken = Self::with_capacity(n);
        for slot in &self.slots[..n] {
            taken.slots[taken.count].clone_from(slot);
            taken.count += 1;
        }
        taken
    }

    /// Copies the last `n` elements (all of them when `n` exceeds the length).
    #[must_use]
    pub fn last_n(&self, n: usize) -> Self {
        let n = n.min(self.count);
        let mut taken = Self::with_capacity(n);
        for slot in &self.slots[self.count - n..self.count] {
            taken.slots[taken.count].clone_from(slot);
            taken.count += 1;
        }
        taken
    }

    /// Builds a list holding `times` consecutive copies of this one, or `None`
    /// when the result would not fit in memory.
    #[must_use]
    pub fn repeat(&self, times: usize) -> Option<Self> {
        if self.is_empty() {
            return Some(Self::new());
        }
        let mut repeated = Self::try_with_capacity(self.count.checked_mul(times)?)?;
        for _ in 0..times {
            repeated.extend_copied(self);
        }
        Some(repeated)
    }

    /// Compares element-wise using value equality; lengths must match and an
    /// absent slot only equals another absent slot.
    ///
    /// # Example
    /// ```
    /// use golfstack::interpreter::value::{core::Value, list::List};
    ///
    /// let ints: List = [Value::Integer(1), Value::Integer(2)].into_iter().collect();
    /// let mixed: List = [Value::Float(1.0), Value::Character(2)].into_iter().collect();
    ///
    /// assert!(ints.equals(&mixed));
    /// assert_ne!(ints, mixed);
    /// ```
    #[must_use]
    pub fn equals(&self, other: &Self) -> bool {
        self.count == other.count
        && self.slots()
               .zip(other.slots())
               .all(|pair| match pair {
                   (Some(a), Some(b)) => a.equals(b),
                   (None, None) => true,
                   _ => false,
               })
    }

    /// Appends the rendering of every slot to `out`, `_` for absent ones.
    pub fn render_into(&self, out: &mut Vec<u8>) {
        for slot in self.slots() {
            match slot {
                Some(value) => value.render_into(out),
                None => out.push(b'_'),
            }
        }
    }
}

impl fmt::Display for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rendered = Vec::new();
        self.render_into(&mut rendered);
        write!(f, "{}", String::from_utf8_lossy(&rendered))
    }
}
