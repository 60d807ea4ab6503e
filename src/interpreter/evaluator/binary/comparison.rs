use std::cmp::Ordering;

use crate::{
    interpreter::{evaluator::core::Context, value::core::Value},
    syntax::ComparisonOperator,
};

impl Context<'_> {
    /// Orders two values.
    ///
    /// Two texts compare lexicographically by bytes; any other pair compares
    /// by its float reading.
    ///
    /// # Returns
    /// `None` when a NaN is involved.
    ///
    /// # Example
    /// ```
    /// use std::cmp::Ordering;
    ///
    /// use golfstack::interpreter::{evaluator::core::Context, value::core::Value};
    ///
    /// assert_eq!(Context::compare(&Value::from("abc"), &Value::from("abd")), Some(Ordering::Less));
    /// assert_eq!(Context::compare(&Value::from("10"), &Value::Integer(9)), Some(Ordering::Greater));
    /// ```
    #[must_use]
    pub fn compare(left: &Value, right: &Value) -> Option<Ordering> {
        match (left, right) {
            (Value::Text(a), Value::Text(b)) => Some(a.cmp(b)),
            _ => left.to_float().partial_cmp(&right.to_float()),
        }
    }

    /// Evaluates a comparison of the form `Value <Operator> Value`.
    ///
    /// `Equal` uses [`Value::equals`]; `Less` and `Greater` use
    /// [`Context::compare`], so unordered operands are neither.
    ///
    /// # Example
    /// ```
    /// use golfstack::{
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    ///     syntax::ComparisonOperator,
    /// };
    ///
    /// let a = Value::Character(b'a');
    /// let b = Value::Integer(97);
    ///
    /// assert!(Context::eval_comparison(ComparisonOperator::Equal, &a, &b));
    /// assert!(!Context::eval_comparison(ComparisonOperator::Less, &a, &b));
    /// ```
    #[must_use]
    pub fn eval_comparison(op: ComparisonOperator, left: &Value, right: &Value) -> bool {
        match op {
            ComparisonOperator::Equal => left.equals(right),
            ComparisonOperator::Less => Self::compare(left, right) == Some(Ordering::Less),
            ComparisonOperator::Greater => Self::compare(left, right) == Some(Ordering::Greater),
        }
    }
}
