use crate::{
    interpreter::{
        evaluator::{core::Context, handler::Outcome},
        value::core::Value,
    },
    syntax::BitwiseOperator,
};

impl Context<'_> {
    /// Applies a bitwise operator to two numeric values.
    ///
    /// There is no float path: `right` is converted to an Integer in place and
    /// combined with `left` read as an Integer, whatever the operands' rungs.
    ///
    /// # Returns
    /// `Outcome::Rejected`, with both operands untouched, unless both are
    /// numeric.
    ///
    /// # Example
    /// ```
    /// use golfstack::{
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    ///     syntax::BitwiseOperator,
    /// };
    ///
    /// let mut right = Value::Float(6.9);
    /// Context::eval_bitwise(BitwiseOperator::Xor, &Value::Character(3), &mut right);
    /// assert_eq!(right, Value::Integer(5));
    /// ```
    pub fn eval_bitwise(op: BitwiseOperator, left: &Value, right: &mut Value) -> Outcome {
        if !(left.is_numeric() && right.is_numeric()) {
            return Outcome::Rejected;
        }

        right.convert_to_integer();
        let (a, b) = (left.to_integer(), right.to_integer());
        *right = Value::Integer(match op {
                                    BitwiseOperator::And => a & b,
                                    BitwiseOperator::Or => a | b,
                                    BitwiseOperator::Xor => a ^ b,
                                });
        Outcome::Applied
    }
}
