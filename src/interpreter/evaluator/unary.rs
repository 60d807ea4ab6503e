use crate::{
    interpreter::{
        evaluator::{core::Context, handler::Outcome},
        value::core::Value,
    },
    syntax::{Conversion, UnaryOperator},
};

impl Context<'_> {
    /// Applies a unary operator to a numeric value in place.
    ///
    /// Supported operators:
    /// - `Increment`/`Decrement`: add or subtract one, keeping the value's
    ///   numeric type. Integers and characters wrap.
    /// - `Complement`: bitwise not. Integers and characters keep their type; a
    ///   float is converted to an integer first.
    /// - `Not`: logical negation of the integer reading, giving `1` or `0`.
    ///
    /// # Returns
    /// `Outcome::Rejected`, with the value untouched, when it is not numeric.
    ///
    /// # Example
    /// ```
    /// use golfstack::{
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    ///     syntax::UnaryOperator,
    /// };
    ///
    /// let mut c = Value::Character(b'a');
    /// Context::eval_unary(UnaryOperator::Increment, &mut c);
    /// assert_eq!(c, Value::Character(b'b'));
    ///
    /// let mut x = Value::Float(2.5);
    /// Context::eval_unary(UnaryOperator::Complement, &mut x);
    /// assert_eq!(x, Value::Integer(!2));
    ///
    /// let mut n = Value::Float(0.25);
    /// Context::eval_unary(UnaryOperator::Not, &mut n);
    /// assert_eq!(n, Value::Integer(1));
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: &mut Value) -> Outcome {
        if !value.is_numeric() {
            return Outcome::Rejected;
        }

        match op {
            UnaryOperator::Increment => step(value, 1),
            UnaryOperator::Decrement => step(value, -1),
            UnaryOperator::Complement => {
                if let Value::Float(_) = value {
                    value.convert_to_integer();
                }
                match value {
                    Value::Integer(n) => *n = !*n,
                    Value::Character(c) => *c = !*c,
                    _ => {},
                }
            },
            UnaryOperator::Not => *value = Value::Integer(i64::from(value.to_integer() == 0)),
        }
        Outcome::Applied
    }

    /// Converts a value in place with one of `i`, `f` or `c`.
    ///
    /// # Returns
    /// `Outcome::Rejected` for lists and blocks, which stay as they are.
    pub fn eval_conversion(target: Conversion, value: &mut Value) -> Outcome {
        value.convert(target).into()
    }
}

fn step(value: &mut Value, delta: i8) {
    match value {
        Value::Integer(n) => *n = n.wrapping_add(i64::from(delta)),
        Value::Float(x) => *x += f64::from(delta),
        Value::Character(c) => *c = c.wrapping_add_signed(delta),
        _ => {},
    }
}
