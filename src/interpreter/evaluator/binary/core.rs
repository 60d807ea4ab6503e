use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            handler::Outcome,
        },
        value::core::Value,
    },
    syntax::ArithmeticOperator,
    util::num::{f64_to_i64_truncated, i64_to_f64},
};

/// A step of the promotion ladder. Later variants win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rung {
    Character,
    Integer,
    Float,
}

impl Rung {
    /// The rung of a numeric value; `None` for everything else.
    #[must_use]
    pub const fn of(value: &Value) -> Option<Self> {
        match value {
            Value::Character(_) => Some(Self::Character),
            Value::Integer(_) => Some(Self::Integer),
            Value::Float(_) => Some(Self::Float),
            _ => None,
        }
    }
}

impl Context<'_> {
    /// Evaluates `left op right` and stores the result into `right`.
    ///
    /// The result type is the highest rung of the two operands: any float
    /// makes the operation a float one, otherwise any integer makes it an
    /// integer one, otherwise both are characters and the operation wraps in
    /// eight bits. `right` is overwritten with the result; `left` is only
    /// read.
    ///
    /// Float modulo truncates both operands to integers first.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand (the deeper stack value).
    /// - `right`: Right operand, replaced by the result.
    /// - `column`: Byte offset for error reporting.
    ///
    /// # Returns
    /// `Outcome::Rejected` without touching either operand when one of them is
    /// not numeric, `Outcome::Applied` otherwise.
    ///
    /// # Errors
    /// `DivisionByZero` for an integer or character zero divisor (including
    /// the truncated divisor of float modulo), `Overflow` for
    /// `i64::MIN / -1`.
    ///
    /// # Example
    /// ```
    /// use golfstack::{
    ///     interpreter::{
    ///         evaluator::{core::Context, handler::Outcome},
    ///         value::core::Value,
    ///     },
    ///     syntax::ArithmeticOperator,
    /// };
    ///
    /// let mut right = Value::Integer(2);
    /// Context::eval_arithmetic(ArithmeticOperator::Sub, &Value::Float(5.5), &mut right, 0).unwrap();
    /// assert_eq!(right, Value::Float(3.5));
    ///
    /// let mut right = Value::Character(b'b');
    /// Context::eval_arithmetic(ArithmeticOperator::Add, &Value::Character(1), &mut right, 0).unwrap();
    /// assert_eq!(right, Value::Character(b'c'));
    ///
    /// let mut text = Value::from("3");
    /// let outcome =
    ///     Context::eval_arithmetic(ArithmeticOperator::Add, &Value::Integer(1), &mut text, 0).unwrap();
    /// assert_eq!(outcome, Outcome::Rejected);
    /// assert_eq!(text, Value::from("3"));
    /// ```
    pub fn eval_arithmetic(op: ArithmeticOperator,
                           left: &Value,
                           right: &mut Value,
                           column: usize)
                           -> EvalResult<Outcome> {
        let (Some(left_rung), Some(right_rung)) = (Rung::of(left), Rung::of(right)) else {
            return Ok(Outcome::Rejected);
        };

        let result = match left_rung.max(right_rung) {
            Rung::Float => Value::Float(float_arithmetic(op, left, right, column)?),
            Rung::Integer => {
                Value::Integer(integer_arithmetic(op, left.to_integer(), right.to_integer(), column)?)
            },
            Rung::Character => Value::Character(character_arithmetic(op,
                                                                     left.to_character(),
                                                                     right.to_character(),
                                                                     column)?),
        };

        tracing::trace!(%op, %left, right = %right, %result, "arithmetic");
        *right = result;
        Ok(Outcome::Applied)
    }
}

/// Double precision arithmetic; modulo goes through integer truncation.
fn float_arithmetic(op: ArithmeticOperator,
                    left: &Value,
                    right: &Value,
                    column: usize)
                    -> EvalResult<f64> {
    use ArithmeticOperator::{Add, Div, Mod, Mul, Pow, Sub};

    let (a, b) = (left.to_float(), right.to_float());
    Ok(match op {
           Add => a + b,
           Sub => a - b,
           Mul => a * b,
           Div => a / b,
           Mod => {
               let divisor = right.to_integer();
               i64_to_f64(checked(left.to_integer().checked_rem(divisor), divisor == 0, column)?)
           },
           Pow => a.powf(b),
       })
}

/// 64-bit signed arithmetic; addition, subtraction and multiplication wrap.
fn integer_arithmetic(op: ArithmeticOperator, a: i64, b: i64, column: usize) -> EvalResult<i64> {
    use ArithmeticOperator::{Add, Div, Mod, Mul, Pow, Sub};

    match op {
        Add => Ok(a.wrapping_add(b)),
        Sub => Ok(a.wrapping_sub(b)),
        Mul => Ok(a.wrapping_mul(b)),
        Div => checked(a.checked_div(b), b == 0, column),
        Mod => checked(a.checked_rem(b), b == 0, column),
        Pow => Ok(f64_to_i64_truncated(i64_to_f64(a).powf(i64_to_f64(b)))),
    }
}

/// Eight-bit arithmetic; every operation wraps.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn character_arithmetic(op: ArithmeticOperator, a: u8, b: u8, column: usize) -> EvalResult<u8> {
    use ArithmeticOperator::{Add, Div, Mod, Mul, Pow, Sub};

    match op {
        Add => Ok(a.wrapping_add(b)),
        Sub => Ok(a.wrapping_sub(b)),
        Mul => Ok(a.wrapping_mul(b)),
        Div => a.checked_div(b).ok_or(RuntimeError::DivisionByZero { column }),
        Mod => a.checked_rem(b).ok_or(RuntimeError::DivisionByZero { column }),
        Pow => Ok(f64_to_i64_truncated(f64::from(a).powf(f64::from(b))) as u8),
    }
}

/// Maps a failed checked division to its error.
fn checked(result: Option<i64>, by_zero: bool, column: usize) -> EvalResult<i64> {
    match result {
        Some(value) => Ok(value),
        None if by_zero => Err(RuntimeError::DivisionByZero { column }),
        None => Err(RuntimeError::Overflow { column }),
    }
}
