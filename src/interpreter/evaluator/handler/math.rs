use crate::{
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            handler::{Action, Claim, Handler, HandlerGroup, Outcome},
        },
        value::core::Value,
    },
    syntax::{
        ArithmeticOperator::{self, Add, Div, Mod, Mul, Pow, Sub},
        BitwiseOperator::{self, And, Or, Xor},
        UnaryOperator::{self, Complement, Decrement, Increment},
    },
};

handler_group! {
    /// Numeric commands. Binary operators compute `A op B` along the promotion
    /// ladder and push the result in place of both operands.
    MATH = "math" {
        "increment" => Claim::Char(')'),
            Action::Unary { accepts: Value::is_numeric, apply: |c, v| unary(c, Increment, v) };
        "decrement" => Claim::Char('('),
            Action::Unary { accepts: Value::is_numeric, apply: |c, v| unary(c, Decrement, v) };
        "add" => Claim::Char('+'),
            Action::Binary { accepts: both_numeric, apply: |c, a, b| arithmetic(c, Add, a, b) };
        "subtract" => Claim::Char('-'),
            Action::Binary { accepts: both_numeric, apply: |c, a, b| arithmetic(c, Sub, a, b) };
        "multiply" => Claim::Char('*'),
            Action::Binary { accepts: both_numeric, apply: |c, a, b| arithmetic(c, Mul, a, b) };
        "divide" => Claim::Char('/'),
            Action::Binary { accepts: both_numeric, apply: |c, a, b| arithmetic(c, Div, a, b) };
        "modulo" => Claim::Char('%'),
            Action::Binary { accepts: both_numeric, apply: |c, a, b| arithmetic(c, Mod, a, b) };
        "power" => Claim::Char('#'),
            Action::Binary { accepts: both_numeric, apply: |c, a, b| arithmetic(c, Pow, a, b) };
        "and" => Claim::Char('&'),
            Action::Binary { accepts: both_numeric, apply: |c, a, b| bitwise(c, And, a, b) };
        "or" => Claim::Char('|'),
            Action::Binary { accepts: both_numeric, apply: |c, a, b| bitwise(c, Or, a, b) };
        "xor" => Claim::Char('^'),
            Action::Binary { accepts: both_numeric, apply: |c, a, b| bitwise(c, Xor, a, b) };
        "complement" => Claim::Char('~'),
            Action::Unary { accepts: Value::is_numeric, apply: |c, v| unary(c, Complement, v) };
    }
}

fn both_numeric(left: &Value, right: &Value) -> bool {
    left.is_numeric() && right.is_numeric()
}

fn unary(context: &mut Context,
         op: UnaryOperator,
         mut value: Value)
         -> EvalResult<()> {
    Context::eval_unary(op, &mut value);
    context.stack.push(value);
    Ok(())
}

fn arithmetic(context: &mut Context,
              op: ArithmeticOperator,
              left: Value,
              mut right: Value)
              -> EvalResult<()> {
    let outcome = Context::eval_arithmetic(op, &left, &mut right, context.column)?;
    settle(context, outcome, left, right);
    Ok(())
}

fn bitwise(context: &mut Context,
           op: BitwiseOperator,
           left: Value,
           mut right: Value)
           -> EvalResult<()> {
    let outcome = Context::eval_bitwise(op, &left, &mut right);
    settle(context, outcome, left, right);
    Ok(())
}

/// Pushes the result held in `right`, or both operands unchanged when the
/// engine declined them.
fn settle(context: &mut Context, outcome: Outcome, left: Value, right: Value) {
    if outcome == Outcome::Rejected {
        context.stack.push(left);
    }
    context.stack.push(right);
}
