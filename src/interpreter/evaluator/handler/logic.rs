use std::cmp::Ordering;

use crate::{
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            handler::{Action, Claim, Handler, HandlerGroup, any_pair},
        },
        value::core::Value,
    },
    syntax::{
        ComparisonOperator::{self, Equal, Greater, Less},
        UnaryOperator,
    },
};

handler_group! {
    /// Comparisons, selection and the `e`-prefixed logic operators. Results
    /// are the integers `1` and `0`.
    LOGIC = "logic" {
        "equals" => Claim::Char('='),
            Action::Binary { accepts: any_pair, apply: |c, a, b| compare(c, Equal, &a, &b) };
        "less" => Claim::Char('<'),
            Action::Binary { accepts: orderable, apply: |c, a, b| compare(c, Less, &a, &b) };
        "greater" => Claim::Char('>'),
            Action::Binary { accepts: orderable, apply: |c, a, b| compare(c, Greater, &a, &b) };
        "not" => Claim::Char('!'), Action::Unary { accepts: Value::is_numeric, apply: not };
        "select" => Claim::Char('?'), Action::Ternary { apply: select };
        "and" => Claim::Extended('&'), Action::Binary { accepts: any_pair, apply: and };
        "or" => Claim::Extended('|'), Action::Binary { accepts: any_pair, apply: or };
        "min" => Claim::Extended('<'),
            Action::Binary { accepts: any_pair, apply: |c, a, b| pick(c, a, b, Ordering::Less) };
        "max" => Claim::Extended('>'),
            Action::Binary { accepts: any_pair, apply: |c, a, b| pick(c, a, b, Ordering::Greater) };
    }
}

fn orderable(left: &Value, right: &Value) -> bool {
    left.is_numeric_or_text() && right.is_numeric_or_text()
}

fn compare(context: &mut Context,
           op: ComparisonOperator,
           left: &Value,
           right: &Value)
           -> EvalResult<()> {
    context.stack.push(Context::eval_comparison(op, left, right).into());
    Ok(())
}

fn not(context: &mut Context, mut value: Value) -> EvalResult<()> {
    Context::eval_unary(UnaryOperator::Not, &mut value);
    context.stack.push(value);
    Ok(())
}

/// `cond a b ?` keeps `a` when `cond` is truthy, `b` otherwise.
fn select(context: &mut Context, condition: Value, then: Value, otherwise: Value) -> EvalResult<()> {
    context.stack.push(if condition.is_truthy() { then } else { otherwise });
    Ok(())
}

/// The `e` operators test the integer reading, so `"0"`, lists and blocks
/// are all false.
fn nonzero(value: &Value) -> bool {
    value.to_integer() != 0
}

fn and(context: &mut Context, left: Value, right: Value) -> EvalResult<()> {
    let result = if nonzero(&left) && nonzero(&right) { right } else { Value::Integer(0) };
    context.stack.push(result);
    Ok(())
}

fn or(context: &mut Context, left: Value, right: Value) -> EvalResult<()> {
    let result = [left, right].into_iter()
                              .find(nonzero)
                              .unwrap_or(Value::Integer(0));
    context.stack.push(result);
    Ok(())
}

/// Keeps `left` when it orders as `wanted` against `right`, else `right`;
/// ties keep `right`.
fn pick(context: &mut Context, left: Value, right: Value, wanted: Ordering) -> EvalResult<()> {
    let result = if Context::compare(&left, &right) == Some(wanted) { left } else { right };
    context.stack.push(result);
    Ok(())
}
