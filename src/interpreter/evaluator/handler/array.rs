use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            handler::{Action, Claim, Handler, HandlerGroup},
        },
        value::{
            core::{TypeMask, Value},
            list::List,
        },
    },
    util::num::{i64_to_count, i64_to_index, usize_to_i64},
};

handler_group! {
    /// Commands on texts and lists. Most of them share their character with a
    /// math or logic command and only apply once the operand types rule that
    /// command out.
    ARRAY = "array" {
        "explode" => Claim::Char('~'), Action::Unary { accepts: Value::is_array, apply: explode };
        "concatenate" => Claim::Char('+'),
            Action::Binary { accepts: concatenable, apply: concatenate };
        "repeat" => Claim::Char('*'), Action::Binary { accepts: array_and_number, apply: repeat };
        "range or length" => Claim::Char(','),
            Action::Unary { accepts: |v| v.is_type(TypeMask::NUMERIC | TypeMask::ARRAY),
                            apply:   range_or_length };
        "index" => Claim::Char('='), Action::Binary { accepts: array_and_number, apply: index };
        "find" => Claim::Char('#'), Action::Binary { accepts: both_text, apply: find };
        "first" => Claim::Char('('),
            Action::Unary { accepts: Value::is_array, apply: |c, v| take_end(c, v, End::First) };
        "last" => Claim::Char(')'),
            Action::Unary { accepts: Value::is_array, apply: |c, v| take_end(c, v, End::Last) };
        "keep first" => Claim::Char('<'),
            Action::Binary { accepts: array_and_number, apply: |c, a, n| keep(c, a, n, End::First) };
        "keep last" => Claim::Char('>'),
            Action::Binary { accepts: array_and_number, apply: |c, a, n| keep(c, a, n, End::Last) };
        "split" => Claim::Char('/'), Action::Binary { accepts: splittable, apply: split };
    }
}

/// Which end of an array a command works on.
#[derive(Clone, Copy)]
enum End {
    First,
    Last,
}

fn array_and_number(array: &Value, number: &Value) -> bool {
    array.is_array() && number.is_numeric()
}

fn both_text(left: &Value, right: &Value) -> bool {
    left.is_text() && right.is_text()
}

fn splittable(text: &Value, separator: &Value) -> bool {
    text.is_text() && separator.is_type(TypeMask::TEXTUAL)
}

/// A text only goes with a text, a character or a list; every other pair is
/// accepted.
fn concatenable(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Text(_), other) | (other, Value::Text(_)) => {
            other.is_type(TypeMask::TEXTUAL | TypeMask::LIST)
        },
        _ => true,
    }
}

fn explode(context: &mut Context, array: Value) -> EvalResult<()> {
    for value in array.into_list().into_values() {
        context.stack.push(value);
    }
    Ok(())
}

fn concatenate(context: &mut Context, left: Value, right: Value) -> EvalResult<()> {
    let joined = match (left, right) {
        (Value::Text(mut a), Value::Text(b)) => {
            a.extend(b);
            Value::Text(a)
        },
        (Value::List(mut a), Value::List(b)) => {
            a.append(b);
            Value::List(a)
        },
        (left, right) => Value::List([left, right].into_iter().collect()),
    };
    context.stack.push(joined);
    Ok(())
}

fn repeat(context: &mut Context, array: Value, times: Value) -> EvalResult<()> {
    let times = i64_to_count(times.to_integer());
    let repeated = match array {
        Value::Text(bytes) => repeat_bytes(&bytes, times).map(Value::Text),
        other => other.into_list().repeat(times).map(Value::List),
    };
    let repeated = repeated.ok_or(RuntimeError::Overflow { column: context.column })?;
    context.stack.push(repeated);
    Ok(())
}

/// `times` copies of `bytes`, or `None` when they cannot be allocated.
fn repeat_bytes(bytes: &[u8], times: usize) -> Option<Vec<u8>> {
    let mut repeated = Vec::new();
    repeated.try_reserve_exact(bytes.len().checked_mul(times)?).ok()?;
    for _ in 0..times {
        repeated.extend_from_slice(bytes);
    }
    Some(repeated)
}

/// `N ,` is the range `[0, N)`; an array gives its length.
fn range_or_length(context: &mut Context, value: Value) -> EvalResult<()> {
    let result = match value.len() {
        Some(len) => Value::Integer(usize_to_i64(len)),
        None => {
            let range = List::range(value.to_integer());
            Value::List(range.ok_or(RuntimeError::Overflow { column: context.column })?)
        },
    };
    context.stack.push(result);
    Ok(())
}

fn index(context: &mut Context, array: Value, position: Value) -> EvalResult<()> {
    let element = match (array, i64_to_index(position.to_integer())) {
        (Value::Text(bytes), Some(i)) => bytes.get(i).copied().map(Value::Character),
        (other, Some(i)) => other.into_list().remove(i),
        (_, None) => None,
    };
    context.stack.push(element.unwrap_or(Value::Integer(0)));
    Ok(())
}

fn find(context: &mut Context, haystack: Value, needle: Value) -> EvalResult<()> {
    let position = match (&haystack, &needle) {
        (Value::Text(haystack), Value::Text(needle)) => find_bytes(haystack, needle),
        _ => None,
    };
    context.stack.push(Value::Integer(position.map_or(-1, usize_to_i64)));
    Ok(())
}

/// Index of the first occurrence of `needle`; an empty needle is found at 0.
fn find_bytes(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    haystack.windows(needle.len()).position(|window| window == needle)
}

/// Removes the first or last element and pushes the shortened array, then the
/// element. An empty array is pushed back followed by `0`.
fn take_end(context: &mut Context, array: Value, end: End) -> EvalResult<()> {
    let (array, element) = match array {
        Value::Text(mut bytes) => {
            let byte = match end {
                End::First if !bytes.is_empty() => Some(bytes.remove(0)),
                End::First => None,
                End::Last => bytes.pop(),
            };
            (Value::Text(bytes), byte.map(Value::Character))
        },
        other => {
            let mut list = other.into_list();
            let element = match end {
                End::First => list.remove(0),
                End::Last => list.pop(),
            };
            (Value::List(list), element)
        },
    };
    context.stack.push(array);
    context.stack.push(element.unwrap_or(Value::Integer(0)));
    Ok(())
}

/// Keeps the first or last `N` elements; `N` is clamped to the length and
/// negative counts keep nothing.
fn keep(context: &mut Context, array: Value, count: Value, end: End) -> EvalResult<()> {
    let count = i64_to_count(count.to_integer());
    let kept = match array {
        Value::Text(bytes) => {
            let count = count.min(bytes.len());
            Value::Text(match end {
                            End::First => bytes[..count].to_vec(),
                            End::Last => bytes[bytes.len() - count..].to_vec(),
                        })
        },
        other => {
            let list = other.into_list();
            Value::List(match end {
                            End::First => list.first_n(count),
                            End::Last => list.last_n(count),
                        })
        },
    };
    context.stack.push(kept);
    Ok(())
}

/// Splits a text on every byte of the separator and on newlines, dropping
/// empty pieces. With an empty separator the newlines are only removed.
fn split(context: &mut Context, text: Value, separator: Value) -> EvalResult<()> {
    let Value::Text(text) = text else {
        context.stack.push(Value::List(List::new()));
        return Ok(());
    };
    let separators = separator.to_text();

    let pieces: List = if separators.is_empty() {
        let joined: Vec<u8> = text.into_iter().filter(|&byte| byte != b'\n').collect();
        if joined.is_empty() { List::new() } else { std::iter::once(Value::Text(joined)).collect() }
    } else {
        text.split(|byte| *byte == b'\n' || separators.contains(byte))
            .filter(|piece| !piece.is_empty())
            .map(|piece| Value::Text(piece.to_vec()))
            .collect()
    };
    context.stack.push(Value::List(pieces));
    Ok(())
}
