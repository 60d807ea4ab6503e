use crate::{
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            handler::{Action, Claim, Handler, HandlerGroup, Outcome, any_value},
        },
        value::core::Value,
    },
    syntax::{Command, Conversion},
    util::num::i64_to_index,
};

handler_group! {
    /// Stack shuffling, the input and output commands, and conversions.
    STACK = "stack" {
        "duplicate" => Claim::Char('_'), Action::Unary { accepts: any_value, apply: duplicate };
        "drop" => Claim::Char(';'), Action::Unary { accepts: any_value, apply: |_, _| Ok(()) };
        "swap" => Claim::Char('\\'), Action::Context(|c, _| Ok(c.stack.swap_top().into()));
        "rotate" => Claim::Char('@'), Action::Context(|c, _| Ok(c.stack.rotate_top().into()));
        "copy" => Claim::Char('$'), Action::Unary { accepts: Value::is_numeric, apply: copy };
        "read line" => Claim::Char('l'), Action::Context(read_line);
        "read all" => Claim::Char('t'), Action::Context(read_all);
        "print" => Claim::Char('p'), Action::Context(print);
        "to integer" => Claim::Char('i'),
            Action::Unary { accepts: Value::is_numeric_or_text,
                            apply:   |c, v| convert(c, Conversion::Integer, v) };
        "to float" => Claim::Char('f'),
            Action::Unary { accepts: Value::is_numeric_or_text,
                            apply:   |c, v| convert(c, Conversion::Float, v) };
        "to character" => Claim::Char('c'),
            Action::Unary { accepts: Value::is_numeric_or_text,
                            apply:   |c, v| convert(c, Conversion::Character, v) };
        "to text" => Claim::Char('s'), Action::Unary { accepts: any_value, apply: to_text };
    }
}

fn duplicate(context: &mut Context, value: Value) -> EvalResult<()> {
    context.stack.push(value.clone());
    context.stack.push(value);
    Ok(())
}

/// `N $`: a copy of the value `N` positions below the new top, or `0`.
fn copy(context: &mut Context, position: Value) -> EvalResult<()> {
    let copied = i64_to_index(position.to_integer()).and_then(|n| context.stack.copy_nth(n))
                                                    .unwrap_or(Value::Integer(0));
    context.stack.push(copied);
    Ok(())
}

fn read_line(context: &mut Context, _: Command) -> EvalResult<Outcome> {
    let line = context.read_line()?;
    context.stack.push(Value::Text(line));
    Ok(Outcome::Applied)
}

fn read_all(context: &mut Context, _: Command) -> EvalResult<Outcome> {
    let rest = context.read_all()?;
    context.stack.push(Value::Text(rest));
    Ok(Outcome::Applied)
}

fn print(context: &mut Context, _: Command) -> EvalResult<Outcome> {
    let Some(top) = context.stack.peek() else {
        return Ok(Outcome::Rejected);
    };
    let rendered = top.to_text();
    context.write_output(&rendered)?;
    Ok(Outcome::Applied)
}

fn convert(context: &mut Context, target: Conversion, mut value: Value) -> EvalResult<()> {
    Context::eval_conversion(target, &mut value);
    context.stack.push(value);
    Ok(())
}

fn to_text(context: &mut Context, value: Value) -> EvalResult<()> {
    context.stack.push(Value::Text(value.to_text()));
    Ok(())
}
