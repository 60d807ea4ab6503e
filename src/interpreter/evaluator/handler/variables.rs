use crate::{
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            handler::{Action, Claim, Handler, HandlerGroup, Outcome},
        },
        variables::VariableName,
    },
    syntax::Command,
};

handler_group! {
    /// `A`..`Z` push a copy of a variable; `:X` stores a copy of the top into
    /// `X` and leaves the top in place.
    VARIABLES = "variables" {
        "load" => Claim::Letters, Action::Context(load);
        "store" => Claim::Store, Action::Context(store);
    }
}

/// The slot named by a variable command, if the letter is valid.
fn slot(command: Command) -> Option<VariableName> {
    match command {
        Command::Plain(letter) | Command::Store(letter) => VariableName::try_from(letter).ok(),
        Command::Extended(_) => None,
    }
}

fn load(context: &mut Context, command: Command) -> EvalResult<Outcome> {
    let Some(name) = slot(command) else {
        return Ok(Outcome::Rejected);
    };
    let value = context.variables.get(name).clone();
    context.stack.push(value);
    Ok(Outcome::Applied)
}

fn store(context: &mut Context, command: Command) -> EvalResult<Outcome> {
    let (Some(name), Some(top)) = (slot(command), context.stack.peek()) else {
        return Ok(Outcome::Rejected);
    };
    let value = top.clone();
    tracing::trace!(variable = %name.letter(), %value, "store");
    context.variables.set(name, value);
    Ok(Outcome::Applied)
}
