use crate::{
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
    syntax::Command,
};

/// Result of offering a command to a handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The handler ran and committed its effect.
    Applied,
    /// The handler's precondition failed; the stack is exactly as it was.
    Rejected,
}

impl From<bool> for Outcome {
    fn from(applied: bool) -> Self {
        if applied { Self::Applied } else { Self::Rejected }
    }
}

/// The command a handler answers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Claim {
    /// A single plain command character.
    Char(char),
    /// Any plain uppercase letter.
    Letters,
    /// Any `:X` store command.
    Store,
    /// The extended command `e` followed by this character.
    Extended(char),
}

impl Claim {
    /// Tests whether `command` falls under this claim.
    #[must_use]
    pub const fn matches(self, command: Command) -> bool {
        match (self, command) {
            (Self::Char(claimed), Command::Plain(c))
            | (Self::Extended(claimed), Command::Extended(c)) => claimed == c,
            (Self::Letters, Command::Plain(c)) => c.is_ascii_uppercase(),
            (Self::Store, Command::Store(_)) => true,
            _ => false,
        }
    }
}

/// What a handler does once it claims a command.
///
/// The fixed-arity variants test their precondition on the top of the stack
/// by reference and only pop their operands once it holds, so a rejection
/// never disturbs the stack. A stack holding fewer values than the arity
/// rejects too.
pub enum Action {
    /// Works on the context directly and reports on its own whether it
    /// applied. Such handlers must leave the stack untouched when rejecting.
    Context(fn(&mut Context<'_>, Command) -> EvalResult<Outcome>),
    /// Takes the top value.
    Unary {
        accepts: fn(&Value) -> bool,
        apply:   fn(&mut Context<'_>, Value) -> EvalResult<()>,
    },
    /// Takes the top two values, deepest first.
    Binary {
        accepts: fn(&Value, &Value) -> bool,
        apply:   fn(&mut Context<'_>, Value, Value) -> EvalResult<()>,
    },
    /// Takes the top three values, deepest first. Accepts any operands.
    Ternary {
        apply: fn(&mut Context<'_>, Value, Value, Value) -> EvalResult<()>,
    },
}

/// A unit of command logic: a name for diagnostics, the command it claims,
/// and its action.
pub struct Handler {
    pub name:   &'static str,
    pub claim:  Claim,
    pub action: Action,
}

/// An ordered table of handlers sharing a theme.
pub struct HandlerGroup {
    pub name:     &'static str,
    pub handlers: &'static [Handler],
}

/// Defines a handler group as a static table.
///
/// Each entry provides:
/// - a handler name,
/// - the claimed command,
/// - the action, usually with closures coerced to function pointers.
macro_rules! handler_group {
    (
        $(#[$meta:meta])*
        $group:ident = $label:literal {
            $(
                $name:literal => $claim:expr, $action:expr
            );* $(;)?
        }
    ) => {
        $(#[$meta])*
        pub static $group: HandlerGroup = HandlerGroup {
            name:     $label,
            handlers: &[
                $(
                    Handler { name: $name, claim: $claim, action: $action },
                )*
            ],
        };
    };
}

/// Array and string commands.
pub mod array;
/// Comparison, selection and the extended logic commands.
pub mod logic;
/// Arithmetic and bitwise commands on numeric values.
pub mod math;
/// Stack shuffling, I/O and conversion commands.
pub mod stack;
/// Variable reads and writes.
pub mod variables;

/// Every handler group, in resolution order.
pub static GROUPS: [&HandlerGroup; 5] = [&variables::VARIABLES,
                                         &math::MATH,
                                         &stack::STACK,
                                         &array::ARRAY,
                                         &logic::LOGIC];

/// Lists the handlers claiming `command`, in the order they are tried.
///
/// # Example
/// ```
/// use golfstack::{interpreter::evaluator::handler::candidates, syntax::Command};
///
/// let names: Vec<_> = candidates(Command::Plain('+')).map(|(_, handler)| handler.name).collect();
/// assert_eq!(names, ["add", "concatenate"]);
/// ```
pub fn candidates(command: Command)
                  -> impl Iterator<Item = (&'static HandlerGroup, &'static Handler)> {
    GROUPS.iter().flat_map(move |&group| {
                     group.handlers
                          .iter()
                          .filter(move |handler| handler.claim.matches(command))
                          .map(move |handler| (group, handler))
                 })
}

/// Precondition accepting any single operand.
pub const fn any_value(_: &Value) -> bool {
    true
}

/// Precondition accepting any pair of operands.
pub const fn any_pair(_: &Value, _: &Value) -> bool {
    true
}

impl Handler {
    /// Offers `command` to this handler.
    ///
    /// # Returns
    /// - `Ok(Outcome::Applied)` when the effect was committed.
    /// - `Ok(Outcome::Rejected)` when the precondition failed; nothing changed.
    /// - `Err(_)` when the effect itself failed.
    pub fn try_apply(&self, context: &mut Context, command: Command) -> EvalResult<Outcome> {
        match self.action {
            Action::Context(run) => return run(context, command),
            Action::Unary { accepts, apply } => {
                if !context.stack.top::<1>().is_some_and(|[a]| accepts(a)) {
                    return Ok(Outcome::Rejected);
                }
                if let Some([a]) = context.stack.pop_n::<1>() {
                    apply(context, a)?;
                }
            },
            Action::Binary { accepts, apply } => {
                if !context.stack.top::<2>().is_some_and(|[a, b]| accepts(a, b)) {
                    return Ok(Outcome::Rejected);
                }
                if let Some([a, b]) = context.stack.pop_n::<2>() {
                    apply(context, a, b)?;
                }
            },
            Action::Ternary { apply } => {
                let Some([a, b, c]) = context.stack.pop_n::<3>() else {
                    return Ok(Outcome::Rejected);
                };
                apply(context, a, b, c)?;
            },
        }
        Ok(Outcome::Applied)
    }
}

impl Context<'_> {
    /// Resolves and runs a command.
    ///
    /// Handlers claiming the command are tried group by group, in table
    /// order; the first whose precondition holds wins. A command nobody
    /// applies to is ignored.
    ///
    /// # Example
    /// ```
    /// use golfstack::{
    ///     interpreter::{
    ///         evaluator::{core::Context, handler::Outcome},
    ///         value::core::Value,
    ///     },
    ///     syntax::Command,
    /// };
    ///
    /// let mut context = Context::new();
    /// context.stack.push(Value::from("abc"));
    /// context.stack.push(Value::Integer(3));
    ///
    /// let outcome = context.dispatch(Command::Plain('+')).unwrap();
    /// assert_eq!(outcome, Outcome::Rejected);
    /// assert_eq!(context.stack.to_string(), "abc3");
    /// ```
    pub fn dispatch(&mut self, command: Command) -> EvalResult<Outcome> {
        for (group, handler) in candidates(command) {
            match handler.try_apply(self, command)? {
                Outcome::Applied => return Ok(Outcome::Applied),
                Outcome::Rejected => {
                    tracing::trace!(group = group.name, handler = handler.name, %command, "rejected");
                },
            }
        }

        tracing::debug!(%command, column = self.column, "no handler applies; command ignored");
        Ok(Outcome::Rejected)
    }
}
