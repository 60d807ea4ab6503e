use std::{
    error::Error,
    io::{self, BufRead, Read, Write},
};

use logos::Logos;

use crate::{
    error::{ParseError, RuntimeError},
    interpreter::{
        lexer::Token, stack::Stack, value::core::Value, variables::Variables,
    },
    syntax::Command,
    util::recursion::ensure_sufficient_stack,
};

/// Result type used by the evaluator.
///
/// Commands either succeed (possibly by declining to act, see
/// [`Outcome`](crate::interpreter::evaluator::handler::Outcome)) or fail with a
/// `RuntimeError` that aborts the line.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// The context owns the operand stack and the variable table, plus the input
/// and output streams used by the I/O commands. One context evaluates one
/// line; nested array literals reuse it with a fresh stack.
///
/// ## Usage
///
/// ```
/// use golfstack::interpreter::evaluator::core::Context;
///
/// let mut context = Context::new();
/// context.eval_line("3 4* 1+").unwrap();
/// assert_eq!(context.stack.to_string(), "13");
/// ```
pub struct Context<'io> {
    /// The operand stack.
    pub stack:     Stack,
    /// Variables `A`..`Z`, shared with nested array literals.
    pub variables: Variables,
    /// Byte offset in the line of the command currently running.
    pub column:    usize,
    input:         Box<dyn BufRead + 'io>,
    output:        Box<dyn Write + 'io>,
}

#[allow(clippy::new_without_default)]
impl<'io> Context<'io> {
    /// Creates a context with an empty input stream whose printed output is
    /// discarded.
    #[must_use]
    pub fn new() -> Self {
        Self::with_io(Box::new(io::empty()), Box::new(io::sink()))
    }

    /// Creates a context reading `l`/`t` input from `input` and writing `p`
    /// output to `output`.
    ///
    /// # Example
    /// ```
    /// use std::io::Cursor;
    ///
    /// use golfstack::interpreter::evaluator::core::Context;
    ///
    /// let input = Cursor::new(b"first\nsecond\n".to_vec());
    /// let mut context = Context::with_io(Box::new(input), Box::new(std::io::sink()));
    /// context.eval_line("l_, l").unwrap();
    /// assert_eq!(context.stack.to_string(), "first5second");
    /// ```
    #[must_use]
    pub fn with_io(input: Box<dyn BufRead + 'io>, output: Box<dyn Write + 'io>) -> Self {
        Self { stack: Stack::new(),
               variables: Variables::new(),
               column: 0,
               input,
               output }
    }

    /// Evaluates one source line against the current stack.
    ///
    /// Tokens are evaluated left to right as they are lexed. Literals are
    /// pushed, array literals are evaluated recursively, and every command is
    /// dispatched to the handler tables.
    ///
    /// # Errors
    /// Returns a [`ParseError`] for numeric literals that do not fit their type
    /// and a [`RuntimeError`] for arithmetic or I/O faults. Evaluation stops at
    /// the first error; the stack keeps whatever state it reached.
    pub fn eval_line(&mut self, source: &str) -> Result<(), Box<dyn Error>> {
        self.eval_source(source, 0)
    }

    /// Evaluates `source`, whose first byte sits at `offset` in the line.
    fn eval_source(&mut self, source: &str, offset: usize) -> Result<(), Box<dyn Error>> {
        let mut lexer = Token::lexer(source);

        while let Some(token) = lexer.next() {
            let column = offset + lexer.span().start;
            let Ok(token) = token else {
                return Err(Box::new(ParseError::InvalidLiteral { literal: lexer.slice().to_string(),
                                                                 column }));
            };

            self.column = column;
            self.eval_token(&token, column + 1)?;
            tracing::debug!(column, ?token, stack = %self.stack.render_spaced(), "evaluated");
        }

        Ok(())
    }

    /// Evaluates a single token. `inner_offset` locates the body of array
    /// literals in the line.
    fn eval_token(&mut self, token: &Token<'_>, inner_offset: usize) -> Result<(), Box<dyn Error>> {
        match *token {
            Token::Integer(n) => self.stack.push(Value::Integer(n)),
            Token::Float(x) => self.stack.push(Value::Float(x)),
            Token::Text(text) => self.stack.push(Value::from(text)),
            Token::Block(source) => self.stack.push(Value::Block(source.to_string())),
            Token::Array(source) => self.eval_array_literal(source, inner_offset)?,
            Token::Store(letter) => {
                self.dispatch(Command::Store(letter))?;
            },
            Token::Extended(op) => {
                self.dispatch(Command::Extended(op))?;
            },
            Token::Command(c) => {
                self.dispatch(Command::Plain(c))?;
            },
            Token::Ignored => {},
        }
        Ok(())
    }

    /// Evaluates the body of an array literal on a fresh stack and pushes the
    /// resulting values, as one list, onto the enclosing stack.
    ///
    /// # Example
    /// ```
    /// use golfstack::interpreter::{evaluator::core::Context, value::core::Value};
    ///
    /// let mut context = Context::new();
    /// context.eval_line("9 [1 [2 3] 4]").unwrap();
    ///
    /// let Some(Value::List(outer)) = context.stack.peek() else { panic!("expected a list") };
    /// assert_eq!(outer.len(), 3);
    /// assert_eq!(outer.get(1), Some(&Value::from(vec![Value::Integer(2), Value::Integer(3)])));
    /// assert_eq!(context.stack.len(), 2);
    /// ```
    fn eval_array_literal(&mut self, source: &str, offset: usize) -> Result<(), Box<dyn Error>> {
        let enclosing = std::mem::take(&mut self.stack);
        let evaluated = ensure_sufficient_stack(|| self.eval_source(source, offset));
        let nested = std::mem::replace(&mut self.stack, enclosing);
        evaluated?;

        self.stack.push(Value::List(nested.into_list()));
        Ok(())
    }

    /// Reads one line of input without its newline; empty at end of input.
    pub fn read_line(&mut self) -> EvalResult<Vec<u8>> {
        let column = self.column;
        let mut line = Vec::new();
        self.input
            .read_until(b'\n', &mut line)
            .map_err(|e| io_failure(&e, column))?;
        if line.last() == Some(&b'\n') {
            line.pop();
        }
        Ok(line)
    }

    /// Reads everything left on the input.
    pub fn read_all(&mut self) -> EvalResult<Vec<u8>> {
        let column = self.column;
        let mut rest = Vec::new();
        self.input.read_to_end(&mut rest).map_err(|e| io_failure(&e, column))?;
        Ok(rest)
    }

    /// Writes `bytes` to the output and flushes it.
    pub fn write_output(&mut self, bytes: &[u8]) -> EvalResult<()> {
        let column = self.column;
        self.output
            .write_all(bytes)
            .and_then(|()| self.output.flush())
            .map_err(|e| io_failure(&e, column))
    }
}

fn io_failure(error: &io::Error, column: usize) -> RuntimeError {
    RuntimeError::Io { details: error.to_string(),
                       column }
}
