//! # golfstack
//!
//! golfstack is an interpreter for a terse, stack-based golfing language.
//! A program is a single line: literals push values, and every other
//! character is a command that pops its operands and pushes its results. Many
//! commands are overloaded and pick their meaning from the types on top of the
//! stack.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc, clippy::multiple_crate_versions)]

use std::{
    error::Error,
    io::{BufRead, Write},
};

use crate::interpreter::evaluator::core::Context;

/// Provides unified error types for lexing and evaluation.
///
/// This module defines the errors that abort a line: numeric literals that
/// cannot be represented, arithmetic faults and I/O failures. Each error
/// carries the column of the offending token.
///
/// # Responsibilities
/// - Defines the `ParseError` and `RuntimeError` enums.
/// - Implements `Display` and `std::error::Error` for reporting.
pub mod error;
/// Orchestrates the evaluation of a source line.
///
/// This module ties together the lexer, the value model, the operand stack,
/// the variable table and the evaluator with its handler groups.
pub mod interpreter;
/// Command and operator vocabulary.
///
/// Declares the command kinds produced by the lexer and the operator enums
/// consumed by the evaluator.
pub mod syntax;
/// General utilities for numeric conversion and recursion.
pub mod util;

/// Evaluates a program line and returns the rendering of the final stack.
///
/// The input commands see an empty input and printed output is discarded; use
/// [`evaluate_with_io`] to wire them to real streams.
///
/// # Errors
/// Returns an error if a numeric literal is out of range or if a command
/// fails fatally, for example on integer division by zero.
///
/// # Examples
/// ```
/// use golfstack::evaluate;
///
/// assert_eq!(evaluate("5 2-").unwrap(), "3");
/// assert_eq!(evaluate("\"abc\" 3+").unwrap(), "abc3");
/// assert_eq!(evaluate("4,").unwrap(), "0123");
///
/// assert!(evaluate("1 0/").is_err());
/// ```
pub fn evaluate(source: &str) -> Result<String, Box<dyn Error>> {
    let mut context = Context::new();
    context.eval_line(source)?;
    Ok(context.stack.to_string())
}

/// Evaluates a program line with `l`/`t` reading from `input` and `p` writing
/// to `output`, and returns the raw rendering of the final stack.
///
/// # Errors
/// See [`evaluate`]; failures of the streams are reported as well.
///
/// # Examples
/// ```
/// use std::io::Cursor;
///
/// use golfstack::evaluate_with_io;
///
/// let mut printed: Vec<u8> = Vec::new();
/// let stack = evaluate_with_io("l p;", Cursor::new("hello\n"), &mut printed).unwrap();
///
/// assert_eq!(printed, b"hello");
/// assert!(stack.is_empty());
/// ```
pub fn evaluate_with_io<'io>(source: &str,
                             input: impl BufRead + 'io,
                             output: impl Write + 'io)
                             -> Result<Vec<u8>, Box<dyn Error>> {
    let mut context = Context::with_io(Box::new(input), Box::new(output));
    context.eval_line(source)?;
    Ok(context.stack.render())
}
