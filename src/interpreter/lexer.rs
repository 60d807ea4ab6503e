use logos::{Lexer, Logos};

/// Represents a lexical token of a source line.
///
/// Literals carry their payload; everything else is a command. Array, block
/// and text literals borrow their inner source, which is evaluated (arrays)
/// or stored (blocks and texts) by the evaluator.
///
/// # Example
/// ```
/// use golfstack::interpreter::lexer::Token;
/// use logos::Logos;
///
/// let tokens: Vec<_> = Token::lexer("5 2-\"hi\"[1 [2]]:Xe&").map(Result::unwrap).collect();
/// assert_eq!(tokens,
///            vec![Token::Integer(5),
///                 Token::Integer(2),
///                 Token::Command('-'),
///                 Token::Text("hi"),
///                 Token::Array("1 [2]"),
///                 Token::Store('X'),
///                 Token::Extended('&')]);
/// ```
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token<'s> {
    /// Integer literals such as `42` or `-7`.
    #[regex(r"[+-]?[0-9]+", parse_integer, priority = 4)]
    Integer(i64),
    /// Float literals such as `2.5`, `-.5` or `3.`.
    #[regex(r"[+-]?([0-9]+\.[0-9]*|\.[0-9]+)", parse_float, priority = 4)]
    Float(f64),
    /// `"text"`; runs to the next quote or the end of the line.
    #[token("\"", lex_text)]
    Text(&'s str),
    /// `[...]`; the inner source, up to the matching bracket.
    #[token("[", |lex| lex_nested(lex, b'[', b']'))]
    Array(&'s str),
    /// `{...}`; the inner source, up to the matching brace.
    #[token("{", |lex| lex_nested(lex, b'{', b'}'))]
    Block(&'s str),
    /// `:X`, storing into variable `X`.
    #[regex(r":[A-Z]", |lex| lex.slice().chars().nth(1))]
    Store(char),
    /// `e` followed by one more character selecting an extended operator.
    #[regex(r"e[^\n]", |lex| lex.slice()[1..].chars().next())]
    Extended(char),
    /// Any other single character.
    #[regex(r"[^\x00-\x20]", |lex| lex.slice().chars().next(), priority = 1)]
    Command(char),
    /// Spaces and control characters separate tokens.
    #[regex(r"[\x00-\x20]+", logos::skip, allow_greedy = true)]
    Ignored,
}

/// Parses an integer literal from the current token slice.
///
/// # Returns
/// - `Some(i64)`: The parsed value.
/// - `None`: If the literal does not fit in an `i64`.
fn parse_integer<'s>(lex: &Lexer<'s, Token<'s>>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Parses a float literal from the current token slice.
fn parse_float<'s>(lex: &Lexer<'s, Token<'s>>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Consumes a text literal after its opening quote.
///
/// Returns the bytes up to the closing quote, or the rest of the line when
/// the literal is unterminated.
fn lex_text<'s>(lex: &mut Lexer<'s, Token<'s>>) -> &'s str {
    let rest = lex.remainder();
    let (inner, consumed) = rest.find('"')
                                .map_or((rest, rest.len()), |end| (&rest[..end], end + 1));
    lex.bump(consumed);
    inner
}

/// Consumes a bracketed literal after its opening bracket, tracking depth.
///
/// Returns the source strictly inside the outer brackets; an unterminated
/// literal takes the rest of the line.
fn lex_nested<'s>(lex: &mut Lexer<'s, Token<'s>>, open: u8, close: u8) -> &'s str {
    let rest = lex.remainder();
    let mut depth = 1_usize;
    let close_at = rest.bytes().position(|byte| {
                                   if byte == open {
                                       depth += 1;
                                   } else if byte == close {
                                       depth -= 1;
                                   }
                                   depth == 0
                               });

    let (inner, consumed) = close_at.map_or((rest, rest.len()), |end| (&rest[..end], end + 1));
    lex.bump(consumed);
    inner
}
