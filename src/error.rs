//! Error taxonomy for the core engine.
//!
//! A failure to match a pattern is normal control flow, not an error, so
//! there is deliberately no `MatchError`. Likewise a term already in normal
//! form is a valid `reduce` result, not a `ReduceError`.

use thiserror::Error;

/// A 1-based source position. `column` is `None` when the caller only has
/// line-granularity information (e.g. a rule that spans the whole line).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub line: usize,
    pub column: Option<usize>,
}

impl Span {
    pub fn new(line: usize) -> Self {
        Span { line, column: None }
    }

    pub fn at(line: usize, column: usize) -> Self {
        Span {
            line,
            column: Some(column),
        }
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.column {
            Some(col) => write!(f, "{}:{}", self.line, col),
            None => write!(f, "{}", self.line),
        }
    }
}

/// Malformed byte sequence or UTF-8 fault while lexing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{span}: lex error: {message}")]
pub struct LexError {
    pub span: Span,
    pub message: String,
}

/// Grammar violation: missing `=`, unbalanced brackets, empty expression,
/// or trailing tokens after a complete term.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{span}: parse error: {message}")]
pub struct ParseError {
    pub span: Span,
    pub message: String,
}

/// A semantically invalid rule, e.g. one whose left-hand side is a bare
/// variable atom.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{span}: rule error: {message}")]
pub struct RuleError {
    pub span: Span,
    pub message: String,
}

/// Any failure `load` or `eval` can surface.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoralError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Rule(#[from] RuleError),
}
