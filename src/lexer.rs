//! Byte stream → token stream.
//!
//! Segmentation (brackets, newlines, comments, maximal runs of "atom-like"
//! characters) is delegated to `logos`; the thin wrapper below classifies
//! each maximal run into `Equals` / `Ellipsis` / `Atom`, since those three
//! differ only by the exact spelling of the run, not by a distinct
//! character class.

use crate::error::{LexError, Span};
use logos::Logos;

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r]+")]
#[logos(skip r"#[^\n]*")]
enum Raw {
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("\n")]
    Newline,
    #[regex(r"[^\s()\[\]]+")]
    Word,
}

/// A token of the surface grammar, paired with its source position by
/// [`tokenize`].
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    LParen,
    RParen,
    LBracket,
    RBracket,
    Equals,
    Atom(String),
    Ellipsis,
    Newline,
    /// Synthetic end-of-input marker, always the last element of the
    /// stream `tokenize` returns.
    End,
}

/// Lex `source` into a token stream, terminated by [`Token::End`].
///
/// The only failure mode is a byte the grammar has no rule for; with the
/// current total character-class coverage this cannot happen over a valid
/// `&str`, but the path is kept live for whatever future token class
/// narrows that coverage.
pub fn tokenize(source: &str) -> Result<Vec<(Token, Span)>, LexError> {
    let mut tokens = Vec::new();
    let mut line = 1usize;
    let mut line_start = 0usize;

    let mut lexer = Raw::lexer(source);
    while let Some(result) = lexer.next() {
        let byte_span = lexer.span();
        let slice = lexer.slice();
        let column = byte_span.start - line_start + 1;
        let at = Span::at(line, column);

        match result {
            Ok(Raw::LParen) => tokens.push((Token::LParen, at)),
            Ok(Raw::RParen) => tokens.push((Token::RParen, at)),
            Ok(Raw::LBracket) => tokens.push((Token::LBracket, at)),
            Ok(Raw::RBracket) => tokens.push((Token::RBracket, at)),
            Ok(Raw::Newline) => {
                tokens.push((Token::Newline, at));
                line += 1;
                line_start = byte_span.end;
            }
            Ok(Raw::Word) => {
                let token = match slice {
                    "=" => Token::Equals,
                    ".." => Token::Ellipsis,
                    other => Token::Atom(other.to_string()),
                };
                tokens.push((token, at));
            }
            Err(()) => {
                return Err(LexError {
                    span: at,
                    message: format!("unrecognized input {slice:?}"),
                });
            }
        }
    }

    let column = source.len() - line_start + 1;
    tokens.push((Token::End, Span::at(line, column)));
    Ok(tokens)
}
