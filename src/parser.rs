//! Token stream → term tree (and, for files, rule list).
//!
//! Both entry points share one expression grammar:
//!
//! ```text
//! expr    := primary+
//! primary := Atom(name) | '(' expr ')' | '[' ']' | Ellipsis
//! ```
//!
//! `TokenCursor` is a plain index over the slice `lexer::tokenize` returns;
//! there is no backtracking, so a single forward cursor suffices.

use crate::error::{ParseError, Span};
use crate::lexer::{self, Token};
use crate::term::Term;

struct TokenCursor<'a> {
    tokens: &'a [(Token, Span)],
    pos: usize,
}

impl<'a> TokenCursor<'a> {
    fn new(tokens: &'a [(Token, Span)]) -> Self {
        TokenCursor { tokens, pos: 0 }
    }

    /// The token stream always ends with `Token::End`, so `pos` never runs
    /// past the end of the slice.
    fn peek(&self) -> &(Token, Span) {
        &self.tokens[self.pos]
    }

    fn bump(&mut self) -> (Token, Span) {
        let current = self.tokens[self.pos].clone();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        current
    }
}

fn starts_primary(token: &Token) -> bool {
    matches!(
        token,
        Token::Atom(_) | Token::LParen | Token::LBracket | Token::Ellipsis
    )
}

fn parse_primary(cursor: &mut TokenCursor) -> Result<Term, ParseError> {
    let (token, span) = cursor.peek().clone();
    match token {
        Token::Atom(name) => {
            cursor.bump();
            Ok(Term::atom(name))
        }
        Token::Ellipsis => {
            cursor.bump();
            Ok(Term::atom(".."))
        }
        Token::LParen => {
            cursor.bump();
            let inner = parse_expr(cursor)?;
            match cursor.peek().clone() {
                (Token::RParen, _) => {
                    cursor.bump();
                    Ok(inner)
                }
                (other, at) => Err(ParseError {
                    span: at,
                    message: format!("unbalanced parenthesis: expected ')', found {other:?}"),
                }),
            }
        }
        Token::LBracket => {
            cursor.bump();
            match cursor.peek().clone() {
                (Token::RBracket, _) => {
                    cursor.bump();
                    Ok(Term::atom("[]"))
                }
                (other, at) => Err(ParseError {
                    span: at,
                    message: format!(
                        "unbalanced bracket: expected ']' to close empty list literal, found {other:?}"
                    ),
                }),
            }
        }
        other => Err(ParseError {
            span,
            message: format!("expected a term, found {other:?}"),
        }),
    }
}

fn parse_expr(cursor: &mut TokenCursor) -> Result<Term, ParseError> {
    let mut primaries = vec![parse_primary(cursor)?];
    while starts_primary(&cursor.peek().0) {
        primaries.push(parse_primary(cursor)?);
    }
    if primaries.len() == 1 {
        Ok(primaries.pop().expect("just checked length"))
    } else {
        Ok(Term::app(primaries))
    }
}

fn skip_newlines(cursor: &mut TokenCursor) {
    while matches!(cursor.peek().0, Token::Newline) {
        cursor.bump();
    }
}

/// Parse a single term from `source`, terminated by end-of-input.
/// Trailing newlines before the end are tolerated; any other trailing
/// token is a [`ParseError`].
pub fn parse_term(source: &str) -> Result<Term, ParseError> {
    let tokens = lexer::tokenize(source).map_err(|e| ParseError {
        span: e.span,
        message: e.message,
    })?;
    let mut cursor = TokenCursor::new(&tokens);
    let term = parse_expr(&mut cursor)?;
    skip_newlines(&mut cursor);
    match cursor.peek().clone() {
        (Token::End, _) => Ok(term),
        (other, at) => Err(ParseError {
            span: at,
            message: format!("trailing tokens after a complete term: found {other:?}"),
        }),
    }
}

/// Parse a sequence of `lhs = rhs` rules from `source`. Blank and
/// comment-only lines are skipped (comments are already stripped by the
/// lexer, so a comment-only line lexes to a bare `Newline`).
pub fn parse_rules(source: &str) -> Result<Vec<(Term, Term, Span)>, ParseError> {
    let tokens = lexer::tokenize(source).map_err(|e| ParseError {
        span: e.span,
        message: e.message,
    })?;
    let mut cursor = TokenCursor::new(&tokens);
    let mut rules = Vec::new();

    loop {
        skip_newlines(&mut cursor);
        if matches!(cursor.peek().0, Token::End) {
            break;
        }

        let rule_span = cursor.peek().1;
        let lhs = parse_expr(&mut cursor)?;
        match cursor.peek().clone() {
            (Token::Equals, _) => {
                cursor.bump();
            }
            (other, at) => {
                return Err(ParseError {
                    span: at,
                    message: format!("missing '=' in rule, found {other:?}"),
                });
            }
        }
        let rhs = parse_expr(&mut cursor)?;
        match cursor.peek().clone() {
            (Token::Newline, _) => {
                cursor.bump();
            }
            (Token::End, _) => {}
            (other, at) => {
                return Err(ParseError {
                    span: at,
                    message: format!("trailing tokens after rule: found {other:?}"),
                });
            }
        }
        rules.push((lhs, rhs, rule_span));
    }

    Ok(rules)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_primary_collapses() {
        assert_eq!(parse_term("foo").unwrap(), Term::atom("foo"));
    }

    #[test]
    fn application_is_left_flat() {
        let t = parse_term("f a b c").unwrap();
        assert_eq!(
            t,
            Term::app(vec![
                Term::atom("f"),
                Term::atom("a"),
                Term::atom("b"),
                Term::atom("c"),
            ])
        );
    }

    #[test]
    fn parenthesized_group_nests() {
        let t = parse_term("f (g a) b").unwrap();
        let inner = Term::app(vec![Term::atom("g"), Term::atom("a")]);
        assert_eq!(t, Term::app(vec![Term::atom("f"), inner, Term::atom("b")]));
    }

    #[test]
    fn empty_list_and_ellipsis_are_atoms() {
        assert_eq!(parse_term("[]").unwrap(), Term::atom("[]"));
        assert_eq!(parse_term("..").unwrap(), Term::atom(".."));
    }

    #[test]
    fn unbalanced_parens_is_parse_error() {
        assert!(parse_term("(f a").is_err());
        assert!(parse_term("f a)").is_err());
    }

    #[test]
    fn trailing_tokens_after_term_is_an_error() {
        assert!(parse_term("a b ) c").is_err());
    }

    #[test]
    fn rule_grammar_skips_blank_and_comment_lines() {
        let src = "\n# a comment\n\nid X = X\n\ndup X X = t\n";
        let rules = parse_rules(src).unwrap();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].0, Term::app(vec![Term::atom("id"), Term::atom("X")]));
        assert_eq!(rules[0].1, Term::atom("X"));
    }

    #[test]
    fn rule_missing_equals_is_an_error() {
        assert!(parse_rules("id X\n").is_err());
    }

    #[test]
    fn rule_without_trailing_newline_at_eof_is_accepted() {
        let rules = parse_rules("id X = X").unwrap();
        assert_eq!(rules.len(), 1);
    }
}
