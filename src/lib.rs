//! Coral: a minimal functional language whose sole computational mechanism
//! is user-defined term rewriting.
//!
//! This crate is the core: lexer, parser, term model, rule database,
//! matcher, substitution, and rewriter. The `coral` binary (outside this
//! crate's public contract) is a thin front end built on top of
//! [`Engine`] — see `src/cli.rs` and `src/main.rs`.

pub mod error;
pub mod format;
pub mod lexer;
pub mod matcher;
pub mod parser;
pub mod rewriter;
pub mod rules;
pub mod subst;
pub mod term;

pub use error::{CoralError, LexError, ParseError, RuleError, Span};
pub use rules::{Rule, RuleDatabase};
pub use term::Term;

/// The three operations the core exposes to any front end: `load`, `eval`,
/// and `format`. `Engine` is just a `RuleDatabase` plus these entry
/// points — it holds no other state, since the rule database is the
/// engine's only mutable state.
#[derive(Debug, Default)]
pub struct Engine {
    db: RuleDatabase,
}

impl Engine {
    pub fn new() -> Self {
        Engine::default()
    }

    /// Parse `source` as a rule file and append every rule it contains to
    /// the database. Returns the number of rules appended.
    pub fn load(&mut self, source: &str) -> Result<usize, CoralError> {
        self.db.load(source)
    }

    /// Parse a single term from `source` and reduce it to normal form
    /// against the current database.
    pub fn eval(&self, source: &str) -> Result<Term, CoralError> {
        let term = parser::parse_term(source)?;
        Ok(rewriter::reduce(&self.db, &term))
    }

    /// The canonical printable form of `term`.
    pub fn format(&self, term: &Term) -> String {
        format::format(term)
    }

    /// The underlying rule database, e.g. for a front end that wants to
    /// report how many rules are loaded.
    pub fn database(&self) -> &RuleDatabase {
        &self.db
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_load_then_eval_round_trips_through_the_database() {
        let mut engine = Engine::new();
        engine.load("id X = X\n").unwrap();
        let result = engine.eval("id (id foo)").unwrap();
        assert_eq!(engine.format(&result), "foo");
    }

    #[test]
    fn engine_eval_with_an_empty_database_is_the_identity() {
        let engine = Engine::new();
        let result = engine.eval("f a b").unwrap();
        assert_eq!(engine.format(&result), "(f a b)");
    }

    #[test]
    fn engine_load_surfaces_a_rule_error_for_a_bare_variable_head() {
        let mut engine = Engine::new();
        assert!(matches!(engine.load("X = foo\n"), Err(CoralError::Rule(_))));
    }

    #[test]
    fn engine_eval_surfaces_a_parse_error_for_unbalanced_brackets() {
        let engine = Engine::new();
        assert!(matches!(engine.eval("(f a"), Err(CoralError::Parse(_))));
    }
}
