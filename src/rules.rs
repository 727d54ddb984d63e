//! The rule database: a mapping from head symbol to an ordered sequence of
//! rules sharing that head, plus the loading semantics that accumulate it.

use crate::error::{CoralError, RuleError, Span};
use crate::parser;
use crate::term::Term;
use std::collections::HashMap;

/// One `lhs = rhs` rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub lhs: Term,
    pub rhs: Term,
}

impl Rule {
    /// The head symbol indexing this rule in the database: the leftmost
    /// atom reached by descending the left-hand side's first child.
    pub fn head_symbol(&self) -> &str {
        self.lhs.head_symbol()
    }
}

/// Accumulates rules and exposes ordered lookup by head symbol. Insertion
/// order within a head's sequence is preserved and significant: the first
/// matching rule wins.
#[derive(Debug, Default)]
pub struct RuleDatabase {
    by_head: HashMap<String, Vec<Rule>>,
}

impl RuleDatabase {
    pub fn new() -> Self {
        RuleDatabase::default()
    }

    /// The rules sharing `head`, in insertion order. Empty if no rule has
    /// ever been loaded under this head.
    pub fn rules_for(&self, head: &str) -> &[Rule] {
        self.by_head.get(head).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.by_head.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Insert one rule, rejecting a bare-variable left-hand side. Loading
    /// is append-only: a rule is always added at the end of its head's
    /// sequence, never deduplicated or reordered — reloading the same
    /// source twice doubles up its rules rather than replacing them.
    pub fn insert(&mut self, lhs: Term, rhs: Term, span: Span) -> Result<(), RuleError> {
        if lhs.is_variable() {
            return Err(RuleError {
                span,
                message: "rule left-hand side cannot be a bare variable".to_string(),
            });
        }
        let head = lhs.head_symbol().to_string();
        log::debug!("loading rule under head `{head}` ({span})");
        self.by_head.entry(head).or_default().push(Rule { lhs, rhs });
        Ok(())
    }

    /// Parse `source` as a rule file and append every rule it contains.
    /// Returns the number of rules appended. Loading is not transactional:
    /// on a `RuleError` partway through, rules already appended from this
    /// call stay in the database.
    pub fn load(&mut self, source: &str) -> Result<usize, CoralError> {
        let parsed = parser::parse_rules(source)?;
        let count = parsed.len();
        for (lhs, rhs, span) in parsed {
            self.insert(lhs, rhs, span)?;
        }
        log::info!("loaded {count} rule(s)");
        Ok(count)
    }
}
