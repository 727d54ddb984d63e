//! Drives reduction of a term to normal form: leftmost-outermost,
//! first-rule-wins, iterated to a fixed point.
//!
//! There is no cycle detection and no step limit here; a divergent program
//! diverges. A host wanting to bound reduction calls [`step`] itself and
//! counts iterations (see the `coral` binary's `--steps` flag) rather than
//! having this module grow a budget parameter of its own.

use crate::matcher::match_pattern;
use crate::rules::RuleDatabase;
use crate::subst::subst;
use crate::term::Term;
use std::rc::Rc;

/// Attempt one reduction step. `None` means `term` is already in normal
/// form with respect to `db`.
///
/// Rules under `term`'s head symbol are tried in insertion order at the
/// outermost position first; only if none match does the search descend
/// into children, left to right. This order is what makes the engine
/// leftmost-outermost rather than innermost: a rule like `if t A B = A`
/// must not force evaluation of `B`.
pub fn step(db: &RuleDatabase, term: &Term) -> Option<Term> {
    let head = term.head_symbol();
    for rule in db.rules_for(head) {
        if let Some(binding) = match_pattern(&rule.lhs, term) {
            log::trace!("step: `{head}` redex matched, rewriting to `{}`", rule.rhs);
            return Some(subst(&rule.rhs, &binding));
        }
    }

    if let Term::App(children) = term {
        for (i, child) in children.iter().enumerate() {
            if let Some(new_child) = step(db, child) {
                let mut new_children: Vec<Term> = children.to_vec();
                new_children[i] = new_child;
                return Some(Term::App(Rc::from(new_children)));
            }
        }
    }

    None
}

/// Reduce `term` to normal form with respect to `db`: iterate [`step`]
/// until it returns `None`.
pub fn reduce(db: &RuleDatabase, term: &Term) -> Term {
    let mut current = term.clone();
    while let Some(next) = step(db, &current) {
        current = next;
    }
    current
}
