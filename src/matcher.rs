//! Structural matching of a rule's left-hand side against a candidate term.
//!
//! Matching is deterministic and linear in the size of pattern + term:
//! there is no backtracking beyond what structural recursion provides.

use crate::term::Term;
use std::collections::HashMap;

/// A mapping from pattern variable name to the term it is bound to,
/// produced by a successful [`match_pattern`]. Short-lived: discarded once
/// substitution produces the rewritten term.
pub type Binding = HashMap<String, Term>;

/// Attempt to match `pattern` against `term`, starting from an empty
/// binding. Returns the binding on success.
pub fn match_pattern(pattern: &Term, term: &Term) -> Option<Binding> {
    let mut binding = Binding::new();
    if match_into(pattern, term, &mut binding) {
        Some(binding)
    } else {
        None
    }
}

fn match_into(pattern: &Term, term: &Term, binding: &mut Binding) -> bool {
    if pattern.is_variable() {
        let name = pattern.as_atom().expect("variables are always atoms");
        return match binding.get(name) {
            Some(bound) => bound == term,
            None => {
                binding.insert(name.to_string(), term.clone());
                true
            }
        };
    }

    match (pattern, term) {
        (Term::Atom(p), Term::Atom(t)) => p == t,
        (Term::App(p_children), Term::App(t_children)) => {
            p_children.len() == t_children.len()
                && p_children
                    .iter()
                    .zip(t_children.iter())
                    .all(|(p, t)| match_into(p, t, binding))
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_atom_matches_only_itself() {
        assert!(match_pattern(&Term::atom("a"), &Term::atom("a")).is_some());
        assert!(match_pattern(&Term::atom("a"), &Term::atom("b")).is_none());
    }

    #[test]
    fn variable_binds_anything_once() {
        let binding = match_pattern(&Term::atom("X"), &Term::atom("foo")).unwrap();
        assert_eq!(binding.get("X"), Some(&Term::atom("foo")));
    }

    #[test]
    fn non_linear_pattern_requires_equal_repeated_occurrences() {
        let pattern = Term::app(vec![Term::atom("dup"), Term::atom("X"), Term::atom("X")]);
        let same = Term::app(vec![Term::atom("dup"), Term::atom("a"), Term::atom("a")]);
        let different = Term::app(vec![Term::atom("dup"), Term::atom("a"), Term::atom("b")]);
        assert!(match_pattern(&pattern, &same).is_some());
        assert!(match_pattern(&pattern, &different).is_none());
    }

    #[test]
    fn application_requires_equal_arity() {
        let pattern = Term::app(vec![Term::atom("f"), Term::atom("X")]);
        let too_many = Term::app(vec![Term::atom("f"), Term::atom("a"), Term::atom("b")]);
        assert!(match_pattern(&pattern, &too_many).is_none());
    }

    #[test]
    fn ellipsis_is_a_literal_atom_to_the_matcher() {
        let pattern = Term::app(vec![Term::atom("list"), Term::atom("A"), Term::atom("..")]);
        let matches = Term::app(vec![Term::atom("list"), Term::atom("x"), Term::atom("..")]);
        let no_match = Term::app(vec![Term::atom("list"), Term::atom("x"), Term::atom("rest")]);
        assert!(match_pattern(&pattern, &matches).is_some());
        assert!(match_pattern(&pattern, &no_match).is_none());
    }
}
