//! The uniform term representation shared by patterns, left- and
//! right-hand sides, and runtime values.
//!
//! `Term` is a two-variant sum over reference-counted interiors rather than
//! an arena of borrowed slices (see DESIGN.md for the tradeoff): an atom's
//! name is an `Rc<str>` and an application's children are an `Rc<[Term]>`,
//! so cloning a term anywhere in the matcher, substitution, or rewriter is
//! a refcount bump, not a deep copy.

use std::fmt;
use std::rc::Rc;

/// A term: either an atom or an application of two or more children.
///
/// An `App` with fewer than two children cannot be constructed through
/// [`Term::app`]; the parser collapses a single-primary expression to that
/// primary instead of wrapping it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term {
    Atom(Rc<str>),
    App(Rc<[Term]>),
}

impl Term {
    /// Build an atom from any string-like value.
    pub fn atom(name: impl Into<Rc<str>>) -> Term {
        Term::Atom(name.into())
    }

    /// Build an application. Panics if fewer than two children are given;
    /// callers (the parser, substitution) are expected to uphold this —
    /// it mirrors the data model's "not representable" invariant.
    ///
    /// Application is left-associative in surface syntax (`(f a) b` and
    /// `f a b` denote the same juxtaposition), so this constructor
    /// maintains the invariant that an Application's first child is never
    /// itself an Application: when the head position is an App — typically
    /// a partially-applied term flowing through a variable, as with a
    /// function value threaded through `map` — its children are spliced in
    /// rather than nested. Only the head position is spliced; a
    /// parenthesized group in an argument position (`f (g a) b`) stays
    /// nested, since it denotes one compound argument, not more arguments
    /// to `f`.
    pub fn app(mut children: Vec<Term>) -> Term {
        assert!(
            children.len() >= 2,
            "an Application must have at least two children"
        );
        if let Term::App(head_children) = &children[0] {
            let mut flat: Vec<Term> = head_children.iter().cloned().collect();
            flat.extend(children.drain(1..));
            return Term::App(Rc::from(flat));
        }
        Term::App(Rc::from(children))
    }

    /// Whether this atom is a pattern variable (uppercase-initial). Always
    /// `false` for an `App` — only atoms are ever variables.
    pub fn is_variable(&self) -> bool {
        match self {
            Term::Atom(name) => name
                .chars()
                .next()
                .is_some_and(|c| c.is_ascii_uppercase()),
            Term::App(_) => false,
        }
    }

    pub fn as_atom(&self) -> Option<&str> {
        match self {
            Term::Atom(name) => Some(name),
            Term::App(_) => None,
        }
    }

    pub fn as_app(&self) -> Option<&[Term]> {
        match self {
            Term::Atom(_) => None,
            Term::App(children) => Some(children),
        }
    }

    /// The leftmost atom obtained by descending the first child repeatedly.
    /// If this term is itself an atom, that atom is the head.
    pub fn head_symbol(&self) -> &str {
        match self {
            Term::Atom(name) => name,
            Term::App(children) => children[0].head_symbol(),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Atom(name) => write!(f, "{name}"),
            Term::App(children) => {
                write!(f, "(")?;
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{child}")?;
                }
                write!(f, ")")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn atom_variable_by_spelling() {
        assert!(Term::atom("X").is_variable());
        assert!(Term::atom("Head").is_variable());
        assert!(!Term::atom("x").is_variable());
        assert!(!Term::atom("0").is_variable());
        assert!(!Term::atom("[]").is_variable());
    }

    #[test]
    fn application_is_never_a_variable() {
        let t = Term::app(vec![Term::atom("f"), Term::atom("X")]);
        assert!(!t.is_variable());
    }

    #[test]
    fn head_symbol_descends_first_child() {
        let inner = Term::app(vec![Term::atom("f"), Term::atom("a")]);
        let t = Term::app(vec![inner, Term::atom("b"), Term::atom("c")]);
        assert_eq!(t.head_symbol(), "f");
        assert_eq!(Term::atom("bare").head_symbol(), "bare");
    }

    #[test]
    fn structural_equality_ignores_allocation_identity() {
        let a = Term::app(vec![Term::atom("p"), Term::atom("x"), Term::atom("y")]);
        let b = Term::app(vec![Term::atom("p"), Term::atom("x"), Term::atom("y")]);
        assert_eq!(a, b);
    }

    #[test]
    fn head_position_application_is_spliced_not_nested() {
        let partial = Term::app(vec![Term::atom("+"), Term::atom("one")]);
        let applied = Term::app(vec![partial, Term::atom("two")]);
        assert_eq!(
            applied,
            Term::app(vec![Term::atom("+"), Term::atom("one"), Term::atom("two")])
        );
    }

    #[test]
    fn argument_position_application_stays_nested() {
        let inner = Term::app(vec![Term::atom("g"), Term::atom("a")]);
        let t = Term::app(vec![Term::atom("f"), inner.clone(), Term::atom("b")]);
        match t {
            Term::App(children) => assert_eq!(children[1], inner),
            Term::Atom(_) => panic!("expected an application"),
        }
    }

    #[test]
    fn display_matches_canonical_form() {
        let nil = Term::atom("[]");
        assert_eq!(nil.to_string(), "[]");
        let t = Term::app(vec![Term::atom("p"), Term::atom("a"), nil]);
        assert_eq!(t.to_string(), "(p a [])");
    }
}
