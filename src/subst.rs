//! `subst(rhs, binding) -> term`: builds the replacement term for a
//! matched redex.
//!
//! A bound variable is replaced by its binding; an unbound variable is left
//! as-is (a free variable on the right-hand side is permitted and behaves
//! like a constant atom); constants and the structure of applications are
//! preserved. Untouched subterms are cloned, which is a refcount bump, not
//! a deep copy — see DESIGN.md.

use crate::matcher::Binding;
use crate::term::Term;

pub fn subst(rhs: &Term, binding: &Binding) -> Term {
    match rhs {
        Term::Atom(name) if rhs.is_variable() => binding
            .get(name.as_ref())
            .cloned()
            .unwrap_or_else(|| rhs.clone()),
        Term::Atom(_) => rhs.clone(),
        Term::App(children) => {
            let substituted: Vec<Term> = children.iter().map(|c| subst(c, binding)).collect();
            Term::app(substituted)
        }
    }
}
