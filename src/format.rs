//! Canonical printable form: an Atom prints as its name, an Application
//! prints as its children in order, space-separated, wrapped in
//! parentheses. `[]` prints as `[]` because it is, structurally, just the
//! atom named `[]` — there is no separate list-literal variant to special-
//! case.
//!
//! This is a thin wrapper over [`Term`]'s `Display` impl rather than a
//! second formatter: the canonical form *is* the `Display` form, and
//! naming it `format` gives the front end one call to make without
//! reaching past the public API into `fmt`.

use crate::term::Term;

/// Render `term` in canonical form. Deterministic and round-trips back to
/// an equal term under [`crate::parser::parse_term`].
pub fn format(term: &Term) -> String {
    term.to_string()
}
