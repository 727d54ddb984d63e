//! The `coral` binary's command surface and the front-end error type that
//! wraps the core's [`coral::CoralError`] with I/O and step-budget
//! failures. Everything here lives outside the core library's public
//! contract — `coral::lib` never depends on this module.

use std::fmt;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use thiserror::Error;

#[derive(Parser)]
#[command(name = "coral")]
#[command(about = "A minimal functional language built on term rewriting", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Raise log verbosity; repeatable (-v, -vv, -vvv).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Skip auto-loading the bundled prelude.
    #[arg(long, global = true)]
    pub no_prelude: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start an interactive line-editor session (the default command).
    Repl {
        /// A library file to load before the prompt appears; repeatable.
        #[arg(long = "lib")]
        libs: Vec<PathBuf>,
    },
    /// Load a rule file, then reduce its trailing bare expression (if any).
    Run {
        file: PathBuf,
        #[arg(long = "lib")]
        libs: Vec<PathBuf>,
        /// Bound the number of rewrite steps; omit for unbounded.
        #[arg(long)]
        steps: Option<usize>,
    },
    /// Evaluate one term given directly on the command line.
    Eval {
        source: String,
        #[arg(long = "lib")]
        libs: Vec<PathBuf>,
        #[arg(long)]
        steps: Option<usize>,
    },
    /// Parse a single term from a file and print its canonical form.
    Fmt { file: PathBuf },
}

/// Every failure `main` can surface, rendered as
/// `<path-or-"<stdin>">:<line>[:<col>]: <message>`. `CoralError`'s own
/// `Display` already carries the line (and column, where known); the
/// `path` field here supplies the one thing it cannot know on its own —
/// which file (or `<prelude>`/`<source>`) that line belongs to.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{path}:{error}")]
    Core {
        path: String,
        #[source]
        error: coral::CoralError,
    },
    #[error("{path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{path}: step budget of {budget} exceeded; last term reached: {last}")]
    StepBudgetExceeded {
        path: String,
        budget: usize,
        last: String,
    },
}

impl CliError {
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        CliError::Io {
            path: path.into(),
            source,
        }
    }

    /// Wrap a core error with the path it came from, logging it at `debug`
    /// along the way so `-vv` sessions can see errors as they are wrapped,
    /// not just once `main` prints the final one.
    pub fn core(path: impl Into<String>, error: coral::CoralError) -> Self {
        let path = path.into();
        log::debug!("{path}: {error}");
        CliError::Core { path, error }
    }
}

/// A location-qualified rendering of a [`coral::CoralError`]: every core
/// error already renders as `line[:col]: kind: message` (see `error.rs`),
/// so the front end only needs to prefix the file (or `<stdin>`/`<source>`)
/// the error came from to get a `path:line[:col]: message` line.
pub struct Located<'a> {
    pub path: &'a str,
    pub error: &'a coral::CoralError,
}

impl fmt::Display for Located<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.path, self.error)
    }
}
