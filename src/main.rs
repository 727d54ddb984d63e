//! The `coral` front-end binary: a thin shell around [`coral::Engine`].
//! All language semantics live in the library crate; this file only maps
//! CLI flags to `load`/`eval`/`format` calls, installs logging, and
//! renders errors to the terminal.

mod cli;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use reedline::{DefaultPrompt, Reedline, Signal};

use cli::{CliError, Command, Located};
use coral::{Engine, Term};

/// The bundled prelude: natural numbers, booleans, and lists. Embedded at
/// compile time so `coral` behaves the same regardless of the working
/// directory it is invoked from.
const PRELUDE: &str = include_str!("../library/prelude.coral");

fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    let level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_env("RUST_LOG")
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: cli::Cli) -> Result<(), CliError> {
    match cli.command {
        None => repl(&[], cli.no_prelude),
        Some(Command::Repl { libs }) => repl(&libs, cli.no_prelude),
        Some(Command::Run { file, libs, steps }) => run_file(&file, &libs, cli.no_prelude, steps),
        Some(Command::Eval { source, libs, steps }) => {
            eval_source(&source, &libs, cli.no_prelude, steps)
        }
        Some(Command::Fmt { file }) => fmt_file(&file),
    }
}

fn new_engine(libs: &[PathBuf], no_prelude: bool) -> Result<Engine, CliError> {
    let mut engine = Engine::new();
    if !no_prelude {
        log::info!("loading bundled prelude");
        engine
            .load(PRELUDE)
            .map_err(|e| CliError::core("<prelude>", e))?;
    }
    for lib in libs {
        load_file(&mut engine, lib)?;
    }
    Ok(engine)
}

fn load_file(engine: &mut Engine, path: &Path) -> Result<usize, CliError> {
    let display = path.display().to_string();
    let source = fs::read_to_string(path).map_err(|e| CliError::io(display.clone(), e))?;
    let count = engine
        .load(&source)
        .map_err(|e| CliError::core(display.clone(), e))?;
    log::info!("loaded {count} rule(s) from {display}");
    Ok(count)
}

fn repl(libs: &[PathBuf], no_prelude: bool) -> Result<(), CliError> {
    let mut engine = new_engine(libs, no_prelude)?;
    let mut line_editor = Reedline::create();
    let prompt = DefaultPrompt::default();

    loop {
        match line_editor.read_line(&prompt) {
            Ok(Signal::Success(buffer)) => {
                let input = buffer.trim();
                if input.is_empty() {
                    continue;
                }
                if let Some(rest) = input.strip_prefix(":load ") {
                    match load_file(&mut engine, Path::new(rest.trim())) {
                        Ok(count) => println!("loaded {count} rule(s)"),
                        Err(err) => eprintln!("{err}"),
                    }
                    continue;
                }
                match engine.eval(input) {
                    Ok(term) => println!("{}", engine.format(&term)),
                    Err(err) => eprintln!("{}", Located { path: "<stdin>", error: &err }),
                }
            }
            Ok(Signal::CtrlC) | Ok(Signal::CtrlD) => break,
            Err(err) => {
                eprintln!("line editor error: {err}");
                break;
            }
        }
    }
    Ok(())
}

fn run_file(file: &Path, libs: &[PathBuf], no_prelude: bool, steps: Option<usize>) -> Result<(), CliError> {
    let mut engine = new_engine(libs, no_prelude)?;
    let display = file.display().to_string();
    let source = fs::read_to_string(file).map_err(|e| CliError::io(display.clone(), e))?;

    let trailing = trailing_bare_expression(&source);
    let rule_source = match &trailing {
        Some((rules_text, _)) => rules_text.as_str(),
        None => source.as_str(),
    };
    engine
        .load(rule_source)
        .map_err(|e| CliError::core(display.clone(), e))?;

    if let Some((_, expr_source)) = trailing {
        let term = reduce_with_budget(&engine, &expr_source, steps, &display)?;
        println!("{}", engine.format(&term));
    }
    Ok(())
}

/// A rule file `coral run`s may end in a single trailing line that is a
/// bare expression (no `=`) rather than a rule — that line is the term to
/// evaluate after loading everything above it. Detect and split it off
/// without disturbing the core's rule-file grammar, which has no notion of
/// a trailing expression at all.
fn trailing_bare_expression(source: &str) -> Option<(String, String)> {
    let trimmed_end = source.trim_end_matches(['\n', '\r']);
    let last_line_start = trimmed_end.rfind('\n').map(|i| i + 1).unwrap_or(0);
    let last_line = trimmed_end[last_line_start..].trim();
    if last_line.is_empty() || last_line.starts_with('#') || last_line.contains('=') {
        return None;
    }
    if coral::parser::parse_term(last_line).is_err() {
        return None;
    }
    Some((
        trimmed_end[..last_line_start].to_string(),
        last_line.to_string(),
    ))
}

fn eval_source(source: &str, libs: &[PathBuf], no_prelude: bool, steps: Option<usize>) -> Result<(), CliError> {
    let engine = new_engine(libs, no_prelude)?;
    let term = reduce_with_budget(&engine, source, steps, "<source>")?;
    println!("{}", engine.format(&term));
    Ok(())
}

/// Drive reduction one `step` at a time from the front end, counting
/// iterations, because the core intentionally exposes no watchdog. This
/// never touches `coral::rewriter::reduce` itself.
fn reduce_with_budget(
    engine: &Engine,
    source: &str,
    steps: Option<usize>,
    path: &str,
) -> Result<Term, CliError> {
    let mut term =
        coral::parser::parse_term(source).map_err(|e| CliError::core(path, coral::CoralError::from(e)))?;

    let Some(budget) = steps else {
        return Ok(coral::rewriter::reduce(engine.database(), &term));
    };

    for _ in 0..budget {
        match coral::rewriter::step(engine.database(), &term) {
            Some(next) => term = next,
            None => return Ok(term),
        }
    }
    Err(CliError::StepBudgetExceeded {
        path: path.to_string(),
        budget,
        last: engine.format(&term),
    })
}

fn fmt_file(file: &Path) -> Result<(), CliError> {
    let display = file.display().to_string();
    let source = fs::read_to_string(file).map_err(|e| CliError::io(display.clone(), e))?;
    let term = coral::parser::parse_term(&source)
        .map_err(|e| CliError::core(display.clone(), coral::CoralError::from(e)))?;
    println!("{}", coral::format::format(&term));
    Ok(())
}
