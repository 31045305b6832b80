//! sprig interpreter command-line.
//!
//! When called without argument it drops into an interactive
//! read-evaluate-print loop.  When called with a file path, it runs the file
//! in a single interpreter session.

use std::fs;
use std::io;
use std::io::prelude::*;

use anyhow::Context as _;
use clap::Parser;
use log::{debug, LevelFilter};

use sprig::interpreter::Interpreter;
use sprig::value::Value;

const PROMPT: &str = ">>> ";

#[derive(Parser, Debug)]
#[command(version, about = "Interpreter for the sprig scripting language.")]
struct Args {
    /// Script to run.  Starts a REPL when omitted.
    file: Option<String>,

    /// Log interpreter diagnostics to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), anyhow::Error> {
    let args = Args::parse();
    init_logging(if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    })?;

    match args.file {
        Some(path) => run_file(&path),
        None => Ok(run_prompt()?),
    }
}

/// Diagnostics go to stderr so they never interleave with interpreter output
/// on stdout.
fn init_logging(level: LevelFilter) -> Result<(), fern::InitError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}] [{}] {}",
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(io::stderr())
        .apply()?;
    Ok(())
}

fn run_file(path: &str) -> Result<(), anyhow::Error> {
    let source =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path))?;
    debug!("running {} ({} bytes)", path, source.len());

    let mut interp_stdout = io::stdout();
    let mut interp = Interpreter::new(&mut interp_stdout);
    match interp.eval(&source) {
        Ok(value) => {
            if value.is_error() {
                println!("{}", value);
            }
        }
        Err(errors) => print_parse_errors(errors.messages()),
    }
    Ok(())
}

fn run_prompt() -> Result<(), io::Error> {
    let stdin = io::stdin();
    let mut repl_stdout = io::stdout();
    let mut interp_stdout = io::stdout();

    let mut interp = Interpreter::new(&mut interp_stdout);

    let mut input = String::new();
    loop {
        repl_stdout.write_all(PROMPT.as_bytes())?;
        repl_stdout.flush()?;

        input.clear();
        let nbytes = stdin.read_line(&mut input)?;
        if nbytes == 0 {
            break;
        }

        match interp.eval(&input) {
            Ok(value) => {
                if value != Value::Null {
                    println!("{}", value);
                }
            }
            Err(errors) => print_parse_errors(errors.messages()),
        }
    }

    Ok(())
}

fn print_parse_errors(messages: &[String]) {
    for msg in messages {
        println!("\t{}", msg);
    }
}
