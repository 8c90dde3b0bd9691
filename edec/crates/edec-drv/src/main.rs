//! The `ede` command-line interface.
//!
//! `ede PATH` evaluates a source file and prints the final value's
//! inspection to stdout; parse and runtime errors go to stderr with a
//! nonzero exit code. With no path, an interactive REPL starts.

use std::io::BufReader;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use edec_drv::{repl, Config, Emit, Session};

/// The ede interpreter
#[derive(Parser, Debug)]
#[command(name = "ede")]
#[command(version)]
#[command(about = "Tree-walking interpreter for the ede language", long_about = None)]
struct Cli {
    /// Source file to run; omit to start the REPL
    file: Option<PathBuf>,

    /// Emit an intermediate stage instead of evaluating
    #[arg(long, value_enum)]
    emit: Option<EmitArg>,

    /// Enable verbose phase logging
    #[arg(short, long, env = "EDE_VERBOSE")]
    verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum EmitArg {
    Tokens,
    Ast,
}

fn emit_from(arg: Option<EmitArg>) -> Emit {
    match arg {
        Some(EmitArg::Tokens) => Emit::Tokens,
        Some(EmitArg::Ast) => Emit::Ast,
        None => Emit::Value,
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let Some(file) = cli.file else {
        return match run_repl() {
            Ok(()) => ExitCode::SUCCESS,
            Err(error) => {
                eprintln!("error: {error:#}");
                ExitCode::FAILURE
            },
        };
    };

    let mut session = Session::new(Config {
        input: Some(file),
        emit: emit_from(cli.emit),
        verbose: cli.verbose,
    });

    match session.run() {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        },
        Err(error) => {
            eprintln!("{error}");
            ExitCode::FAILURE
        },
    }
}

fn run_repl() -> anyhow::Result<()> {
    let stdin = std::io::stdin();
    repl::start(BufReader::new(stdin.lock()), std::io::stdout())
        .context("repl session failed")?;
    Ok(())
}
