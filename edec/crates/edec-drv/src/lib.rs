//! edec-drv - Interpreter Driver
//!
//! Orchestrates the pipeline for one invocation:
//!
//! ```text
//! Source file (.ede)
//!        │
//!        ▼
//!   [Read file]
//!        │
//!        ▼
//!   [Lexer] ──▶ Token stream          (stop here with --emit tokens)
//!        │
//!        ▼
//!   [Parser] ──▶ Program AST          (stop here with --emit ast)
//!        │        │
//!        │        └─ parse errors? ──▶ report all, fail
//!        ▼
//!   [Evaluator] ──▶ Value ──▶ inspection on stdout
//! ```
//!
//! Parse errors are collected on the session's diagnostic handler and
//! rendered in the interpreter's block format; any parse error
//! suppresses evaluation. A runtime error value fails the run with its
//! message. Exit codes are handled by the binary: 0 on success,
//! nonzero on either error channel.

pub mod repl;

use std::path::PathBuf;

use thiserror::Error;
use tracing::debug;

use edec_eval::{Environment, Evaluator};
use edec_lex::{Lexer, TokenKind};
use edec_par::Parser;
use edec_util::Handler;

/// Which pipeline stage to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Emit {
    /// Dump the token stream and stop.
    Tokens,
    /// Dump the parsed statements and stop.
    Ast,
    /// Evaluate and print the final value (the default).
    #[default]
    Value,
}

/// Configuration for one interpreter invocation.
#[derive(Debug, Default)]
pub struct Config {
    /// Source file to run.
    pub input: Option<PathBuf>,
    /// Stage to emit.
    pub emit: Emit,
    /// Verbose phase logging.
    pub verbose: bool,
}

/// Errors that fail a driver run.
#[derive(Debug, Error)]
pub enum DriverError {
    /// The source file could not be read.
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No input file was configured.
    #[error("no input file")]
    NoInput,

    /// One or more parse errors; the message is the rendered
    /// diagnostics.
    #[error("{0}")]
    Parse(String),

    /// Evaluation produced an error value; the message is the error's
    /// text.
    #[error("{0}")]
    Eval(String),
}

/// State for one interpreter invocation.
pub struct Session {
    pub config: Config,
    /// Collected diagnostics across the run.
    pub handler: Handler,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            handler: Handler::new(),
        }
    }

    /// Runs the configured input file. Returns the text to print to
    /// stdout.
    pub fn run(&mut self) -> Result<String, DriverError> {
        let path = self.config.input.clone().ok_or(DriverError::NoInput)?;

        debug!(path = %path.display(), "reading source");
        let source = std::fs::read_to_string(&path)
            .map_err(|source| DriverError::Io { path, source })?;

        self.run_source(&source)
    }

    /// Runs source text through the pipeline.
    pub fn run_source(&mut self, source: &str) -> Result<String, DriverError> {
        if self.config.emit == Emit::Tokens {
            debug!("lexing only");
            return Ok(self.dump_tokens(source));
        }

        debug!("parsing");
        let program = Parser::new(Lexer::new(source)).parse();
        for diagnostic in &program.parse_errors {
            self.handler.emit(diagnostic.clone());
        }
        if !program.parse_errors.is_empty() {
            let rendered: Vec<String> =
                program.parse_errors.iter().map(|d| d.to_string()).collect();
            return Err(DriverError::Parse(rendered.join("\n")));
        }

        if self.config.emit == Emit::Ast {
            return Ok(format!("{:#?}", program.statements));
        }

        debug!("evaluating");
        let env = Environment::new();
        let mut evaluator = Evaluator::new();
        let result = evaluator.eval_program(&program, &env);
        if result.is_error() {
            return Err(DriverError::Eval(result.inspect()));
        }

        Ok(result.inspect())
    }

    fn dump_tokens(&self, source: &str) -> String {
        let mut lexer = Lexer::new(source);
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token();
            let done = token.is(TokenKind::Eof);
            tokens.push(token);
            if done {
                break;
            }
        }
        format!("{tokens:#?}")
    }
}
