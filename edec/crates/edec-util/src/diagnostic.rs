//! Diagnostic module - Error reporting infrastructure.
//!
//! This module provides types for creating, collecting, and rendering
//! interpreter diagnostics. Parse errors are collected on a [`Handler`]
//! so a single pass can surface several problems; each [`Diagnostic`]
//! renders in the interpreter's canonical block format:
//!
//! ```text
//!
//!     Error: <message>
//!     Line: <N>
//!     Column: <N>
//! ```
//!
//! # Examples
//!
//! ```
//! use edec_util::{Diagnostic, Handler, Span};
//!
//! let handler = Handler::new();
//! handler.emit(Diagnostic::error("unexpected token", Span::point(1, 4)));
//!
//! assert!(handler.has_errors());
//! assert_eq!(handler.diagnostics().len(), 1);
//! ```

use std::cell::RefCell;
use std::fmt;

use crate::Span;

/// Diagnostic severity level
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    /// An error that prevents evaluation
    Error,
    /// A warning that does not prevent evaluation
    Warning,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
        }
    }
}

/// A diagnostic message with severity and location
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
}

impl Diagnostic {
    /// Create an error diagnostic
    ///
    /// # Examples
    ///
    /// ```
    /// use edec_util::{Diagnostic, Level, Span};
    ///
    /// let diag = Diagnostic::error("unexpected token", Span::DUMMY);
    /// assert_eq!(diag.level, Level::Error);
    /// ```
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self {
            level: Level::Error,
            message: message.into(),
            span,
        }
    }

    /// Create a warning diagnostic
    pub fn warning(message: impl Into<String>, span: Span) -> Self {
        Self {
            level: Level::Warning,
            message: message.into(),
            span,
        }
    }
}

impl fmt::Display for Diagnostic {
    /// Renders the block format consumed by the CLI and by tests.
    ///
    /// The leading newline and tab indentation are part of the
    /// interpreter's output contract, not incidental formatting.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\n\tError: {}\n\tLine: {}\n\tColumn: {}\n\t",
            self.message, self.span.line, self.span.column
        )
    }
}

/// Collects diagnostics across a lex/parse/evaluate run.
///
/// Interior mutability keeps the handler shareable between pipeline
/// phases that only need to append.
#[derive(Debug, Default)]
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a diagnostic
    pub fn emit(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Report an error at a span
    ///
    /// # Examples
    ///
    /// ```
    /// use edec_util::{Handler, Span};
    ///
    /// let handler = Handler::new();
    /// handler.error("expected expression", Span::point(2, 1));
    /// assert!(handler.has_errors());
    /// ```
    pub fn error(&self, message: impl Into<String>, span: Span) {
        self.emit(Diagnostic::error(message, span));
    }

    /// Returns true if any error-level diagnostic was emitted
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .borrow()
            .iter()
            .any(|d| d.level == Level::Error)
    }

    /// Number of collected diagnostics
    pub fn len(&self) -> usize {
        self.diagnostics.borrow().len()
    }

    /// Returns true if no diagnostics were collected
    pub fn is_empty(&self) -> bool {
        self.diagnostics.borrow().is_empty()
    }

    /// Snapshot of the collected diagnostics
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Drain the collected diagnostics, leaving the handler empty
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.diagnostics.borrow_mut())
    }
}
