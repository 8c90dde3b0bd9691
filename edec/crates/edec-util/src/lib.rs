//! edec-util - Core Utilities and Foundation Types
//!
//! This crate provides the foundation types shared by every phase of the
//! ede interpreter:
//!
//! - [`Span`]: source locations (byte range plus 1-based line/column)
//! - [`Diagnostic`] / [`Handler`]: structured error reporting with the
//!   interpreter's canonical rendering
//!
//! Every token, AST node, and positioned runtime error carries a `Span`;
//! the parser and driver funnel problems through a `Handler` so that a
//! single run can report multiple diagnostics.

pub mod diagnostic;
pub mod span;

pub use diagnostic::{Diagnostic, Handler, Level};
pub use span::Span;
