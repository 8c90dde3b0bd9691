//! edec-par - Pratt Parser (Syntactic Analyzer)
//!
//! Turns the token stream into a [`Program`] AST. Expression parsing is
//! Pratt-style (top-down operator precedence): every token kind has a
//! binding strength, `parse_expr(min)` reads a prefix expression and
//! then keeps folding infix/postfix operators while the current token
//! binds tighter than `min`.
//!
//! # Precedence (lowest to highest)
//!
//! | Level         | Operators                         |
//! |---------------|-----------------------------------|
//! | `Cond`        | `&&` `\|\|`                       |
//! | `Assign`      | `=` `+=` `-=`                     |
//! | `Equals`      | `==` `!=`                         |
//! | `LessGreater` | `<` `>` `<=` `>=` `..`            |
//! | `Sum`         | `+` `-` `++` `--` `%`             |
//! | `Product`     | `*` `/`                           |
//! | `Prefix`      | unary `-` `!`                     |
//! | `Call`        | `f(…)`                            |
//! | `Index`       | `a[…]`                            |
//! | `Highest`     | `a.method`                        |
//!
//! # Error recovery
//!
//! The parser keeps going after an error: a failed statement records a
//! positioned diagnostic, the cursor skips ahead to the next statement
//! separator, and parsing resumes. `parse()` therefore always returns a
//! `Program`, with every collected problem in `parse_errors`. Presence
//! of any parse error suppresses evaluation downstream.
//!
//! The parser owns the lexer and pulls tokens on demand (current +
//! one-token lookahead), so lexing and parsing are a single pass.

pub mod ast;
mod expr;
mod literal;
mod precedence;
mod stmt;

pub use ast::*;
pub use precedence::{precedence_of, Precedence};

use edec_lex::{Lexer, Token, TokenKind};
use edec_util::{Diagnostic, Span};

/// Pratt parser over a cooperative lexer.
pub struct Parser<'a> {
    lexer: Lexer<'a>,

    /// The token under consideration.
    curr: Token,

    /// One token of lookahead.
    peek: Token,

    /// Collected parse errors.
    errors: Vec<Diagnostic>,
}

impl<'a> Parser<'a> {
    /// Creates a parser and primes the current/lookahead tokens.
    pub fn new(mut lexer: Lexer<'a>) -> Self {
        let curr = lexer.next_token();
        let peek = lexer.next_token();
        Self {
            lexer,
            curr,
            peek,
            errors: Vec::new(),
        }
    }

    /// Convenience constructor from source text.
    pub fn from_source(source: &'a str) -> Self {
        Self::new(Lexer::new(source))
    }

    /// Parse a complete program.
    ///
    /// Always returns a [`Program`]; check `parse_errors` before
    /// evaluating.
    pub fn parse(mut self) -> Program {
        let mut statements = Vec::new();

        while !self.curr_is(TokenKind::Eof) {
            if self.curr_is(TokenKind::Semicolon) || self.curr_is(TokenKind::Newline) {
                self.advance();
                continue;
            }
            match self.parse_stmt() {
                Some(stmt) => statements.push(stmt),
                None => self.recover_to_sync_point(),
            }
        }

        Program {
            statements,
            parse_errors: self.errors,
        }
    }

    // ------------------------------------------------------------------
    // Token plumbing
    // ------------------------------------------------------------------

    pub(crate) fn advance(&mut self) {
        self.curr = std::mem::replace(&mut self.peek, self.lexer.next_token());
    }

    #[inline]
    pub(crate) fn curr_is(&self, kind: TokenKind) -> bool {
        self.curr.kind == kind
    }

    #[inline]
    pub(crate) fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    pub(crate) fn curr(&self) -> &Token {
        &self.curr
    }

    pub(crate) fn curr_span(&self) -> Span {
        self.curr.span
    }

    /// Consumes the current token if it matches.
    pub(crate) fn match_token(&mut self, kind: TokenKind) -> bool {
        if self.curr_is(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes the current token if it matches; otherwise records
    /// `expected token K, got 'X'` and returns `None`.
    pub(crate) fn expect(&mut self, kind: TokenKind) -> Option<Token> {
        if self.curr_is(kind) {
            let tok = self.curr.clone();
            self.advance();
            Some(tok)
        } else {
            self.error(format!(
                "expected token {}, got '{}'",
                kind,
                self.describe_curr()
            ));
            None
        }
    }

    /// Skips statement separators (`;` and newline).
    pub(crate) fn eat_separators(&mut self) {
        while self.curr_is(TokenKind::Semicolon) || self.curr_is(TokenKind::Newline) {
            self.advance();
        }
    }

    /// Skips newline tokens only (inside bracketed constructs, where a
    /// line break is not a statement boundary).
    pub(crate) fn skip_newlines(&mut self) {
        while self.curr_is(TokenKind::Newline) {
            self.advance();
        }
    }

    /// Human-readable spelling of the current token for diagnostics.
    pub(crate) fn describe_curr(&self) -> String {
        match self.curr.kind {
            TokenKind::Eof => "end of input".to_string(),
            TokenKind::Newline => "newline".to_string(),
            _ => self.curr.literal.clone(),
        }
    }

    // ------------------------------------------------------------------
    // Diagnostics
    // ------------------------------------------------------------------

    /// Records an error at the current token.
    pub(crate) fn error(&mut self, message: impl Into<String>) {
        let span = self.curr.span;
        self.error_at(message, span);
    }

    /// Records an error at an explicit span.
    pub(crate) fn error_at(&mut self, message: impl Into<String>, span: Span) {
        self.errors.push(Diagnostic::error(message, span));
    }

    /// Collected parse errors so far.
    pub fn errors(&self) -> &[Diagnostic] {
        &self.errors
    }

    /// Skips ahead to the next statement separator so parsing can
    /// resume and report further errors in the same pass.
    fn recover_to_sync_point(&mut self) {
        if !self.curr_is(TokenKind::Eof) {
            self.advance();
        }
        while !self.curr_is(TokenKind::Eof)
            && !self.curr_is(TokenKind::Semicolon)
            && !self.curr_is(TokenKind::Newline)
        {
            self.advance();
        }
    }

    // ------------------------------------------------------------------
    // Pratt core
    // ------------------------------------------------------------------

    /// The Pratt loop: read a prefix expression, then fold operators
    /// while the current token binds tighter than `min`.
    ///
    /// Returns `None` when no expression could be parsed; an error has
    /// been recorded by then, and the caller unwinds rather than
    /// spinning.
    pub(crate) fn parse_expr(&mut self, min: Precedence) -> Option<Expr> {
        let mut left = self.parse_prefix()?;

        loop {
            let prec = precedence_of(self.curr.kind);
            if min >= prec {
                break;
            }
            left = match self.curr.kind {
                TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Star
                | TokenKind::Slash
                | TokenKind::Percent
                | TokenKind::Eq
                | TokenKind::NotEq
                | TokenKind::Lt
                | TokenKind::Gt
                | TokenKind::LtEq
                | TokenKind::GtEq
                | TokenKind::AndAnd
                | TokenKind::OrOr => self.parse_infix(left)?,
                TokenKind::Inc | TokenKind::Dec => self.parse_postfix(left),
                TokenKind::LParen => self.parse_call(left)?,
                TokenKind::LBracket => self.parse_index(left)?,
                TokenKind::Dot => self.parse_method(left)?,
                // `=`, `+=`, `-=` and `..` are claimed by their
                // enclosing constructs (statements, array literals).
                _ => break,
            };
        }

        Some(left)
    }
}
