//! String literal lexing.
//!
//! Two string forms exist: `"…"` strings, which must close on the same
//! line, and `` `…` `` backtick strings, which may span multiple lines.
//! Neither form processes escape sequences; the body is captured
//! verbatim (which is why `print` treats the two-character literal
//! `\n` specially). Non-ASCII bytes are allowed inside string bodies.

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a `"…"` string literal.
    ///
    /// The token literal is the body without the surrounding quotes.
    /// Hitting a newline or end of input before the closing quote
    /// produces an ILLEGAL token.
    pub(crate) fn lex_string(&mut self) -> Token {
        self.cursor.advance(); // opening quote
        let body_start = self.cursor.position();

        loop {
            match self.cursor.current_char() {
                '"' => {
                    let body = self.cursor.slice_from(body_start).to_string();
                    self.cursor.advance(); // closing quote
                    return self.make_token_with(TokenKind::Str, body);
                },
                '\n' | '\0' => {
                    return self.make_token(TokenKind::Illegal);
                },
                _ => self.cursor.advance(),
            }
        }
    }

    /// Lexes a `` `…` `` backtick string literal.
    ///
    /// Unlike quoted strings, the body may contain newlines. An
    /// unterminated backtick string produces an ILLEGAL token.
    pub(crate) fn lex_raw_string(&mut self) -> Token {
        self.cursor.advance(); // opening backtick
        let body_start = self.cursor.position();

        loop {
            match self.cursor.current_char() {
                '`' => {
                    let body = self.cursor.slice_from(body_start).to_string();
                    self.cursor.advance(); // closing backtick
                    return self.make_token_with(TokenKind::Str, body);
                },
                '\0' => {
                    return self.make_token(TokenKind::Illegal);
                },
                _ => self.cursor.advance(),
            }
        }
    }
}
