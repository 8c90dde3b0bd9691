//! Number literal lexing.
//!
//! This module handles lexing of integer and floating-point literals,
//! including the range disambiguation: a digit run followed by `..` is
//! an integer, never the whole part of a float.

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a number literal.
    ///
    /// A digit run produces an INT unless it is followed by `.` and
    /// another digit, in which case the fraction is consumed and a
    /// FLOAT is produced. Disambiguation needs two characters of
    /// lookahead:
    ///
    /// - `1..5` → INT `1` (the `..` is lexed as the range operator)
    /// - `1.5`  → FLOAT `1.5`
    /// - `1.x`  → ILLEGAL (a lone dot after a digit run)
    pub(crate) fn lex_number(&mut self) -> Token {
        while self.cursor.current_char().is_ascii_digit() {
            self.cursor.advance();
        }

        if self.cursor.current_char() == '.' {
            let after_dot = self.cursor.peek_char(1);
            if after_dot.is_ascii_digit() {
                self.cursor.advance();
                while self.cursor.current_char().is_ascii_digit() {
                    self.cursor.advance();
                }
                return self.make_token(TokenKind::Float);
            }
            if after_dot != '.' {
                self.cursor.advance();
                return self.make_token(TokenKind::Illegal);
            }
        }

        self.make_token(TokenKind::Int)
    }
}
