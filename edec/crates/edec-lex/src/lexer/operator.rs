//! Operator and punctuation lexing.
//!
//! This module handles lexing of multi-character operators. Longest
//! match wins at every step; the single-character fallback is produced
//! only when no two-character operator applies.

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes equals or equals-equals.
    ///
    /// Handles: `=`, `==`
    pub(crate) fn lex_equals(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            self.make_token(TokenKind::Eq)
        } else {
            self.make_token(TokenKind::Assign)
        }
    }

    /// Lexes plus, increment, or plus-equals.
    ///
    /// Handles: `+`, `++`, `+=`
    pub(crate) fn lex_plus(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('+') {
            self.make_token(TokenKind::Inc)
        } else if self.cursor.match_char('=') {
            self.make_token(TokenKind::PlusEq)
        } else {
            self.make_token(TokenKind::Plus)
        }
    }

    /// Lexes minus, decrement, or minus-equals.
    ///
    /// Handles: `-`, `--`, `-=`
    pub(crate) fn lex_minus(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('-') {
            self.make_token(TokenKind::Dec)
        } else if self.cursor.match_char('=') {
            self.make_token(TokenKind::MinusEq)
        } else {
            self.make_token(TokenKind::Minus)
        }
    }

    /// Lexes less-than, the return arrow, or less-equals.
    ///
    /// Handles: `<`, `<-`, `<=`
    ///
    /// `<-` is the return arrow: it produces the same token kind as the
    /// `return` keyword, with `<-` as its literal.
    pub(crate) fn lex_less(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('-') {
            self.make_token(TokenKind::Return)
        } else if self.cursor.match_char('=') {
            self.make_token(TokenKind::LtEq)
        } else {
            self.make_token(TokenKind::Lt)
        }
    }

    /// Lexes greater-than or greater-equals.
    ///
    /// Handles: `>`, `>=`
    pub(crate) fn lex_greater(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            self.make_token(TokenKind::GtEq)
        } else {
            self.make_token(TokenKind::Gt)
        }
    }

    /// Lexes bang or not-equals.
    ///
    /// Handles: `!`, `!=`
    pub(crate) fn lex_bang(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            self.make_token(TokenKind::NotEq)
        } else {
            self.make_token(TokenKind::Bang)
        }
    }

    /// Lexes logical and. A lone `&` is illegal.
    pub(crate) fn lex_ampersand(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('&') {
            self.make_token(TokenKind::AndAnd)
        } else {
            self.make_token(TokenKind::Illegal)
        }
    }

    /// Lexes logical or. A lone `|` is illegal.
    pub(crate) fn lex_pipe(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('|') {
            self.make_token(TokenKind::OrOr)
        } else {
            self.make_token(TokenKind::Illegal)
        }
    }

    /// Lexes slash or the start of a line comment.
    ///
    /// Handles: `/`, `// …`
    pub(crate) fn lex_slash(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.current_char() == '/' {
            self.cursor.advance();
            self.lex_line_comment()
        } else {
            self.make_token(TokenKind::Slash)
        }
    }

    /// Lexes dot or the range operator.
    ///
    /// Handles: `.`, `..`
    pub(crate) fn lex_dot(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('.') {
            self.make_token(TokenKind::DotDot)
        } else {
            self.make_token(TokenKind::Dot)
        }
    }
}
