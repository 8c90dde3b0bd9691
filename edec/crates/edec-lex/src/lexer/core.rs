//! Core lexer implementation.
//!
//! This module contains the main Lexer struct and its dispatch loop.

use edec_util::Span;

use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};

/// Lexer for the ede language.
///
/// The lexer transforms source text into a stream of positioned tokens.
/// Whitespace (space, tab) is skipped; newlines are emitted as tokens
/// because they terminate statements; comments are captured as tokens.
///
/// Tokens are produced one at a time through [`Lexer::next_token`], so
/// the parser drives the lexer cooperatively.
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Starting byte offset of the current token.
    pub(crate) token_start: usize,

    /// Line number where the current token starts (1-based).
    token_start_line: u32,

    /// Column number where the current token starts (1-based).
    token_start_column: u32,
}

/// Returns true for bytes that may appear in an identifier.
#[inline]
pub(crate) fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
        }
    }

    /// Returns the next token from the source code.
    ///
    /// This is the main entry point for tokenization. It skips
    /// horizontal whitespace, then dispatches on the current character.
    /// Returns `Token` with kind `Eof` once the input is exhausted (and
    /// on every call thereafter).
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();

        if self.cursor.is_at_end() {
            return Token::eof(self.token_span());
        }

        match self.cursor.current_char() {
            '\n' => {
                self.cursor.advance();
                self.make_token(TokenKind::Newline)
            },
            '(' => {
                self.cursor.advance();
                self.make_token(TokenKind::LParen)
            },
            ')' => {
                self.cursor.advance();
                self.make_token(TokenKind::RParen)
            },
            '{' => {
                self.cursor.advance();
                self.make_token(TokenKind::LBrace)
            },
            '}' => {
                self.cursor.advance();
                self.make_token(TokenKind::RBrace)
            },
            '[' => {
                self.cursor.advance();
                self.make_token(TokenKind::LBracket)
            },
            ']' => {
                self.cursor.advance();
                self.make_token(TokenKind::RBracket)
            },
            ',' => {
                self.cursor.advance();
                self.make_token(TokenKind::Comma)
            },
            ';' => {
                self.cursor.advance();
                self.make_token(TokenKind::Semicolon)
            },
            ':' => {
                self.cursor.advance();
                self.make_token(TokenKind::Colon)
            },
            '*' => {
                self.cursor.advance();
                self.make_token(TokenKind::Star)
            },
            '%' => {
                self.cursor.advance();
                self.make_token(TokenKind::Percent)
            },
            '=' => self.lex_equals(),
            '+' => self.lex_plus(),
            '-' => self.lex_minus(),
            '<' => self.lex_less(),
            '>' => self.lex_greater(),
            '!' => self.lex_bang(),
            '&' => self.lex_ampersand(),
            '|' => self.lex_pipe(),
            '/' => self.lex_slash(),
            '.' => self.lex_dot(),
            '"' => self.lex_string(),
            '`' => self.lex_raw_string(),
            c if is_ident_char(c) => self.lex_identifier(),
            c if c.is_ascii_digit() => self.lex_number(),
            _ => {
                self.cursor.advance();
                self.make_token(TokenKind::Illegal)
            },
        }
    }

    /// Skips horizontal whitespace (space and tab).
    ///
    /// Newlines are tokens, so they are deliberately not skipped here.
    fn skip_whitespace(&mut self) {
        loop {
            match self.cursor.current_char() {
                ' ' | '\t' | '\r' => self.cursor.advance(),
                _ => break,
            }
        }
    }

    /// Builds a token whose literal is the slice consumed since
    /// `token_start`.
    pub(crate) fn make_token(&self, kind: TokenKind) -> Token {
        let literal = self.cursor.slice_from(self.token_start);
        Token::new(kind, literal, self.token_span())
    }

    /// Builds a token with an explicit literal (used by string and
    /// comment lexing, where the literal excludes the delimiters).
    pub(crate) fn make_token_with(&self, kind: TokenKind, literal: impl Into<String>) -> Token {
        Token::new(kind, literal, self.token_span())
    }

    /// The span of the token currently being lexed.
    pub(crate) fn token_span(&self) -> Span {
        Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        )
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        let mut lexer = Lexer::new(source);
        let mut out = Vec::new();
        loop {
            let tok = lexer.next_token();
            let kind = tok.kind;
            out.push(kind);
            if kind == TokenKind::Eof {
                break;
            }
        }
        out
    }

    fn literals(source: &str) -> Vec<(TokenKind, String)> {
        let mut lexer = Lexer::new(source);
        let mut out = Vec::new();
        loop {
            let tok = lexer.next_token();
            if tok.kind == TokenKind::Eof {
                break;
            }
            out.push((tok.kind, tok.literal));
        }
        out
    }

    #[test]
    fn test_let_statement() {
        use TokenKind::*;
        assert_eq!(
            kinds("let foo = 42;"),
            vec![Let, Ident, Assign, Int, Semicolon, Eof]
        );
    }

    #[test]
    fn test_full_token_stream() {
        use TokenKind::*;
        let source = "let add = func(x, y) { <- x + y; };";
        assert_eq!(
            kinds(source),
            vec![
                Let, Ident, Assign, Func, LParen, Ident, Comma, Ident, RParen, LBrace, Return,
                Ident, Plus, Ident, Semicolon, RBrace, Semicolon, Eof
            ]
        );
    }

    #[test]
    fn test_newline_is_a_token() {
        use TokenKind::*;
        assert_eq!(kinds("1\n2"), vec![Int, Newline, Int, Eof]);
    }

    #[test]
    fn test_whitespace_skipped() {
        use TokenKind::*;
        assert_eq!(kinds("  \t 1 \t "), vec![Int, Eof]);
    }

    #[test]
    fn test_positions() {
        let mut lexer = Lexer::new("let x\nx = 1");
        let tok = lexer.next_token();
        assert_eq!((tok.span.line, tok.span.column), (1, 1));
        let tok = lexer.next_token();
        assert_eq!((tok.span.line, tok.span.column), (1, 5));
        let tok = lexer.next_token(); // newline
        assert_eq!(tok.kind, TokenKind::Newline);
        let tok = lexer.next_token();
        assert_eq!((tok.span.line, tok.span.column), (2, 1));
    }

    #[test]
    fn test_range_vs_float() {
        use TokenKind::*;
        assert_eq!(
            literals("[1..10]"),
            vec![
                (LBracket, "[".into()),
                (Int, "1".into()),
                (DotDot, "..".into()),
                (Int, "10".into()),
                (RBracket, "]".into()),
            ]
        );
        assert_eq!(
            literals("1.5"),
            vec![(Float, "1.5".into())]
        );
    }

    #[test]
    fn test_return_arrow_and_keyword() {
        let toks = literals("<- 1; return 2");
        assert_eq!(toks[0], (TokenKind::Return, "<-".into()));
        assert_eq!(toks[3], (TokenKind::Return, "return".into()));
    }

    #[test]
    fn test_eof_is_sticky() {
        let mut lexer = Lexer::new("");
        assert_eq!(lexer.next_token().kind, TokenKind::Eof);
        assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    }

    #[test]
    fn test_unknown_byte_is_illegal() {
        use TokenKind::*;
        assert_eq!(kinds("1 @ 2"), vec![Int, Illegal, Int, Eof]);
    }

    #[test]
    fn test_operators_stream() {
        use TokenKind::*;
        assert_eq!(
            kinds("== != <= >= && || ++ -- += -= % . .."),
            vec![
                Eq, NotEq, LtEq, GtEq, AndAnd, OrOr, Inc, Dec, PlusEq, MinusEq, Percent, Dot,
                DotDot, Eof
            ]
        );
    }
}
