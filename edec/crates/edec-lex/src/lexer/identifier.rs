//! Identifier and keyword lexing.

use crate::lexer::core::is_ident_char;
use crate::token::{lookup_ident, Token};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier or keyword.
    ///
    /// Identifier characters are ASCII letters and underscores. After
    /// reading the run, the keyword table decides the token kind.
    pub(crate) fn lex_identifier(&mut self) -> Token {
        while is_ident_char(self.cursor.current_char()) {
            self.cursor.advance();
        }

        let text = self.cursor.slice_from(self.token_start);
        self.make_token(lookup_ident(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenKind;

    fn lex_one(source: &str) -> Token {
        let mut lexer = crate::Lexer::new(source);
        lexer.next_token()
    }

    #[test]
    fn test_simple_identifier() {
        let tok = lex_one("letter");
        assert_eq!(tok.kind, TokenKind::Ident);
        assert_eq!(tok.literal, "letter");
    }

    #[test]
    fn test_underscore_identifier() {
        let tok = lex_one("_foo_bar");
        assert_eq!(tok.kind, TokenKind::Ident);
        assert_eq!(tok.literal, "_foo_bar");
    }

    #[test]
    fn test_keyword_let() {
        assert_eq!(lex_one("let").kind, TokenKind::Let);
    }

    #[test]
    fn test_keyword_func() {
        assert_eq!(lex_one("func").kind, TokenKind::Func);
    }

    #[test]
    fn test_keyword_return() {
        let tok = lex_one("return");
        assert_eq!(tok.kind, TokenKind::Return);
        assert_eq!(tok.literal, "return");
    }

    #[test]
    fn test_match_keywords() {
        assert_eq!(lex_one("match").kind, TokenKind::Match);
        assert_eq!(lex_one("case").kind, TokenKind::Case);
        assert_eq!(lex_one("default").kind, TokenKind::Default);
    }

    #[test]
    fn test_booleans() {
        assert_eq!(lex_one("true").kind, TokenKind::True);
        assert_eq!(lex_one("false").kind, TokenKind::False);
    }

    #[test]
    fn test_index_lexes_as_ident() {
        let tok = lex_one("index");
        assert_eq!(tok.kind, TokenKind::Ident);
        assert_eq!(tok.literal, "index");
    }
}
