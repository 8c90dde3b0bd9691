//! Line comment capture.
//!
//! Comments are tokens, not skipped trivia: the parser represents each
//! one as a comment statement that the evaluator ignores. A comment
//! body runs from after the `//` through the next `;` or newline
//! (whichever comes first), or to end of input.

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Captures a `//` line comment. The cursor is positioned just
    /// after the two slashes. The terminator is consumed but excluded
    /// from the token literal.
    pub(crate) fn lex_line_comment(&mut self) -> Token {
        let body_start = self.cursor.position();

        loop {
            match self.cursor.current_char() {
                ';' | '\n' => {
                    let body = self.cursor.slice_from(body_start).to_string();
                    self.cursor.advance(); // terminator
                    return self.make_token_with(TokenKind::Comment, body);
                },
                '\0' => {
                    let body = self.cursor.slice_from(body_start).to_string();
                    return self.make_token_with(TokenKind::Comment, body);
                },
                _ => self.cursor.advance(),
            }
        }
    }
}
