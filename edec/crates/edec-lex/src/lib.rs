//! edec-lex - Lexical Analyzer (Lexer/Tokenizer)
//!
//! Transforms ede source text into a stream of positioned tokens, one
//! token per [`Lexer::next_token`] call. The lexer is cooperative: the
//! parser pulls tokens on demand, so lexing and parsing interleave over
//! a single pass.
//!
//! # Token categories
//!
//! | Category    | Examples                                             |
//! |-------------|------------------------------------------------------|
//! | Literals    | `42`, `1.5`, `"text"`, `` `raw` ``, `true`, `false`  |
//! | Identifiers | `foo`, `_tmp`                                        |
//! | Keywords    | `let if else func for range return import match case default` |
//! | Operators   | `+ - * / % = == != < > <= >= && \|\| ! ++ -- += -= <-` |
//! | Delimiters  | `( ) { } [ ] , ; : .` and newline                    |
//! | Ranges      | `..`                                                 |
//! | Comments    | `// body captured through ; or newline`              |
//!
//! Two properties distinguish this lexer from a trivia-skipping scanner:
//! newlines are emitted as tokens because they terminate statements, and
//! comments are captured as tokens so the parser can represent them as
//! statements.
//!
//! Contextual disambiguation needs two characters of lookahead: `1..5`
//! must lex as `INT(1) .. INT(5)` and never consume the first dot as the
//! start of a float, and `<-` is the return arrow rather than a
//! less-than.
//!
//! Lexing is total. Invalid bytes, lone `&`/`|`, and unterminated
//! strings produce [`TokenKind::Illegal`] tokens that the parser turns
//! into positioned diagnostics; every stream ends with an `Eof` token.

pub mod cursor;
mod lexer;
pub mod token;

pub use cursor::Cursor;
pub use lexer::Lexer;
pub use token::{is_reserved_word, lookup_ident, Token, TokenKind};
