//! Token definitions.
//!
//! This module defines the token kinds produced by the lexer, the
//! positioned [`Token`] struct, and the process-wide keyword table.

use std::fmt;

use edec_util::Span;
use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

/// The identifier that is automatically bound to the element position
/// inside loops and inside `map`/`filter`/`find` callbacks.
pub const INDEX_IDENT: &str = "index";

/// The identifier that is automatically bound inside `match` arms when
/// the scrutinee evaluated to an error.
pub const ERROR_IDENT: &str = "error";

/// Kinds of tokens produced by the lexer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A byte sequence the lexer could not make sense of
    Illegal,
    /// End of input
    Eof,

    // Identifiers and literals
    Ident,
    Int,
    Float,
    Str,

    // Operators
    Assign,
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Bang,
    Eq,
    NotEq,
    Lt,
    Gt,
    LtEq,
    GtEq,
    AndAnd,
    OrOr,
    Inc,
    Dec,
    PlusEq,
    MinusEq,

    // Delimiters
    Comma,
    Semicolon,
    Newline,
    Colon,
    Dot,
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,

    /// The range operator `..`
    DotDot,
    /// A `//` line comment with its body captured
    Comment,

    // Keywords
    Let,
    If,
    Else,
    Func,
    For,
    Range,
    /// Both the `return` keyword and the `<-` arrow
    Return,
    Import,
    Match,
    Case,
    Default,
    True,
    False,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Eof => "EOF",
            TokenKind::Ident => "IDENT",
            TokenKind::Int => "INT",
            TokenKind::Float => "FLOAT",
            TokenKind::Str => "STRING",
            TokenKind::Assign => "=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Percent => "%",
            TokenKind::Bang => "!",
            TokenKind::Eq => "==",
            TokenKind::NotEq => "!=",
            TokenKind::Lt => "<",
            TokenKind::Gt => ">",
            TokenKind::LtEq => "<=",
            TokenKind::GtEq => ">=",
            TokenKind::AndAnd => "&&",
            TokenKind::OrOr => "||",
            TokenKind::Inc => "++",
            TokenKind::Dec => "--",
            TokenKind::PlusEq => "+=",
            TokenKind::MinusEq => "-=",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::Newline => "NEWLINE",
            TokenKind::Colon => ":",
            TokenKind::Dot => ".",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::DotDot => "..",
            TokenKind::Comment => "COMMENT",
            TokenKind::Let => "let",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::Func => "func",
            TokenKind::For => "for",
            TokenKind::Range => "range",
            TokenKind::Return => "return",
            TokenKind::Import => "import",
            TokenKind::Match => "match",
            TokenKind::Case => "case",
            TokenKind::Default => "default",
            TokenKind::True => "true",
            TokenKind::False => "false",
        };
        f.write_str(text)
    }
}

/// A lexed token: kind, source text, and position.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            literal: literal.into(),
            span,
        }
    }

    /// End-of-input token at the given position.
    pub fn eof(span: Span) -> Self {
        Self::new(TokenKind::Eof, "", span)
    }

    #[inline]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

/// Process-wide keyword table, populated once.
///
/// `index` and `error` map to `Ident` rather than to keyword kinds: they
/// parse as ordinary identifiers but are reserved as assignment targets
/// because the evaluator binds them implicitly.
static KEYWORDS: Lazy<FxHashMap<&'static str, TokenKind>> = Lazy::new(|| {
    let mut m = FxHashMap::default();
    m.insert("let", TokenKind::Let);
    m.insert("if", TokenKind::If);
    m.insert("else", TokenKind::Else);
    m.insert("func", TokenKind::Func);
    m.insert("for", TokenKind::For);
    m.insert("range", TokenKind::Range);
    m.insert("return", TokenKind::Return);
    m.insert("import", TokenKind::Import);
    m.insert("match", TokenKind::Match);
    m.insert("case", TokenKind::Case);
    m.insert("default", TokenKind::Default);
    m.insert("true", TokenKind::True);
    m.insert("false", TokenKind::False);
    m.insert(INDEX_IDENT, TokenKind::Ident);
    m.insert(ERROR_IDENT, TokenKind::Ident);
    m
});

/// Looks up an identifier in the keyword table.
///
/// Returns the keyword kind for reserved words, `TokenKind::Ident`
/// otherwise.
///
/// # Examples
///
/// ```
/// use edec_lex::{lookup_ident, TokenKind};
///
/// assert_eq!(lookup_ident("let"), TokenKind::Let);
/// assert_eq!(lookup_ident("index"), TokenKind::Ident);
/// assert_eq!(lookup_ident("foo"), TokenKind::Ident);
/// ```
pub fn lookup_ident(ident: &str) -> TokenKind {
    KEYWORDS.get(ident).copied().unwrap_or(TokenKind::Ident)
}

/// Returns true if the identifier is reserved and may not be used as an
/// assignment target.
pub fn is_reserved_word(ident: &str) -> bool {
    KEYWORDS.contains_key(ident)
}
