//! Operator precedence table for Pratt parsing.

use edec_lex::TokenKind;

/// Binding strength, lowest to highest. Higher compares greater.
///
/// `Dot` sits above `Call` so that `a.b(c)` parses the method before
/// the invocation; `..` shares the comparison level with the ordering
/// operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    Lowest,
    /// `&&` `||`
    Cond,
    /// `=` `+=` `-=`
    Assign,
    /// `==` `!=`
    Equals,
    /// `<` `>` `<=` `>=` `..`
    LessGreater,
    /// `+` `-` `++` `--` `%`
    Sum,
    /// `*` `/` and the `match` scrutinee
    Product,
    /// unary `-` `!`
    Prefix,
    /// `(`
    Call,
    /// `[`
    Index,
    /// `.`
    Highest,
}

/// Binding strength of a token when it appears in infix/postfix
/// position. Tokens that never bind return `Lowest`, which stops the
/// Pratt loop.
pub fn precedence_of(kind: TokenKind) -> Precedence {
    match kind {
        TokenKind::AndAnd | TokenKind::OrOr => Precedence::Cond,
        TokenKind::Assign | TokenKind::PlusEq | TokenKind::MinusEq => Precedence::Assign,
        TokenKind::Eq | TokenKind::NotEq => Precedence::Equals,
        TokenKind::Lt | TokenKind::Gt | TokenKind::LtEq | TokenKind::GtEq | TokenKind::DotDot => {
            Precedence::LessGreater
        },
        TokenKind::Plus
        | TokenKind::Minus
        | TokenKind::Inc
        | TokenKind::Dec
        | TokenKind::Percent => Precedence::Sum,
        TokenKind::Star | TokenKind::Slash | TokenKind::Match => Precedence::Product,
        TokenKind::LParen => Precedence::Call,
        TokenKind::LBracket => Precedence::Index,
        TokenKind::Dot => Precedence::Highest,
        _ => Precedence::Lowest,
    }
}
