//! AST node definitions.
//!
//! The AST is pure data: statements and expressions as enums of
//! span-carrying structs. The only behavior nodes expose is their
//! source position (for diagnostics) and a kind name (for error
//! messages). The evaluator pattern-matches on the enums directly.

use edec_util::{Diagnostic, Span};

/// A parsed source file.
///
/// The parser always returns a `Program`; when `parse_errors` is
/// nonempty the program must not be evaluated.
#[derive(Clone, Debug, Default)]
pub struct Program {
    pub statements: Vec<Stmt>,
    pub parse_errors: Vec<Diagnostic>,
}

/// Statement nodes.
#[derive(Clone, Debug, PartialEq)]
pub enum Stmt {
    Let(LetStmt),
    Expression(ExpressionStmt),
    If(IfStmt),
    For(ForStmt),
    Reassign(ReassignStmt),
    Comment(CommentStmt),
    Import(ImportStmt),
}

impl Stmt {
    /// Source position of the statement's first token.
    pub fn span(&self) -> Span {
        match self {
            Stmt::Let(s) => s.span,
            Stmt::Expression(s) => s.span,
            Stmt::If(s) => s.span,
            Stmt::For(s) => s.span,
            Stmt::Reassign(s) => s.span,
            Stmt::Comment(s) => s.span,
            Stmt::Import(s) => s.span,
        }
    }
}

/// `let NAME [= EXPR]` — a declaration-only binding evaluates to nil.
#[derive(Clone, Debug, PartialEq)]
pub struct LetStmt {
    pub name: Identifier,
    pub value: Option<Expr>,
    pub span: Span,
}

/// A bare expression in statement position.
#[derive(Clone, Debug, PartialEq)]
pub struct ExpressionStmt {
    pub expr: Expr,
    pub span: Span,
}

/// `{ … }` — a statement sequence evaluated in a child environment.
#[derive(Clone, Debug, PartialEq)]
pub struct BlockStmt {
    pub statements: Vec<Stmt>,
    pub span: Span,
}

/// One arm of an if/else-if/else chain. `condition` is `None` for the
/// unconditional `else`.
#[derive(Clone, Debug, PartialEq)]
pub struct ConditionalStmt {
    pub condition: Option<Expr>,
    pub body: BlockStmt,
    pub span: Span,
}

/// `if (COND) BLOCK { else if (COND) BLOCK }* [ else BLOCK ]`
#[derive(Clone, Debug, PartialEq)]
pub struct IfStmt {
    pub consequence: ConditionalStmt,
    pub alternatives: Vec<ConditionalStmt>,
    pub span: Span,
}

/// `for VAR = range BOUNDARY BLOCK`
#[derive(Clone, Debug, PartialEq)]
pub struct ForStmt {
    pub variable: Identifier,
    pub boundary: Expr,
    pub body: BlockStmt,
    pub span: Span,
}

/// The left-hand side of a reassignment.
#[derive(Clone, Debug, PartialEq)]
pub enum AssignTarget {
    Ident(Identifier),
    Index(IndexExpr),
}

impl AssignTarget {
    pub fn span(&self) -> Span {
        match self {
            AssignTarget::Ident(ident) => ident.span,
            AssignTarget::Index(index) => index.span,
        }
    }
}

/// `NAME = EXPR` or `EXPR[IDX] = EXPR`; `+=`/`-=` desugar into this
/// with an infix right-hand side.
#[derive(Clone, Debug, PartialEq)]
pub struct ReassignStmt {
    pub target: AssignTarget,
    pub value: Expr,
    pub span: Span,
}

/// A `//` comment. Skipped by the evaluator.
#[derive(Clone, Debug, PartialEq)]
pub struct CommentStmt {
    pub text: String,
    pub span: Span,
}

/// `import NAME`
#[derive(Clone, Debug, PartialEq)]
pub struct ImportStmt {
    pub name: Identifier,
    pub span: Span,
}

/// Expression nodes.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Identifier(Identifier),
    Integer(IntegerLit),
    Float(FloatLit),
    Str(StringLit),
    Boolean(BooleanLit),
    Array(ArrayLit),
    RangeArray(RangeArrayLit),
    Hash(HashLit),
    Set(SetLit),
    Function(FunctionLit),
    Call(CallExpr),
    Index(IndexExpr),
    Method(MethodExpr),
    Prefix(PrefixExpr),
    Infix(InfixExpr),
    Postfix(PostfixExpr),
    Match(MatchExpr),
    Return(ReturnExpr),
}

impl Expr {
    /// Source position of the expression's first token.
    pub fn span(&self) -> Span {
        match self {
            Expr::Identifier(e) => e.span,
            Expr::Integer(e) => e.span,
            Expr::Float(e) => e.span,
            Expr::Str(e) => e.span,
            Expr::Boolean(e) => e.span,
            Expr::Array(e) => e.span,
            Expr::RangeArray(e) => e.span,
            Expr::Hash(e) => e.span,
            Expr::Set(e) => e.span,
            Expr::Function(e) => e.span,
            Expr::Call(e) => e.span,
            Expr::Index(e) => e.span,
            Expr::Method(e) => e.span,
            Expr::Prefix(e) => e.span,
            Expr::Infix(e) => e.span,
            Expr::Postfix(e) => e.span,
            Expr::Match(e) => e.span,
            Expr::Return(e) => e.span,
        }
    }

    /// Node kind name, used in parser diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Expr::Identifier(_) => "IDENT",
            Expr::Integer(_) => "INT",
            Expr::Float(_) => "FLOAT",
            Expr::Str(_) => "STRING",
            Expr::Boolean(_) => "BOOLEAN",
            Expr::Array(_) => "ARRAY",
            Expr::RangeArray(_) => "RANGE_ARRAY",
            Expr::Hash(_) => "HASH",
            Expr::Set(_) => "SET",
            Expr::Function(_) => "FUNCTION",
            Expr::Call(_) => "CALL",
            Expr::Index(_) => "INDEX",
            Expr::Method(_) => "METHOD",
            Expr::Prefix(_) => "PREFIX",
            Expr::Infix(_) => "INFIX",
            Expr::Postfix(_) => "POSTFIX",
            Expr::Match(_) => "MATCH",
            Expr::Return(_) => "RETURN",
        }
    }
}

/// A name reference.
#[derive(Clone, Debug, PartialEq)]
pub struct Identifier {
    pub name: String,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub struct IntegerLit {
    pub value: i64,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FloatLit {
    pub value: f64,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StringLit {
    pub value: String,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BooleanLit {
    pub value: bool,
    pub span: Span,
}

/// `[e1, e2, …]`
#[derive(Clone, Debug, PartialEq)]
pub struct ArrayLit {
    pub elements: Vec<Expr>,
    pub span: Span,
}

/// `[start..end]` — an inclusive integer range; endpoints are arbitrary
/// integer-producing expressions.
#[derive(Clone, Debug, PartialEq)]
pub struct RangeArrayLit {
    pub start: Box<Expr>,
    pub end: Box<Expr>,
    pub span: Span,
}

/// `{k1: v1, k2: v2}` — later duplicate keys win at parse time.
#[derive(Clone, Debug, PartialEq)]
pub struct HashLit {
    pub pairs: Vec<(Expr, Expr)>,
    pub span: Span,
}

/// `{e1, e2, …}` — distinguished from a hash by the absence of a `:`
/// after the first element.
#[derive(Clone, Debug, PartialEq)]
pub struct SetLit {
    pub elements: Vec<Expr>,
    pub span: Span,
}

/// `func(p1, p2) { … }`
#[derive(Clone, Debug, PartialEq)]
pub struct FunctionLit {
    pub params: Vec<Identifier>,
    pub body: BlockStmt,
    pub span: Span,
}

/// `callee(a1, a2, …)`
#[derive(Clone, Debug, PartialEq)]
pub struct CallExpr {
    pub callee: Box<Expr>,
    pub args: Vec<Expr>,
    pub span: Span,
}

/// `left[index]`
#[derive(Clone, Debug, PartialEq)]
pub struct IndexExpr {
    pub left: Box<Expr>,
    pub index: Box<Expr>,
    pub span: Span,
}

/// `recv.method` or `recv.method(args)`; `method` is an `Identifier`
/// or a `Call` whose callee is the method identifier.
#[derive(Clone, Debug, PartialEq)]
pub struct MethodExpr {
    pub object: Box<Expr>,
    pub method: Box<Expr>,
    pub span: Span,
}

/// `-x`, `!x`
#[derive(Clone, Debug, PartialEq)]
pub struct PrefixExpr {
    pub operator: String,
    pub right: Box<Expr>,
    pub span: Span,
}

/// `a + b`, `a == b`, …
#[derive(Clone, Debug, PartialEq)]
pub struct InfixExpr {
    pub operator: String,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
    pub span: Span,
}

/// `x++`, `x--`
#[derive(Clone, Debug, PartialEq)]
pub struct PostfixExpr {
    pub operator: String,
    pub left: Box<Expr>,
    pub span: Span,
}

/// One `case PATTERN : OUTPUT` arm.
#[derive(Clone, Debug, PartialEq)]
pub struct MatchCase {
    pub pattern: Expr,
    pub output: Expr,
}

/// `match SCRUT { case P : E … default : E }`
#[derive(Clone, Debug, PartialEq)]
pub struct MatchExpr {
    pub scrutinee: Box<Expr>,
    pub cases: Vec<MatchCase>,
    pub default: Option<Box<Expr>>,
    pub span: Span,
}

/// `return EXPR` / `<- EXPR`. Usable in statement position and as a
/// match-arm output; the evaluator wraps its value for unwinding.
#[derive(Clone, Debug, PartialEq)]
pub struct ReturnExpr {
    pub value: Box<Expr>,
    pub span: Span,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stmt_span() {
        let stmt = Stmt::Comment(CommentStmt {
            text: "hi".into(),
            span: Span::point(4, 2),
        });
        assert_eq!(stmt.span().line, 4);
    }

    #[test]
    fn test_expr_span_and_kind() {
        let expr = Expr::Integer(IntegerLit {
            value: 7,
            span: Span::point(1, 3),
        });
        assert_eq!(expr.span().column, 3);
        assert_eq!(expr.kind_name(), "INT");
    }

    #[test]
    fn test_assign_target_span() {
        let target = AssignTarget::Ident(Identifier {
            name: "x".into(),
            span: Span::point(2, 5),
        });
        assert_eq!(target.span().line, 2);
    }
}
