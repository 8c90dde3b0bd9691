//! Expression parsing - prefix dispatch, operators, calls, indexing,
//! method expressions, and `match`.

use edec_lex::TokenKind;

use crate::ast::*;
use crate::{Parser, Precedence};

impl<'a> Parser<'a> {
    /// Dispatch on the current token to a prefix parse function.
    pub(crate) fn parse_prefix(&mut self) -> Option<Expr> {
        match self.curr().kind {
            TokenKind::Ident => Some(self.parse_identifier()),
            TokenKind::Int => self.parse_integer(),
            TokenKind::Float => self.parse_float(),
            TokenKind::Str => Some(self.parse_string()),
            TokenKind::True | TokenKind::False => Some(self.parse_boolean()),
            TokenKind::Bang | TokenKind::Minus | TokenKind::Plus => self.parse_prefix_expr(),
            TokenKind::LParen => self.parse_grouped(),
            TokenKind::LBracket => self.parse_array_literal(),
            TokenKind::LBrace => self.parse_brace_literal(),
            TokenKind::Func => self.parse_function_literal(),
            TokenKind::Match => self.parse_match_expr(),
            TokenKind::Return => self.parse_return_expr(),
            TokenKind::Illegal => {
                let literal = self.curr().literal.clone();
                self.error(format!("illegal token '{literal}'"));
                self.advance();
                None
            },
            kind => {
                self.error(format!("no prefix parse function for {kind} found"));
                None
            },
        }
    }

    pub(crate) fn parse_identifier(&mut self) -> Expr {
        let ident = Identifier {
            name: self.curr().literal.clone(),
            span: self.curr_span(),
        };
        self.advance();
        Expr::Identifier(ident)
    }

    /// `!x`, `-x`, `+x`
    fn parse_prefix_expr(&mut self) -> Option<Expr> {
        let span = self.curr_span();
        let operator = self.curr().literal.clone();
        self.advance();
        let right = self.parse_expr(Precedence::Prefix)?;
        Some(Expr::Prefix(PrefixExpr {
            operator,
            right: Box::new(right),
            span,
        }))
    }

    /// `left OP right`, left-associative.
    pub(crate) fn parse_infix(&mut self, left: Expr) -> Option<Expr> {
        let span = self.curr_span();
        let operator = self.curr().literal.clone();
        let precedence = crate::precedence_of(self.curr().kind);
        self.advance();

        match self.parse_expr(precedence) {
            Some(right) => Some(Expr::Infix(InfixExpr {
                operator,
                left: Box::new(left),
                right: Box::new(right),
                span,
            })),
            None => {
                self.error_at(
                    format!(
                        "invalid right expression '{}' for operator '{operator}'",
                        self.describe_curr()
                    ),
                    span,
                );
                None
            },
        }
    }

    /// `x++`, `x--`
    pub(crate) fn parse_postfix(&mut self, left: Expr) -> Expr {
        let span = self.curr_span();
        let operator = self.curr().literal.clone();
        self.advance();
        Expr::Postfix(PostfixExpr {
            operator,
            left: Box::new(left),
            span,
        })
    }

    /// `( EXPR )`
    fn parse_grouped(&mut self) -> Option<Expr> {
        self.advance(); // '('
        let expr = self.parse_expr(Precedence::Lowest)?;
        if !self.match_token(TokenKind::RParen) {
            self.error(format!(
                "expected closing parenthesis token ')', got '{}'",
                self.describe_curr()
            ));
            return None;
        }
        Some(expr)
    }

    /// `callee(a, b, …)`
    pub(crate) fn parse_call(&mut self, callee: Expr) -> Option<Expr> {
        let span = self.curr_span();
        self.advance(); // '('
        let args = self.parse_arguments(TokenKind::RParen)?;
        if !self.match_token(TokenKind::RParen) {
            self.error(format!(
                "expected closing parenthesis token ')', got '{}'",
                self.describe_curr()
            ));
            return None;
        }
        Some(Expr::Call(CallExpr {
            callee: Box::new(callee),
            args,
            span,
        }))
    }

    /// Comma-separated expressions up to (not consuming) `end`.
    /// Newlines around elements are not statement boundaries here.
    pub(crate) fn parse_arguments(&mut self, end: TokenKind) -> Option<Vec<Expr>> {
        let mut exprs = Vec::new();

        self.skip_newlines();
        if self.curr_is(end) {
            return Some(exprs);
        }

        loop {
            exprs.push(self.parse_expr(Precedence::Lowest)?);
            self.skip_newlines();
            if self.match_token(TokenKind::Comma) {
                self.skip_newlines();
                // tolerate a trailing comma before the closing token
                if self.curr_is(end) {
                    break;
                }
                continue;
            }
            break;
        }

        Some(exprs)
    }

    /// `left[index]`
    pub(crate) fn parse_index(&mut self, left: Expr) -> Option<Expr> {
        let span = self.curr_span();
        self.advance(); // '['
        let index = self.parse_expr(Precedence::Lowest)?;
        if !self.match_token(TokenKind::RBracket) {
            self.error(format!(
                "expected closing bracket token ']', got '{}'",
                self.describe_curr()
            ));
            return None;
        }
        Some(Expr::Index(IndexExpr {
            left: Box::new(left),
            index: Box::new(index),
            span,
        }))
    }

    /// `recv.method` / `recv.method(args)`
    ///
    /// A call after the method name belongs to the method expression,
    /// so `a.b(c)` is `Method(a, Call(b, c))` rather than a call whose
    /// callee is a method expression.
    pub(crate) fn parse_method(&mut self, object: Expr) -> Option<Expr> {
        let span = self.curr_span();
        self.advance(); // '.'

        if !self.curr_is(TokenKind::Ident) {
            self.error(format!(
                "expected token IDENT, got '{}'",
                self.describe_curr()
            ));
            return None;
        }
        let method_ident = self.parse_identifier();

        let method = if self.curr_is(TokenKind::LParen) {
            self.parse_call(method_ident)?
        } else {
            method_ident
        };

        Some(Expr::Method(MethodExpr {
            object: Box::new(object),
            method: Box::new(method),
            span,
        }))
    }

    /// `match SCRUT { case P : E … default : E }`
    fn parse_match_expr(&mut self) -> Option<Expr> {
        let span = self.curr_span();
        self.advance(); // match

        let scrutinee = self.parse_expr(Precedence::Lowest)?;
        self.expect(TokenKind::LBrace)?;
        self.eat_separators();

        let mut cases = Vec::new();
        let mut default = None;

        while self.curr_is(TokenKind::Case) {
            self.advance();
            let pattern = self.parse_expr(Precedence::Lowest)?;
            self.expect(TokenKind::Colon)?;
            let output = self.parse_expr(Precedence::Lowest)?;
            self.eat_separators();
            cases.push(MatchCase { pattern, output });
        }

        if self.curr_is(TokenKind::Default) {
            self.advance();
            self.expect(TokenKind::Colon)?;
            default = Some(Box::new(self.parse_expr(Precedence::Lowest)?));
            self.eat_separators();
        }

        if !self.match_token(TokenKind::RBrace) {
            self.error(format!(
                "expected closing brace token '}}', got '{}'",
                self.describe_curr()
            ));
            return None;
        }

        Some(Expr::Match(MatchExpr {
            scrutinee: Box::new(scrutinee),
            cases,
            default,
            span,
        }))
    }

    /// `return EXPR` / `<- EXPR`
    fn parse_return_expr(&mut self) -> Option<Expr> {
        let span = self.curr_span();
        self.advance(); // return / <-
        let value = self.parse_expr(Precedence::Lowest)?;
        Some(Expr::Return(ReturnExpr {
            value: Box::new(value),
            span,
        }))
    }
}
