//! Statement parsing - let, if, for, import, reassignment, comments.

use edec_lex::{is_reserved_word, TokenKind};

use crate::ast::*;
use crate::{Parser, Precedence};

/// Token kinds that can begin an expression.
fn can_start_expression(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Ident
            | TokenKind::Int
            | TokenKind::Float
            | TokenKind::Str
            | TokenKind::True
            | TokenKind::False
            | TokenKind::Func
            | TokenKind::Bang
            | TokenKind::Minus
            | TokenKind::Plus
            | TokenKind::LParen
            | TokenKind::LBracket
            | TokenKind::LBrace
            | TokenKind::Match
            | TokenKind::Return
    )
}

impl<'a> Parser<'a> {
    /// Parse a single statement. The cursor ends on the first token
    /// after the statement; `None` means an error was recorded.
    pub(crate) fn parse_stmt(&mut self) -> Option<Stmt> {
        match self.curr().kind {
            TokenKind::Let => self.parse_let_stmt(),
            TokenKind::If => self.parse_if_stmt(),
            TokenKind::For => self.parse_for_stmt(),
            TokenKind::Import => self.parse_import_stmt(),
            TokenKind::Comment => self.parse_comment_stmt(),
            TokenKind::Illegal => {
                let literal = self.curr().literal.clone();
                self.error(format!("illegal token '{literal}'"));
                self.advance();
                None
            },
            kind if can_start_expression(kind) => self.parse_expression_stmt(),
            _ => {
                self.error(format!(
                    "expected start of expression, found '{}'",
                    self.describe_curr()
                ));
                None
            },
        }
    }

    /// `let IDENT [= EXPR]`
    fn parse_let_stmt(&mut self) -> Option<Stmt> {
        let span = self.curr_span();
        self.advance(); // let

        let name = self.parse_binding_name()?;

        let value = if self.match_token(TokenKind::Assign) {
            Some(self.parse_expr(Precedence::Lowest)?)
        } else {
            None
        };

        Some(Stmt::Let(LetStmt { name, value, span }))
    }

    /// Reads an identifier that is about to be bound, rejecting
    /// reserved words.
    fn parse_binding_name(&mut self) -> Option<Identifier> {
        if self.curr_is(TokenKind::Ident) {
            let name = self.curr().literal.clone();
            let span = self.curr_span();
            if is_reserved_word(&name) {
                self.error(format!("cannot assign to reserved keyword '{name}'"));
                return None;
            }
            self.advance();
            Some(Identifier { name, span })
        } else if is_reserved_word(&self.curr().literal) {
            let literal = self.curr().literal.clone();
            self.error(format!("cannot assign to reserved keyword '{literal}'"));
            None
        } else {
            self.error(format!(
                "expected identifier, got '{}'",
                self.describe_curr()
            ));
            None
        }
    }

    /// `if (COND) BLOCK { else if (COND) BLOCK }* [ else BLOCK ]`
    fn parse_if_stmt(&mut self) -> Option<Stmt> {
        let span = self.curr_span();
        self.advance(); // if

        let condition = self.parse_parenthesized_condition()?;
        let body = self.parse_block()?;
        let consequence = ConditionalStmt {
            condition: Some(condition),
            body,
            span,
        };

        let mut alternatives = Vec::new();
        loop {
            // an `else` may sit on the line after the closing brace
            while self.curr_is(TokenKind::Newline) && self.peek_is(TokenKind::Else) {
                self.advance();
            }
            if !self.curr_is(TokenKind::Else) {
                break;
            }
            let alt_span = self.curr_span();
            self.advance(); // else

            if self.curr_is(TokenKind::If) {
                self.advance();
                let condition = self.parse_parenthesized_condition()?;
                let body = self.parse_block()?;
                alternatives.push(ConditionalStmt {
                    condition: Some(condition),
                    body,
                    span: alt_span,
                });
            } else {
                let body = self.parse_block()?;
                alternatives.push(ConditionalStmt {
                    condition: None,
                    body,
                    span: alt_span,
                });
                // a terminal else ends the chain; a trailing `else` is
                // rejected by the statement loop
                break;
            }
        }

        Some(Stmt::If(IfStmt {
            consequence,
            alternatives,
            span,
        }))
    }

    fn parse_parenthesized_condition(&mut self) -> Option<Expr> {
        self.expect(TokenKind::LParen)?;
        let condition = self.parse_expr(Precedence::Lowest)?;
        if !self.match_token(TokenKind::RParen) {
            self.error(format!(
                "expected closing parenthesis token ')', got '{}'",
                self.describe_curr()
            ));
            return None;
        }
        Some(condition)
    }

    /// `{ stmt* }` — the cursor must be on the opening brace.
    pub(crate) fn parse_block(&mut self) -> Option<BlockStmt> {
        let span = self.curr_span();
        self.expect(TokenKind::LBrace)?;

        let mut statements = Vec::new();
        loop {
            self.eat_separators();
            if self.curr_is(TokenKind::RBrace) || self.curr_is(TokenKind::Eof) {
                break;
            }
            match self.parse_stmt() {
                Some(stmt) => statements.push(stmt),
                None => self.recover_in_block(),
            }
        }

        if !self.match_token(TokenKind::RBrace) {
            self.error(format!(
                "expected closing brace token '}}', got '{}'",
                self.describe_curr()
            ));
            return None;
        }

        Some(BlockStmt { statements, span })
    }

    /// Skips to the next statement separator or block boundary after an
    /// error inside a block.
    fn recover_in_block(&mut self) {
        while !self.curr_is(TokenKind::Eof)
            && !self.curr_is(TokenKind::Semicolon)
            && !self.curr_is(TokenKind::Newline)
            && !self.curr_is(TokenKind::RBrace)
        {
            self.advance();
        }
    }

    /// `for IDENT = range EXPR BLOCK`
    fn parse_for_stmt(&mut self) -> Option<Stmt> {
        let span = self.curr_span();
        self.advance(); // for

        let variable = self.parse_binding_name()?;
        self.expect(TokenKind::Assign)?;
        self.expect(TokenKind::Range)?;

        let boundary = self.parse_expr(Precedence::Lowest)?;
        let body = self.parse_block()?;

        Some(Stmt::For(ForStmt {
            variable,
            boundary,
            body,
            span,
        }))
    }

    /// `import IDENT`
    fn parse_import_stmt(&mut self) -> Option<Stmt> {
        let span = self.curr_span();
        self.advance(); // import

        let token = self.expect(TokenKind::Ident)?;
        Some(Stmt::Import(ImportStmt {
            name: Identifier {
                name: token.literal,
                span: token.span,
            },
            span,
        }))
    }

    fn parse_comment_stmt(&mut self) -> Option<Stmt> {
        let span = self.curr_span();
        let text = self.curr().literal.clone();
        self.advance();
        Some(Stmt::Comment(CommentStmt { text, span }))
    }

    /// An expression statement, possibly continued into a reassignment
    /// (`x = …`, `x += …`, `x -= …`, `a[i] = …`).
    fn parse_expression_stmt(&mut self) -> Option<Stmt> {
        let span = self.curr_span();
        let expr = self.parse_expr(Precedence::Lowest)?;

        match self.curr().kind {
            TokenKind::Assign => self.parse_reassign(expr, span),
            TokenKind::PlusEq | TokenKind::MinusEq => self.parse_compound_reassign(expr, span),
            _ => Some(Stmt::Expression(ExpressionStmt { expr, span })),
        }
    }

    fn parse_reassign(&mut self, target: Expr, span: edec_util::Span) -> Option<Stmt> {
        let target = self.validate_assign_target(target, true)?;
        self.advance(); // '='
        let value = self.parse_expr(Precedence::Lowest)?;
        Some(Stmt::Reassign(ReassignStmt {
            target,
            value,
            span,
        }))
    }

    /// `x += e` / `x -= e` desugar to `x = x + e` / `x = x - e`.
    fn parse_compound_reassign(&mut self, target: Expr, span: edec_util::Span) -> Option<Stmt> {
        let operator = if self.curr_is(TokenKind::PlusEq) {
            "+"
        } else {
            "-"
        };
        let op_span = self.curr_span();

        let target = self.validate_assign_target(target, false)?;
        let ident = match &target {
            AssignTarget::Ident(ident) => ident.clone(),
            AssignTarget::Index(_) => unreachable!("compound targets are identifiers"),
        };

        self.advance(); // '+=' or '-='
        let right = self.parse_expr(Precedence::Lowest)?;

        let value = Expr::Infix(InfixExpr {
            operator: operator.to_string(),
            left: Box::new(Expr::Identifier(ident)),
            right: Box::new(right),
            span: op_span,
        });

        Some(Stmt::Reassign(ReassignStmt {
            target,
            value,
            span,
        }))
    }

    fn validate_assign_target(&mut self, expr: Expr, allow_index: bool) -> Option<AssignTarget> {
        match expr {
            Expr::Identifier(ident) => {
                if is_reserved_word(&ident.name) {
                    let span = ident.span;
                    self.error_at(
                        format!("cannot assign to reserved keyword '{}'", ident.name),
                        span,
                    );
                    return None;
                }
                Some(AssignTarget::Ident(ident))
            },
            Expr::Index(index) if allow_index => Some(AssignTarget::Index(index)),
            other => {
                let span = other.span();
                self.error_at(
                    format!("invalid assignment target {}", other.kind_name()),
                    span,
                );
                None
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> Program {
        Parser::from_source(source).parse()
    }

    fn parse_ok(source: &str) -> Program {
        let program = parse(source);
        assert!(
            program.parse_errors.is_empty(),
            "unexpected parse errors: {:?}",
            program.parse_errors
        );
        program
    }

    fn single_stmt(source: &str) -> Stmt {
        let mut program = parse_ok(source);
        assert_eq!(program.statements.len(), 1, "expected a single statement");
        program.statements.remove(0)
    }

    #[test]
    fn test_let_statement() {
        match single_stmt("let x = 5;") {
            Stmt::Let(let_stmt) => {
                assert_eq!(let_stmt.name.name, "x");
                assert!(matches!(
                    let_stmt.value,
                    Some(Expr::Integer(IntegerLit { value: 5, .. }))
                ));
            },
            other => panic!("expected let, got {other:?}"),
        }
    }

    #[test]
    fn test_let_without_value() {
        match single_stmt("let x;") {
            Stmt::Let(let_stmt) => assert!(let_stmt.value.is_none()),
            other => panic!("expected let, got {other:?}"),
        }
    }

    #[test]
    fn test_let_reserved_keyword_rejected() {
        let program = parse("let index = 3;");
        assert!(program.parse_errors[0]
            .message
            .contains("cannot assign to reserved keyword 'index'"));
    }

    #[test]
    fn test_let_keyword_lhs_rejected() {
        let program = parse("let for = 3;");
        assert!(program.parse_errors[0]
            .message
            .contains("cannot assign to reserved keyword 'for'"));
    }

    #[test]
    fn test_reassignment() {
        match single_stmt("x = 5") {
            Stmt::Reassign(reassign) => {
                assert!(matches!(reassign.target, AssignTarget::Ident(ref id) if id.name == "x"));
            },
            other => panic!("expected reassignment, got {other:?}"),
        }
    }

    #[test]
    fn test_index_reassignment() {
        match single_stmt("arr[0] = 5") {
            Stmt::Reassign(reassign) => {
                assert!(matches!(reassign.target, AssignTarget::Index(_)));
            },
            other => panic!("expected reassignment, got {other:?}"),
        }
    }

    #[test]
    fn test_reassign_reserved_keyword_rejected() {
        let program = parse("index = 5");
        assert!(program.parse_errors[0]
            .message
            .contains("cannot assign to reserved keyword 'index'"));
    }

    #[test]
    fn test_plus_equal_desugars_to_infix() {
        match single_stmt("x += 2") {
            Stmt::Reassign(reassign) => match reassign.value {
                Expr::Infix(infix) => {
                    assert_eq!(infix.operator, "+");
                    assert!(matches!(*infix.left, Expr::Identifier(ref id) if id.name == "x"));
                },
                other => panic!("expected infix, got {other:?}"),
            },
            other => panic!("expected reassignment, got {other:?}"),
        }
    }

    #[test]
    fn test_minus_equal_desugars_to_infix() {
        match single_stmt("x -= 2") {
            Stmt::Reassign(reassign) => match reassign.value {
                Expr::Infix(infix) => assert_eq!(infix.operator, "-"),
                other => panic!("expected infix, got {other:?}"),
            },
            other => panic!("expected reassignment, got {other:?}"),
        }
    }

    #[test]
    fn test_if_statement() {
        match single_stmt("if (x < y) { x }") {
            Stmt::If(if_stmt) => {
                assert!(if_stmt.consequence.condition.is_some());
                assert!(if_stmt.alternatives.is_empty());
                assert_eq!(if_stmt.consequence.body.statements.len(), 1);
            },
            other => panic!("expected if, got {other:?}"),
        }
    }

    #[test]
    fn test_if_else_chain() {
        match single_stmt("if (a) { 1 } else if (b) { 2 } else { 3 }") {
            Stmt::If(if_stmt) => {
                assert_eq!(if_stmt.alternatives.len(), 2);
                assert!(if_stmt.alternatives[0].condition.is_some());
                assert!(if_stmt.alternatives[1].condition.is_none());
            },
            other => panic!("expected if, got {other:?}"),
        }
    }

    #[test]
    fn test_else_after_terminal_else_is_error() {
        let program = parse("if (1 > 2) { 10 } else { 20 } else if (true) { 5 }");
        assert!(program
            .parse_errors
            .iter()
            .any(|e| e.message.contains("expected start of expression")));
    }

    #[test]
    fn test_for_statement() {
        match single_stmt("for i = range [1..3] { i }") {
            Stmt::For(for_stmt) => {
                assert_eq!(for_stmt.variable.name, "i");
                assert!(matches!(for_stmt.boundary, Expr::RangeArray(_)));
            },
            other => panic!("expected for, got {other:?}"),
        }
    }

    #[test]
    fn test_for_without_range_keyword_is_error() {
        let program = parse("for i = [1,2] { i }");
        assert!(!program.parse_errors.is_empty());
    }

    #[test]
    fn test_import_statement() {
        match single_stmt("import json") {
            Stmt::Import(import) => assert_eq!(import.name.name, "json"),
            other => panic!("expected import, got {other:?}"),
        }
    }

    #[test]
    fn test_comment_statement() {
        match single_stmt("// a note") {
            Stmt::Comment(comment) => assert_eq!(comment.text, " a note"),
            other => panic!("expected comment, got {other:?}"),
        }
    }

    #[test]
    fn test_return_spellings() {
        let program = parse_ok("<- 5; return 10;");
        assert_eq!(program.statements.len(), 2);
        for stmt in &program.statements {
            match stmt {
                Stmt::Expression(expr_stmt) => {
                    assert!(matches!(expr_stmt.expr, Expr::Return(_)));
                },
                other => panic!("expected expression statement, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_nested_blocks() {
        let stmt = single_stmt("if (10 > 1) { if (10 > 2) { <- 10 } <- 1 }");
        match stmt {
            Stmt::If(if_stmt) => {
                assert_eq!(if_stmt.consequence.body.statements.len(), 2);
            },
            other => panic!("expected if, got {other:?}"),
        }
    }
}
