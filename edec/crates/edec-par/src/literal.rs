//! Literal parsing - scalars, arrays, ranges, hashes, sets, and
//! function literals.

use edec_lex::TokenKind;

use crate::ast::*;
use crate::{Parser, Precedence};

/// Canonical key identity for parse-time hash deduplication. Only
/// string, int, and bool keys are legal, and `{"a": 1, "a": 2}` keeps
/// the later pair.
fn raw_hash_key(expr: &Expr) -> Option<String> {
    match expr {
        Expr::Str(s) => Some(format!("s:{}", s.value)),
        Expr::Integer(i) => Some(format!("i:{}", i.value)),
        Expr::Boolean(b) => Some(format!("b:{}", b.value)),
        _ => None,
    }
}

impl<'a> Parser<'a> {
    pub(crate) fn parse_integer(&mut self) -> Option<Expr> {
        let span = self.curr_span();
        let literal = self.curr().literal.clone();
        self.advance();
        match literal.parse::<i64>() {
            Ok(value) => Some(Expr::Integer(IntegerLit { value, span })),
            Err(_) => {
                self.error_at(format!("could not parse '{literal}' as integer"), span);
                None
            },
        }
    }

    pub(crate) fn parse_float(&mut self) -> Option<Expr> {
        let span = self.curr_span();
        let literal = self.curr().literal.clone();
        self.advance();
        match literal.parse::<f64>() {
            Ok(value) => Some(Expr::Float(FloatLit { value, span })),
            Err(_) => {
                self.error_at(format!("could not parse '{literal}' as float"), span);
                None
            },
        }
    }

    pub(crate) fn parse_string(&mut self) -> Expr {
        let span = self.curr_span();
        let value = self.curr().literal.clone();
        self.advance();
        Expr::Str(StringLit { value, span })
    }

    pub(crate) fn parse_boolean(&mut self) -> Expr {
        let span = self.curr_span();
        let value = self.curr_is(TokenKind::True);
        self.advance();
        Expr::Boolean(BooleanLit { value, span })
    }

    /// `[e, …]` or `[start..end]` — the range form is recognized by a
    /// `..` after the first element.
    pub(crate) fn parse_array_literal(&mut self) -> Option<Expr> {
        let span = self.curr_span();
        self.advance(); // '['
        self.skip_newlines();

        if self.match_token(TokenKind::RBracket) {
            return Some(Expr::Array(ArrayLit {
                elements: Vec::new(),
                span,
            }));
        }

        let first = self.parse_expr(Precedence::Lowest)?;

        if self.curr_is(TokenKind::DotDot) {
            self.advance();
            let end = self.parse_expr(Precedence::Lowest)?;
            if !self.match_token(TokenKind::RBracket) {
                self.error(format!(
                    "expected closing bracket token ']', got '{}'",
                    self.describe_curr()
                ));
                return None;
            }
            return Some(Expr::RangeArray(RangeArrayLit {
                start: Box::new(first),
                end: Box::new(end),
                span,
            }));
        }

        let mut elements = vec![first];
        self.skip_newlines();
        while self.match_token(TokenKind::Comma) {
            self.skip_newlines();
            if self.curr_is(TokenKind::RBracket) {
                break;
            }
            elements.push(self.parse_expr(Precedence::Lowest)?);
            self.skip_newlines();
        }

        if !self.match_token(TokenKind::RBracket) {
            self.error(format!(
                "expected closing bracket token ']', got '{}'",
                self.describe_curr()
            ));
            return None;
        }

        Some(Expr::Array(ArrayLit { elements, span }))
    }

    /// `{…}` — a hash when a `:` follows the first element, a set
    /// otherwise. An empty `{}` is an empty hash.
    pub(crate) fn parse_brace_literal(&mut self) -> Option<Expr> {
        let span = self.curr_span();
        self.advance(); // '{'
        self.skip_newlines();

        if self.match_token(TokenKind::RBrace) {
            return Some(Expr::Hash(HashLit {
                pairs: Vec::new(),
                span,
            }));
        }

        let first = self.parse_expr(Precedence::Lowest)?;

        if self.curr_is(TokenKind::Colon) {
            self.parse_hash_rest(first, span)
        } else {
            self.parse_set_rest(first, span)
        }
    }

    fn parse_hash_rest(&mut self, first_key: Expr, span: edec_util::Span) -> Option<Expr> {
        let mut pairs: Vec<(Expr, Expr)> = Vec::new();
        let mut key = first_key;

        loop {
            let raw = match raw_hash_key(&key) {
                Some(raw) => raw,
                None => {
                    let key_span = key.span();
                    self.error_at(
                        format!("invalid type {} for hash key", key.kind_name()),
                        key_span,
                    );
                    return None;
                },
            };

            self.expect(TokenKind::Colon)?;
            self.skip_newlines();
            let value = self.parse_expr(Precedence::Lowest)?;

            // later duplicate wins and takes the later position
            if let Some(existing) = pairs
                .iter()
                .position(|(k, _)| raw_hash_key(k).as_deref() == Some(raw.as_str()))
            {
                pairs.remove(existing);
            }
            pairs.push((key, value));

            self.skip_newlines();
            if self.match_token(TokenKind::Comma) {
                self.skip_newlines();
                if self.curr_is(TokenKind::RBrace) {
                    break;
                }
                key = self.parse_expr(Precedence::Lowest)?;
                continue;
            }
            break;
        }

        if !self.match_token(TokenKind::RBrace) {
            self.error(format!(
                "unexpected end of token. expected }}, got '{}'",
                self.describe_curr()
            ));
            return None;
        }

        Some(Expr::Hash(HashLit { pairs, span }))
    }

    fn parse_set_rest(&mut self, first: Expr, span: edec_util::Span) -> Option<Expr> {
        let mut elements = vec![first];

        self.skip_newlines();
        while self.match_token(TokenKind::Comma) {
            self.skip_newlines();
            if self.curr_is(TokenKind::RBrace) {
                break;
            }
            elements.push(self.parse_expr(Precedence::Lowest)?);
            self.skip_newlines();
        }

        if !self.match_token(TokenKind::RBrace) {
            self.error(format!(
                "unexpected end of token. expected }}, got '{}'",
                self.describe_curr()
            ));
            return None;
        }

        Some(Expr::Set(SetLit { elements, span }))
    }

    /// `func(p, …) { … }`
    pub(crate) fn parse_function_literal(&mut self) -> Option<Expr> {
        let span = self.curr_span();
        self.advance(); // func

        self.expect(TokenKind::LParen)?;
        let params = self.parse_function_params()?;
        let body = self.parse_block()?;

        Some(Expr::Function(FunctionLit { params, body, span }))
    }

    fn parse_function_params(&mut self) -> Option<Vec<Identifier>> {
        let mut params = Vec::new();

        self.skip_newlines();
        while self.curr_is(TokenKind::Ident) {
            params.push(Identifier {
                name: self.curr().literal.clone(),
                span: self.curr_span(),
            });
            self.advance();
            self.skip_newlines();
            if !self.match_token(TokenKind::Comma) {
                break;
            }
            self.skip_newlines();
        }

        if !self.match_token(TokenKind::RParen) {
            self.error(format!(
                "expected closing parenthesis token ')', got '{}'",
                self.describe_curr()
            ));
            return None;
        }

        Some(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Parser;

    fn parse_ok(source: &str) -> Program {
        let program = Parser::from_source(source).parse();
        assert!(
            program.parse_errors.is_empty(),
            "unexpected parse errors: {:?}",
            program.parse_errors
        );
        program
    }

    fn single_expr(source: &str) -> Expr {
        let mut program = parse_ok(source);
        assert_eq!(program.statements.len(), 1);
        match program.statements.remove(0) {
            Stmt::Expression(expr_stmt) => expr_stmt.expr,
            other => panic!("expected expression statement, got {other:?}"),
        }
    }

    #[test]
    fn test_integer_literal() {
        assert!(matches!(
            single_expr("5"),
            Expr::Integer(IntegerLit { value: 5, .. })
        ));
    }

    #[test]
    fn test_float_literal() {
        match single_expr("10.5") {
            Expr::Float(f) => assert!((f.value - 10.5).abs() < f64::EPSILON),
            other => panic!("expected float, got {other:?}"),
        }
    }

    #[test]
    fn test_string_literal() {
        match single_expr("\"hello world\"") {
            Expr::Str(s) => assert_eq!(s.value, "hello world"),
            other => panic!("expected string, got {other:?}"),
        }
    }

    #[test]
    fn test_boolean_literals() {
        assert!(matches!(
            single_expr("true"),
            Expr::Boolean(BooleanLit { value: true, .. })
        ));
        assert!(matches!(
            single_expr("false"),
            Expr::Boolean(BooleanLit { value: false, .. })
        ));
    }

    #[test]
    fn test_array_literal() {
        match single_expr("[1, 2 * 2, 3 + 3]") {
            Expr::Array(array) => {
                assert_eq!(array.elements.len(), 3);
                assert!(matches!(array.elements[1], Expr::Infix(_)));
            },
            other => panic!("expected array, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_array() {
        match single_expr("[]") {
            Expr::Array(array) => assert!(array.elements.is_empty()),
            other => panic!("expected array, got {other:?}"),
        }
    }

    #[test]
    fn test_range_array_literal() {
        match single_expr("[1..10]") {
            Expr::RangeArray(range) => {
                assert!(matches!(*range.start, Expr::Integer(IntegerLit { value: 1, .. })));
                assert!(matches!(*range.end, Expr::Integer(IntegerLit { value: 10, .. })));
            },
            other => panic!("expected range array, got {other:?}"),
        }
    }

    #[test]
    fn test_range_array_with_negative_bounds() {
        match single_expr("[-3..3]") {
            Expr::RangeArray(range) => {
                assert!(matches!(*range.start, Expr::Prefix(_)));
            },
            other => panic!("expected range array, got {other:?}"),
        }
    }

    #[test]
    fn test_range_array_with_expressions() {
        match single_expr("[a + 1..b * 2]") {
            Expr::RangeArray(range) => {
                assert!(matches!(*range.start, Expr::Infix(_)));
                assert!(matches!(*range.end, Expr::Infix(_)));
            },
            other => panic!("expected range array, got {other:?}"),
        }
    }

    #[test]
    fn test_hash_literal_string_keys() {
        match single_expr(r#"{"one": 1, "two": 2, "three": 3}"#) {
            Expr::Hash(hash) => assert_eq!(hash.pairs.len(), 3),
            other => panic!("expected hash, got {other:?}"),
        }
    }

    #[test]
    fn test_hash_duplicate_keys_later_wins() {
        match single_expr(r#"{"one": 2, "one": 1, "two": 2}"#) {
            Expr::Hash(hash) => {
                assert_eq!(hash.pairs.len(), 2);
                let one = hash
                    .pairs
                    .iter()
                    .find(|(k, _)| matches!(k, Expr::Str(s) if s.value == "one"))
                    .expect("key 'one' present");
                assert!(matches!(one.1, Expr::Integer(IntegerLit { value: 1, .. })));
            },
            other => panic!("expected hash, got {other:?}"),
        }
    }

    #[test]
    fn test_hash_integer_and_boolean_keys() {
        match single_expr("{1: 4, 2: 2}") {
            Expr::Hash(hash) => assert_eq!(hash.pairs.len(), 2),
            other => panic!("expected hash, got {other:?}"),
        }
        match single_expr("{true: 1, false: 2}") {
            Expr::Hash(hash) => assert_eq!(hash.pairs.len(), 2),
            other => panic!("expected hash, got {other:?}"),
        }
    }

    #[test]
    fn test_hash_value_expressions() {
        match single_expr(r#"{"one": 0 + 1, "two": 10 - 8}"#) {
            Expr::Hash(hash) => {
                assert!(hash.pairs.iter().all(|(_, v)| matches!(v, Expr::Infix(_))));
            },
            other => panic!("expected hash, got {other:?}"),
        }
    }

    #[test]
    fn test_hash_invalid_key_type() {
        let program = Parser::from_source("{[1]: 2}").parse();
        assert!(program
            .parse_errors
            .iter()
            .any(|e| e.message.contains("for hash key")));
    }

    #[test]
    fn test_empty_braces_are_a_hash() {
        match single_expr("{}") {
            Expr::Hash(hash) => assert!(hash.pairs.is_empty()),
            other => panic!("expected hash, got {other:?}"),
        }
    }

    #[test]
    fn test_set_literal() {
        match single_expr("{1, 2, 3}") {
            Expr::Set(set) => assert_eq!(set.elements.len(), 3),
            other => panic!("expected set, got {other:?}"),
        }
    }

    #[test]
    fn test_multiline_hash() {
        match single_expr("{\n  \"a\": 1,\n  \"b\": 2\n}") {
            Expr::Hash(hash) => assert_eq!(hash.pairs.len(), 2),
            other => panic!("expected hash, got {other:?}"),
        }
    }

    #[test]
    fn test_function_literal() {
        match single_expr("func(x, y) { x + y; }") {
            Expr::Function(func) => {
                assert_eq!(func.params.len(), 2);
                assert_eq!(func.params[0].name, "x");
                assert_eq!(func.params[1].name, "y");
                assert_eq!(func.body.statements.len(), 1);
            },
            other => panic!("expected function, got {other:?}"),
        }
    }

    #[test]
    fn test_function_parameter_counts() {
        let cases = [("func() {};", 0), ("func(x) {};", 1), ("func(x, y, z) {};", 3)];
        for (source, count) in cases {
            match single_expr(source) {
                Expr::Function(func) => assert_eq!(func.params.len(), count, "{source}"),
                other => panic!("expected function, got {other:?}"),
            }
        }
    }
}
