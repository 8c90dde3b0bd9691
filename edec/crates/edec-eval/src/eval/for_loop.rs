//! `for` loop evaluation.
//!
//! The boundary must satisfy the iterable contract: it yields an
//! ordered sequence of elements. Arrays (including range-produced
//! arrays) and strings qualify. Each iteration runs the body under a
//! child environment in which the loop variable and the reserved
//! `index` are bound.

use edec_lex::token::INDEX_IDENT;
use edec_par::ForStmt;

use crate::env::{Env, Environment};
use crate::value::Value;
use crate::Evaluator;

impl Evaluator {
    pub(crate) fn eval_for_loop(&mut self, stmt: &ForStmt, env: &Env) -> Value {
        let boundary = self.eval_expr(&stmt.boundary, env);
        if boundary.is_error() {
            return boundary;
        }

        let items: Vec<Value> = match &boundary {
            Value::Array(entries) => entries.borrow().clone(),
            Value::Str(s) => s.chars().map(|c| Value::Str(c.to_string())).collect(),
            _ => {
                return self.error_at(
                    "for loop boundary type is not iterable",
                    stmt.boundary.span(),
                );
            },
        };

        let mut result = Value::Nil;
        for (position, element) in items.into_iter().enumerate() {
            let iter_env = Environment::new_enclosed(env);
            iter_env
                .borrow_mut()
                .set(stmt.variable.name.clone(), element);
            iter_env
                .borrow_mut()
                .set(INDEX_IDENT, Value::Int(position as i64));

            result = self.eval_block(&stmt.body, &iter_env);
            if matches!(result, Value::Return(_) | Value::Error(_)) {
                return result;
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use edec_par::Parser;

    fn eval(source: &str) -> Value {
        let program = Parser::from_source(source).parse();
        assert!(program.parse_errors.is_empty(), "{:?}", program.parse_errors);
        Evaluator::new().eval_program(&program, &Environment::new())
    }

    #[test]
    fn test_loop_over_range_mutates_outer() {
        let result = eval("let a = 30; for i = range [1..3] { a = a + i }; a");
        assert!(result.equals(&Value::Int(36)));
    }

    #[test]
    fn test_loop_scoped_let_shadows() {
        let result = eval("let a = 10.5; for i = range [1..10] { let a = 4; a++ }; a");
        assert!(result.equals(&Value::Float(10.5)));
    }

    #[test]
    fn test_index_binding() {
        let result = eval("let total = 0; for x = range [10, 20, 30] { total = total + index }; total");
        assert!(result.equals(&Value::Int(3)));
    }

    #[test]
    fn test_loop_over_string() {
        let result = eval("let out = \"\"; for c = range \"abc\" { out = out + c }; out");
        assert!(result.equals(&Value::Str("abc".into())));
    }

    #[test]
    fn test_loop_over_identifier_bound_array() {
        let result = eval("let xs = [1, 2, 3]; let sum = 0; for x = range xs { sum = sum + x }; sum");
        assert!(result.equals(&Value::Int(6)));
    }

    #[test]
    fn test_non_iterable_boundary_faults() {
        let result = eval("for x = range 5 { x }");
        match result {
            Value::Error(message) => {
                assert!(message.contains("for loop boundary type is not iterable"));
            },
            other => panic!("expected error, got {other:?}"),
        }
    }

    #[test]
    fn test_error_in_body_halts_loop() {
        let result = eval("for i = range [1..3] { 10 * \"a\" }");
        assert!(result.is_error());
    }

    #[test]
    fn test_return_in_body_propagates() {
        let result = eval("let f = func() { for i = range [1..9] { <- i } }; f()");
        assert!(result.equals(&Value::Int(1)));
    }
}
