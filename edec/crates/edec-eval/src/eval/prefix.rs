//! Unary and postfix operator evaluation.

use edec_par::{Expr, PostfixExpr, PrefixExpr};

use crate::env::Env;
use crate::value::Value;
use crate::Evaluator;

impl Evaluator {
    /// `!x`, `-x`, `+x`
    pub(crate) fn eval_prefix_expr(&mut self, prefix: &PrefixExpr, env: &Env) -> Value {
        let right = self.eval_expr(&prefix.right, env);
        if right.is_error() {
            return right;
        }

        match prefix.operator.as_str() {
            // bang applies to every kind through truthiness
            "!" => Value::Bool(!right.is_truthy()),
            "-" => match right {
                Value::Int(n) => Value::Int(-n),
                Value::Float(f) => Value::Float(-f),
                other => Value::error(format!(
                    "invalid prefix operator - for ({})",
                    other.inspect()
                )),
            },
            "+" => match right {
                Value::Int(_) | Value::Float(_) => right,
                other => Value::error(format!(
                    "invalid prefix operator + for ({})",
                    other.inspect()
                )),
            },
            op => Value::error(format!("invalid prefix operator {op}")),
        }
    }

    /// `x++`, `x--`
    ///
    /// When the operand is an identifier, the binding it resolved from
    /// is updated in place (walking up the scope chain); a literal
    /// operand just produces the shifted value.
    pub(crate) fn eval_postfix_expr(&mut self, postfix: &PostfixExpr, env: &Env) -> Value {
        let left = self.eval_expr(&postfix.left, env);
        if left.is_error() {
            return left;
        }

        let result = match (&left, postfix.operator.as_str()) {
            (Value::Int(n), "++") => Value::Int(n + 1),
            (Value::Int(n), "--") => Value::Int(n - 1),
            (Value::Float(f), "++") => Value::Float(f + 1.0),
            (Value::Float(f), "--") => Value::Float(f - 1.0),
            (other, op) => {
                return self.error_at(
                    format!("invalid postfix operator {op} for ({})", other.inspect()),
                    postfix.span,
                );
            },
        };

        if let Expr::Identifier(ident) = &*postfix.left {
            env.borrow_mut().update(&ident.name, result.clone());
        }
        result
    }
}
