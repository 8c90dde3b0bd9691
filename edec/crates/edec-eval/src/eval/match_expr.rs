//! `match` evaluation: the language's error-recovery primitive.
//!
//! Cases are tried in order against the scrutinee using the universal
//! equality contract. A faulted scrutinee binds the reserved name
//! `error` in the match's child environment, so `case error:` matches
//! exactly when evaluation of the scrutinee failed.

use edec_lex::token::ERROR_IDENT;
use edec_par::{Identifier, MatchExpr};

use crate::env::{Env, Environment};
use crate::value::Value;
use crate::Evaluator;

impl Evaluator {
    /// Evaluates a match expression.
    ///
    /// `bind` carries the target of an enclosing `let NAME = match …`:
    /// on the happy path NAME is bound in the *outer* environment to
    /// the scrutinee value, so subsequent code sees the value while
    /// the arms handle the faulted case.
    pub(crate) fn eval_match(
        &mut self,
        expr: &MatchExpr,
        env: &Env,
        bind: Option<&Identifier>,
    ) -> Value {
        let scrutinee = self.eval_expr(&expr.scrutinee, env);

        let child = Environment::new_enclosed(env);
        if scrutinee.is_error() {
            child.borrow_mut().set(ERROR_IDENT, scrutinee.clone());
        } else if let Some(name) = bind {
            env.borrow_mut().set(name.name.clone(), scrutinee.clone());
        }

        for case in &expr.cases {
            let pattern = self.eval_expr(&case.pattern, &child);
            if pattern.equals(&scrutinee) {
                return self.eval_expr(&case.output, &child);
            }
            if pattern.is_error() {
                return pattern;
            }
        }

        match &expr.default {
            Some(default) => self.eval_expr(default, &child),
            None => Value::Nil,
        }
    }
}
