//! The recursive AST walk.
//!
//! This module organizes the evaluator into focused components:
//! - `mod` (this file) - Evaluator state, program/statement/expression
//!   dispatch, calls, indexing, reassignment
//! - `infix` - binary operator table
//! - `prefix` - unary and postfix operators
//! - `for_loop` - iteration over the iterable contract
//! - `method` - receiver method dispatch
//! - `match_expr` - `match` with the error-binding convention

mod for_loop;
mod infix;
mod match_expr;
mod method;
mod prefix;

use std::rc::Rc;

use edec_par::{
    AssignTarget, BlockStmt, Expr, ForStmt, IfStmt, ImportStmt, LetStmt, Program, ReassignStmt,
    Stmt,
};
use edec_util::Span;
use rustc_hash::FxHashMap;

use crate::builtins::lookup_builtin;
use crate::env::{Env, Environment};
use crate::modules::{self, Module};
use crate::value::{Function, Import, Value};

/// Walks a [`Program`] and produces a [`Value`].
///
/// The evaluator owns the module registry (populated once at
/// construction) and accumulates the messages of errors that halted
/// evaluation, for diagnostics.
pub struct Evaluator {
    modules: FxHashMap<&'static str, Rc<dyn Module>>,
    /// Messages of errors that halted evaluation.
    pub errors: Vec<String>,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator {
    pub fn new() -> Self {
        Self {
            modules: modules::registry(),
            errors: Vec::new(),
        }
    }

    /// Evaluates a program to its final value.
    ///
    /// Comment statements are skipped; a `Return` value unwraps and
    /// ends the program; an `Error` value halts it.
    pub fn eval_program(&mut self, program: &Program, env: &Env) -> Value {
        if !program.parse_errors.is_empty() {
            let rendered: Vec<String> =
                program.parse_errors.iter().map(|e| e.to_string()).collect();
            return Value::Error(rendered.join(""));
        }

        let mut result = Value::Nil;
        for stmt in &program.statements {
            if matches!(stmt, Stmt::Comment(_)) {
                continue;
            }
            result = self.eval_stmt(stmt, env);
            match result {
                Value::Return(inner) => return *inner,
                Value::Error(ref message) => {
                    self.errors.push(message.clone());
                    return result;
                },
                _ => {},
            }
        }
        result
    }

    // ------------------------------------------------------------------
    // Statements
    // ------------------------------------------------------------------

    pub(crate) fn eval_stmt(&mut self, stmt: &Stmt, env: &Env) -> Value {
        match stmt {
            Stmt::Let(let_stmt) => self.eval_let_stmt(let_stmt, env),
            Stmt::Expression(expr_stmt) => self.eval_expr(&expr_stmt.expr, env),
            Stmt::If(if_stmt) => self.eval_if_stmt(if_stmt, env),
            Stmt::For(for_stmt) => self.eval_for_stmt(for_stmt, env),
            Stmt::Reassign(reassign) => self.eval_reassign_stmt(reassign, env),
            Stmt::Import(import) => self.eval_import_stmt(import, env),
            Stmt::Comment(_) => Value::Nil,
        }
    }

    fn eval_let_stmt(&mut self, stmt: &LetStmt, env: &Env) -> Value {
        let value = match &stmt.value {
            // `let NAME = match …` is the error-recovery idiom: the
            // match binds NAME to the scrutinee on the happy path, so
            // the statement must not rebind NAME to the arm's output.
            Some(Expr::Match(match_expr)) => {
                return self.eval_match(match_expr, env, Some(&stmt.name));
            },
            Some(expr) => self.eval_expr(expr, env),
            None => Value::Nil,
        };

        if value.is_error() {
            return value;
        }
        env.borrow_mut().set(stmt.name.name.clone(), value.clone());
        value
    }

    fn eval_if_stmt(&mut self, stmt: &IfStmt, env: &Env) -> Value {
        if let Some(condition) = &stmt.consequence.condition {
            let cond = self.eval_expr(condition, env);
            if cond.is_error() {
                return cond;
            }
            if cond.is_truthy() {
                return self.eval_block(&stmt.consequence.body, env);
            }
        }

        for alt in &stmt.alternatives {
            match &alt.condition {
                None => return self.eval_block(&alt.body, env),
                Some(condition) => {
                    let cond = self.eval_expr(condition, env);
                    if cond.is_error() {
                        return cond;
                    }
                    if cond.is_truthy() {
                        return self.eval_block(&alt.body, env);
                    }
                },
            }
        }

        Value::Nil
    }

    fn eval_for_stmt(&mut self, stmt: &ForStmt, env: &Env) -> Value {
        self.eval_for_loop(stmt, env)
    }

    fn eval_reassign_stmt(&mut self, stmt: &ReassignStmt, env: &Env) -> Value {
        match &stmt.target {
            AssignTarget::Ident(ident) => {
                if env.borrow().get(&ident.name).is_none() {
                    return self.error_at(
                        format!("cannot reassign undeclared identifier '{}'", ident.name),
                        ident.span,
                    );
                }
                let value = self.eval_expr(&stmt.value, env);
                if value.is_error() {
                    return value;
                }
                env.borrow_mut().update(&ident.name, value.clone());
                value
            },
            AssignTarget::Index(index_expr) => {
                let container = self.eval_expr(&index_expr.left, env);
                if container.is_error() {
                    return container;
                }
                let index = self.eval_expr(&index_expr.index, env);
                if index.is_error() {
                    return index;
                }
                let value = self.eval_expr(&stmt.value, env);
                if value.is_error() {
                    return value;
                }
                self.assign_index(container, index, value, index_expr.span)
            },
        }
    }

    fn assign_index(&mut self, container: Value, index: Value, value: Value, span: Span) -> Value {
        match container {
            Value::Array(entries) => {
                let position = match index {
                    Value::Int(n) => n,
                    other => {
                        return self.error_at(
                            format!("array index must be an integer, got '{}'", other.inspect()),
                            span,
                        );
                    },
                };
                let len = entries.borrow().len();
                if position < 0 || position as usize >= len {
                    return self
                        .error_at(format!("index {position} out of range with length {len}"), span);
                }
                entries.borrow_mut()[position as usize] = value.clone();
                value
            },
            Value::Hash(entries) => {
                let key = match index.as_hash_entry_key() {
                    Some(key) => key,
                    None => {
                        return self.error_at(
                            format!("invalid hash key of type '{}'", index.type_name()),
                            span,
                        );
                    },
                };
                entries.borrow_mut().insert(key, value.clone());
                value
            },
            other => self.error_at(
                format!("cannot assign to index of type '{}'", other.type_name()),
                span,
            ),
        }
    }

    fn eval_import_stmt(&mut self, stmt: &ImportStmt, env: &Env) -> Value {
        match self.modules.get(stmt.name.name.as_str()) {
            Some(module) => {
                let import = Value::Import(Rc::new(Import {
                    name: stmt.name.name.clone(),
                    module: Rc::clone(module),
                }));
                env.borrow_mut().set(stmt.name.name.clone(), import.clone());
                import
            },
            None => self.error_at(format!("unknown module '{}'", stmt.name.name), stmt.name.span),
        }
    }

    // ------------------------------------------------------------------
    // Expressions
    // ------------------------------------------------------------------

    pub(crate) fn eval_expr(&mut self, expr: &Expr, env: &Env) -> Value {
        match expr {
            Expr::Identifier(ident) => self.eval_identifier(&ident.name, env),
            Expr::Integer(lit) => Value::Int(lit.value),
            Expr::Float(lit) => Value::Float(lit.value),
            Expr::Str(lit) => Value::Str(lit.value.clone()),
            Expr::Boolean(lit) => Value::Bool(lit.value),
            Expr::Array(lit) => match self.eval_exprs(&lit.elements, env) {
                Ok(entries) => Value::array(entries),
                Err(error) => error,
            },
            Expr::RangeArray(lit) => self.eval_range_array(lit, env),
            Expr::Hash(lit) => self.eval_hash_literal(lit, env),
            Expr::Set(lit) => self.eval_set_literal(lit, env),
            Expr::Function(lit) => Value::Function(Rc::new(Function {
                params: lit.params.iter().map(|p| p.name.clone()).collect(),
                body: lit.body.clone(),
                env: Rc::clone(env),
            })),
            Expr::Call(call) => {
                let callee = self.eval_expr(&call.callee, env);
                if callee.is_error() {
                    return callee;
                }
                let args = match self.eval_exprs(&call.args, env) {
                    Ok(args) => args,
                    Err(error) => return error,
                };
                self.apply_function(callee, args, call.span)
            },
            Expr::Index(index_expr) => {
                let left = self.eval_expr(&index_expr.left, env);
                if left.is_error() {
                    return left;
                }
                let index = self.eval_expr(&index_expr.index, env);
                if index.is_error() {
                    return index;
                }
                self.eval_index(left, index, index_expr.span)
            },
            Expr::Method(method) => self.eval_method_expr(method, env),
            Expr::Prefix(prefix) => self.eval_prefix_expr(prefix, env),
            Expr::Infix(infix) => {
                let left = self.eval_expr(&infix.left, env);
                if left.is_error() {
                    return left;
                }
                let right = self.eval_expr(&infix.right, env);
                if right.is_error() {
                    return right;
                }
                self.eval_infix(&infix.operator, left, right)
            },
            Expr::Postfix(postfix) => self.eval_postfix_expr(postfix, env),
            Expr::Match(match_expr) => self.eval_match(match_expr, env, None),
            Expr::Return(ret) => {
                let value = self.eval_expr(&ret.value, env);
                if value.is_error() {
                    return value;
                }
                Value::Return(Box::new(value))
            },
        }
    }

    /// Resolves an identifier: environment chain first, then the
    /// builtin table. An unresolved plain reference yields nil; a
    /// mandatory-value context (method receiver) reports instead.
    fn eval_identifier(&mut self, name: &str, env: &Env) -> Value {
        if let Some(value) = env.borrow().get(name) {
            return value;
        }
        if let Some(builtin) = lookup_builtin(name) {
            return builtin;
        }
        Value::Nil
    }

    /// Evaluates expressions left to right, stopping at the first
    /// error.
    pub(crate) fn eval_exprs(&mut self, exprs: &[Expr], env: &Env) -> Result<Vec<Value>, Value> {
        let mut values = Vec::with_capacity(exprs.len());
        for expr in exprs {
            let value = self.eval_expr(expr, env);
            if value.is_error() {
                return Err(value);
            }
            values.push(value);
        }
        Ok(values)
    }

    fn eval_range_array(&mut self, lit: &edec_par::RangeArrayLit, env: &Env) -> Value {
        let start = self.eval_expr(&lit.start, env);
        if start.is_error() {
            return start;
        }
        let end = self.eval_expr(&lit.end, env);
        if end.is_error() {
            return end;
        }

        let start = match start {
            Value::Int(n) => n,
            other => {
                return self.error_at(
                    format!("range boundary must be an integer, got '{}'", other.inspect()),
                    lit.span,
                );
            },
        };
        let end = match end {
            Value::Int(n) => n,
            other => {
                return self.error_at(
                    format!("range boundary must be an integer, got '{}'", other.inspect()),
                    lit.span,
                );
            },
        };

        // a descending range is empty
        let entries: Vec<Value> = (start..=end).map(Value::Int).collect();
        Value::array(entries)
    }

    fn eval_hash_literal(&mut self, lit: &edec_par::HashLit, env: &Env) -> Value {
        let mut entries = indexmap::IndexMap::new();
        for (key_expr, value_expr) in &lit.pairs {
            let key = self.eval_expr(key_expr, env);
            if key.is_error() {
                return key;
            }
            let key = match key.as_hash_entry_key() {
                Some(key) => key,
                None => {
                    return self.error_at(
                        format!("invalid hash key of type '{}'", key.type_name()),
                        key_expr.span(),
                    );
                },
            };
            let value = self.eval_expr(value_expr, env);
            if value.is_error() {
                return value;
            }
            entries.insert(key, value);
        }
        Value::hash(entries)
    }

    fn eval_set_literal(&mut self, lit: &edec_par::SetLit, env: &Env) -> Value {
        let mut entries = indexmap::IndexMap::new();
        for element_expr in &lit.elements {
            let element = self.eval_expr(element_expr, env);
            if element.is_error() {
                return element;
            }
            let key = match element.hash_key() {
                Some(key) => key,
                None => {
                    return self.error_at(
                        format!("invalid set entry of type '{}'", element.type_name()),
                        element_expr.span(),
                    );
                },
            };
            entries.insert(key, element);
        }
        Value::set(entries)
    }

    fn eval_index(&mut self, left: Value, index: Value, span: Span) -> Value {
        match left {
            Value::Array(entries) => {
                let position = match index {
                    Value::Int(n) => n,
                    other => {
                        return self.error_at(
                            format!("array index must be an integer, got '{}'", other.inspect()),
                            span,
                        );
                    },
                };
                let entries = entries.borrow();
                if position < 0 || position as usize >= entries.len() {
                    return self.error_at(
                        format!("index {position} out of range with length {}", entries.len()),
                        span,
                    );
                }
                entries[position as usize].clone()
            },
            Value::Hash(entries) => {
                let receiver = Value::Hash(Rc::clone(&entries));
                let key = match index.as_hash_entry_key() {
                    Some(key) => key,
                    None => {
                        return self.error_at(
                            format!("invalid hash key of type '{}'", index.type_name()),
                            span,
                        );
                    },
                };
                match entries.borrow().get(&key) {
                    Some(value) => value.clone(),
                    None => self.error_at(
                        format!("invalid index entry '{key}' for '{}'", receiver.inspect()),
                        span,
                    ),
                }
            },
            other => self.error_at(
                format!("invalid index operator for type '{}'", other.type_name()),
                span,
            ),
        }
    }

    // ------------------------------------------------------------------
    // Blocks and calls
    // ------------------------------------------------------------------

    /// Evaluates a block under a fresh child environment, yielding the
    /// last value and short-circuiting on Return or Error.
    pub(crate) fn eval_block(&mut self, block: &BlockStmt, env: &Env) -> Value {
        let child = Environment::new_enclosed(env);
        let mut result = Value::Nil;
        for stmt in &block.statements {
            if matches!(stmt, Stmt::Comment(_)) {
                continue;
            }
            result = self.eval_stmt(stmt, &child);
            if matches!(result, Value::Return(_) | Value::Error(_)) {
                return result;
            }
        }
        result
    }

    /// Applies a callable value to already-evaluated arguments.
    pub(crate) fn apply_function(&mut self, callee: Value, args: Vec<Value>, span: Span) -> Value {
        match callee {
            Value::Function(func) => self.call_function(&func, args),
            Value::Builtin(builtin) => {
                let func = Rc::clone(&builtin.func);
                func(self, args)
            },
            other => self.error_at(
                format!("cannot call value of type '{}'", other.type_name()),
                span,
            ),
        }
    }

    /// Calls a user function: child environment of the captured one,
    /// positional parameter binding, Return unwrapping.
    pub(crate) fn call_function(&mut self, func: &Rc<Function>, args: Vec<Value>) -> Value {
        if args.len() != func.params.len() {
            return Value::error(format!(
                "expected {} argument(s), got {}",
                func.params.len(),
                args.len()
            ));
        }

        let call_env = Environment::new_enclosed(&func.env);
        for (param, arg) in func.params.iter().zip(args) {
            call_env.borrow_mut().set(param.clone(), arg);
        }

        unwrap_return(self.eval_block(&func.body, &call_env))
    }

    /// Calls a single-parameter callback with the element and the
    /// reserved `index` binding, as `map`/`filter`/`find` do.
    pub(crate) fn call_with_index(
        &mut self,
        func: &Rc<Function>,
        element: Value,
        index: i64,
    ) -> Value {
        let call_env = Environment::new_enclosed(&func.env);
        if let Some(param) = func.params.first() {
            call_env.borrow_mut().set(param.clone(), element);
        }
        call_env
            .borrow_mut()
            .set(edec_lex::token::INDEX_IDENT, Value::Int(index));

        unwrap_return(self.eval_block(&func.body, &call_env))
    }

    // ------------------------------------------------------------------
    // Errors
    // ------------------------------------------------------------------

    /// A runtime error carrying a source position, rendered in the
    /// interpreter's canonical block format.
    pub(crate) fn error_at(&self, message: impl std::fmt::Display, span: Span) -> Value {
        Value::Error(format!(
            "\n\tError: {message}\n\tLine: {}\n\tColumn: {}\n\t",
            span.line, span.column
        ))
    }
}

/// Unwraps a Return token produced inside a function body.
pub(crate) fn unwrap_return(value: Value) -> Value {
    match value {
        Value::Return(inner) => *inner,
        other => other,
    }
}
