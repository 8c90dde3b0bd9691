//! Method-expression dispatch.
//!
//! `recv.method(args)` evaluates the receiver first; an Error receiver
//! propagates. Two pseudo-methods apply to every value (`equal`,
//! `type`); everything else goes through the method-provider contract
//! of the receiver's kind, or the module function table when the
//! receiver is an import.

use edec_par::{Expr, MethodExpr};
use edec_util::Span;

use crate::env::Env;
use crate::methods;
use crate::value::Value;
use crate::Evaluator;

impl Evaluator {
    pub(crate) fn eval_method_expr(&mut self, expr: &MethodExpr, env: &Env) -> Value {
        let receiver = self.resolve_receiver(&expr.object, env);
        if receiver.is_error() {
            return receiver;
        }

        let (name, name_span, arg_exprs): (&str, Span, &[Expr]) = match &*expr.method {
            Expr::Identifier(ident) => (ident.name.as_str(), ident.span, &[]),
            Expr::Call(call) => match &*call.callee {
                Expr::Identifier(ident) => (ident.name.as_str(), ident.span, call.args.as_slice()),
                other => return self.error_at("expected method name", other.span()),
            },
            other => return self.error_at("expected method name", other.span()),
        };

        // universal pseudo-methods
        match name {
            "equal" => {
                let args = match self.eval_exprs(arg_exprs, env) {
                    Ok(args) => args,
                    Err(error) => return error,
                };
                if args.len() != 1 {
                    return Value::error(format!("expected 1 argument(s), got {}", args.len()));
                }
                return Value::Bool(receiver.equals(&args[0]));
            },
            "type" => {
                if !arg_exprs.is_empty() {
                    return Value::error(format!(
                        "expected 0 argument(s), got {}",
                        arg_exprs.len()
                    ));
                }
                return Value::Str(receiver.type_name().to_string());
            },
            _ => {},
        }

        let method = match &receiver {
            Value::Import(import) => match import.module.functions().get(name) {
                Some(function) => function.clone(),
                None => {
                    return self.error_at(
                        format!("unknown method '{name}' for module '{}'", import.name),
                        name_span,
                    );
                },
            },
            _ => match methods::get_method(&receiver, name) {
                Some(method) => method,
                None => {
                    return self.error_at(
                        format!(
                            "unknown method '{name}' for type '{}'",
                            receiver.type_name()
                        ),
                        name_span,
                    );
                },
            },
        };

        let args = match self.eval_exprs(arg_exprs, env) {
            Ok(args) => args,
            Err(error) => return error,
        };
        self.apply_function(method, args, name_span)
    }

    /// Evaluates a method receiver. An unresolved identifier here is a
    /// hard error (`identifier not found`), unlike a plain reference
    /// which quietly yields nil.
    fn resolve_receiver(&mut self, expr: &Expr, env: &Env) -> Value {
        if let Expr::Identifier(ident) = expr {
            if let Some(value) = env.borrow().get(&ident.name) {
                return value;
            }
            if let Some(builtin) = crate::builtins::lookup_builtin(&ident.name) {
                return builtin;
            }
            return self.error_at(
                format!("identifier not found '{}'", ident.name),
                ident.span,
            );
        }
        self.eval_expr(expr, env)
    }
}

#[cfg(test)]
mod tests {
    use crate::env::Environment;
    use crate::value::Value;
    use crate::Evaluator;
    use edec_par::Parser;

    fn eval(source: &str) -> Value {
        let program = Parser::from_source(source).parse();
        assert!(program.parse_errors.is_empty(), "{:?}", program.parse_errors);
        Evaluator::new().eval_program(&program, &Environment::new())
    }

    #[test]
    fn test_type_pseudo_method() {
        assert!(eval("5 .type()").equals(&Value::Str("INT".into())));
        assert!(eval("\"x\".type()").equals(&Value::Str("STRING".into())));
        assert!(eval("[1].type()").equals(&Value::Str("ARRAY".into())));
        assert!(eval("true.type()").equals(&Value::Str("BOOLEAN".into())));
    }

    #[test]
    fn test_equal_pseudo_method() {
        assert!(eval("let a = [1, 2]; a.equal([1, 2])").equals(&Value::Bool(true)));
        assert!(eval("let a = [1, 2]; a.equal([2, 1])").equals(&Value::Bool(false)));
        assert!(eval("1 .equal(1.0)").equals(&Value::Bool(true)));
    }

    #[test]
    fn test_equal_is_false_for_functions() {
        let result = eval("let f = func() { 1 }; f.equal(f)");
        assert!(result.equals(&Value::Bool(false)));
    }

    #[test]
    fn test_unknown_method_error() {
        let result = eval("let a = [1]; a.frobnicate()");
        match result {
            Value::Error(message) => {
                assert!(message.contains("unknown method 'frobnicate' for type 'ARRAY'"));
            },
            other => panic!("expected error, got {other:?}"),
        }
    }

    #[test]
    fn test_unresolved_receiver_is_an_error() {
        let result = eval("ghost.length()");
        match result {
            Value::Error(message) => {
                assert!(message.contains("identifier not found 'ghost'"));
            },
            other => panic!("expected error, got {other:?}"),
        }
    }

    #[test]
    fn test_error_receiver_propagates() {
        let result = eval("(10 * \"a\").length()");
        match result {
            Value::Error(message) => {
                assert!(message.contains("invalid infix operator"));
            },
            other => panic!("expected error, got {other:?}"),
        }
    }
}
