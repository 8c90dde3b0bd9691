//! Free builtin functions.
//!
//! The registry is a process-wide table of plain function pointers,
//! populated once; `lookup_builtin` wraps an entry into a callable
//! value. Identifier resolution consults this table after the
//! environment chain.

use std::io::Write;

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

use crate::eval::Evaluator;
use crate::value::Value;

type BuiltinEntry = fn(&mut Evaluator, Vec<Value>) -> Value;

static BUILTINS: Lazy<FxHashMap<&'static str, BuiltinEntry>> = Lazy::new(|| {
    let mut m: FxHashMap<&'static str, BuiltinEntry> = FxHashMap::default();
    m.insert("len", builtin_len);
    m.insert("print", builtin_print);
    m.insert("println", builtin_println);
    m
});

/// Looks up a free builtin by name.
pub fn lookup_builtin(name: &str) -> Option<Value> {
    BUILTINS
        .get(name)
        .map(|entry| Value::builtin(name, *entry))
}

fn builtin_len(_ev: &mut Evaluator, args: Vec<Value>) -> Value {
    if args.len() != 1 {
        return Value::error(format!(
            "builtin function 'len' requires exactly one argument, got {}",
            args.len()
        ));
    }
    match &args[0] {
        Value::Str(s) => Value::Int(s.chars().count() as i64),
        Value::Array(entries) => Value::Int(entries.borrow().len() as i64),
        Value::Hash(entries) => Value::Int(entries.borrow().len() as i64),
        Value::Set(entries) => Value::Int(entries.borrow().len() as i64),
        other => Value::error(format!(
            "argument to `len` not supported, got {}",
            other.type_name()
        )),
    }
}

/// Renders print arguments: inspections separated by single spaces,
/// with the verbatim two-character literal `\n` standing for a
/// newline (string literals carry no escape processing).
fn render_print_args(args: &[Value]) -> String {
    let pieces: Vec<String> = args
        .iter()
        .map(|arg| match arg {
            Value::Str(s) if s == "\\n" => "\n".to_string(),
            other => other.inspect(),
        })
        .collect();
    pieces.join(" ")
}

fn builtin_print(_ev: &mut Evaluator, args: Vec<Value>) -> Value {
    let mut stdout = std::io::stdout();
    let _ = write!(stdout, "{}", render_print_args(&args));
    let _ = stdout.flush();
    Value::Nil
}

fn builtin_println(_ev: &mut Evaluator, args: Vec<Value>) -> Value {
    let mut stdout = std::io::stdout();
    let _ = writeln!(stdout, "{}", render_print_args(&args));
    let _ = stdout.flush();
    Value::Nil
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::Environment;
    use edec_par::Parser;

    fn eval(source: &str) -> Value {
        let program = Parser::from_source(source).parse();
        assert!(program.parse_errors.is_empty(), "{:?}", program.parse_errors);
        Evaluator::new().eval_program(&program, &Environment::new())
    }

    #[test]
    fn test_lookup() {
        assert!(lookup_builtin("len").is_some());
        assert!(lookup_builtin("print").is_some());
        assert!(lookup_builtin("println").is_some());
        assert!(lookup_builtin("nope").is_none());
    }

    #[test]
    fn test_len_on_strings_and_arrays() {
        assert!(eval("len(\"\")").equals(&Value::Int(0)));
        assert!(eval("len(\"four\")").equals(&Value::Int(4)));
        assert!(eval("len(\"hello world\")").equals(&Value::Int(11)));
        assert!(eval("len([1, 2, 3])").equals(&Value::Int(3)));
        assert!(eval("len([])").equals(&Value::Int(0)));
    }

    #[test]
    fn test_len_on_hash_and_set() {
        assert!(eval("len({\"a\": 1, \"b\": 2})").equals(&Value::Int(2)));
        assert!(eval("len({1, 2, 3})").equals(&Value::Int(3)));
    }

    #[test]
    fn test_len_matches_full_iteration() {
        let result = eval("let xs = [4, 5, 6]; let n = 0; for x = range xs { n++ }; n == len(xs)");
        assert!(result.equals(&Value::Bool(true)));
    }

    #[test]
    fn test_len_unsupported_argument() {
        match eval("len(1)") {
            Value::Error(message) => {
                assert_eq!(message, "error: argument to `len` not supported, got INT");
            },
            other => panic!("expected error, got {other:?}"),
        }
    }

    #[test]
    fn test_len_arity() {
        match eval("len(\"one\", \"two\")") {
            Value::Error(message) => {
                assert_eq!(
                    message,
                    "error: builtin function 'len' requires exactly one argument, got 2"
                );
            },
            other => panic!("expected error, got {other:?}"),
        }
    }

    #[test]
    fn test_render_print_args() {
        let args = vec![
            Value::Str("a".into()),
            Value::Int(10),
            Value::Str("\\n".into()),
        ];
        assert_eq!(render_print_args(&args), "a 10 \n");
    }

    #[test]
    fn test_builtins_are_shadowable() {
        assert!(eval("let len = 5; len").equals(&Value::Int(5)));
    }
}
