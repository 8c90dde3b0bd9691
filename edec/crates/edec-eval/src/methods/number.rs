//! Int and Float conversion methods.

use super::count_argument_error;
use crate::value::{Builtin, Value};

pub(crate) fn get_method(receiver: &Value, name: &str) -> Option<Value> {
    match receiver {
        Value::Int(n) => {
            let n = *n;
            let builtin = match name {
                "float" => Builtin::new("float", move |_, args| {
                    if !args.is_empty() {
                        return count_argument_error(0, args.len());
                    }
                    Value::Float(n as f64)
                }),
                "string" => Builtin::new("string", move |_, args| {
                    if !args.is_empty() {
                        return count_argument_error(0, args.len());
                    }
                    Value::Str(n.to_string())
                }),
                _ => return None,
            };
            Some(Value::Builtin(builtin))
        },
        Value::Float(f) => {
            let f = *f;
            let builtin = match name {
                "int" => Builtin::new("int", move |_, args| {
                    if !args.is_empty() {
                        return count_argument_error(0, args.len());
                    }
                    Value::Int(f as i64)
                }),
                "string" => Builtin::new("string", move |_, args| {
                    if !args.is_empty() {
                        return count_argument_error(0, args.len());
                    }
                    Value::Str(Value::Float(f).inspect())
                }),
                _ => return None,
            };
            Some(Value::Builtin(builtin))
        },
        _ => None,
    }
}
