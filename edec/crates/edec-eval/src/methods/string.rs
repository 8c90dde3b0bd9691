//! String methods.

use super::{argument_type_error, count_argument_error};
use crate::value::{Builtin, Value};

pub(crate) fn get_method(receiver: &Value, name: &str) -> Option<Value> {
    let text = match receiver {
        Value::Str(s) => s.clone(),
        _ => return None,
    };

    let builtin = match name {
        "split" => Builtin::new("split", move |_, args| {
            if args.len() != 1 {
                return count_argument_error(1, args.len());
            }
            let separator = match &args[0] {
                Value::Str(s) => s.clone(),
                other => return argument_type_error("split", "STRING", other),
            };
            let pieces: Vec<Value> = if separator.is_empty() {
                text.chars().map(|c| Value::Str(c.to_string())).collect()
            } else {
                text.split(&separator)
                    .map(|piece| Value::Str(piece.to_string()))
                    .collect()
            };
            Value::array(pieces)
        }),
        "reverse" => Builtin::new("reverse", move |_, args| {
            if !args.is_empty() {
                return count_argument_error(0, args.len());
            }
            Value::Str(text.chars().rev().collect())
        }),
        "replace" => Builtin::new("replace", move |_, args| {
            if args.len() != 2 {
                return count_argument_error(2, args.len());
            }
            let old = match &args[0] {
                Value::Str(s) => s.clone(),
                other => return argument_type_error("replace", "STRING", other),
            };
            let new = match &args[1] {
                Value::Str(s) => s.clone(),
                other => return argument_type_error("replace", "STRING", other),
            };
            Value::Str(text.replace(&old, &new))
        }),
        "length" => Builtin::new("length", move |_, args| {
            if !args.is_empty() {
                return count_argument_error(0, args.len());
            }
            Value::Int(text.chars().count() as i64)
        }),
        _ => return None,
    };

    Some(Value::Builtin(builtin))
}
