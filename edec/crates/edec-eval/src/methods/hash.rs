//! Hash methods.

use std::rc::Rc;

use super::count_argument_error;
use crate::value::{Builtin, Value};

pub(crate) fn get_method(receiver: &Value, name: &str) -> Option<Value> {
    let entries = match receiver {
        Value::Hash(entries) => Rc::clone(entries),
        _ => return None,
    };
    let receiver = receiver.clone();

    let builtin = match name {
        "contains" => Builtin::new("contains", move |_, args| {
            if args.len() != 1 {
                return count_argument_error(1, args.len());
            }
            match args[0].as_hash_entry_key() {
                Some(key) => Value::Bool(entries.borrow().contains_key(&key)),
                None => invalid_key(&args[0]),
            }
        }),
        "get" => Builtin::new("get", move |_, args| {
            if args.len() != 1 {
                return count_argument_error(1, args.len());
            }
            match args[0].as_hash_entry_key() {
                Some(key) => entries.borrow().get(&key).cloned().unwrap_or(Value::Nil),
                None => invalid_key(&args[0]),
            }
        }),
        "set" => Builtin::new("set", move |_, args| {
            if args.len() != 2 {
                return count_argument_error(2, args.len());
            }
            let key = match args[0].as_hash_entry_key() {
                Some(key) => key,
                None => return invalid_key(&args[0]),
            };
            entries.borrow_mut().insert(key, args[1].clone());
            receiver.clone()
        }),
        "keys" => Builtin::new("keys", move |_, args| {
            if !args.is_empty() {
                return count_argument_error(0, args.len());
            }
            let keys: Vec<Value> = entries
                .borrow()
                .keys()
                .map(|k| Value::Str(k.clone()))
                .collect();
            Value::array(keys)
        }),
        "items" => Builtin::new("items", move |_, args| {
            if !args.is_empty() {
                return count_argument_error(0, args.len());
            }
            let items: Vec<Value> = entries
                .borrow()
                .iter()
                .map(|(k, v)| Value::array(vec![Value::Str(k.clone()), v.clone()]))
                .collect();
            Value::array(items)
        }),
        "clear" => Builtin::new("clear", move |_, args| {
            if !args.is_empty() {
                return count_argument_error(0, args.len());
            }
            entries.borrow_mut().clear();
            receiver.clone()
        }),
        _ => return None,
    };

    Some(Value::Builtin(builtin))
}

fn invalid_key(value: &Value) -> Value {
    Value::error(format!("invalid hash key of type '{}'", value.type_name()))
}
