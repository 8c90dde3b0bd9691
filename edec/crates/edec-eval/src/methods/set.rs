//! Set methods.

use std::rc::Rc;

use super::count_argument_error;
use crate::value::{Builtin, Value};

pub(crate) fn get_method(receiver: &Value, name: &str) -> Option<Value> {
    let entries = match receiver {
        Value::Set(entries) => Rc::clone(entries),
        _ => return None,
    };
    let receiver = receiver.clone();

    let builtin = match name {
        "add" => Builtin::new("add", move |_, args| {
            if args.is_empty() {
                return count_argument_error(">=1", args.len());
            }
            for arg in args {
                let key = match arg.hash_key() {
                    Some(key) => key,
                    None => return invalid_entry(&arg),
                };
                entries.borrow_mut().insert(key, arg);
            }
            receiver.clone()
        }),
        "delete" => Builtin::new("delete", move |_, args| {
            if args.is_empty() {
                return count_argument_error(">=1", args.len());
            }
            for arg in args {
                let key = match arg.hash_key() {
                    Some(key) => key,
                    None => return invalid_entry(&arg),
                };
                entries.borrow_mut().shift_remove(&key);
            }
            receiver.clone()
        }),
        "contains" => Builtin::new("contains", move |_, args| {
            if args.len() != 1 {
                return count_argument_error(1, args.len());
            }
            match args[0].hash_key() {
                Some(key) => Value::Bool(entries.borrow().contains_key(&key)),
                None => invalid_entry(&args[0]),
            }
        }),
        "items" => Builtin::new("items", move |_, args| {
            if !args.is_empty() {
                return count_argument_error(0, args.len());
            }
            let members: Vec<Value> = entries.borrow().values().cloned().collect();
            Value::array(members)
        }),
        "length" => Builtin::new("length", move |_, args| {
            if !args.is_empty() {
                return count_argument_error(0, args.len());
            }
            Value::Int(entries.borrow().len() as i64)
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

fn invalid_entry(value: &Value) -> Value {
    Value::error(format!("invalid set entry of type '{}'", value.type_name()))
}
