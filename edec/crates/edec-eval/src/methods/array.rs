//! Array methods.
//!
//! `map` and `filter` run the callback per element (with the element
//! bound to the parameter and `index` to its position), mutate the
//! receiver in place, and return it. Mutating methods generally return
//! the receiver so calls chain.

use std::rc::Rc;

use indexmap::IndexMap;

use super::{argument_type_error, count_argument_error};
use crate::value::{Builtin, Value};

pub(crate) fn get_method(receiver: &Value, name: &str) -> Option<Value> {
    let entries = match receiver {
        Value::Array(entries) => Rc::clone(entries),
        _ => return None,
    };
    let receiver = receiver.clone();

    let builtin = match name {
        "push" => Builtin::new("push", move |_, args| {
            entries.borrow_mut().extend(args);
            receiver.clone()
        }),
        "pop" => Builtin::new("pop", move |_, args| {
            if !args.is_empty() {
                return count_argument_error(0, args.len());
            }
            entries.borrow_mut().pop();
            receiver.clone()
        }),
        "first" => Builtin::new("first", move |_, args| {
            if !args.is_empty() {
                return count_argument_error(0, args.len());
            }
            entries.borrow().first().cloned().unwrap_or(Value::Nil)
        }),
        "last" => Builtin::new("last", move |_, args| {
            if !args.is_empty() {
                return count_argument_error(0, args.len());
            }
            entries.borrow().last().cloned().unwrap_or(Value::Nil)
        }),
        "length" => Builtin::new("length", move |_, args| {
            if !args.is_empty() {
                return count_argument_error(0, args.len());
            }
            Value::Int(entries.borrow().len() as i64)
        }),
        "reverse" => Builtin::new("reverse", move |_, args| {
            if !args.is_empty() {
                return count_argument_error(0, args.len());
            }
            entries.borrow_mut().reverse();
            receiver.clone()
        }),
        "map" => Builtin::new("map", move |ev, args| {
            if args.len() != 1 {
                return count_argument_error(1, args.len());
            }
            let func = match &args[0] {
                Value::Function(func) => Rc::clone(func),
                other => return argument_type_error("map", "FUNCTION", other),
            };
            let snapshot: Vec<Value> = entries.borrow().clone();
            let mut mapped = Vec::with_capacity(snapshot.len());
            for (position, element) in snapshot.into_iter().enumerate() {
                let out = ev.call_with_index(&func, element, position as i64);
                if out.is_error() {
                    return out;
                }
                mapped.push(out);
            }
            *entries.borrow_mut() = mapped;
            receiver.clone()
        }),
        "filter" => Builtin::new("filter", move |ev, args| {
            if args.len() != 1 {
                return count_argument_error(1, args.len());
            }
            let func = match &args[0] {
                Value::Function(func) => Rc::clone(func),
                other => return argument_type_error("filter", "FUNCTION", other),
            };
            let snapshot: Vec<Value> = entries.borrow().clone();
            let mut kept = Vec::new();
            for (position, element) in snapshot.into_iter().enumerate() {
                let out = ev.call_with_index(&func, element.clone(), position as i64);
                if out.is_error() {
                    return out;
                }
                if out.is_truthy() {
                    kept.push(element);
                }
            }
            *entries.borrow_mut() = kept;
            receiver.clone()
        }),
        "find" => Builtin::new("find", move |ev, args| {
            if args.len() != 1 {
                return count_argument_error(1, args.len());
            }
            let func = match &args[0] {
                Value::Function(func) => Rc::clone(func),
                other => return argument_type_error("find", "FUNCTION", other),
            };
            let snapshot: Vec<Value> = entries.borrow().clone();
            for (position, element) in snapshot.into_iter().enumerate() {
                let out = ev.call_with_index(&func, element.clone(), position as i64);
                if out.is_error() {
                    return out;
                }
                if out.is_truthy() {
                    return element;
                }
            }
            Value::Nil
        }),
        "contains" => Builtin::new("contains", move |_, args| {
            if args.len() != 1 {
                return count_argument_error(1, args.len());
            }
            let found = entries.borrow().iter().any(|el| el.equals(&args[0]));
            Value::Bool(found)
        }),
        "join" => Builtin::new("join", move |_, args| {
            if args.len() != 1 {
                return count_argument_error(1, args.len());
            }
            let separator = match &args[0] {
                Value::Str(s) => s.clone(),
                other => return argument_type_error("join", "STRING", other),
            };
            let pieces: Vec<String> = entries.borrow().iter().map(|el| el.inspect()).collect();
            Value::Str(pieces.join(&separator))
        }),
        "merge" => Builtin::new("merge", move |_, args| {
            if args.is_empty() {
                return count_argument_error(">=1", args.len());
            }
            for arg in &args {
                let other = match arg {
                    Value::Array(other) => other.borrow().clone(),
                    other => return argument_type_error("merge", "ARRAY", other),
                };
                entries.borrow_mut().extend(other);
            }
            receiver.clone()
        }),
        "clear" => Builtin::new("clear", move |_, args| {
            if !args.is_empty() {
                return count_argument_error(0, args.len());
            }
            entries.borrow_mut().clear();
            receiver.clone()
        }),
        "set" => Builtin::new("set", move |_, args| {
            if !args.is_empty() {
                return count_argument_error(0, args.len());
            }
            let mut members = IndexMap::new();
            for element in entries.borrow().iter() {
                let key = match element.hash_key() {
                    Some(key) => key,
                    None => {
                        return Value::error(format!(
                            "invalid set entry of type '{}'",
                            element.type_name()
                        ));
                    },
                };
                members.insert(key, element.clone());
            }
            Value::set(members)
        }),
        _ => return None,
    };

    Some(Value::Builtin(builtin))
}
