//! Receiver-dispatched builtin methods.
//!
//! Every value kind that has methods implements the method-provider
//! contract: given a name, it may produce a builtin closure over the
//! receiver. Dispatch is by runtime type; each method validates arity
//! and argument types and reports violations as error values.

mod array;
mod hash;
mod number;
mod set;
mod string;
mod time;

use crate::value::Value;

/// Looks up a method on a receiver, returning a builtin closed over
/// it. `None` means the receiver's kind has no such method.
pub fn get_method(receiver: &Value, name: &str) -> Option<Value> {
    match receiver {
        Value::Array(_) => array::get_method(receiver, name),
        Value::Hash(_) => hash::get_method(receiver, name),
        Value::Set(_) => set::get_method(receiver, name),
        Value::Str(_) => string::get_method(receiver, name),
        Value::Int(_) | Value::Float(_) => number::get_method(receiver, name),
        Value::Time(_) => time::get_method(receiver, name),
        _ => None,
    }
}

/// `expected N argument(s), got M`
pub(crate) fn count_argument_error(expected: impl std::fmt::Display, got: usize) -> Value {
    Value::error(format!("expected {expected} argument(s), got {got}"))
}

/// `method 'X' expects a T argument, got U`
pub(crate) fn argument_type_error(method: &str, expected: &str, got: &Value) -> Value {
    Value::error(format!(
        "method '{method}' expects a {expected} argument, got {}",
        got.type_name()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_by_kind() {
        assert!(get_method(&Value::array(vec![]), "push").is_some());
        assert!(get_method(&Value::Str("x".into()), "split").is_some());
        assert!(get_method(&Value::Int(1), "float").is_some());
        assert!(get_method(&Value::Nil, "push").is_none());
        assert!(get_method(&Value::array(vec![]), "nope").is_none());
    }

    #[test]
    fn test_error_helpers() {
        match count_argument_error(1, 3) {
            Value::Error(message) => {
                assert_eq!(message, "error: expected 1 argument(s), got 3");
            },
            other => panic!("expected error, got {other:?}"),
        }
        match argument_type_error("map", "FUNCTION", &Value::Int(1)) {
            Value::Error(message) => {
                assert_eq!(message, "error: method 'map' expects a FUNCTION argument, got INT");
            },
            other => panic!("expected error, got {other:?}"),
        }
    }
}
