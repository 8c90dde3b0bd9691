//! Binary operator evaluation.
//!
//! Dispatch is table-driven by operand kinds. `==`/`!=` apply to every
//! kind through the universal equality contract; Int/Int stays in
//! integer arithmetic; mixed Int/Float promotes to Float; Strings
//! concatenate with `+`; Bools support the logical operators. Anything
//! else is an invalid-operator error.

use crate::value::Value;
use crate::Evaluator;

impl Evaluator {
    pub(crate) fn eval_infix(&mut self, operator: &str, left: Value, right: Value) -> Value {
        // equality is defined for all kinds
        match operator {
            "==" => return Value::Bool(left.equals(&right)),
            "!=" => return Value::Bool(!left.equals(&right)),
            _ => {},
        }

        match (&left, &right) {
            (Value::Int(a), Value::Int(b)) => eval_integer_infix(operator, *a, *b),
            (Value::Float(a), Value::Float(b)) => eval_float_infix(operator, *a, *b),
            (Value::Int(a), Value::Float(b)) => eval_float_infix(operator, *a as f64, *b),
            (Value::Float(a), Value::Int(b)) => eval_float_infix(operator, *a, *b as f64),
            (Value::Str(a), Value::Str(b)) => eval_string_infix(operator, a, b, &left, &right),
            (Value::Bool(a), Value::Bool(b)) => eval_bool_infix(operator, *a, *b, &left, &right),
            _ => invalid_infix(operator, &left, &right),
        }
    }
}

fn invalid_infix(operator: &str, left: &Value, right: &Value) -> Value {
    Value::error(format!(
        "invalid infix operator {operator} for ({}) and ({})",
        left.inspect(),
        right.inspect()
    ))
}

fn eval_integer_infix(operator: &str, left: i64, right: i64) -> Value {
    match operator {
        "+" => Value::Int(left.wrapping_add(right)),
        "-" => Value::Int(left.wrapping_sub(right)),
        "*" => Value::Int(left.wrapping_mul(right)),
        "/" => {
            if right == 0 {
                Value::error("division by zero")
            } else {
                Value::Int(left.wrapping_div(right))
            }
        },
        "%" => {
            if right == 0 {
                Value::error("division by zero")
            } else {
                Value::Int(left.wrapping_rem(right))
            }
        },
        ">" => Value::Bool(left > right),
        "<" => Value::Bool(left < right),
        ">=" => Value::Bool(left >= right),
        "<=" => Value::Bool(left <= right),
        _ => invalid_infix(operator, &Value::Int(left), &Value::Int(right)),
    }
}

fn eval_float_infix(operator: &str, left: f64, right: f64) -> Value {
    match operator {
        "+" => Value::Float(left + right),
        "-" => Value::Float(left - right),
        "*" => Value::Float(left * right),
        // IEEE semantics: inf / NaN rather than an error
        "/" => Value::Float(left / right),
        ">" => Value::Bool(left > right),
        "<" => Value::Bool(left < right),
        ">=" => Value::Bool(left >= right),
        "<=" => Value::Bool(left <= right),
        _ => invalid_infix(operator, &Value::Float(left), &Value::Float(right)),
    }
}

fn eval_string_infix(operator: &str, a: &str, b: &str, left: &Value, right: &Value) -> Value {
    match operator {
        "+" => Value::Str(format!("{a}{b}")),
        _ => invalid_infix(operator, left, right),
    }
}

fn eval_bool_infix(operator: &str, a: bool, b: bool, left: &Value, right: &Value) -> Value {
    match operator {
        "&&" => Value::Bool(a && b),
        "||" => Value::Bool(a || b),
        _ => invalid_infix(operator, left, right),
    }
}
