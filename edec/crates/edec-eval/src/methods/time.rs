//! Time methods.
//!
//! `sub` yields the difference `self - other`. Without options the
//! result is in seconds; a `{unit: "…"}` hash picks another unit.

use super::{argument_type_error, count_argument_error};
use crate::value::{Builtin, Value};

pub(crate) fn get_method(receiver: &Value, name: &str) -> Option<Value> {
    let time = match receiver {
        Value::Time(time) => time.clone(),
        _ => return None,
    };

    let builtin = match name {
        "string" => Builtin::new("string", move |_, args| {
            if args.len() > 1 {
                return count_argument_error("at most 1", args.len());
            }
            let format = match args.first() {
                Some(Value::Str(format)) => format.clone(),
                Some(other) => return argument_type_error("string", "STRING", other),
                None => time.format.clone(),
            };
            match time.render(&format) {
                Ok(rendered) => Value::Str(rendered),
                Err(message) => Value::error(message),
            }
        }),
        "sub" => Builtin::new("sub", move |_, args| {
            if args.is_empty() {
                return count_argument_error(">=1", args.len());
            }
            let other = match &args[0] {
                Value::Time(other) => other.clone(),
                other => return argument_type_error("sub", "TIME", other),
            };
            let duration = time.value - other.value;
            let nanos = duration.num_nanoseconds().unwrap_or(i64::MAX) as f64;

            let unit = match args.get(1) {
                None => None,
                Some(Value::Hash(opts)) => match opts.borrow().get("unit") {
                    Some(Value::Str(unit)) => Some(unit.clone()),
                    Some(other) => return argument_type_error("sub", "STRING", other),
                    None => None,
                },
                Some(other) => return argument_type_error("sub", "HASH", other),
            };

            Value::Float(in_unit(nanos, unit.as_deref()))
        }),
        _ => return None,
    };

    Some(Value::Builtin(builtin))
}

/// Converts a nanosecond count into the requested unit. Seconds is the
/// default and the fallback for unknown units.
fn in_unit(nanos: f64, unit: Option<&str>) -> f64 {
    let seconds = nanos / 1e9;
    let days = seconds / 86_400.0;
    match unit {
        Some("ns") => nanos,
        Some("us") => nanos / 1e3,
        Some("ms") => nanos / 1e6,
        Some("m") => seconds / 60.0,
        Some("h") => seconds / 3_600.0,
        Some("d") => days,
        Some("w") => days / 7.0,
        Some("M") => days / 30.0,
        Some("y") => days / 365.0,
        _ => seconds,
    }
}
