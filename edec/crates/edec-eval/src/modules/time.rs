//! The `time` module: `now(opts?) → Time`, `parse(str, fmt) → Time`.
//!
//! Format strings use chrono's strftime dialect. `now` accepts an
//! options hash whose `format` entry picks the render format.

use chrono::{Local, NaiveDate, NaiveDateTime};
use rustc_hash::FxHashMap;

use super::Module;
use crate::eval::Evaluator;
use crate::value::{TimeValue, Value, DEFAULT_TIME_FORMAT};

pub struct TimeModule {
    functions: FxHashMap<String, Value>,
}

impl TimeModule {
    pub fn new() -> Self {
        let mut functions = FxHashMap::default();
        functions.insert("now".to_string(), Value::builtin("now", time_now));
        functions.insert("parse".to_string(), Value::builtin("parse", time_parse));
        Self { functions }
    }
}

impl Default for TimeModule {
    fn default() -> Self {
        Self::new()
    }
}

impl Module for TimeModule {
    fn name(&self) -> &str {
        "time"
    }

    fn functions(&self) -> &FxHashMap<String, Value> {
        &self.functions
    }
}

fn time_now(_ev: &mut Evaluator, args: Vec<Value>) -> Value {
    if args.len() > 1 {
        return Value::error(format!("expected at most 1 argument(s), got {}", args.len()));
    }

    let mut format = DEFAULT_TIME_FORMAT.to_string();
    if let Some(arg) = args.first() {
        let opts = match arg {
            Value::Hash(opts) => opts,
            other => {
                return Value::error(format!(
                    "method 'now' expects a HASH argument, got {}",
                    other.type_name()
                ));
            },
        };
        match opts.borrow().get("format") {
            Some(Value::Str(f)) => format = f.clone(),
            Some(other) => {
                return Value::error(format!(
                    "expected time format to be of type 'STRING', got {}",
                    other.type_name()
                ));
            },
            None => {},
        }
    }

    Value::Time(TimeValue::new(Local::now().naive_local(), format))
}

fn time_parse(_ev: &mut Evaluator, args: Vec<Value>) -> Value {
    if args.len() != 2 {
        return Value::error(format!("expected 2 argument(s), got {}", args.len()));
    }
    let text = match &args[0] {
        Value::Str(s) => s,
        other => {
            return Value::error(format!(
                "method 'parse' expects a STRING argument, got {}",
                other.type_name()
            ));
        },
    };
    let format = match &args[1] {
        Value::Str(s) => s,
        other => {
            return Value::error(format!(
                "method 'parse' expects a STRING argument, got {}",
                other.type_name()
            ));
        },
    };

    match parse_naive(text, format) {
        Ok(value) => Value::Time(TimeValue::new(value, format.clone())),
        Err(error) => Value::error(format!("error parsing time: {error}")),
    }
}

/// Parses a timestamp, falling back to a date-only parse (midnight)
/// when the format carries no time-of-day fields.
fn parse_naive(text: &str, format: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    match NaiveDateTime::parse_from_str(text, format) {
        Ok(value) => Ok(value),
        Err(first) => match NaiveDate::parse_from_str(text, format) {
            Ok(date) => Ok(date.and_hms_opt(0, 0, 0).unwrap_or_default()),
            Err(_) => Err(first),
        },
    }
}
