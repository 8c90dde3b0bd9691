//! The `json` module: `parse(str) → Hash`, `string(hash) → String`.
//!
//! Serialization is delegated to `serde_json`; the conversions between
//! JSON values and language values live here. Round-trip law: for a
//! hash of serializable values, `json.parse(json.string(h)) == h`.

use indexmap::IndexMap;
use rustc_hash::FxHashMap;

use super::Module;
use crate::eval::Evaluator;
use crate::value::Value;

pub struct JsonModule {
    functions: FxHashMap<String, Value>,
}

impl JsonModule {
    pub fn new() -> Self {
        let mut functions = FxHashMap::default();
        functions.insert("parse".to_string(), Value::builtin("parse", json_parse));
        functions.insert("string".to_string(), Value::builtin("string", json_string));
        Self { functions }
    }
}

impl Default for JsonModule {
    fn default() -> Self {
        Self::new()
    }
}

impl Module for JsonModule {
    fn name(&self) -> &str {
        "json"
    }

    fn functions(&self) -> &FxHashMap<String, Value> {
        &self.functions
    }
}

fn json_parse(_ev: &mut Evaluator, args: Vec<Value>) -> Value {
    if args.len() != 1 {
        return Value::error(format!("expected 1 argument(s), got {}", args.len()));
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

    let parsed: serde_json::Value = match serde_json::from_str(text) {
        Ok(parsed) => parsed,
        Err(error) => return Value::error(format!("error parsing string as json: {error}")),
    };

    match parsed {
        serde_json::Value::Object(_) => from_json(&parsed),
        _ => Value::error("error parsing string as json: expected an object"),
    }
}

fn json_string(_ev: &mut Evaluator, args: Vec<Value>) -> Value {
    if args.len() != 1 {
        return Value::error(format!("expected 1 argument(s), got {}", args.len()));
    }
    let hash = match &args[0] {
        Value::Hash(_) => &args[0],
        other => {
            return Value::error(format!(
                "method 'string' expects a HASH argument, got {}",
                other.type_name()
            ));
        },
    };

    match to_json(hash) {
        Ok(json) => match serde_json::to_string(&json) {
            Ok(rendered) => Value::Str(rendered),
            Err(error) => Value::error(format!("error rendering json: {error}")),
        },
        Err(error) => error,
    }
}

/// JSON value → language value.
fn from_json(json: &serde_json::Value) -> Value {
    match json {
        serde_json::Value::Null => Value::Nil,
        serde_json::Value::Bool(b) => Value::Bool(*b),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Int(i)
            } else {
                Value::Float(n.as_f64().unwrap_or(f64::NAN))
            }
        },
        serde_json::Value::String(s) => Value::Str(s.clone()),
        serde_json::Value::Array(items) => Value::array(items.iter().map(from_json).collect()),
        serde_json::Value::Object(fields) => {
            let mut entries = IndexMap::new();
            for (key, value) in fields {
                entries.insert(key.clone(), from_json(value));
            }
            Value::hash(entries)
        },
    }
}

/// Language value → JSON value. Unserializable kinds (functions,
/// errors, sets, times) are reported as error values.
fn to_json(value: &Value) -> Result<serde_json::Value, Value> {
    match value {
        Value::Nil => Ok(serde_json::Value::Null),
        Value::Bool(b) => Ok(serde_json::Value::Bool(*b)),
        Value::Int(n) => Ok(serde_json::Value::from(*n)),
        Value::Float(f) => serde_json::Number::from_f64(*f)
            .map(serde_json::Value::Number)
            .ok_or_else(|| Value::error("cannot serialize non-finite float to json")),
        Value::Str(s) => Ok(serde_json::Value::String(s.clone())),
        Value::Array(entries) => {
            let mut items = Vec::with_capacity(entries.borrow().len());
            for entry in entries.borrow().iter() {
                items.push(to_json(entry)?);
            }
            Ok(serde_json::Value::Array(items))
        },
        Value::Hash(entries) => {
            let mut fields = serde_json::Map::new();
            for (key, entry) in entries.borrow().iter() {
                fields.insert(key.clone(), to_json(entry)?);
            }
            Ok(serde_json::Value::Object(fields))
        },
        other => Err(Value::error(format!(
            "cannot serialize type '{}' to json",
            other.type_name()
        ))),
    }
}
