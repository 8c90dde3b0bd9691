//! The runtime value model.
//!
//! [`Value`] is a tagged sum over every kind of datum an ede program
//! can produce. Containers (Array, Hash, Set) are reference-shared:
//! cloning a `Value` clones the handle, not the payload.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDateTime;
use edec_par::BlockStmt;
use indexmap::IndexMap;

use crate::env::Env;
use crate::eval::Evaluator;
use crate::hash_key::HashKey;
use crate::modules::Module;

/// Render format used by `Time` values unless overridden.
pub const DEFAULT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Signature shared by free builtin functions and receiver methods.
pub type BuiltinFn = dyn Fn(&mut Evaluator, Vec<Value>) -> Value;

/// A runtime value.
#[derive(Clone)]
pub enum Value {
    Nil,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Array(Rc<RefCell<Vec<Value>>>),
    /// String-keyed, insertion-ordered.
    Hash(Rc<RefCell<IndexMap<String, Value>>>),
    /// Keyed by [`HashKey`]; the map value is the original member.
    Set(Rc<RefCell<IndexMap<HashKey, Value>>>),
    Function(Rc<Function>),
    Builtin(Builtin),
    /// Internal unwinding token produced by `return` / `<-`.
    Return(Box<Value>),
    Error(String),
    Import(Rc<Import>),
    Time(TimeValue),
}

/// A user function with its captured environment.
pub struct Function {
    pub params: Vec<String>,
    pub body: BlockStmt,
    pub env: Env,
}

/// An opaque callable.
#[derive(Clone)]
pub struct Builtin {
    pub name: String,
    pub func: Rc<BuiltinFn>,
}

impl Builtin {
    pub fn new(name: impl Into<String>, func: impl Fn(&mut Evaluator, Vec<Value>) -> Value + 'static) -> Self {
        Self {
            name: name.into(),
            func: Rc::new(func),
        }
    }
}

/// A module bound into scope by `import`.
pub struct Import {
    pub name: String,
    pub module: Rc<dyn Module>,
}

/// An instant paired with its render format.
#[derive(Clone, Debug, PartialEq)]
pub struct TimeValue {
    pub value: NaiveDateTime,
    pub format: String,
}

impl TimeValue {
    pub fn new(value: NaiveDateTime, format: impl Into<String>) -> Self {
        let format = format.into();
        let format = if format.is_empty() {
            DEFAULT_TIME_FORMAT.to_string()
        } else {
            format
        };
        Self { value, format }
    }

    /// Renders the instant with the given strftime format, rejecting
    /// invalid format strings instead of panicking inside chrono.
    pub fn render(&self, format: &str) -> Result<String, String> {
        let items: Vec<Item<'_>> = StrftimeItems::new(format).collect();
        if items.iter().any(|item| matches!(item, Item::Error)) {
            return Err(format!("invalid time format '{format}'"));
        }
        Ok(self
            .value
            .format_with_items(items.into_iter())
            .to_string())
    }
}

impl Value {
    /// Wraps a list payload.
    pub fn array(entries: Vec<Value>) -> Value {
        Value::Array(Rc::new(RefCell::new(entries)))
    }

    /// Wraps a hash payload.
    pub fn hash(entries: IndexMap<String, Value>) -> Value {
        Value::Hash(Rc::new(RefCell::new(entries)))
    }

    /// Wraps a set payload.
    pub fn set(entries: IndexMap<HashKey, Value>) -> Value {
        Value::Set(Rc::new(RefCell::new(entries)))
    }

    /// A value-level runtime error. User-visible messages carry the
    /// `error: ` prefix by convention.
    pub fn error(message: impl fmt::Display) -> Value {
        Value::Error(format!("error: {message}"))
    }

    /// Wraps a plain function pointer as a builtin value.
    pub fn builtin(name: &str, func: fn(&mut Evaluator, Vec<Value>) -> Value) -> Value {
        Value::Builtin(Builtin::new(name, func))
    }

    /// The value's type tag, as surfaced by the `type()` pseudo-method
    /// and by error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "NULL",
            Value::Bool(_) => "BOOLEAN",
            Value::Int(_) => "INT",
            Value::Float(_) => "FLOAT",
            Value::Str(_) => "STRING",
            Value::Array(_) => "ARRAY",
            Value::Hash(_) => "HASH",
            Value::Set(_) => "SET",
            Value::Function(_) => "FUNCTION",
            Value::Builtin(_) => "BUILTIN",
            Value::Return(_) => "RETURN_VALUE",
            Value::Error(_) => "ERROR",
            Value::Import(_) => "IMPORT",
            Value::Time(_) => "TIME",
        }
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    /// Truthiness: false, zero, empty string, empty array, and nil are
    /// falsy; errors are falsy; everything else is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Bool(b) => *b,
            Value::Int(n) => *n != 0,
            Value::Float(f) => *f != 0.0,
            Value::Str(s) => !s.is_empty(),
            Value::Array(entries) => !entries.borrow().is_empty(),
            Value::Nil => false,
            Value::Error(message) => message.is_empty(),
            _ => true,
        }
    }

    /// The universal equality contract.
    ///
    /// Numeric equality is cross-kind (`1 == 1.0`); Array and Hash
    /// compare structurally; Function and Builtin never compare equal,
    /// not even to themselves.
    pub fn equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Int(a), Value::Float(b)) | (Value::Float(b), Value::Int(a)) => {
                *a as f64 == *b
            },
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => {
                let (a, b) = (a.borrow(), b.borrow());
                a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| x.equals(y))
            },
            (Value::Hash(a), Value::Hash(b)) => {
                let (a, b) = (a.borrow(), b.borrow());
                a.len() == b.len()
                    && a.iter()
                        .all(|(k, v)| b.get(k).map(|w| v.equals(w)).unwrap_or(false))
            },
            (Value::Set(a), Value::Set(b)) => {
                let (a, b) = (a.borrow(), b.borrow());
                a.len() == b.len() && a.keys().all(|k| b.contains_key(k))
            },
            (Value::Error(a), Value::Error(b)) => a == b,
            (Value::Return(a), Value::Return(b)) => a.equals(b),
            (Value::Import(a), Value::Import(b)) => a.name == b.name,
            (Value::Time(a), Value::Time(b)) => a.value == b.value,
            // Function and Builtin are identity-free: never equal
            _ => false,
        }
    }

    /// Print form of the value.
    pub fn inspect(&self) -> String {
        match self {
            Value::Nil => "null".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Int(n) => n.to_string(),
            Value::Float(f) => f.to_string(),
            Value::Str(s) => s.clone(),
            Value::Array(entries) => {
                let entries: Vec<String> =
                    entries.borrow().iter().map(|v| v.inspect()).collect();
                format!("[{}]", entries.join(", "))
            },
            Value::Hash(entries) => {
                let entries: Vec<String> = entries
                    .borrow()
                    .iter()
                    .map(|(k, v)| format!("{}: {}", k, v.inspect()))
                    .collect();
                if entries.is_empty() {
                    "{\n }".to_string()
                } else {
                    format!("{{\n {} }}", entries.join(", "))
                }
            },
            Value::Set(entries) => {
                let entries: Vec<String> =
                    entries.borrow().values().map(|v| v.inspect()).collect();
                if entries.is_empty() {
                    "(\n )".to_string()
                } else {
                    format!("(\n {} )", entries.join(", "))
                }
            },
            Value::Function(_) => "func".to_string(),
            Value::Builtin(_) => "builtin fn".to_string(),
            Value::Return(inner) => inner.inspect(),
            Value::Error(message) => message.clone(),
            Value::Import(import) => import.name.clone(),
            Value::Time(time) => time
                .render(&time.format)
                .unwrap_or_else(|message| message),
        }
    }

    /// The canonical string used when this value keys a Hash, or
    /// `None` for unhashable kinds.
    pub fn as_hash_entry_key(&self) -> Option<String> {
        self.hash_key().map(|key| key.value)
    }

    /// The `{type, canonical-string}` key for Sets, or `None` for
    /// unhashable kinds (Array, Hash, Function, Builtin, Error,
    /// Return, Import).
    pub fn hash_key(&self) -> Option<HashKey> {
        let key = match self {
            Value::Nil => HashKey::new("NULL", "null"),
            Value::Bool(b) => HashKey::new("BOOLEAN", b.to_string()),
            Value::Int(n) => HashKey::new("INT", n.to_string()),
            Value::Float(f) => HashKey::new("FLOAT", f.to_string()),
            Value::Str(s) => HashKey::new("STRING", s.clone()),
            Value::Set(_) => HashKey::new("SET", self.inspect()),
            Value::Time(t) => HashKey::new("TIME", t.value.to_string()),
            _ => return None,
        };
        Some(key)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.type_name(), self.inspect())
    }
}
