//! Lexically-chained environments.
//!
//! An [`Environment`] is one frame of name→value bindings linked to an
//! optional parent frame. A new frame is created for every call, block,
//! and loop iteration; closures keep their defining frame alive through
//! the shared [`Env`] handle.

use std::cell::RefCell;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::value::Value;

/// Shared handle to an environment frame.
pub type Env = Rc<RefCell<Environment>>;

/// A frame of bindings with an optional parent.
#[derive(Default)]
pub struct Environment {
    store: FxHashMap<String, Value>,
    outer: Option<Env>,
}

impl Environment {
    /// Creates a root (global) environment.
    pub fn new() -> Env {
        Rc::new(RefCell::new(Environment::default()))
    }

    /// Creates a child frame of `outer`.
    pub fn new_enclosed(outer: &Env) -> Env {
        Rc::new(RefCell::new(Environment {
            store: FxHashMap::default(),
            outer: Some(Rc::clone(outer)),
        }))
    }

    /// Resolves a name, walking up the chain until found.
    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.store.get(name) {
            return Some(value.clone());
        }
        self.outer.as_ref().and_then(|outer| outer.borrow().get(name))
    }

    /// Binds a name in this frame, shadowing any outer binding.
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.store.insert(name.into(), value);
    }

    /// Updates an existing binding in the frame that owns it, walking
    /// up the chain. Returns false if no frame binds the name.
    pub fn update(&mut self, name: &str, value: Value) -> bool {
        if self.store.contains_key(name) {
            self.store.insert(name.to_string(), value);
            return true;
        }
        match &self.outer {
            Some(outer) => outer.borrow_mut().update(name, value),
            None => false,
        }
    }
}
