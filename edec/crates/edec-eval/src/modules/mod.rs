//! Importable modules.
//!
//! A module exposes a name and a table of builtin functions. `import
//! NAME` binds an import value whose method dispatch forwards to that
//! table, so `json.parse(…)` reads as a method call on the module.

mod json;
mod time;

use std::rc::Rc;

use rustc_hash::FxHashMap;

pub use json::JsonModule;
pub use time::TimeModule;

use crate::value::Value;

/// The module-registration contract.
pub trait Module {
    /// The name `import` binds.
    fn name(&self) -> &str;

    /// The module's function table (builtin values).
    fn functions(&self) -> &FxHashMap<String, Value>;
}

/// Builds the module registry. Called once at evaluator construction.
pub(crate) fn registry() -> FxHashMap<&'static str, Rc<dyn Module>> {
    let mut modules: FxHashMap<&'static str, Rc<dyn Module>> = FxHashMap::default();
    modules.insert("json", Rc::new(JsonModule::new()));
    modules.insert("time", Rc::new(TimeModule::new()));
    modules
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_contents() {
        let registry = registry();
        assert!(registry.contains_key("json"));
        assert!(registry.contains_key("time"));
        assert_eq!(registry["json"].name(), "json");
        assert_eq!(registry["time"].name(), "time");
    }

    #[test]
    fn test_module_function_tables() {
        let registry = registry();
        assert!(registry["json"].functions().contains_key("parse"));
        assert!(registry["json"].functions().contains_key("string"));
        assert!(registry["time"].functions().contains_key("now"));
        assert!(registry["time"].functions().contains_key("parse"));
    }
}
