//! edec-eval - Tree-Walking Evaluator
//!
//! Executes a parsed [`edec_par::Program`] against an environment chain
//! and produces a [`Value`].
//!
//! # Architecture
//!
//! ```text
//! Program AST
//!      │
//!      ▼
//! [Evaluator] ── recursive walk, one child environment per
//!      │         call / block / loop iteration
//!      ▼
//!   Value ── tagged sum; containers are reference-shared
//! ```
//!
//! Three conventions shape the evaluator:
//!
//! - **Errors are values.** Runtime failures are `Value::Error`; they
//!   propagate like any other value but short-circuit blocks and the
//!   top-level program loop, and are recoverable only through
//!   `match { case error: … }`.
//! - **Return is a wrapper.** `return`/`<-` wraps its value in
//!   `Value::Return`; every block checks and rethrows, and function
//!   application unwraps it.
//! - **Containers alias.** Array, Hash, and Set payloads live behind
//!   `Rc<RefCell<…>>`, so two names bound to one container observe each
//!   other's mutations. Environments use the same sharing to implement
//!   closures.

mod builtins;
mod env;
mod eval;
mod hash_key;
pub mod methods;
pub mod modules;
mod value;

pub use builtins::lookup_builtin;
pub use env::{Env, Environment};
pub use eval::Evaluator;
pub use hash_key::HashKey;
pub use modules::Module;
pub use value::{Builtin, BuiltinFn, Function, Import, TimeValue, Value, DEFAULT_TIME_FORMAT};
