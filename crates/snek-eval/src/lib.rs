//! Runtime evaluation core for Snek: value model, structural type system,
//! tree-walking expression evaluator and statement executor, lexical scope,
//! module loading/caching, and the function-invocation protocol.
//!
//! Transformed from `cadenza-eval`, a tree-walking evaluator for a small
//! expression language; this crate keeps its value/scope/diagnostic idioms
//! while implementing Snek's own structural type system and statement-level
//! control flow.

pub mod context;
pub mod diagnostic;
pub mod expr;
pub mod host;
pub mod scope;
pub mod stmt;
pub mod type_expr;
pub mod types;
pub mod value;

pub use context::{EvalContext, ExecContext, Jump};
pub use diagnostic::{Diagnostic, DiagnosticKind, Result};
pub use host::{FuncDefinition, Interpreter, Message, ModuleBuilder, ModuleLoader, TypeDefinition};
pub use scope::Scope;
pub use types::{FuncParamType, FuncType, PrimitiveKind, Type};
pub use value::{FuncBody, FuncValue, ParamValue, Record, Value};
