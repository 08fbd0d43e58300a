//! The two small control records threaded through evaluation: `EvalContext`
//! for expressions, `ExecContext` for statements.
//!
//! Grounded on `cadenza-eval/src/context.rs`'s `EvalContext<'a>{env,
//! compiler}` + `reborrow()` pattern, split into an expression-side context
//! (scope + host) and a dedicated `ExecContext` value per spec.md §3, since
//! Cadenza has no separate statement executor to thread control flow
//! through.

use crate::diagnostic::Diagnostic;
use crate::host::Interpreter;
use crate::scope::Scope;
use crate::value::Value;
use std::rc::Rc;

/// Threaded through expression evaluation: the current lexical scope and a
/// handle back to the host for calls/imports.
#[derive(Clone)]
pub struct EvalContext<'a> {
    pub scope: Rc<Scope>,
    pub interpreter: &'a Interpreter,
}

impl<'a> EvalContext<'a> {
    pub fn new(scope: Rc<Scope>, interpreter: &'a Interpreter) -> Self {
        Self { scope, interpreter }
    }

    /// A view of the same host with a different current scope, e.g. when
    /// descending into a child block or a called function's body.
    pub fn with_scope(&self, scope: Rc<Scope>) -> Self {
        Self {
            scope,
            interpreter: self.interpreter,
        }
    }
}

/// The jump state a statement may leave behind for its enclosing construct
/// to observe (spec.md §3, `ExecContext.jump`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Jump {
    None,
    Break,
    Continue,
    Return,
}

/// Threaded by `&mut` through statement execution (spec.md §3).
pub struct ExecContext {
    pub jump: Jump,
    pub error: Option<Diagnostic>,
    pub value: Value,
}

impl ExecContext {
    pub fn new() -> Self {
        Self {
            jump: Jump::None,
            error: None,
            value: Value::Null,
        }
    }

    /// Whether execution of the enclosing statement sequence must stop:
    /// either an error occurred or a non-trivial jump is pending.
    pub fn should_stop(&self) -> bool {
        self.error.is_some() || self.jump != Jump::None
    }
}

impl Default for ExecContext {
    fn default() -> Self {
        Self::new()
    }
}
