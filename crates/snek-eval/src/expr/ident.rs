//! Identifier expressions: scope lookup as an rvalue, `bind_variable` as an
//! LValue.

use crate::context::EvalContext;
use crate::diagnostic::{Diagnostic, Result};
use crate::value::Value;
use snek_syntax::{InternedString, Position};

pub fn eval(name: InternedString, position: &Position, ctx: &EvalContext<'_>) -> Result<Value> {
    ctx.scope
        .lookup_variable(name)
        .ok_or_else(|| Diagnostic::lookup(position.clone(), format!("Unknown variable: {name}")))
}

pub fn assign(
    name: InternedString,
    value: Value,
    position: &Position,
    ctx: &EvalContext<'_>,
) -> Result<()> {
    if ctx.scope.bind_variable(name, value, false) {
        Ok(())
    } else {
        Err(Diagnostic::type_error(
            position.clone(),
            format!("Variable `{name}` has already been defined"),
        ))
    }
}
