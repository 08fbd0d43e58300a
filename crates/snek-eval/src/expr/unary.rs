//! Unary `not`.

use crate::context::EvalContext;
use crate::diagnostic::{Diagnostic, Result};
use crate::value::Value;
use snek_syntax::{Expr, Position, UnaryOp};

pub fn eval(op: UnaryOp, operand: &Expr, position: &Position, ctx: &EvalContext<'_>) -> Result<Value> {
    match op {
        UnaryOp::Not => match super::eval(operand, ctx)? {
            Value::Bool(b) => Ok(Value::Bool(!b)),
            other => Err(Diagnostic::type_error(
                position.clone(),
                format!("Expected Bool, got {}", other.type_of()),
            )),
        },
    }
}
