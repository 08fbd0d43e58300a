//! Short-circuiting `and`/`or`. Both operands must ultimately be `Bool`.

use crate::context::EvalContext;
use crate::diagnostic::Result;
use crate::value::Value;
use snek_syntax::{Expr, LogicalOp, Position};

pub fn eval(
    op: LogicalOp,
    left: &Expr,
    right: &Expr,
    _position: &Position,
    ctx: &EvalContext<'_>,
) -> Result<Value> {
    let lhs = super::eval_as_bool(left, ctx)?;
    match op {
        LogicalOp::And => {
            if !lhs {
                return Ok(Value::Bool(false));
            }
        }
        LogicalOp::Or => {
            if lhs {
                return Ok(Value::Bool(true));
            }
        }
    }
    Ok(Value::Bool(super::eval_as_bool(right, ctx)?))
}
