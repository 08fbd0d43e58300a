//! `return [expr]`: evaluate the optional expression into `ctx.value`, set
//! `jump = Return`.

use crate::context::{EvalContext, ExecContext, Jump};
use crate::value::Value;
use snek_syntax::{Expr, Position};

pub fn execute(
    value_expr: Option<&Expr>,
    _position: &Position,
    eval_ctx: &EvalContext<'_>,
    ctx: &mut ExecContext,
) {
    match value_expr {
        Some(expr) => match crate::expr::eval(expr, eval_ctx) {
            Ok(value) => ctx.value = value,
            Err(err) => {
                ctx.error = Some(err);
                return;
            }
        },
        None => ctx.value = Value::Null,
    }
    ctx.jump = Jump::Return;
}
