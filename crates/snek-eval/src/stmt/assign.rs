//! Assignment `target = expr`: evaluate the RHS, then apply the LValue
//! protocol (identifier/list/record) to the target.

use crate::context::{EvalContext, ExecContext};
use snek_syntax::{Expr, Position};

pub fn execute(
    target: &Expr,
    value_expr: &Expr,
    _position: &Position,
    eval_ctx: &EvalContext<'_>,
    ctx: &mut ExecContext,
) {
    let value = match crate::expr::eval(value_expr, eval_ctx) {
        Ok(v) => v,
        Err(err) => {
            ctx.error = Some(err);
            return;
        }
    };
    match crate::expr::assign(target, value.clone(), eval_ctx) {
        Ok(()) => ctx.value = value,
        Err(err) => ctx.error = Some(err),
    }
}
