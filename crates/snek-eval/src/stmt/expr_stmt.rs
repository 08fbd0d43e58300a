//! Expression statement: evaluate, store the value, or set the error.

use crate::context::{EvalContext, ExecContext};
use snek_syntax::Expr;

pub fn execute(expr: &Expr, eval_ctx: &EvalContext<'_>, ctx: &mut ExecContext) {
    match crate::expr::eval(expr, eval_ctx) {
        Ok(value) => ctx.value = value,
        Err(err) => ctx.error = Some(err),
    }
}
