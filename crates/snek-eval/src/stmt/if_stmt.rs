//! `if`/`else`: evaluate the condition as bool, execute the matching
//! branch, propagate `error`/`jump`.

use crate::context::{EvalContext, ExecContext};
use snek_syntax::{Expr, Position, Stmt};

pub fn execute(
    condition: &Expr,
    then_branch: &[Stmt],
    else_branch: Option<&[Stmt]>,
    _position: &Position,
    eval_ctx: &EvalContext<'_>,
    ctx: &mut ExecContext,
) {
    let cond = match crate::expr::eval_as_bool(condition, eval_ctx) {
        Ok(b) => b,
        Err(err) => {
            ctx.error = Some(err);
            return;
        }
    };
    if cond {
        super::execute_block(then_branch, eval_ctx, ctx);
    } else if let Some(else_branch) = else_branch {
        super::execute_block(else_branch, eval_ctx, ctx);
    }
}
