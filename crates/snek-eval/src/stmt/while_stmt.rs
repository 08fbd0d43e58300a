//! `while`: loops evaluating the condition and running the body, handling
//! `break`/`continue`/`return` per spec.md §4.E.

use crate::context::{EvalContext, ExecContext, Jump};
use snek_syntax::{Expr, Position, Stmt};

pub fn execute(
    condition: &Expr,
    body: &[Stmt],
    _position: &Position,
    eval_ctx: &EvalContext<'_>,
    ctx: &mut ExecContext,
) {
    loop {
        let cond = match crate::expr::eval_as_bool(condition, eval_ctx) {
            Ok(b) => b,
            Err(err) => {
                ctx.error = Some(err);
                return;
            }
        };
        if !cond {
            return;
        }

        super::execute_block(body, eval_ctx, ctx);

        if ctx.error.is_some() {
            return;
        }
        match ctx.jump {
            Jump::None => continue,
            Jump::Break => {
                ctx.jump = Jump::None;
                return;
            }
            Jump::Continue => {
                ctx.jump = Jump::None;
                continue;
            }
            Jump::Return => return,
        }
    }
}
