//! `{ .. }`: create a child scope, execute statements in order, drop the
//! scope at the end.

use crate::context::{EvalContext, ExecContext};
use crate::scope::Scope;
use snek_syntax::{Position, Stmt};
use std::rc::Rc;

pub fn execute(body: &[Stmt], _position: &Position, eval_ctx: &EvalContext<'_>, ctx: &mut ExecContext) {
    let child_scope = Rc::new(Scope::child(eval_ctx.scope.clone()));
    let child_ctx = eval_ctx.with_scope(child_scope);
    super::execute_block(body, &child_ctx, ctx);
}
