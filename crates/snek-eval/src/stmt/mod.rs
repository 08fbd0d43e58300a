//! The statement executor: one file per statement kind, dispatched from
//! [`execute`]/[`execute_block`]. Mirrors the scope-push/pop-around-sequence
//! pattern of `cadenza-eval/src/special_form/block_form.rs`, generalized
//! from "evaluate a sequence, return the last" to "thread `ExecContext`
//! through a sequence, stop at the first signal" (spec.md §4.E).

mod assign;
mod block;
mod break_continue;
mod export;
mod expr_stmt;
mod if_stmt;
mod import;
mod return_stmt;
mod type_alias;
mod while_stmt;

use crate::context::{EvalContext, ExecContext};
use snek_syntax::Stmt;

/// Executes statements in order, stopping at the first one that leaves an
/// error or a non-`None` jump pending in `ctx`.
pub fn execute_block(body: &[Stmt], eval_ctx: &EvalContext<'_>, ctx: &mut ExecContext) {
    for stmt in body {
        execute(stmt, eval_ctx, ctx);
        if ctx.should_stop() {
            return;
        }
    }
}

pub fn execute(stmt: &Stmt, eval_ctx: &EvalContext<'_>, ctx: &mut ExecContext) {
    match stmt {
        Stmt::Expr { expr, .. } => expr_stmt::execute(expr, eval_ctx, ctx),
        Stmt::Assign {
            target,
            value,
            position,
        } => assign::execute(target, value, position, eval_ctx, ctx),
        Stmt::TypeAlias {
            name,
            type_expr,
            export,
            position,
        } => type_alias::execute(*name, type_expr, *export, position, eval_ctx, ctx),
        Stmt::Export {
            name,
            value,
            position,
        } => export::execute(*name, value, position, eval_ctx, ctx),
        Stmt::If {
            condition,
            then_branch,
            else_branch,
            position,
        } => if_stmt::execute(condition, then_branch, else_branch.as_deref(), position, eval_ctx, ctx),
        Stmt::While {
            condition,
            body,
            position,
        } => while_stmt::execute(condition, body, position, eval_ctx, ctx),
        Stmt::Break { .. } => break_continue::execute_break(ctx),
        Stmt::Continue { .. } => break_continue::execute_continue(ctx),
        Stmt::Return { value, position } => return_stmt::execute(value.as_ref(), position, eval_ctx, ctx),
        Stmt::Block { body, position } => block::execute(body, position, eval_ctx, ctx),
        Stmt::Import {
            module_path,
            specifiers,
            position,
        } => import::execute(module_path, specifiers, position, eval_ctx, ctx),
    }
}
