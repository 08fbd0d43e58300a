//! `break`/`continue`: set `ctx.jump` accordingly.

use crate::context::{ExecContext, Jump};

pub fn execute_break(ctx: &mut ExecContext) {
    ctx.jump = Jump::Break;
}

pub fn execute_continue(ctx: &mut ExecContext) {
    ctx.jump = Jump::Continue;
}
