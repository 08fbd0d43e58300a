//! Type alias `[export] type N = T`.

use crate::context::{EvalContext, ExecContext};
use crate::diagnostic::Diagnostic;
use crate::type_expr;
use snek_syntax::{InternedString, Position, TypeExpr};

pub fn execute(
    name: InternedString,
    type_expr: &TypeExpr,
    export: bool,
    position: &Position,
    eval_ctx: &EvalContext<'_>,
    ctx: &mut ExecContext,
) {
    let ty = match type_expr::resolve(type_expr, position, eval_ctx) {
        Ok(ty) => ty,
        Err(err) => {
            ctx.error = Some(err);
            return;
        }
    };
    if !eval_ctx.scope.bind_type(name, ty, export) {
        ctx.error = Some(Diagnostic::type_error(
            position.clone(),
            format!("Type `{name}` has already been defined"),
        ));
    }
}
