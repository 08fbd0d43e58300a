//! Export statement `export N = expr`: evaluate and bind with the export
//! flag set.

use crate::context::{EvalContext, ExecContext};
use crate::diagnostic::Diagnostic;
use snek_syntax::{Expr, InternedString, Position};

pub fn execute(
    name: InternedString,
    value_expr: &Expr,
    position: &Position,
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
    if eval_ctx.scope.bind_variable(name, value.clone(), true) {
        ctx.value = value;
    } else {
        ctx.error = Some(Diagnostic::type_error(
            position.clone(),
            format!("Variable `{name}` has already been defined"),
        ));
    }
}
