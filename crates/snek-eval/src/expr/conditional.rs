//! Conditional expression `a if c else b`.

use crate::context::EvalContext;
use crate::diagnostic::Result;
use crate::value::Value;
use snek_syntax::{Expr, Position};

pub fn eval(
    condition: &Expr,
    then_branch: &Expr,
    else_branch: &Expr,
    _position: &Position,
    ctx: &EvalContext<'_>,
) -> Result<Value> {
    if super::eval_as_bool(condition, ctx)? {
        super::eval(then_branch, ctx)
    } else {
        super::eval(else_branch, ctx)
    }
}
