//! Call expressions `f(a1, .., an)`: evaluate callee and arguments, then
//! hand off to the host's call protocol (spec.md §4.F).

use crate::context::EvalContext;
use crate::diagnostic::{Diagnostic, Result};
use crate::value::Value;
use snek_syntax::{Expr, Position};

pub fn eval(callee: &Expr, args: &[Expr], position: &Position, ctx: &EvalContext<'_>) -> Result<Value> {
    let callee_value = super::eval(callee, ctx)?;
    let Value::Func(func) = &callee_value else {
        return Err(Diagnostic::type_error(
            position.clone(),
            format!("{} is not callable", callee_value.type_of()),
        ));
    };

    let mut arg_values = Vec::with_capacity(args.len());
    for arg in args {
        arg_values.push(super::eval(arg, ctx)?);
    }

    ctx.interpreter.call(func, arg_values, position)
}
