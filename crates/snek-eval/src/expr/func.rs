//! Function literals: evaluate parameter/return-type annotations against the
//! current scope, producing a closure over that scope (spec.md §4.D).

use crate::context::EvalContext;
use crate::diagnostic::Result;
use crate::type_expr;
use crate::value::{FuncBody, FuncValue, ParamValue, Value};
use snek_syntax::{Parameter, Position, Stmt, TypeExpr};
use std::rc::Rc;

pub fn eval(
    params: &[Parameter],
    return_type: Option<&TypeExpr>,
    body: &Rc<Vec<Stmt>>,
    position: &Position,
    ctx: &EvalContext<'_>,
) -> Result<Value> {
    let mut resolved_params = Vec::with_capacity(params.len());
    for param in params {
        let ty = type_expr::resolve(&param.type_expr, position, ctx)?;
        let default_value = match &param.default_value {
            Some(expr) => Some(super::eval(expr, ctx)?),
            None => None,
        };
        resolved_params.push(ParamValue {
            name: param.name,
            ty,
            rest: param.rest,
            default_value,
        });
    }

    let resolved_return_type = match return_type {
        Some(te) => Some(type_expr::resolve(te, position, ctx)?),
        None => None,
    };

    Ok(Value::Func(Rc::new(FuncValue {
        params: resolved_params,
        body: FuncBody::Block(body.clone()),
        return_type: resolved_return_type,
        captured: ctx.scope.clone(),
    })))
}
