//! The expression evaluator: one file per node kind, dispatched from
//! [`eval`]. Mirrors the "one file per construct" layout of
//! `cadenza-eval/src/special_form/` — each file here keeps only the
//! evaluation half of that pattern, since Snek has no bytecode/IR backend
//! (non-goal) to generate alongside it.

mod binary;
mod call;
mod conditional;
mod field_access;
mod func;
mod ident;
mod list;
mod literal;
mod logical;
mod record;
mod subscript;
mod unary;

use crate::context::EvalContext;
use crate::diagnostic::{Diagnostic, Result};
use crate::value::Value;
use snek_syntax::Expr;

/// Reduces an expression node to a value given a scope (spec.md §4.D).
pub fn eval(expr: &Expr, ctx: &EvalContext<'_>) -> Result<Value> {
    match expr {
        Expr::Literal { value, .. } => Ok(literal::eval(value)),
        Expr::Ident { name, position } => ident::eval(*name, position, ctx),
        Expr::List { elements, .. } => list::eval(elements, ctx),
        Expr::Record { fields, .. } => record::eval(fields, ctx),
        Expr::FieldAccess {
            receiver,
            field,
            position,
        } => field_access::eval(receiver, *field, position, ctx),
        Expr::Subscript {
            receiver,
            index,
            optional,
            position,
        } => subscript::eval(receiver, index, *optional, position, ctx),
        Expr::Call {
            callee,
            args,
            position,
        } => call::eval(callee, args, position, ctx),
        Expr::Func {
            params,
            return_type,
            body,
            position,
        } => func::eval(params, return_type.as_ref(), body, position, ctx),
        Expr::Binary {
            op,
            left,
            right,
            position,
        } => binary::eval(*op, left, right, position, ctx),
        Expr::Unary {
            op,
            operand,
            position,
        } => unary::eval(*op, operand, position, ctx),
        Expr::Logical {
            op,
            left,
            right,
            position,
        } => logical::eval(*op, left, right, position, ctx),
        Expr::Conditional {
            condition,
            then_branch,
            else_branch,
            position,
        } => conditional::eval(condition, then_branch, else_branch, position, ctx),
    }
}

/// Evaluates `expr`, requiring the result be a `Bool`; used by `if`/`while`
/// and the `not`/`and`/`or` operators (spec.md §4.D).
pub fn eval_as_bool(expr: &Expr, ctx: &EvalContext<'_>) -> Result<bool> {
    let value = eval(expr, ctx)?;
    match value {
        Value::Bool(b) => Ok(b),
        other => Err(Diagnostic::type_error(
            expr.position().clone(),
            format!("Expected Bool, got {}", other.type_of()),
        )),
    }
}

/// Applies the LValue assignment protocol: identifier, list destructure, or
/// record destructure (spec.md §4.D/§4.E). Any other expression form is not
/// assignable.
pub fn assign(expr: &Expr, value: Value, ctx: &EvalContext<'_>) -> Result<()> {
    match expr {
        Expr::Ident { name, position } => ident::assign(*name, value, position, ctx),
        Expr::List { elements, position } => list::assign(elements, value, position, ctx),
        Expr::Record { fields, position } => record::assign(fields, value, position, ctx),
        other => Err(Diagnostic::type_error(
            other.position().clone(),
            "Expression is not assignable.",
        )),
    }
}
