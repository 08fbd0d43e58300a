//! Binary operators: `+ - * / % == != < <= > >=`.
//!
//! Dispatch on operator then operand kinds follows the match style of
//! `cadenza-eval/src/eval.rs::apply_operator`; the promotion/error rules
//! (mixed Int/Float promotion, Int-division-by-zero error vs. Float
//! IEEE754 semantics, Str/List concatenation) come from spec.md §4.D.

use crate::context::EvalContext;
use crate::diagnostic::{Diagnostic, Result};
use crate::value::Value;
use snek_syntax::{BinaryOp, Expr, Position};

pub fn eval(
    op: BinaryOp,
    left: &Expr,
    right: &Expr,
    position: &Position,
    ctx: &EvalContext<'_>,
) -> Result<Value> {
    let lhs = super::eval(left, ctx)?;
    let rhs = super::eval(right, ctx)?;

    match op {
        BinaryOp::Add => add(lhs, rhs, position),
        BinaryOp::Sub => arith(lhs, rhs, position, "-", |a, b| a - b, |a, b| a - b),
        BinaryOp::Mul => arith(lhs, rhs, position, "*", |a, b| a * b, |a, b| a * b),
        BinaryOp::Div => div(lhs, rhs, position),
        BinaryOp::Mod => arith(lhs, rhs, position, "%", |a, b| a % b, |a, b| a % b),
        BinaryOp::Eq => Ok(Value::Bool(lhs == rhs)),
        BinaryOp::Ne => Ok(Value::Bool(lhs != rhs)),
        BinaryOp::Lt => compare(lhs, rhs, position, |o| o.is_lt()),
        BinaryOp::Le => compare(lhs, rhs, position, |o| o.is_le()),
        BinaryOp::Gt => compare(lhs, rhs, position, |o| o.is_gt()),
        BinaryOp::Ge => compare(lhs, rhs, position, |o| o.is_ge()),
    }
}

fn add(lhs: Value, rhs: Value, position: &Position) -> Result<Value> {
    match (&lhs, &rhs) {
        (Value::Int(a), Value::Int(b)) => Ok(Value::Int(a + b)),
        (Value::Str(a), Value::Str(b)) => Ok(Value::str(format!("{a}{b}"))),
        (Value::List(a), Value::List(b)) => {
            let mut items = a.as_ref().clone();
            items.extend(b.as_ref().clone());
            Ok(Value::list(items))
        }
        _ => arith(lhs, rhs, position, "+", |a, b| a + b, |a, b| a + b),
    }
}

fn arith(
    lhs: Value,
    rhs: Value,
    position: &Position,
    symbol: &str,
    int_op: fn(i64, i64) -> i64,
    float_op: fn(f64, f64) -> f64,
) -> Result<Value> {
    match (lhs, rhs) {
        (Value::Int(a), Value::Int(b)) => Ok(Value::Int(int_op(a, b))),
        (Value::Float(a), Value::Float(b)) => Ok(Value::Float(float_op(a, b))),
        (Value::Int(a), Value::Float(b)) => Ok(Value::Float(float_op(a as f64, b))),
        (Value::Float(a), Value::Int(b)) => Ok(Value::Float(float_op(a, b as f64))),
        (a, b) => Err(Diagnostic::type_error(
            position.clone(),
            format!("Cannot apply `{symbol}` to {} and {}", a.type_of(), b.type_of()),
        )),
    }
}

fn div(lhs: Value, rhs: Value, position: &Position) -> Result<Value> {
    match (lhs, rhs) {
        (Value::Int(a), Value::Int(b)) => {
            if b == 0 {
                return Err(Diagnostic::arithmetic(position.clone(), "Division by zero."));
            }
            if a % b == 0 {
                Ok(Value::Int(a / b))
            } else {
                Ok(Value::Float(a as f64 / b as f64))
            }
        }
        (Value::Float(a), Value::Float(b)) => Ok(Value::Float(a / b)),
        (Value::Int(a), Value::Float(b)) => Ok(Value::Float(a as f64 / b)),
        (Value::Float(a), Value::Int(b)) => Ok(Value::Float(a / b as f64)),
        (a, b) => Err(Diagnostic::type_error(
            position.clone(),
            format!("Cannot apply `/` to {} and {}", a.type_of(), b.type_of()),
        )),
    }
}

fn compare(
    lhs: Value,
    rhs: Value,
    position: &Position,
    matches_ordering: fn(std::cmp::Ordering) -> bool,
) -> Result<Value> {
    let ordering = match (&lhs, &rhs) {
        (Value::Int(a), Value::Int(b)) => a.partial_cmp(b),
        (Value::Float(a), Value::Float(b)) => a.partial_cmp(b),
        (Value::Int(a), Value::Float(b)) => (*a as f64).partial_cmp(b),
        (Value::Float(a), Value::Int(b)) => a.partial_cmp(&(*b as f64)),
        (Value::Str(a), Value::Str(b)) => a.as_str().partial_cmp(b.as_str()),
        _ => None,
    };
    match ordering {
        Some(o) => Ok(Value::Bool(matches_ordering(o))),
        None => Err(Diagnostic::type_error(
            position.clone(),
            format!("Cannot compare {} and {}", lhs.type_of(), rhs.type_of()),
        )),
    }
}
