//! Subscript `x[i]`, with the optional-chaining variant `x?.[i]`.

use crate::context::EvalContext;
use crate::diagnostic::{Diagnostic, Result};
use crate::value::Value;
use snek_syntax::{Expr, Position};

pub fn eval(
    receiver: &Expr,
    index: &Expr,
    optional: bool,
    position: &Position,
    ctx: &EvalContext<'_>,
) -> Result<Value> {
    let receiver_value = super::eval(receiver, ctx)?;
    if optional && matches!(receiver_value, Value::Null) {
        return Ok(Value::Null);
    }

    match &receiver_value {
        Value::List(items) => {
            let i = eval_int_index(index, ctx)?;
            let idx = resolve_index(i, items.len(), position)?;
            Ok(items[idx].clone())
        }
        Value::Record(record) => {
            let key = super::eval(index, ctx)?;
            let Value::Str(key) = key else {
                return Err(Diagnostic::type_error(
                    position.clone(),
                    "Record subscript requires a Str key",
                ));
            };
            record.get(key.as_str().into()).cloned().ok_or_else(|| {
                Diagnostic::domain(
                    position.clone(),
                    format!("Record does not have field `{key}`"),
                )
            })
        }
        Value::Str(s) => {
            let i = eval_int_index(index, ctx)?;
            let chars: Vec<char> = s.chars().collect();
            let idx = resolve_index(i, chars.len(), position)?;
            Ok(Value::str(chars[idx].to_string()))
        }
        other => Err(Diagnostic::type_error(
            position.clone(),
            format!("{} is not indexable", other.type_of()),
        )),
    }
}

fn eval_int_index(index: &Expr, ctx: &EvalContext<'_>) -> Result<i64> {
    match super::eval(index, ctx)? {
        Value::Int(i) => Ok(i),
        other => Err(Diagnostic::type_error(
            index.position().clone(),
            format!("Expected Int index, got {}", other.type_of()),
        )),
    }
}

/// Negative indices count from the end; out-of-bounds is a domain error.
fn resolve_index(i: i64, len: usize, position: &Position) -> Result<usize> {
    let resolved = if i < 0 { i + len as i64 } else { i };
    if resolved < 0 || resolved as usize >= len {
        return Err(Diagnostic::domain(
            position.clone(),
            format!("Index {i} out of range"),
        ));
    }
    Ok(resolved as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{Interpreter, ModuleLoader};
    use crate::scope::Scope;
    use snek_syntax::{Literal, Stmt};
    use std::path::{Path, PathBuf};
    use std::rc::Rc;
    use std::sync::Arc;

    struct NoopLoader;
    impl ModuleLoader for NoopLoader {
        fn load(&self, _path: &Path) -> Result<Vec<Stmt>> {
            unreachable!()
        }
    }

    fn position() -> Position {
        Position::new(Arc::new(PathBuf::from("t.snek")), 1, 1)
    }

    fn lit_int(i: i64) -> Expr {
        Expr::Literal {
            value: Literal::Int(i),
            position: position(),
        }
    }

    #[test]
    fn negative_indices_count_from_the_end() {
        let interpreter = Interpreter::new(vec![], Box::new(NoopLoader));
        let scope = Rc::new(Scope::child(interpreter.fresh_scope()));
        let ctx = EvalContext::new(scope, &interpreter);
        let receiver = Expr::List {
            elements: vec![lit_int(1), lit_int(2), lit_int(3)],
            position: position(),
        };
        let value = eval(&receiver, &lit_int(-1), false, &position(), &ctx).unwrap();
        assert_eq!(value, Value::Int(3));
    }

    #[test]
    fn optional_chaining_short_circuits_on_null_without_evaluating_index() {
        let interpreter = Interpreter::new(vec![], Box::new(NoopLoader));
        let scope = Rc::new(Scope::child(interpreter.fresh_scope()));
        let ctx = EvalContext::new(scope, &interpreter);
        let receiver = Expr::Literal {
            value: Literal::Null,
            position: position(),
        };
        // An index expression that would itself error if evaluated.
        let index = Expr::Ident {
            name: "never_bound".into(),
            position: position(),
        };
        let value = eval(&receiver, &index, true, &position(), &ctx).unwrap();
        assert_eq!(value, Value::Null);
    }
}
