//! List literal expressions: eager left-to-right evaluation as an rvalue,
//! length-matched destructuring as an LValue.

use crate::context::EvalContext;
use crate::diagnostic::{Diagnostic, Result};
use crate::value::Value;
use snek_syntax::{Expr, Position};

pub fn eval(elements: &[Expr], ctx: &EvalContext<'_>) -> Result<Value> {
    let mut values = Vec::with_capacity(elements.len());
    for element in elements {
        values.push(super::eval(element, ctx)?);
    }
    Ok(Value::list(values))
}

pub fn assign(
    elements: &[Expr],
    value: Value,
    position: &Position,
    ctx: &EvalContext<'_>,
) -> Result<()> {
    let Value::List(items) = &value else {
        return Err(Diagnostic::type_error(
            position.clone(),
            format!("{} cannot be assigned to [..]", value.type_of()),
        ));
    };
    if items.len() != elements.len() {
        return Err(Diagnostic::type_error(
            position.clone(),
            format!(
                "List pattern of length {} cannot destructure a list of length {}",
                elements.len(),
                items.len()
            ),
        ));
    }
    for (target, item) in elements.iter().zip(items.iter()) {
        super::assign(target, item.clone(), ctx)?;
    }
    Ok(())
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

    fn lit(i: i64) -> Expr {
        Expr::Literal {
            value: Literal::Int(i),
            position: position(),
        }
    }

    #[test]
    fn evaluates_elements_in_order() {
        let interpreter = Interpreter::new(vec![], Box::new(NoopLoader));
        let scope = Rc::new(Scope::child(interpreter.fresh_scope()));
        let ctx = EvalContext::new(scope, &interpreter);
        let elements = vec![lit(1), lit(2), lit(3)];
        let value = eval(&elements, &ctx).unwrap();
        assert_eq!(value, Value::list(vec![Value::Int(1), Value::Int(2), Value::Int(3)]));
    }

    #[test]
    fn destructure_rejects_mismatched_length() {
        let interpreter = Interpreter::new(vec![], Box::new(NoopLoader));
        let scope = Rc::new(Scope::child(interpreter.fresh_scope()));
        let ctx = EvalContext::new(scope, &interpreter);
        let targets = vec![
            Expr::Ident {
                name: "a".into(),
                position: position(),
            },
            Expr::Ident {
                name: "b".into(),
                position: position(),
            },
        ];
        let err = assign(&targets, Value::list(vec![Value::Int(1)]), &position(), &ctx).unwrap_err();
        assert!(err.message.contains("destructure"));
    }
}
