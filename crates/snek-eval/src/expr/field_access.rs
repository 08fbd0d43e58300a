//! Field access `x.f`.

use crate::context::EvalContext;
use crate::diagnostic::{Diagnostic, Result};
use crate::value::Value;
use snek_syntax::{Expr, InternedString, Position};

pub fn eval(
    receiver: &Expr,
    field: InternedString,
    position: &Position,
    ctx: &EvalContext<'_>,
) -> Result<Value> {
    let receiver_value = super::eval(receiver, ctx)?;
    let Value::Record(record) = &receiver_value else {
        return Err(Diagnostic::type_error(
            position.clone(),
            format!("{} is not a record", receiver_value.type_of()),
        ));
    };
    record.get(field).cloned().ok_or_else(|| {
        Diagnostic::domain(
            position.clone(),
            format!("{} does not have field `{field}`", receiver_value.type_of()),
        )
    })
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

    #[test]
    fn missing_field_is_a_domain_error() {
        let interpreter = Interpreter::new(vec![], Box::new(NoopLoader));
        let scope = Rc::new(Scope::child(interpreter.fresh_scope()));
        let ctx = EvalContext::new(scope, &interpreter);
        let receiver = Expr::Record {
            fields: vec![],
            position: position(),
        };
        let err = eval(&receiver, "missing".into(), &position(), &ctx).unwrap_err();
        assert!(err.message.contains("does not have field"));
    }

    #[test]
    fn non_record_receiver_is_a_type_error() {
        let interpreter = Interpreter::new(vec![], Box::new(NoopLoader));
        let scope = Rc::new(Scope::child(interpreter.fresh_scope()));
        let ctx = EvalContext::new(scope, &interpreter);
        let receiver = Expr::Literal {
            value: Literal::Int(1),
            position: position(),
        };
        let err = eval(&receiver, "x".into(), &position(), &ctx).unwrap_err();
        assert!(err.message.contains("is not a record"));
    }
}
