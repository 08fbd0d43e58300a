//! Record literal expressions: named/computed fields and spreads as an
//! rvalue, field-name destructuring as an LValue.

use crate::context::EvalContext;
use crate::diagnostic::{Diagnostic, Result};
use crate::value::Value;
use snek_syntax::{InternedString, Position, RecordField};

pub fn eval(fields: &[RecordField], ctx: &EvalContext<'_>) -> Result<Value> {
    let mut entries: Vec<(InternedString, Value)> = Vec::new();
    for field in fields {
        match field {
            RecordField::Named(name, expr) => {
                upsert(&mut entries, *name, super::eval(expr, ctx)?);
            }
            RecordField::Computed(key_expr, value_expr) => {
                let key = super::eval(key_expr, ctx)?;
                let value = super::eval(value_expr, ctx)?;
                let name = match key {
                    Value::Str(s) => InternedString::new(&s),
                    other => {
                        return Err(Diagnostic::type_error(
                            key_expr.position().clone(),
                            format!("{} is not a valid record key", other.type_of()),
                        ));
                    }
                };
                upsert(&mut entries, name, value);
            }
            RecordField::Spread(expr) => {
                let spread = super::eval(expr, ctx)?;
                let Value::Record(record) = spread else {
                    return Err(Diagnostic::type_error(
                        expr.position().clone(),
                        format!("{} cannot be spread into a record", spread.type_of()),
                    ));
                };
                for (name, value) in record.iter() {
                    upsert(&mut entries, *name, value.clone());
                }
            }
        }
    }
    Ok(Value::record(entries))
}

fn upsert(entries: &mut Vec<(InternedString, Value)>, name: InternedString, value: Value) {
    if let Some(slot) = entries.iter_mut().find(|(k, _)| *k == name) {
        slot.1 = value;
    } else {
        entries.push((name, value));
    }
}

pub fn assign(
    fields: &[RecordField],
    value: Value,
    position: &Position,
    ctx: &EvalContext<'_>,
) -> Result<()> {
    let Value::Record(record) = &value else {
        return Err(Diagnostic::type_error(
            position.clone(),
            format!("{} cannot be assigned to {{..}}", value.type_of()),
        ));
    };
    for field in fields {
        let RecordField::Named(name, target) = field else {
            return Err(Diagnostic::type_error(
                position.clone(),
                "Only named fields are valid in a record destructuring pattern",
            ));
        };
        let field_value = record.get(*name).ok_or_else(|| {
            Diagnostic::domain(
                position.clone(),
                format!("Record does not have field `{name}`"),
            )
        })?;
        super::assign(target, field_value.clone(), ctx)?;
    }
    Ok(())
}
