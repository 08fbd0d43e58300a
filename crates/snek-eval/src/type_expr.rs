//! Resolves a parsed type annotation (`snek_syntax::TypeExpr`) against a
//! scope into a runtime `Type`. Shared by function literals (parameter and
//! return-type annotations) and the `type` statement.

use crate::context::EvalContext;
use crate::diagnostic::{Diagnostic, Result};
use crate::types::{FuncParamType, Type};
use snek_syntax::{Position, TypeExpr};

pub fn resolve(type_expr: &TypeExpr, position: &Position, ctx: &EvalContext<'_>) -> Result<Type> {
    match type_expr {
        TypeExpr::Any => Ok(Type::Any),
        TypeExpr::Named(name) => ctx.scope.lookup_type(*name).ok_or_else(|| {
            Diagnostic::lookup(position.clone(), format!("Unknown type: {name}"))
        }),
        TypeExpr::StrLiteral(s) => Ok(Type::StrLiteral(s.as_str().into())),
        TypeExpr::List(elem) => Ok(Type::list(resolve(elem, position, ctx)?)),
        TypeExpr::Tuple(elems) => {
            let mut resolved = Vec::with_capacity(elems.len());
            for elem in elems {
                resolved.push(resolve(elem, position, ctx)?);
            }
            Ok(Type::tuple(resolved))
        }
        TypeExpr::Record(fields) => {
            let mut resolved = Vec::with_capacity(fields.len());
            for (name, ty) in fields {
                resolved.push((*name, resolve(ty, position, ctx)?));
            }
            Ok(Type::record(resolved))
        }
        TypeExpr::Func(params, return_type) => {
            let mut resolved_params = Vec::with_capacity(params.len());
            for param in params {
                resolved_params.push(FuncParamType {
                    ty: resolve(&param.type_expr, position, ctx)?,
                    rest: param.rest,
                });
            }
            Ok(Type::func(resolved_params, resolve(return_type, position, ctx)?))
        }
        TypeExpr::Union(alts) => {
            let mut resolved = Vec::with_capacity(alts.len());
            for alt in alts {
                resolved.push(resolve(alt, position, ctx)?);
            }
            Ok(Type::union(resolved))
        }
        TypeExpr::Intersection(alts) => {
            let mut resolved = Vec::with_capacity(alts.len());
            for alt in alts {
                resolved.push(resolve(alt, position, ctx)?);
            }
            Ok(Type::intersection(resolved))
        }
    }
}
