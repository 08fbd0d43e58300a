//! The structural type system: constructors and the `Accepts` algorithm.
//!
//! Grounded on the tagged-variant/exhaustive-match shape of `Type` in
//! `cadenza-eval/src/value.rs`, but the constructor set and the
//! `accepts_value`/`accepts_type` predicates are authored fresh from
//! spec.md §4.B — the teacher's `Type` has no `Intersection` or
//! `StrLiteral` constructor and never implements width subtyping or
//! contravariant function-parameter matching.

use crate::value::Value;
use snek_syntax::InternedString;
use std::fmt;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrimitiveKind {
    Bool,
    Int,
    Float,
    Num,
    Str,
    Bin,
    Void,
}

impl PrimitiveKind {
    fn name(self) -> &'static str {
        match self {
            PrimitiveKind::Bool => "Bool",
            PrimitiveKind::Int => "Int",
            PrimitiveKind::Float => "Float",
            PrimitiveKind::Num => "Num",
            PrimitiveKind::Str => "Str",
            PrimitiveKind::Bin => "Bin",
            PrimitiveKind::Void => "Void",
        }
    }
}

/// One entry of a `Func` type's parameter list.
#[derive(Clone, Debug, PartialEq)]
pub struct FuncParamType {
    pub ty: Type,
    pub rest: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FuncType {
    pub params: Vec<FuncParamType>,
    pub return_type: Type,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Type {
    Any,
    Primitive(PrimitiveKind),
    StrLiteral(Rc<str>),
    List(Rc<Type>),
    Tuple(Rc<[Type]>),
    Record(Rc<[(InternedString, Type)]>),
    Func(Rc<FuncType>),
    Union(Rc<[Type]>),
    Intersection(Rc<[Type]>),
}

impl Type {
    pub fn primitive(kind: PrimitiveKind) -> Self {
        Type::Primitive(kind)
    }

    pub fn list(elem: Type) -> Self {
        Type::List(Rc::new(elem))
    }

    pub fn tuple(elems: Vec<Type>) -> Self {
        Type::Tuple(elems.into())
    }

    pub fn record(fields: Vec<(InternedString, Type)>) -> Self {
        Type::Record(fields.into())
    }

    pub fn func(params: Vec<FuncParamType>, return_type: Type) -> Self {
        Type::Func(Rc::new(FuncType {
            params,
            return_type,
        }))
    }

    pub fn union(mut alternatives: Vec<Type>) -> Self {
        if alternatives.len() == 1 {
            return alternatives.pop().unwrap();
        }
        Type::Union(alternatives.into())
    }

    pub fn intersection(mut alternatives: Vec<Type>) -> Self {
        if alternatives.len() == 1 {
            return alternatives.pop().unwrap();
        }
        Type::Intersection(alternatives.into())
    }

    /// "Does this value inhabit the type?"
    pub fn accepts_value(&self, value: &Value) -> bool {
        match self {
            Type::Any => true,
            Type::Primitive(PrimitiveKind::Num) => {
                matches!(value, Value::Int(_) | Value::Float(_))
            }
            Type::Primitive(PrimitiveKind::Void) => matches!(value, Value::Null),
            Type::Primitive(PrimitiveKind::Bool) => matches!(value, Value::Bool(_)),
            Type::Primitive(PrimitiveKind::Int) => matches!(value, Value::Int(_)),
            Type::Primitive(PrimitiveKind::Float) => matches!(value, Value::Float(_)),
            Type::Primitive(PrimitiveKind::Str) => matches!(value, Value::Str(_)),
            Type::Primitive(PrimitiveKind::Bin) => matches!(value, Value::Bin(_)),
            Type::StrLiteral(s) => matches!(value, Value::Str(v) if v.as_str() == s.as_ref()),
            Type::List(elem) => match value {
                Value::List(items) => items.iter().all(|v| elem.accepts_value(v)),
                _ => false,
            },
            Type::Tuple(elems) => match value {
                Value::List(items) => {
                    items.len() == elems.len()
                        && items
                            .iter()
                            .zip(elems.iter())
                            .all(|(v, t)| t.accepts_value(v))
                }
                _ => false,
            },
            Type::Record(fields) => match value {
                Value::Record(map) => fields.iter().all(|(name, ty)| {
                    map.get(*name).is_some_and(|v| ty.accepts_value(v))
                }),
                _ => false,
            },
            Type::Func(func_ty) => match value {
                Value::Func(f) => func_type_accepts_func(func_ty, f),
                _ => false,
            },
            Type::Union(alts) => alts.iter().any(|t| t.accepts_value(value)),
            Type::Intersection(alts) => alts.iter().all(|t| t.accepts_value(value)),
        }
    }

    /// "Is an expression of type `other` safely assignable where `self` is
    /// expected?" (width subtyping, covariant).
    pub fn accepts_type(&self, other: &Type) -> bool {
        match (self, other) {
            (Type::Any, _) => true,
            // Union on the right: accepted iff every alternative is accepted by `self`.
            (_, Type::Union(alts)) => alts.iter().all(|t| self.accepts_type(t)),
            // Union on the left (other not a union): accepted iff some alternative accepts.
            (Type::Union(alts), _) => alts.iter().any(|t| t.accepts_type(other)),
            (Type::Intersection(alts), _) => alts.iter().all(|t| t.accepts_type(other)),
            (_, Type::Intersection(alts)) => alts.iter().any(|t| self.accepts_type(t)),
            (Type::Primitive(PrimitiveKind::Num), Type::Primitive(k)) => {
                matches!(k, PrimitiveKind::Num | PrimitiveKind::Int | PrimitiveKind::Float)
            }
            (Type::Primitive(a), Type::Primitive(b)) => a == b,
            (Type::StrLiteral(a), Type::StrLiteral(b)) => a == b,
            (Type::List(a), Type::List(b)) => a.accepts_type(b),
            (Type::List(elem), Type::Tuple(elems)) => elems.iter().all(|t| elem.accepts_type(t)),
            (Type::Tuple(a), Type::Tuple(b)) => {
                a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| x.accepts_type(y))
            }
            (Type::Record(a), Type::Record(b)) => a.iter().all(|(name, ty)| {
                b.iter()
                    .find(|(n, _)| n == name)
                    .is_some_and(|(_, t)| ty.accepts_type(t))
            }),
            (Type::Func(a), Type::Func(b)) => func_type_accepts_func_type(a, b),
            _ => false,
        }
    }
}

/// Arity-compatibility plus per-parameter contravariance plus covariant
/// return-type check, applied to a runtime `Func` value's declared shape.
fn func_type_accepts_func(target: &FuncType, value: &crate::value::FuncValue) -> bool {
    if !params_compatible(&target.params, &value.params) {
        return false;
    }
    let value_return = value.return_type.clone().unwrap_or(Type::Any);
    target.return_type.accepts_type(&value_return)
}

fn func_type_accepts_func_type(target: &FuncType, source: &FuncType) -> bool {
    if !type_params_compatible(&target.params, &source.params) {
        return false;
    }
    target.return_type.accepts_type(&source.return_type)
}

fn params_compatible(target: &[FuncParamType], source: &[crate::value::ParamValue]) -> bool {
    let target_non_rest: Vec<&FuncParamType> = target.iter().filter(|p| !p.rest).collect();
    let source_non_rest: Vec<&crate::value::ParamValue> =
        source.iter().filter(|p| !p.rest).collect();
    if target_non_rest.len() != source_non_rest.len() {
        return false;
    }
    for (t, s) in target_non_rest.iter().zip(source_non_rest.iter()) {
        // contravariant: the value's parameter type must accept the
        // target's parameter type.
        if !s.ty.accepts_type(&t.ty) {
            return false;
        }
    }
    let target_rest = target.iter().find(|p| p.rest);
    let source_rest = source.iter().find(|p| p.rest);
    match (target_rest, source_rest) {
        (None, None) => true,
        (Some(t), Some(s)) => s.ty.accepts_type(&t.ty),
        _ => false,
    }
}

fn type_params_compatible(target: &[FuncParamType], source: &[FuncParamType]) -> bool {
    let target_non_rest: Vec<&FuncParamType> = target.iter().filter(|p| !p.rest).collect();
    let source_non_rest: Vec<&FuncParamType> = source.iter().filter(|p| !p.rest).collect();
    if target_non_rest.len() != source_non_rest.len() {
        return false;
    }
    for (t, s) in target_non_rest.iter().zip(source_non_rest.iter()) {
        if !s.ty.accepts_type(&t.ty) {
            return false;
        }
    }
    let target_rest = target.iter().find(|p| p.rest);
    let source_rest = source.iter().find(|p| p.rest);
    match (target_rest, source_rest) {
        (None, None) => true,
        (Some(t), Some(s)) => s.ty.accepts_type(&t.ty),
        _ => false,
    }
}

fn is_identifier_shaped(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_')
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Any => write!(f, "Any"),
            Type::Primitive(k) => write!(f, "{}", k.name()),
            Type::StrLiteral(s) => write!(f, "{s:?}"),
            Type::List(elem) => write!(f, "{elem}[]"),
            Type::Tuple(elems) => {
                write!(f, "[")?;
                for (i, t) in elems.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{t}")?;
                }
                write!(f, "]")
            }
            Type::Record(fields) => {
                write!(f, "{{")?;
                for (i, (name, ty)) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    if is_identifier_shaped(name.as_str()) {
                        write!(f, "{name}: {ty}")?;
                    } else {
                        write!(f, "{name:?}: {ty}")?;
                    }
                }
                write!(f, "}}")
            }
            Type::Func(func_ty) => {
                write!(f, "(")?;
                for (i, p) in func_ty.params.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    if p.rest {
                        write!(f, "...{}", p.ty)?;
                    } else {
                        write!(f, "{}", p.ty)?;
                    }
                }
                write!(f, ") -> {}", func_ty.return_type)
            }
            Type::Union(alts) => {
                for (i, t) in alts.iter().enumerate() {
                    if i > 0 {
                        write!(f, " | ")?;
                    }
                    write!(f, "{t}")?;
                }
                Ok(())
            }
            Type::Intersection(alts) => {
                for (i, t) in alts.iter().enumerate() {
                    if i > 0 {
                        write!(f, " & ")?;
                    }
                    write!(f, "{t}")?;
                }
                Ok(())
            }
        }
    }
}
