//! The runtime value model: constructors, equality, `type_of`, `to_string`.
//!
//! Grounded on the tagged `enum Value` in `cadenza-eval/src/value.rs`
//! (manual `PartialEq`/`Display`, a `type_of` method per variant) but the
//! variant set and the exact equality/rendering rules follow spec.md §3/§4.A
//! — Cadenza has no `Bin`, `Symbol`/`Quantity`/units have no Snek
//! counterpart, and `Int == Float` cross-kind equality is spec-specific.

use crate::scope::Scope;
use crate::types::{FuncParamType, PrimitiveKind, Type};
use snek_syntax::{InternedString, Stmt};
use std::fmt;
use std::rc::Rc;

/// A record's fields, preserving insertion order (spec.md §3: "insertion
/// order not observable but iteration stable").
#[derive(Clone, Debug, Default)]
pub struct Record {
    fields: Vec<(InternedString, Value)>,
}

impl Record {
    pub fn new(fields: Vec<(InternedString, Value)>) -> Self {
        Self { fields }
    }

    pub fn get(&self, name: InternedString) -> Option<&Value> {
        self.fields.iter().find(|(k, _)| *k == name).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(InternedString, Value)> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Same key set, pointwise-equal values, independent of order.
    fn structurally_eq(&self, other: &Record) -> bool {
        self.fields.len() == other.fields.len()
            && self
                .fields
                .iter()
                .all(|(k, v)| other.get(*k).is_some_and(|ov| v == ov))
    }
}

/// A callback supplied by host-extension code: `(interpreter, message) ->
/// Result<Value>`. This is the sole mechanism by which native code reaches
/// into the language (spec.md §4.F, "Host extension contract").
pub type HostCallback =
    Rc<dyn Fn(&crate::host::Interpreter, &crate::host::Message) -> crate::diagnostic::Result<Value>>;

pub enum FuncBody {
    Block(Rc<Vec<Stmt>>),
    Native(HostCallback),
}

impl fmt::Debug for FuncBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FuncBody::Block(stmts) => f.debug_tuple("Block").field(stmts).finish(),
            FuncBody::Native(_) => f.write_str("Native(..)"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ParamValue {
    pub name: InternedString,
    pub ty: Type,
    pub rest: bool,
    pub default_value: Option<Value>,
}

#[derive(Debug)]
pub struct FuncValue {
    pub params: Vec<ParamValue>,
    pub body: FuncBody,
    pub return_type: Option<Type>,
    pub captured: Rc<Scope>,
}

#[derive(Clone, Debug)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(Rc<String>),
    Bin(Rc<Vec<u8>>),
    List(Rc<Vec<Value>>),
    Record(Rc<Record>),
    Func(Rc<FuncValue>),
}

impl Value {
    pub fn str(s: impl Into<String>) -> Self {
        Value::Str(Rc::new(s.into()))
    }

    pub fn bin(bytes: Vec<u8>) -> Self {
        Value::Bin(Rc::new(bytes))
    }

    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Rc::new(items))
    }

    pub fn record(fields: Vec<(InternedString, Value)>) -> Self {
        Value::Record(Rc::new(Record::new(fields)))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "Null",
            Value::Bool(_) => "Bool",
            Value::Int(_) => "Int",
            Value::Float(_) => "Float",
            Value::Str(_) => "Str",
            Value::Bin(_) => "Bin",
            Value::List(_) => "List",
            Value::Record(_) => "Record",
            Value::Func(_) => "Func",
        }
    }

    /// The most specific type this value inhabits (spec.md §4.A).
    pub fn type_of(&self) -> Type {
        match self {
            Value::Null => Type::primitive(PrimitiveKind::Void),
            Value::Bool(_) => Type::primitive(PrimitiveKind::Bool),
            Value::Int(_) => Type::primitive(PrimitiveKind::Int),
            Value::Float(_) => Type::primitive(PrimitiveKind::Float),
            Value::Str(_) => Type::primitive(PrimitiveKind::Str),
            Value::Bin(_) => Type::primitive(PrimitiveKind::Bin),
            Value::List(items) => {
                Type::tuple(items.iter().map(Value::type_of).collect())
            }
            Value::Record(record) => Type::record(
                record
                    .iter()
                    .map(|(name, value)| (*name, value.type_of()))
                    .collect(),
            ),
            Value::Func(func) => Type::func(
                func.params
                    .iter()
                    .map(|p| FuncParamType {
                        ty: p.ty.clone(),
                        rest: p.rest,
                    })
                    .collect(),
                func.return_type.clone().unwrap_or(Type::Any),
            ),
        }
    }

    /// Human-readable, round-trip-oriented rendering (spec.md §4.A).
    pub fn to_snek_string(&self) -> String {
        let mut out = String::new();
        write_value(self, &mut out);
        out
    }
}

fn write_value(value: &Value, out: &mut String) {
    use std::fmt::Write;
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Int(i) => {
            let _ = write!(out, "{i}");
        }
        Value::Float(f) => write_float(*f, out),
        Value::Str(s) => write_quoted_string(s, out),
        Value::Bin(bytes) => {
            out.push_str("b\"");
            for byte in bytes.iter() {
                if byte.is_ascii_graphic() || *byte == b' ' {
                    out.push(*byte as char);
                } else {
                    let _ = write!(out, "\\x{byte:02x}");
                }
            }
            out.push('"');
        }
        Value::List(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_value(item, out);
            }
            out.push(']');
        }
        Value::Record(record) => {
            out.push('{');
            for (i, (name, v)) in record.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                if is_identifier_shaped(name.as_str()) {
                    out.push_str(name.as_str());
                } else {
                    write_quoted_string(name.as_str(), out);
                }
                out.push_str(": ");
                write_value(v, out);
            }
            out.push('}');
        }
        Value::Func(_) => out.push_str("<func>"),
    }
}

fn write_float(f: f64, out: &mut String) {
    use std::fmt::Write;
    if f.is_nan() {
        out.push_str("NaN");
    } else if f.is_infinite() {
        out.push_str(if f > 0.0 { "Infinity" } else { "-Infinity" });
    } else if f == f.trunc() && f.abs() < 1e15 {
        let _ = write!(out, "{f:.1}");
    } else {
        let _ = write!(out, "{f}");
    }
}

fn write_quoted_string(s: &str, out: &mut String) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            c => out.push(c),
        }
    }
    out.push('"');
}

fn is_identifier_shaped(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_')
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Int(i), Value::Float(f)) | (Value::Float(f), Value::Int(i)) => {
                f.is_finite() && *f == *i as f64
            }
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Bin(a), Value::Bin(b)) => a == b,
            (Value::List(a), Value::List(b)) => {
                a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| x == y)
            }
            (Value::Record(a), Value::Record(b)) => a.structurally_eq(b),
            (Value::Func(a), Value::Func(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_snek_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_equals_finite_float_with_same_real_value() {
        assert_eq!(Value::Int(3), Value::Float(3.0));
        assert_ne!(Value::Int(3), Value::Float(3.5));
        assert_ne!(Value::Int(3), Value::Float(f64::NAN));
    }

    #[test]
    fn nan_is_never_equal_to_itself() {
        assert_ne!(Value::Float(f64::NAN), Value::Float(f64::NAN));
    }

    #[test]
    fn records_compare_order_independently() {
        let a = Value::record(vec![("x".into(), Value::Int(1)), ("y".into(), Value::Int(2))]);
        let b = Value::record(vec![("y".into(), Value::Int(2)), ("x".into(), Value::Int(1))]);
        assert_eq!(a, b);
    }

    #[test]
    fn to_string_quotes_strings_and_renders_lists() {
        let v = Value::list(vec![Value::Int(1), Value::str("a\"b")]);
        assert_eq!(v.to_snek_string(), "[1, \"a\\\"b\"]");
    }

    #[test]
    fn to_string_snapshot_of_a_nested_record() {
        let v = Value::record(vec![
            ("name".into(), Value::str("Ada")),
            ("tags".into(), Value::list(vec![Value::Int(1), Value::Float(2.0)])),
            ("active".into(), Value::Bool(true)),
        ]);
        insta::assert_snapshot!(v.to_snek_string(), @r#"{name: "Ada", tags: [1, 2.0], active: true}"#);
    }

    #[test]
    fn type_of_list_is_tuple_of_element_types() {
        let v = Value::list(vec![Value::Int(1), Value::str("x")]);
        let ty = v.type_of();
        assert!(ty.accepts_value(&v));
    }
}
