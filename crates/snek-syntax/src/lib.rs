//! The statement/expression tree consumed by `snek-eval`.
//!
//! This crate deliberately contains no lexer or parser: an external
//! front-end produces the `ast` types below and hands them to the
//! evaluator, which is this workspace's actual subject.

pub mod ast;
pub mod interner;
pub mod position;

pub use ast::{
    BinaryOp, Expr, ImportSpecifier, Literal, LogicalOp, Parameter, RecordField, Stmt, TypeExpr,
    TypeParam, UnaryOp,
};
pub use interner::InternedString;
pub use position::Position;
