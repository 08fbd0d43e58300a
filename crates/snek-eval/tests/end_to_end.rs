//! End-to-end scenarios from the testable-properties table: hand-built
//! statement trees standing in for what an external parser would produce,
//! run through the full executor.

use snek_eval::context::{EvalContext, ExecContext, Jump};
use snek_eval::host::{Interpreter, ModuleBuilder, ModuleLoader, TypeDefinition};
use snek_eval::stmt;
use snek_eval::types::{PrimitiveKind, Type};
use snek_eval::value::Value;
use snek_syntax::{BinaryOp, Expr, ImportSpecifier, Literal, Parameter, Position, Stmt, TypeExpr};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::Arc;

struct NoopLoader;
impl ModuleLoader for NoopLoader {
    fn load(&self, _path: &Path) -> snek_eval::Result<Vec<Stmt>> {
        Err(snek_eval::Diagnostic::import(pos(), "no filesystem in tests"))
    }
}

fn pos() -> Position {
    Position::new(Arc::new(PathBuf::from("scenario.snek")), 1, 1)
}

fn int(i: i64) -> Expr {
    Expr::Literal {
        value: Literal::Int(i),
        position: pos(),
    }
}

fn float(f: f64) -> Expr {
    Expr::Literal {
        value: Literal::Float(f),
        position: pos(),
    }
}

fn ident(name: &str) -> Expr {
    Expr::Ident {
        name: name.into(),
        position: pos(),
    }
}

fn run(body: Vec<Stmt>) -> (ExecContext, Rc<snek_eval::Scope>) {
    let interpreter = Interpreter::new(vec![], Box::new(NoopLoader));
    let scope = interpreter.fresh_scope();
    let mut ctx = ExecContext::new();
    stmt::execute_block(&body, &EvalContext::new(scope.clone(), &interpreter), &mut ctx);
    (ctx, scope)
}

/// Scenario 1: `let x = 1 + 2.5` -> `x` is `Float(3.5)`.
#[test]
fn scenario_mixed_int_float_addition() {
    let body = vec![
        Stmt::Assign {
            target: ident("x"),
            value: Expr::Binary {
                op: BinaryOp::Add,
                left: Box::new(int(1)),
                right: Box::new(float(2.5)),
                position: pos(),
            },
            position: pos(),
        },
        Stmt::Expr {
            expr: ident("x"),
            position: pos(),
        },
    ];
    let (ctx, _) = run(body);
    assert!(ctx.error.is_none());
    assert_eq!(ctx.value, Value::Float(3.5));
}

/// Scenario 2: `let xs = [1,2,3]; let [a,b,c] = xs; a+b+c` -> `Int(6)`.
#[test]
fn scenario_list_destructuring() {
    let body = vec![
        Stmt::Assign {
            target: ident("xs"),
            value: Expr::List {
                elements: vec![int(1), int(2), int(3)],
                position: pos(),
            },
            position: pos(),
        },
        Stmt::Assign {
            target: Expr::List {
                elements: vec![ident("a"), ident("b"), ident("c")],
                position: pos(),
            },
            value: ident("xs"),
            position: pos(),
        },
        Stmt::Expr {
            expr: Expr::Binary {
                op: BinaryOp::Add,
                left: Box::new(Expr::Binary {
                    op: BinaryOp::Add,
                    left: Box::new(ident("a")),
                    right: Box::new(ident("b")),
                    position: pos(),
                }),
                right: Box::new(ident("c")),
                position: pos(),
            },
            position: pos(),
        },
    ];
    let (ctx, _) = run(body);
    assert!(ctx.error.is_none());
    assert_eq!(ctx.value, Value::Int(6));
}

/// Scenario 5: re-assigning a loop counter in `while` fails because
/// variables are single-assignment (spec.md §9 Open Question — the literal
/// behavior is preserved, not silently patched).
#[test]
fn scenario_while_counter_reassignment_errors() {
    let body = vec![
        Stmt::Assign {
            target: ident("i"),
            value: int(0),
            position: pos(),
        },
        Stmt::While {
            condition: Expr::Binary {
                op: BinaryOp::Lt,
                left: Box::new(ident("i")),
                right: Box::new(int(3)),
                position: pos(),
            },
            body: vec![Stmt::Assign {
                target: ident("i"),
                value: Expr::Binary {
                    op: BinaryOp::Add,
                    left: Box::new(ident("i")),
                    right: Box::new(int(1)),
                    position: pos(),
                },
                position: pos(),
            }],
            position: pos(),
        },
    ];
    let (ctx, _) = run(body);
    let err = ctx.error.expect("expected a redefinition error");
    assert!(err.message.contains("already been defined"));
}

/// Invariant 7: a `while` body that executes `break` returns with
/// `jump == None`.
#[test]
fn while_break_clears_the_jump() {
    let body = vec![Stmt::While {
        condition: Expr::Literal {
            value: Literal::Bool(true),
            position: pos(),
        },
        body: vec![Stmt::Break { position: pos() }],
        position: pos(),
    }];
    let (ctx, _) = run(body);
    assert!(ctx.error.is_none());
    assert_eq!(ctx.jump, Jump::None);
}

/// Scenario 3: a record with extra fields satisfies a narrower record
/// parameter type (width subtyping), and the extra field is simply ignored.
#[test]
fn scenario_record_width_subtyping_at_a_call_boundary() {
    let interpreter = Interpreter::new(vec![], Box::new(NoopLoader));
    let person_type = Type::record(vec![(
        "name".into(),
        Type::primitive(PrimitiveKind::Str),
    )]);
    let func = Rc::new(snek_eval::value::FuncValue {
        params: vec![snek_eval::value::ParamValue {
            name: "p".into(),
            ty: person_type,
            rest: false,
            default_value: None,
        }],
        body: snek_eval::value::FuncBody::Block(Rc::new(vec![Stmt::Return {
            value: Some(Expr::FieldAccess {
                receiver: Box::new(ident("p")),
                field: "name".into(),
                position: pos(),
            }),
            position: pos(),
        }])),
        return_type: None,
        captured: interpreter.fresh_scope(),
    });
    let wide_record = Value::record(vec![
        ("name".into(), Value::str("A")),
        ("age".into(), Value::Int(3)),
    ]);
    let result = interpreter.call(&func, vec![wide_record], &pos()).unwrap();
    assert_eq!(result, Value::str("A"));
}

/// Scenario 4: a closure type-checks arguments contravariantly against its
/// declared `Num` parameter and accepts both `Int` and `Float` callers.
#[test]
fn scenario_closure_accepts_int_and_float_for_a_num_parameter() {
    let body = vec![
        Stmt::Assign {
            target: ident("f"),
            value: Expr::Func {
                params: vec![Parameter {
                    name: "x".into(),
                    type_expr: TypeExpr::Named("Num".into()),
                    rest: false,
                    default_value: None,
                }],
                return_type: Some(TypeExpr::Named("Num".into())),
                body: Rc::new(vec![Stmt::Return {
                    value: Some(Expr::Binary {
                        op: BinaryOp::Mul,
                        left: Box::new(ident("x")),
                        right: Box::new(ident("x")),
                        position: pos(),
                    }),
                    position: pos(),
                }]),
                position: pos(),
            },
            position: pos(),
        },
        Stmt::Expr {
            expr: Expr::Logical {
                op: snek_syntax::LogicalOp::And,
                left: Box::new(Expr::Binary {
                    op: BinaryOp::Eq,
                    left: Box::new(Expr::Call {
                        callee: Box::new(ident("f")),
                        args: vec![int(2)],
                        position: pos(),
                    }),
                    right: Box::new(int(4)),
                    position: pos(),
                }),
                right: Box::new(Expr::Binary {
                    op: BinaryOp::Eq,
                    left: Box::new(Expr::Call {
                        callee: Box::new(ident("f")),
                        args: vec![float(1.5)],
                        position: pos(),
                    }),
                    right: Box::new(float(2.25)),
                    position: pos(),
                }),
                position: pos(),
            },
            position: pos(),
        },
    ];
    let (ctx, _) = run(body);
    assert!(ctx.error.is_none());
    assert_eq!(ctx.value, Value::Bool(true));
}

/// Scenario 6: a heterogeneous list accepted by a `T[]` (`Int | Str`)
/// parameter can be subscripted at runtime regardless of which alternative
/// each element is.
#[test]
fn scenario_union_element_list_subscript() {
    let union_ty = Type::union(vec![
        Type::primitive(PrimitiveKind::Int),
        Type::primitive(PrimitiveKind::Str),
    ]);
    let list = Value::list(vec![Value::Int(1), Value::str("x"), Value::Int(2)]);
    assert!(Type::list(union_ty).accepts_value(&list));

    let body = vec![
        Stmt::Assign {
            target: ident("a"),
            value: Expr::List {
                elements: vec![int(1), Expr::Literal {
                    value: Literal::Str("x".to_string()),
                    position: pos(),
                }, int(2)],
                position: pos(),
            },
            position: pos(),
        },
        Stmt::Expr {
            expr: Expr::Subscript {
                receiver: Box::new(ident("a")),
                index: Box::new(int(1)),
                optional: false,
                position: pos(),
            },
            position: pos(),
        },
    ];
    let (ctx, _) = run(body);
    assert!(ctx.error.is_none());
    assert_eq!(ctx.value, Value::str("x"));
}

/// Scenario 7: `import x from m; x` resolves through the module cache and
/// binds only the exported name.
#[test]
fn scenario_import_binds_an_exported_module_variable() {
    let interpreter = Interpreter::new(vec![], Box::new(NoopLoader));
    let module_scope = ModuleBuilder::new()
        .ty(TypeDefinition {
            name: "unused".into(),
            ty: Type::primitive(PrimitiveKind::Int),
        })
        .build(interpreter.fresh_scope());
    module_scope.bind_variable("x".into(), Value::Int(1), true);
    interpreter.register_module("m.snek", module_scope);

    let body = vec![
        Stmt::Import {
            module_path: "m".to_string(),
            specifiers: vec![ImportSpecifier::Named {
                name: "x".into(),
                alias: None,
            }],
            position: pos(),
        },
        Stmt::Expr {
            expr: ident("x"),
            position: pos(),
        },
    ];
    let mut ctx = ExecContext::new();
    let scope = interpreter.fresh_scope();
    stmt::execute_block(&body, &EvalContext::new(scope, &interpreter), &mut ctx);
    assert!(ctx.error.is_none());
    assert_eq!(ctx.value, Value::Int(1));
}

/// Invariant 1: `type_of(v)` always accepts `v` itself, across every kind.
#[test]
fn invariant_type_of_accepts_the_value_it_came_from() {
    let values = vec![
        Value::Null,
        Value::Bool(true),
        Value::Int(3),
        Value::Float(3.5),
        Value::str("hi"),
        Value::bin(vec![1, 2, 3]),
        Value::list(vec![Value::Int(1), Value::str("x")]),
        Value::record(vec![("k".into(), Value::Int(1))]),
    ];
    for v in values {
        assert!(v.type_of().accepts_value(&v), "type_of should accept its own value");
    }
}

/// Invariant 6: importing the same module path twice returns the identical
/// cached scope.
#[test]
fn invariant_module_cache_returns_the_same_scope_on_repeat_import() {
    let interpreter = Interpreter::new(vec![], Box::new(NoopLoader));
    let module_scope = interpreter.fresh_scope();
    module_scope.bind_variable("x".into(), Value::Int(1), true);
    interpreter.register_module("m.snek", module_scope);

    let first = interpreter.import_module("m", None).unwrap();
    let second = interpreter.import_module("m", None).unwrap();
    assert!(Rc::ptr_eq(&first, &second));
}

/// Invariant 5: scope shadowing never overwrites the parent.
#[test]
fn block_shadowing_does_not_leak_into_parent() {
    let body = vec![
        Stmt::Assign {
            target: ident("x"),
            value: int(1),
            position: pos(),
        },
        Stmt::Block {
            body: vec![
                Stmt::Assign {
                    target: ident("x"),
                    value: int(2),
                    position: pos(),
                },
                Stmt::Expr {
                    expr: ident("x"),
                    position: pos(),
                },
            ],
            position: pos(),
        },
    ];
    let (ctx, scope) = run(body);
    assert!(ctx.error.is_none());
    assert_eq!(ctx.value, Value::Int(2));
    assert_eq!(scope.lookup_variable("x".into()), Some(Value::Int(1)));
}
