//! The interpreter host: primordials, the module cache, the call protocol,
//! and the host-extension contract.
//!
//! Grounded on `cadenza-eval/src/compiler.rs`'s `Compiler{defs, macros}`
//! definition-accumulation shape, generalized into a module cache plus
//! primordial-type accessors per spec.md §4.F; the host-extension API
//! (`FuncDefinition`/`TypeDefinition`/`create_module`) is grounded on
//! `examples/original_source/include/snek/api.hpp`, translated from a
//! vector-of-structs C++ API into a small Rust builder.

use crate::context::{EvalContext, ExecContext, Jump};
use crate::diagnostic::{Diagnostic, Result};
use crate::scope::Scope;
use crate::stmt;
use crate::types::{PrimitiveKind, Type};
use crate::value::{FuncBody, FuncValue, HostCallback, ParamValue, Value};
use rustc_hash::FxHashMap;
use snek_syntax::{InternedString, Position, Stmt};
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

enum ModuleState {
    InFlight(Rc<Scope>),
    Ready(Rc<Scope>),
}

/// Something an external parser hands the host once source for a module
/// path has been located and lexed/parsed. The host never parses source
/// itself (out of scope); callers supply a `ModuleLoader`.
pub trait ModuleLoader {
    fn load(&self, path: &Path) -> Result<Vec<Stmt>>;
}

/// The host-owned primordial types and values, plus the module cache.
pub struct Interpreter {
    primordials: Rc<Scope>,
    cache: RefCell<FxHashMap<PathBuf, ModuleState>>,
    roots: Vec<PathBuf>,
    loader: Box<dyn ModuleLoader>,
}

impl Interpreter {
    pub fn new(roots: Vec<PathBuf>, loader: Box<dyn ModuleLoader>) -> Self {
        let primordials = Rc::new(Scope::root());
        for (name, kind) in [
            ("Bool", PrimitiveKind::Bool),
            ("Int", PrimitiveKind::Int),
            ("Float", PrimitiveKind::Float),
            ("Num", PrimitiveKind::Num),
            ("Str", PrimitiveKind::Str),
            ("Bin", PrimitiveKind::Bin),
            ("Void", PrimitiveKind::Void),
        ] {
            primordials.bind_type(name.into(), Type::primitive(kind), true);
        }
        primordials.bind_type("Any".into(), Type::Any, true);

        Self {
            primordials,
            cache: RefCell::new(FxHashMap::default()),
            roots,
            loader,
        }
    }

    pub fn any_type(&self) -> Type {
        Type::Any
    }

    pub fn primitive_type(&self, kind: PrimitiveKind) -> Type {
        Type::primitive(kind)
    }

    pub fn null_value(&self) -> Value {
        Value::Null
    }

    pub fn bool_value(&self, b: bool) -> Value {
        Value::Bool(b)
    }

    /// A fresh scope over the primordial scope, as given to a new module or
    /// top-level program before execution.
    pub fn fresh_scope(&self) -> Rc<Scope> {
        Rc::new(Scope::child(self.primordials.clone()))
    }

    /// Executes a prepared statement tree against a scope (spec.md §6,
    /// `interpreter.run(source_scope)`).
    pub fn run(&self, body: &[Stmt], scope: Rc<Scope>) -> Result<()> {
        let mut ctx = ExecContext::new();
        stmt::execute_block(body, &EvalContext::new(scope, self), &mut ctx);
        if let Some(err) = ctx.error {
            return Err(err);
        }
        Ok(())
    }

    /// Publishes a host-defined module as a ready scope, per the
    /// host-extension contract.
    pub fn register_module(&self, path: impl Into<PathBuf>, scope: Rc<Scope>) {
        self.cache
            .borrow_mut()
            .insert(path.into(), ModuleState::Ready(scope));
    }

    /// Resolves, loads, executes, and caches a module by dotted path,
    /// honoring the relative-vs-root resolution rule and the cycle
    /// protocol (spec.md §4.F). Non-relative paths are tried against every
    /// configured root in order; the first root `loader.load` resolves
    /// against wins.
    pub fn import_module(&self, dotted_path: &str, importer_dir: Option<&Path>) -> Result<Rc<Scope>> {
        let candidates = self.resolve_candidates(dotted_path, importer_dir);
        let mut last_err = None;

        for candidate in candidates {
            if let Some(state) = self.cache.borrow().get(&candidate) {
                tracing::debug!(path = %candidate.display(), "module cache hit");
                return Ok(match state {
                    ModuleState::Ready(scope) => scope.clone(),
                    ModuleState::InFlight(scope) => scope.clone(),
                });
            }

            let module_scope = Rc::new(Scope::child(self.primordials.clone()));
            self.cache
                .borrow_mut()
                .insert(candidate.clone(), ModuleState::InFlight(module_scope.clone()));

            let body = match self.loader.load(&candidate) {
                Ok(body) => body,
                Err(err) => {
                    self.cache.borrow_mut().remove(&candidate);
                    tracing::trace!(path = %candidate.display(), "module did not resolve against this root");
                    last_err = Some(err);
                    continue;
                }
            };

            tracing::debug!(path = %candidate.display(), "loaded module");
            let mut ctx = ExecContext::new();
            stmt::execute_block(
                &body,
                &EvalContext::new(module_scope.clone(), self),
                &mut ctx,
            );

            if let Some(err) = ctx.error {
                self.cache.borrow_mut().remove(&candidate);
                return Err(err);
            }

            self.cache
                .borrow_mut()
                .insert(candidate, ModuleState::Ready(module_scope.clone()));
            return Ok(module_scope);
        }

        Err(last_err.expect("resolve_candidates always yields at least one candidate"))
    }

    /// The ordered list of filesystem paths `dotted_path` could resolve to:
    /// a single importer-relative path for `.`-prefixed paths, or one
    /// candidate per configured root (in order) otherwise.
    fn resolve_candidates(&self, dotted_path: &str, importer_dir: Option<&Path>) -> Vec<PathBuf> {
        let relative = dotted_path.starts_with('.');
        let mut file_path = PathBuf::new();
        let trimmed = dotted_path.trim_start_matches('.');
        for (i, segment) in trimmed.split('.').enumerate() {
            if i > 0 {
                file_path.push(segment);
            } else {
                file_path = PathBuf::from(segment);
            }
        }
        file_path.set_extension("snek");

        if relative {
            let path = importer_dir.map(|dir| dir.join(&file_path)).unwrap_or(file_path);
            vec![path]
        } else if self.roots.is_empty() {
            vec![file_path]
        } else {
            self.roots.iter().map(|root| root.join(&file_path)).collect()
        }
    }

    /// Given a callee and evaluated arguments, runs the full call protocol
    /// (spec.md §4.F): build the message, check arity, check per-parameter
    /// types, invoke the body, check the return type.
    pub fn call(&self, func: &FuncValue, args: Vec<Value>, call_position: &Position) -> Result<Value> {
        tracing::trace!(params = func.params.len(), "dispatching call");
        let message = Message::build(&func.params, args, call_position)?;

        for (param, value) in func.params.iter().zip(message.positional.iter()) {
            let element_check = |v: &Value| {
                if !param.ty.accepts_value(v) {
                    Err(Diagnostic::type_error(
                        call_position.clone(),
                        format!("{} cannot be assigned to {}.", v.type_of(), param.ty),
                    ))
                } else {
                    Ok(())
                }
            };
            if param.rest {
                let Value::List(items) = value else {
                    unreachable!("rest parameters are always collected into a List by Message::build")
                };
                for item in items.iter() {
                    element_check(item)?;
                }
            } else {
                element_check(value)?;
            }
        }

        let result = match &func.body {
            FuncBody::Block(stmts) => {
                let call_scope = Rc::new(Scope::child(func.captured.clone()));
                for (param, value) in func.params.iter().zip(message.positional.iter()) {
                    call_scope.bind_variable(param.name, value.clone(), false);
                }
                let mut ctx = ExecContext::new();
                stmt::execute_block(stmts, &EvalContext::new(call_scope, self), &mut ctx);
                if let Some(err) = ctx.error {
                    return Err(err);
                }
                match ctx.jump {
                    Jump::Return => ctx.value,
                    _ => Value::Null,
                }
            }
            FuncBody::Native(callback) => callback(self, &message)?,
        };

        if let Some(return_type) = &func.return_type {
            if !return_type.accepts_value(&result) {
                return Err(Diagnostic::type_error(
                    call_position.clone(),
                    format!("{} cannot be assigned to {}.", result.type_of(), return_type),
                ));
            }
        }

        Ok(result)
    }
}

/// The named+positional argument bundle constructed at call sites (spec.md
/// glossary: "Message").
pub struct Message {
    positional: Vec<Value>,
    named: FxHashMap<InternedString, Value>,
}

impl Message {
    fn build(params: &[ParamValue], args: Vec<Value>, position: &Position) -> Result<Self> {
        let mut positional = Vec::new();
        let mut named = FxHashMap::default();
        let mut args_iter = args.into_iter();

        for param in params {
            if param.rest {
                let rest: Vec<Value> = args_iter.by_ref().collect();
                let rest_value = Value::list(rest);
                named.insert(param.name, rest_value.clone());
                positional.push(rest_value);
                continue;
            }
            let value = match args_iter.next() {
                Some(v) => v,
                None => match &param.default_value {
                    Some(v) => v.clone(),
                    None => {
                        return Err(Diagnostic::type_error(
                            position.clone(),
                            "Not enough arguments.",
                        ));
                    }
                },
            };
            named.insert(param.name, value.clone());
            positional.push(value);
        }

        if args_iter.next().is_some() {
            return Err(Diagnostic::type_error(position.clone(), "Too many arguments."));
        }

        Ok(Message { positional, named })
    }

    pub fn at(&self, index: usize) -> Option<&Value> {
        self.positional.get(index)
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.named.iter().find(|(k, _)| k.as_str() == name).map(|(_, v)| v)
    }
}

/// One function a host extension publishes into a module, per
/// `examples/original_source/include/snek/api.hpp`'s `FuncDefinition`.
pub struct FuncDefinition {
    pub name: InternedString,
    pub params: Vec<ParamValue>,
    pub return_type: Option<Type>,
    pub callback: HostCallback,
}

/// One type alias a host extension publishes into a module, per the
/// original's `TypeDefinition`.
pub struct TypeDefinition {
    pub name: InternedString,
    pub ty: Type,
}

/// Builds an exportable scope from host-defined functions and types
/// (spec.md §6, `create_module(functions, types)`).
pub struct ModuleBuilder {
    functions: Vec<FuncDefinition>,
    types: Vec<TypeDefinition>,
}

impl ModuleBuilder {
    pub fn new() -> Self {
        Self {
            functions: Vec::new(),
            types: Vec::new(),
        }
    }

    pub fn function(mut self, def: FuncDefinition) -> Self {
        self.functions.push(def);
        self
    }

    pub fn ty(mut self, def: TypeDefinition) -> Self {
        self.types.push(def);
        self
    }

    pub fn build(self, primordials: Rc<Scope>) -> Rc<Scope> {
        let scope = Rc::new(Scope::child(primordials));
        for def in self.functions {
            let func = Value::Func(Rc::new(FuncValue {
                params: def.params,
                body: FuncBody::Native(def.callback),
                return_type: def.return_type,
                captured: scope.clone(),
            }));
            scope.bind_variable(def.name, func, true);
        }
        for def in self.types {
            scope.bind_type(def.name, def.ty, true);
        }
        scope
    }
}

impl Default for ModuleBuilder {
    fn default() -> Self {
        Self::new()
    }
}
